//! Content security for FAQ answers: the static sanitization policy, the
//! `ammonia`-backed sanitizer, and the advisory validators that explain to
//! authors what sanitization will remove or what markup is broken.

pub mod policy;
pub mod sanitizer;
pub mod scanner;
pub mod syntax;

pub use policy::{SANITIZE_CONFIG, SanitizeConfig};
pub use sanitizer::AmmoniaSanitizer;
pub use scanner::validate_html;
pub use syntax::{
    SELF_CLOSING_TAGS, TagStackEntry, extract_tags, truncate_tag, validate_html_syntax,
};
