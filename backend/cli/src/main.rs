mod terminal_output;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use faqkit_config::WidgetConfig;
use faqkit_content::{ContentPipeline, RenderedFaqItem};
use faqkit_logging::{init_logger, LogSettings};

use terminal_output::{ellipsize, note_error, note_success, note_warn, render_table};

const SUMMARY_COLUMN_CHARS: usize = 48;

#[derive(Parser)]
#[command(name = "faqkit")]
#[command(about = "Render and check FAQ answer content")]
#[command(version)]
struct Cli {
    /// Log filter, overriding the config file (RUST_LOG still wins)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the safe HTML for one piece of content
    Render {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Content format: html, markdown or text
        #[arg(short, long, default_value = "html")]
        format: String,
    },
    /// Print author warnings for one piece of content
    Check {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Content format: html, markdown or text
        #[arg(short, long, default_value = "html")]
        format: String,
        /// Exit with a failure status when any warning is found
        #[arg(long)]
        strict: bool,
    },
    /// Render every item of a widget configuration
    Faq {
        /// YAML widget configuration
        config: PathBuf,
        /// Print rendered items as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            note_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Render { file, format } => {
            init_logger(&log_settings(cli.log_level, cli.log_json, None));
            let content = read_input(file.as_deref())?;
            println!("{}", faqkit_content::process_content(&content, &format));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            file,
            format,
            strict,
        } => {
            init_logger(&log_settings(cli.log_level, cli.log_json, None));
            let content = read_input(file.as_deref())?;
            let warnings = faqkit_content::get_content_warnings(&content, &format);
            if warnings.is_empty() {
                note_success("No issues found");
                return Ok(ExitCode::SUCCESS);
            }
            for warning in &warnings {
                note_warn(warning);
            }
            Ok(if strict {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Faq { config, json } => {
            let loaded = faqkit_config::load_config(&config)?;
            init_logger(&log_settings(cli.log_level, cli.log_json, Some(&loaded)));

            let prepared = faqkit_config::prepare(loaded);
            let items = ContentPipeline::with_defaults().render_items(&prepared.faq_items());
            info!(count = items.len(), config = %config.display(), "Rendered FAQ items");

            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                print_items(&items);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// CLI flags take precedence over the config file's `logging` section.
fn log_settings(level: Option<String>, json: bool, config: Option<&WidgetConfig>) -> LogSettings {
    let defaults = LogSettings::default();
    let logging = config.and_then(|c| c.logging.as_ref());

    LogSettings {
        level: level
            .or_else(|| logging.and_then(|l| l.level.clone()))
            .unwrap_or(defaults.level),
        json: json || logging.and_then(|l| l.json).unwrap_or(defaults.json),
        directory: logging.and_then(|l| l.directory.clone()),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_items(items: &[RenderedFaqItem]) {
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            vec![
                item.sort_order.to_string(),
                item.format.to_string(),
                item.warnings.len().to_string(),
                ellipsize(&item.summary, SUMMARY_COLUMN_CHARS),
            ]
        })
        .collect();
    print!("{}", render_table(&["Order", "Format", "Warnings", "Summary"], &rows));

    for item in items {
        println!();
        println!("## {}", item.summary);
        println!("{}", item.html);
        for warning in &item.warnings {
            note_warn(warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqkit_config::LoggingConfig;

    #[test]
    fn cli_flags_override_config_logging() {
        let config = WidgetConfig {
            logging: Some(LoggingConfig {
                level: Some("debug".to_string()),
                json: Some(false),
                directory: Some(PathBuf::from("/tmp/faqkit-logs")),
            }),
            ..Default::default()
        };

        let settings = log_settings(Some("warn".to_string()), true, Some(&config));
        assert_eq!(settings.level, "warn");
        assert!(settings.json);
        assert_eq!(settings.directory, Some(PathBuf::from("/tmp/faqkit-logs")));

        let settings = log_settings(None, false, Some(&config));
        assert_eq!(settings.level, "debug");
        assert!(!settings.json);
    }

    #[test]
    fn log_settings_default_without_config() {
        let settings = log_settings(None, false, None);
        assert_eq!(settings.level, "info");
        assert!(settings.directory.is_none());
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::parse_from(["faqkit", "check", "answer.md", "-f", "markdown", "--strict"]);
        match cli.command {
            Commands::Check {
                file,
                format,
                strict,
            } => {
                assert_eq!(file, Some(PathBuf::from("answer.md")));
                assert_eq!(format, "markdown");
                assert!(strict);
            }
            _ => panic!("expected check"),
        }

        let cli = Cli::parse_from([
            "faqkit",
            "--log-level",
            "debug",
            "faq",
            "widget.yaml",
            "--json",
        ]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Commands::Faq { json: true, .. }));
    }

    #[test]
    fn read_input_reports_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/faqkit/answer.md"))).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read"));
    }
}
