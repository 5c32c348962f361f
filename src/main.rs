use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use viqc_bot::config::Config;
use viqc_bot::lex::LexEvent;
use viqc_bot::scoring::{
    calculate_score, validate_score, MatchInputs, SlotValue, ValidationResult,
};
use viqc_bot::Handler;

const EXIT_SUCCESS: i32 = 0;
const EXIT_HANDLER: i32 = 2;
const EXIT_INPUT: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Handle one Lex code hook event and print the response JSON
    Handle {
        /// Path to the event JSON ("-" or omitted reads stdin)
        event: Option<PathBuf>,

        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,
    },
    /// Validate and score a match directly
    Score {
        /// Number of scored risers
        #[arg(allow_hyphen_values = true)]
        risers: String,
        /// Number of completed rows
        #[arg(allow_hyphen_values = true)]
        rows: String,
        /// Number of completed stacks
        #[arg(allow_hyphen_values = true)]
        stacks: String,
    },
}

#[derive(Parser, Debug)]
#[command(name = "viqc-bot")]
#[command(about = "VEX IQ Challenge match scoring bot handler", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/viqc-bot/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let config = match viqc_bot::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let zone = match viqc_bot::config::validate_config(&config) {
        Ok(z) => z,
        Err(errors) => {
            eprintln!("Config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Err(e) = viqc_bot::logging::init(zone, cli.verbose) {
        eprintln!("{}", e);
    }

    let handler = Handler::from_config(&config);

    let code = match cli.command {
        Commands::Handle { event, pretty } => run_handle(&handler, event, pretty),
        Commands::Score {
            risers,
            rows,
            stacks,
        } => run_score(&config, &risers, &rows, &stacks),
    };

    std::process::exit(code);
}

fn read_event(path: Option<PathBuf>) -> Result<LexEvent> {
    let raw = match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(&p)
            .with_context(|| format!("Failed to read event file at {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read event from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Failed to parse Lex event JSON")
}

fn run_handle(handler: &Handler, path: Option<PathBuf>, pretty: bool) -> i32 {
    let event = match read_event(path) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            return EXIT_INPUT;
        }
    };

    let response = match handler.handle(&event) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "invocation failed");
            eprintln!("Handler error: {}", e);
            return EXIT_HANDLER;
        }
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    };
    match rendered {
        Ok(json) => {
            println!("{}", json);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize response: {}", e);
            EXIT_HANDLER
        }
    }
}

fn run_score(config: &Config, risers: &str, rows: &str, stacks: &str) -> i32 {
    if let ValidationResult::Invalid { slot, message } =
        validate_score(Some(risers), Some(rows), Some(stacks), config.bounds)
    {
        eprintln!("Invalid {}: {}", slot, message);
        return EXIT_INPUT;
    }

    let inputs = MatchInputs::new(
        SlotValue::parse(Some(risers)),
        SlotValue::parse(Some(rows)),
        SlotValue::parse(Some(stacks)),
    );
    let result = calculate_score(&inputs);
    let use_colors = viqc_bot::output::should_use_colors();
    println!("{}", viqc_bot::output::format_breakdown(&result, use_colors));

    EXIT_SUCCESS
}
