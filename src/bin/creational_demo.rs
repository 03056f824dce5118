use colored::Colorize;
use creational_patterns::{demo, DemoConfig, DemoError, OutputFormat, Transcript};
use std::env;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn run() -> Result<(), DemoError> {
    // optional first argument: path to a TOML demo config
    let config = match env::args().nth(1) {
        Some(path) => DemoConfig::load(Path::new(&path))?,
        None => DemoConfig::default(),
    };

    if !config.color {
        colored::control::set_override(false);
    }

    let mut transcript = match config.output {
        OutputFormat::Text => Transcript::echoing(),
        OutputFormat::Json => Transcript::new(),
    };
    demo::run(&config, &mut transcript)?;

    if config.output == OutputFormat::Json {
        println!("{}", transcript.to_json()?);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
