use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skillrec::{Config, Error, Predictor, Result};

#[derive(Parser, Debug)]
#[command(name = "skillrec")]
#[command(version = "0.1.0")]
#[command(about = "Recommend group categories from a list of user skills")]
struct Args {
    /// JSON array of skill strings, e.g. '["python", "django"]'
    skills: Option<String>,

    /// Directory holding model.json and vectorizer.json
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// Indent the JSON output (the orchestrator expects the compact default)
    #[arg(long)]
    pretty: bool,
}

fn main() {
    // Logs go to stderr; stdout carries nothing but the result line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skillrec=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    match run(args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<String> {
    let raw = args
        .skills
        .ok_or_else(|| Error::Usage("no skills provided".to_string()))?;
    let skills = parse_skills(&raw)?;

    let config = match args.model_dir {
        Some(dir) => Config::with_model_dir(dir),
        None => Config::from_env()?,
    };

    let predictor = Predictor::load(&config)?;
    let recommendations = predictor.predict(&skills)?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&recommendations)?
    } else {
        serde_json::to_string(&recommendations)?
    };
    Ok(output)
}

fn parse_skills(raw: &str) -> Result<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| Error::Usage(format!("skills argument is not valid JSON: {}", e)))?;

    let items = value
        .as_array()
        .ok_or_else(|| Error::Usage("skills must be provided as a JSON array".to_string()))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| Error::Usage(format!("skill entries must be strings, got {}", item)))
        })
        .collect()
}
