//! im-checkdigit CLI
//!
//! Validate, compute and extract check-digit codes from the command line.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use im_checkdigit::{upce, CheckConfig, Family, Validator};

#[derive(Parser)]
#[command(name = "im-checkdigit", version, about = "Compute and validate check digits")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate one or more codes of a family
    Validate {
        family: Family,
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Print the check digit for a payload
    Compute { family: Family, payload: String },
    /// Print the payload with its check digit appended
    Complete { family: Family, payload: String },
    /// Expand a 7- or 8-digit UPC-E to UPC-A
    Expand { code: String },
    /// Find codes in text (argument or stdin)
    Extract { text: Option<String> },
    /// List supported families
    Families,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CheckConfig::load(path)?,
        None => CheckConfig::default(),
    };
    tracing::debug!(?config, "configuration loaded");
    let validator = Validator::new(config);

    match cli.command {
        Command::Validate { family, codes } => {
            let mut all_valid = true;
            for code in &codes {
                let result = validator.check(family, code);
                all_valid &= result.is_ok();
                if cli.json {
                    let line = match &result {
                        Ok(outcome) => json!({
                            "code": code,
                            "family": family,
                            "valid": true,
                            "outcome": outcome,
                        }),
                        Err(err) => json!({
                            "code": code,
                            "family": family,
                            "valid": false,
                            "kind": err.kind(),
                            "error": err.to_string(),
                        }),
                    };
                    println!("{line}");
                } else {
                    match &result {
                        Ok(_) => println!("{code}\tvalid"),
                        Err(err) => println!("{code}\tinvalid\t{err}"),
                    }
                }
            }
            if !all_valid {
                process::exit(1);
            }
        }
        Command::Compute { family, payload } => {
            let check = validator.compute_check_digit(family, &payload)?;
            if cli.json {
                let line = json!({
                    "family": family,
                    "payload": payload,
                    "check_digit": check.to_string(),
                });
                println!("{line}");
            } else {
                println!("{check}");
            }
        }
        Command::Complete { family, payload } => {
            let code = validator.complete(family, &payload)?;
            if cli.json {
                println!("{}", json!({ "family": family, "code": code }));
            } else {
                println!("{code}");
            }
        }
        Command::Expand { code } => {
            let normalized = validator.normalize(&code);
            let upca = upce::upce_to_upca(&normalized)?;
            if cli.json {
                println!("{}", json!({ "upce": normalized, "upca": upca }));
            } else {
                println!("{upca}");
            }
        }
        Command::Extract { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let codes = validator.extract(&text);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&codes)?);
            } else {
                for code in &codes {
                    println!("{}\t{}", code.family, code.value);
                }
            }
        }
        Command::Families => {
            if cli.json {
                let families: Vec<_> = Family::all()
                    .iter()
                    .map(|f| {
                        json!({
                            "name": f.name(),
                            "display_name": f.display_name(),
                            "lengths": f.accepted_lengths(),
                            "algorithm": f.algorithm(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&families)?);
            } else {
                for f in Family::all() {
                    let lengths: Vec<String> =
                        f.accepted_lengths().iter().map(|l| l.to_string()).collect();
                    println!(
                        "{:<8} {:<8} {:<8} {}",
                        f.name(),
                        f.display_name(),
                        lengths.join("/"),
                        f.algorithm().display_name()
                    );
                }
            }
        }
    }

    Ok(())
}
