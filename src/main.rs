use std::env;
use std::process;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use clex::{scan_file, TokenReport};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut json = false;
    let mut show_tokens = false;
    let mut input_path: Option<String> = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--tokens" => show_tokens = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Usage: clex <file> [--json] [--tokens]");
                process::exit(2);
            }
            _ => input_path = Some(arg),
        }
    }

    let path = match input_path {
        Some(p) => p,
        None => {
            eprintln!("Usage: clex <file> [--json] [--tokens]");
            process::exit(2);
        }
    };

    if let Err(e) = run(&path, json, show_tokens) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(path: &str, json: bool, show_tokens: bool) -> Result<()> {
    let result = scan_file(path).with_context(|| format!("failed to scan {path}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Cleaned-up Input:\n{}\n", result.cleaned);

    if show_tokens {
        for token in &result.tokens {
            println!("{token}");
        }
        println!();
    }

    print!("{}", TokenReport::from_tokens(&result.tokens));
    Ok(())
}
