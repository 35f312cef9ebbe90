use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};

use super::{Cli, Commands};
use crate::classifier::{check_public_access, classify, to_embed_url};
use crate::scan::scan_text;

pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Classify { url, json } => run_classify(&url, json),
        Commands::Embed { url } => {
            println!("{}", to_embed_url(&url));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Access { url, json } => run_access(&url, json),
        Commands::Scan { text, json } => run_scan(text, json),
    }
}

fn run_classify(url: &str, json: bool) -> Result<ExitCode> {
    let result = classify(Some(url));

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_valid {
        println!("type: {}", result.file_type);
        if let Some(id) = &result.file_id {
            println!("file id: {id}");
        }
        if let Some(embed) = &result.embed_url {
            println!("embed: {embed}");
        }
    } else {
        for issue in &result.errors {
            eprintln!("{issue}");
        }
    }

    Ok(if result.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_access(url: &str, json: bool) -> Result<ExitCode> {
    let report = check_public_access(url);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_public {
        println!("no sharing concerns found");
    } else {
        for warning in &report.warnings {
            println!("{warning}");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_scan(text: Option<String>, json: bool) -> Result<ExitCode> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading text from stdin")?;
            buf
        }
    };

    let links = scan_text(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
    } else if links.is_empty() {
        println!("no links found");
    } else {
        for link in &links {
            let label = if link.classification.is_valid {
                link.classification.file_type.to_string()
            } else {
                "invalid".to_string()
            };
            println!("{label:8} {}", link.url);
        }
    }

    Ok(ExitCode::SUCCESS)
}
