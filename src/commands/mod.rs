//! Command implementations for mimic.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. `ask` is the interface an external harness drives when
//! it runs the agent as a subprocess; `capabilities` exists for manual
//! inspection.

use crate::cli::{AskArgs, Command};
use chrono::{DateTime, Utc};
use mimic::classify::{self, Analysis, QueryKind};
use mimic::config::Config;
use mimic::error::{MimicError, Result};
use mimic::respond::respond;
use serde::Serialize;
use std::io::Read;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Ask(args) => cmd_ask(args),
        Command::Capabilities => cmd_capabilities(),
    }
}

/// JSON report emitted by `ask --json`.
///
/// Single-line JSON so harness logs stay one record per line.
#[derive(Debug, Serialize)]
struct AskReport<'a> {
    agent: &'a str,
    version: &'a str,
    host: String,
    ts: DateTime<Utc>,
    prompt: &'a str,
    response: &'a str,
    analysis: &'a Analysis,
}

fn cmd_ask(args: AskArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    let prompt = read_prompt(&args)?;

    let reply = respond(&prompt, &config);

    if args.explain {
        eprintln!("Analysis:");
        eprintln!("  Kind:        {}", reply.analysis.kind);
        eprintln!("  Confidence:  {:.0}%", reply.analysis.confidence * 100.0);
        eprintln!("  Complexity:  {}", reply.analysis.complexity);
        eprintln!("  Reasoning:   {}", reply.analysis.reasoning);
    }

    if args.json {
        let report = AskReport {
            agent: &config.agent_name,
            version: env!("CARGO_PKG_VERSION"),
            host: host_string(),
            ts: Utc::now(),
            prompt: &prompt,
            response: &reply.text,
            analysis: &reply.analysis,
        };
        let line = serde_json::to_string(&report).map_err(|e| {
            MimicError::UserError(format!("failed to serialize report to JSON: {}", e))
        })?;
        println!("{}", line);
    } else {
        println!("{}", reply.text);
    }

    Ok(())
}

/// Resolve the prompt from the arguments or stdin.
///
/// An empty prompt read from stdin is allowed (the agent answers it with
/// the clarification message); a missing prompt argument is a user error.
fn read_prompt(args: &AskArgs) -> Result<String> {
    if args.stdin {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| MimicError::UserError(format!("failed to read prompt from stdin: {}", e)))?;
        return Ok(buffer.trim_end().to_string());
    }

    if args.prompt.is_empty() {
        return Err(MimicError::UserError(
            "no prompt given.\n\n\
             Pass the prompt as arguments or pipe it via --stdin:\n  \
             mimic ask \"What is 17 * 23?\"\n  \
             echo \"What is 17 * 23?\" | mimic ask --stdin"
                .to_string(),
        ));
    }

    Ok(args.prompt.join(" "))
}

fn cmd_capabilities() -> Result<()> {
    println!("Response categories:");
    println!();

    for (domain, kind, keywords) in classify::domains() {
        println!("  {} (domain: {}):", kind, domain);
        println!("    Triggers: {}", summarize_keywords(keywords));
        println!();
    }

    println!("  {}:", QueryKind::Mathematical);
    println!("    Triggers: arithmetic expressions (\"17 * 23\"), percentages (\"15% of 80\")");
    println!();
    println!("  {}:", QueryKind::General);
    println!("    Fallback when nothing else matches.");

    Ok(())
}

/// First few keywords of a table, with a count for the rest.
fn summarize_keywords(keywords: &[&str]) -> String {
    const SHOWN: usize = 6;
    if keywords.len() <= SHOWN {
        keywords.join(", ")
    } else {
        format!(
            "{}, … ({} more)",
            keywords[..SHOWN].join(", "),
            keywords.len() - SHOWN
        )
    }
}

fn host_string() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}
