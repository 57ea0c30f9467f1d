//! CLI argument parsing for mimic.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mimic: scripted agent under test for AI benchmarking harnesses.
///
/// Answers natural-language prompts with canned, category-routed responses
/// so an external harness has a predictable subject to score. The agent is
/// stateless: each invocation is independent.
#[derive(Parser, Debug)]
#[command(name = "mimic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for mimic.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer a prompt.
    ///
    /// Joins the arguments into a single prompt (or reads the whole prompt
    /// from standard input with --stdin) and prints the response to stdout.
    Ask(AskArgs),

    /// List response categories and their trigger vocabulary.
    Capabilities,
}

/// Arguments for the `ask` command.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The prompt, as one or more words.
    pub prompt: Vec<String>,

    /// Read the prompt from standard input instead of the arguments.
    #[arg(long, conflicts_with = "prompt")]
    pub stdin: bool,

    /// Emit a JSON report (agent, host, timestamp, analysis) instead of text.
    #[arg(long)]
    pub json: bool,

    /// Print the classification analysis to stderr.
    #[arg(long)]
    pub explain: bool,

    /// Path to the config file (default: $MIMIC_CONFIG, then ./mimic.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_ask_single_word() {
        let cli = Cli::try_parse_from(["mimic", "ask", "hello"]).unwrap();
        if let Command::Ask(args) = cli.command {
            assert_eq!(args.prompt, vec!["hello"]);
            assert!(!args.stdin);
            assert!(!args.json);
            assert!(!args.explain);
            assert!(args.config.is_none());
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn parse_ask_multi_word_prompt() {
        let cli = Cli::try_parse_from(["mimic", "ask", "What", "is", "17", "*", "23?"]).unwrap();
        if let Command::Ask(args) = cli.command {
            assert_eq!(args.prompt, vec!["What", "is", "17", "*", "23?"]);
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn parse_ask_quoted_prompt() {
        let cli = Cli::try_parse_from(["mimic", "ask", "What is 17 * 23?"]).unwrap();
        if let Command::Ask(args) = cli.command {
            assert_eq!(args.prompt, vec!["What is 17 * 23?"]);
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn parse_ask_stdin() {
        let cli = Cli::try_parse_from(["mimic", "ask", "--stdin"]).unwrap();
        if let Command::Ask(args) = cli.command {
            assert!(args.stdin);
            assert!(args.prompt.is_empty());
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn stdin_conflicts_with_a_prompt_argument() {
        let result = Cli::try_parse_from(["mimic", "ask", "--stdin", "hello"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_ask_flags() {
        let cli = Cli::try_parse_from([
            "mimic",
            "ask",
            "--json",
            "--explain",
            "--config",
            "custom.yaml",
            "hello",
        ])
        .unwrap();
        if let Command::Ask(args) = cli.command {
            assert!(args.json);
            assert!(args.explain);
            assert_eq!(args.config, Some(PathBuf::from("custom.yaml")));
            assert_eq!(args.prompt, vec!["hello"]);
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn parse_capabilities() {
        let cli = Cli::try_parse_from(["mimic", "capabilities"]).unwrap();
        assert!(matches!(cli.command, Command::Capabilities));
    }

    #[test]
    fn ask_without_prompt_parses() {
        // A missing prompt is a runtime user error, not a parse error, so
        // the message can point at --stdin.
        let cli = Cli::try_parse_from(["mimic", "ask"]).unwrap();
        if let Command::Ask(args) = cli.command {
            assert!(args.prompt.is_empty());
        } else {
            panic!("Expected Ask command");
        }
    }
}
