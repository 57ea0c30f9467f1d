//! Scripted agent under test for AI benchmarking harnesses.
//!
//! Mimic answers natural-language prompts with canned, category-routed
//! responses. An external harness supplies prompts and scores what comes
//! back; the whole contract is one synchronous call:
//!
//! ```
//! use mimic::config::Config;
//!
//! let reply = mimic::respond("What is 17 * 23?", &Config::default());
//! assert!(reply.text.contains("391"));
//! ```
//!
//! Responses are a deterministic or semi-deterministic function of the
//! prompt: the selected category and complexity are stable across calls,
//! while some bodies embed a timestamp. No state survives a call, so the
//! harness may invoke the agent sequentially or in parallel.

pub mod classify;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod respond;

pub use respond::{Reply, respond};
