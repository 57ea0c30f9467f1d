//! Response generation.
//!
//! One generator per response category. Most categories return a canned
//! multi-section brief headed by the assessed complexity; the mathematical
//! generator computes real results. Every generator returns non-empty text
//! for every input, so the agent as a whole is total over prompts.
//!
//! Responses are a deterministic or semi-deterministic function of the
//! prompt: the category and structure are stable across calls, while the
//! general answer embeds a timestamp and the creative brief varies its
//! opening line by prompt.

pub mod math;

use crate::classify::{Analysis, Classifier, QueryKind};
use crate::config::Config;
use chrono::Utc;
use std::hash::{DefaultHasher, Hash, Hasher};

/// A response paired with the analysis that selected it.
#[derive(Debug, Clone)]
pub struct Reply {
    /// How the prompt was classified.
    pub analysis: Analysis,
    /// The response text. Never empty.
    pub text: String,
}

/// Produce a response for a prompt.
///
/// This is the single entry point an external harness relies on. It is
/// synchronous, stateless, and total: empty prompts get the configured
/// clarification message, unrecognized prompts get the general response.
pub fn respond(prompt: &str, config: &Config) -> Reply {
    let classifier = Classifier::with_extra_keywords(&config.extra_keywords);
    respond_with(&classifier, prompt, config)
}

/// Produce a response using an already-built classifier.
///
/// Avoids rebuilding the keyword tables when a harness issues many prompts
/// against one configuration.
pub fn respond_with(classifier: &Classifier, prompt: &str, config: &Config) -> Reply {
    let analysis = classifier.analyze(prompt);

    if prompt.trim().is_empty() {
        return Reply {
            analysis,
            text: config.clarify_message.clone(),
        };
    }

    let text = match analysis.kind {
        QueryKind::Mathematical => math::answer(prompt, &analysis),
        QueryKind::Security => security_brief(&analysis),
        QueryKind::Architectural => architecture_brief(&analysis),
        QueryKind::Optimization => optimization_brief(&analysis),
        QueryKind::Compliance => compliance_brief(&analysis),
        QueryKind::Innovation => innovation_brief(&analysis),
        QueryKind::Strategic => strategy_brief(&analysis),
        QueryKind::Reasoning => reasoning_brief(&analysis),
        QueryKind::Creative => creative_brief(prompt, &analysis),
        QueryKind::General => general_answer(&analysis),
    };

    Reply { analysis, text }
}

fn security_brief(analysis: &Analysis) -> String {
    format!(
        "Security analysis (complexity: {})\n\
         \n\
         Defense posture:\n\
         - Authentication: multi-factor, short-lived session tokens\n\
         - Authorization: role-based access control, least privilege\n\
         - Data protection: AES-256 at rest, TLS 1.3 in transit\n\
         - Input handling: validate and sanitize against injection\n\
         \n\
         Assessment program:\n\
         - Static analysis and dependency scanning in CI\n\
         - Scheduled penetration tests and red-team exercises\n\
         - Network segmentation and container image scanning\n\
         \n\
         Incident response:\n\
         - Detection: centralized alerting with threat intelligence feeds\n\
         - Containment: isolation playbooks, forensic preservation\n\
         - Recovery: tested backups and continuity procedures",
        analysis.complexity
    )
}

fn architecture_brief(analysis: &Analysis) -> String {
    format!(
        "Architecture proposal (complexity: {})\n\
         \n\
         Service design:\n\
         - Microservices around bounded contexts, an API gateway in front\n\
         - Asynchronous messaging for cross-service workflows\n\
         - Layer-7 load balancing with health checks and failover\n\
         \n\
         Data layer:\n\
         - Transactional store for writes, read replicas for queries\n\
         - Stream processing for real-time views\n\
         - Schema registry and lineage tracking for governance\n\
         \n\
         Operations:\n\
         - Containerized deployment with declarative infrastructure\n\
         - Progressive rollouts behind feature flags\n\
         - Metrics, traces, and structured logs from day one",
        analysis.complexity
    )
}

fn optimization_brief(analysis: &Analysis) -> String {
    format!(
        "Optimization plan (complexity: {})\n\
         \n\
         Measure first:\n\
         - Profile CPU and memory before changing anything\n\
         - Establish a benchmark baseline and track regressions\n\
         - Find the actual bottleneck; the guess is usually wrong\n\
         \n\
         Algorithmic wins:\n\
         - Reduce asymptotic cost on the hot path\n\
         - Choose data structures for the dominant access pattern\n\
         - Batch small operations to amortize fixed costs\n\
         \n\
         System-level wins:\n\
         - Cache at the highest layer that stays correct\n\
         - Pool connections and reuse allocations\n\
         - Parallelize only after the serial path is lean",
        analysis.complexity
    )
}

fn compliance_brief(analysis: &Analysis) -> String {
    format!(
        "Compliance and governance review (complexity: {})\n\
         \n\
         Data protection:\n\
         - Collect the minimum personal data needed for the feature\n\
         - Granular consent with straightforward withdrawal\n\
         - Deletion and export paths for user data requests\n\
         \n\
         Responsible use:\n\
         - Document intended use and known failure modes\n\
         - Audit outcomes for bias and disparate impact\n\
         - Keep a human in the loop for consequential decisions\n\
         \n\
         Audit readiness:\n\
         - Immutable logs of access to regulated data\n\
         - Periodic risk assessments against GDPR and CCPA obligations\n\
         - Named owners for each control",
        analysis.complexity
    )
}

fn innovation_brief(analysis: &Analysis) -> String {
    format!(
        "Emerging technology outlook (complexity: {})\n\
         \n\
         Near term:\n\
         - Foundation models fine-tuned on domain data\n\
         - On-device inference pushing latency to the edge\n\
         - Privacy-preserving training across data silos\n\
         \n\
         Watch list:\n\
         - Post-quantum cryptography migration timelines\n\
         - Digital twins for operational simulation\n\
         - Neuromorphic hardware for low-power inference\n\
         \n\
         Adoption guidance:\n\
         - Pilot behind an interface so the bet stays reversible\n\
         - Prefer boring technology where differentiation is absent\n\
         - Re-evaluate the landscape quarterly; it moves",
        analysis.complexity
    )
}

fn strategy_brief(analysis: &Analysis) -> String {
    format!(
        "Strategic assessment (complexity: {})\n\
         \n\
         Market view:\n\
         - Map the competitive landscape and substitution threats\n\
         - Segment customers by the job they hire the product for\n\
         - State the value proposition in one falsifiable sentence\n\
         \n\
         Execution:\n\
         - Phase delivery around the riskiest assumption first\n\
         - Decide build, buy, or partner per capability\n\
         - Tie each phase to a measurable outcome, not an output\n\
         \n\
         Risk:\n\
         - Scenario-plan best, worst, and most likely cases\n\
         - Watch for vendor lock-in and single points of revenue\n\
         - Revisit the plan when a load-bearing assumption breaks",
        analysis.complexity
    )
}

fn reasoning_brief(analysis: &Analysis) -> String {
    format!(
        "Reasoning walkthrough (complexity: {})\n\
         \n\
         Decompose:\n\
         - Separate what is known, what is assumed, and what is asked\n\
         - Trace causes backward before proposing fixes forward\n\
         - Name the constraint that actually binds\n\
         \n\
         Argue:\n\
         - Deduce from premises where they are solid\n\
         - Generalize from cases where they are plentiful\n\
         - Prefer the explanation that assumes the least\n\
         \n\
         Decide:\n\
         - Weigh options against explicit criteria\n\
         - State the trade-off being accepted, not just the choice\n\
         - Write down what evidence would change the conclusion",
        analysis.complexity
    )
}

/// Opening approaches for the creative brief.
///
/// One is selected per prompt; see `creative_brief`.
const CREATIVE_APPROACHES: &[&str] = &[
    "user-centered design thinking",
    "cross-industry idea transfer",
    "biomimicry, borrowing structure from natural systems",
    "lateral thinking to escape the default framing",
    "constraint inversion, treating each limit as a feature",
];

fn creative_brief(prompt: &str, analysis: &Analysis) -> String {
    let approach = CREATIVE_APPROACHES[prompt_fingerprint(prompt) % CREATIVE_APPROACHES.len()];
    format!(
        "Creative brief (complexity: {})\n\
         \n\
         Primary approach: {}\n\
         \n\
         Diverge:\n\
         - Generate many alternatives before judging any\n\
         - Recombine ideas from unrelated domains\n\
         - Suspend feasibility until the list is long\n\
         \n\
         Converge:\n\
         - Cluster the alternatives and name the themes\n\
         - Prototype the two most promising cheaply\n\
         - Let feedback, not attachment, pick the winner",
        analysis.complexity, approach
    )
}

/// Stable per-prompt selector for response variants.
///
/// Equal prompts land on equal variants within a process run, with no
/// shared state between calls.
fn prompt_fingerprint(prompt: &str) -> usize {
    let mut hasher = DefaultHasher::new();
    prompt.hash(&mut hasher);
    hasher.finish() as usize
}

fn general_answer(analysis: &Analysis) -> String {
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    format!(
        "General analysis (complexity: {})\n\
         \n\
         Query understanding:\n\
         - Confidence: {:.0}%\n\
         - Reasoning: {}\n\
         - Processed: {}\n\
         \n\
         Suggested next steps:\n\
         - State the goal and the constraints that bound it\n\
         - List what is known, what is assumed, and what is missing\n\
         - Start with a small prototype and iterate on feedback",
        analysis.complexity,
        analysis.confidence * 100.0,
        analysis.reasoning,
        now
    )
}
