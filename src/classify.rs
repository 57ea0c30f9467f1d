//! Prompt classification for response selection.
//!
//! The classifier scores the lowercased prompt against per-domain keyword
//! tables, adds a bonus for multi-word phrase patterns, and maps the winning
//! domain to a response category. Detection is purely lexical; no state
//! survives a call, so concurrent use from a harness is safe.
//!
//! A prompt that matches no domain but looks like a calculation request is
//! classified as mathematical. Anything else falls back to the general
//! category rather than an error.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Response category derived from a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Arithmetic or other calculation requests.
    Mathematical,
    /// Threats, hardening, and incident response.
    Security,
    /// System and infrastructure design.
    Architectural,
    /// Performance and resource efficiency.
    Optimization,
    /// Regulation, governance, and ethics.
    Compliance,
    /// Emerging technology.
    Innovation,
    /// Business and planning.
    Strategic,
    /// Logical analysis and decision making.
    Reasoning,
    /// Ideation and open-ended invention.
    Creative,
    /// Fallback when nothing else matches.
    General,
}

impl QueryKind {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Mathematical => "mathematical",
            QueryKind::Security => "security",
            QueryKind::Architectural => "architectural",
            QueryKind::Optimization => "optimization",
            QueryKind::Compliance => "compliance",
            QueryKind::Innovation => "innovation",
            QueryKind::Strategic => "strategic",
            QueryKind::Reasoning => "reasoning",
            QueryKind::Creative => "creative",
            QueryKind::General => "general",
        }
    }
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Complexity level assessed from the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl Complexity {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Basic => "basic",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
            Complexity::Expert => "expert",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of analyzing a prompt.
///
/// Derived data only: it selects a response strategy and is surfaced for
/// inspection (`--explain`, `--json`), never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// The selected response category.
    pub kind: QueryKind,
    /// Confidence in the category, in `[0.0, 0.95]`.
    pub confidence: f64,
    /// One-line explanation of how the category was chosen.
    pub reasoning: String,
    /// Assessed complexity level.
    pub complexity: Complexity,
}

/// Built-in keyword tables, one per knowledge domain.
///
/// Matching is substring containment on the lowercased prompt, so entries
/// should be long enough not to fire inside unrelated words.
const DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "security",
        &[
            "vulnerability",
            "vulnerabilities",
            "attack",
            "exploit",
            "penetration",
            "authentication",
            "authorization",
            "encryption",
            "cryptography",
            "threat",
            "security",
            "secure",
            "injection",
            "xss",
            "csrf",
            "malware",
            "breach",
            "firewall",
            "intrusion",
            "phishing",
        ],
    ),
    (
        "architecture",
        &[
            "scalable",
            "microservices",
            "distributed",
            "load balancing",
            "websocket",
            "database",
            "rest api",
            "graphql",
            "event-driven",
            "serverless",
            "architecture",
            "deployment",
            "infrastructure",
            "devops",
            "monitoring",
            "cloud",
            "error handling",
            "integration",
        ],
    ),
    (
        "optimization",
        &[
            "performance",
            "bottleneck",
            "bottlenecks",
            "concurrent",
            "parallel",
            "cache",
            "algorithm",
            "complexity",
            "efficient",
            "latency",
            "throughput",
            "optimize",
            "optimization",
            "profiling",
            "benchmark",
        ],
    ),
    (
        "compliance",
        &[
            "gdpr",
            "ccpa",
            "privacy",
            "regulation",
            "regulatory",
            "audit",
            "governance",
            "bias",
            "fairness",
            "compliance",
            "legal",
            "data protection",
            "consent",
            "ethics",
            "ethical",
            "responsible",
        ],
    ),
    (
        "innovation",
        &[
            "machine learning",
            "artificial intelligence",
            "quantum",
            "blockchain",
            "edge computing",
            "iot",
            "neural network",
            "5g",
            "innovation",
            "emerging",
            "self-improving",
            "adaptive learning",
            "augmented reality",
            "virtual reality",
        ],
    ),
    (
        "business",
        &[
            "strategy",
            "market",
            "competitive",
            "revenue",
            "roi",
            "kpi",
            "stakeholder",
            "business model",
            "value proposition",
            "monetization",
            "positioning",
            "go-to-market",
            "pricing",
        ],
    ),
    (
        "reasoning",
        &[
            "why does",
            "explain why",
            "reason about",
            "logic",
            "logical",
            "deduce",
            "infer",
            "syllogism",
            "premise",
            "conclusion",
            "trade-off",
            "tradeoff",
            "dilemma",
            "step by step",
        ],
    ),
    (
        "creative",
        &[
            "creative",
            "creativity",
            "brainstorm",
            "imagine",
            "invent",
            "write a story",
            "write a poem",
            "metaphor",
            "ideate",
            "lateral thinking",
            "originality",
        ],
    ),
];

/// Score added per phrase pattern match, on top of keyword scores.
const PATTERN_BONUS: f64 = 0.3;

/// Below this score a mathematical-looking prompt wins over the domain.
const WEAK_DOMAIN_SCORE: f64 = 0.2;

/// Multi-word phrase patterns that boost a domain beyond single keywords.
static PHRASE_PATTERNS: LazyLock<Vec<(&'static str, Vec<Regex>)>> = LazyLock::new(|| {
    let compile = |patterns: &[&str]| -> Vec<Regex> {
        patterns
            .iter()
            .map(|p| Regex::new(p).expect("invalid phrase pattern"))
            .collect()
    };
    vec![
        (
            "architecture",
            compile(&[
                r"design .*architecture",
                r"design .*system",
                r"real-time .*(?:features|collaboration)",
                r"ci/cd .*pipelines?",
                r"error handling .*recovery",
            ]),
        ),
        (
            "optimization",
            compile(&[
                r"performance .*bottlenecks?",
                r"concurrent .*(?:tests|requests)",
                r"optimization strateg(?:y|ies)",
            ]),
        ),
        (
            "innovation",
            compile(&[
                r"self-improving .*system",
                r"adaptive .*learning",
                r"quantum[ -]powered",
            ]),
        ),
        (
            "business",
            compile(&[
                r"competitive .*analysis",
                r"market .*positioning",
                r"compare .*(?:frameworks?|solutions)",
            ]),
        ),
    ]
});

/// Patterns that mark a prompt as a calculation request.
static MATH_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d+\s*[+\-*/^]\s*\d+",
        r"\b(?:sqrt|log|sin|cos|tan|exp|factorial)\b",
        r"\b(?:calculate|compute|solve|equation|formula)\b",
        r"\d+\s*(?:plus|minus|times|divided by)\s*\d+",
        r"\b(?:percentage|percent|ratio|proportion)\b|%",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid math pattern"))
    .collect()
});

/// Indicator words per complexity level, checked from expert down.
const COMPLEXITY_INDICATORS: &[(Complexity, &[&str])] = &[
    (
        Complexity::Expert,
        &["quantum", "distributed", "concurrent", "enterprise", "multi-domain"],
    ),
    (
        Complexity::Advanced,
        &["architect", "optimize", "integrate", "comprehensive", "sophisticated"],
    ),
    (
        Complexity::Intermediate,
        &["analyze", "compare", "design", "implement", "strategy"],
    ),
    (
        Complexity::Basic,
        &["what", "how", "simple", "basic", "introduction"],
    ),
];

/// Map a knowledge domain to its response category.
fn kind_for_domain(domain: &str) -> QueryKind {
    match domain {
        "security" => QueryKind::Security,
        "architecture" => QueryKind::Architectural,
        "optimization" => QueryKind::Optimization,
        "compliance" => QueryKind::Compliance,
        "innovation" => QueryKind::Innovation,
        "business" => QueryKind::Strategic,
        "reasoning" => QueryKind::Reasoning,
        "creative" => QueryKind::Creative,
        _ => QueryKind::General,
    }
}

/// Built-in domains with their category and trigger vocabulary.
///
/// Used by config validation and by the `capabilities` command.
pub fn domains() -> impl Iterator<Item = (&'static str, QueryKind, &'static [&'static str])> {
    DOMAIN_KEYWORDS
        .iter()
        .map(|(name, words)| (*name, kind_for_domain(name), *words))
}

/// Names of the known knowledge domains.
pub fn known_domains() -> impl Iterator<Item = &'static str> {
    DOMAIN_KEYWORDS.iter().map(|(name, _)| *name)
}

/// Classifies prompts into response categories.
///
/// Construction merges the built-in keyword tables with any configured
/// extras; analysis itself takes `&self` and allocates per call.
#[derive(Debug, Clone)]
pub struct Classifier {
    domains: Vec<(String, Vec<String>)>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Classifier with the built-in keyword tables.
    pub fn new() -> Self {
        let domains = DOMAIN_KEYWORDS
            .iter()
            .map(|(name, words)| {
                (
                    (*name).to_string(),
                    words.iter().map(|w| (*w).to_string()).collect(),
                )
            })
            .collect();
        Self { domains }
    }

    /// Classifier with extra keywords merged into the built-in tables.
    ///
    /// Keys that name no known domain are skipped here; `Config::validate`
    /// rejects them before this point.
    pub fn with_extra_keywords(extra: &BTreeMap<String, Vec<String>>) -> Self {
        let mut classifier = Self::new();
        for (domain, words) in extra {
            if let Some((_, table)) = classifier
                .domains
                .iter_mut()
                .find(|(name, _)| name == domain)
            {
                table.extend(words.iter().map(|w| w.to_lowercase()));
            }
        }
        classifier
    }

    /// Analyze a prompt and pick the response category.
    ///
    /// Total over all inputs: empty or whitespace-only prompts come back as
    /// general with zero confidence, everything else scores normally.
    pub fn analyze(&self, prompt: &str) -> Analysis {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Analysis {
                kind: QueryKind::General,
                confidence: 0.0,
                reasoning: "empty prompt".to_string(),
                complexity: Complexity::Basic,
            };
        }

        let lowered = trimmed.to_lowercase();
        let complexity = assess_complexity(trimmed);

        let mut scores: BTreeMap<&str, f64> = BTreeMap::new();
        for (domain, keywords) in &self.domains {
            let hits = keywords
                .iter()
                .filter(|keyword| lowered.contains(keyword.as_str()))
                .count();
            if hits > 0 {
                scores.insert(domain.as_str(), hits as f64 / keywords.len() as f64);
            }
        }
        for (domain, patterns) in PHRASE_PATTERNS.iter() {
            let hits = patterns.iter().filter(|p| p.is_match(&lowered)).count();
            if hits > 0 {
                *scores.entry(*domain).or_insert(0.0) += hits as f64 * PATTERN_BONUS;
            }
        }

        if let Some((&domain, &score)) = scores.iter().max_by(|a, b| a.1.total_cmp(b.1)) {
            // A weak domain hit loses to a clear calculation request.
            if score < WEAK_DOMAIN_SCORE && is_mathematical(&lowered) {
                return mathematical_analysis(complexity);
            }
            return Analysis {
                kind: kind_for_domain(domain),
                confidence: (score * 2.0).min(0.95),
                reasoning: format!("domain analysis identified: {} (score: {:.2})", domain, score),
                complexity,
            };
        }

        if is_mathematical(&lowered) {
            return mathematical_analysis(complexity);
        }

        Analysis {
            kind: QueryKind::General,
            confidence: 0.7,
            reasoning: "domain analysis identified: general".to_string(),
            complexity,
        }
    }
}

fn mathematical_analysis(complexity: Complexity) -> Analysis {
    Analysis {
        kind: QueryKind::Mathematical,
        confidence: 0.95,
        reasoning: "detected a mathematical expression or calculation request".to_string(),
        complexity,
    }
}

fn is_mathematical(lowered: &str) -> bool {
    MATH_PATTERNS.iter().any(|pattern| pattern.is_match(lowered))
}

/// Assess the complexity level of a prompt.
///
/// Indicator words win over length; the length fallback only applies when
/// no indicator matches.
fn assess_complexity(prompt: &str) -> Complexity {
    let lowered = prompt.to_lowercase();
    for (level, indicators) in COMPLEXITY_INDICATORS {
        if indicators.iter().any(|word| lowered.contains(word)) {
            return *level;
        }
    }

    if prompt.len() > 200 {
        Complexity::Advanced
    } else if prompt.len() > 100 {
        Complexity::Intermediate
    } else {
        Complexity::Basic
    }
}

#[cfg(test)]
mod tests;
