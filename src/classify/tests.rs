//! Tests for prompt classification.

use crate::classify::{Analysis, Classifier, Complexity, QueryKind, domains, known_domains};
use std::collections::BTreeMap;

fn analyze(prompt: &str) -> Analysis {
    Classifier::new().analyze(prompt)
}

#[test]
fn arithmetic_prompt_is_mathematical() {
    let analysis = analyze("What is 17 * 23?");
    assert_eq!(analysis.kind, QueryKind::Mathematical);
    assert!((analysis.confidence - 0.95).abs() < f64::EPSILON);
    assert_eq!(analysis.complexity, Complexity::Basic);
}

#[test]
fn written_arithmetic_is_mathematical() {
    let analysis = analyze("17 times 23 please");
    assert_eq!(analysis.kind, QueryKind::Mathematical);
}

#[test]
fn percentage_prompt_is_mathematical() {
    let analysis = analyze("What is 15% of 80?");
    assert_eq!(analysis.kind, QueryKind::Mathematical);
}

#[test]
fn security_vocabulary_selects_security() {
    let analysis = analyze("How should we handle authentication and encryption for the login service?");
    assert_eq!(analysis.kind, QueryKind::Security);
    assert!(analysis.confidence > 0.0);
    assert!(analysis.reasoning.contains("security"));
}

#[test]
fn ethics_vocabulary_selects_compliance() {
    let analysis = analyze("Is it ethical to collect user data without consent?");
    assert_eq!(analysis.kind, QueryKind::Compliance);
}

#[test]
fn phrase_patterns_boost_architecture() {
    let analysis =
        analyze("Design a scalable system architecture for real-time collaboration features");
    assert_eq!(analysis.kind, QueryKind::Architectural);
    // Keyword score alone is weak here; pattern bonuses push it to the cap.
    assert!((analysis.confidence - 0.95).abs() < f64::EPSILON);
    assert_eq!(analysis.complexity, Complexity::Advanced);
}

#[test]
fn business_vocabulary_selects_strategic() {
    let analysis =
        analyze("Run a competitive analysis of our market positioning against existing frameworks");
    assert_eq!(analysis.kind, QueryKind::Strategic);
}

#[test]
fn reasoning_vocabulary_selects_reasoning() {
    let analysis =
        analyze("Explain why the logical conclusion follows from the premise, step by step");
    assert_eq!(analysis.kind, QueryKind::Reasoning);
}

#[test]
fn creative_vocabulary_selects_creative() {
    let analysis = analyze("Brainstorm some creative metaphors and imagine new directions");
    assert_eq!(analysis.kind, QueryKind::Creative);
}

#[test]
fn innovation_vocabulary_selects_innovation() {
    let analysis = analyze("How will quantum computing and blockchain change emerging industries?");
    assert_eq!(analysis.kind, QueryKind::Innovation);
    assert_eq!(analysis.complexity, Complexity::Expert);
}

#[test]
fn optimization_vocabulary_selects_optimization() {
    let analysis = analyze("Profile the cache latency and throughput bottlenecks");
    assert_eq!(analysis.kind, QueryKind::Optimization);
}

#[test]
fn unmatched_prompt_falls_back_to_general() {
    let analysis = analyze("Tell me about your favorite colour");
    assert_eq!(analysis.kind, QueryKind::General);
    assert!((analysis.confidence - 0.7).abs() < f64::EPSILON);
    assert_eq!(analysis.reasoning, "domain analysis identified: general");
}

#[test]
fn empty_prompt_is_general_with_zero_confidence() {
    for prompt in ["", "   ", "\n\t"] {
        let analysis = analyze(prompt);
        assert_eq!(analysis.kind, QueryKind::General);
        assert_eq!(analysis.confidence, 0.0);
        assert_eq!(analysis.reasoning, "empty prompt");
    }
}

#[test]
fn classification_is_case_insensitive() {
    let lower = analyze("describe the encryption threat model");
    let upper = analyze("DESCRIBE THE ENCRYPTION THREAT MODEL");
    assert_eq!(lower.kind, upper.kind);
    assert_eq!(lower.kind, QueryKind::Security);
}

#[test]
fn repeated_analysis_is_consistent() {
    let classifier = Classifier::new();
    let first = classifier.analyze("Is it ethical to collect user data without consent?");
    let second = classifier.analyze("Is it ethical to collect user data without consent?");
    assert_eq!(first.kind, second.kind);
    assert_eq!(first.complexity, second.complexity);
    assert_eq!(first.confidence, second.confidence);
    assert_eq!(first.reasoning, second.reasoning);
}

#[test]
fn confidence_never_exceeds_cap() {
    // Saturate one domain with keywords.
    let prompt = "vulnerability attack exploit penetration authentication authorization \
                  encryption cryptography threat security injection malware breach";
    let analysis = analyze(prompt);
    assert_eq!(analysis.kind, QueryKind::Security);
    assert!(analysis.confidence <= 0.95);
}

#[test]
fn extra_keywords_extend_a_domain() {
    let mut extra = BTreeMap::new();
    extra.insert("security".to_string(), vec!["moat".to_string()]);
    let classifier = Classifier::with_extra_keywords(&extra);

    let analysis = classifier.analyze("Should the castle dig a moat?");
    assert_eq!(analysis.kind, QueryKind::Security);

    // The stock classifier knows nothing about moats.
    let stock = Classifier::new().analyze("Should the castle dig a moat?");
    assert_eq!(stock.kind, QueryKind::General);
}

#[test]
fn extra_keywords_for_unknown_domain_are_skipped() {
    let mut extra = BTreeMap::new();
    extra.insert("webscale".to_string(), vec!["mongo".to_string()]);
    let classifier = Classifier::with_extra_keywords(&extra);

    let analysis = classifier.analyze("mongo");
    assert_eq!(analysis.kind, QueryKind::General);
}

#[test]
fn extra_keywords_match_case_insensitively() {
    let mut extra = BTreeMap::new();
    extra.insert("security".to_string(), vec!["Moat".to_string()]);
    let classifier = Classifier::with_extra_keywords(&extra);

    let analysis = classifier.analyze("dig a MOAT");
    assert_eq!(analysis.kind, QueryKind::Security);
}

#[test]
fn complexity_indicators_win_over_length() {
    let analysis = analyze("quantum");
    assert_eq!(analysis.complexity, Complexity::Expert);

    let analysis = analyze("optimize this");
    assert_eq!(analysis.complexity, Complexity::Advanced);

    let analysis = analyze("compare these two options for me");
    assert_eq!(analysis.complexity, Complexity::Intermediate);

    let analysis = analyze("what colour is the sky");
    assert_eq!(analysis.complexity, Complexity::Basic);
}

#[test]
fn complexity_falls_back_to_length() {
    let medium = "Please give me a long rambling overview of the weather across \
                  northern coastal towns during the early spring months this year.";
    assert!(medium.len() > 100);
    let analysis = analyze(medium);
    assert_eq!(analysis.complexity, Complexity::Intermediate);

    let analysis = analyze("tell me more");
    assert_eq!(analysis.complexity, Complexity::Basic);
}

#[test]
fn domain_listing_covers_all_known_domains() {
    let listed: Vec<&str> = domains().map(|(name, _, _)| name).collect();
    let known: Vec<&str> = known_domains().collect();
    assert_eq!(listed, known);
    assert!(listed.contains(&"security"));
    assert!(listed.contains(&"creative"));
    assert_eq!(listed.len(), 8);
}

#[test]
fn domain_listing_maps_business_to_strategic() {
    let (_, kind, keywords) = domains()
        .find(|(name, _, _)| *name == "business")
        .expect("business domain missing");
    assert_eq!(kind, QueryKind::Strategic);
    assert!(keywords.contains(&"market"));
}

#[test]
fn kind_and_complexity_names_are_stable() {
    assert_eq!(QueryKind::Mathematical.as_str(), "mathematical");
    assert_eq!(QueryKind::Strategic.to_string(), "strategic");
    assert_eq!(Complexity::Expert.as_str(), "expert");
    assert_eq!(Complexity::Basic.to_string(), "basic");
}
