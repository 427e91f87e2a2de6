//! End-to-end validation through the engine.

use std::sync::Arc;
use std::time::{Duration, Instant};

use postgate_checks::{registry, CheckContext, CheckDescriptor, Requirement};
use postgate_core::{
    CandidatePost, CheckError, CheckId, CheckOutcome, CheckPayload, Classification,
    CorpusError, ICorpusSource, IPostValidator, ModeFlag, PostgateConfig,
};
use postgate_engine::{StaticCorpus, UnavailableCorpus, ValidationEngine};
use test_fixtures::{load_corpus, load_scenario, load_scenarios, Scenario};

fn scenario_post(stem: &str) -> CandidatePost {
    let scenario: Scenario<CandidatePost> = load_scenario(stem);
    scenario.post
}

fn engine_with_corpus(entries: Vec<String>) -> ValidationEngine {
    ValidationEngine::default().with_corpus_source(Arc::new(StaticCorpus::new(entries)))
}

struct SlowCorpus(Duration);

impl ICorpusSource for SlowCorpus {
    fn fetch_corpus(&self) -> Result<Vec<String>, CorpusError> {
        std::thread::sleep(self.0);
        Ok(vec!["late".to_string()])
    }
}

struct PanickingCorpus;

impl ICorpusSource for PanickingCorpus {
    fn fetch_corpus(&self) -> Result<Vec<String>, CorpusError> {
        panic!("database driver exploded")
    }
}

// ---- Fixture scenarios ----

#[test]
fn fixture_scenarios_match_expected_verdicts() {
    let engine = engine_with_corpus(load_corpus());
    let scenarios: Vec<Scenario<CandidatePost>> = load_scenarios();
    for s in scenarios {
        let result = engine.validate(&s.post, true);
        assert_eq!(result.passes(), s.expected.passes, "{}: {:?}", s.name, result.issues());
        assert_eq!(
            result.issues().len(),
            s.expected.failing_checks.len(),
            "{}: {:?}",
            s.name,
            result.issues()
        );
        for name in &s.expected.failing_checks {
            let id: CheckId = name.parse().unwrap();
            assert!(result.has_issue_for(id), "{}: missing issue for {name}", s.name);
        }
        assert_eq!(
            result.warnings().len(),
            s.expected.warnings.len(),
            "{}: {:?}",
            s.name,
            result.warnings()
        );
        for name in &s.expected.warnings {
            let id: CheckId = name.parse().unwrap();
            assert!(result.has_warning_for(id), "{}: missing warning for {name}", s.name);
        }
    }
}

// ---- Scenario A: filler without a call to action ----

#[test]
fn filler_without_cta_fails_on_cta_only() {
    let body = "The quick brown fox jumps over the lazy dog. ".repeat(9);
    assert!(body.chars().count() >= 400);
    let post = CandidatePost::new("Filler", body);

    let result = ValidationEngine::default().validate(&post, false);

    assert!(!result.passes());
    assert_eq!(result.issues().len(), 1, "{:?}", result.issues());
    assert!(result.issues()[0].starts_with("CTA:"));
    assert!(result.detail("placeholders").unwrap().passed);
    assert!(result.detail("content_length").unwrap().passed);
}

// ---- Scenario B: normalized copy of a corpus entry ----

#[test]
fn normalized_copy_of_corpus_entry_is_rejected_as_near_duplicate() {
    let post = scenario_post("clean_post");
    let copy = post.body.to_uppercase().replace(' ', "   ");
    let mut corpus = load_corpus();
    corpus.push(copy);

    let result = engine_with_corpus(corpus).validate(&post, true);

    assert!(!result.passes());
    assert!(result
        .issues()
        .iter()
        .any(|i| i.starts_with("Duplicate:") && i.contains("near-duplicate")));
    match &result.detail("corpus_similarity").unwrap().payload {
        Some(CheckPayload::Similarity {
            ratio,
            closest,
            near_duplicate,
        }) => {
            assert!((ratio - 1.0).abs() < 1e-9, "ratio {ratio}");
            assert_eq!(*closest, Some(3));
            assert!(near_duplicate);
        }
        other => panic!("unexpected payload {other:?}"),
    }
    assert!(result.has_issue_for(CheckId::HookRepetition));
}

// ---- Scenario C: generic templated hook ----

#[test]
fn generic_hook_without_voice_fails_hook_authenticity() {
    let post = scenario_post("generic_hook");
    let result = ValidationEngine::default().validate(&post, false);
    assert!(!result.passes());
    assert!(result.has_issue_for(CheckId::HookAuthenticity));
    assert!(!result.detail("hook_authenticity").unwrap().passed);
}

// ---- Scenario D: corpus collaborator failure is fail-open ----

#[test]
fn failing_corpus_source_fails_open() {
    let post = scenario_post("clean_post");
    let engine = ValidationEngine::default()
        .with_corpus_source(Arc::new(UnavailableCorpus::new("connection refused")));

    let result = engine.validate(&post, true);

    assert!(result.passes(), "{:?}", result.issues());
    let similarity = result.detail("corpus_similarity").unwrap();
    assert!(similarity.passed);
    assert!(similarity.message.contains("could not compare"));
    assert!(similarity.message.contains("connection refused"));
    assert!(result.detail("hook_repetition").unwrap().passed);
}

#[test]
fn slow_corpus_times_out_and_fails_open() {
    let config = PostgateConfig::from_toml("[corpus]\nfetch_timeout_ms = 50\n").unwrap();
    let engine = ValidationEngine::new(config)
        .with_corpus_source(Arc::new(SlowCorpus(Duration::from_secs(2))));
    let post = scenario_post("clean_post");

    let started = Instant::now();
    let result = engine.validate(&post, true);

    assert!(started.elapsed() < Duration::from_secs(1));
    assert!(result.passes());
    assert!(result
        .detail("corpus_similarity")
        .unwrap()
        .message
        .contains("timed out"));
}

#[test]
fn repeated_calls_on_hung_corpus_stay_fast_and_open() {
    let config = PostgateConfig::from_toml("[corpus]\nfetch_timeout_ms = 50\n").unwrap();
    let engine = ValidationEngine::new(config)
        .with_corpus_source(Arc::new(SlowCorpus(Duration::from_secs(2))));
    let post = scenario_post("clean_post");

    let first = engine.validate(&post, true);
    assert!(first.detail("corpus_similarity").unwrap().message.contains("timed out"));

    let started = Instant::now();
    let second = engine.validate(&post, true);
    assert!(started.elapsed() < Duration::from_millis(500));
    assert!(second.passes());
    assert!(second
        .detail("corpus_similarity")
        .unwrap()
        .message
        .contains("still running"));
}

#[test]
fn panicking_corpus_source_fails_open() {
    let engine = ValidationEngine::default().with_corpus_source(Arc::new(PanickingCorpus));
    let result = engine.validate(&scenario_post("clean_post"), true);
    assert!(result.passes());
}

#[test]
fn missing_corpus_source_fails_open() {
    let result = ValidationEngine::default().validate(&scenario_post("clean_post"), true);
    assert!(result.passes());
    assert!(result.details().contains_key("corpus_similarity"));
}

#[test]
fn empty_corpus_means_no_duplicates() {
    let result = engine_with_corpus(Vec::new()).validate(&scenario_post("clean_post"), true);
    assert!(result.passes());
    assert!(result.detail("corpus_similarity").unwrap().passed);
}

// ---- Details eligibility ----

#[test]
fn details_hold_one_entry_per_eligible_check() {
    let engine = engine_with_corpus(load_corpus());
    let plain = scenario_post("clean_post");

    let without = engine.validate(&plain, false);
    assert_eq!(without.details().len(), 12);
    assert!(!without.details().contains_key("corpus_similarity"));
    assert!(!without.details().contains_key("hook_repetition"));
    assert!(!without.details().contains_key("technical_detail"));

    let with = engine.validate(&plain, true);
    assert_eq!(with.details().len(), 14);

    let showcase = plain.with_mode(ModeFlag::AutomationShowcase);
    let all = engine.validate(&showcase, true);
    assert_eq!(all.details().len(), CheckId::all().len());
}

// ---- Determinism ----

#[test]
fn validation_is_idempotent() {
    let engine = engine_with_corpus(load_corpus());
    for stem in ["clean_post", "leaky_template", "showcase_wall"] {
        let post = scenario_post(stem);
        let first = engine.validate(&post, true);
        let second = engine.validate(&post, true);
        assert_eq!(first, second, "{stem}");
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let config = PostgateConfig::from_toml("[engine]\nparallel = true\n").unwrap();
    let parallel = ValidationEngine::new(config);
    let sequential = ValidationEngine::default();
    let corpus = load_corpus();
    let scenarios: Vec<Scenario<CandidatePost>> = load_scenarios();
    for s in scenarios {
        assert_eq!(
            parallel.validate_with_corpus(&s.post, &corpus),
            sequential.validate_with_corpus(&s.post, &corpus),
            "{}",
            s.name
        );
    }
}

#[test]
fn issue_order_follows_registry_order() {
    let result = ValidationEngine::default().validate(&scenario_post("leaky_template"), false);
    let labels: Vec<&str> = result
        .issues()
        .iter()
        .map(|i| i.split(':').next().unwrap())
        .collect();
    assert_eq!(labels, vec!["Placeholders", "Internal labels", "Examples"]);
}

// ---- Classification ----

#[test]
fn demoted_check_becomes_a_warning() {
    let config = PostgateConfig::from_toml(
        "[classification]\ndemote_to_warning = [\"call_to_action\"]\n",
    )
    .unwrap();
    let filler = "The quick brown fox jumps over the lazy dog. ".repeat(9);
    let post = CandidatePost::new("Filler", filler);
    let result = ValidationEngine::new(config).validate(&post, false);
    assert!(result.passes());
    assert!(result.has_warning_for(CheckId::CallToAction));
}

#[test]
fn promoted_warning_blocks() {
    let config = PostgateConfig::from_toml(
        "[classification]\npromote_to_blocking = [\"authenticity_signals\"]\n",
    )
    .unwrap();
    let filler = "The quick brown fox jumps over the lazy dog. ".repeat(9);
    let post = CandidatePost::new("Filler", filler);
    let result = ValidationEngine::new(config).validate(&post, false);
    assert!(result.has_issue_for(CheckId::AuthenticitySignals));
    assert!(result.warnings().is_empty());
}

#[test]
fn thresholds_come_from_config() {
    let config = PostgateConfig::from_toml("[thresholds]\nmin_length = 2000\n").unwrap();
    let result = ValidationEngine::new(config).validate(&scenario_post("clean_post"), false);
    assert!(result.has_issue_for(CheckId::ContentLength));
}

// ---- Fault isolation ----

fn broken_pattern(_: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    Err(CheckError::PatternUnavailable { pattern: "RE_BROKEN" })
}

fn exploding(_: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    panic!("index out of bounds")
}

#[test]
fn faulting_checks_become_blocking_issues_without_hiding_others() {
    let mut checks: Vec<CheckDescriptor> = registry().to_vec();
    checks.push(CheckDescriptor::new(
        CheckId::HookCompleteness,
        Classification::Warning,
        Requirement::Always,
        broken_pattern,
    ));
    checks[0] = CheckDescriptor::new(
        CheckId::ContentLength,
        Classification::Blocking,
        Requirement::Always,
        exploding,
    );
    let engine = ValidationEngine::default().with_checks(checks);

    let result = engine.validate(&scenario_post("truncated"), false);

    assert!(!result.passes());
    assert!(result
        .issues()
        .iter()
        .any(|i| i == "Content length: check could not run (check panicked: index out of bounds)"));
    assert!(result
        .issues()
        .iter()
        .any(|i| i.starts_with("Hook completeness: check could not run")));
    assert!(result.has_issue_for(CheckId::Truncation));
    assert!(matches!(
        result.detail("content_length").unwrap().payload,
        Some(CheckPayload::Fault { .. })
    ));
}

// ---- Trait object use ----

#[test]
fn engine_works_behind_the_validator_trait() {
    let validator: Box<dyn IPostValidator> = Box::new(ValidationEngine::default());
    let result = validator.validate(&scenario_post("clean_post"), false);
    assert!(result.passes());
    assert!(result.issues().is_empty());
}
