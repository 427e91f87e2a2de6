use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Receiver;

use postgate_core::{CorpusError, ICorpusSource, PostgateErrorCode};
use postgate_engine::corpus::parse_corpus;
use postgate_engine::{CorpusFetcher, FileCorpus, StaticCorpus, UnavailableCorpus};
use test_fixtures::{fixture_path, load_corpus};

fn write_temp(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corpus.json");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn json_array_of_strings() {
    assert_eq!(parse_corpus(r#"["a", "b"]"#).unwrap(), vec!["a", "b"]);
}

#[test]
fn json_array_of_posts_with_extra_fields() {
    let parsed = parse_corpus(r#"[{"id": 1, "body": "first"}, {"body": "second", "title": "t"}]"#);
    assert_eq!(parsed.unwrap(), vec!["first", "second"]);
}

#[test]
fn json_lines_skip_blank_lines() {
    let content = "{\"body\": \"one\"}\n\n\"two\"\n";
    assert_eq!(parse_corpus(content).unwrap(), vec!["one", "two"]);
}

#[test]
fn empty_file_is_an_empty_corpus() {
    assert!(parse_corpus("  \n").unwrap().is_empty());
}

#[test]
fn malformed_content_names_the_line() {
    let err = parse_corpus("{\"body\": \"ok\"}\n{not json}\n").unwrap_err();
    assert_eq!(err.error_code(), "CORPUS_MALFORMED");
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn file_corpus_reads_both_fixture_layouts() {
    let from_array = FileCorpus::new(fixture_path("corpus/accepted.json"))
        .fetch_corpus()
        .unwrap();
    let from_lines = FileCorpus::new(fixture_path("corpus/accepted.jsonl"))
        .fetch_corpus()
        .unwrap();
    assert_eq!(from_array, load_corpus());
    assert_eq!(from_lines, from_array);
}

#[test]
fn file_corpus_reads_temp_file() {
    let (_dir, path) = write_temp(r#"["only entry"]"#);
    assert_eq!(FileCorpus::new(&path).fetch_corpus().unwrap(), vec!["only entry"]);
}

#[test]
fn missing_file_is_unavailable() {
    let err = FileCorpus::new("/definitely/not/here.json")
        .fetch_corpus()
        .unwrap_err();
    assert!(matches!(err, CorpusError::Unavailable { .. }));
}

#[test]
fn timed_fetch_returns_source_result() {
    let fetcher = CorpusFetcher::new(Arc::new(StaticCorpus::new(vec!["x".into()])));
    assert_eq!(fetcher.fetch(Duration::from_secs(1)).unwrap(), vec!["x"]);
    assert_eq!(fetcher.source_name(), "static");

    let failing = CorpusFetcher::new(Arc::new(UnavailableCorpus::new("down")));
    let err = failing.fetch(Duration::from_secs(1)).unwrap_err();
    assert_eq!(err, CorpusError::Unavailable { reason: "down".into() });
}

struct Sleepy;

impl ICorpusSource for Sleepy {
    fn fetch_corpus(&self) -> Result<Vec<String>, CorpusError> {
        std::thread::sleep(Duration::from_millis(500));
        Ok(Vec::new())
    }
}

#[test]
fn timed_fetch_gives_up_after_timeout() {
    let fetcher = CorpusFetcher::new(Arc::new(Sleepy));
    let err = fetcher.fetch(Duration::from_millis(20)).unwrap_err();
    assert_eq!(err, CorpusError::Timeout { timeout_ms: 20 });
    assert_eq!(err.error_code(), "CORPUS_TIMEOUT");
    assert!(fetcher.has_pending_worker());
}

/// Blocks every fetch until released, counting how many fetches started.
struct Gated {
    started: AtomicUsize,
    release: Receiver<()>,
}

impl ICorpusSource for Gated {
    fn fetch_corpus(&self) -> Result<Vec<String>, CorpusError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let _ = self.release.recv_timeout(Duration::from_secs(5));
        Ok(vec!["late".to_string()])
    }
}

#[test]
fn hung_source_keeps_a_single_worker() {
    let (release_tx, release_rx) = crossbeam_channel::unbounded();
    let source = Arc::new(Gated {
        started: AtomicUsize::new(0),
        release: release_rx,
    });
    let fetcher = CorpusFetcher::new(source.clone());

    let first = fetcher.fetch(Duration::from_millis(20)).unwrap_err();
    assert_eq!(first, CorpusError::Timeout { timeout_ms: 20 });
    for _ in 0..3 {
        let err = fetcher.fetch(Duration::from_millis(20)).unwrap_err();
        assert!(
            matches!(&err, CorpusError::Unavailable { reason } if reason.contains("still running")),
            "{err}"
        );
    }
    assert_eq!(source.started.load(Ordering::SeqCst), 1);

    release_tx.send(()).unwrap();
    for _ in 0..200 {
        if !fetcher.has_pending_worker() {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    assert!(!fetcher.has_pending_worker());

    release_tx.send(()).unwrap();
    assert_eq!(fetcher.fetch(Duration::from_secs(2)).unwrap(), vec!["late"]);
    assert_eq!(source.started.load(Ordering::SeqCst), 2);
}
