//! Corpus sources and the timed fetch that snapshots them.
//!
//! Every corpus failure degrades to [`CorpusSnapshot::Unavailable`] at the
//! engine boundary; nothing here blocks a candidate on its own.
//!
//! [`CorpusSnapshot::Unavailable`]: postgate_checks::CorpusSnapshot::Unavailable

use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use postgate_core::errors::error_code;
use postgate_core::tracing::fields::CORPUS_FETCH_SPAN;
use postgate_core::{CorpusError, ICorpusSource};
use serde::Deserialize;

/// In-memory corpus.
#[derive(Debug, Clone, Default)]
pub struct StaticCorpus {
    entries: Vec<String>,
}

impl StaticCorpus {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

impl ICorpusSource for StaticCorpus {
    fn fetch_corpus(&self) -> Result<Vec<String>, CorpusError> {
        Ok(self.entries.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Corpus read from disk on every fetch.
///
/// Accepts a JSON array of strings, a JSON array of objects with a `body`
/// field, or JSON Lines of either.
#[derive(Debug, Clone)]
pub struct FileCorpus {
    path: PathBuf,
}

impl FileCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusRecord {
    Text(String),
    Post { body: String },
}

impl CorpusRecord {
    fn into_body(self) -> String {
        match self {
            Self::Text(body) | Self::Post { body } => body,
        }
    }
}

/// Parse corpus file content in any supported layout.
pub fn parse_corpus(content: &str) -> Result<Vec<String>, CorpusError> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        let records: Vec<CorpusRecord> =
            serde_json::from_str(trimmed).map_err(|e| CorpusError::Malformed {
                reason: e.to_string(),
            })?;
        return Ok(records.into_iter().map(CorpusRecord::into_body).collect());
    }
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str::<CorpusRecord>(line)
                .map(CorpusRecord::into_body)
                .map_err(|e| CorpusError::Malformed {
                    reason: format!("line {}: {e}", n + 1),
                })
        })
        .collect()
}

impl ICorpusSource for FileCorpus {
    fn fetch_corpus(&self) -> Result<Vec<String>, CorpusError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| CorpusError::Unavailable {
                reason: format!("{}: {e}", self.path.display()),
            })?;
        parse_corpus(&content)
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// A source that always fails. Useful for dry runs and fail-open tests.
#[derive(Debug, Clone)]
pub struct UnavailableCorpus {
    reason: String,
}

impl UnavailableCorpus {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ICorpusSource for UnavailableCorpus {
    fn fetch_corpus(&self) -> Result<Vec<String>, CorpusError> {
        Err(CorpusError::Unavailable {
            reason: self.reason.clone(),
        })
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

type FetchResult = Result<Vec<String>, CorpusError>;

/// Timed, fail-open access to one corpus source.
///
/// Each fetch runs on a worker thread and is awaited for at most the given
/// timeout. A worker that outlives its timeout is remembered, not replaced:
/// until it reports back, later fetches return `Unavailable` without
/// spawning, so a hung source costs one thread per fetcher. Fetches through
/// one fetcher are serialized.
pub struct CorpusFetcher {
    source: Arc<dyn ICorpusSource>,
    abandoned: Mutex<Option<Receiver<FetchResult>>>,
}

impl CorpusFetcher {
    pub fn new(source: Arc<dyn ICorpusSource>) -> Self {
        Self {
            source,
            abandoned: Mutex::new(None),
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Whether a timed-out worker has not reported back yet.
    pub fn has_pending_worker(&self) -> bool {
        self.abandoned
            .lock()
            .map(|slot| slot.as_ref().is_some_and(|rx| rx.is_empty()))
            .unwrap_or(false)
    }

    /// Fetch the corpus, waiting at most `timeout`. A panicking source is
    /// reported as unavailable.
    pub fn fetch(&self, timeout: Duration) -> FetchResult {
        let span = tracing::debug_span!(CORPUS_FETCH_SPAN, source = self.source.name());
        let _guard = span.enter();

        let mut abandoned = self.abandoned.lock().map_err(|_| CorpusError::Unavailable {
            reason: "corpus fetcher lock poisoned".to_string(),
        })?;
        if let Some(rx) = abandoned.as_ref() {
            match rx.try_recv() {
                Err(TryRecvError::Empty) => {
                    tracing::warn!(
                        code = error_code::CORPUS_UNAVAILABLE,
                        "previous corpus fetch still running, not starting another"
                    );
                    return Err(CorpusError::Unavailable {
                        reason: "previous corpus fetch is still running".to_string(),
                    });
                }
                // Late result of a timed-out fetch: stale, fetch again.
                Ok(_) | Err(TryRecvError::Disconnected) => {
                    tracing::debug!("abandoned corpus worker finished");
                    *abandoned = None;
                }
            }
        }

        let rx = spawn_worker(Arc::clone(&self.source))?;
        match rx.recv_timeout(timeout) {
            Ok(result) => {
                if let Ok(entries) = &result {
                    tracing::debug!(entries = entries.len(), "corpus fetched");
                }
                result
            }
            Err(RecvTimeoutError::Timeout) => {
                let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                tracing::warn!(
                    code = error_code::CORPUS_TIMEOUT,
                    timeout_ms,
                    "corpus fetch timed out, worker abandoned"
                );
                *abandoned = Some(rx);
                Err(CorpusError::Timeout { timeout_ms })
            }
            Err(RecvTimeoutError::Disconnected) => Err(CorpusError::Unavailable {
                reason: "fetch thread exited without a result".to_string(),
            }),
        }
    }
}

impl std::fmt::Debug for CorpusFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusFetcher")
            .field("source", &self.source.name())
            .field("pending_worker", &self.has_pending_worker())
            .finish()
    }
}

fn spawn_worker(source: Arc<dyn ICorpusSource>) -> Result<Receiver<FetchResult>, CorpusError> {
    let (tx, rx) = crossbeam_channel::bounded(1);
    std::thread::Builder::new()
        .name("postgate-corpus-fetch".to_string())
        .spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| source.fetch_corpus()))
                .unwrap_or_else(|_| {
                    Err(CorpusError::Unavailable {
                        reason: "corpus source panicked".to_string(),
                    })
                });
            // Capacity 1 and a single send: never blocks, even if nobody waits.
            let _ = tx.send(result);
        })
        .map_err(|e| CorpusError::Unavailable {
            reason: format!("could not start fetch thread: {e}"),
        })?;
    Ok(rx)
}
