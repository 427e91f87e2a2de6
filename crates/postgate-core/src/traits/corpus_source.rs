use crate::errors::CorpusError;

/// Read access to the bodies of previously accepted posts.
///
/// Implementations may block and may fail. An empty corpus is valid and
/// means no duplicate is possible.
pub trait ICorpusSource: Send + Sync {
    fn fetch_corpus(&self) -> Result<Vec<String>, CorpusError>;

    /// Short name for logs.
    fn name(&self) -> &str {
        "corpus"
    }
}
