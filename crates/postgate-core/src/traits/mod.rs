//! Seams to external collaborators and to the orchestrator.

pub mod corpus_source;
pub mod validator;

pub use corpus_source::ICorpusSource;
pub use validator::IPostValidator;
