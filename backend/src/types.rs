use thiserror::Error;

/// Input-contract violations. These are not masked: the run stops at the
/// first one, unlike unreadable input files which degrade to empty data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Not a verse reference: {0:?}")]
    VerseReference(String),

    #[error("Milestone id has no trailing number: {0:?}")]
    MilestoneId(String),

    #[error("Invalid word index: {0:?}")]
    WordIndex(String),
}

/// One line of delimited text split into fields.
pub type Row = Vec<String>;
