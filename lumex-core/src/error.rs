use thiserror::Error;

/// Contract violations surfaced by the view engine.
///
/// Data-shape anomalies (empty input, missing attributes, inverted date
/// ranges) are not errors; each component documents the default it falls
/// back to. The variants here mean the caller asked for something the
/// engine was never configured with.
#[derive(Error, Debug)]
pub enum ViewEngineError {
    #[error("Unknown filter kind: {0}")]
    UnknownFilterKind(String),

    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("Filter slot {index} out of range ({slots} slots)")]
    SlotOutOfRange { index: usize, slots: usize },
}

pub type Result<T> = std::result::Result<T, ViewEngineError>;
