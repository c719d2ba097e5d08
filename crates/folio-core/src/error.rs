use thiserror::Error;

use crate::animation::LifecycleState;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Content error: {0}")]
    Content(String),

    #[error("Section not found: {0}")]
    UnknownSection(String),

    #[error("Element not found: {0}")]
    UnknownElement(String),

    #[error("Invalid lifecycle transition for component {component}: {from:?} -> {to:?}")]
    InvalidTransition {
        component: String,
        from: LifecycleState,
        to: LifecycleState,
    },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
