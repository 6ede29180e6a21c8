use std::fmt::Debug;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ForestError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForestError {
    #[error("element not found: {element}")]
    NotFound { element: String },
}

impl ForestError {
    pub fn not_found<T: Debug>(element: &T) -> Self {
        Self::NotFound {
            element: format!("{:?}", element),
        }
    }
}

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("line {line}: {source}")]
    Forest {
        line: usize,
        #[source]
        source: ForestError,
    },

    #[error("line {line}: expectation failed: {msg}")]
    Expectation { line: usize, msg: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScriptError {
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } | Self::Forest { line, .. } | Self::Expectation { line, .. } => {
                Some(*line)
            }
            Self::Io(_) => None,
        }
    }
}
