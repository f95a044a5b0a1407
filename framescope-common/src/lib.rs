use thiserror::Error;

pub mod options;
pub use options::ExplorerOptions;

#[derive(Error, Debug)]
pub enum FrameScopeError {
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    #[error("quantiles can only be computed for numerical columns, '{key}' is not numerical")]
    NonNumerical { key: String },
    #[error("no profiled column '{key}' found")]
    ColumnNotFound { key: String },
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

pub type Result<T> = std::result::Result<T, FrameScopeError>;
