use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqStatsError {
    #[error("No data to analyze: the sample sequence is empty")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, SeqStatsError>;
