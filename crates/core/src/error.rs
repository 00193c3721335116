#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}
