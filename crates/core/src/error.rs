#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The caller supplied a filter the query builder refuses to translate.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}
