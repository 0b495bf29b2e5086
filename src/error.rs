use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("chart container is missing a {role} element")]
    MissingStructure { role: &'static str },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}
