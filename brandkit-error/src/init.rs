use thiserror::Error;

/// Error type for application context bootstrap
#[derive(Error, Debug)]
pub enum InitContextError {
    /// Returned when a primitive error occurs
    #[error("primitive error: {0}")]
    Primitive(String),
}
