use thiserror::Error;

/// Reasons an envelope cannot be turned into its payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("Request failed with code {code}: {msg}")]
    Failed { code: i32, msg: String },

    #[error("Envelope carried no data")]
    MissingData,
}
