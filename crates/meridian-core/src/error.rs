//! Error types for the Meridian library surface.
//!
//! The calculation pipeline itself never returns errors: numerically
//! undefined results are non-finite `f64` sentinels in the output records.
//! Only the share-link codec has real failure modes.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("serialization: {0}")] Serialization(String),
    #[error("invalid base58 payload: {0}")] InvalidEncoding(String),
    #[error("malformed input record: {0}")] MalformedPayload(String),
}
