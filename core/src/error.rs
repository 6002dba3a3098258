//! Error types for the medicine API client.
//!
//! # Design
//! `Validation`, `Fetch` and `Api` display as the bare message because that
//! text is shown to the user verbatim (alert, inline span or list region).
//! The remaining variants describe failures the user rarely sees and carry a
//! prefix for debugging.

use thiserror::Error;

/// Errors returned by `MedicineClient` build and parse methods, and by
/// transports executing its requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-side input was rejected before any request was built.
    #[error("{0}")]
    Validation(String),

    /// A read (list or average) came back with a non-2xx status.
    #[error("{0}")]
    Fetch(String),

    /// A mutation failed at the transport or application level. `message` is
    /// taken from the response body when it carries one.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The server returned 404 for a single medicine lookup.
    #[error("medicine not found")]
    NotFound,

    /// The host could not complete the HTTP round-trip.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
