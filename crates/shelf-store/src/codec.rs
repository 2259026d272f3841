use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Structured-encoding capability: converts typed values to and from bytes.
///
/// All implementations must satisfy these invariants:
/// - Decoding `encode`'s output with the same type yields an equal value.
/// - The encoded bytes carry no envelope, header, or checksum.
/// - A type mismatch on decode is a decode error, never a panic.
pub trait Codec: Send + Sync + 'static {
    /// Encode a value to its byte representation.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> CodecResult<Vec<u8>>;

    /// Decode a value from bytes, as the caller-supplied type.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> CodecResult<T>;
}

/// JSON encoding via `serde_json`. The default codec.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> CodecResult<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> CodecResult<T> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}

/// Errors from the structured-encoding capability.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value could not be serialized.
    #[error("encode error: {0}")]
    Encode(String),

    /// The bytes could not be deserialized as the expected type.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Result alias for codec operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;
