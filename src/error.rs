//! Error types for the azbuka cipher library.

use thiserror::Error;

/// Errors produced by both cipher engines.
///
/// One variant per violated precondition: validation never partially
/// succeeds, and failures propagate to the caller as the sole outcome
/// of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key rejected at construction: empty key string or non-alphabetic
    /// character (shift engine), or column count out of range
    /// (transposition engine).
    #[error("invalid key")]
    InvalidKey,
    /// Nothing remains to encrypt after discarding non-alphabet
    /// characters, or the input to decrypt is empty.
    #[error("empty text: no alphabet letters")]
    EmptyText,
    /// Decrypt input contains a character that is not an uppercase
    /// alphabet symbol.
    #[error("invalid cipher text")]
    InvalidCipherText,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        assert_eq!(format!("{}", CipherError::InvalidKey), "invalid key");
    }

    #[test]
    fn test_display_empty_text() {
        assert_eq!(
            format!("{}", CipherError::EmptyText),
            "empty text: no alphabet letters"
        );
    }

    #[test]
    fn test_display_invalid_cipher_text() {
        assert_eq!(
            format!("{}", CipherError::InvalidCipherText),
            "invalid cipher text"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CipherError::InvalidKey, CipherError::InvalidKey);
        assert_ne!(CipherError::InvalidKey, CipherError::EmptyText);
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CipherError::EmptyText);
    }
}
