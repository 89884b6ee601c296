//! Gronsfeld-style polyalphabetic additive cipher.
//!
//! Each plaintext letter is shifted by the alphabet index of the
//! corresponding key letter, the key repeating cyclically. Encryption
//! adds modulo the alphabet size; decryption subtracts.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::CipherError;

/// Polyalphabetic additive cipher keyed by a word.
///
/// The key word is validated and reduced to a sequence of alphabet
/// indices at construction; the engine is immutable afterwards, so a
/// single instance can serve any number of `encrypt`/`decrypt` calls,
/// including concurrently.
///
/// # Examples
///
/// ```
/// use azbuka::GronsfeldCipher;
///
/// let cipher = GronsfeldCipher::new("МИР").unwrap();
/// let encrypted = cipher.encrypt("ААААА").unwrap();
/// assert_eq!(encrypted, "МИРМИ");
/// assert_eq!(cipher.decrypt(&encrypted).unwrap(), "ААААА");
/// ```
#[derive(Debug, Clone)]
pub struct GronsfeldCipher {
    key: Vec<u8>,
}

impl GronsfeldCipher {
    /// Creates a cipher from a key word.
    ///
    /// The key is case-folded and converted to alphabet indices through
    /// the same conversion primitive used for text: characters that map
    /// to no alphabet slot are silently dropped.
    ///
    /// # Parameters
    /// - `key`: Key word; every character must be alphabetic.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if the key is empty, contains
    /// a non-alphabetic character (digit, punctuation, whitespace), or
    /// derives an empty index sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use azbuka::GronsfeldCipher;
    ///
    /// assert!(GronsfeldCipher::new("мир").is_ok());
    /// assert!(GronsfeldCipher::new("МИР123").is_err());
    /// assert!(GronsfeldCipher::new("").is_err());
    /// ```
    pub fn new(key: &str) -> Result<Self, CipherError> {
        if key.is_empty() || key.chars().any(|c| !c.is_alphabetic()) {
            return Err(CipherError::InvalidKey);
        }
        let key = alphabet::to_indices(key);
        // A key of foreign letters folds to nothing; cyclic indexing
        // requires at least one element.
        if key.is_empty() {
            return Err(CipherError::InvalidKey);
        }
        Ok(GronsfeldCipher { key })
    }

    /// Encrypts free-form text.
    ///
    /// Input is normalized first: characters outside the alphabet are
    /// discarded and survivors are uppercased. Each surviving symbol at
    /// position `i` is shifted by `key[i mod keyLen]` modulo the
    /// alphabet size. The output length equals the normalized input
    /// length.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyText`] if no character survives
    /// normalization.
    pub fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let mut work = alphabet::to_indices(text);
        if work.is_empty() {
            return Err(CipherError::EmptyText);
        }
        for (i, p) in work.iter_mut().enumerate() {
            let shift = self.key[i % self.key.len()] as usize;
            *p = ((*p as usize + shift) % ALPHABET_LEN) as u8;
        }
        Ok(alphabet::from_indices(&work))
    }

    /// Decrypts ciphertext produced by [`encrypt`](Self::encrypt).
    ///
    /// No normalization is performed: every character must already be
    /// an uppercase alphabet symbol. Ciphertext is machine-produced, so
    /// any deviation indicates corruption or misuse and is rejected.
    ///
    /// # Errors
    /// - [`CipherError::EmptyText`] if the input is empty.
    /// - [`CipherError::InvalidCipherText`] if any character is not an
    ///   uppercase alphabet symbol.
    pub fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        alphabet::validate_cipher_text(text)?;
        let mut work = alphabet::to_indices(text);
        for (i, c) in work.iter_mut().enumerate() {
            let shift = self.key[i % self.key.len()] as usize;
            *c = ((*c as usize + ALPHABET_LEN - shift) % ALPHABET_LEN) as u8;
        }
        Ok(alphabet::from_indices(&work))
    }
}
