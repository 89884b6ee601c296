//! Classical cipher engines over the Cyrillic alphabet.
//!
//! Azbuka implements two pre-modern text ciphers as pure, reusable
//! engines: a Gronsfeld-style polyalphabetic additive cipher keyed by a
//! word, and a columnar route-transposition cipher keyed by a column
//! count. Both operate over the same restricted 32-symbol alphabet
//! (`А`..`Я` with `Ё` after `Е`) and share the normalization and
//! validation rules that make each transform a bijection over it.
//!
//! These are educational/historical ciphers, not secure cryptography.
//!
//! # Architecture
//!
//! ```text
//! Alphabet Table   (symbol ↔ index mapping, locale-free case folding)
//!     ↑ shared by both engines
//! GronsfeldCipher  (word key → cyclic modular per-symbol shifts)
//! RouteCipher      (column count → ragged-grid route transposition)
//! ```
//!
//! Encrypt is tolerant: characters outside the alphabet are discarded
//! and survivors uppercased before the transform. Decrypt is strict:
//! input must already be uppercase alphabet symbols, anything else is
//! rejected as corrupted ciphertext.
//!
//! # Examples
//!
//! Shift cipher round-trip:
//!
//! ```
//! use azbuka::GronsfeldCipher;
//!
//! let cipher = GronsfeldCipher::new("МИР").unwrap();
//!
//! let encrypted = cipher.encrypt("Привет, мир!").unwrap();
//! assert_eq!(cipher.decrypt(&encrypted).unwrap(), "ПРИВЕТМИР");
//! ```
//!
//! Route transposition with a ragged grid:
//!
//! ```
//! use azbuka::RouteCipher;
//!
//! let cipher = RouteCipher::new(4).unwrap();
//!
//! let encrypted = cipher.encrypt("ПРИВЕТ").unwrap();
//! assert_eq!(encrypted, "ВИРТПЕ");
//! assert_eq!(cipher.decrypt(&encrypted).unwrap(), "ПРИВЕТ");
//! ```

#![deny(clippy::all)]

pub mod error;

pub(crate) mod alphabet;
mod gronsfeld;
mod route;

pub use error::CipherError;
pub use gronsfeld::GronsfeldCipher;
pub use route::{RouteCipher, MAX_COLS};
