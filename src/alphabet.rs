//! Cyrillic alphabet table: symbol/index mapping and case folding.
//!
//! Both cipher engines operate over the same restricted 32-symbol
//! alphabet, `А`..`Я` with `Ё` in sequence order after `Е`. The table is
//! a compile-time constant; index lookups are resolved by direct range
//! arithmetic on the code point, never by locale-dependent routines.

use crate::error::CipherError;

/// The cipher alphabet, in index order. `Ё` sits immediately after `Е`.
pub(crate) const ALPHABET: [char; 32] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р',
    'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Number of symbols in the alphabet; the modulus of all shift arithmetic.
pub(crate) const ALPHABET_LEN: usize = ALPHABET.len();

/// Folds alphabet-specific lowercase letters to uppercase.
///
/// `а`..`я` and `ё` are mapped by explicit code-point arithmetic rather
/// than a generic case-folding routine, so the result never depends on
/// locale state. All other characters fall back to generic Unicode
/// uppercasing.
///
/// # Parameters
/// - `c`: Character to fold.
///
/// # Returns
/// The uppercase form of `c`, or `c` itself if it has none.
pub(crate) fn to_upper(c: char) -> char {
    match c {
        // а (U+0430) .. я (U+044F) sit exactly 0x20 above А .. Я.
        'а'..='я' => char::from_u32(c as u32 - 0x20).unwrap_or(c),
        'ё' => 'Ё',
        _ => c.to_uppercase().next().unwrap_or(c),
    }
}

/// Returns the alphabet index of a symbol, folding case first.
///
/// # Parameters
/// - `c`: Candidate symbol.
///
/// # Returns
/// `Some(index)` with `index < 32` for alphabet members, `None` for any
/// other character (including `Ъ`, which the 32-symbol alphabet omits).
pub(crate) fn index_of(c: char) -> Option<usize> {
    let u = to_upper(c);
    match u {
        'А'..='Е' => Some(u as usize - 'А' as usize),
        'Ё' => Some(6),
        // Ж (U+0416) .. Щ (U+0429) are contiguous; Ё displaces them by one.
        'Ж'..='Щ' => Some(u as usize - 'Ж' as usize + 7),
        // Ы (U+042B) .. Я (U+042F); the range starts past Ъ (U+042A).
        'Ы'..='Я' => Some(u as usize - 'Ы' as usize + 27),
        _ => None,
    }
}

/// Returns the symbol at an alphabet index.
///
/// Total for `index < 32`; callers only pass values already reduced
/// modulo [`ALPHABET_LEN`].
pub(crate) fn symbol_at(index: usize) -> char {
    ALPHABET[index]
}

/// Tests membership against the uppercase table without case folding.
///
/// Used by the strict decrypt validation path, where lowercase letters
/// must be rejected rather than folded.
pub(crate) fn is_upper_member(c: char) -> bool {
    matches!(c, 'А'..='Щ' | 'Ы'..='Я' | 'Ё')
}

/// Normalizes free-form text for encryption: discards every character
/// that maps to no alphabet slot and uppercases the survivors.
///
/// # Returns
/// The letters-only, uppercase form of `text`; empty if no character
/// survives.
pub(crate) fn normalize(text: &str) -> String {
    text.chars()
        .filter_map(|c| index_of(c).map(symbol_at))
        .collect()
}

/// Converts a string to alphabet indices, dropping unmapped characters.
///
/// This is the shared conversion primitive used for both key material
/// and text: case is folded, anything outside the alphabet vanishes.
pub(crate) fn to_indices(s: &str) -> Vec<u8> {
    s.chars()
        .filter_map(|c| index_of(c).map(|i| i as u8))
        .collect()
}

/// Converts a sequence of alphabet indices back to a string.
pub(crate) fn from_indices(indices: &[u8]) -> String {
    indices.iter().map(|&i| symbol_at(i as usize)).collect()
}

/// Strict ciphertext validation shared by both engines' decrypt paths.
///
/// Decrypt performs no forgiving normalization: ciphertext is
/// machine-produced, so any deviation is treated as corruption.
///
/// # Errors
/// - [`CipherError::EmptyText`] on empty input.
/// - [`CipherError::InvalidCipherText`] if any character is not an
///   uppercase alphabet symbol.
pub(crate) fn validate_cipher_text(s: &str) -> Result<(), CipherError> {
    if s.is_empty() {
        return Err(CipherError::EmptyText);
    }
    if s.chars().any(|c| !is_upper_member(c)) {
        return Err(CipherError::InvalidCipherText);
    }
    Ok(())
}
