//! Columnar route-transposition cipher.
//!
//! Letters are written row-major into a grid of a fixed column count
//! and read back column-major, last column first. The cipher rearranges
//! letters; it never substitutes them. When the text length is not a
//! multiple of the column count the last row is incomplete and the
//! rightmost columns run one cell short ("ragged" columns).

use crate::alphabet;
use crate::error::CipherError;

/// Upper bound on the column count. Grids wider than this degenerate
/// into mostly-empty layouts.
pub const MAX_COLS: usize = 100;

/// Columnar route-transposition cipher keyed by a column count.
///
/// The only state is the validated column count, so an instance is
/// immutable and freely shareable across threads.
///
/// # Examples
///
/// ```
/// use azbuka::RouteCipher;
///
/// let cipher = RouteCipher::new(4).unwrap();
/// let encrypted = cipher.encrypt("ПРИВЕТ").unwrap();
/// assert_eq!(encrypted, "ВИРТПЕ");
/// assert_eq!(cipher.decrypt(&encrypted).unwrap(), "ПРИВЕТ");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteCipher {
    cols: usize,
}

impl RouteCipher {
    /// Creates a cipher with the given column count.
    ///
    /// # Parameters
    /// - `cols`: Number of grid columns, `1..=`[`MAX_COLS`].
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if `cols` is zero or exceeds
    /// [`MAX_COLS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use azbuka::RouteCipher;
    ///
    /// assert!(RouteCipher::new(0).is_err());
    /// assert!(RouteCipher::new(101).is_err());
    /// assert!(RouteCipher::new(100).is_ok());
    /// ```
    pub fn new(cols: usize) -> Result<Self, CipherError> {
        if !(1..=MAX_COLS).contains(&cols) {
            return Err(CipherError::InvalidKey);
        }
        Ok(RouteCipher { cols })
    }

    /// Encrypts free-form text.
    ///
    /// Input is normalized first (non-alphabet characters discarded,
    /// survivors uppercased), laid row-major into a `rows × cols` grid
    /// with `rows = ceil(n / cols)`, and read out column-major from the
    /// last column down to the first, top to bottom, skipping the
    /// unfilled cells of the ragged last row.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyText`] if no character survives
    /// normalization.
    pub fn encrypt(&self, plain: &str) -> Result<String, CipherError> {
        let text: Vec<char> = alphabet::normalize(plain).chars().collect();
        let n = text.len();
        if n == 0 {
            return Err(CipherError::EmptyText);
        }
        let rows = n.div_ceil(self.cols);

        let mut result = String::with_capacity(text.iter().map(|c| c.len_utf8()).sum());
        for col in (0..self.cols).rev() {
            for row in 0..rows {
                // Row-major layout: the cell (row, col) holds text[row*cols + col]
                // when that index exists; the tail cells of the last row are empty.
                let index = row * self.cols + col;
                if index < n {
                    result.push(text[index]);
                }
            }
        }
        Ok(result)
    }

    /// Decrypts ciphertext produced by [`encrypt`](Self::encrypt).
    ///
    /// Requires all-uppercase-alphabet input. The grid is rebuilt by
    /// consuming the ciphertext in encryption's column order (last
    /// column first), filling each column top-to-bottom to its own
    /// depth: `rows` for columns that reach the full grid depth,
    /// `rows − 1` for the ragged ones. The plaintext is then read back
    /// row-major.
    ///
    /// # Errors
    /// - [`CipherError::EmptyText`] if the input is empty.
    /// - [`CipherError::InvalidCipherText`] if any character is not an
    ///   uppercase alphabet symbol.
    pub fn decrypt(&self, cipher: &str) -> Result<String, CipherError> {
        alphabet::validate_cipher_text(cipher)?;
        let text: Vec<char> = cipher.chars().collect();
        let n = text.len();
        let rows = n.div_ceil(self.cols);

        // Columns at index >= full_cols hold one cell fewer. This must
        // mirror the implicit raggedness of encryption's row-major fill
        // or the last partial row lands in the wrong cells.
        let full_cols = match n % self.cols {
            0 => self.cols,
            rem => rem,
        };

        let mut grid = vec![vec![None; self.cols]; rows];
        let mut next = text.iter();
        for col in (0..self.cols).rev() {
            let depth = if col < full_cols { rows } else { rows - 1 };
            for row in grid.iter_mut().take(depth) {
                row[col] = next.next().copied();
            }
        }

        let mut result = String::with_capacity(cipher.len());
        for row in &grid {
            for cell in row.iter().flatten() {
                result.push(*cell);
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_grid() {
        // 3×3 grid: ПРИ / ВЕТ / МИР, read columns 2, 1, 0.
        let cipher = RouteCipher::new(3).unwrap();
        assert_eq!(cipher.encrypt("ПРИВЕТМИР").unwrap(), "ИТРРЕИПВМ");
        assert_eq!(cipher.decrypt("ИТРРЕИПВМ").unwrap(), "ПРИВЕТМИР");
    }

    #[test]
    fn test_ragged_grid() {
        // 2×4 grid with two empty cells in the last row.
        let cipher = RouteCipher::new(4).unwrap();
        assert_eq!(cipher.encrypt("ПРИВЕТ").unwrap(), "ВИРТПЕ");
        assert_eq!(cipher.decrypt("ВИРТПЕ").unwrap(), "ПРИВЕТ");
    }

    #[test]
    fn test_single_column_is_identity() {
        let cipher = RouteCipher::new(1).unwrap();
        assert_eq!(cipher.encrypt("ПРИВЕТ").unwrap(), "ПРИВЕТ");
        assert_eq!(cipher.decrypt("ПРИВЕТ").unwrap(), "ПРИВЕТ");
    }

    #[test]
    fn test_cols_exceeding_text_reverses() {
        // Single row, every column holds at most one cell.
        let cipher = RouteCipher::new(10).unwrap();
        assert_eq!(cipher.encrypt("ПРИВЕТ").unwrap(), "ТЕВИРП");
        assert_eq!(cipher.decrypt("ТЕВИРП").unwrap(), "ПРИВЕТ");
    }

    #[test]
    fn test_cols_equal_text_length() {
        let cipher = RouteCipher::new(6).unwrap();
        assert_eq!(cipher.encrypt("ПРИВЕТ").unwrap(), "ТЕВИРП");
        assert_eq!(cipher.decrypt("ТЕВИРП").unwrap(), "ПРИВЕТ");
    }

    #[test]
    fn test_encrypt_normalizes_input() {
        let cipher = RouteCipher::new(5).unwrap();
        assert_eq!(cipher.encrypt("шифрование текста").unwrap(), "ОЕТРИСФНКИАЕШВТА");
        assert_eq!(cipher.decrypt("ОЕТРИСФНКИАЕШВТА").unwrap(), "ШИФРОВАНИЕТЕКСТА");
    }

    #[test]
    fn test_key_bounds() {
        assert_eq!(RouteCipher::new(0).unwrap_err(), CipherError::InvalidKey);
        assert_eq!(RouteCipher::new(101).unwrap_err(), CipherError::InvalidKey);
        assert!(RouteCipher::new(1).is_ok());
        assert!(RouteCipher::new(MAX_COLS).is_ok());
    }

    #[test]
    fn test_encrypt_empty_text_rejected() {
        let cipher = RouteCipher::new(3).unwrap();
        assert_eq!(cipher.encrypt("").unwrap_err(), CipherError::EmptyText);
        assert_eq!(cipher.encrypt("123").unwrap_err(), CipherError::EmptyText);
    }

    #[test]
    fn test_decrypt_is_strict() {
        let cipher = RouteCipher::new(3).unwrap();
        assert_eq!(cipher.decrypt("").unwrap_err(), CipherError::EmptyText);
        assert_eq!(
            cipher.decrypt("иТРРЕИПВМ").unwrap_err(),
            CipherError::InvalidCipherText
        );
        assert_eq!(
            cipher.decrypt("ИТР РЕИПВМ").unwrap_err(),
            CipherError::InvalidCipherText
        );
    }

    #[test]
    fn test_roundtrip_every_column_count() {
        let text = "ШИФРОВАНИЕТЕКСТАМАРШРУТНОЙПЕРЕСТАНОВКОЙ";
        for cols in 1..=MAX_COLS {
            let cipher = RouteCipher::new(cols).unwrap();
            let encrypted = cipher.encrypt(text).unwrap();
            assert_eq!(
                cipher.decrypt(&encrypted).unwrap(),
                text,
                "roundtrip failed for cols={}",
                cols
            );
        }
    }
}
