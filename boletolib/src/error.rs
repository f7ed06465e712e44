//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoletoError {
    /// Длина входа (в цифрах) не подходит ни под одну из форм кода.
    #[error("invalid length: {0} digits (expected 44 or 47)")]
    InvalidLength(usize),

    #[error("non-digit character {ch:?} at position {pos}")]
    NonDigitCharacter { pos: usize, ch: char },

    /// Контрольный разряд одного из полей линии не сошёлся (поля нумеруются с 1).
    #[error("check digit mismatch in field {field}: expected {expected}, found {found}")]
    FieldChecksumMismatch { field: u8, expected: u8, found: u8 },
}

pub type Result<T> = std::result::Result<T, BoletoError>;
