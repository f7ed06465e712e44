//! Штрих-код: 44 цифры подряд, как их отдаёт сканер. Разметка:
//! банк (1–3), валюта (4), общий контрольный разряд (5), фактор срока (6–9),
//! сумма (10–19), свободное поле (20–44).

use crate::{
    error::{BoletoError, Result},
    model::Boleto,
    traits::{ParseFormat, RenderFormat},
};

pub const BARCODE_LEN: usize = 44;

pub struct Barcode;

impl ParseFormat for Barcode {
    /// Строгий разбор сканерной формы: ровно 44 цифры, никаких разделителей.
    /// Общий контрольный разряд сохраняется как есть, даже если он неверен.
    fn parse(s: &str) -> Result<Boleto> {
        let len = s.chars().count();
        if len != BARCODE_LEN {
            return Err(BoletoError::InvalidLength(len));
        }
        ensure_digits(s)?;

        let b = s.as_bytes();
        Ok(Boleto {
            bank_code: s[0..3].to_string(),
            currency_code: b[3] as char,
            check_digit: b[4] - b'0',
            due_date_factor: digits_to_u64(&b[5..9]) as u16,
            amount_cents: digits_to_u64(&b[9..19]),
            free_field: s[19..44].to_string(),
        })
    }
}

impl RenderFormat for Barcode {
    fn render(bo: &Boleto) -> String {
        format!(
            "{}{}{}{:04}{:010}{}",
            bo.bank_code, bo.currency_code, bo.check_digit, bo.due_date_factor,
            bo.amount_cents, bo.free_field
        )
    }
}

pub(crate) fn ensure_digits(s: &str) -> Result<()> {
    match s.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        Some((pos, ch)) => Err(BoletoError::NonDigitCharacter { pos, ch }),
        None => Ok(()),
    }
}

pub(crate) fn digits_to_u64(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, &d| acc * 10 + u64::from(d - b'0'))
}
