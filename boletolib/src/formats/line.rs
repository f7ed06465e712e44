//! «Линия для набора»: 47 цифр в пяти полях. Поля 1–3 несут собственный
//! контрольный разряд (модуль 10), поле 4 — общий разряд штрих-кода,
//! поле 5 — фактор срока и сумма.

use crate::{
    checksum::mod10,
    error::{BoletoError, Result},
    model::Boleto,
    traits::{ParseFormat, RenderFormat},
};

use super::barcode::{digits_to_u64, ensure_digits};

pub const LINE_LEN: usize = 47;

/// Разделители, допустимые при ручном вводе линии.
pub fn strip_separators(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, ' ' | '.' | '-')).collect()
}

pub struct DigitableLine;

impl ParseFormat for DigitableLine {
    /// Пунктуация во входе не обязательна. Контрольные разряды полей 1–3
    /// проверяются жёстко: линию набирают руками, и эти разряды существуют
    /// именно для отлова опечаток.
    fn parse(s: &str) -> Result<Boleto> {
        let digits = strip_separators(s);
        let len = digits.chars().count();
        if len != LINE_LEN {
            return Err(BoletoError::InvalidLength(len));
        }
        ensure_digits(&digits)?;

        let b = digits.as_bytes();
        let fields: [(&[u8], u8); 3] = [
            (&b[0..9], b[9] - b'0'),
            (&b[10..20], b[20] - b'0'),
            (&b[21..31], b[31] - b'0'),
        ];
        for (i, (content, found)) in fields.iter().enumerate() {
            let expected = mod10(content);
            if expected != *found {
                return Err(BoletoError::FieldChecksumMismatch {
                    field: i as u8 + 1,
                    expected,
                    found: *found,
                });
            }
        }

        Ok(Boleto {
            bank_code: digits[0..3].to_string(),
            currency_code: b[3] as char,
            check_digit: b[32] - b'0',
            due_date_factor: digits_to_u64(&b[33..37]) as u16,
            amount_cents: digits_to_u64(&b[37..47]),
            // поля 1–3 без контрольных разрядов = банк + валюта + свободное поле
            free_field: format!("{}{}{}", &digits[4..9], &digits[10..20], &digits[21..31]),
        })
    }
}

impl RenderFormat for DigitableLine {
    /// 47 цифр подряд, без пунктуации.
    fn render(bo: &Boleto) -> String {
        let [f1, f2, f3] = field_contents(bo);
        format!(
            "{f1}{}{f2}{}{f3}{}{}{:04}{:010}",
            mod10(f1.as_bytes()),
            mod10(f2.as_bytes()),
            mod10(f3.as_bytes()),
            bo.check_digit,
            bo.due_date_factor,
            bo.amount_cents
        )
    }
}

/// Каноничная пунктуация для показа:
/// `AAAAA.AAAAA BBBBB.BBBBBB CCCCC.CCCCCC D EEEEEEEEEEEEEE`.
pub fn display(bo: &Boleto) -> String {
    let [f1, f2, f3] = field_contents(bo);
    let (c1, c2, c3) = (mod10(f1.as_bytes()), mod10(f2.as_bytes()), mod10(f3.as_bytes()));
    format!(
        "{}.{}{c1} {}.{}{c2} {}.{}{c3} {} {:04}{:010}",
        &f1[0..5],
        &f1[5..9],
        &f2[0..5],
        &f2[5..10],
        &f3[0..5],
        &f3[5..10],
        bo.check_digit,
        bo.due_date_factor,
        bo.amount_cents
    )
}

/// Содержимое полей 1–3 без контрольных разрядов (9 + 10 + 10 цифр).
fn field_contents(bo: &Boleto) -> [String; 3] {
    [
        format!("{}{}{}", bo.bank_code, bo.currency_code, &bo.free_field[0..5]),
        bo.free_field[5..15].to_string(),
        bo.free_field[15..25].to_string(),
    ]
}
