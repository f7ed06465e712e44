//! Верхнеуровневые операции: скан (44 цифры) → линия (47) и обратно.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    error::{BoletoError, Result},
    formats::{
        barcode::{Barcode, BARCODE_LEN},
        line::{self, DigitableLine, LINE_LEN},
    },
    model::Boleto,
    traits::{ParseFormat, RenderFormat},
};

/// Результат кодирования скана в линию.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Encoded {
    /// 47 цифр подряд.
    pub digits: String,
    /// Линия с каноничной пунктуацией.
    pub display: String,
    /// Общий контрольный разряд не совпал с пересчитанным. Не ошибка:
    /// скан мог прийти с действительно повреждённого кода, принимать ли
    /// его — решение вызывающего.
    pub checksum_mismatch: bool,
}

/// Сырой скан (ровно 44 цифры, без разделителей) → линия для набора.
pub fn encode(raw: &str) -> Result<Encoded> {
    let bo = Barcode::parse(raw)?;
    Ok(Encoded {
        digits: DigitableLine::render(&bo),
        display: line::display(&bo),
        checksum_mismatch: !bo.check_digit_valid(),
    })
}

/// Результат восстановления штрих-кода.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Decoded {
    /// 44 цифры штрих-кода.
    pub barcode: String,
    /// См. [`Encoded::checksum_mismatch`].
    pub checksum_mismatch: bool,
}

/// Линия (47 цифр, пунктуация не обязательна) или штрих-код (44) → штрих-код.
/// Форма входа определяется длиной после отбрасывания разделителей.
pub fn decode(input: &str) -> Result<Decoded> {
    let bo = parse_any(input)?;
    Ok(Decoded {
        barcode: Barcode::render(&bo),
        checksum_mismatch: !bo.check_digit_valid(),
    })
}

/// Расшифрованное содержимое кода — для показа или журнала.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    pub bank_code: String,
    pub currency_code: char,
    pub due_date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub barcode: String,
    pub line: String,
    pub checksum_mismatch: bool,
}

/// Разбор любой формы кода в сводку для показа.
pub fn inspect(input: &str) -> Result<Summary> {
    let bo = parse_any(input)?;
    Ok(Summary {
        bank_code: bo.bank_code.clone(),
        currency_code: bo.currency_code,
        due_date: bo.due_date(),
        amount: bo.amount(),
        barcode: Barcode::render(&bo),
        line: line::display(&bo),
        checksum_mismatch: !bo.check_digit_valid(),
    })
}

fn parse_any(input: &str) -> Result<Boleto> {
    let digits = line::strip_separators(input);
    match digits.chars().count() {
        BARCODE_LEN => Barcode::parse(&digits),
        LINE_LEN => DigitableLine::parse(&digits),
        n => Err(BoletoError::InvalidLength(n)),
    }
}
