//! Доменная модель — единый «нормализованный» слой между двумя записями кода.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::checksum::{mod11, Mod11Variant};

/// Содержимое кода квитанции. Обе текстовые формы (44 и 47 цифр)
/// разбираются в эту структуру и собираются из неё без потерь.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Boleto {
    /// Код банка (3 цифры).
    pub bank_code: String,
    /// Код валюты, «9» — бразильский реал.
    pub currency_code: char,
    /// Общий контрольный разряд, как записан в коде (может быть и неверным).
    pub check_digit: u8,
    /// Фактор срока оплаты: дни от 1997-10-07, 0 — срок не задан.
    pub due_date_factor: u16,
    /// Сумма в сентаво, 0 — сумму заполняет плательщик.
    pub amount_cents: u64,
    /// Свободное поле банка (25 цифр), кодек его не интерпретирует.
    pub free_field: String,
}

impl Boleto {
    pub fn currency_is_real(&self) -> bool {
        self.currency_code == '9'
    }

    /// Срок оплаты; `None`, если фактор нулевой.
    pub fn due_date(&self) -> Option<NaiveDate> {
        if self.due_date_factor == 0 {
            return None;
        }
        NaiveDate::from_ymd_opt(1997, 10, 7)?
            .checked_add_days(Days::new(u64::from(self.due_date_factor)))
    }

    /// Сумма в валюте; `None`, если издатель её не указал.
    pub fn amount(&self) -> Option<Decimal> {
        (self.amount_cents != 0).then(|| Decimal::new(self.amount_cents as i64, 2))
    }

    /// Вариант модуля 11 для этого кода (по ведущей цифре кода банка).
    pub fn mod11_variant(&self) -> Mod11Variant {
        let leading = self.bank_code.as_bytes().first().copied().unwrap_or(b'0');
        Mod11Variant::for_leading_digit(leading)
    }

    /// Пересчитанный общий контрольный разряд.
    pub fn expected_check_digit(&self) -> u8 {
        mod11(self.core_digits().as_bytes(), self.mod11_variant())
    }

    /// Совпадает ли записанный общий разряд с пересчитанным.
    pub fn check_digit_valid(&self) -> bool {
        self.check_digit == self.expected_check_digit()
    }

    /// 43 цифры кода без позиции общего контрольного разряда.
    pub(crate) fn core_digits(&self) -> String {
        format!(
            "{}{}{:04}{:010}{}",
            self.bank_code, self.currency_code, self.due_date_factor, self.amount_cents,
            self.free_field
        )
    }
}
