//! Контрольные разряды: модуль 10 для полей линии, модуль 11 для всего кода.

/// Свёртка вырожденных остатков модуля 11 (r ∈ {0, 1, 10}).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mod11Variant {
    /// Обычные банковские квитанции: вырожденный остаток даёт 0.
    DegenerateZero,
    /// Квитанции взыскания (ведущая цифра «8»): вырожденный остаток даёт 1.
    DegenerateOne,
}

impl Mod11Variant {
    /// Выбор варианта по ведущей цифре кода.
    pub fn for_leading_digit(d: u8) -> Self {
        if d == b'8' {
            Self::DegenerateOne
        } else {
            Self::DegenerateZero
        }
    }
}

/// Модуль 10: справа налево веса 2 и 1 попеременно, произведения ≥ 10
/// сворачиваются в сумму собственных цифр; разряд = (10 - sum % 10) % 10.
///
/// На входе — ASCII-цифры (вызывающий уже проверил состав).
pub fn mod10(digits: &[u8]) -> u8 {
    let mut sum = 0u32;
    let mut weight = 2u32;
    for &d in digits.iter().rev() {
        let mut p = u32::from(d - b'0') * weight;
        if p > 9 {
            p -= 9;
        }
        sum += p;
        weight = 3 - weight;
    }
    ((10 - sum % 10) % 10) as u8
}

/// Модуль 11: справа налево циклические веса 2..=9, произведения не сворачиваются.
/// Остатки 0, 1 и 10 вырожденные, их судьбу решает `variant`.
pub fn mod11(digits: &[u8], variant: Mod11Variant) -> u8 {
    let mut sum = 0u32;
    let mut weight = 2u32;
    for &d in digits.iter().rev() {
        sum += u32::from(d - b'0') * weight;
        weight = if weight == 9 { 2 } else { weight + 1 };
    }
    match sum % 11 {
        0 | 1 | 10 => match variant {
            Mod11Variant::DegenerateZero => 0,
            Mod11Variant::DegenerateOne => 1,
        },
        r => (11 - r) as u8,
    }
}
