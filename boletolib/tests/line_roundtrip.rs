use boletolib::convert::{decode, encode};

// Штрих-код с верным общим контрольным разрядом (модуль 11 даёт 2).
const VALID: &str = "00192987600001500001234567890123456789012345";

#[test]
fn encode_pins_both_renderings() {
    let enc = encode(VALID).expect("encode");
    assert_eq!(enc.digits, "00191234546789012345767890123457298760000150000");
    assert_eq!(
        enc.display,
        "00191.23454 67890.123457 67890.123457 2 98760000150000"
    );
    assert!(!enc.checksum_mismatch);
}

#[test]
fn line_roundtrip() {
    let enc = encode(VALID).expect("encode");
    let dec = decode(&enc.display).expect("decode display");
    assert_eq!(dec.barcode, VALID);
    assert!(!dec.checksum_mismatch);

    // и без пунктуации то же самое
    let dec = decode(&enc.digits).expect("decode digits");
    assert_eq!(dec.barcode, VALID);
}

#[test]
fn reencode_is_idempotent() {
    let enc = encode(VALID).expect("encode");
    let dec = decode(&enc.display).expect("decode");
    let again = encode(&dec.barcode).expect("reencode");
    assert_eq!(again, enc);
}

#[test]
fn decode_accepts_barcode_form_as_is() {
    let dec = decode(VALID).expect("decode 44");
    assert_eq!(dec.barcode, VALID);
    assert!(!dec.checksum_mismatch);
}

#[test]
fn mismatched_overall_digit_is_advisory_not_fatal() {
    // Иллюстративный вектор из предметной области: в позиции 5 записана 1,
    // пересчёт по модулю 11 даёт 2. Кодирование обязано пройти с флагом.
    let enc = encode("34191090008427291100000059960000100000017400").expect("encode");
    assert_eq!(
        enc.display,
        "34190.00009 59960.000103 00000.174003 1 09000842729110"
    );
    assert!(enc.checksum_mismatch);

    // decode сохраняет разряд как есть и тоже лишь поднимает флаг
    let dec = decode(&enc.display).expect("decode");
    assert_eq!(dec.barcode, "34191090008427291100000059960000100000017400");
    assert!(dec.checksum_mismatch);
}

#[test]
fn zero_factor_and_amount_roundtrip() {
    let enc = encode("23799000000000000000000000000000000000000000").expect("encode");
    assert_eq!(
        enc.display,
        "23790.00009 00000.000000 00000.000000 9 00000000000000"
    );
    assert!(!enc.checksum_mismatch);
}
