use boletolib::{
    convert::encode,
    scan::{Detection, ScanFilter},
};
use std::time::Duration;

#[test]
fn detection_value() {
    assert_eq!(Detection::NoDetection.value(), None);
    let d = Detection::Detected("123".into());
    assert_eq!(d.value(), Some("123"));
}

#[test]
fn filter_suppresses_repeats_inside_window() {
    let mut f = ScanFilter::new(8, Duration::from_secs(60));
    assert!(f.accept("00192987600001500001234567890123456789012345"));
    assert!(!f.accept("00192987600001500001234567890123456789012345"));
    // другой код проходит
    assert!(f.accept("23799000000000000000000000000000000000000000"));
}

#[test]
fn filter_evicts_oldest_at_capacity() {
    let mut f = ScanFilter::new(2, Duration::from_secs(60));
    assert!(f.accept("a"));
    assert!(f.accept("b"));
    assert!(f.accept("c")); // вытесняет «a»
    assert!(f.accept("a"));
    assert!(!f.accept("c"));
}

#[test]
fn zero_window_suppresses_nothing() {
    let mut f = ScanFilter::new(8, Duration::ZERO);
    assert!(f.accept("a"));
    assert!(f.accept("a"));
}

// Типичный цикл вызывающего: сканер -> фильтр -> кодек.
#[test]
fn caller_loop_detection_to_line() {
    let frames = [
        Detection::NoDetection,
        Detection::Detected("00192987600001500001234567890123456789012345".into()),
        Detection::Detected("00192987600001500001234567890123456789012345".into()),
    ];
    let mut filter = ScanFilter::new(8, Duration::from_secs(60));
    let mut lines = Vec::new();
    for frame in &frames {
        let Some(raw) = frame.value() else { continue };
        if !filter.accept(raw) {
            continue;
        }
        lines.push(encode(raw).expect("encode").display);
    }
    assert_eq!(
        lines,
        ["00191.23454 67890.123457 67890.123457 2 98760000150000"]
    );
}
