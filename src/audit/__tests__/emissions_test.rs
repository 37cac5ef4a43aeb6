use crate::audit::emissions::{bytes_to_mb, carbon_footprint, derive_result, round_cents, BYTES_PER_MB};
use crate::audit::Strategy;

#[test]
fn 이메가바이트_시나리오_테스트() {
    let result = derive_result(2_097_152.0, Strategy::Desktop);

    assert_eq!(result.device, Strategy::Desktop);
    assert_eq!(result.mb, "2.00");
    assert_eq!(result.grams, "0.67");
}

#[test]
fn 영바이트_테스트() {
    let result = derive_result(0.0, Strategy::Mobile);
    assert_eq!(result.mb, "0.00");
    assert_eq!(result.grams, "0.00");
}

#[test]
fn 반올림된_mb로_grams_계산_테스트() {
    // 1.004 MB -> "1.00" -> 0.3333 -> "0.33"
    let bytes = 1.004 * BYTES_PER_MB;
    assert_eq!(bytes_to_mb(bytes), 1.0);
    assert_eq!(carbon_footprint(bytes_to_mb(bytes)), 0.33);

    let result = derive_result(bytes, Strategy::Desktop);
    assert_eq!(result.grams, "0.33");
}

#[test]
fn 정확한_절반값_반올림_테스트() {
    // 0.125 MB는 이진수로 정확히 표현되며 올림되어야 한다
    assert_eq!(round_cents(0.125), 0.13);
    assert_eq!(derive_result(131_072.0, Strategy::Desktop).mb, "0.13");
}

#[test]
fn 큰_페이지_테스트() {
    // 10 MB -> 3.33 g
    let result = derive_result(10.0 * BYTES_PER_MB, Strategy::Mobile);
    assert_eq!(result.mb, "10.00");
    assert_eq!(result.grams, "3.33");
}

#[test]
fn grams_단조성_테스트() {
    let mut previous = -1.0;
    let mut bytes = 0.0;
    while bytes <= 50.0 * BYTES_PER_MB {
        let grams: f64 = derive_result(bytes, Strategy::Desktop).grams.parse().unwrap();
        assert!(grams >= previous, "{} bytes에서 grams 감소: {} < {}", bytes, grams, previous);
        previous = grams;
        bytes += 37_337.0;
    }
}

#[test]
fn 표시_문자열_소수점_두자리_테스트() {
    for bytes in [1.0, 512.0, 1_000_000.0, 3_456_789.0, 99_999_999.0] {
        let result = derive_result(bytes, Strategy::Desktop);
        for value in [&result.mb, &result.grams] {
            let (_, fraction) = value.split_once('.').expect("소수점 없음");
            assert_eq!(fraction.len(), 2, "{}", value);
        }
    }
}
