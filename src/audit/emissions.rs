//! 페이지 무게 → 탄소 배출량 선형 모델

use crate::audit::types::{AuditResult, Strategy};

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// MB당 CO2 그램 (고정 계수)
pub const CARBON_PER_MB: f64 = 0.6 / 1.8;

/// 소수점 둘째 자리 반올림 (0.5는 0에서 먼 쪽으로)
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn bytes_to_mb(bytes: f64) -> f64 {
    round_cents(bytes / BYTES_PER_MB)
}

/// 이미 반올림된 MB 값을 받아야 표시값과 일치한다
pub fn carbon_footprint(size_mb: f64) -> f64 {
    round_cents(size_mb * CARBON_PER_MB)
}

/// 하나의 byte weight 샘플에서 MB와 grams를 함께 계산
pub fn derive_result(byte_weight: f64, strategy: Strategy) -> AuditResult {
    let mb = bytes_to_mb(byte_weight);
    let grams = carbon_footprint(mb);

    AuditResult {
        device: strategy,
        mb: format!("{:.2}", mb),
        grams: format!("{:.2}", grams),
    }
}
