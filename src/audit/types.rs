/// 감사(audit) 요청/결과 데이터 구조
use crate::audit::error::{AuditError, RequiredField};
use crate::audit::rating::EmissionRating;
use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

/// 측정 시 시뮬레이션할 디바이스 프로파일
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Desktop,
    Mobile,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Desktop => "desktop",
            Strategy::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Strategy::Desktop),
            "mobile" => Ok(Strategy::Mobile),
            other => Err(format!("unknown strategy '{}' (expected desktop or mobile)", other)),
        }
    }
}

/// 제출 시점의 폼 스냅샷
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuditRequest {
    pub url: String,
    pub name: String,
    pub email: String,
    pub strategy: Strategy,
}

impl AuditRequest {
    pub fn new(
        url: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        strategy: Strategy,
    ) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            email: email.into(),
            strategy,
        }
    }

    /// url → name → email 순서로 첫 번째 빈 필드를 보고
    pub fn validate(&self) -> Result<(), AuditError> {
        let fields = [
            (RequiredField::Url, &self.url),
            (RequiredField::Name, &self.name),
            (RequiredField::Email, &self.email),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(AuditError::MissingField(field));
            }
        }
        Ok(())
    }
}

/// 한 번의 분석으로 얻은 결과. MB와 grams는 항상 같은 샘플에서 함께 계산된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    pub device: Strategy,
    /// 페이지 크기 (MB, 소수점 2자리 문자열)
    #[serde(rename = "MB")]
    pub mb: String,
    /// 탄소 배출량 (g, 소수점 2자리 문자열)
    pub grams: String,
}

impl AuditResult {
    /// 표시된 grams 값을 숫자로 되돌린 것. 숫자가 아니면 None.
    pub fn grams_value(&self) -> Option<f64> {
        match self.grams.trim().parse::<f64>() {
            Ok(grams) if grams.is_finite() => Some(grams),
            _ => {
                log::warn!("grams 값을 해석할 수 없음: '{}'", self.grams);
                None
            }
        }
    }

    pub fn rating(&self) -> Option<EmissionRating> {
        self.grams_value().map(EmissionRating::from_grams)
    }

    /// 화면 표시용 라인들. 등급을 낼 수 없으면 Rating 라인은 생략
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Device: {}", self.device),
            format!("Page Size: {} MB", self.mb),
            format!("CO2 Emissions: {} g", self.grams),
        ];
        if let Some(rating) = self.rating() {
            lines.push(format!("Rating: {}", rating));
        }
        lines
    }
}

/// 저장 엔드포인트로 보내는 결과 쌍
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedResults {
    #[serde(rename = "MB")]
    pub mb: String,
    pub grams: String,
}

/// 저장 API 요청 본문
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub name: String,
    pub email: String,
    pub url: String,
    pub results: SavedResults,
    #[serde(rename = "deviceName")]
    pub device_name: Strategy,
}

impl SaveRecord {
    pub fn new(request: &AuditRequest, result: &AuditResult) -> Self {
        Self {
            name: request.name.clone(),
            email: request.email.clone(),
            url: request.url.clone(),
            results: SavedResults {
                mb: result.mb.clone(),
                grams: result.grams.clone(),
            },
            device_name: result.device,
        }
    }
}
