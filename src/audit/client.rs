use crate::audit::config::AuditConfig;
use crate::audit::error::AuditError;
use crate::audit::types::{SaveRecord, Strategy};
use anyhow::Result;
use reqwest;
use serde_json::Value;

/// PageSpeed 응답에서 byte weight가 위치한 경로
pub const BYTE_WEIGHT_POINTER: &str = "/lighthouseResult/audits/total-byte-weight/numericValue";

/// 컨트롤러와 두 원격 서비스 사이의 경계
#[allow(async_fn_in_trait)]
pub trait AuditGateway {
    /// 성능 측정 API를 호출해 total byte weight를 반환
    async fn fetch_byte_weight(&self, url: &str, strategy: Strategy) -> Result<f64, AuditError>;

    /// 결과를 저장 엔드포인트로 전송
    async fn save(&self, record: &SaveRecord) -> Result<(), AuditError>;
}

/// 응답 본문에서 byte weight 추출. 경로가 없거나 숫자가 아니면 MetricMissing.
pub fn extract_byte_weight(body: &Value) -> Result<f64, AuditError> {
    body.pointer(BYTE_WEIGHT_POINTER)
        .and_then(Value::as_f64)
        .filter(|bytes| bytes.is_finite() && *bytes >= 0.0)
        .ok_or(AuditError::MetricMissing)
}

/// reqwest 기반 HTTP 게이트웨이
#[derive(Debug, Clone)]
pub struct PageSpeedClient {
    client: reqwest::Client,
    config: AuditConfig,
}

impl PageSpeedClient {
    pub fn new(config: AuditConfig) -> Result<Self> {
        // 타임아웃은 클라이언트 기본 동작에 맡긴다
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    fn query_params<'a>(&'a self, url: &'a str, strategy: Strategy) -> Vec<(&'static str, &'a str)> {
        let mut params = vec![("url", url), ("strategy", strategy.as_str())];
        if let Some(key) = self.config.api_key.as_deref() {
            params.push(("key", key));
        }
        params
    }
}

impl AuditGateway for PageSpeedClient {
    async fn fetch_byte_weight(&self, url: &str, strategy: Strategy) -> Result<f64, AuditError> {
        log::debug!("PageSpeed 요청: {} ({})", url, strategy);

        let response = self
            .client
            .get(&self.config.pagespeed_endpoint)
            .query(&self.query_params(url, strategy))
            .send()
            .await
            .map_err(|e| AuditError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("PageSpeed 응답 실패: {}", status);
            return Err(AuditError::Fetch(format!("HTTP {}", status)));
        }

        // 본문이 JSON이 아니면 필요한 경로도 없는 것
        let body: Value = response.json().await.map_err(|e| {
            log::warn!("PageSpeed 응답 파싱 실패: {}", e);
            AuditError::MetricMissing
        })?;

        extract_byte_weight(&body)
    }

    async fn save(&self, record: &SaveRecord) -> Result<(), AuditError> {
        let response = self
            .client
            .post(&self.config.save_endpoint)
            .json(record)
            .send()
            .await
            .map_err(|e| AuditError::Save(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            log::warn!("저장 실패: {} {}", status, body);
            return Err(AuditError::Save(format!("HTTP {}", status)));
        }

        log::info!("저장 완료: {}", body);
        Ok(())
    }
}
