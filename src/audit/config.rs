/// 원격 엔드포인트 설정
use std::env;

pub const DEFAULT_PAGESPEED_ENDPOINT: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";
pub const DEFAULT_SAVE_ENDPOINT: &str = "http://localhost:5000/api/save";

pub const ENV_API_KEY: &str = "PAGESPEED_API_KEY";
pub const ENV_PAGESPEED_ENDPOINT: &str = "PAGESPEED_ENDPOINT";
pub const ENV_SAVE_ENDPOINT: &str = "CARBON_SAVE_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// PageSpeed runPagespeed 엔드포인트
    pub pagespeed_endpoint: String,
    /// PageSpeed API 키 (없으면 key 파라미터 생략)
    pub api_key: Option<String>,
    /// 결과 저장 엔드포인트
    pub save_endpoint: String,
    pub user_agent: String,
    /// HTTP(S)_PROXY 환경 변수 사용 여부
    pub use_system_proxy: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            pagespeed_endpoint: DEFAULT_PAGESPEED_ENDPOINT.to_string(),
            api_key: None,
            save_endpoint: DEFAULT_SAVE_ENDPOINT.to_string(),
            user_agent: format!("carbon-audit/{}", env!("CARGO_PKG_VERSION")),
            use_system_proxy: true,
        }
    }
}

impl AuditConfig {
    /// 기본값 위에 환경 변수를 덮어쓴 설정
    pub fn from_env() -> Self {
        Self::default().with_lookup(|key| env::var(key).ok())
    }

    /// 빈 값은 설정되지 않은 것으로 취급
    pub fn with_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(endpoint) = lookup(ENV_PAGESPEED_ENDPOINT) {
            self.pagespeed_endpoint = endpoint;
        }
        if let Some(endpoint) = lookup(ENV_SAVE_ENDPOINT) {
            self.save_endpoint = endpoint;
        }
        self
    }
}
