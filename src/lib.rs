//! 웹사이트 탄소 발자국 감사 라이브러리
//!
//! PageSpeed Insights의 total byte weight로 페이지뷰당 CO2 배출량을 추정하고 결과를 저장 API로 전송한다

pub mod audit;

// 핵심 타입 재수출
pub use audit::{
    AuditConfig, AuditError, AuditGateway, AuditRequest, AuditResult, EmissionRating,
    FormController, FormEvent, FormState, PageSpeedClient, Phase, RequiredField, SaveRecord,
    Strategy,
};
