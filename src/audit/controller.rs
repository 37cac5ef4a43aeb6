//! 폼 상태 머신과 제출 흐름
//!
//! 상태 전이는 전부 [`reduce`]를 통과한다. [`FormController`]는 원격 호출 사이사이에
//! 이벤트를 던질 뿐이다.

use crate::audit::client::AuditGateway;
use crate::audit::emissions::derive_result;
use crate::audit::error::AuditError;
use crate::audit::types::{AuditRequest, AuditResult, SaveRecord, Strategy};

/// 제출 라이프사이클 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Fetching,
    Saving,
}

impl Phase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Phase::Fetching | Phase::Saving)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub url: String,
    pub name: String,
    pub email: String,
    pub strategy: Strategy,
    pub phase: Phase,
    /// 사용자에게 보이는 단일 에러 메시지
    pub error: Option<String>,
    pub result: Option<AuditResult>,
}

impl FormState {
    pub fn request(&self) -> AuditRequest {
        AuditRequest::new(&self.url, &self.name, &self.email, self.strategy)
    }

    pub fn submit_enabled(&self) -> bool {
        !self.phase.is_in_flight()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.phase.is_in_flight() {
            "Analyzing..."
        } else {
            "Analyze"
        }
    }

    /// 에러 라인(있으면) 다음에 결과 라인들
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(error) = &self.error {
            lines.push(error.clone());
        }
        if let Some(result) = &self.result {
            lines.extend(result.display_lines());
        }
        lines
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    SetUrl(String),
    SetName(String),
    SetEmail(String),
    SetStrategy(Strategy),
    Submit,
    ValidationFailed(String),
    ValidationPassed,
    AuditComputed(AuditResult),
    Saved,
    Failed(String),
    /// 진행 중 제출 거부. 단계는 바꾸지 않고 메시지만 표시
    Rejected(String),
}

/// 순수 전이 함수. 진행 중 Submit은 무시된다.
pub fn reduce(mut state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::SetUrl(url) => state.url = url,
        FormEvent::SetName(name) => state.name = name,
        FormEvent::SetEmail(email) => state.email = email,
        FormEvent::SetStrategy(strategy) => state.strategy = strategy,
        FormEvent::Submit => {
            if !state.phase.is_in_flight() {
                state.phase = Phase::Validating;
                state.error = None;
                state.result = None;
            }
        }
        FormEvent::ValidationFailed(message) => {
            if state.phase == Phase::Validating {
                state.phase = Phase::Idle;
            }
            state.error = Some(message);
        }
        FormEvent::ValidationPassed => {
            if state.phase == Phase::Validating {
                state.phase = Phase::Fetching;
            }
            state.error = None;
        }
        FormEvent::AuditComputed(result) => {
            if state.phase == Phase::Fetching {
                state.phase = Phase::Saving;
                state.result = Some(result);
            }
        }
        FormEvent::Saved => {
            if state.phase == Phase::Saving {
                state.phase = Phase::Idle;
            }
        }
        // 저장 단계 실패라면 이미 계산된 결과는 그대로 남는다
        FormEvent::Failed(message) => {
            if state.phase.is_in_flight() {
                state.phase = Phase::Idle;
                state.error = Some(message);
            }
        }
        FormEvent::Rejected(message) => state.error = Some(message),
    }
    state
}

/// 폼 상태를 소유하고 두 단계 네트워크 시퀀스를 조율
pub struct FormController<G: AuditGateway> {
    state: FormState,
    gateway: G,
}

impl<G: AuditGateway> FormController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            state: FormState::default(),
            gateway,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn dispatch(&mut self, event: FormEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.dispatch(FormEvent::SetUrl(url.into()));
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.dispatch(FormEvent::SetName(name.into()));
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.dispatch(FormEvent::SetEmail(email.into()));
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.dispatch(FormEvent::SetStrategy(strategy));
    }

    /// 검증 결과에 따라 에러 메시지를 설정하거나 지운다
    pub fn validate(&mut self) -> Result<(), AuditError> {
        let outcome = self.state.request().validate();
        match &outcome {
            Ok(()) => self.dispatch(FormEvent::ValidationPassed),
            Err(e) => self.dispatch(FormEvent::ValidationFailed(e.to_string())),
        }
        outcome
    }

    /// 성능 조회 → 계산 → 저장. 계산된 결과는 저장 전에 상태에 반영된다.
    ///
    /// 유효한 요청을 전제로 한다. future가 중간에 버려지면 Interrupted 에러와 함께 Idle로 돌아간다.
    pub async fn run_audit(&mut self, request: &AuditRequest) -> Result<AuditResult, AuditError> {
        if self.state.phase != Phase::Fetching {
            self.dispatch(FormEvent::Submit);
            self.dispatch(FormEvent::ValidationPassed);
        }

        let mut guard = InFlightGuard {
            controller: self,
            finished: false,
        };
        let outcome = guard.controller.fetch_and_save(request).await;
        guard.finished = true;

        match &outcome {
            Ok(_) => guard.controller.dispatch(FormEvent::Saved),
            Err(e) => guard.controller.dispatch(FormEvent::Failed(e.to_string())),
        }
        outcome
    }

    async fn fetch_and_save(&mut self, request: &AuditRequest) -> Result<AuditResult, AuditError> {
        let byte_weight = self
            .gateway
            .fetch_byte_weight(&request.url, request.strategy)
            .await?;

        let result = derive_result(byte_weight, request.strategy);
        log::debug!(
            "{} bytes -> {} MB / {} g ({})",
            byte_weight,
            result.mb,
            result.grams,
            result.device
        );
        self.dispatch(FormEvent::AuditComputed(result.clone()));

        let record = SaveRecord::new(request, &result);
        self.gateway.save(&record).await?;

        Ok(result)
    }

    /// 최상위 제출 핸들러. 모든 에러는 여기서 메시지로 축약된다.
    pub async fn submit(&mut self) -> Result<AuditResult, AuditError> {
        if self.state.phase.is_in_flight() {
            let e = AuditError::Busy;
            log::warn!("{}", e);
            self.dispatch(FormEvent::Rejected(e.to_string()));
            return Err(e);
        }

        self.dispatch(FormEvent::Submit);

        if let Err(e) = self.validate() {
            log::warn!("검증 실패: {}", e);
            return Err(e);
        }

        let request = self.state.request();
        let outcome = self.run_audit(&request).await;
        match &outcome {
            Ok(result) => log::info!("감사 완료: {} ({} g)", request.url, result.grams),
            Err(e) => log::error!("Error: {}", e),
        }
        outcome
    }
}

/// 응답 전에 버려진 감사가 컨트롤러를 진행 중 상태로 남기지 않도록 한다
struct InFlightGuard<'a, G: AuditGateway> {
    controller: &'a mut FormController<G>,
    finished: bool,
}

impl<G: AuditGateway> Drop for InFlightGuard<'_, G> {
    fn drop(&mut self) {
        if !self.finished {
            let e = AuditError::Interrupted;
            log::error!("Error: {}", e);
            self.controller.dispatch(FormEvent::Failed(e.to_string()));
        }
    }
}
