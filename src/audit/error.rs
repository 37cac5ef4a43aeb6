use std::fmt;
use thiserror::Error;

/// 필수 입력 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Url,
    Name,
    Email,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Url => "URL",
            RequiredField::Name => "Name",
            RequiredField::Email => "Email",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 제출 과정에서 발생하는 모든 에러. Display 문자열이 곧 사용자에게 보이는 메시지다.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuditError {
    #[error("{0} is required.")]
    MissingField(RequiredField),

    #[error("Failed to fetch audit data: {0}")]
    Fetch(String),

    #[error("Total byte weight not found in API response.")]
    MetricMissing,

    #[error("Failed to save data: {0}")]
    Save(String),

    #[error("An audit is already in progress.")]
    Busy,

    #[error("The audit was interrupted before it finished.")]
    Interrupted,
}
