/// 폼 제출 처리
/// 모든 에러는 여기서 잡아서 화면 안 메시지로 바꾼다. 재시도는 하지 않는다.
pub mod auth;
pub mod listing;
pub mod profile;
pub mod validation;

use crate::render::html::{alert_html, AlertKind};

/// 폼 처리 결과: 인라인 메시지 + (성공 시) 이동할 주소
#[derive(Debug, Clone, PartialEq)]
pub struct FormOutcome {
    pub kind: AlertKind,
    pub message: String,
    pub redirect: Option<String>,
}

impl FormOutcome {
    pub fn success(message: impl Into<String>, redirect: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
            redirect: Some(redirect.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Danger,
            message: message.into(),
            redirect: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == AlertKind::Success
    }

    pub fn to_html(&self) -> String {
        alert_html(self.kind, &self.message)
    }
}
