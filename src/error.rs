// region:    --- Imports
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::render::html::{alert_html, AlertKind};
// endregion: --- Imports

// region:    --- Client Error
/// 클라이언트 전역 에러
#[derive(Error, Debug)]
pub enum ClientError {
    /// 요청 자체가 실패 (오프라인, 연결 거부 등)
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// 2xx 가 아닌 응답
    #[error("Request failed ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    HttpError { status: u16, message: Option<String> },

    /// 폼 입력 검증 실패
    #[error("{0}")]
    Validation(String),

    /// 세션 또는 API 키가 없음
    #[error("You have to be logged in to do that.")]
    MissingSession,

    #[error("Malformed response: {0}")]
    Decode(String),

    /// 세션 저장소 입출력 실패
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl ClientError {
    /// 사용자에게 보여줄 메시지 (서버 메시지가 있으면 우선)
    pub fn user_message(&self) -> String {
        match self {
            ClientError::HttpError {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::NetworkFailure(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        ClientError::Storage(e.to_string())
    }
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        let status = match &self {
            ClientError::NetworkFailure(_) => StatusCode::BAD_GATEWAY,
            ClientError::HttpError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ClientError::Validation(_) => StatusCode::BAD_REQUEST,
            ClientError::MissingSession => StatusCode::UNAUTHORIZED,
            ClientError::Decode(_) => StatusCode::BAD_GATEWAY,
            ClientError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Html(alert_html(AlertKind::Danger, &self.user_message())),
        )
            .into_response()
    }
}
// endregion: --- Client Error
