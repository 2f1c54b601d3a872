/// 세션 저장소
/// 저장 키 두 개: "user" (로그인 응답 JSON), "apiKey"
/// 둘 중 하나라도 없으면 로그아웃 상태
// region:    --- Imports
pub mod storage;

use crate::error::ClientError;
use serde::Deserialize;
use std::sync::Arc;
use storage::KeyValueStore;
use tracing::{info, warn};
// endregion: --- Imports

pub const USER_KEY: &str = "user";
pub const API_KEY: &str = "apiKey";

// region:    --- Session Model
/// 인증된 세션
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub api_key: String,
    pub username: String,
}

/// API 호출마다 명시적으로 넘기는 세션 상태
#[derive(Debug, Clone, PartialEq)]
pub enum SessionContext {
    LoggedOut,
    Authenticated(Session),
}

impl SessionContext {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionContext::Authenticated(session) => Some(session),
            SessionContext::LoggedOut => None,
        }
    }

    /// 인증이 필요한 호출에서 사용
    pub fn require(&self) -> Result<&Session, ClientError> {
        self.session().ok_or(ClientError::MissingSession)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }
}

/// 저장된 로그인 응답 `{data: {accessToken, name, ...}}`
#[derive(Debug, Deserialize)]
struct StoredUser {
    data: StoredUserData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredUserData {
    access_token: String,
    name: String,
}
// endregion: --- Session Model

// region:    --- Session Store
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// 현재 세션 상태 조회
    pub fn context(&self) -> Result<SessionContext, ClientError> {
        let (Some(user), Some(api_key)) = (self.access_token_user()?, self.api_key()?) else {
            return Ok(SessionContext::LoggedOut);
        };

        Ok(SessionContext::Authenticated(Session {
            access_token: user.data.access_token,
            api_key,
            username: user.data.name,
        }))
    }

    /// 로그인 응답 통째로 저장
    pub fn store_user(&self, user: &serde_json::Value) -> Result<(), ClientError> {
        info!("{:<12} --> 사용자 세션 저장", "Session");
        let raw = serde_json::to_string(user).map_err(|e| ClientError::Storage(e.to_string()))?;
        self.backend.set(USER_KEY, &raw)
    }

    pub fn store_api_key(&self, key: &str) -> Result<(), ClientError> {
        info!("{:<12} --> API 키 저장", "Session");
        self.backend.set(API_KEY, key)
    }

    /// 로그인 응답의 access token (API 키 생성 전 단계에서 사용)
    pub fn access_token(&self) -> Result<Option<String>, ClientError> {
        Ok(self.access_token_user()?.map(|user| user.data.access_token))
    }

    pub fn api_key(&self) -> Result<Option<String>, ClientError> {
        self.backend.get(API_KEY)
    }

    /// 로그아웃: 두 키 모두 삭제
    pub fn clear(&self) -> Result<(), ClientError> {
        info!("{:<12} --> 로그아웃, 세션 삭제", "Session");
        self.backend.remove(USER_KEY)?;
        self.backend.remove(API_KEY)
    }

    fn access_token_user(&self) -> Result<Option<StoredUser>, ClientError> {
        let Some(raw) = self.backend.get(USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<StoredUser>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("{:<12} --> 저장된 사용자 정보 파싱 실패: {}", "Session", e);
                Ok(None)
            }
        }
    }
}
// endregion: --- Session Store
