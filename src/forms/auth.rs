/// 로그인 / 회원가입 / 로그아웃
// region:    --- Imports
use super::validation::validate_registration;
use super::FormOutcome;
use crate::api::payloads::RegisterRequest;
use crate::api::AuctionApi;
use crate::error::ClientError;
use crate::session::SessionStore;
use serde::Deserialize;
use tracing::{error, info};
// endregion: --- Imports

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials and try again.";

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

// region:    --- Login

/// 1. 로그인 → 2. 사용자 저장 → 3. API 키 생성 및 저장 → 메인으로 이동
pub async fn submit_login(
    api: &dyn AuctionApi,
    sessions: &SessionStore,
    form: &LoginForm,
) -> FormOutcome {
    info!("{:<12} --> 로그인 시도: {}", "Form", form.email);
    match login_and_create_key(api, sessions, form).await {
        Ok(()) => FormOutcome::success("Logged in.", "/"),
        Err(e) => {
            error!("{:<12} --> 로그인 실패: {}", "Form", e);
            // API 키까지 받지 못했다면 세션을 남기지 않는다
            if let Err(e) = sessions.clear() {
                error!("{:<12} --> 세션 정리 실패: {}", "Form", e);
            }
            FormOutcome::error(LOGIN_FAILED)
        }
    }
}

async fn login_and_create_key(
    api: &dyn AuctionApi,
    sessions: &SessionStore,
    form: &LoginForm,
) -> Result<(), ClientError> {
    let user = api.login(form.email.trim(), &form.password).await?;
    sessions.store_user(&user)?;

    let access_token = sessions.access_token()?.ok_or(ClientError::MissingSession)?;
    let key = api.create_api_key(&access_token).await?;
    sessions.store_api_key(&key)
}

// endregion: --- Login

// region:    --- Register

pub async fn submit_register(api: &dyn AuctionApi, form: &RegisterForm) -> FormOutcome {
    let email = form.email.trim();
    if let Err(e) = validate_registration(email, &form.password) {
        return FormOutcome::error(e.user_message());
    }

    let request = RegisterRequest {
        name: form.username.trim().to_string(),
        email: email.to_string(),
        password: form.password.clone(),
        bio: None,
        avatar: None,
        banner: None,
    };

    match api.register(&request).await {
        Ok(profile) => {
            info!("{:<12} --> 회원가입 성공: {}", "Form", profile.name);
            FormOutcome::success(
                "Registration successful! Redirecting to login...",
                "/login",
            )
        }
        Err(ClientError::HttpError { message: None, .. }) => {
            FormOutcome::error("Registration failed. Please try again.")
        }
        Err(e) => {
            error!("{:<12} --> 회원가입 실패: {}", "Form", e);
            FormOutcome::error(e.user_message())
        }
    }
}

// endregion: --- Register

// region:    --- Logout

pub fn logout(sessions: &SessionStore) -> FormOutcome {
    match sessions.clear() {
        Ok(()) => FormOutcome::success("Logged out.", "/login"),
        Err(e) => FormOutcome::error(e.user_message()),
    }
}

// endregion: --- Logout
