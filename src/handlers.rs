// region:    --- Imports
use crate::api::payloads::ListingFilters;
use crate::bidding::commands::{handle_place_bid, PlaceBidCommand};
use crate::error::ClientError;
use crate::forms::auth::{self, LoginForm, RegisterForm};
use crate::forms::listing::{
    submit_create_listing, submit_delete_listing, submit_edit_listing, CreateListingForm,
    EditListingForm,
};
use crate::forms::profile::{submit_profile_update, ProfileForm};
use crate::forms::FormOutcome;
use crate::query::{run_query, ListingQuery, SortOrder};
use crate::render::html::{
    alert_html, escape, nav_html, page, search_bar_html, AlertKind, CREATE_LISTING_FORM,
    LOGIN_FORMS,
};
use crate::render::{grid_html, render_detail, render_grid, render_profile};
use crate::session::SessionContext;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Helpers

/// 세션을 읽지 못하면 로그아웃 상태로 본다
fn session_context(state: &AppState) -> SessionContext {
    state.sessions.context().unwrap_or_else(|e| {
        warn!("{:<12} --> 세션 조회 실패: {}", "Handler", e);
        SessionContext::LoggedOut
    })
}

fn render_page(title: &str, session: &SessionContext, body: &str) -> Html<String> {
    Html(page(
        title,
        &format!("{}\n{}", nav_html(session.is_authenticated()), body),
    ))
}

/// 폼 결과: 성공이면 메시지 후 이동, 실패면 원래 화면 위에 메시지
fn form_response(
    title: &str,
    session: &SessionContext,
    outcome: FormOutcome,
    view: &str,
) -> Response {
    let mut body = outcome.to_html();
    if let Some(url) = &outcome.redirect {
        body.push_str(&format!(
            r#"<meta http-equiv="refresh" content="2;url={}">"#,
            escape(url)
        ));
    }
    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        body.push('\n');
        body.push_str(view);
        StatusCode::BAD_REQUEST
    };
    (status, render_page(title, session, &body)).into_response()
}

/// 입찰 실패 시 다시 보여줄 상세 화면
async fn detail_view(state: &AppState, session: &SessionContext, id: &str) -> String {
    match state.api.fetch_listing_detail(session, id).await {
        Ok(listing) => render_detail(&listing).to_html(),
        Err(e) => {
            warn!("{:<12} --> 상세 화면 재조회 실패: {}", "Handler", e);
            alert_html(AlertKind::Danger, &e.user_message())
        }
    }
}

/// 프로필 + 내 상품 목록 화면
async fn profile_html(
    state: &AppState,
    session: &SessionContext,
    username: &str,
) -> Result<String, ClientError> {
    let profile = state.api.fetch_profile(session, username).await?;

    let has_listings = profile.count.as_ref().map(|c| c.listings > 0).unwrap_or(false);
    let (listings, alert) = if has_listings {
        match state.api.fetch_profile_listings(session, username).await {
            Ok(listings) => (listings, String::new()),
            Err(e) => {
                warn!("{:<12} --> 내 상품 목록 조회 실패: {}", "HandlerQuery", e);
                (
                    Vec::new(),
                    alert_html(
                        AlertKind::Danger,
                        "Failed to load listings. Please try again later.",
                    ),
                )
            }
        }
    } else {
        (Vec::new(), String::new())
    };

    let view = render_profile(&profile, &listings);
    Ok(format!("{}\n{}", view.to_html(), alert))
}

async fn failed_profile_view(
    state: &AppState,
    session: &SessionContext,
    outcome: &FormOutcome,
) -> String {
    if outcome.is_success() {
        String::new()
    } else {
        profile_view(state, session).await
    }
}

/// 프로필 폼 실패 시 다시 보여줄 화면 (로그아웃 상태면 없음)
async fn profile_view(state: &AppState, session: &SessionContext) -> String {
    let Some(session_user) = session.session() else {
        return String::new();
    };
    match profile_html(state, session, &session_user.username).await {
        Ok(html) => html,
        Err(e) => alert_html(AlertKind::Danger, &e.user_message()),
    }
}

// endregion: --- Helpers

// region:    --- Query Handlers

#[derive(Debug, Deserialize)]
pub struct GridParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub tag: Option<String>,
}

/// 상품 목록 (검색/정렬)
pub async fn handle_get_listings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GridParams>,
) -> impl IntoResponse {
    info!("{:<12} --> 상품 목록 조회: {:?}", "HandlerQuery", params);
    let session = session_context(&state);

    let sort = params.sort.as_deref().and_then(|sort| {
        sort.parse::<SortOrder>()
            .map_err(|e| warn!("{:<12} --> {}", "HandlerQuery", e))
            .ok()
    });
    let query = ListingQuery {
        search: params.q.clone(),
        sort,
    };
    let tag = params.tag.clone().filter(|tag| !tag.trim().is_empty());
    let search_bar = search_bar_html(params.q.as_deref().unwrap_or_default(), tag.as_deref());
    let filters = ListingFilters {
        tag,
        ..ListingFilters::default()
    };

    let listings = match state.api.fetch_listings(&session, &filters).await {
        Ok(listings) => listings,
        Err(e) => {
            // 목록은 비워두고 알림만 표시
            let body = format!(
                "{search_bar}\n{}\n{}",
                alert_html(AlertKind::Danger, &e.user_message()),
                grid_html(&[])
            );
            return render_page("Listings", &session, &body).into_response();
        }
    };

    let mut cache = state.cache.lock().await;
    cache.load(listings);
    let cards = render_grid(run_query(&mut cache, &query), Utc::now());
    drop(cache);

    let empty = if cards.is_empty() {
        alert_html(AlertKind::Info, "No listings found.")
    } else {
        String::new()
    };
    let body = format!("{search_bar}\n{empty}\n{}", grid_html(&cards));
    render_page("Listings", &session, &body).into_response()
}

#[derive(Debug, Deserialize)]
pub struct DetailParams {
    pub id: Option<String>,
}

/// 상품 상세
pub async fn handle_get_listing(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DetailParams>,
) -> Response {
    info!("{:<12} --> 상품 상세 조회: {:?}", "HandlerQuery", params.id);
    let session = session_context(&state);

    let Some(id) = params.id.filter(|id| !id.trim().is_empty()) else {
        return ClientError::Validation("Missing listing id.".to_string()).into_response();
    };

    match state.api.fetch_listing_detail(&session, &id).await {
        Ok(listing) => {
            let detail = render_detail(&listing);
            render_page(&detail.title, &session, &detail.to_html()).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// 내 프로필 + 내 상품 목록
pub async fn handle_get_profile(State(state): State<Arc<AppState>>) -> Response {
    info!("{:<12} --> 프로필 조회", "HandlerQuery");
    let session = session_context(&state);
    let Some(username) = session.session().map(|s| s.username.clone()) else {
        let body = alert_html(
            AlertKind::Danger,
            "Unauthorized access. Please log in to view your listings.",
        );
        return (StatusCode::UNAUTHORIZED, render_page("Profile", &session, &body)).into_response();
    };

    match profile_html(&state, &session, &username).await {
        Ok(body) => render_page("Profile", &session, &body).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn handle_get_login(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    render_page("Log in", &session_context(&state), LOGIN_FORMS)
}

pub async fn handle_get_new_listing(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    render_page("New listing", &session_context(&state), CREATE_LISTING_FORM)
}

// endregion: --- Query Handlers

// region:    --- Command Handlers

/// 로그인
pub async fn handle_login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Response {
    info!("{:<12} --> 로그인 요청", "Command");
    let outcome = auth::submit_login(state.api.as_ref(), &state.sessions, &form).await;
    form_response("Log in", &session_context(&state), outcome, LOGIN_FORMS)
}

/// 회원가입
pub async fn handle_register(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RegisterForm>,
) -> Response {
    info!("{:<12} --> 회원가입 요청", "Command");
    let outcome = auth::submit_register(state.api.as_ref(), &form).await;
    form_response("Register", &session_context(&state), outcome, LOGIN_FORMS)
}

pub async fn handle_logout(State(state): State<Arc<AppState>>) -> Response {
    let outcome = auth::logout(&state.sessions);
    form_response("Log out", &session_context(&state), outcome, "")
}

/// 입찰
pub async fn handle_bid(
    State(state): State<Arc<AppState>>,
    Form(cmd): Form<PlaceBidCommand>,
) -> Response {
    let session = session_context(&state);
    let outcome = handle_place_bid(&cmd, state.api.as_ref(), &session).await;
    let view = if outcome.is_success() {
        String::new()
    } else {
        detail_view(&state, &session, &cmd.id).await
    };
    form_response("Place bid", &session, outcome, &view)
}

/// 상품 등록
pub async fn handle_create_listing(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateListingForm>,
) -> Response {
    let session = session_context(&state);
    let outcome = submit_create_listing(state.api.as_ref(), &session, &form).await;
    form_response("New listing", &session, outcome, CREATE_LISTING_FORM)
}

/// 상품 수정
pub async fn handle_edit_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<EditListingForm>,
) -> Response {
    let session = session_context(&state);
    let outcome = submit_edit_listing(state.api.as_ref(), &session, &id, &form).await;
    let view = failed_profile_view(&state, &session, &outcome).await;
    form_response("Edit listing", &session, outcome, &view)
}

/// 상품 삭제
pub async fn handle_delete_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let session = session_context(&state);
    let outcome = submit_delete_listing(state.api.as_ref(), &session, &id).await;
    let view = failed_profile_view(&state, &session, &outcome).await;
    form_response("Delete listing", &session, outcome, &view)
}

/// 프로필 수정
pub async fn handle_update_profile(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ProfileForm>,
) -> Response {
    let session = session_context(&state);
    let outcome = submit_profile_update(state.api.as_ref(), &session, &form).await;
    let view = failed_profile_view(&state, &session, &outcome).await;
    form_response("Profile", &session, outcome, &view)
}

// endregion: --- Command Handlers

// region:    --- Routes

/// 라우터 설정
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_get_listings))
        .route("/listing", get(handle_get_listing))
        .route("/listing/bid", post(handle_bid))
        .route("/login", get(handle_get_login).post(handle_login))
        .route("/register", post(handle_register))
        .route("/logout", post(handle_logout))
        .route("/profile", get(handle_get_profile).post(handle_update_profile))
        .route("/listings", post(handle_create_listing))
        .route("/listings/new", get(handle_get_new_listing))
        .route("/listings/:id/edit", post(handle_edit_listing))
        .route("/listings/:id/delete", post(handle_delete_listing))
        .with_state(state)
}

// endregion: --- Routes
