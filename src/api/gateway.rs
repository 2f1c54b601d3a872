// region:    --- Imports
use super::endpoints;
use super::payloads::{
    ApiKey, BidRequest, Envelope, ErrorBody, ListingBody, ListingFilters, LoginRequest, Profile,
    ProfileUpdate, RegisterRequest,
};
use crate::error::ClientError;
use crate::listing::model::Listing;
use crate::session::{Session, SessionContext};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};
// endregion: --- Imports

// region:    --- Auction Api Trait
/// 원격 경매 API 게이트웨이
#[async_trait]
pub trait AuctionApi: Send + Sync {
    /// 로그인. 응답 본문 전체를 그대로 돌려준다 (세션 저장용)
    async fn login(&self, email: &str, password: &str) -> Result<serde_json::Value, ClientError>;

    async fn register(&self, user: &RegisterRequest) -> Result<Profile, ClientError>;

    /// access token 으로 API 키 발급
    async fn create_api_key(&self, access_token: &str) -> Result<String, ClientError>;

    async fn fetch_listings(
        &self,
        session: &SessionContext,
        filters: &ListingFilters,
    ) -> Result<Vec<Listing>, ClientError>;

    async fn fetch_listing_detail(
        &self,
        session: &SessionContext,
        id: &str,
    ) -> Result<Listing, ClientError>;

    async fn create_listing(
        &self,
        session: &SessionContext,
        body: &ListingBody,
    ) -> Result<Listing, ClientError>;

    async fn update_listing(
        &self,
        session: &SessionContext,
        id: &str,
        body: &ListingBody,
    ) -> Result<Listing, ClientError>;

    async fn delete_listing(&self, session: &SessionContext, id: &str) -> Result<(), ClientError>;

    async fn place_bid(
        &self,
        session: &SessionContext,
        id: &str,
        amount: f64,
    ) -> Result<Listing, ClientError>;

    async fn fetch_profile(
        &self,
        session: &SessionContext,
        username: &str,
    ) -> Result<Profile, ClientError>;

    async fn fetch_profile_listings(
        &self,
        session: &SessionContext,
        username: &str,
    ) -> Result<Vec<Listing>, ClientError>;

    async fn update_profile(
        &self,
        session: &SessionContext,
        username: &str,
        body: &ProfileUpdate,
    ) -> Result<Profile, ClientError>;
}
// endregion: --- Auction Api Trait

// region:    --- Noroff Gateway
/// reqwest 기반 구현체
#[derive(Clone)]
pub struct NoroffGateway {
    client: Client,
    base_url: String,
}

impl NoroffGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// 기본 주소 뒤에 경로 조각을 하나씩 인코딩해서 붙인다
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let invalid = |reason: String| {
            ClientError::NetworkFailure(format!("Invalid API url {}: {}", self.base_url, reason))
        };
        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ClientError> {
        Ok(self
            .client
            .request(method, self.url(segments)?)
            .header("Accept", "application/json"))
    }

    /// 인증 헤더 부착 (Bearer + API 키)
    fn authorized(
        &self,
        method: Method,
        segments: &[&str],
        session: &Session,
    ) -> Result<RequestBuilder, ClientError> {
        Ok(self
            .request(method, segments)?
            .bearer_auth(&session.access_token)
            .header(endpoints::API_KEY_HEADER, &session.api_key))
    }

    /// 로그인 상태일 때만 인증 헤더 부착 (공개 조회용)
    fn maybe_authorized(
        &self,
        method: Method,
        segments: &[&str],
        session: &SessionContext,
    ) -> Result<RequestBuilder, ClientError> {
        match session.session() {
            Some(session) => self.authorized(method, segments, session),
            None => self.request(method, segments),
        }
    }

    async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await.map_err(|e| {
            error!("{:<12} --> 요청 실패: {}", "Gateway", e);
            ClientError::NetworkFailure(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // 본문이 JSON 이 아니면 메시지 없이 상태 코드만 전달
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(ErrorBody::into_message);
        warn!(
            "{:<12} --> 요청 실패 status: {}, message: {:?}",
            "Gateway", status, message
        );
        Err(ClientError::HttpError {
            status: status.as_u16(),
            message,
        })
    }

    async fn data<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
        let envelope: Envelope<T> = Self::send(request).await?.json().await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl AuctionApi for NoroffGateway {
    async fn login(&self, email: &str, password: &str) -> Result<serde_json::Value, ClientError> {
        info!("{:<12} --> 로그인 요청: {}", "Gateway", email);
        let request = self
            .request(Method::POST, endpoints::LOGIN)?
            .json(&LoginRequest { email, password });
        let body: serde_json::Value = Self::send(request).await?.json().await?;

        if body["data"]["accessToken"].as_str().is_none() {
            return Err(ClientError::Decode(
                "login response is missing data.accessToken".to_string(),
            ));
        }
        Ok(body)
    }

    async fn register(&self, user: &RegisterRequest) -> Result<Profile, ClientError> {
        info!("{:<12} --> 회원가입 요청: {}", "Gateway", user.email);
        Self::data(self.request(Method::POST, endpoints::REGISTER)?.json(user)).await
    }

    async fn create_api_key(&self, access_token: &str) -> Result<String, ClientError> {
        info!("{:<12} --> API 키 생성 요청", "Gateway");
        let request = self
            .request(Method::POST, endpoints::CREATE_API_KEY)?
            .bearer_auth(access_token);
        let key: ApiKey = Self::data(request).await?;
        Ok(key.key)
    }

    async fn fetch_listings(
        &self,
        session: &SessionContext,
        filters: &ListingFilters,
    ) -> Result<Vec<Listing>, ClientError> {
        info!("{:<12} --> 상품 목록 조회: {:?}", "Gateway", filters);
        let request = self
            .maybe_authorized(Method::GET, endpoints::LISTINGS, session)?
            .query(&filters.to_query());
        Self::data(request).await
    }

    async fn fetch_listing_detail(
        &self,
        session: &SessionContext,
        id: &str,
    ) -> Result<Listing, ClientError> {
        info!("{:<12} --> 상품 상세 조회 id: {}", "Gateway", id);
        let request = self
            .maybe_authorized(Method::GET, &endpoints::listing(id), session)?
            .query(&[("_bids", "true")]);
        Self::data(request).await
    }

    async fn create_listing(
        &self,
        session: &SessionContext,
        body: &ListingBody,
    ) -> Result<Listing, ClientError> {
        let session = session.require()?;
        info!("{:<12} --> 상품 등록: {}", "Gateway", body.title);
        let request = self
            .authorized(Method::POST, endpoints::LISTINGS, session)?
            .json(body);
        Self::data(request).await
    }

    async fn update_listing(
        &self,
        session: &SessionContext,
        id: &str,
        body: &ListingBody,
    ) -> Result<Listing, ClientError> {
        let session = session.require()?;
        info!("{:<12} --> 상품 수정 id: {}", "Gateway", id);
        let request = self
            .authorized(Method::PUT, &endpoints::listing(id), session)?
            .json(body);
        Self::data(request).await
    }

    async fn delete_listing(&self, session: &SessionContext, id: &str) -> Result<(), ClientError> {
        let session = session.require()?;
        info!("{:<12} --> 상품 삭제 id: {}", "Gateway", id);
        // 204 No Content 포함 2xx 면 성공
        Self::send(self.authorized(Method::DELETE, &endpoints::listing(id), session)?).await?;
        Ok(())
    }

    async fn place_bid(
        &self,
        session: &SessionContext,
        id: &str,
        amount: f64,
    ) -> Result<Listing, ClientError> {
        let session = session.require()?;
        info!("{:<12} --> 입찰 요청 id: {}, amount: {}", "Gateway", id, amount);
        let request = self
            .authorized(Method::POST, &endpoints::listing_bids(id), session)?
            .json(&BidRequest { amount });
        Self::data(request).await
    }

    async fn fetch_profile(
        &self,
        session: &SessionContext,
        username: &str,
    ) -> Result<Profile, ClientError> {
        let session = session.require()?;
        info!("{:<12} --> 프로필 조회: {}", "Gateway", username);
        Self::data(self.authorized(Method::GET, &endpoints::profile(username), session)?).await
    }

    async fn fetch_profile_listings(
        &self,
        session: &SessionContext,
        username: &str,
    ) -> Result<Vec<Listing>, ClientError> {
        let session = session.require()?;
        info!("{:<12} --> 프로필 상품 목록 조회: {}", "Gateway", username);
        let request =
            self.authorized(Method::GET, &endpoints::profile_listings(username), session)?;
        Self::data(request).await
    }

    async fn update_profile(
        &self,
        session: &SessionContext,
        username: &str,
        body: &ProfileUpdate,
    ) -> Result<Profile, ClientError> {
        let session = session.require()?;
        info!("{:<12} --> 프로필 수정: {}", "Gateway", username);
        let request = self
            .authorized(Method::PUT, &endpoints::profile(username), session)?
            .json(body);
        Self::data(request).await
    }
}
// endregion: --- Noroff Gateway
