use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::model::Media;

/// 모든 응답은 `{ "data": ... }` 로 감싸져 온다
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// 에러 응답. 최상위 message 또는 errors[0].message
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or_else(|| self.errors.into_iter().find_map(|detail| detail.message))
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// 회원가입 요청
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Media>,
}

#[derive(Debug, Deserialize)]
pub struct ApiKey {
    pub key: String,
}

/// 상품 목록 조회 조건 (`_bids`, `_active`, `_tag`)
#[derive(Debug, Clone)]
pub struct ListingFilters {
    pub bids: bool,
    pub active: bool,
    pub tag: Option<String>,
}

impl Default for ListingFilters {
    fn default() -> Self {
        Self {
            bids: true,
            active: true,
            tag: None,
        }
    }
}

impl ListingFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.bids {
            pairs.push(("_bids", "true".to_string()));
        }
        if self.active {
            pairs.push(("_active", "true".to_string()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("_tag", tag.clone()));
        }
        pairs
    }
}

/// 상품 등록/수정 요청
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingBody {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<Media>,
    /// 수정 시에는 보내지 않는다
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct BidRequest {
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProfileCount {
    #[serde(default)]
    pub listings: u32,
    #[serde(default)]
    pub wins: u32,
}

/// 사용자 프로필
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<Media>,
    #[serde(default)]
    pub banner: Option<Media>,
    #[serde(default)]
    pub credits: Option<i64>,
    #[serde(default, rename = "_count")]
    pub count: Option<ProfileCount>,
}

/// 프로필 수정 요청
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Media>,
}
