use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bidding::model::Bid;

/// 이미지 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl Media {
    /// 공백이 아닌 URL 이 있는지
    pub fn has_usable_url(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

/// 판매자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingCount {
    #[serde(default)]
    pub bids: u32,
}

// 경매 상품 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub media: Vec<Media>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub bids: Vec<Bid>,
    #[serde(default)]
    pub seller: Option<Seller>,
    #[serde(default, rename = "_count")]
    pub count: Option<ListingCount>,
}

impl Listing {
    /// 대표 이미지 (첫 번째 미디어)
    pub fn cover(&self) -> Option<&Media> {
        self.media.first()
    }

    pub fn has_bids(&self) -> bool {
        !self.bids.is_empty()
    }
}
