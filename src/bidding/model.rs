use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 입찰자
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bidder {
    pub name: String,
}

// 입찰 모델 (서버에서만 추가되고 클라이언트는 읽기만 한다)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    #[serde(default)]
    pub id: Option<String>,
    pub amount: f64,
    pub bidder: Bidder,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}
