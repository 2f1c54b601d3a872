/// 상품 상세 + 입찰 내역
// region:    --- Imports
use super::countdown::ends_at_label;
use super::html::escape;
use crate::bidding::model::Bid;
use crate::listing::model::Listing;
// endregion: --- Imports

// region:    --- Listing Detail
#[derive(Debug, Clone, PartialEq)]
pub struct BidEntry {
    pub amount: f64,
    pub bidder: String,
    /// 목록 맨 위 항목만 강조
    pub highest: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingDetail {
    pub id: String,
    pub image_url: Option<String>,
    pub title: String,
    pub description: String,
    pub ends_at: String,
    /// 입찰이 없을 때만 "No bids yet."
    pub current_bid: Option<String>,
    pub bids: Vec<BidEntry>,
}

/// 상세 화면 모델 생성.
/// 입찰 내역은 역순(최근 입찰 먼저)이며 첫 항목을 최고 입찰로 표시한다.
/// API 가 금액 오름차순으로 준다는 가정이므로 금액을 다시 비교하지 않는다.
pub fn render_detail(listing: &Listing) -> ListingDetail {
    ListingDetail {
        id: listing.id.clone(),
        image_url: listing
            .cover()
            .filter(|media| media.has_usable_url())
            .map(|media| media.url.clone()),
        title: listing.title.clone(),
        description: listing.description.clone().unwrap_or_default(),
        ends_at: ends_at_label(listing.ends_at),
        current_bid: (!listing.has_bids()).then(|| "No bids yet.".to_string()),
        bids: bid_entries(&listing.bids),
    }
}

/// 입찰 내역 역순 정렬, 첫 항목 강조
pub fn bid_entries(bids: &[Bid]) -> Vec<BidEntry> {
    bids.iter()
        .rev()
        .enumerate()
        .map(|(index, bid)| BidEntry {
            amount: bid.amount,
            bidder: bid.bidder.name.clone(),
            highest: index == 0,
        })
        .collect()
}

impl BidEntry {
    pub fn to_html(&self) -> String {
        let (class, heading) = if self.highest {
            ("list-group-item highest-bid", "Highest Bid Amount")
        } else {
            ("list-group-item", "Bid Amount")
        };
        format!(
            r#"<li class="{class}"><h5 class="mb-1">{heading}: {}</h5><p class="mb-0">Bidder: {}</p></li>"#,
            self.amount,
            escape(&self.bidder)
        )
    }
}

impl ListingDetail {
    pub fn to_html(&self) -> String {
        let image = self
            .image_url
            .as_deref()
            .map(|url| {
                format!(
                    r#"<img id="image" src="{}" alt="{}" class="img-fluid">"#,
                    escape(url),
                    escape(&self.title)
                )
            })
            .unwrap_or_default();
        let current_bid = self.current_bid.as_deref().unwrap_or_default();
        let bids: String = self.bids.iter().map(BidEntry::to_html).collect();

        format!(
            r#"<div class="listing-detail">
  {image}
  <h1 id="title">{title}</h1>
  <p id="description">{description}</p>
  <p id="endsAt">{ends_at}</p>
  <p id="currentBid">{current_bid}</p>
  <form method="post" action="/listing/bid">
    <input type="hidden" name="id" value="{id}">
    <input type="number" step="any" id="bidAmount" name="amount">
    <button type="submit" id="placeBidBtn" class="btn btn-primary">Place Bid</button>
  </form>
  <ul id="bidList" class="list-group">{bids}</ul>
</div>"#,
            title = escape(&self.title),
            description = escape(&self.description),
            ends_at = escape(&self.ends_at),
            current_bid = escape(current_bid),
            id = escape(&self.id),
        )
    }
}
// endregion: --- Listing Detail
