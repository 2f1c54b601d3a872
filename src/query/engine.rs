/// 캐시 위의 검색/정렬
/// 1. 검색, 입찰가 정렬: 복사본 기준, 캐시 순서 유지
/// 2. 등록일/수정일/마감일 정렬: 캐시를 직접 정렬 (마지막 정렬이 남는다)
// region:    --- Imports
use super::bids::highest_bid;
use crate::listing::cache::ListingCache;
use crate::listing::model::Listing;
use std::cmp::Ordering;
use std::str::FromStr;
use tracing::info;
// endregion: --- Imports

// region:    --- Search

/// 제목 부분 일치 검색 (대소문자 무시). 빈 검색어는 전체 반환
pub fn search<'a>(cache: &'a ListingCache, query: &str) -> Vec<&'a Listing> {
    filter_by_title(cache.get().iter(), query)
}

fn filter_by_title<'a>(
    listings: impl Iterator<Item = &'a Listing>,
    query: &str,
) -> Vec<&'a Listing> {
    let needle = query.trim().to_lowercase();
    info!("{:<12} --> 제목 검색: {:?}", "Query", needle);
    listings
        .filter(|listing| listing.title.to_lowercase().contains(&needle))
        .collect()
}

// endregion: --- Search

// region:    --- Bid Sorts

/// 최고 입찰가 내림차순. 입찰 없는 상품은 제외
pub fn sort_by_highest_bid(cache: &ListingCache) -> Vec<&Listing> {
    sort_by_bid(cache, |a, b| b.total_cmp(&a))
}

/// 최고 입찰가 오름차순. 입찰 없는 상품은 제외
pub fn sort_by_lowest_bid(cache: &ListingCache) -> Vec<&Listing> {
    sort_by_bid(cache, |a, b| a.total_cmp(&b))
}

fn sort_by_bid(cache: &ListingCache, order: impl Fn(f64, f64) -> Ordering) -> Vec<&Listing> {
    let mut with_bids: Vec<(&Listing, f64)> = cache
        .get()
        .iter()
        .filter_map(|listing| highest_bid(&listing.bids).map(|amount| (listing, amount)))
        .collect();

    // stable sort: 동일 금액은 캐시 순서 유지
    with_bids.sort_by(|(_, a), (_, b)| order(*a, *b));
    with_bids.into_iter().map(|(listing, _)| listing).collect()
}

// endregion: --- Bid Sorts

// region:    --- In-place Sorts

/// 등록일 내림차순 (최신순), 캐시를 직접 정렬
pub fn sort_by_created(cache: &mut ListingCache) -> &[Listing] {
    cache.get_mut().sort_by(|a, b| b.created.cmp(&a.created));
    cache.get()
}

/// 수정일 내림차순, 캐시를 직접 정렬
pub fn sort_by_updated(cache: &mut ListingCache) -> &[Listing] {
    cache.get_mut().sort_by(|a, b| b.updated.cmp(&a.updated));
    cache.get()
}

/// 마감 임박순, 캐시를 직접 정렬
pub fn sort_by_ends_at(cache: &mut ListingCache) -> &[Listing] {
    cache.get_mut().sort_by(|a, b| a.ends_at.cmp(&b.ends_at));
    cache.get()
}

// endregion: --- In-place Sorts

// region:    --- Listing Query

/// 목록 화면 정렬 버튼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Created,
    Updated,
    EndsAt,
    HighestBid,
    LowestBid,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(SortOrder::Created),
            "updated" => Ok(SortOrder::Updated),
            "ends_at" => Ok(SortOrder::EndsAt),
            "highest_bid" => Ok(SortOrder::HighestBid),
            "lowest_bid" => Ok(SortOrder::LowestBid),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// 검색어 + 정렬 조합
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub sort: Option<SortOrder>,
}

/// 정렬을 먼저 적용한 뒤 그 결과에서 검색
pub fn run_query<'a>(cache: &'a mut ListingCache, query: &ListingQuery) -> Vec<&'a Listing> {
    info!("{:<12} --> 목록 질의: {:?}", "Query", query);
    let sorted: Vec<&Listing> = match query.sort {
        Some(SortOrder::Created) => sort_by_created(cache).iter().collect(),
        Some(SortOrder::Updated) => sort_by_updated(cache).iter().collect(),
        Some(SortOrder::EndsAt) => sort_by_ends_at(cache).iter().collect(),
        Some(SortOrder::HighestBid) => sort_by_highest_bid(cache),
        Some(SortOrder::LowestBid) => sort_by_lowest_bid(cache),
        None => cache.get().iter().collect(),
    };

    match query.search.as_deref() {
        Some(needle) => filter_by_title(sorted.into_iter(), needle),
        None => sorted,
    }
}

// endregion: --- Listing Query
