use tracing::debug;

use super::model::Listing;

/// 현재 페이지에서 마지막으로 가져온 상품 목록.
/// 매번 통째로 교체되며 부분 갱신은 하지 않는다.
#[derive(Debug, Default)]
pub struct ListingCache {
    listings: Vec<Listing>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 캐시 전체 교체
    pub fn load(&mut self, listings: Vec<Listing>) {
        debug!("{:<12} --> 캐시 교체: {}건", "Cache", listings.len());
        self.listings = listings;
    }

    pub fn get(&self) -> &[Listing] {
        &self.listings
    }

    /// 정렬 함수가 순서를 직접 바꿀 수 있도록 노출
    pub fn get_mut(&mut self) -> &mut Vec<Listing> {
        &mut self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
