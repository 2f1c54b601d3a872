// region:    --- Imports
use crate::api::AuctionApi;
use crate::listing::cache::ListingCache;
use crate::session::SessionStore;
use std::sync::Arc;
use tokio::sync::Mutex;
// endregion: --- Imports

/// 핸들러 공유 상태
pub struct AppState {
    pub api: Arc<dyn AuctionApi>,
    pub sessions: SessionStore,
    /// 멀티스레드 런타임이므로 잠금 필요
    pub cache: Mutex<ListingCache>,
}

impl AppState {
    pub fn new(api: Arc<dyn AuctionApi>, sessions: SessionStore) -> Arc<Self> {
        Arc::new(Self {
            api,
            sessions,
            cache: Mutex::new(ListingCache::new()),
        })
    }
}
