pub mod bids;
pub mod engine;

pub use bids::{highest_bid, lowest_bid};
pub use engine::{
    run_query, search, sort_by_created, sort_by_ends_at, sort_by_highest_bid,
    sort_by_lowest_bid, sort_by_updated, ListingQuery, SortOrder,
};
