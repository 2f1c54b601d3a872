use auction_client::bidding::model::{Bid, Bidder};
use auction_client::listing::cache::ListingCache;
use auction_client::listing::model::{Listing, Media};
use auction_client::query::{
    highest_bid, lowest_bid, run_query, search, sort_by_created, sort_by_ends_at,
    sort_by_highest_bid, sort_by_lowest_bid, sort_by_updated, ListingQuery, SortOrder,
};
use chrono::{Duration, TimeZone, Utc};

/// 테스트용 입찰 생성
fn bids(amounts: &[f64]) -> Vec<Bid> {
    amounts
        .iter()
        .enumerate()
        .map(|(i, amount)| Bid {
            id: Some(format!("bid-{i}")),
            amount: *amount,
            bidder: Bidder {
                name: format!("bidder{i}"),
            },
            created: None,
        })
        .collect()
}

/// 테스트용 상품 생성 (offset 시간 단위로 created/updated/endsAt 조정)
fn listing(id: &str, title: &str, amounts: &[f64], offset_hours: i64) -> Listing {
    let base = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        tags: vec![],
        media: vec![Media {
            url: format!("https://img.example/{id}.jpg"),
            alt: None,
        }],
        created: base + Duration::hours(offset_hours),
        updated: base - Duration::hours(offset_hours),
        ends_at: base + Duration::days(10) - Duration::hours(offset_hours),
        bids: bids(amounts),
        seller: None,
        count: None,
    }
}

fn ids(listings: &[&Listing]) -> Vec<String> {
    listings.iter().map(|l| l.id.clone()).collect()
}

fn cache_ids(cache: &ListingCache) -> Vec<String> {
    cache.get().iter().map(|l| l.id.clone()).collect()
}

#[test]
fn test_highest_and_lowest_bid() {
    assert_eq!(highest_bid(&[]), None);
    assert_eq!(lowest_bid(&[]), None);
    assert_eq!(highest_bid(&bids(&[5.0, 20.0])), Some(20.0));
    assert_eq!(lowest_bid(&bids(&[5.0, 20.0])), Some(5.0));
}

#[test]
fn test_sort_by_highest_bid_drops_listings_without_bids() {
    let mut cache = ListingCache::new();
    cache.load(vec![
        listing("none", "No bids", &[], 0),
        listing("three", "Three", &[3.0], 1),
        listing("nine", "Nine", &[1.0, 9.0], 2),
    ]);

    let sorted = sort_by_highest_bid(&cache);
    assert_eq!(ids(&sorted), vec!["nine", "three"]);
    assert_eq!(highest_bid(&sorted[0].bids), Some(9.0));

    // 캐시 순서는 그대로
    assert_eq!(cache_ids(&cache), vec!["none", "three", "nine"]);
}

#[test]
fn test_sort_by_lowest_bid_orders_by_highest_amount_ascending() {
    let mut cache = ListingCache::new();
    cache.load(vec![
        listing("a", "A", &[1.0, 50.0], 0),
        listing("b", "B", &[10.0], 1),
        listing("c", "C", &[], 2),
    ]);

    let sorted = sort_by_lowest_bid(&cache);
    assert_eq!(ids(&sorted), vec!["b", "a"]);
}

#[test]
fn test_bid_sort_ties_keep_cache_order() {
    let mut cache = ListingCache::new();
    cache.load(vec![
        listing("first", "First", &[7.0], 0),
        listing("second", "Second", &[7.0], 1),
    ]);

    assert_eq!(ids(&sort_by_highest_bid(&cache)), vec!["first", "second"]);
    assert_eq!(ids(&sort_by_lowest_bid(&cache)), vec!["first", "second"]);
}

#[test]
fn test_search_matches_title_case_insensitively() {
    let mut cache = ListingCache::new();
    cache.load(vec![
        listing("1", "Table lamp", &[], 0),
        listing("2", "MacBook", &[], 1),
        listing("3", "Desk", &[], 2),
    ]);

    assert_eq!(ids(&search(&cache, "tab")), vec!["1"]);
    assert_eq!(ids(&search(&cache, "MAC")), vec!["2"]);
    assert_eq!(ids(&search(&cache, "")), vec!["1", "2", "3"]);
    assert_eq!(ids(&search(&cache, "  desk  ")), vec!["3"]);
    assert!(search(&cache, "chair").is_empty());
}

#[test]
fn test_timestamp_sorts_reorder_cache_in_place() {
    let mut cache = ListingCache::new();
    cache.load(vec![
        listing("old", "Old", &[], 0),
        listing("mid", "Mid", &[], 1),
        listing("new", "New", &[], 2),
    ]);

    sort_by_created(&mut cache);
    assert_eq!(cache_ids(&cache), vec!["new", "mid", "old"]);

    sort_by_updated(&mut cache);
    assert_eq!(cache_ids(&cache), vec!["old", "mid", "new"]);

    // 마지막 정렬이 남는다
    sort_by_created(&mut cache);
    sort_by_ends_at(&mut cache);
    assert_eq!(cache_ids(&cache), vec!["new", "mid", "old"]);
}

#[test]
fn test_listings_without_bids_resurface_after_timestamp_sort() {
    let mut cache = ListingCache::new();
    cache.load(vec![
        listing("none", "No bids", &[], 0),
        listing("some", "Some bids", &[4.0], 1),
    ]);

    assert_eq!(sort_by_highest_bid(&cache).len(), 1);
    assert_eq!(sort_by_created(&mut cache).len(), 2);
}

#[test]
fn test_run_query_sorts_then_searches() {
    let mut cache = ListingCache::new();
    cache.load(vec![
        listing("lamp-old", "Old lamp", &[2.0], 0),
        listing("desk", "Desk", &[30.0], 1),
        listing("lamp-new", "New lamp", &[8.0], 2),
    ]);

    let query = ListingQuery {
        search: Some("LAMP".to_string()),
        sort: Some(SortOrder::HighestBid),
    };
    assert_eq!(ids(&run_query(&mut cache, &query)), vec!["lamp-new", "lamp-old"]);

    let query = ListingQuery {
        search: None,
        sort: Some(SortOrder::Created),
    };
    assert_eq!(
        ids(&run_query(&mut cache, &query)),
        vec!["lamp-new", "desk", "lamp-old"]
    );

    assert_eq!(run_query(&mut cache, &ListingQuery::default()).len(), 3);
}

#[test]
fn test_sort_order_parse() {
    assert_eq!("ends_at".parse::<SortOrder>(), Ok(SortOrder::EndsAt));
    assert_eq!("highest_bid".parse::<SortOrder>(), Ok(SortOrder::HighestBid));
    assert!("price".parse::<SortOrder>().is_err());
}

#[test]
fn test_cache_load_replaces_contents() {
    let mut cache = ListingCache::new();
    assert!(cache.is_empty());

    cache.load(vec![listing("a", "A", &[], 0), listing("b", "B", &[], 1)]);
    assert_eq!(cache.len(), 2);

    cache.load(vec![listing("c", "C", &[], 0)]);
    assert_eq!(cache_ids(&cache), vec!["c"]);
}
