use auction_client::api::payloads::{Profile, ProfileCount};
use auction_client::bidding::model::{Bid, Bidder};
use auction_client::listing::model::{Listing, Media};
use auction_client::render::detail::bid_entries;
use auction_client::render::html::{detail_href, listing_action};
use auction_client::render::{
    grid_html, render_detail, render_grid, render_profile, time_remaining, DescriptionToggle,
    TimeRemaining,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap()
}

fn bid(amount: f64, name: &str) -> Bid {
    Bid {
        id: None,
        amount,
        bidder: Bidder {
            name: name.to_string(),
        },
        created: None,
    }
}

fn listing(id: &str, media: Vec<Media>, bids: Vec<Bid>) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("Listing {id}"),
        description: Some("Short description".to_string()),
        tags: vec![],
        media,
        created: now() - Duration::days(1),
        updated: now() - Duration::days(1),
        ends_at: now() + Duration::days(2),
        bids,
        seller: None,
        count: None,
    }
}

fn media(url: &str) -> Media {
    Media {
        url: url.to_string(),
        alt: None,
    }
}

// region:    --- Countdown

#[test]
fn test_time_remaining_discards_seconds() {
    let remaining = TimeRemaining::from_millis(90_061_000);
    assert_eq!(
        remaining,
        TimeRemaining::Left {
            days: 1,
            hours: 1,
            minutes: 1
        }
    );
    assert_eq!(remaining.to_string(), "1d 1h 1m");
}

#[test]
fn test_time_remaining_ended() {
    assert_eq!(TimeRemaining::from_millis(0).to_string(), "Auction ended");
    assert_eq!(TimeRemaining::from_millis(-5_000).to_string(), "Auction ended");
    assert_eq!(
        time_remaining(now() - Duration::minutes(1), now()),
        TimeRemaining::Ended
    );
}

#[test]
fn test_time_remaining_from_timestamps() {
    let ends_at = now() + Duration::days(3) + Duration::hours(25) + Duration::seconds(59);
    assert_eq!(time_remaining(ends_at, now()).to_string(), "4d 1h 0m");
}

// endregion: --- Countdown

// region:    --- Description

#[test]
fn test_long_description_is_truncated_and_toggles() {
    let text = "a".repeat(50);
    let mut toggle = DescriptionToggle::new(Some(text.as_str()));

    assert!(toggle.is_truncatable());
    assert_eq!(toggle.text(), format!("{}...", "a".repeat(40)));
    assert_eq!(toggle.label(), "View More");

    toggle.toggle();
    assert!(toggle.is_expanded());
    assert_eq!(toggle.text(), text);
    assert_eq!(toggle.label(), "View Less");

    toggle.toggle();
    assert!(!toggle.is_expanded());
    assert_eq!(toggle.text(), format!("{}...", "a".repeat(40)));
}

#[test]
fn test_short_description_is_not_truncated() {
    let text = "b".repeat(40);
    let mut toggle = DescriptionToggle::new(Some(text.as_str()));
    assert!(!toggle.is_truncatable());
    assert_eq!(toggle.text(), text);

    toggle.toggle();
    assert!(!toggle.is_expanded());

    assert_eq!(DescriptionToggle::new(None).text(), "");
}

// endregion: --- Description

// region:    --- Grid

#[test]
fn test_render_grid_skips_listings_without_usable_media() {
    let listings = vec![
        listing("ok", vec![media("https://img.example/ok.jpg")], vec![]),
        listing("no-media", vec![], vec![]),
        listing("blank-url", vec![media("  ")], vec![]),
    ];

    let cards = render_grid(&listings, now());
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, "ok");
    assert_eq!(cards[0].image_alt, "Listing ok");
    assert_eq!(cards[0].detail_href(), "listing?id=ok");
}

#[test]
fn test_grid_card_shows_highest_bid_and_time() {
    let listings = vec![
        listing(
            "bids",
            vec![media("https://img.example/a.jpg")],
            vec![bid(5.0, "ann"), bid(20.0, "bob")],
        ),
        listing("empty", vec![media("https://img.example/b.jpg")], vec![]),
    ];

    let cards = render_grid(&listings, now());
    assert_eq!(cards[0].highest_bid_label(), "20 credits");
    assert_eq!(cards[1].highest_bid_label(), "No bids yet");
    assert_eq!(cards[0].time_remaining.to_string(), "2d 0h 0m");

    let html = grid_html(&cards);
    assert!(html.contains("20 credits"));
    assert!(html.contains("No bids yet"));
    assert!(html.contains(r#"href="listing?id=bids""#));
}

#[test]
fn test_grid_html_escapes_text() {
    let mut item = listing("x", vec![media("https://img.example/x.jpg")], vec![]);
    item.title = "<script>alert(1)</script>".to_string();

    let html = grid_html(&render_grid(&[item], now()));
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

// endregion: --- Grid

// region:    --- Detail

#[test]
fn test_detail_lists_latest_bid_first_and_highlights_it() {
    // 마지막 입찰이 최고가가 아니어도 맨 위 항목을 강조한다
    let item = listing(
        "d",
        vec![media("https://img.example/d.jpg")],
        vec![bid(10.0, "ann"), bid(30.0, "bob"), bid(15.0, "cid")],
    );

    let detail = render_detail(&item);
    let bidders: Vec<&str> = detail.bids.iter().map(|b| b.bidder.as_str()).collect();
    assert_eq!(bidders, vec!["cid", "bob", "ann"]);
    assert!(detail.bids[0].highest);
    assert!(detail.bids[1..].iter().all(|b| !b.highest));
    assert_eq!(detail.current_bid, None);

    let html = detail.to_html();
    assert!(html.contains("Highest Bid Amount: 15"));
    assert!(html.contains("Bid Amount: 30"));
}

#[test]
fn test_detail_without_bids() {
    let item = listing("e", vec![], vec![]);
    let detail = render_detail(&item);

    assert!(detail.bids.is_empty());
    assert_eq!(detail.current_bid.as_deref(), Some("No bids yet."));
    assert_eq!(detail.image_url, None);
    assert!(detail.ends_at.starts_with("Ends at: 2030-01-03"));
    assert!(bid_entries(&[]).is_empty());
}

// endregion: --- Detail

// region:    --- Profile

#[test]
fn test_render_profile_fallbacks() {
    let profile = Profile {
        name: "tester".to_string(),
        email: None,
        bio: None,
        avatar: Some(media("https://img.example/avatar.jpg")),
        banner: None,
        credits: None,
        count: None,
    };

    let view = render_profile(&profile, &[]);
    assert_eq!(view.bio, "No Bio Available");
    assert_eq!(view.credits, 0);
    assert_eq!(view.avatar.alt, "User Avatar");
    assert_eq!(view.banner.alt, "User Banner");
    assert_eq!(view.listings_text, "No listings available.");
    assert!(view.to_html().contains("No listings available."));
}

#[test]
fn test_render_profile_with_listings() {
    let profile = Profile {
        name: "tester".to_string(),
        email: Some("tester@stud.noroff.no".to_string()),
        bio: Some("Collector".to_string()),
        avatar: None,
        banner: None,
        credits: Some(1000),
        count: Some(ProfileCount {
            listings: 2,
            wins: 0,
        }),
    };
    let mut untitled = listing("2", vec![], vec![]);
    untitled.title = String::new();
    untitled.description = None;
    let listings = vec![listing("1", vec![media("https://img.example/1.jpg")], vec![]), untitled];

    let view = render_profile(&profile, &listings);
    assert_eq!(view.listings_text, "You have 2 listings.");
    assert_eq!(view.credits, 1000);
    assert_eq!(view.listings.len(), 2);
    assert!(view.listings[0].image.is_some());
    assert_eq!(view.listings[1].title, "No Title");
    assert_eq!(view.listings[1].description, "No Description");
    assert!(view.to_html().contains(r#"action="/listings/1/delete""#));
}

#[test]
fn test_edit_form_keeps_raw_values() {
    // 표시용 대체 문구가 수정 폼 값으로 들어가면 안 된다
    let profile = Profile {
        name: "tester".to_string(),
        email: None,
        bio: None,
        avatar: None,
        banner: None,
        credits: Some(10),
        count: Some(ProfileCount {
            listings: 1,
            wins: 0,
        }),
    };
    let mut bare = listing("bare", vec![], vec![]);
    bare.title = String::new();
    bare.description = None;

    let view = render_profile(&profile, &[bare]);
    let card = &view.listings[0];
    assert_eq!(card.description, "No Description");
    assert_eq!(card.edit.title, "");
    assert_eq!(card.edit.description, "");
    assert_eq!(card.edit.media_url, "");
    assert_eq!(view.bio_input, "");

    let html = view.to_html();
    assert!(html.contains(r#"<input name="description" value="">"#));
    assert!(!html.contains(r#"value="No Description""#));
    assert!(!html.contains(r#"value="No Title""#));
    assert!(html.contains(r#"<textarea name="bio"></textarea>"#));
    assert!(html.contains("No Bio Available"));
}

#[test]
fn test_edit_form_prefills_existing_values() {
    let profile = Profile {
        name: "tester".to_string(),
        email: None,
        bio: Some("Collector".to_string()),
        avatar: None,
        banner: None,
        credits: None,
        count: None,
    };
    let item = listing("1", vec![media("https://img.example/1.jpg")], vec![]);

    let view = render_profile(&profile, &[item]);
    assert_eq!(view.listings[0].edit.title, "Listing 1");
    assert_eq!(view.listings[0].edit.description, "Short description");
    assert_eq!(view.listings[0].edit.media_url, "https://img.example/1.jpg");
    assert!(view.to_html().contains(r#"<textarea name="bio">Collector</textarea>"#));
}

// endregion: --- Profile

// region:    --- Links

#[test]
fn test_links_encode_listing_id() {
    assert_eq!(detail_href("desk"), "listing?id=desk");
    assert_eq!(detail_href("a&b c"), "listing?id=a%26b+c");
    assert_eq!(listing_action("desk", "edit"), "/listings/desk/edit");
    assert_eq!(listing_action("a/b?c", "delete"), "/listings/a%2Fb%3Fc/delete");
}

// endregion: --- Links
