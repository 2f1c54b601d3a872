/// 상품 카드 그리드
// region:    --- Imports
use super::countdown::{time_remaining, TimeRemaining};
use super::description::DescriptionToggle;
use super::html::{detail_href, escape};
use crate::listing::model::Listing;
use crate::query::bids::{bid_label, highest_bid};
use chrono::{DateTime, Utc};
use tracing::debug;
// endregion: --- Imports

// region:    --- Listing Card
/// 카드 한 장
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    pub id: String,
    pub image_url: String,
    pub image_alt: String,
    pub title: String,
    pub description: DescriptionToggle,
    pub time_remaining: TimeRemaining,
    pub highest_bid: Option<f64>,
}

impl ListingCard {
    pub fn detail_href(&self) -> String {
        detail_href(&self.id)
    }

    pub fn highest_bid_label(&self) -> String {
        bid_label(self.highest_bid)
    }

    pub fn to_html(&self) -> String {
        let id = escape(&self.id);
        let toggle = if self.description.is_truncatable() {
            format!(
                r#"<button class="btn btn-link" data-toggle-desc="desc-{id}" data-expanded="false" data-full="{}" data-short="{}">{}</button>"#,
                escape(self.description.full()),
                escape(self.description.short()),
                self.description.label()
            )
        } else {
            String::new()
        };

        format!(
            r#"<div class="col-md-3 mb-4">
  <div class="card">
    <img src="{image}" class="card-img-top" alt="{alt}">
    <div class="card-body">
      <h5 class="card-title">{title}</h5>
      <p class="card-text" id="desc-{id}">{text}</p>
      <div id="button-container-{id}">{toggle}</div>
    </div>
    <div class="card-footer text-center">
      <p class="card-text"><strong>Time Remaining:</strong> {remaining}</p>
      <p class="card-text"><strong>Highest Bid:</strong> {bid}</p>
      <a href="{href}" class="btn btn-secondary">View Details</a>
    </div>
  </div>
</div>"#,
            image = escape(&self.image_url),
            alt = escape(&self.image_alt),
            title = escape(&self.title),
            text = escape(self.description.text()),
            remaining = self.time_remaining,
            bid = escape(&self.highest_bid_label()),
            href = escape(&self.detail_href()),
        )
    }
}
// endregion: --- Listing Card

// region:    --- Render Grid

/// 카드 목록 생성. 사용 가능한 이미지가 없는 상품은 조용히 건너뛴다
pub fn render_grid<'a>(
    listings: impl IntoIterator<Item = &'a Listing>,
    now: DateTime<Utc>,
) -> Vec<ListingCard> {
    listings
        .into_iter()
        .filter_map(|listing| {
            let Some(cover) = listing.cover().filter(|media| media.has_usable_url()) else {
                debug!("{:<12} --> 이미지 없는 상품 건너뜀 id: {}", "Render", listing.id);
                return None;
            };

            Some(ListingCard {
                id: listing.id.clone(),
                image_url: cover.url.clone(),
                image_alt: cover
                    .alt
                    .clone()
                    .filter(|alt| !alt.is_empty())
                    .unwrap_or_else(|| listing.title.clone()),
                title: listing.title.clone(),
                description: DescriptionToggle::new(listing.description.as_deref()),
                time_remaining: time_remaining(listing.ends_at, now),
                highest_bid: highest_bid(&listing.bids),
            })
        })
        .collect()
}

const TOGGLE_SCRIPT: &str = r#"<script>
document.querySelectorAll("[data-toggle-desc]").forEach(function (button) {
  button.addEventListener("click", function () {
    var target = document.getElementById(button.dataset.toggleDesc);
    var expanded = button.dataset.expanded === "true";
    target.textContent = expanded ? button.dataset.short : button.dataset.full;
    button.textContent = expanded ? "View More" : "View Less";
    button.dataset.expanded = expanded ? "false" : "true";
  });
});
</script>"#;

/// 그리드 전체를 새로 그린다
pub fn grid_html(cards: &[ListingCard]) -> String {
    let mut html = String::from(r#"<div id="listings" class="row">"#);
    for card in cards {
        html.push('\n');
        html.push_str(&card.to_html());
    }
    html.push_str("\n</div>\n");
    html.push_str(TOGGLE_SCRIPT);
    html
}

// endregion: --- Render Grid
