// region:    --- Imports
use super::countdown::ends_at_label;
use super::html::{alert_html, detail_href, escape, listing_action, AlertKind};
use crate::api::payloads::Profile;
use crate::listing::model::{Listing, Media};
use tracing::warn;
// endregion: --- Imports

// region:    --- Profile View
#[derive(Debug, Clone, PartialEq)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

/// 수정 폼 초기값 (표시용 대체 문구 없이 원본 그대로)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditFields {
    pub title: String,
    pub description: String,
    pub media_url: String,
}

/// 내 상품 카드 (수정/삭제 버튼 포함)
#[derive(Debug, Clone, PartialEq)]
pub struct OwnListingCard {
    pub id: String,
    pub image: Option<ImageView>,
    pub title: String,
    pub description: String,
    pub ends_at: String,
    pub edit: EditFields,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub name: String,
    pub banner: ImageView,
    pub avatar: ImageView,
    pub bio: String,
    /// 수정 폼에 넣을 원본 bio
    pub bio_input: String,
    pub credits: i64,
    pub listings_text: String,
    pub listings: Vec<OwnListingCard>,
}

fn image_view(media: Option<&Media>, fallback_alt: &str) -> ImageView {
    ImageView {
        url: media.map(|m| m.url.clone()).unwrap_or_default(),
        alt: media
            .and_then(|m| m.alt.clone())
            .filter(|alt| !alt.is_empty())
            .unwrap_or_else(|| fallback_alt.to_string()),
    }
}

/// 프로필 화면 모델 생성
pub fn render_profile(profile: &Profile, listings: &[Listing]) -> ProfileView {
    let listings_count = profile.count.as_ref().map(|c| c.listings).unwrap_or(0);

    ProfileView {
        name: profile.name.clone(),
        banner: image_view(profile.banner.as_ref(), "User Banner"),
        avatar: image_view(profile.avatar.as_ref(), "User Avatar"),
        bio: profile
            .bio
            .clone()
            .filter(|bio| !bio.is_empty())
            .unwrap_or_else(|| "No Bio Available".to_string()),
        bio_input: profile.bio.clone().unwrap_or_default(),
        credits: profile.credits.unwrap_or(0),
        listings_text: if listings_count > 0 {
            format!("You have {} listings.", listings_count)
        } else {
            "No listings available.".to_string()
        },
        listings: listings.iter().map(own_listing_card).collect(),
    }
}

fn own_listing_card(listing: &Listing) -> OwnListingCard {
    let image = listing.cover().map(|media| ImageView {
        url: media.url.clone(),
        alt: if listing.title.is_empty() {
            "Listing Image".to_string()
        } else {
            listing.title.clone()
        },
    });
    if image.is_none() {
        warn!("{:<12} --> 이미지 없는 상품 id: {}", "Render", listing.id);
    }

    OwnListingCard {
        id: listing.id.clone(),
        image,
        title: non_empty_or(&listing.title, "No Title"),
        description: non_empty_or(listing.description.as_deref().unwrap_or_default(), "No Description"),
        ends_at: ends_at_label(listing.ends_at),
        edit: EditFields {
            title: listing.title.clone(),
            description: listing.description.clone().unwrap_or_default(),
            media_url: listing
                .media
                .first()
                .map(|media| media.url.clone())
                .unwrap_or_default(),
        },
    }
}

fn non_empty_or(text: &str, fallback: &str) -> String {
    if text.is_empty() {
        fallback.to_string()
    } else {
        text.to_string()
    }
}
// endregion: --- Profile View

// region:    --- Html
impl OwnListingCard {
    pub fn to_html(&self) -> String {
        let image = self
            .image
            .as_ref()
            .map(|image| {
                format!(
                    r#"<img src="{}" class="card-img-top img-fluid" alt="{}">"#,
                    escape(&image.url),
                    escape(&image.alt)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<div class="col-lg-5 col-md-7 mb-4">
  <div class="card h-100">
    {image}
    <div class="card-body d-flex flex-column">
      <h5 class="card-title">{title}</h5>
      <p class="card-text flex-grow-1">{description}</p>
      <p class="card-text">{ends_at}</p>
      <a href="{href}" class="btn btn-primary mt-auto w-50 mx-auto">View Details</a>
      <div class="d-flex justify-content-center mt-3 gap-4">
        <form method="post" action="{edit_action}">
          <input name="title" value="{edit_title}">
          <input name="description" value="{edit_description}">
          <input name="media_url" value="{edit_media_url}">
          <button type="submit">Edit</button>
        </form>
        <form method="post" action="{delete_action}"><button type="submit">Delete</button></form>
      </div>
    </div>
  </div>
</div>"#,
            title = escape(&self.title),
            description = escape(&self.description),
            ends_at = escape(&self.ends_at),
            href = escape(&detail_href(&self.id)),
            edit_action = escape(&listing_action(&self.id, "edit")),
            delete_action = escape(&listing_action(&self.id, "delete")),
            edit_title = escape(&self.edit.title),
            edit_description = escape(&self.edit.description),
            edit_media_url = escape(&self.edit.media_url),
        )
    }
}

impl ProfileView {
    pub fn to_html(&self) -> String {
        let listings = if self.listings.is_empty() {
            alert_html(AlertKind::Warning, &self.listings_text)
        } else {
            let cards: String = self.listings.iter().map(OwnListingCard::to_html).collect();
            format!(
                r#"<p>{}</p><div class="row g-4 d-flex justify-content-center">{cards}</div>"#,
                escape(&self.listings_text)
            )
        };

        format!(
            r#"<div class="profile">
  <img id="banner" src="{banner_url}" alt="{banner_alt}">
  <img id="avatar" src="{avatar_url}" alt="{avatar_alt}">
  <h1 id="name">{name}</h1>
  <p id="bio-display">{bio}</p>
  <p>Credits: <span id="credit">{credits}</span></p>
  <form method="post" action="/profile">
    <input name="banner_url" value="{banner_url}">
    <input name="avatar_url" value="{avatar_url}">
    <textarea name="bio">{bio_input}</textarea>
    <button type="submit" id="update-profile">Update</button>
  </form>
  <div id="listings-container">{listings}</div>
</div>"#,
            banner_url = escape(&self.banner.url),
            banner_alt = escape(&self.banner.alt),
            avatar_url = escape(&self.avatar.url),
            avatar_alt = escape(&self.avatar.alt),
            name = escape(&self.name),
            bio = escape(&self.bio),
            bio_input = escape(&self.bio_input),
            credits = self.credits,
        )
    }
}
// endregion: --- Html
