/// 상품 등록 / 수정 / 삭제
// region:    --- Imports
use super::validation::{parse_ends_at, validate_title};
use super::FormOutcome;
use crate::api::payloads::ListingBody;
use crate::api::AuctionApi;
use crate::error::ClientError;
use crate::listing::model::Media;
use crate::session::SessionContext;
use serde::Deserialize;
use tracing::{error, info};
// endregion: --- Imports

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateListingForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media_url: String,
    /// 쉼표로 구분
    #[serde(default)]
    pub tags: String,
    pub ends_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditListingForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media_url: String,
}

fn optional(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn media_for(url: &str, title: &str) -> Vec<Media> {
    optional(url)
        .map(|url| {
            vec![Media {
                url,
                alt: Some(format!("Picture of {title}")),
            }]
        })
        .unwrap_or_default()
}

// region:    --- Create

pub fn build_create_body(form: &CreateListingForm) -> Result<ListingBody, ClientError> {
    let title = validate_title(&form.title)?;
    Ok(ListingBody {
        title: title.to_string(),
        description: optional(&form.description),
        tags: form
            .tags
            .split(',')
            .filter_map(optional)
            .collect(),
        media: media_for(&form.media_url, title),
        ends_at: Some(parse_ends_at(&form.ends_at)?),
    })
}

pub async fn submit_create_listing(
    api: &dyn AuctionApi,
    session: &SessionContext,
    form: &CreateListingForm,
) -> FormOutcome {
    let body = match build_create_body(form) {
        Ok(body) => body,
        Err(e) => return FormOutcome::error(e.user_message()),
    };

    match api.create_listing(session, &body).await {
        Ok(listing) => {
            info!("{:<12} --> 상품 등록 성공 id: {}", "Form", listing.id);
            FormOutcome::success("Listing created successfully!", "/profile")
        }
        Err(e) => {
            error!("{:<12} --> 상품 등록 실패: {}", "Form", e);
            FormOutcome::error("Failed to create listing")
        }
    }
}

// endregion: --- Create

// region:    --- Edit

pub async fn submit_edit_listing(
    api: &dyn AuctionApi,
    session: &SessionContext,
    id: &str,
    form: &EditListingForm,
) -> FormOutcome {
    let title = match validate_title(&form.title) {
        Ok(title) => title,
        Err(e) => return FormOutcome::error(e.user_message()),
    };
    let body = ListingBody {
        title: title.to_string(),
        description: optional(&form.description),
        media: media_for(&form.media_url, title),
        ..ListingBody::default()
    };

    match api.update_listing(session, id, &body).await {
        Ok(_) => FormOutcome::success("Listing updated successfully.", "/profile"),
        Err(ClientError::NetworkFailure(e)) => {
            error!("{:<12} --> 상품 수정 요청 실패: {}", "Form", e);
            FormOutcome::error("An error occurred while updating the listing.")
        }
        Err(e) => {
            error!("{:<12} --> 상품 수정 실패: {}", "Form", e);
            FormOutcome::error("Failed to update listing. Please try again.")
        }
    }
}

// endregion: --- Edit

// region:    --- Delete

pub async fn submit_delete_listing(
    api: &dyn AuctionApi,
    session: &SessionContext,
    id: &str,
) -> FormOutcome {
    if id.trim().is_empty() {
        return FormOutcome::error("Listing ID not found for deletion");
    }

    match api.delete_listing(session, id).await {
        Ok(()) => FormOutcome::success("Listing deleted.", "/profile"),
        Err(e) => {
            error!("{:<12} --> 상품 삭제 실패: {}", "Form", e);
            FormOutcome::error(format!("Failed to delete listing: {}", e.user_message()))
        }
    }
}

// endregion: --- Delete
