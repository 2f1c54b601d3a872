// region:    --- Imports
use super::validation::validate_bio;
use super::FormOutcome;
use crate::api::payloads::ProfileUpdate;
use crate::api::AuctionApi;
use crate::error::ClientError;
use crate::listing::model::Media;
use crate::session::SessionContext;
use serde::Deserialize;
use tracing::error;
// endregion: --- Imports

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub banner_url: String,
}

fn image(url: &str) -> Option<Media> {
    let url = url.trim();
    (!url.is_empty()).then(|| Media {
        url: url.to_string(),
        alt: Some(String::new()),
    })
}

/// 프로필 수정. 소개글은 비어 있으면 안 된다
pub async fn submit_profile_update(
    api: &dyn AuctionApi,
    session: &SessionContext,
    form: &ProfileForm,
) -> FormOutcome {
    let bio = match validate_bio(&form.bio) {
        Ok(bio) => bio,
        Err(e) => return FormOutcome::error(e.user_message()),
    };
    let Ok(current) = session.require() else {
        return FormOutcome::error("Unauthorized access. Please log in to update your profile.");
    };

    let body = ProfileUpdate {
        bio: bio.to_string(),
        avatar: image(&form.avatar_url),
        banner: image(&form.banner_url),
    };

    match api.update_profile(session, &current.username, &body).await {
        Ok(_) => FormOutcome::success("Profile updated successfully.", "/profile"),
        Err(ClientError::NetworkFailure(e)) => {
            error!("{:<12} --> 프로필 수정 요청 실패: {}", "Form", e);
            FormOutcome::error("A network error occurred. Please try again.")
        }
        Err(e) => {
            error!("{:<12} --> 프로필 수정 실패: {}", "Form", e);
            FormOutcome::error("Failed to update profile. Please try again.")
        }
    }
}
