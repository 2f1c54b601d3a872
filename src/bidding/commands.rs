/// 입찰 커맨드 처리
/// 금액 검증은 네트워크 호출 전에 끝낸다
// region:    --- Imports
use crate::api::AuctionApi;
use crate::error::ClientError;
use crate::forms::validation::validate_bid_amount;
use crate::forms::FormOutcome;
use crate::render::html::detail_href;
use crate::session::SessionContext;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
// endregion: --- Imports

// region:    --- Commands
/// 입찰 명령 (금액은 입력 그대로)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaceBidCommand {
    pub id: String,
    #[serde(default)]
    pub amount: String,
}

/// 입찰
pub async fn handle_place_bid(
    cmd: &PlaceBidCommand,
    api: &dyn AuctionApi,
    session: &SessionContext,
) -> FormOutcome {
    info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", cmd);

    let amount = match validate_bid_amount(&cmd.amount) {
        Ok(amount) => amount,
        Err(e) => return FormOutcome::error(e.user_message()),
    };

    match api.place_bid(session, &cmd.id, amount).await {
        // 캐시를 고치지 않고 상세 화면을 다시 불러온다
        Ok(_) => FormOutcome::success(
            format!(
                "Your bid of {} credits has been placed successfully!",
                amount
            ),
            format!("/{}", detail_href(&cmd.id)),
        ),
        Err(ClientError::MissingSession) => {
            warn!("{:<12} --> 로그인 없이 입찰 시도", "Command");
            FormOutcome::error("Error placing bid: You have to be logged in to place a bid.")
        }
        Err(ClientError::HttpError { message: None, .. }) => {
            FormOutcome::error("Error placing bid: Failed to place bid.")
        }
        Err(e) => {
            warn!("{:<12} --> 입찰 실패: {}", "Command", e);
            FormOutcome::error(format!("Error placing bid: {}", e.user_message()))
        }
    }
}
// endregion: --- Commands
