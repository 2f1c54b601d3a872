use crate::bidding::model::Bid;

/// 최고 입찰가. 입찰이 없으면 None ("No bids yet")
pub fn highest_bid(bids: &[Bid]) -> Option<f64> {
    bids.iter().map(|bid| bid.amount).reduce(f64::max)
}

/// 최저 입찰가. 입찰이 없으면 None
pub fn lowest_bid(bids: &[Bid]) -> Option<f64> {
    bids.iter().map(|bid| bid.amount).reduce(f64::min)
}

/// 입찰가 표시 문구
pub fn bid_label(amount: Option<f64>) -> String {
    match amount {
        Some(amount) => format!("{} credits", amount),
        None => "No bids yet".to_string(),
    }
}
