pub mod endpoints;
pub mod gateway;
pub mod payloads;

pub use gateway::{AuctionApi, NoroffGateway};
