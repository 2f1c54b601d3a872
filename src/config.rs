// region:    --- Imports
use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};
// endregion: --- Imports

pub const DEFAULT_API_URL: &str = "https://v2.api.noroff.dev";

// region:    --- Config
/// 환경 변수 기반 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// 원격 경매 API 주소
    pub api_url: String,
    /// 세션 저장 파일 경로
    pub session_file: PathBuf,
    pub port: u16,
}

impl Config {
    pub fn load() -> Result<Self, String> {
        Ok(Self {
            api_url: try_load::<String>("AUCTION_API_URL", DEFAULT_API_URL)?
                .trim_end_matches('/')
                .to_string(),
            session_file: try_load("SESSION_FILE", "session.json")?,
            port: try_load("RUST_PORT", "3000")?,
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .map_err(|_| {
            warn!("{:<12} --> {key} 환경 변수가 없어 기본값 사용", "Config");
        })
        .ok()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, String>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{:<12} --> {key} 기본값: {default}", "Config");
            default.to_string()
        })
        .parse()
        .map_err(|e| format!("Invalid {key} value: {e}"))
}
// endregion: --- Config
