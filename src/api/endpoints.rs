//! 원격 API 경로. 각 항목은 인코딩 전 경로 조각 목록이다

/// 로그인
pub const LOGIN: &[&str] = &["auth", "login"];

/// 회원가입
pub const REGISTER: &[&str] = &["auth", "register"];

/// API 키 생성
pub const CREATE_API_KEY: &[&str] = &["auth", "create-api-key"];

/// 상품 목록 / 등록
pub const LISTINGS: &[&str] = &["auction", "listings"];

/// API 키 헤더 이름
pub const API_KEY_HEADER: &str = "X-Noroff-API-Key";

/// 상품 상세 / 수정 / 삭제
pub fn listing(id: &str) -> [&str; 3] {
    ["auction", "listings", id]
}

/// 입찰
pub fn listing_bids(id: &str) -> [&str; 4] {
    ["auction", "listings", id, "bids"]
}

/// 프로필 조회 / 수정
pub fn profile(name: &str) -> [&str; 3] {
    ["auction", "profiles", name]
}

/// 프로필 사용자의 상품 목록
pub fn profile_listings(name: &str) -> [&str; 4] {
    ["auction", "profiles", name, "listings"]
}
