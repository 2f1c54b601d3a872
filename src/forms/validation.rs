// region:    --- Imports
use crate::error::ClientError;
use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;
// endregion: --- Imports

pub const MIN_PASSWORD_LEN: usize = 8;

fn student_email() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@stud\.noroff\.no$").expect("valid email pattern")
    })
}

/// 회원가입 검증: stud.noroff.no 메일, 비밀번호 8자 이상
pub fn validate_registration(email: &str, password: &str) -> Result<(), ClientError> {
    if !student_email().is_match(email) {
        return Err(ClientError::Validation(
            "Only stud.noroff.no emails are allowed to register.".to_string(),
        ));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ClientError::Validation(
            "Password must be at least 8 characters long.".to_string(),
        ));
    }
    Ok(())
}

/// 입찰 금액: 숫자이며 0보다 커야 한다
pub fn validate_bid_amount(raw: &str) -> Result<f64, ClientError> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(ClientError::Validation(
            "Please enter a valid bid amount.".to_string(),
        )),
    }
}

pub fn validate_bio(bio: &str) -> Result<&str, ClientError> {
    let bio = bio.trim();
    if bio.is_empty() {
        return Err(ClientError::Validation("Bio cannot be empty.".to_string()));
    }
    Ok(bio)
}

pub fn validate_title(title: &str) -> Result<&str, ClientError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ClientError::Validation("Title is required.".to_string()));
    }
    Ok(title)
}

/// 마감 시각: RFC 3339 또는 datetime-local 입력값 (UTC 로 간주)
pub fn parse_ends_at(raw: &str) -> Result<DateTime<Utc>, ClientError> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ClientError::Validation("Please enter a valid end date.".to_string()))
}
