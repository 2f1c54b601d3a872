use auction_client::error::ClientError;
use auction_client::forms::auth;
use auction_client::session::storage::{FileStore, KeyValueStore, MemoryStore};
use auction_client::session::{Session, SessionContext, SessionStore, API_KEY, USER_KEY};
use serde_json::json;
use std::sync::Arc;

fn login_body() -> serde_json::Value {
    json!({
        "data": {
            "name": "tester",
            "email": "tester@stud.noroff.no",
            "accessToken": "token-123"
        },
        "meta": {}
    })
}

#[test]
fn test_empty_store_is_logged_out() {
    let sessions = SessionStore::new(Arc::new(MemoryStore::new()));
    let context = sessions.context().unwrap();

    assert_eq!(context, SessionContext::LoggedOut);
    assert!(matches!(context.require(), Err(ClientError::MissingSession)));
}

#[test]
fn test_user_without_api_key_is_logged_out() {
    let sessions = SessionStore::new(Arc::new(MemoryStore::new()));
    sessions.store_user(&login_body()).unwrap();

    assert_eq!(sessions.context().unwrap(), SessionContext::LoggedOut);
    assert_eq!(sessions.access_token().unwrap().as_deref(), Some("token-123"));
}

#[test]
fn test_user_and_api_key_authenticate() {
    let sessions = SessionStore::new(Arc::new(MemoryStore::new()));
    sessions.store_user(&login_body()).unwrap();
    sessions.store_api_key("key-abc").unwrap();

    assert_eq!(
        sessions.context().unwrap(),
        SessionContext::Authenticated(Session {
            access_token: "token-123".to_string(),
            api_key: "key-abc".to_string(),
            username: "tester".to_string(),
        })
    );
}

#[test]
fn test_clear_removes_both_keys() {
    let backend = Arc::new(MemoryStore::new());
    let sessions = SessionStore::new(backend.clone());
    sessions.store_user(&login_body()).unwrap();
    sessions.store_api_key("key-abc").unwrap();

    sessions.clear().unwrap();

    assert_eq!(backend.get(USER_KEY).unwrap(), None);
    assert_eq!(backend.get(API_KEY).unwrap(), None);
    assert!(!sessions.context().unwrap().is_authenticated());
}

#[test]
fn test_malformed_user_blob_is_logged_out() {
    let backend = Arc::new(MemoryStore::new());
    backend.set(USER_KEY, "{not json").unwrap();
    backend.set(API_KEY, "key-abc").unwrap();

    let sessions = SessionStore::new(backend);
    assert_eq!(sessions.context().unwrap(), SessionContext::LoggedOut);
}

#[test]
fn test_file_store_persists_between_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let sessions = SessionStore::new(Arc::new(FileStore::new(&path)));
    sessions.store_user(&login_body()).unwrap();
    sessions.store_api_key("key-abc").unwrap();

    // 새 인스턴스로 다시 읽기
    let reopened = SessionStore::new(Arc::new(FileStore::new(&path)));
    let context = reopened.context().unwrap();
    assert_eq!(context.require().unwrap().username, "tester");

    reopened.clear().unwrap();
    let store = FileStore::new(&path);
    assert_eq!(store.get(API_KEY).unwrap(), None);
    assert_eq!(store.get(USER_KEY).unwrap(), None);
}

#[test]
fn test_file_store_missing_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("absent.json"));
    assert_eq!(store.get(USER_KEY).unwrap(), None);
}

#[test]
fn test_corrupt_file_is_replaced_on_next_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{truncated").unwrap();

    let sessions = SessionStore::new(Arc::new(FileStore::new(&path)));
    assert_eq!(sessions.context().unwrap(), SessionContext::LoggedOut);

    // 로그인은 깨진 파일을 덮어쓴다
    sessions.store_user(&login_body()).unwrap();
    sessions.store_api_key("key-abc").unwrap();
    assert!(sessions.context().unwrap().is_authenticated());

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&raw).is_ok());
}

#[test]
fn test_clear_on_corrupt_file_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json at all").unwrap();

    let sessions = SessionStore::new(Arc::new(FileStore::new(&path)));
    sessions.clear().unwrap();
    assert_eq!(FileStore::new(&path).get(USER_KEY).unwrap(), None);
}

#[test]
fn test_logout_with_corrupt_file_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{truncated").unwrap();

    let sessions = SessionStore::new(Arc::new(FileStore::new(&path)));
    let outcome = auth::logout(&sessions);

    assert!(outcome.is_success());
    assert_eq!(outcome.redirect.as_deref(), Some("/login"));
}
