// region:    --- Imports
use crate::error::ClientError;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, warn};
// endregion: --- Imports

// region:    --- Key Value Store Trait
/// 문자열 키-값 영속 저장소
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;
    fn remove(&self, key: &str) -> Result<(), ClientError>;
}
// endregion: --- Key Value Store Trait

// region:    --- File Store
/// JSON 파일 하나에 모든 키를 저장
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Result<Map<String, Value>, ClientError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        // 깨진 파일은 비어있는 것으로 보고 다음 쓰기에서 덮어쓴다
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => {
                warn!(
                    "{:<12} --> 세션 파일 형식 오류, 비어있는 것으로 처리: {}",
                    "Storage",
                    self.path.display()
                );
                Ok(Map::new())
            }
            Err(e) => {
                warn!(
                    "{:<12} --> 세션 파일 파싱 실패, 비어있는 것으로 처리: {} ({})",
                    "Storage",
                    self.path.display(),
                    e
                );
                Ok(Map::new())
            }
        }
    }

    fn write_all(&self, map: &Map<String, Value>) -> Result<(), ClientError> {
        let raw = serde_json::to_string_pretty(map)
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        fs::write(&self.path, raw)?;
        debug!("{:<12} --> 세션 파일 저장: {}", "Storage", self.path.display());
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut Map<String, Value>)) -> Result<(), ClientError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        let mut map = self.read_all()?;
        f(&mut map);
        self.write_all(&map)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        Ok(self
            .read_all()?
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.update(|map| {
            map.insert(key.to_string(), Value::String(value.to_string()));
        })
    }

    fn remove(&self, key: &str) -> Result<(), ClientError> {
        self.update(|map| {
            map.remove(key);
        })
    }
}
// endregion: --- File Store

// region:    --- Memory Store
/// 테스트 및 임시 실행용
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.entries
            .lock()
            .map_err(|e| ClientError::Storage(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ClientError> {
        self.entries
            .lock()
            .map_err(|e| ClientError::Storage(e.to_string()))?
            .remove(key);
        Ok(())
    }
}
// endregion: --- Memory Store
