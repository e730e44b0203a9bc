//! Persisted habit list and theme flag.
//!
//! The file holds a single JSON document `{ "version", "habits", "darkMode" }`.
//! `version` is bumped on every incompatible change and `decode` upgrades
//! older documents one step at a time. Version 0 is the bare habit array
//! written by the browser build; it upgrades to version 1 with the theme flag
//! off. Documents from a newer version are refused and load as empty.

use crate::errors::AppError;
use crate::models::{AppData, Habit};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, info, warn};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredState {
    version: u32,
    #[serde(default)]
    habits: Vec<Habit>,
    #[serde(default)]
    dark_mode: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredStateRef<'a> {
    version: u32,
    habits: &'a [Habit],
    dark_mode: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Versioned(StoredState),
    Legacy(Vec<Habit>),
}

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: a missing file is a fresh start, anything unreadable is
    /// logged and replaced by empty state.
    pub async fn load(&self) -> AppData {
        match fs::read(&self.path).await {
            Ok(bytes) => match decode(&bytes) {
                Ok(data) => {
                    info!(
                        path = %self.path.display(),
                        habits = data.habits.len(),
                        "loaded habit store"
                    );
                    data
                }
                Err(err) => {
                    error!("failed to parse data file: {err}");
                    AppData::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file yet");
                AppData::default()
            }
            Err(err) => {
                error!("failed to read data file: {err}");
                AppData::default()
            }
        }
    }

    pub async fn save(&self, data: &AppData) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let payload = encode(data)?;
        fs::write(&self.path, payload).await?;
        debug!(path = %self.path.display(), habits = data.habits.len(), "saved habit store");
        Ok(())
    }
}

pub fn encode(data: &AppData) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec_pretty(&StoredStateRef {
        version: SCHEMA_VERSION,
        habits: &data.habits,
        dark_mode: data.dark_mode,
    })
}

pub fn decode(bytes: &[u8]) -> Result<AppData, String> {
    let document: StoredDocument = serde_json::from_slice(bytes).map_err(|err| err.to_string())?;
    match document {
        StoredDocument::Legacy(habits) => {
            warn!(habits = habits.len(), "upgrading legacy habit array to version {SCHEMA_VERSION}");
            Ok(AppData {
                habits,
                dark_mode: false,
            })
        }
        StoredDocument::Versioned(state) if state.version > SCHEMA_VERSION => Err(format!(
            "data file version {} is newer than supported version {SCHEMA_VERSION}",
            state.version
        )),
        StoredDocument::Versioned(state) => Ok(AppData {
            habits: state.habits,
            dark_mode: state.dark_mode,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("habit_tracker_{tag}_{}_{nanos}", std::process::id()));
        path.push("habits.json");
        path
    }

    fn sample() -> AppData {
        let mut habit = Habit::new(1_700_000_000_000, "Read");
        habit.completion_dates = vec!["2026-01-04".into(), "2026-01-05".into()];
        habit.reminder_time = Some("08:00".into());
        habit.completed = true;
        AppData {
            habits: vec![habit],
            dark_mode: true,
        }
    }

    #[tokio::test]
    async fn save_then_load_preserves_state() {
        let store = Store::new(unique_path("roundtrip"));
        let data = sample();
        store.save(&data).await.unwrap();
        assert_eq!(store.load().await, data);
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let store = Store::new(unique_path("missing"));
        assert_eq!(store.load().await, AppData::default());
    }

    #[tokio::test]
    async fn garbage_file_loads_empty() {
        let path = unique_path("garbage");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"{ not json").unwrap();
        assert_eq!(Store::new(path).load().await, AppData::default());
    }

    #[test]
    fn legacy_array_upgrades() {
        let legacy = r##"[{
            "id": 1712345678901,
            "name": "Drink water",
            "description": "",
            "category": "health",
            "difficulty": "easy",
            "frequency": "daily",
            "goal": "8 glasses",
            "color": "#2196F3",
            "emoji": "💧",
            "completed": false,
            "completionDates": ["2024-04-05", "2024-04-06"],
            "reminderTime": null
        }]"##
            .as_bytes();
        let data = decode(legacy).unwrap();
        assert!(!data.dark_mode);
        assert_eq!(data.habits.len(), 1);
        assert_eq!(data.habits[0].completion_dates.len(), 2);
        assert_eq!(data.habits[0].emoji, "💧");
    }

    #[test]
    fn sparse_habits_fill_defaults() {
        let data = decode(br#"{"version":1,"habits":[{"id":5,"name":"Walk","difficulty":"extreme"}]}"#)
            .unwrap();
        let habit = &data.habits[0];
        assert_eq!(habit.color, "#4CAF50");
        assert_eq!(habit.difficulty, crate::models::Difficulty::Medium);
        assert!(habit.completion_dates.is_empty());
    }

    #[test]
    fn newer_versions_are_refused() {
        assert!(decode(br#"{"version":99,"habits":[]}"#).is_err());
    }

    #[test]
    fn encoded_document_is_versioned_camel_case() {
        let bytes = encode(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["version"], SCHEMA_VERSION);
        assert_eq!(value["darkMode"], true);
        assert_eq!(value["habits"][0]["reminderTime"], "08:00");
        assert_eq!(value["habits"][0]["completionDates"][1], "2026-01-05");
    }
}
