//! Browser-backed implementation of the engine's score storage trait.
//!
//! Two integer fields live in `localStorage` under the keys the game has
//! always used. Missing or corrupt values read back as 0; failures are
//! reported to the engine, which keeps playing on in-memory records.

use dicevzombz_game::{ScoreStorage, SessionRecord};

use crate::dom;

const HIGHEST_ROUND_KEY: &str = "dicevzombz_highest_round";
const EARLIEST_WIN_KEY: &str = "dicevzombz_earliest_win";

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Score storage over the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScoreStorage;

fn parse_field(raw: Option<String>) -> u32 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}

fn storage_handle() -> Result<web_sys::Storage, WebStorageError> {
    dom::local_storage().map_err(|err| {
        let message = dom::js_error_message(&err);
        log::warn!("localStorage unavailable: {message}");
        WebStorageError::Storage(message)
    })
}

impl ScoreStorage for BrowserScoreStorage {
    type Error = WebStorageError;

    fn load(&self) -> Result<SessionRecord, Self::Error> {
        let storage = storage_handle()?;
        let highest_round = parse_field(storage.get_item(HIGHEST_ROUND_KEY).unwrap_or(None));
        let earliest_win = parse_field(storage.get_item(EARLIEST_WIN_KEY).unwrap_or(None));
        Ok(SessionRecord {
            highest_round,
            earliest_win,
        })
    }

    fn save(&self, record: &SessionRecord) -> Result<(), Self::Error> {
        let storage = storage_handle()?;
        for (key, value) in [
            (HIGHEST_ROUND_KEY, record.highest_round),
            (EARLIEST_WIN_KEY, record.earliest_win),
        ] {
            storage.set_item(key, &value.to_string()).map_err(|err| {
                let message = dom::js_error_message(&err);
                log::warn!("failed to persist {key}: {message}");
                WebStorageError::Storage(message)
            })?;
        }
        Ok(())
    }
}
