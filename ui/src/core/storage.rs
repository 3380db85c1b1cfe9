//! Local last-known-good cache and device settings.
//!
//! Screens render the cached snapshot first, refresh from the backend,
//! and on a failed refresh keep showing the cache with its age. Native
//! targets keep one JSON file per key under the platform data directory;
//! wasm uses `localStorage`.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use super::CoreError;

const KEY_ACTIVE_CHILD: &str = "settings-active-child";

/// A cached snapshot plus the moment it was taken, so stale data can be
/// labelled as such.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheEnvelope<T> {
    pub saved_at: String,
    pub rows: T,
}

impl<T> CacheEnvelope<T> {
    pub fn now(rows: T) -> Self {
        let saved_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default();
        Self { saved_at, rows }
    }

    /// Compact age label like `2026-08-29 14:30Z` for the stale notice.
    pub fn saved_at_label(&self) -> String {
        match OffsetDateTime::parse(&self.saved_at, &Rfc3339) {
            Ok(ts) => {
                let date = ts.date();
                let time = ts.time();
                format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}Z",
                    date.year(),
                    date.month() as u8,
                    date.day(),
                    time.hour(),
                    time.minute()
                )
            }
            Err(_) => self.saved_at.clone(),
        }
    }
}

/// Persist a snapshot under `key`, stamping it with the current time.
pub fn save_cache<T: Serialize>(key: &str, rows: &T) -> Result<(), CoreError> {
    let envelope = CacheEnvelope::now(rows);
    let json = serde_json::to_string(&envelope)
        .map_err(|err| CoreError::Storage(format!("serialise {key}: {err}")))?;
    write_value(key, &json)
}

/// Load the snapshot stored under `key`, if any. A missing entry is
/// `Ok(None)`; a corrupt one is an error the caller can log and ignore.
pub fn load_cache<T: DeserializeOwned>(key: &str) -> Result<Option<CacheEnvelope<T>>, CoreError> {
    match read_value(key)? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|err| CoreError::Storage(format!("deserialise {key}: {err}"))),
        None => Ok(None),
    }
}

/// Key for a per-child cached table snapshot.
pub fn scoped_key(table: &str, child_id: &str) -> String {
    format!("{table}-{child_id}")
}

/// Combine a fetch outcome with the cached snapshot: fresh rows win; a
/// failed fetch falls back to the cached rows labelled with their age;
/// only when both are unavailable does the error surface.
pub fn resolve_fetch<T>(
    fetched: Result<T, String>,
    cached: Result<Option<CacheEnvelope<T>>, CoreError>,
) -> Result<(T, Option<String>), String> {
    match fetched {
        Ok(rows) => Ok((rows, None)),
        Err(err) => match cached {
            Ok(Some(envelope)) => {
                let label = envelope.saved_at_label();
                Ok((envelope.rows, Some(label)))
            }
            _ => Err(err),
        },
    }
}

/// Fetch fresh rows for `key`, refreshing the cache on success. On a
/// failed fetch the last cached snapshot is served instead, together
/// with its age label so the screen can show a stale notice.
pub async fn fetch_or_cache<T, E, Fut>(
    key: &str,
    fetch: Fut,
) -> Result<(T, Option<String>), String>
where
    T: Serialize + DeserializeOwned,
    E: std::fmt::Display,
    Fut: std::future::Future<Output = Result<T, E>>,
{
    match fetch.await {
        Ok(rows) => {
            if let Err(err) = save_cache(key, &rows) {
                eprintln!("[storage] cache write failed for {key}: {err}");
            }
            Ok((rows, None))
        }
        Err(err) => resolve_fetch(Err(err.to_string()), load_cache(key)),
    }
}

pub fn active_child_id() -> Option<String> {
    read_value(KEY_ACTIVE_CHILD).ok().flatten()
}

pub fn set_active_child_id(child_id: &str) -> Result<(), CoreError> {
    write_value(KEY_ACTIVE_CHILD, child_id)
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_dir() -> Result<std::path::PathBuf, CoreError> {
    let dirs = directories::ProjectDirs::from("com", "sproutglow", "Sproutglow")
        .ok_or_else(|| CoreError::Storage("no usable home directory".to_string()))?;
    let dir = dirs.data_dir().to_path_buf();
    std::fs::create_dir_all(&dir)
        .map_err(|err| CoreError::Storage(format!("create {}: {err}", dir.display())))?;
    Ok(dir)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_value(key: &str, value: &str) -> Result<(), CoreError> {
    let path = storage_dir()?.join(format!("{key}.json"));
    std::fs::write(&path, value)
        .map_err(|err| CoreError::Storage(format!("write {}: {err}", path.display())))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_value(key: &str) -> Result<Option<String>, CoreError> {
    let path = storage_dir()?.join(format!("{key}.json"));
    if !path.exists() {
        return Ok(None);
    }
    std::fs::read_to_string(&path)
        .map(Some)
        .map_err(|err| CoreError::Storage(format!("read {}: {err}", path.display())))
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, CoreError> {
    web_sys::window()
        .ok_or_else(|| CoreError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(|err| CoreError::Storage(format!("localStorage unavailable: {err:?}")))?
        .ok_or_else(|| CoreError::Storage("localStorage disabled".to_string()))
}

#[cfg(target_arch = "wasm32")]
fn write_value(key: &str, value: &str) -> Result<(), CoreError> {
    local_storage()?
        .set_item(&format!("sproutglow.{key}"), value)
        .map_err(|err| CoreError::Storage(format!("set {key}: {err:?}")))
}

#[cfg(target_arch = "wasm32")]
fn read_value(key: &str) -> Result<Option<String>, CoreError> {
    local_storage()?
        .get_item(&format!("sproutglow.{key}"))
        .map_err(|err| CoreError::Storage(format!("get {key}: {err:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_round_trips_through_json() {
        let envelope = CacheEnvelope::now(vec!["a".to_string(), "b".to_string()]);
        let json = serde_json::to_string(&envelope).unwrap();
        let back: CacheEnvelope<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, envelope);
    }

    #[test]
    fn saved_at_label_is_compact() {
        let envelope = CacheEnvelope {
            saved_at: "2026-08-29T14:30:12.345Z".to_string(),
            rows: (),
        };
        assert_eq!(envelope.saved_at_label(), "2026-08-29 14:30Z");
    }

    #[test]
    fn fresh_rows_win_over_the_cache() {
        let cached = Ok(Some(CacheEnvelope {
            saved_at: "2026-08-28T08:00:00Z".to_string(),
            rows: vec!["old".to_string()],
        }));
        let resolved = resolve_fetch(Ok(vec!["new".to_string()]), cached);
        assert_eq!(resolved, Ok((vec!["new".to_string()], None)));
    }

    #[test]
    fn failed_fetch_serves_the_cached_snapshot_with_its_age() {
        let cached = Ok(Some(CacheEnvelope {
            saved_at: "2026-08-28T08:00:00Z".to_string(),
            rows: vec!["old".to_string()],
        }));
        let resolved = resolve_fetch(Err("backend down".to_string()), cached);
        assert_eq!(
            resolved,
            Ok((
                vec!["old".to_string()],
                Some("2026-08-28 08:00Z".to_string())
            ))
        );
    }

    #[test]
    fn error_surfaces_only_when_both_sources_fail() {
        let resolved: Result<(Vec<String>, _), _> =
            resolve_fetch(Err("backend down".to_string()), Ok(None));
        assert_eq!(resolved, Err("backend down".to_string()));

        let corrupt: Result<(Vec<String>, _), _> = resolve_fetch(
            Err("backend down".to_string()),
            Err(CoreError::Storage("corrupt".to_string())),
        );
        assert_eq!(corrupt, Err("backend down".to_string()));
    }

    #[test]
    fn saved_at_label_degrades_to_raw_value() {
        let envelope = CacheEnvelope {
            saved_at: "not-a-timestamp".to_string(),
            rows: (),
        };
        assert_eq!(envelope.saved_at_label(), "not-a-timestamp");
    }
}
