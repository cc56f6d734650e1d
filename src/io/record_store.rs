// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Typed load/seed/persist of named records.
//!
//! Every record type is bound to one storage key and one seed value.
//! Loading a key that has never been written (or whose stored value no
//! longer parses) returns the seed and writes it back, so the next load
//! sees the same data.

use crate::error::StoreError;
use crate::io::seed;
use crate::io::serialization::{decode, encode};
use crate::io::storage::KeyValueStore;
use crate::models::notification::Notification;
use crate::models::settings::{AppSettings, NotificationSettings};
use crate::models::video::Video;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const VIDEOS_KEY: &str = "hawkwatch_videos";
pub const NOTIFICATIONS_KEY: &str = "hawkwatch_notifications";
pub const NOTIFICATION_SETTINGS_KEY: &str = "hawkwatch_notification_settings";
pub const APP_SETTINGS_KEY: &str = "hawkwatch_app_settings";

/// A value persisted under a fixed storage key.
pub trait Record: Serialize + DeserializeOwned {
    const KEY: &'static str;

    /// Value used when nothing usable is stored.
    fn seed() -> Self;
}

impl Record for Vec<Video> {
    const KEY: &'static str = VIDEOS_KEY;

    fn seed() -> Self {
        seed::demo_videos()
    }
}

impl Record for Vec<Notification> {
    const KEY: &'static str = NOTIFICATIONS_KEY;

    fn seed() -> Self {
        seed::demo_notifications()
    }
}

impl Record for NotificationSettings {
    const KEY: &'static str = NOTIFICATION_SETTINGS_KEY;

    fn seed() -> Self {
        NotificationSettings::default()
    }
}

impl Record for AppSettings {
    const KEY: &'static str = APP_SETTINGS_KEY;

    fn seed() -> Self {
        AppSettings::default()
    }
}

/// Reads and writes records through a key-value store.
#[derive(Debug)]
pub struct RecordStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Load the record stored under `R::KEY`, seeding it on first use.
    ///
    /// A stored value that fails to parse is treated as absent. Only a
    /// failure to read the key is reported as an error; a failure to
    /// persist the seed is logged and the seed is still returned.
    pub fn load<R: Record>(&mut self) -> Result<R, StoreError> {
        let raw = self.storage.get(R::KEY).map_err(|source| StoreError::Io {
            key: R::KEY.to_string(),
            source,
        })?;

        if let Some(raw) = raw {
            match decode::<R>(&raw) {
                Ok(record) => return Ok(record),
                Err(e) => log::warn!("Stored value for {} is unreadable, reseeding: {}", R::KEY, e),
            }
        } else {
            log::info!("No stored value for {}, seeding demo data", R::KEY);
        }

        let record = R::seed();
        if let Err(e) = self.save(&record) {
            log::warn!("Failed to persist seed for {}: {}", R::KEY, e);
        }
        Ok(record)
    }

    /// Overwrite the value stored under `R::KEY`.
    pub fn save<R: Record>(&mut self, record: &R) -> Result<(), StoreError> {
        let raw = encode(record).map_err(|source| StoreError::Encode {
            key: R::KEY.to_string(),
            source,
        })?;
        self.storage.set(R::KEY, &raw).map_err(|source| StoreError::Io {
            key: R::KEY.to_string(),
            source,
        })?;
        log::debug!("Saved {} ({} bytes)", R::KEY, raw.len());
        Ok(())
    }

    /// Remove the value stored under `R::KEY`. The next load reseeds.
    pub fn clear<R: Record>(&mut self) -> Result<(), StoreError> {
        self.storage.remove(R::KEY).map_err(|source| StoreError::Io {
            key: R::KEY.to_string(),
            source,
        })?;
        log::info!("Cleared {}", R::KEY);
        Ok(())
    }
}
