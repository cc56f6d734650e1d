// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state.
//!
//! This module holds what each screen shows and wires user actions to
//! the record store: a screen loads its records when it is shown, an
//! action computes the new value with a mutator, the in-memory copy is
//! replaced and the new value is persisted. Storage failures are logged
//! and the screen keeps whatever it already had.

use crate::io::record_store::{Record, RecordStore};
use crate::io::storage::KeyValueStore;
use crate::models::notification::Notification;
use crate::models::settings::{AppSettings, AppSettingsPatch, NotificationSettings, NotificationSettingsPatch};
use crate::models::video::Video;
use crate::mutator;
use crate::navigation::{NavAction, Navigator, Screen};

/// Load `R` into `target`, keeping the previous value on failure.
fn reload<S: KeyValueStore, R: Record>(store: &mut RecordStore<S>, target: &mut R, what: &str) -> bool {
    match store.load::<R>() {
        Ok(record) => {
            *target = record;
            true
        }
        Err(e) => {
            log::error!("Error loading {}: {}", what, e);
            false
        }
    }
}

fn persist<S: KeyValueStore, R: Record>(store: &mut RecordStore<S>, record: &R, what: &str) -> bool {
    match store.save(record) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Error saving {}: {}", what, e);
            false
        }
    }
}

/// Application state shared by all screens.
pub struct HawkWatchApp<S: KeyValueStore> {
    store: RecordStore<S>,

    navigator: Navigator,

    /// Alerts shown on the notifications screen
    notifications: Vec<Notification>,

    /// Saved footage shown on the footage screen
    videos: Vec<Video>,

    /// Id of the video opened on the footage screen
    selected_video: Option<String>,

    notification_settings: NotificationSettings,

    app_settings: AppSettings,
}

impl<S: KeyValueStore> HawkWatchApp<S> {
    /// Create the app on top of `storage`. Nothing is loaded until a
    /// screen is shown.
    pub fn new(storage: S) -> Self {
        Self {
            store: RecordStore::new(storage),
            navigator: Navigator::new(),
            notifications: Vec::new(),
            videos: Vec::new(),
            selected_video: None,
            notification_settings: NotificationSettings::default(),
            app_settings: AppSettings::default(),
        }
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    /// Apply a navigation action and load what the new screen needs.
    pub fn navigate(&mut self, action: NavAction) -> Screen {
        let before = self.navigator.current();
        let screen = self.navigator.apply(action);
        if screen != before {
            self.mount(screen);
        }
        screen
    }

    fn mount(&mut self, screen: Screen) {
        match screen {
            Screen::Dashboard | Screen::Notifications => {
                self.load_notifications();
                self.load_notification_settings();
            }
            Screen::Footages => {
                self.selected_video = None;
                self.load_videos();
            }
            Screen::Profile => {
                self.load_app_settings();
            }
            Screen::Splash | Screen::Login | Screen::SignUp | Screen::LiveAgent => {}
        }
    }

    pub fn load_notifications(&mut self) -> bool {
        reload(&mut self.store, &mut self.notifications, "notifications")
    }

    pub fn load_videos(&mut self) -> bool {
        reload(&mut self.store, &mut self.videos, "videos")
    }

    pub fn load_notification_settings(&mut self) -> bool {
        reload(&mut self.store, &mut self.notification_settings, "notification settings")
    }

    pub fn load_app_settings(&mut self) -> bool {
        reload(&mut self.store, &mut self.app_settings, "app settings")
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        mutator::unread_count(&self.notifications)
    }

    /// Mark one alert as read. Returns `false` if no alert has `id`.
    pub fn mark_read(&mut self, id: &str) -> bool {
        if !self.notifications.iter().any(|n| n.id == id) {
            log::debug!("Notification {} not found", id);
            return false;
        }

        self.notifications = mutator::mark_read(&self.notifications, id);
        persist(&mut self.store, &self.notifications, "notifications");
        true
    }

    pub fn mark_all_read(&mut self) {
        self.notifications = mutator::mark_all_read(&self.notifications);
        persist(&mut self.store, &self.notifications, "notifications");
    }

    /// Replace the alerts with `notifications`, e.g. from an exported file.
    /// The screen only changes once the new list is saved.
    pub fn import_notifications(&mut self, notifications: Vec<Notification>) -> bool {
        if !persist(&mut self.store, &notifications, "notifications") {
            return false;
        }
        log::info!("Imported {} notifications", notifications.len());
        self.notifications = notifications;
        true
    }

    /// Drop every alert. The next load brings back the demo alerts.
    pub fn clear_all_notifications(&mut self) {
        self.notifications = mutator::clear_all();
        if let Err(e) = self.store.clear::<Vec<Notification>>() {
            log::error!("Error clearing notifications: {}", e);
        }
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Open a video. Returns `None` if no video has `id`.
    pub fn select_video(&mut self, id: &str) -> Option<&Video> {
        let video = self.videos.iter().find(|v| v.id == id)?;
        self.selected_video = Some(video.id.clone());
        Some(video)
    }

    pub fn selected_video(&self) -> Option<&Video> {
        let id = self.selected_video.as_deref()?;
        self.videos.iter().find(|v| v.id == id)
    }

    /// Close the open video and return to the list.
    pub fn close_video(&mut self) {
        self.selected_video = None;
    }

    pub fn notification_settings(&self) -> &NotificationSettings {
        &self.notification_settings
    }

    pub fn update_notification_settings(&mut self, patch: &NotificationSettingsPatch) -> &NotificationSettings {
        let merged = mutator::merge_settings(&self.notification_settings, patch);
        if persist(&mut self.store, &merged, "notification settings") {
            self.notification_settings = merged;
        }
        &self.notification_settings
    }

    pub fn app_settings(&self) -> &AppSettings {
        &self.app_settings
    }

    pub fn update_app_settings(&mut self, patch: &AppSettingsPatch) -> &AppSettings {
        let merged = mutator::merge_settings(&self.app_settings, patch);
        if persist(&mut self.store, &merged, "app settings") {
            self.app_settings = merged;
        }
        &self.app_settings
    }
}
