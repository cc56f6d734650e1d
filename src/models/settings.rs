// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Notification and application settings records.
//!
//! Each settings record is a single value (not a collection) that is
//! replaced wholesale on every save. Partial updates are expressed as a
//! patch where every field is optional; absent fields keep their value.

use crate::models::notification::NotificationKind;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A settings record that can be updated from a partial patch.
pub trait Settings: Clone {
    type Patch;

    /// Overwrite every field present in `patch`.
    fn apply(&mut self, patch: &Self::Patch);
}

/// Alert delivery preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub push_enabled: bool,
    pub email_enabled: bool,
    pub danger_alerts: bool,
    pub warning_alerts: bool,
    pub info_alerts: bool,
    pub quiet_hours: bool,
    /// Start of the quiet window as `HH:MM`.
    pub quiet_start: String,
    /// End of the quiet window as `HH:MM`.
    pub quiet_end: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            push_enabled: true,
            email_enabled: false,
            danger_alerts: true,
            warning_alerts: true,
            info_alerts: false,
            quiet_hours: false,
            quiet_start: "22:00".to_string(),
            quiet_end: "08:00".to_string(),
        }
    }
}

impl NotificationSettings {
    /// Whether alerts of the given kind are switched on. Success alerts
    /// have no toggle.
    pub fn alerts_enabled_for(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Danger => self.danger_alerts,
            NotificationKind::Warning => self.warning_alerts,
            NotificationKind::Info => self.info_alerts,
            NotificationKind::Success => true,
        }
    }

    /// Whether `time` falls inside the quiet window. The window may wrap
    /// past midnight; malformed bounds disable it.
    pub fn in_quiet_hours(&self, time: NaiveTime) -> bool {
        if !self.quiet_hours {
            return false;
        }

        let (Ok(start), Ok(end)) = (
            NaiveTime::parse_from_str(&self.quiet_start, "%H:%M"),
            NaiveTime::parse_from_str(&self.quiet_end, "%H:%M"),
        ) else {
            return false;
        };

        if start <= end {
            start <= time && time < end
        } else {
            time >= start || time < end
        }
    }
}

/// Partial update for [`NotificationSettings`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettingsPatch {
    pub push_enabled: Option<bool>,
    pub email_enabled: Option<bool>,
    pub danger_alerts: Option<bool>,
    pub warning_alerts: Option<bool>,
    pub info_alerts: Option<bool>,
    pub quiet_hours: Option<bool>,
    pub quiet_start: Option<String>,
    pub quiet_end: Option<String>,
}

impl Settings for NotificationSettings {
    type Patch = NotificationSettingsPatch;

    fn apply(&mut self, patch: &Self::Patch) {
        if let Some(v) = patch.push_enabled {
            self.push_enabled = v;
        }
        if let Some(v) = patch.email_enabled {
            self.email_enabled = v;
        }
        if let Some(v) = patch.danger_alerts {
            self.danger_alerts = v;
        }
        if let Some(v) = patch.warning_alerts {
            self.warning_alerts = v;
        }
        if let Some(v) = patch.info_alerts {
            self.info_alerts = v;
        }
        if let Some(v) = patch.quiet_hours {
            self.quiet_hours = v;
        }
        if let Some(ref v) = patch.quiet_start {
            self.quiet_start = v.clone();
        }
        if let Some(ref v) = patch.quiet_end {
            self.quiet_end = v.clone();
        }
    }
}

/// General application preferences from the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub dark_mode: bool,
    pub notifications: bool,
    pub auto_recording: bool,
    pub high_sensitivity: bool,
    pub save_to_cloud: bool,
    /// Days to keep footage.
    pub data_retention: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            notifications: true,
            auto_recording: false,
            high_sensitivity: false,
            save_to_cloud: true,
            data_retention: 30,
        }
    }
}

/// Partial update for [`AppSettings`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettingsPatch {
    pub dark_mode: Option<bool>,
    pub notifications: Option<bool>,
    pub auto_recording: Option<bool>,
    pub high_sensitivity: Option<bool>,
    pub save_to_cloud: Option<bool>,
    pub data_retention: Option<u32>,
}

impl Settings for AppSettings {
    type Patch = AppSettingsPatch;

    fn apply(&mut self, patch: &Self::Patch) {
        if let Some(v) = patch.dark_mode {
            self.dark_mode = v;
        }
        if let Some(v) = patch.notifications {
            self.notifications = v;
        }
        if let Some(v) = patch.auto_recording {
            self.auto_recording = v;
        }
        if let Some(v) = patch.high_sensitivity {
            self.high_sensitivity = v;
        }
        if let Some(v) = patch.save_to_cloud {
            self.save_to_cloud = v;
        }
        if let Some(v) = patch.data_retention {
            self.data_retention = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_quiet_hours_wrap_midnight() {
        let settings = NotificationSettings {
            quiet_hours: true,
            ..NotificationSettings::default()
        };

        assert!(settings.in_quiet_hours(at(23, 15)));
        assert!(settings.in_quiet_hours(at(0, 0)));
        assert!(settings.in_quiet_hours(at(7, 59)));
        assert!(!settings.in_quiet_hours(at(8, 0)));
        assert!(!settings.in_quiet_hours(at(12, 0)));
    }

    #[test]
    fn test_quiet_hours_same_day_window() {
        let settings = NotificationSettings {
            quiet_hours: true,
            quiet_start: "13:00".to_string(),
            quiet_end: "14:30".to_string(),
            ..NotificationSettings::default()
        };

        assert!(settings.in_quiet_hours(at(13, 0)));
        assert!(!settings.in_quiet_hours(at(14, 30)));
        assert!(!settings.in_quiet_hours(at(9, 0)));
    }

    #[test]
    fn test_quiet_hours_off_or_malformed() {
        let off = NotificationSettings::default();
        assert!(!off.in_quiet_hours(at(23, 0)));

        let malformed = NotificationSettings {
            quiet_hours: true,
            quiet_start: "late".to_string(),
            ..NotificationSettings::default()
        };
        assert!(!malformed.in_quiet_hours(at(23, 0)));
    }

    #[test]
    fn test_alert_toggles() {
        let settings = NotificationSettings::default();
        assert!(settings.alerts_enabled_for(NotificationKind::Danger));
        assert!(settings.alerts_enabled_for(NotificationKind::Warning));
        assert!(!settings.alerts_enabled_for(NotificationKind::Info));
        assert!(settings.alerts_enabled_for(NotificationKind::Success));
    }

    #[test]
    fn test_partial_stored_record_fills_defaults() {
        let settings: NotificationSettings =
            serde_json::from_str(r#"{"pushEnabled": false, "quietHours": true}"#).unwrap();

        assert!(!settings.push_enabled);
        assert!(settings.quiet_hours);
        assert_eq!(settings.quiet_start, "22:00");
        assert!(settings.danger_alerts);
    }

    #[test]
    fn test_patch_from_partial_json() {
        let patch: AppSettingsPatch = serde_json::from_str(r#"{"dataRetention": 7}"#).unwrap();
        let mut settings = AppSettings::default();
        settings.apply(&patch);

        assert_eq!(settings.data_retention, 7);
        assert_eq!(settings, AppSettings { data_retention: 7, ..AppSettings::default() });
    }
}
