// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Read-state and settings mutations.
//!
//! Each function takes the current value and one user intent and returns
//! the new value. Nothing here touches storage; callers persist the
//! result through the record store.

use crate::models::notification::Notification;
use crate::models::settings::Settings;

/// Mark the notification with `id` as read. Unknown ids leave the
/// collection unchanged.
pub fn mark_read(notifications: &[Notification], id: &str) -> Vec<Notification> {
    notifications
        .iter()
        .map(|n| {
            if n.id == id {
                Notification {
                    read: true,
                    ..n.clone()
                }
            } else {
                n.clone()
            }
        })
        .collect()
}

/// Mark every notification as read.
pub fn mark_all_read(notifications: &[Notification]) -> Vec<Notification> {
    notifications
        .iter()
        .map(|n| Notification {
            read: true,
            ..n.clone()
        })
        .collect()
}

/// The empty collection. The caller is responsible for clearing storage.
pub fn clear_all<T>() -> Vec<T> {
    Vec::new()
}

/// Overwrite every field of `current` that is present in `patch`.
pub fn merge_settings<S: Settings>(current: &S, patch: &S::Patch) -> S {
    let mut merged = current.clone();
    merged.apply(patch);
    merged
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::seed::demo_notifications;
    use crate::models::settings::{
        AppSettings, AppSettingsPatch, NotificationSettings, NotificationSettingsPatch,
    };

    #[test]
    fn test_mark_read_only_touches_target() {
        let before = demo_notifications();
        let after = mark_read(&before, "2");

        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(&after) {
            if old.id == "2" {
                assert!(new.read);
                assert_eq!(new, &Notification { read: true, ..old.clone() });
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn test_mark_read_every_present_id() {
        let before = demo_notifications();
        for target in before.iter().map(|n| n.id.clone()) {
            let after = mark_read(&before, &target);
            assert_eq!(after.len(), before.len());
            assert!(after.iter().find(|n| n.id == target).unwrap().read);
        }
    }

    #[test]
    fn test_mark_read_unknown_id_is_noop() {
        let before = demo_notifications();
        assert_eq!(mark_read(&before, "42"), before);
        assert!(mark_read(&[], "1").is_empty());
    }

    #[test]
    fn test_mark_read_idempotent() {
        let before = demo_notifications();
        let once = mark_read(&before, "1");
        assert_eq!(mark_read(&once, "1"), once);
    }

    #[test]
    fn test_mark_read_already_read_stays_read() {
        let before = demo_notifications();
        let after = mark_read(&before, "3");
        assert_eq!(after, before);
    }

    #[test]
    fn test_mark_all_read() {
        let before = demo_notifications();
        let once = mark_all_read(&before);

        assert_eq!(once.len(), before.len());
        assert!(once.iter().all(|n| n.read));
        assert_eq!(mark_all_read(&once), once);
        assert_eq!(unread_count(&once), 0);
    }

    #[test]
    fn test_clear_all() {
        let cleared: Vec<Notification> = clear_all();
        assert!(cleared.is_empty());
        assert!(mark_all_read(&cleared).is_empty());
    }

    #[test]
    fn test_unread_count() {
        assert_eq!(unread_count(&demo_notifications()), 4);
    }

    #[test]
    fn test_merge_settings_single_field() {
        let current = NotificationSettings {
            email_enabled: true,
            quiet_hours: true,
            ..NotificationSettings::default()
        };
        let patch = NotificationSettingsPatch {
            push_enabled: Some(false),
            ..NotificationSettingsPatch::default()
        };

        let merged = merge_settings(&current, &patch);
        assert!(!merged.push_enabled);
        assert_eq!(
            merged,
            NotificationSettings {
                push_enabled: false,
                ..current.clone()
            }
        );
    }

    #[test]
    fn test_merge_settings_empty_patch() {
        let current = AppSettings::default();
        assert_eq!(merge_settings(&current, &AppSettingsPatch::default()), current);
    }

    #[test]
    fn test_merge_settings_skips_cross_field_checks() {
        let patch = NotificationSettingsPatch {
            quiet_start: Some("09:00".to_string()),
            quiet_end: Some("07:00".to_string()),
            ..NotificationSettingsPatch::default()
        };

        let merged = merge_settings(&NotificationSettings::default(), &patch);
        assert_eq!(merged.quiet_start, "09:00");
        assert_eq!(merged.quiet_end, "07:00");
    }

    #[test]
    fn test_merge_settings_idempotent() {
        let patch = AppSettingsPatch {
            dark_mode: Some(false),
            data_retention: Some(90),
            ..AppSettingsPatch::default()
        };
        let once = merge_settings(&AppSettings::default(), &patch);
        assert_eq!(merge_settings(&once, &patch), once);
    }
}
