// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Alert notification data structures.
//!
//! Notifications are surfaced to the user on the alerts screen and carry
//! a read flag that only ever moves from unread to read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Danger,
    Warning,
    Info,
    Success,
}

/// How urgent an alert is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// An alert surfaced to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(rename = "isRead", default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl Notification {
    /// Create a new unread notification.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            created_at,
            kind,
            read: false,
            location: None,
            severity: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stored_shape_uses_app_keys() {
        let created = Utc.with_ymd_and_hms(2025, 9, 25, 10, 30, 0).unwrap();
        let notification = Notification::new("7", "DANGER", "Weapon seen", NotificationKind::Danger, created)
            .with_severity(Severity::High);

        let value = serde_json::to_value(&notification).unwrap();
        assert_eq!(value["type"], "danger");
        assert_eq!(value["isRead"], false);
        assert_eq!(value["severity"], "high");
        assert_eq!(value["timestamp"], "2025-09-25T10:30:00Z");
        assert!(value.get("location").is_none());
    }

    #[test]
    fn test_parse_without_optional_fields() {
        let json = r#"{
            "id": "9",
            "title": "INFO",
            "message": "Models updated",
            "timestamp": "2025-09-25T08:00:00Z",
            "type": "info",
            "isRead": true
        }"#;

        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.kind, NotificationKind::Info);
        assert!(notification.read);
        assert_eq!(notification.location, None);
        assert_eq!(notification.severity, None);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }
}
