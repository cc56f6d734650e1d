// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Demo data written on first run.

use crate::models::notification::{Notification, NotificationKind, Severity};
use crate::models::video::{TimedEvent, Video};
use chrono::{DateTime, NaiveDate, Utc};

fn demo_time(hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2025, 9, 25)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|t| t.and_utc())
        .unwrap_or_default()
}

fn demo_video(id: &str, name: &str, created_at: DateTime<Utc>, events: Vec<TimedEvent>) -> Video {
    Video {
        id: id.to_string(),
        name: name.to_string(),
        media_url: format!("/videos/{}.mp4", name),
        thumbnail_url: format!("/videos/{}_thumbnail.jpg", name),
        created_at,
        events,
    }
}

/// The three sample recordings shown on the footage screen.
pub fn demo_videos() -> Vec<Video> {
    vec![
        demo_video(
            "1",
            "Fighting0",
            demo_time(10, 30),
            vec![
                TimedEvent::new("00:02", "Individual becomes aggressive and throws items behind bar", true),
                TimedEvent::new("00:25", "Individual escalates destructive behavior", true),
                TimedEvent::new("00:46", "Continued aggressive behavior and property damage", true),
            ],
        ),
        demo_video(
            "2",
            "Shoplifting1",
            demo_time(9, 15),
            vec![
                TimedEvent::new("00:05", "Person enters store and browses items normally", false),
                TimedEvent::new("00:18", "Suspicious behavior: looking around frequently", true),
                TimedEvent::new("00:32", "Item concealment detected", true),
                TimedEvent::new("00:45", "Person exits without paying", true),
            ],
        ),
        demo_video(
            "3",
            "Robbery1",
            demo_time(8, 45),
            vec![
                TimedEvent::new("00:03", "Individual enters store with hood up", true),
                TimedEvent::new("00:12", "Approaches counter aggressively", true),
                TimedEvent::new("00:20", "Demands money from cashier", true),
                TimedEvent::new("00:35", "Flees scene with stolen goods", true),
            ],
        ),
    ]
}

/// The five sample alerts. Only alert "3" starts out read.
pub fn demo_notifications() -> Vec<Notification> {
    let mut fighting = Notification::new(
        "3",
        "ALERT: Fighting Detected",
        "Aggressive behavior and property damage detected",
        NotificationKind::Danger,
        demo_time(8, 45),
    )
    .with_location("Camera 2 - Bar Area")
    .with_severity(Severity::High);
    fighting.read = true;

    vec![
        Notification::new(
            "1",
            "DANGER: Robbery Detected",
            "Individual enters store with hood up and approaches counter aggressively",
            NotificationKind::Danger,
            demo_time(10, 30),
        )
        .with_location("Camera 1 - Front Entrance")
        .with_severity(Severity::High),
        Notification::new(
            "2",
            "WARNING: Suspicious Behavior",
            "Person showing unusual movement patterns near restricted area",
            NotificationKind::Warning,
            demo_time(9, 15),
        )
        .with_location("Camera 3 - Storage Area")
        .with_severity(Severity::Medium),
        fighting,
        Notification::new(
            "4",
            "INFO: System Update",
            "HawkWatch AI analysis models updated successfully",
            NotificationKind::Info,
            demo_time(8, 0),
        )
        .with_location("System")
        .with_severity(Severity::Low),
        Notification::new(
            "5",
            "WARNING: Shoplifting Attempt",
            "Item concealment detected, person exits without paying",
            NotificationKind::Warning,
            demo_time(7, 30),
        )
        .with_location("Camera 4 - Retail Floor")
        .with_severity(Severity::Medium),
    ]
}
