// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! HawkWatch command line front end.
//!
//! Each subcommand opens the matching screen, performs one user action
//! and prints what the screen would show.

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand};
use hawkwatch::app::HawkWatchApp;
use hawkwatch::auth::{self, AuthSession, Credentials, HostedAuthClient, SignUpOutcome};
use hawkwatch::config::{self, Config};
use hawkwatch::error::AuthError;
use hawkwatch::io::serialization;
use hawkwatch::io::storage::FileStore;
use hawkwatch::models::notification::Notification;
use hawkwatch::models::settings::{AppSettingsPatch, NotificationSettingsPatch};
use hawkwatch::models::user::UserProfile;
use hawkwatch::models::video::Video;
use hawkwatch::navigation::{NavAction, Screen};
use hawkwatch::util::time::format_relative;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hawkwatch", version, about = "HawkWatch alerts, footage and settings")]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Alerts
    #[command(subcommand)]
    Notifications(NotificationsCommand),
    /// Saved footage
    #[command(subcommand)]
    Videos(VideosCommand),
    /// Notification settings
    #[command(subcommand)]
    Settings(NotificationSettingsCommand),
    /// Application settings
    #[command(subcommand)]
    AppSettings(AppSettingsCommand),
    /// Hosted account
    #[command(subcommand)]
    Auth(AuthCommand),
    /// Show the signed-in user's profile
    Profile,
}

#[derive(Subcommand)]
enum NotificationsCommand {
    List,
    /// Mark one alert as read
    Read { id: String },
    /// Mark every alert as read
    ReadAll,
    /// Delete all alerts
    Clear,
    /// Write alerts to a .yaml or .json file
    Export { path: PathBuf },
    /// Replace alerts with the contents of a .yaml or .json file
    Import { path: PathBuf },
}

#[derive(Subcommand)]
enum VideosCommand {
    List,
    Show { id: String },
}

#[derive(Subcommand)]
enum NotificationSettingsCommand {
    Show,
    Set(NotificationSettingsArgs),
}

#[derive(Subcommand)]
enum AppSettingsCommand {
    Show,
    Set(AppSettingsArgs),
}

#[derive(Args)]
struct NotificationSettingsArgs {
    #[arg(long)]
    push_enabled: Option<bool>,
    #[arg(long)]
    email_enabled: Option<bool>,
    #[arg(long)]
    danger_alerts: Option<bool>,
    #[arg(long)]
    warning_alerts: Option<bool>,
    #[arg(long)]
    info_alerts: Option<bool>,
    #[arg(long)]
    quiet_hours: Option<bool>,
    #[arg(long, value_name = "HH:MM")]
    quiet_start: Option<String>,
    #[arg(long, value_name = "HH:MM")]
    quiet_end: Option<String>,
}

impl From<NotificationSettingsArgs> for NotificationSettingsPatch {
    fn from(args: NotificationSettingsArgs) -> Self {
        Self {
            push_enabled: args.push_enabled,
            email_enabled: args.email_enabled,
            danger_alerts: args.danger_alerts,
            warning_alerts: args.warning_alerts,
            info_alerts: args.info_alerts,
            quiet_hours: args.quiet_hours,
            quiet_start: args.quiet_start,
            quiet_end: args.quiet_end,
        }
    }
}

#[derive(Args)]
struct AppSettingsArgs {
    #[arg(long)]
    dark_mode: Option<bool>,
    #[arg(long)]
    notifications: Option<bool>,
    #[arg(long)]
    auto_recording: Option<bool>,
    #[arg(long)]
    high_sensitivity: Option<bool>,
    #[arg(long)]
    save_to_cloud: Option<bool>,
    /// Days to keep footage
    #[arg(long, value_name = "DAYS")]
    data_retention: Option<u32>,
}

impl From<AppSettingsArgs> for AppSettingsPatch {
    fn from(args: AppSettingsArgs) -> Self {
        Self {
            dark_mode: args.dark_mode,
            notifications: args.notifications,
            auto_recording: args.auto_recording,
            high_sensitivity: args.high_sensitivity,
            save_to_cloud: args.save_to_cloud,
            data_retention: args.data_retention,
        }
    }
}

#[derive(Subcommand)]
enum AuthCommand {
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    SignOut,
    /// Fetch the signed-in user from the service
    Whoami,
}

fn print_notification(n: &Notification) {
    let marker = if n.read { " " } else { "*" };
    let mut details = vec![format_relative(n.created_at, Utc::now())];
    if let Some(severity) = n.severity {
        details.push(severity.as_str().to_uppercase());
    }
    if let Some(ref location) = n.location {
        details.push(location.clone());
    }
    println!("{} [{}] {}", marker, n.id, n.title);
    println!("      {}", n.message);
    println!("      {}", details.join(" | "));
}

fn print_video(video: &Video) {
    println!(
        "[{}] {} - {} alerts, {} threat, {}",
        video.id,
        video.name,
        video.alert_count(),
        video.threat_level().as_str(),
        video.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
    );
}

fn run_notifications(app: &mut HawkWatchApp<FileStore>, command: NotificationsCommand) -> Result<()> {
    app.navigate(NavAction::Navigate(Screen::Notifications));

    match command {
        NotificationsCommand::List => {
            println!("{} unread", app.unread_count());
            for n in app.notifications() {
                print_notification(n);
            }
        }
        NotificationsCommand::Read { id } => {
            if app.mark_read(&id) {
                println!("Marked {} as read", id);
            } else {
                println!("No notification with id {}", id);
            }
        }
        NotificationsCommand::ReadAll => {
            app.mark_all_read();
            println!("Marked {} notifications as read", app.notifications().len());
        }
        NotificationsCommand::Clear => {
            app.clear_all_notifications();
            println!("Cleared all notifications");
        }
        NotificationsCommand::Export { path } => {
            serialization::export_by_extension(&app.notifications(), &path)
                .with_context(|| format!("Failed to export notifications to {}", path.display()))?;
            log::info!("Exported notifications to {}", path.display());
            println!("Exported {} notifications to {}", app.notifications().len(), path.display());
        }
        NotificationsCommand::Import { path } => {
            let notifications: Vec<Notification> = serialization::import_by_extension(&path)
                .with_context(|| format!("Failed to import notifications from {}", path.display()))?;
            let count = notifications.len();
            if !app.import_notifications(notifications) {
                anyhow::bail!("Failed to save imported notifications");
            }
            println!("Imported {} notifications from {}", count, path.display());
        }
    }
    Ok(())
}

fn run_videos(app: &mut HawkWatchApp<FileStore>, command: VideosCommand) -> Result<()> {
    app.navigate(NavAction::Navigate(Screen::Footages));

    match command {
        VideosCommand::List => {
            for video in app.videos() {
                print_video(video);
            }
        }
        VideosCommand::Show { id } => {
            let video = app
                .select_video(&id)
                .with_context(|| format!("No video with id {}", id))?;
            print_video(video);
            println!("  {}", video.media_url);
            for event in &video.events {
                let marker = if event.dangerous { "!" } else { " " };
                let seconds = event.offset().map(|d| d.as_secs().to_string()).unwrap_or_default();
                println!("  {} {} ({}s) {}", marker, event.position, seconds, event.description);
            }
        }
    }
    Ok(())
}

fn run_settings(app: &mut HawkWatchApp<FileStore>, command: NotificationSettingsCommand) -> Result<()> {
    app.navigate(NavAction::Navigate(Screen::Notifications));

    let settings = match command {
        NotificationSettingsCommand::Show => app.notification_settings(),
        NotificationSettingsCommand::Set(args) => app.update_notification_settings(&args.into()),
    };
    print!("{}", serde_yaml::to_string(settings)?);
    if settings.in_quiet_hours(Local::now().time()) {
        println!("# quiet hours are active now");
    }
    Ok(())
}

fn run_app_settings(app: &mut HawkWatchApp<FileStore>, command: AppSettingsCommand) -> Result<()> {
    app.navigate(NavAction::Navigate(Screen::Profile));

    let settings = match command {
        AppSettingsCommand::Show => app.app_settings(),
        AppSettingsCommand::Set(args) => app.update_app_settings(&args.into()),
    };
    print!("{}", serde_yaml::to_string(settings)?);
    Ok(())
}

fn run_auth(config: &Config, storage: &mut FileStore, command: AuthCommand) -> Result<()> {
    let backend = config.backend.as_ref().ok_or(AuthError::NotConfigured)?;
    let client = HostedAuthClient::new(backend);
    let mut session = AuthSession::restore(client, auth::load_session(storage));

    let result = match command {
        AuthCommand::SignIn { email, password } => session
            .sign_in(&Credentials::new(email, password))
            .map(|user| println!("Signed in as {}", user.email.as_deref().unwrap_or(&user.id))),
        AuthCommand::SignUp { email, password } => session
            .sign_up(&Credentials::new(email, password))
            .map(|outcome| match outcome {
                SignUpOutcome::SignedIn(s) => println!("Signed up and signed in as {}", s.user.id),
                SignUpOutcome::ConfirmationRequired(_) => {
                    println!("Check your email to confirm your account")
                }
            }),
        AuthCommand::SignOut => session.sign_out().map(|()| println!("Signed out")),
        AuthCommand::Whoami => session
            .refresh_user()
            .map(|user| println!("{} ({})", user.email.as_deref().unwrap_or("-"), user.id)),
    };

    auth::save_session(storage, session.session()).context("Failed to persist session")?;
    result?;
    Ok(())
}

fn run_profile(app: &mut HawkWatchApp<FileStore>, storage: &FileStore) -> Result<()> {
    app.navigate(NavAction::Navigate(Screen::Profile));

    let session = auth::load_session(storage);
    let profile = UserProfile::from_user(session.as_ref().map(|s| &s.user));
    println!("{} <{}>", profile.full_name, profile.email);
    if let (Some(role), Some(organization)) = (&profile.role, &profile.organization) {
        println!("{} at {}", role, organization);
    }
    println!("Member since {}", profile.join_date);
    print!("{}", serde_yaml::to_string(app.app_settings())?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str()))
        .init();

    let mut storage = FileStore::open(config.storage_dir.clone())
        .with_context(|| format!("Failed to open storage at {}", config.storage_dir.display()))?;

    let command = match cli.command {
        Command::Auth(command) => return run_auth(&config, &mut storage, command),
        other => other,
    };

    let signed_in = auth::load_session(&storage).is_some();
    let mut app = HawkWatchApp::new(storage.clone());
    app.navigate(NavAction::Replace(Screen::Dashboard));
    if app.current_screen().requires_auth() && !signed_in {
        log::info!("Not signed in, showing demo data");
    }

    match command {
        Command::Notifications(command) => run_notifications(&mut app, command),
        Command::Videos(command) => run_videos(&mut app, command),
        Command::Settings(command) => run_settings(&mut app, command),
        Command::AppSettings(command) => run_app_settings(&mut app, command),
        Command::Profile => run_profile(&mut app, &storage),
        Command::Auth(_) => Ok(()),
    }
}
