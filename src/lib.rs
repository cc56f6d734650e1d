// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! HawkWatch - local alert, footage and settings persistence.
//!
//! Records (saved footage, alerts, notification and app settings) live in
//! device-local key-value storage as JSON. Screens load them through the
//! record store, which seeds demo data on first run, and change them
//! through the pure functions in [`mutator`].

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod mutator;
pub mod navigation;
pub mod util;
