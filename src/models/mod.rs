// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data structures persisted by the record store.

pub mod notification;
pub mod settings;
pub mod user;
pub mod video;
