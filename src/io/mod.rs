// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Device-local persistence: storage backends, record encoding and
//! first-run demo data.

pub mod record_store;
pub mod seed;
pub mod serialization;
pub mod storage;
