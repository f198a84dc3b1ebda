// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP handlers, one module per resource.

pub mod details;
pub mod docs;
pub mod health;
pub mod pages;
pub mod properties;
