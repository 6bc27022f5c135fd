// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity-Board: client for the school activities signup service
//!
//! This crate fetches the activity collection from the signup service,
//! renders it as a view description, and submits signup/unregister
//! requests, refetching the whole collection after every successful
//! mutation so the server stays the single source of truth.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod status;
pub mod view;

pub use services::board::ActivityBoard;
