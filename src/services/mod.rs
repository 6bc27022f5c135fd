// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API client and board logic.

pub mod api;
pub mod board;

pub use api::SignupClient;
pub use board::ActivityBoard;
