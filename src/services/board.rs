// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The activity board: the one component of the client.
//!
//! Owns the collection snapshot, the rendered view, the signup form, and the
//! status slot. Each user trigger (load, form submit, row removal) maps to
//! one command handler here; every successful mutation is followed by a full
//! refetch so the server stays authoritative.

use crate::error::AppError;
use crate::models::ActivityCollection;
use crate::services::api::SignupClient;
use crate::status::{StatusKind, StatusMessage, StatusSlot};
use crate::view::{self, BoardView, ListArea};

/// Generic error text for a service rejection that carried no `detail`.
pub const GENERIC_ERROR_TEXT: &str = "An error occurred";
/// Fallback when a signup request never produced a readable reply.
pub const SIGNUP_FAILURE_TEXT: &str = "Failed to sign up. Please try again.";
/// Fallback when an unregister request never produced a readable reply.
pub const UNREGISTER_FAILURE_TEXT: &str = "Failed to unregister. Please try again.";

/// Signup form state: values are submitted verbatim, with no client-side
/// validation.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    fn clear(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}

/// The activity board component.
pub struct ActivityBoard {
    api: SignupClient,
    activities: ActivityCollection,
    view: BoardView,
    form: SignupForm,
    status: StatusSlot,
}

impl ActivityBoard {
    pub fn new(api: SignupClient, status: StatusSlot) -> Self {
        Self {
            api,
            activities: ActivityCollection::default(),
            view: BoardView::default(),
            form: SignupForm::default(),
            status,
        }
    }

    /// The current rendered view.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// The current collection snapshot.
    pub fn activities(&self) -> &ActivityCollection {
        &self.activities
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    /// Fill the signup form (the shell's stand-in for typing into inputs).
    pub fn set_form(&mut self, email: &str, activity: &str) {
        self.form.email = email.to_string();
        self.form.activity = activity.to_string();
    }

    /// The currently visible status message, if any.
    pub fn status(&self) -> Option<StatusMessage> {
        self.status.current()
    }

    /// Reload the collection and re-render the whole board.
    ///
    /// On success the snapshot, card list, and selection options are all
    /// replaced together from the same fetch result. On failure the card
    /// area becomes a static failure notice while the options keep their
    /// prior state; nothing is retried automatically.
    pub async fn refresh(&mut self) {
        match self.api.get_activities().await {
            Ok(collection) => {
                self.view = view::render(&collection);
                self.activities = collection;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch activities");
                self.view.list = ListArea::Unavailable;
            }
        }
    }

    /// Submit the signup form.
    ///
    /// Success: show the server's message, clear the form, refetch.
    /// Failure: show the error text; the form keeps its values and no
    /// refetch happens.
    pub async fn submit_signup(&mut self) {
        let email = self.form.email.clone();
        let activity = self.form.activity.clone();

        match self.api.signup(&activity, &email).await {
            Ok(message) => {
                self.status.show(message, StatusKind::Success);
                self.form.clear();
                self.refresh().await;
            }
            Err(e) => {
                if e.is_rejection() {
                    tracing::warn!(error = %e, activity = %activity, "Signup rejected");
                } else {
                    tracing::error!(error = %e, activity = %activity, "Signup failed");
                }
                self.status
                    .show(mutation_error_text(&e, SIGNUP_FAILURE_TEXT), StatusKind::Error);
            }
        }
    }

    /// Unregister one rendered participant row.
    ///
    /// `email` is the row's display label, exactly as rendered. On success
    /// the row disappears from the view immediately, before the refetch that
    /// reconciles availability counts and options. On failure the row stays.
    pub async fn unregister(&mut self, activity: &str, email: &str) {
        match self.api.unregister(activity, email).await {
            Ok(message) => {
                self.view.remove_participant_row(activity, email);
                self.status.show(message, StatusKind::Success);
                self.refresh().await;
            }
            Err(e) => {
                if e.is_rejection() {
                    tracing::warn!(error = %e, activity = %activity, "Unregister rejected");
                } else {
                    tracing::error!(error = %e, activity = %activity, "Unregister failed");
                }
                self.status.show(
                    mutation_error_text(&e, UNREGISTER_FAILURE_TEXT),
                    StatusKind::Error,
                );
            }
        }
    }
}

/// Map a mutation error to the text shown in the status slot.
fn mutation_error_text(err: &AppError, transport_fallback: &str) -> String {
    match err {
        AppError::Rejected(detail) => detail.clone(),
        AppError::Status(_) => GENERIC_ERROR_TEXT.to_string(),
        _ => transport_fallback.to_string(),
    }
}
