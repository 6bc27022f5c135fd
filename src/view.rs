// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure rendering: `ActivityCollection` in, view description out.
//!
//! The card list and the selection options are always produced together from
//! the same snapshot, so the two can never drift apart within one render.

use crate::models::ActivityCollection;
use std::fmt::Write as _;

/// Placeholder option that always heads the selection control.
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
/// Shown in place of an empty roster (never an empty list element).
pub const EMPTY_ROSTER_TEXT: &str = "No participants yet.";
/// Static notice shown when the activity list cannot be loaded.
pub const LOAD_FAILURE_TEXT: &str = "Failed to load activities. Please try again later.";

/// The board's rendered UI state.
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    /// Card list area
    pub list: ListArea,
    /// Selectable options (the placeholder is implicit and always present)
    pub options: Vec<String>,
}

impl BoardView {
    /// Remove one participant row from the named activity's card, keyed on
    /// the row's display label. Returns whether a row was removed.
    ///
    /// This is the immediate local removal after a successful unregister; it
    /// may leave an empty row list behind (the empty-roster placeholder only
    /// appears on the next full render).
    pub fn remove_participant_row(&mut self, activity: &str, label: &str) -> bool {
        let ListArea::Cards(cards) = &mut self.list else {
            return false;
        };
        let Some(card) = cards.iter_mut().find(|card| card.name == activity) else {
            return false;
        };
        let Roster::Rows(rows) = &mut card.roster else {
            return false;
        };
        match rows.iter().position(|row| row.label == label) {
            Some(idx) => {
                rows.remove(idx);
                true
            }
            None => false,
        }
    }
}

/// The card list area: either rendered cards or a static failure notice.
#[derive(Debug, Clone)]
pub enum ListArea {
    Cards(Vec<ActivityCard>),
    Unavailable,
}

impl Default for ListArea {
    fn default() -> Self {
        ListArea::Cards(Vec::new())
    }
}

/// One rendered activity card.
#[derive(Debug, Clone)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub roster: Roster,
}

/// A card's participant section.
#[derive(Debug, Clone)]
pub enum Roster {
    /// Rendered as the explicit "no participants" placeholder
    Empty,
    Rows(Vec<ParticipantRow>),
}

/// One participant row with its removal control.
#[derive(Debug, Clone)]
pub struct ParticipantRow {
    /// Display label; also the exact `email` value sent on unregister.
    pub label: String,
}

/// Render the whole board from a collection snapshot, in server order.
pub fn render(collection: &ActivityCollection) -> BoardView {
    let mut cards = Vec::with_capacity(collection.len());
    let mut options = Vec::with_capacity(collection.len());

    for (name, activity) in collection.iter() {
        let roster = if activity.participants.is_empty() {
            Roster::Empty
        } else {
            Roster::Rows(
                activity
                    .participants
                    .iter()
                    .map(|p| ParticipantRow {
                        label: p.display_text(),
                    })
                    .collect(),
            )
        };

        cards.push(ActivityCard {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            roster,
        });
        options.push(name.to_string());
    }

    BoardView {
        list: ListArea::Cards(cards),
        options,
    }
}

/// Format the view as terminal text for the interactive shell.
pub fn format_board(view: &BoardView) -> String {
    let mut out = String::new();

    match &view.list {
        ListArea::Unavailable => {
            let _ = writeln!(out, "{LOAD_FAILURE_TEXT}");
        }
        ListArea::Cards(cards) => {
            for card in cards {
                let _ = writeln!(out, "{}", card.name);
                let _ = writeln!(out, "  {}", card.description);
                let _ = writeln!(out, "  Schedule: {}", card.schedule);
                let _ = writeln!(out, "  Availability: {} spots left", card.spots_left);
                let _ = writeln!(out, "  Participants");
                match &card.roster {
                    Roster::Empty => {
                        let _ = writeln!(out, "    {EMPTY_ROSTER_TEXT}");
                    }
                    Roster::Rows(rows) => {
                        for row in rows {
                            let _ = writeln!(out, "    {} [x]", row.label);
                        }
                    }
                }
            }
        }
    }

    let _ = writeln!(out, "Activities:");
    let _ = writeln!(out, "  {SELECT_PLACEHOLDER}");
    for name in &view.options {
        let _ = writeln!(out, "  {name}");
    }

    out
}
