//! Plain-text rendering of a [`Session`].

use std::fmt::Write;

use watchflow_core::RankedItem;

use crate::session::{Session, ViewState};

const HEADING: &str = "Finish-First: What should I watch next?";
const INTRO: &str =
    "Enter your AniList username. We'll pull your \"Watching\" list and sort by episodes left.";
const EMPTY: &str = "No \u{201c}Watching\u{201d} entries found.";

/// Render the whole screen for the current state.
pub fn render(session: &Session) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADING}");
    let _ = writeln!(out, "{INTRO}");
    let _ = writeln!(out);

    let name = if session.username().is_empty() {
        "(empty)"
    } else {
        session.username()
    };
    let _ = writeln!(out, "Username: {name}  {}", action_control(session));

    match session.state() {
        ViewState::Idle | ViewState::Loading => {}
        ViewState::Failure(message) => {
            let _ = writeln!(out);
            let _ = writeln!(out, "Error: {message}");
        }
        ViewState::Success(items) if items.is_empty() => {
            let _ = writeln!(out);
            let _ = writeln!(out, "{EMPTY}");
        }
        ViewState::Success(items) => {
            for (rank, item) in items.iter().enumerate() {
                let _ = writeln!(out);
                render_item(&mut out, rank + 1, item);
            }
        }
    }

    out
}

/// The loading indicator replaces the action button while in flight.
fn action_control(session: &Session) -> &'static str {
    if session.is_loading() {
        "Loading\u{2026}"
    } else if session.can_submit() {
        "[ Get Next ]"
    } else {
        "[ Get Next ] (disabled)"
    }
}

fn render_item(out: &mut String, rank: usize, item: &RankedItem) {
    let _ = writeln!(out, "{rank:>2}. {}", item.title);
    if let Some(cover) = &item.cover {
        let _ = writeln!(out, "    Cover: {cover}");
    }
    let _ = writeln!(out, "    {}", progress_line(item));
    if !item.genres.is_empty() {
        let _ = writeln!(out, "    {}", item.genres.join(" \u{2022} "));
    }
    if let Some(score) = item.score {
        let _ = writeln!(out, "    Avg score: {score}");
    }
    let _ = writeln!(out, "    {}", item.url);
}

fn progress_line(item: &RankedItem) -> String {
    match item.episodes_total {
        Some(total) => {
            let left = item
                .remaining
                .map(|r| r.to_string())
                .unwrap_or_else(|| "?".to_string());
            format!("Progress: {}/{total} (left {left})", item.progress)
        }
        None => format!("Progress: {} (ongoing)", item.progress),
    }
}
