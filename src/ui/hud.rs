use gtk4::prelude::*;

use super::state::AppState;
use crate::game::deck::DealMode;
use crate::game::session::Phase;

/// What the message line is currently reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    None,
    Incorrect,
    Solved,
}

pub(super) fn set_status(st: &AppState, status: Status) {
    let Some(label) = &st.message_label else {
        return;
    };
    match status {
        Status::None => {
            label.set_text("");
            label.remove_css_class("status-solved");
            label.remove_css_class("status-incorrect");
        }
        Status::Incorrect => {
            label.set_text("Not solved yet");
            label.remove_css_class("status-solved");
            label.add_css_class("status-incorrect");
        }
        Status::Solved => {
            label.set_text("Solved!");
            label.remove_css_class("status-incorrect");
            label.add_css_class("status-solved");
        }
    }
}

/// The one control button doubles as validate and reset: "Check" while
/// playing, "Play again" once the board is completed.
pub(super) fn refresh_check_button(st: &AppState) {
    if let Some(button) = &st.check_button {
        match st.session.phase() {
            Phase::Completed => button.set_label("Play again"),
            _ => button.set_label("Check"),
        }
    }
}

pub(super) fn update_subtitle(st: &AppState) {
    if let Some(subtitle) = &st.title_subtitle {
        match st.deal_mode {
            DealMode::Normal => subtitle.set_text("Rows, columns and diagonals"),
            mode => subtitle.set_text(&format!("Debug deal | {}", mode.name())),
        }
    }
}
