use std::cell::RefCell;
use std::rc::Rc;
use gtk4::gdk;
use gtk4::glib;
use gtk4::prelude::*;
use super::app::restart_game;
use super::hud::update_subtitle;
use super::state::AppState;
use crate::game::deck::DealMode;

pub fn debug_mode_enabled() -> bool {
    match std::env::var("QUADRILLE_DEBUG") {
        Ok(value) => {
            let v = value.trim().to_ascii_lowercase();
            matches!(v.as_str(), "1" | "true" | "yes" | "on")
        }
        Err(_) => false,
    }
}

/// Deal mode for the first board. `QUADRILLE_DEAL` only applies while
/// debug mode is on; production always gets a shuffled deal.
pub fn startup_deal_mode() -> DealMode {
    if !debug_mode_enabled() {
        return DealMode::Normal;
    }
    match std::env::var("QUADRILLE_DEAL") {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "solved" => DealMode::PreSolved,
            "one-move" | "near" => DealMode::OneMoveFromSolved,
            _ => DealMode::Normal,
        },
        Err(_) => DealMode::Normal,
    }
}

pub fn handle_debug_shortcut(
    state: &Rc<RefCell<AppState>>,
    key: gdk::Key,
    mods: gdk::ModifierType,
) -> bool {
    let want_ctrl = mods.contains(gdk::ModifierType::CONTROL_MASK);
    if !want_ctrl {
        return false;
    }

    let is_debug_key = matches!(
        key,
        gdk::Key::_1
            | gdk::Key::KP_1
            | gdk::Key::_2
            | gdk::Key::KP_2
            | gdk::Key::_3
            | gdk::Key::KP_3
            | gdk::Key::F9
    );
    if !is_debug_key {
        return false;
    }

    if !debug_mode_enabled() {
        show_debug_banner(state, "DEBUG OFF | export QUADRILLE_DEBUG=1");
        return true;
    }

    let mode = match key {
        gdk::Key::_2 | gdk::Key::KP_2 => DealMode::PreSolved,
        gdk::Key::_3 | gdk::Key::KP_3 | gdk::Key::F9 => DealMode::OneMoveFromSolved,
        _ => DealMode::Normal,
    };
    debug_force_deal(state, mode)
}

fn debug_force_deal(state: &Rc<RefCell<AppState>>, mode: DealMode) -> bool {
    state.borrow_mut().deal_mode = mode;
    restart_game(state);
    let layout: Vec<String> = {
        let st = state.borrow();
        st.session.grid().cards().iter().map(|c| c.token()).collect()
    };
    eprintln!("[DEBUG][{}] Board redealt: {}", mode.name(), layout.join(" "));
    show_debug_banner(state, &format!("DEBUG | {} deal", mode.name()));
    true
}

fn show_debug_banner(state: &Rc<RefCell<AppState>>, message: &str) {
    let message = message.to_string();
    let game_id = {
        let st = state.borrow();
        if let Some(subtitle) = &st.title_subtitle {
            subtitle.set_text(&message);
        }
        st.game_id
    };
    let state_weak = Rc::downgrade(state);
    glib::timeout_add_local_once(std::time::Duration::from_millis(1200), move || {
        if let Some(state) = state_weak.upgrade() {
            let st = state.borrow();
            if st.game_id == game_id {
                update_subtitle(&st);
            }
        }
    });
}
