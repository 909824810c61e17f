use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use libadwaita as adw;
use adw::prelude::*;
use gio::SimpleAction;

use super::board::{CONTENT_MARGIN, build_board_grid};
use super::debug_tools;
use super::dialogs::{show_about_dialog, show_instructions_dialog};
use super::hud::{Status, refresh_check_button, set_status, update_subtitle};
use super::state::AppState;
use crate::game::session::{Phase, SessionEvent};

const SWAP_FLASH_MS: u64 = 220;

pub(super) fn redraw_card_child(button: &gtk::Button) {
    if let Some(child) = button.child() {
        child.queue_draw();
    }
}

/// Applies engine change notifications to the widgets. The grid and phase
/// are already committed; everything here is fire-and-forget presentation.
pub(super) fn apply_session_events(state: &Rc<RefCell<AppState>>, events: Vec<SessionEvent>) {
    for event in events {
        match event {
            SessionEvent::SelectionSet(slot) => {
                let st = state.borrow();
                if let Some(button) = st.grid_cards.get(slot) {
                    button.add_css_class("selected");
                }
            }
            SessionEvent::SelectionCleared(slot) => {
                let st = state.borrow();
                if let Some(button) = st.grid_cards.get(slot) {
                    button.remove_css_class("selected");
                }
            }
            SessionEvent::Swapped(change) => {
                animate_swap(state, change.slot_a, change.slot_b);
            }
            SessionEvent::Solved => {
                show_victory(state);
            }
        }
    }
}

pub(super) fn handle_gesture_cancel(state: &Rc<RefCell<AppState>>) {
    state.borrow_mut().session.cancel_gesture();
}

/// Drops the drag-follow transform rule so the card snaps home.
pub(super) fn clear_drag_follow(st: &AppState) {
    if let Some(provider) = &st.drag_css_provider {
        provider.load_from_data("");
    }
}

fn animate_swap(state: &Rc<RefCell<AppState>>, slot_a: usize, slot_b: usize) {
    let game_id = {
        let st = state.borrow();
        for &slot in &[slot_a, slot_b] {
            if let Some(button) = st.grid_cards.get(slot) {
                button.remove_css_class("swap-flash");
                button.add_css_class("swap-flash");
                redraw_card_child(button);
            }
        }
        st.game_id
    };

    let state_end = state.clone();
    glib::timeout_add_local(std::time::Duration::from_millis(SWAP_FLASH_MS), move || {
        let st = state_end.borrow();
        if st.game_id != game_id {
            return glib::ControlFlow::Break;
        }
        for &slot in &[slot_a, slot_b] {
            if let Some(button) = st.grid_cards.get(slot) {
                button.remove_css_class("swap-flash");
            }
        }
        glib::ControlFlow::Break
    });
}

fn show_victory(state: &Rc<RefCell<AppState>>) {
    let st = state.borrow();
    set_status(&st, Status::Solved);
    refresh_check_button(&st);
    if let Some(container) = &st.board_container {
        container.add_css_class("victory");
    }
    // The engine already refuses input while completed; dropping pointer
    // targeting on the cells keeps hover feedback honest too.
    for button in &st.grid_cards {
        button.set_can_target(false);
        button.remove_css_class("selected");
        button.remove_css_class("dragging");
        button.remove_css_class("drag-active");
    }
    clear_drag_follow(&st);
}

pub(super) fn restart_game(state: &Rc<RefCell<AppState>>) {
    {
        let mut st = state.borrow_mut();
        st.redeal();
        if let Some(container) = &st.board_container {
            container.remove_css_class("victory");
        }
        for button in &st.grid_cards {
            button.set_can_target(true);
            button.remove_css_class("selected");
            button.remove_css_class("dragging");
            button.remove_css_class("drag-active");
            button.remove_css_class("swap-flash");
            redraw_card_child(button);
        }
    }
    let st = state.borrow();
    clear_drag_follow(&st);
    set_status(&st, Status::None);
    refresh_check_button(&st);
    update_subtitle(&st);
}

fn handle_check_clicked(state: &Rc<RefCell<AppState>>) {
    let phase = state.borrow().session.phase();
    if phase == Phase::Completed {
        restart_game(state);
        return;
    }
    // Manual validate: reports without mutating.
    let st = state.borrow();
    if st.session.is_solved() {
        set_status(&st, Status::Solved);
    } else {
        set_status(&st, Status::Incorrect);
    }
}

pub fn run() {
    glib::set_prgname(Some("io.github.quadrille.Quadrille"));
    let app = adw::Application::builder()
        .application_id("io.github.quadrille.Quadrille")
        .build();

    app.connect_activate(move |app| {
        load_css();

        let state = Rc::new(RefCell::new(AppState::new(
            debug_tools::startup_deal_mode(),
        )));

        let instructions_action = SimpleAction::new("instructions", None);
        instructions_action.connect_activate({
            let app = app.clone();
            move |_, _| {
                show_instructions_dialog(&app);
            }
        });
        app.add_action(&instructions_action);

        let about_action = SimpleAction::new("about", None);
        about_action.connect_activate({
            let app = app.clone();
            move |_, _| {
                show_about_dialog(&app);
            }
        });
        app.add_action(&about_action);

        let quit_action = SimpleAction::new("quit", None);
        quit_action.connect_activate({
            let app = app.clone();
            move |_, _| app.quit()
        });
        app.add_action(&quit_action);

        let dynamic_css_provider = gtk::CssProvider::new();
        let drag_css_provider = gtk::CssProvider::new();
        if let Some(display) = gtk::gdk::Display::default() {
            gtk::style_context_add_provider_for_display(
                &display,
                &dynamic_css_provider,
                gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
            gtk::style_context_add_provider_for_display(
                &display,
                &drag_css_provider,
                gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }

        let title_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
        title_box.set_valign(gtk::Align::Center);
        title_box.set_halign(gtk::Align::Center);
        title_box.set_hexpand(true);

        let title_main = gtk::Label::builder()
            .label("Quadrille")
            .halign(gtk::Align::Center)
            .css_classes(vec!["game-title-main"])
            .build();

        let title_subtitle = gtk::Label::builder()
            .label("")
            .halign(gtk::Align::Center)
            .css_classes(vec!["game-title-subtitle", "caption"])
            .build();

        title_box.append(&title_main);
        title_box.append(&title_subtitle);

        let header = adw::HeaderBar::builder().title_widget(&title_box).build();
        header.add_css_class("app-header");
        header.add_css_class("flat");

        let menu_model = gio::Menu::new();
        menu_model.append(Some("Instructions"), Some("app.instructions"));
        menu_model.append(Some("About Quadrille"), Some("app.about"));
        menu_model.append(Some("Quit"), Some("app.quit"));
        let menu_button = gtk::MenuButton::builder()
            .icon_name("open-menu-symbolic")
            .menu_model(&menu_model)
            .build();

        let restart_button = gtk::Button::builder()
            .icon_name("view-refresh-symbolic")
            .build();
        restart_button.set_tooltip_text(Some("New Deal"));
        restart_button.connect_clicked({
            let state = state.clone();
            move |_| {
                restart_game(&state);
            }
        });
        let end_box = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        end_box.append(&restart_button);
        end_box.append(&menu_button);
        header.pack_end(&end_box);

        let game_view = build_game_view(&state);

        let toolbar = adw::ToolbarView::new();
        toolbar.set_hexpand(true);
        toolbar.set_vexpand(true);
        toolbar.add_top_bar(&header);
        toolbar.set_content(Some(&game_view));

        let win = adw::ApplicationWindow::builder()
            .application(app)
            .title("Quadrille")
            .icon_name("io.github.quadrille.quadrille")
            .default_width(560)
            .default_height(720)
            .content(&toolbar)
            .build();
        win.set_size_request(360, 480);
        win.add_css_class("app-window");

        {
            let mut st = state.borrow_mut();
            st.title_subtitle = Some(title_subtitle);
            st.dynamic_css_provider = Some(dynamic_css_provider);
            st.drag_css_provider = Some(drag_css_provider);
        }

        let global_key = gtk::EventControllerKey::new();
        global_key.set_propagation_phase(gtk::PropagationPhase::Capture);
        global_key.connect_key_pressed({
            let state = state.clone();
            move |_, key, _, mods| {
                if debug_tools::handle_debug_shortcut(&state, key, mods) {
                    return gtk::glib::Propagation::Stop;
                }
                gtk::glib::Propagation::Proceed
            }
        });
        win.add_controller(global_key);

        {
            let st = state.borrow();
            set_status(&st, Status::None);
            refresh_check_button(&st);
            update_subtitle(&st);
        }
        win.present();
    });

    app.run();
}

fn load_css() {
    let Some(display) = gtk::gdk::Display::default() else {
        return;
    };

    let provider = gtk::CssProvider::new();
    provider.load_from_data(include_str!("../../data/style.css"));
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

fn build_game_view(state: &Rc<RefCell<AppState>>) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, CONTENT_MARGIN);
    root.set_hexpand(true);
    root.set_vexpand(true);
    root.set_margin_top(CONTENT_MARGIN);
    root.set_margin_bottom(CONTENT_MARGIN);
    root.set_margin_start(CONTENT_MARGIN);
    root.set_margin_end(CONTENT_MARGIN);

    let board_container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    board_container.set_hexpand(true);
    board_container.set_vexpand(true);
    board_container.add_css_class("quadrille-board-container");

    let grid = build_board_grid(state);
    let grid_frame = gtk::AspectFrame::new(0.5, 0.5, 0.75, false);
    grid_frame.set_halign(gtk::Align::Fill);
    grid_frame.set_valign(gtk::Align::Fill);
    grid_frame.set_hexpand(true);
    grid_frame.set_vexpand(true);
    grid_frame.set_child(Some(&grid));
    board_container.append(&grid_frame);
    root.append(&board_container);

    let message_label = gtk::Label::builder()
        .label("")
        .halign(gtk::Align::Center)
        .css_classes(vec!["quadrille-message"])
        .build();
    root.append(&message_label);

    let check_button = gtk::Button::builder()
        .label("Check")
        .halign(gtk::Align::Center)
        .css_classes(vec!["quadrille-check", "pill", "suggested-action"])
        .build();
    check_button.connect_clicked({
        let state = state.clone();
        move |_| {
            handle_check_clicked(&state);
        }
    });
    root.append(&check_button);

    {
        let mut st = state.borrow_mut();
        st.board_container = Some(board_container);
        st.message_label = Some(message_label);
        st.check_button = Some(check_button);
    }

    root
}
