use std::cell::RefCell;
use std::rc::Rc;
use gtk4 as gtk;
use gtk4::prelude::*;
use gtk4::pango;
use super::state::AppState;
use super::app::{apply_session_events, clear_drag_follow, handle_gesture_cancel};
use crate::game::gesture::DRAG_THRESHOLD;

pub const CONTENT_MARGIN: i32 = 12;
pub const CARD_GAP: i32 = 6;
pub const GRID_SIDE: i32 = 4;

pub fn build_board_grid(state: &Rc<RefCell<AppState>>) -> gtk::Grid {
    let grid = gtk::Grid::new();
    grid.add_css_class("quadrille-board");
    grid.set_row_spacing(CARD_GAP as u32);
    grid.set_column_spacing(CARD_GAP as u32);
    grid.set_halign(gtk::Align::Fill);
    grid.set_valign(gtk::Align::Fill);
    grid.set_hexpand(true);
    grid.set_vexpand(true);

    let css_provider = {
        let st = state.borrow();
        st.dynamic_css_provider.clone()
    };

    let update_styles = move |grid: &gtk::Grid| {
        let width = grid.width();
        let height = grid.height();
        if width > 0 && height > 0 {
            let cell_width = (width - (GRID_SIDE - 1) * CARD_GAP) / GRID_SIDE;
            let cell_height = (height - (GRID_SIDE - 1) * CARD_GAP) / GRID_SIDE;
            let min_dim = cell_width.min(cell_height);

            // Dynamic radii based on available cell size.
            let card_radius = (min_dim as f64 * 0.12) as i32;

            if let Some(provider) = &css_provider {
                provider.load_from_data(&format!(
                    ".quadrille-card {{ border-radius: {card_radius}px; }}",
                    card_radius = card_radius
                ));
            }
        }
    };

    let update_styles_clone = update_styles.clone();
    grid.connect_closure(
        "notify::width",
        false,
        glib::closure_local!(move |grid: gtk::Grid, _: glib::ParamSpec| {
            update_styles_clone(&grid);
        }),
    );
    grid.connect_closure(
        "notify::height",
        false,
        glib::closure_local!(move |grid: gtk::Grid, _: glib::ParamSpec| {
            update_styles(&grid);
        }),
    );

    let mut cards = Vec::new();

    for i in 0..(GRID_SIDE * GRID_SIDE) {
        let index = i as usize;
        let aspect_frame = gtk::AspectFrame::builder()
            .ratio(0.75)
            .obey_child(false)
            .halign(gtk::Align::Fill)
            .valign(gtk::Align::Fill)
            .hexpand(true)
            .vexpand(true)
            .build();

        let button = gtk::Button::builder()
            .css_classes(vec!["quadrille-card"])
            .build();
        button.set_hexpand(true);
        button.set_vexpand(true);

        let drawing_area = gtk::DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .build();
        drawing_area.add_css_class("quadrille-card-face");

        let state_draw = state.clone();
        drawing_area.set_draw_func(move |area, cr, width, height| {
            let st = state_draw.borrow();
            let Some(card) = st.session.grid().card_at(index) else {
                return;
            };
            let text = format!("{}{}", card.rank.letter(), card.suit.glyph());

            let min_dim = width.min(height) as f64;
            let font_size = min_dim * 0.34;

            cr.set_antialias(gtk::cairo::Antialias::Best);

            let layout = pangocairo::functions::create_layout(cr);
            let mut font_desc = pango::FontDescription::new();
            font_desc.set_family("Cantarell, Noto Sans, sans");
            font_desc.set_weight(pango::Weight::Bold);
            font_desc.set_size((font_size * pango::SCALE as f64) as i32);
            layout.set_font_description(Some(&font_desc));
            layout.set_text(&text);

            if card.suit.is_red() {
                cr.set_source_rgba(0.75, 0.11, 0.16, 1.0);
            } else {
                let fg = area.style_context().color();
                cr.set_source_rgba(
                    fg.red() as f64,
                    fg.green() as f64,
                    fg.blue() as f64,
                    fg.alpha() as f64,
                );
            }

            let (text_width, text_height) = layout.pixel_size();
            cr.move_to(
                (width as f64 - text_width as f64) / 2.0,
                (height as f64 - text_height as f64) / 2.0,
            );

            pangocairo::functions::show_layout(cr, &layout);
        });

        button.set_child(Some(&drawing_area));
        attach_card_gesture(state, &grid, &button, index);

        aspect_frame.set_child(Some(&button));

        let x = i % GRID_SIDE;
        let y = i / GRID_SIDE;
        grid.attach(&aspect_frame, x, y, 1, 1);
        cards.push(button);
    }

    state.borrow_mut().grid_cards = cards;

    grid
}

/// One drag controller per cell is the input adapter: GTK routes mouse,
/// touchscreen, and pen sequences through the same controller, so the
/// engine sees a single unified press/move/release stream. Claiming the
/// sequence on press keeps later events attributed to this session.
fn attach_card_gesture(
    state: &Rc<RefCell<AppState>>,
    grid: &gtk::Grid,
    button: &gtk::Button,
    index: usize,
) {
    let gesture = gtk::GestureDrag::new();
    gesture.set_propagation_phase(gtk::PropagationPhase::Capture);

    gesture.connect_drag_begin({
        let state = state.clone();
        let button = button.clone();
        move |gesture, x, y| {
            let accepted = state.borrow_mut().session.begin_gesture(index, x, y);
            if !accepted {
                gesture.set_state(gtk::EventSequenceState::Denied);
                return;
            }
            gesture.set_state(gtk::EventSequenceState::Claimed);
            button.add_css_class("dragging");
            // The claimed sequence keeps feeding this controller, so the
            // card can stop being a pick target: the release-point pick
            // must see the cell underneath the floating card.
            button.set_can_target(false);
        }
    });

    gesture.connect_drag_update({
        let state = state.clone();
        let button = button.clone();
        move |gesture, dx, dy| {
            let Some((start_x, start_y)) = gesture.start_point() else {
                return;
            };
            let (displacement, events) = {
                let mut st = state.borrow_mut();
                st.session.gesture_motion(start_x + dx, start_y + dy)
            };
            // Live feedback only; classification waits for the release.
            // The follow rule rides the `dragging` class, so it only ever
            // reaches the one card with an active session.
            {
                let st = state.borrow();
                if let Some(provider) = &st.drag_css_provider {
                    provider.load_from_data(&drag_follow_css(dx, dy));
                }
            }
            if displacement >= DRAG_THRESHOLD {
                button.add_css_class("drag-active");
            } else {
                button.remove_css_class("drag-active");
            }
            apply_session_events(&state, events);
        }
    });

    gesture.connect_drag_end({
        let state = state.clone();
        let grid = grid.clone();
        let button = button.clone();
        move |gesture, dx, dy| {
            button.remove_css_class("dragging");
            button.remove_css_class("drag-active");
            clear_drag_follow(&state.borrow());
            let Some((start_x, start_y)) = gesture.start_point() else {
                button.set_can_target(true);
                state.borrow_mut().session.cancel_gesture();
                return;
            };
            let release_x = start_x + dx;
            let release_y = start_y + dy;
            let drop_target = {
                let st = state.borrow();
                resolve_drop_target(&st, &grid, &button, release_x, release_y)
            };
            button.set_can_target(true);
            let events = {
                let mut st = state.borrow_mut();
                st.session.end_gesture(release_x, release_y, drop_target)
            };
            apply_session_events(&state, events);
        }
    });

    gesture.connect_cancel({
        let state = state.clone();
        let button = button.clone();
        move |_, _| {
            button.remove_css_class("dragging");
            button.remove_css_class("drag-active");
            button.set_can_target(true);
            clear_drag_follow(&state.borrow());
            handle_gesture_cancel(&state);
        }
    });

    button.add_controller(gesture);
}

/// Builds the transform rule that keeps the pressed card under the
/// pointer. Scoped to `.dragging` and routed through its own provider so
/// reloading it never clobbers the resize-driven radius rule.
fn drag_follow_css(dx: f64, dy: f64) -> String {
    format!(
        ".quadrille-card.dragging {{ transform: translate({dx:.1}px, {dy:.1}px) scale(1.1); }}"
    )
}

/// Maps a release point (in the origin cell's coordinates) to the slot
/// under it, if any. The origin slot itself never counts as a target.
fn resolve_drop_target(
    st: &AppState,
    grid: &gtk::Grid,
    origin: &gtk::Button,
    x: f64,
    y: f64,
) -> Option<usize> {
    let point = origin.compute_point(grid, &gtk::graphene::Point::new(x as f32, y as f32))?;
    let picked = grid.pick(point.x() as f64, point.y() as f64, gtk::PickFlags::DEFAULT)?;
    st.grid_cards.iter().position(|card| {
        picked == *card.upcast_ref::<gtk::Widget>() || picked.is_ancestor(card)
    })
}

#[cfg(test)]
mod tests {
    use super::drag_follow_css;

    #[test]
    fn drag_follow_rule_tracks_the_pointer_offset() {
        let rule = drag_follow_css(14.0, -3.5);
        assert_eq!(
            rule,
            ".quadrille-card.dragging { transform: translate(14.0px, -3.5px) scale(1.1); }"
        );
    }
}
