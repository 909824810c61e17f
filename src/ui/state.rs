use gtk4 as gtk;

use crate::game::deck::DealMode;
use crate::game::session::GameSession;

pub struct AppState {
    pub title_subtitle: Option<gtk::Label>,
    pub check_button: Option<gtk::Button>,
    pub message_label: Option<gtk::Label>,
    pub board_container: Option<gtk::Box>,
    pub grid_cards: Vec<gtk::Button>,
    pub dynamic_css_provider: Option<gtk::CssProvider>,
    pub drag_css_provider: Option<gtk::CssProvider>,

    // Game state
    pub session: GameSession,
    pub deal_mode: DealMode,
    pub game_id: u64,
}

impl AppState {
    pub fn new(deal_mode: DealMode) -> Self {
        AppState {
            title_subtitle: None,
            check_button: None,
            message_label: None,
            board_container: None,
            grid_cards: Vec::new(),
            dynamic_css_provider: None,
            drag_css_provider: None,
            session: GameSession::new(deal_mode),
            deal_mode,
            game_id: 0,
        }
    }

    /// Replaces the session wholesale with a fresh deal. Bumping `game_id`
    /// invalidates every animation timeout still in flight.
    pub fn redeal(&mut self) {
        self.game_id = self.game_id.wrapping_add(1);
        self.session.reset(self.deal_mode);
    }
}
