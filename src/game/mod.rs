//! The interaction/validation engine: cards, deals, grid state, gesture
//! classification, and the game session state machine. GTK-free so the
//! whole thing is testable headless; `crate::ui` adapts it to widgets.

pub mod card;
pub mod deck;
pub mod gesture;
pub mod grid;
pub mod session;
