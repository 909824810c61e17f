use super::card::Card;
use super::deck::DECK_SIZE;

pub const GRID_SIDE: usize = 4;

/// The 10 slot groups that must each hold 4 distinct ranks and 4 distinct
/// suits: 4 rows, 4 columns, and both main diagonals. Row-major indexing.
pub const CONSTRAINT_GROUPS: [[usize; GRID_SIDE]; 10] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [8, 9, 10, 11],
    [12, 13, 14, 15],
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [3, 6, 9, 12],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapError {
    InvalidSlot,
}

/// Change notification for one committed swap. Carries the tokens now held
/// at each slot so the presentation layer can animate without re-reading
/// the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapChange {
    pub slot_a: usize,
    pub slot_b: usize,
    pub card_a: Card,
    pub card_b: Card,
}

/// The 16 cell slots. Single source of truth for the arrangement; only the
/// swap and redeal paths may write it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    slots: Vec<Card>,
}

impl GridState {
    pub fn new(cards: Vec<Card>) -> Self {
        debug_assert_eq!(cards.len(), DECK_SIZE);
        GridState { slots: cards }
    }

    pub fn card_at(&self, slot: usize) -> Option<Card> {
        self.slots.get(slot).copied()
    }

    pub fn cards(&self) -> &[Card] {
        &self.slots
    }

    /// Exchanges the cards held by two distinct slots. Any two distinct
    /// in-range slots are legal; there is no illegal arrangement, only
    /// solved or unsolved.
    pub fn swap(&mut self, slot_a: usize, slot_b: usize) -> Result<SwapChange, SwapError> {
        if slot_a >= self.slots.len() || slot_b >= self.slots.len() || slot_a == slot_b {
            return Err(SwapError::InvalidSlot);
        }
        self.slots.swap(slot_a, slot_b);
        Ok(SwapChange {
            slot_a,
            slot_b,
            card_a: self.slots[slot_a],
            card_b: self.slots[slot_b],
        })
    }

    /// True iff every constraint group holds 4 distinct ranks and 4
    /// distinct suits. Within-group repetition is the only thing checked;
    /// the same rank+suit pattern may repeat across groups.
    pub fn is_solved(&self) -> bool {
        CONSTRAINT_GROUPS.iter().all(|group| {
            let mut seen_ranks = Vec::with_capacity(GRID_SIDE);
            let mut seen_suits = Vec::with_capacity(GRID_SIDE);
            for &slot in group {
                let card = self.slots[slot];
                if seen_ranks.contains(&card.rank) || seen_suits.contains(&card.suit) {
                    return false;
                }
                seen_ranks.push(card.rank);
                seen_suits.push(card.suit);
            }
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::deck::{DealMode, create_deck, solved_deck};

    #[test]
    fn solved_layout_validates() {
        assert!(GridState::new(solved_deck()).is_solved());
    }

    #[test]
    fn one_move_layout_fails_until_the_undo_swap() {
        let mut grid = GridState::new(create_deck(DealMode::OneMoveFromSolved));
        assert!(!grid.is_solved());
        grid.swap(0, 1).unwrap();
        assert!(grid.is_solved());
    }

    #[test]
    fn duplicate_rank_in_a_row_fails() {
        let mut deck = solved_deck();
        // Puts two kings on the top row.
        deck.swap(1, 4);
        let grid = GridState::new(deck);
        assert!(!grid.is_solved());
    }

    #[test]
    fn duplicate_suit_in_a_row_fails() {
        let mut deck = solved_deck();
        // Puts two spades on the top row.
        deck.swap(0, 6);
        let grid = GridState::new(deck);
        assert!(!grid.is_solved());
    }

    #[test]
    fn diagonal_only_violations_are_caught() {
        // Exchanging two whole rows keeps every row and column valid but
        // breaks both diagonals.
        let mut deck = solved_deck();
        for col in 0..GRID_SIDE {
            deck.swap(col, GRID_SIDE + col);
        }
        let grid = GridState::new(deck);
        for group in &CONSTRAINT_GROUPS[..8] {
            let mut seen = Vec::new();
            for &slot in group {
                let rank = grid.cards()[slot].rank;
                assert!(!seen.contains(&rank), "row/column should stay valid");
                seen.push(rank);
            }
        }
        assert!(!grid.is_solved());
    }

    #[test]
    fn swap_is_an_involution() {
        let mut grid = GridState::new(create_deck(DealMode::Normal));
        let before = grid.clone();
        grid.swap(2, 13).unwrap();
        grid.swap(2, 13).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn swap_reports_the_new_tokens() {
        let mut grid = GridState::new(solved_deck());
        let was_a = grid.card_at(0).unwrap();
        let was_b = grid.card_at(5).unwrap();
        let change = grid.swap(0, 5).unwrap();
        assert_eq!(change.slot_a, 0);
        assert_eq!(change.slot_b, 5);
        assert_eq!(change.card_a, was_b);
        assert_eq!(change.card_b, was_a);
    }

    #[test]
    fn swap_rejects_bad_slots() {
        let mut grid = GridState::new(solved_deck());
        let before = grid.clone();
        assert_eq!(grid.swap(0, 16), Err(SwapError::InvalidSlot));
        assert_eq!(grid.swap(16, 0), Err(SwapError::InvalidSlot));
        assert_eq!(grid.swap(7, 7), Err(SwapError::InvalidSlot));
        assert_eq!(grid, before);
    }
}
