use super::card::{Card, Rank, Suit};

pub const DECK_SIZE: usize = 16;

/// Fixed arrangement that satisfies every row, column, and diagonal.
const SOLVED_TOKENS: [&str; DECK_SIZE] = [
    "AD", "QS", "KH", "JC", //
    "KC", "JH", "AS", "QD", //
    "JS", "KD", "QC", "AH", //
    "QH", "AC", "JD", "KS",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DealMode {
    #[default]
    Normal,
    PreSolved,
    OneMoveFromSolved,
}

impl DealMode {
    pub fn name(self) -> &'static str {
        match self {
            DealMode::Normal => "Normal",
            DealMode::PreSolved => "Solved",
            DealMode::OneMoveFromSolved => "One move",
        }
    }
}

/// All 16 rank x suit combinations, one of each.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

pub fn solved_deck() -> Vec<Card> {
    SOLVED_TOKENS
        .iter()
        .map(|token| Card::from_token(token).expect("solved layout token"))
        .collect()
}

pub fn create_deck(mode: DealMode) -> Vec<Card> {
    match mode {
        DealMode::PreSolved => solved_deck(),
        DealMode::OneMoveFromSolved => {
            let mut deck = solved_deck();
            deck.swap(0, 1);
            deck
        }
        DealMode::Normal => {
            use rand::seq::SliceRandom;
            let mut deck = full_deck();
            let mut rng = rand::rng();
            deck.shuffle(&mut rng);
            deck
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_full_deck(deck: &[Card]) {
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<_> = deck.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn every_mode_deals_the_full_deck() {
        assert_full_deck(&create_deck(DealMode::Normal));
        assert_full_deck(&create_deck(DealMode::PreSolved));
        assert_full_deck(&create_deck(DealMode::OneMoveFromSolved));
    }

    #[test]
    fn one_move_deal_differs_from_solved_in_first_two_slots() {
        let solved = create_deck(DealMode::PreSolved);
        let near = create_deck(DealMode::OneMoveFromSolved);
        assert_eq!(near[0], solved[1]);
        assert_eq!(near[1], solved[0]);
        assert_eq!(&near[2..], &solved[2..]);
    }
}
