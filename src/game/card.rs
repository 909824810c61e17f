#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 4] = [Rank::Ace, Rank::Jack, Rank::Queen, Rank::King];

    pub fn letter(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }

    pub fn from_letter(value: char) -> Option<Self> {
        match value.to_ascii_uppercase() {
            'A' => Some(Rank::Ace),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub fn from_letter(value: char) -> Option<Self> {
        match value.to_ascii_uppercase() {
            'S' => Some(Suit::Spades),
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Suit::Spades => "\u{2660}",
            Suit::Hearts => "\u{2665}",
            Suit::Diamonds => "\u{2666}",
            Suit::Clubs => "\u{2663}",
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardParseError;

/// One playing card, encoded on the wire as a 2-character token
/// such as "AD" (Ace of Diamonds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    pub fn token(self) -> String {
        let mut token = String::with_capacity(2);
        token.push(self.rank.letter());
        token.push(self.suit.letter());
        token
    }

    pub fn from_token(token: &str) -> Result<Self, CardParseError> {
        let mut chars = token.trim().chars();
        let rank = chars
            .next()
            .and_then(Rank::from_letter)
            .ok_or(CardParseError)?;
        let suit = chars
            .next()
            .and_then(Suit::from_letter)
            .ok_or(CardParseError)?;
        if chars.next().is_some() {
            return Err(CardParseError);
        }
        Ok(Card { rank, suit })
    }
}
