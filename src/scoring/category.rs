use crate::CATEGORIES;
use crate::Face;
use crate::GameError;

/// The thirteen scoring categories, in card order.
/// Declaration order breaks ties whenever an agent picks a best category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Upper,
    Lower,
}

impl Category {
    pub const fn all() -> [Self; CATEGORIES] {
        [
            Self::Ones,
            Self::Twos,
            Self::Threes,
            Self::Fours,
            Self::Fives,
            Self::Sixes,
            Self::ThreeOfAKind,
            Self::FourOfAKind,
            Self::FullHouse,
            Self::SmallStraight,
            Self::LargeStraight,
            Self::Yahtzee,
            Self::Chance,
        ]
    }
    pub const fn upper() -> [Self; 6] {
        [
            Self::Ones,
            Self::Twos,
            Self::Threes,
            Self::Fours,
            Self::Fives,
            Self::Sixes,
        ]
    }
    pub const fn lower() -> [Self; 7] {
        [
            Self::ThreeOfAKind,
            Self::FourOfAKind,
            Self::FullHouse,
            Self::SmallStraight,
            Self::LargeStraight,
            Self::Yahtzee,
            Self::Chance,
        ]
    }
}

impl Category {
    /// Position on the card.
    pub fn index(&self) -> usize {
        *self as usize
    }
    pub fn section(&self) -> Section {
        match self.face() {
            Some(_) => Section::Upper,
            None => Section::Lower,
        }
    }
    pub fn is_upper(&self) -> bool {
        self.section() == Section::Upper
    }
    /// The face counted by an upper category.
    pub fn face(&self) -> Option<Face> {
        match self {
            Self::Ones => Some(1),
            Self::Twos => Some(2),
            Self::Threes => Some(3),
            Self::Fours => Some(4),
            Self::Fives => Some(5),
            Self::Sixes => Some(6),
            _ => None,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ones => "Ones",
            Self::Twos => "Twos",
            Self::Threes => "Threes",
            Self::Fours => "Fours",
            Self::Fives => "Fives",
            Self::Sixes => "Sixes",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::FourOfAKind => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::SmallStraight => "Small Straight",
            Self::LargeStraight => "Large Straight",
            Self::Yahtzee => "Yahtzee",
            Self::Chance => "Chance",
        }
    }
}

impl TryFrom<usize> for Category {
    type Error = GameError;
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::all()
            .get(index)
            .copied()
            .ok_or_else(|| GameError::InvalidCategory(index.to_string()))
    }
}

/// Accepts labels in any case with or without separators, plus short forms.
impl std::str::FromStr for Category {
    type Err = GameError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "ones" | "1s" => Ok(Self::Ones),
            "twos" | "2s" => Ok(Self::Twos),
            "threes" | "3s" => Ok(Self::Threes),
            "fours" | "4s" => Ok(Self::Fours),
            "fives" | "5s" => Ok(Self::Fives),
            "sixes" | "6s" => Ok(Self::Sixes),
            "threeofakind" | "3k" => Ok(Self::ThreeOfAKind),
            "fourofakind" | "4k" => Ok(Self::FourOfAKind),
            "fullhouse" | "fh" => Ok(Self::FullHouse),
            "smallstraight" | "ss" => Ok(Self::SmallStraight),
            "largestraight" | "ls" => Ok(Self::LargeStraight),
            "yahtzee" => Ok(Self::Yahtzee),
            "chance" => Ok(Self::Chance),
            _ => Err(GameError::InvalidCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_partition_all() {
        assert!(Category::upper().iter().all(Category::is_upper));
        assert!(Category::lower().iter().all(|c| !c.is_upper()));
        assert!(Category::upper().len() + Category::lower().len() == CATEGORIES);
    }

    #[test]
    fn index_follows_declaration() {
        for (i, category) in Category::all().into_iter().enumerate() {
            assert!(category.index() == i);
            assert!(Category::try_from(i) == Ok(category));
        }
        assert!(Category::try_from(13).is_err());
    }

    #[test]
    fn parses_labels_and_short_forms() {
        for category in Category::all() {
            assert!(category.label().parse::<Category>() == Ok(category));
        }
        assert!("full-house".parse::<Category>() == Ok(Category::FullHouse));
        assert!("3K".parse::<Category>() == Ok(Category::ThreeOfAKind));
        assert!("straight".parse::<Category>().is_err());
    }
}
