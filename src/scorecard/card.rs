use super::*;
use crate::CATEGORIES;
use crate::GameError;
use crate::Points;
use crate::UPPER_BONUS_POINTS;
use crate::UPPER_BONUS_THRESHOLD;
use crate::YAHTZEE_BONUS_POINTS;
use crate::notify::*;
use crate::scoring::Category;
use colored::*;

/// One player's record for one game.
///
/// Each category is scored at most once. The upper bonus is a one-way
/// latch and the Yahtzee bonus only ever grows.
#[derive(Debug)]
pub struct ScoreCard {
    entries: [ScoreEntry; CATEGORIES],
    upper_bonus: Points,
    yahtzee_bonus: Points,
    yahtzee: bool,
    filled: usize,
    bonus_marker: usize,
    notifier: Notifier,
}

impl Default for ScoreCard {
    fn default() -> Self {
        Self {
            entries: Category::all().map(ScoreEntry::from),
            upper_bonus: 0,
            yahtzee_bonus: 0,
            yahtzee: false,
            filled: 0,
            bonus_marker: 0,
            notifier: Notifier::default(),
        }
    }
}

impl ScoreCard {
    /// Record `value` in `category`. A category already taken is left alone.
    pub fn set_score(&mut self, category: Category, value: Points) -> Result<(), GameError> {
        let entry = &mut self.entries[category.index()];
        if entry.is_taken() {
            return Err(GameError::DuplicateScore(category));
        }
        entry.take(value);
        self.filled += 1;
        if category == Category::Yahtzee && value > 0 {
            self.yahtzee = true;
        }
        if self.upper_bonus == 0 && self.upper_total() > UPPER_BONUS_THRESHOLD {
            self.upper_bonus = UPPER_BONUS_POINTS;
        }
        self.notifier.publish();
        Ok(())
    }

    /// Grant the Yahtzee bonus if Yahtzee has been scored and no bonus was
    /// granted since the last category was filled. Safe to call on every
    /// five-of-a-kind roll.
    pub fn take_yahtzee_bonus(&mut self) -> bool {
        if !self.yahtzee || self.bonus_marker == self.filled {
            return false;
        }
        self.yahtzee_bonus += YAHTZEE_BONUS_POINTS;
        self.bonus_marker = self.filled;
        self.notifier.publish();
        true
    }
}

impl ScoreCard {
    pub fn entry(&self, category: Category) -> &ScoreEntry {
        &self.entries[category.index()]
    }
    pub fn entries(&self) -> &[ScoreEntry; CATEGORIES] {
        &self.entries
    }
    pub fn is_taken(&self, category: Category) -> bool {
        self.entry(category).is_taken()
    }
    pub fn open_categories(&self) -> Vec<Category> {
        self.entries
            .iter()
            .filter(|e| !e.is_taken())
            .map(ScoreEntry::category)
            .collect()
    }
    pub fn filled(&self) -> usize {
        self.filled
    }
    pub fn is_full(&self) -> bool {
        self.filled == CATEGORIES
    }
    pub fn has_yahtzee(&self) -> bool {
        self.yahtzee
    }
    pub fn upper_total(&self) -> Points {
        self.section(true)
    }
    pub fn lower_total(&self) -> Points {
        self.section(false)
    }
    pub fn upper_bonus(&self) -> Points {
        self.upper_bonus
    }
    pub fn yahtzee_bonus(&self) -> Points {
        self.yahtzee_bonus
    }
    pub fn final_score(&self) -> Points {
        self.upper_total() + self.upper_bonus + self.lower_total() + self.yahtzee_bonus
    }
    pub fn subscribe(&self) -> Subscription {
        self.notifier.subscribe()
    }
    fn section(&self, upper: bool) -> Points {
        self.entries
            .iter()
            .filter(|e| e.category().is_upper() == upper)
            .map(ScoreEntry::score)
            .sum()
    }
}

impl std::fmt::Display for ScoreCard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for entry in self.entries.iter() {
            match entry.is_taken() {
                true => writeln!(f, "{:<16}{:>4}", entry.category(), entry.score())?,
                false => writeln!(f, "{}", format!("{:<16}{:>4}", entry.category(), "-").dimmed())?,
            }
        }
        if self.upper_bonus > 0 {
            writeln!(f, "{}", format!("{:<16}{:>4}", "Upper Bonus", self.upper_bonus).cyan())?;
        }
        if self.yahtzee_bonus > 0 {
            writeln!(f, "{}", format!("{:<16}{:>4}", "Yahtzee Bonus", self.yahtzee_bonus).magenta())?;
        }
        write!(f, "{}", format!("{:<16}{:>4}", "Total", self.final_score()).bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(card: &mut ScoreCard, scores: &[(Category, Points)]) {
        for &(category, points) in scores {
            card.set_score(category, points).unwrap();
        }
    }

    #[test]
    fn fresh_card_is_empty() {
        let card = ScoreCard::default();
        assert!(card.filled() == 0);
        assert!(card.final_score() == 0);
        assert!(card.open_categories() == Category::all().to_vec());
        assert!(card.entries().iter().all(|e| !e.is_taken() && e.score() == 0));
    }

    #[test]
    fn duplicate_leaves_card_untouched() {
        let mut card = ScoreCard::default();
        card.set_score(Category::Chance, 20).unwrap();
        assert!(card.set_score(Category::Chance, 30) == Err(GameError::DuplicateScore(Category::Chance)));
        assert!(card.entry(Category::Chance).score() == 20);
        assert!(card.filled() == 1);
    }

    #[test]
    fn zero_score_still_takes_category() {
        let mut card = ScoreCard::default();
        card.set_score(Category::LargeStraight, 0).unwrap();
        assert!(card.is_taken(Category::LargeStraight));
        assert!(card.filled() == 1);
    }

    #[test]
    fn upper_bonus_boundary() {
        let mut card = ScoreCard::default();
        fill(
            &mut card,
            &[
                (Category::Ones, 3),
                (Category::Twos, 6),
                (Category::Threes, 9),
                (Category::Fours, 12),
                (Category::Fives, 15),
                (Category::Sixes, 17),
            ],
        );
        assert!(card.upper_total() == 62);
        assert!(card.upper_bonus() == 0);

        let mut card = ScoreCard::default();
        fill(
            &mut card,
            &[
                (Category::Ones, 3),
                (Category::Twos, 6),
                (Category::Threes, 9),
                (Category::Fours, 12),
                (Category::Fives, 15),
                (Category::Sixes, 18),
            ],
        );
        assert!(card.upper_total() == 63);
        assert!(card.upper_bonus() == 35);
    }

    #[test]
    fn upper_bonus_latches_once() {
        let mut card = ScoreCard::default();
        fill(&mut card, &[(Category::Sixes, 30), (Category::Fives, 25), (Category::Fours, 20)]);
        assert!(card.upper_bonus() == 35);
        fill(&mut card, &[(Category::Threes, 15)]);
        assert!(card.upper_bonus() == 35);
    }

    #[test]
    fn lower_scores_do_not_count_toward_upper() {
        let mut card = ScoreCard::default();
        fill(&mut card, &[(Category::Chance, 30), (Category::Yahtzee, 50)]);
        assert!(card.upper_total() == 0);
        assert!(card.upper_bonus() == 0);
        assert!(card.lower_total() == 80);
    }

    #[test]
    fn final_sums_all_parts() {
        let mut card = ScoreCard::default();
        fill(
            &mut card,
            &[
                (Category::Sixes, 30),
                (Category::Fives, 25),
                (Category::Fours, 20),
                (Category::Yahtzee, 50),
            ],
        );
        assert!(card.take_yahtzee_bonus());
        assert!(card.final_score() == 75 + 35 + 50 + 100);
    }

    #[test]
    fn yahtzee_bonus_requires_scored_yahtzee() {
        let mut card = ScoreCard::default();
        assert!(!card.take_yahtzee_bonus());
        card.set_score(Category::Yahtzee, 0).unwrap();
        assert!(!card.take_yahtzee_bonus());
        assert!(card.yahtzee_bonus() == 0);
    }

    #[test]
    fn yahtzee_bonus_once_per_fill() {
        let mut card = ScoreCard::default();
        card.set_score(Category::Yahtzee, 50).unwrap();
        assert!(card.take_yahtzee_bonus());
        assert!(!card.take_yahtzee_bonus());
        assert!(card.yahtzee_bonus() == 100);
        card.set_score(Category::Chance, 30).unwrap();
        assert!(card.take_yahtzee_bonus());
        assert!(card.yahtzee_bonus() == 200);
    }

    #[test]
    fn full_after_thirteen() {
        let mut card = ScoreCard::default();
        for category in Category::all() {
            assert!(!card.is_full());
            card.set_score(category, 0).unwrap();
        }
        assert!(card.is_full());
        assert!(card.open_categories().is_empty());
    }

    #[test]
    fn scoring_publishes() {
        let mut card = ScoreCard::default();
        let subscription = card.subscribe();
        card.set_score(Category::Ones, 2).unwrap();
        assert!(subscription.pending());
    }
}
