use crate::Points;
use crate::scoring::Category;

/// One line of a scorecard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ScoreEntry {
    category: Category,
    score: Points,
    taken: bool,
}

impl From<Category> for ScoreEntry {
    fn from(category: Category) -> Self {
        Self {
            category,
            score: 0,
            taken: false,
        }
    }
}

impl ScoreEntry {
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn score(&self) -> Points {
        self.score
    }
    pub fn is_taken(&self) -> bool {
        self.taken
    }
    pub(crate) fn take(&mut self, score: Points) {
        self.score = score;
        self.taken = true;
    }
}
