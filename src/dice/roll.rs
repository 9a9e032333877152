use crate::DICE;
use crate::FACES;
use crate::Face;
use crate::Points;
use colored::*;

/// Immutable snapshot of the five face values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Roll([Face; DICE]);

impl From<[Face; DICE]> for Roll {
    fn from(faces: [Face; DICE]) -> Self {
        debug_assert!(faces.iter().all(|f| (1..=FACES).contains(f)));
        Self(faces)
    }
}

impl From<Roll> for [Face; DICE] {
    fn from(roll: Roll) -> Self {
        roll.0
    }
}

impl Roll {
    pub fn faces(&self) -> &[Face; DICE] {
        &self.0
    }
    pub fn face(&self, index: usize) -> Option<Face> {
        self.0.get(index).copied()
    }
    pub fn sum(&self) -> Points {
        self.0.iter().map(|&f| f as Points).sum()
    }
    /// Occurrences of each face, indexed by face value (index 0 unused).
    pub fn counts(&self) -> [usize; FACES as usize + 1] {
        self.0.iter().fold([0; FACES as usize + 1], |mut counts, &f| {
            counts[f as usize] += 1;
            counts
        })
    }
    pub fn count(&self, face: Face) -> usize {
        self.0.iter().filter(|&&f| f == face).count()
    }
    /// Largest number of dice showing the same face.
    pub fn most(&self) -> usize {
        self.counts().into_iter().max().unwrap_or(0)
    }
    /// Sorted distinct face values.
    pub fn distinct(&self) -> Vec<Face> {
        let mut faces = self.0.to_vec();
        faces.sort_unstable();
        faces.dedup();
        faces
    }
    /// Every one of the 6^5 ordered rolls.
    pub fn exhaust() -> impl Iterator<Item = Self> {
        (0..(FACES as usize).pow(DICE as u32)).map(|mut n| {
            let mut faces = [1; DICE];
            for face in faces.iter_mut() {
                *face = (n % FACES as usize) as Face + 1;
                n /= FACES as usize;
            }
            Self(faces)
        })
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, face) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", face.to_string().bold())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_index_by_face() {
        let roll = Roll::from([2, 2, 5, 6, 2]);
        assert!(roll.counts() == [0, 0, 3, 0, 0, 1, 1]);
        assert!(roll.count(2) == 3);
        assert!(roll.most() == 3);
        assert!(roll.sum() == 17);
    }

    #[test]
    fn distinct_is_sorted() {
        let roll = Roll::from([6, 1, 4, 1, 3]);
        assert!(roll.distinct() == vec![1, 3, 4, 6]);
    }

    #[test]
    fn exhaust_covers_every_roll_once() {
        let rolls = Roll::exhaust().collect::<std::collections::HashSet<_>>();
        assert!(rolls.len() == 7776);
        assert!(rolls.iter().all(|r| r.faces().iter().all(|f| (1..=6).contains(f))));
    }
}
