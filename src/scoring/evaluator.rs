use super::*;
use crate::CATEGORIES;
use crate::FULL_HOUSE_POINTS;
use crate::LARGE_STRAIGHT_POINTS;
use crate::Points;
use crate::SMALL_STRAIGHT_POINTS;
use crate::YAHTZEE_POINTS;
use crate::dice::Roll;

/// Score a roll in one category. Pure; never fails.
pub fn score(category: Category, roll: &Roll) -> Points {
    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => upper(category, roll),
        Category::ThreeOfAKind => kind(3, roll),
        Category::FourOfAKind => kind(4, roll),
        Category::FullHouse => full_house(roll),
        Category::SmallStraight => small_straight(roll),
        Category::LargeStraight => large_straight(roll),
        Category::Yahtzee => yahtzee(roll),
        Category::Chance => roll.sum(),
    }
}

/// Scores for every category, in card order.
pub fn scores(roll: &Roll) -> [Points; CATEGORIES] {
    Category::all().map(|category| score(category, roll))
}

/// Highest-scoring category among `among`.
/// Ties go to whichever comes first.
pub fn best<I>(roll: &Roll, among: I) -> Option<(Category, Points)>
where
    I: IntoIterator<Item = Category>,
{
    among
        .into_iter()
        .map(|category| (category, score(category, roll)))
        .fold(None, |best, (category, points)| match best {
            Some((_, top)) if top >= points => best,
            _ => Some((category, points)),
        })
}

fn upper(category: Category, roll: &Roll) -> Points {
    category
        .face()
        .map(|face| face as Points * roll.count(face) as Points)
        .unwrap_or(0)
}

fn kind(n: usize, roll: &Roll) -> Points {
    match roll.most() >= n {
        true => roll.sum(),
        false => 0,
    }
}

fn full_house(roll: &Roll) -> Points {
    let mut shape = roll
        .counts()
        .into_iter()
        .filter(|&n| n > 0)
        .collect::<Vec<_>>();
    shape.sort_unstable();
    match shape.as_slice() {
        [2, 3] => FULL_HOUSE_POINTS,
        _ => 0,
    }
}

fn yahtzee(roll: &Roll) -> Points {
    match roll.most() == 5 {
        true => YAHTZEE_POINTS,
        false => 0,
    }
}

/// Distinct faces and how many adjacent pairs among them skip a value.
fn runs(roll: &Roll) -> (Vec<u8>, usize) {
    let distinct = roll.distinct();
    let gaps = distinct.windows(2).filter(|w| w[1] - w[0] > 1).count();
    (distinct, gaps)
}

fn large_straight(roll: &Roll) -> Points {
    match runs(roll) {
        (distinct, 0) if distinct.len() == 5 => LARGE_STRAIGHT_POINTS,
        _ => 0,
    }
}

/// Four in a row, either outright or as five distinct faces whose only
/// break sits at one end.
fn small_straight(roll: &Roll) -> Points {
    match runs(roll) {
        (distinct, 0) if distinct.len() >= 4 => SMALL_STRAIGHT_POINTS,
        (distinct, 1) if distinct.len() == 5 => {
            let head = distinct[1] - distinct[0] > 1;
            let tail = distinct[4] - distinct[3] > 1;
            match head || tail {
                true => SMALL_STRAIGHT_POINTS,
                false => 0,
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll(faces: [u8; 5]) -> Roll {
        Roll::from(faces)
    }

    #[test]
    fn upper_counts_face() {
        let r = roll([3, 3, 3, 1, 6]);
        assert!(score(Category::Threes, &r) == 9);
        assert!(score(Category::Ones, &r) == 1);
        assert!(score(Category::Sixes, &r) == 6);
        assert!(score(Category::Fives, &r) == 0);
    }

    #[test]
    fn kinds_sum_all_dice() {
        let r = roll([4, 4, 4, 2, 1]);
        assert!(score(Category::ThreeOfAKind, &r) == 15);
        assert!(score(Category::FourOfAKind, &r) == 0);
        let r = roll([5, 5, 5, 5, 2]);
        assert!(score(Category::ThreeOfAKind, &r) == 22);
        assert!(score(Category::FourOfAKind, &r) == 22);
    }

    #[test]
    fn full_house_needs_three_and_two() {
        assert!(score(Category::FullHouse, &roll([2, 2, 3, 3, 3])) == 25);
        assert!(score(Category::FullHouse, &roll([6, 6, 6, 6, 6])) == 0);
        assert!(score(Category::FullHouse, &roll([2, 2, 3, 3, 4])) == 0);
    }

    #[test]
    fn yahtzee_needs_five() {
        let r = roll([6, 6, 6, 6, 6]);
        assert!(score(Category::Yahtzee, &r) == 50);
        assert!(score(Category::FourOfAKind, &r) == 30);
        assert!(score(Category::Yahtzee, &roll([6, 6, 6, 6, 5])) == 0);
    }

    #[test]
    fn chance_sums() {
        assert!(score(Category::Chance, &roll([1, 2, 3, 4, 6])) == 16);
    }

    #[test]
    fn large_straight_both_runs() {
        assert!(score(Category::LargeStraight, &roll([1, 2, 3, 4, 5])) == 40);
        assert!(score(Category::LargeStraight, &roll([6, 5, 4, 3, 2])) == 40);
        assert!(score(Category::LargeStraight, &roll([1, 2, 3, 4, 6])) == 0);
    }

    #[test]
    fn small_straight_contiguous_four() {
        assert!(score(Category::SmallStraight, &roll([1, 2, 3, 4, 4])) == 30);
        assert!(score(Category::SmallStraight, &roll([3, 4, 5, 6, 3])) == 30);
        assert!(score(Category::SmallStraight, &roll([1, 2, 3, 4, 5])) == 30);
    }

    #[test]
    fn small_straight_gap_at_end() {
        assert!(score(Category::SmallStraight, &roll([1, 2, 3, 4, 6])) == 30);
        assert!(score(Category::SmallStraight, &roll([1, 3, 4, 5, 6])) == 30);
    }

    #[test]
    fn small_straight_gap_in_middle() {
        assert!(score(Category::SmallStraight, &roll([1, 2, 4, 5, 6])) == 0);
        assert!(score(Category::SmallStraight, &roll([1, 2, 3, 5, 5])) == 0);
        assert!(score(Category::SmallStraight, &roll([1, 2, 3, 3, 5])) == 0);
    }

    #[test]
    fn reference_rolls() {
        let r = roll([6, 6, 6, 6, 6]);
        assert!(score(Category::ThreeOfAKind, &r) == 30);
        assert!(score(Category::FullHouse, &r) == 0);
        assert!(score(Category::Sixes, &r) == 30);
        let r = roll([1, 1, 2, 2, 2]);
        assert!(score(Category::FullHouse, &r) == 25);
        assert!(score(Category::ThreeOfAKind, &r) == 8);
        assert!(score(Category::FourOfAKind, &r) == 0);
        assert!(score(Category::SmallStraight, &roll([1, 1, 3, 4, 5])) == 0);
    }

    #[test]
    fn exhaustive_rules_hold() {
        for r in Roll::exhaust() {
            let s = scores(&r);
            assert!(s[Category::Chance.index()] == r.sum());
            for category in Category::upper() {
                let face = category.face().unwrap_or(0);
                assert!(s[category.index()] == face as Points * r.count(face) as Points);
            }
            assert!(s.iter().all(|&points| points >= 0));
            assert!(
                Category::upper()
                    .iter()
                    .map(|c| s[c.index()])
                    .sum::<Points>()
                    == r.sum()
            );
            if s[Category::Yahtzee.index()] > 0 {
                assert!(s[Category::FourOfAKind.index()] == r.sum());
                assert!(s[Category::FullHouse.index()] == 0);
            }
            if s[Category::FourOfAKind.index()] > 0 {
                assert!(s[Category::ThreeOfAKind.index()] > 0);
            }
            if s[Category::LargeStraight.index()] > 0 {
                assert!(s[Category::SmallStraight.index()] > 0);
            }
        }
    }

    #[test]
    fn exhaustive_straight_counts() {
        let large = Roll::exhaust()
            .filter(|r| score(Category::LargeStraight, r) > 0)
            .count();
        assert!(large == 240);
    }

    #[test]
    fn best_prefers_first_on_ties() {
        let r = roll([1, 1, 2, 2, 3]);
        assert!(best(&r, Category::all()) == Some((Category::Chance, 9)));
        assert!(best(&r, [Category::Ones, Category::Twos]) == Some((Category::Twos, 4)));
        let r = roll([2, 2, 1, 5, 6]);
        assert!(best(&r, [Category::Yahtzee, Category::FullHouse]) == Some((Category::Yahtzee, 0)));
        assert!(best(&r, Vec::new()) == None);
    }
}
