//! Exact category odds for a single roll of five fresh dice.

use serde::{Deserialize, Serialize};

use crate::{
    rules::{
        die::DIE_SIDES,
        scoring::{Category, NUM_DICE, RollScorer},
    },
    statistics::pmf::fair_dice_probability,
    utils::pad_cells,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryOdds {
    pub category: Category,
    /// Chance the category scores more than zero.
    pub hit_probability: f64,
    pub expected_score: f64,
}

impl CategoryOdds {
    pub fn pretty_print(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        write!(
            f,
            "{} {:>7.3}% {:>7.2}",
            pad_cells(self.category.name(), 16),
            self.hit_probability * 100.0,
            self.expected_score
        )
    }
}

/// Every unordered set of five faces, as sorted face arrays. There are 252 of them.
pub fn face_multisets() -> Vec<[u32; NUM_DICE]> {
    let mut out = Vec::new();
    let mut current = [1; NUM_DICE];
    multisets_from(0, 1, &mut current, &mut out);
    out
}

fn multisets_from(
    pos: usize,
    min_face: u32,
    current: &mut [u32; NUM_DICE],
    out: &mut Vec<[u32; NUM_DICE]>,
) {
    if pos == NUM_DICE {
        out.push(*current);
        return;
    }
    for face in min_face..=DIE_SIDES {
        current[pos] = face;
        multisets_from(pos + 1, face, current, out);
    }
}

/// Probability of rolling exactly this multiset of faces in one throw.
pub fn multiset_probability(scorer: &RollScorer) -> anyhow::Result<f64> {
    fair_dice_probability(&scorer.counts(), DIE_SIDES)
}

pub fn single_roll_odds() -> anyhow::Result<Vec<CategoryOdds>> {
    let mut odds: Vec<CategoryOdds> = Category::all()
        .into_iter()
        .map(|category| CategoryOdds {
            category,
            hit_probability: 0.0,
            expected_score: 0.0,
        })
        .collect();

    for faces in face_multisets() {
        let scorer = RollScorer::from_faces(faces)?;
        let p = multiset_probability(&scorer)?;
        for entry in &mut odds {
            let points = scorer.score(entry.category);
            if points > 0 {
                entry.hit_probability += p;
                entry.expected_score += p * points as f64;
            }
        }
    }

    Ok(odds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odds_for(odds: &[CategoryOdds], category: Category) -> CategoryOdds {
        *odds.iter().find(|o| o.category == category).unwrap()
    }

    #[test]
    fn test_face_multisets() {
        let sets = face_multisets();
        assert_eq!(sets.len(), 252);
        assert_eq!(sets[0], [1, 1, 1, 1, 1]);
        assert_eq!(sets[251], [6, 6, 6, 6, 6]);
        assert!(sets.iter().all(|s| s.windows(2).all(|w| w[0] <= w[1])));
    }

    #[test]
    fn test_multiset_probabilities_sum_to_one() -> anyhow::Result<()> {
        let mut total = 0.0;
        for faces in face_multisets() {
            total += multiset_probability(&RollScorer::from_faces(faces)?)?;
        }
        assert!((total - 1.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_single_roll_odds() -> anyhow::Result<()> {
        let odds = single_roll_odds()?;
        assert_eq!(odds.len(), Category::all().len());

        let yacht = odds_for(&odds, Category::YachtSee);
        assert!((yacht.hit_probability - 6.0 / 7776.0).abs() < 1e-12);
        assert!((yacht.expected_score - 50.0 * 6.0 / 7776.0).abs() < 1e-9);

        // 1-2-3-4-5 and 2-3-4-5-6, each in 5! orders
        let large = odds_for(&odds, Category::LargeStraight);
        assert!((large.hit_probability - 240.0 / 7776.0).abs() < 1e-12);

        let chance = odds_for(&odds, Category::Chance);
        assert!((chance.hit_probability - 1.0).abs() < 1e-9);
        assert!((chance.expected_score - 17.5).abs() < 1e-9);

        let aces = odds_for(&odds, Category::Aces);
        assert!((aces.expected_score - 5.0 / 6.0).abs() < 1e-9);

        // four or five of a kind: 6 * 5 * 5 + 6 = 156 ordered rolls
        let quads = odds_for(&odds, Category::FourOfAKind);
        assert!((quads.hit_probability - 156.0 / 7776.0).abs() < 1e-12);
        Ok(())
    }
}
