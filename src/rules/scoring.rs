use derive_more::IntoIterator;
use serde::{Deserialize, Serialize};

use crate::{
    rules::{
        die::{DIE_SIDES, Die},
        error::DiceError,
    },
    utils::pad_cells,
};

pub const NUM_DICE: usize = 5;

pub const SCORE_FULL_HOUSE: u32 = 25;
pub const SCORE_SMALL_STRAIGHT: u32 = 30;
pub const SCORE_LARGE_STRAIGHT: u32 = 40;
pub const SCORE_YACHT_SEE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Aces,
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
    YachtSee,
    Chance,
}

impl Category {
    pub fn all() -> Vec<Category> {
        vec![
            Category::Aces,
            Category::Twos,
            Category::Threes,
            Category::Fours,
            Category::Fives,
            Category::Sixes,
            Category::ThreeOfAKind,
            Category::FourOfAKind,
            Category::FullHouse,
            Category::SmallStraight,
            Category::LargeStraight,
            Category::YachtSee,
            Category::Chance,
        ]
    }

    /// The face counted by an upper-section category.
    pub fn digit(&self) -> Option<u32> {
        match self {
            Category::Aces => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Aces => "Aces",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Small Straight",
            Category::LargeStraight => "Large Straight",
            Category::YachtSee => "YachtSee",
            Category::Chance => "Chance",
        }
    }
}

/// Immutable snapshot of five face values and everything that can be scored from them.
///
/// Faces are captured when the scorer is built, so later rolls or freezes on the
/// dice it came from have no effect on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollScorer {
    faces: [u32; NUM_DICE],
    // indexed by face, slot 0 unused
    counts: [u32; DIE_SIDES as usize + 1],
}

impl RollScorer {
    /// Reads every die up front. An unrolled die fails here, not on a later query.
    pub fn new(dice: &[Die; NUM_DICE]) -> Result<Self, DiceError> {
        let mut faces = [0; NUM_DICE];
        for (face, die) in faces.iter_mut().zip(dice) {
            *face = die.value()?;
        }
        Self::from_faces(faces)
    }

    pub fn from_faces(faces: [u32; NUM_DICE]) -> Result<Self, DiceError> {
        if let Some(&bad) = faces.iter().find(|&&f| !(1..=DIE_SIDES).contains(&f)) {
            return Err(DiceError::InvalidFace(bad));
        }
        Ok(Self::from_valid_faces(faces))
    }

    fn from_valid_faces(faces: [u32; NUM_DICE]) -> Self {
        let mut counts = [0; DIE_SIDES as usize + 1];
        for &face in &faces {
            counts[face as usize] += 1;
        }
        log::debug!("Scoring faces {:?}", faces);
        Self { faces, counts }
    }

    pub fn faces(&self) -> [u32; NUM_DICE] {
        self.faces
    }

    /// How many dice show `face`. Zero for anything outside 1..=6.
    pub fn count(&self, face: u32) -> u32 {
        if (1..=DIE_SIDES).contains(&face) {
            self.counts[face as usize]
        } else {
            0
        }
    }

    /// Face counts for 1 through 6.
    pub fn counts(&self) -> [u32; DIE_SIDES as usize] {
        let mut counts = [0; DIE_SIDES as usize];
        counts.copy_from_slice(&self.counts[1..]);
        counts
    }

    fn has(&self, face: u32) -> bool {
        self.counts[face as usize] > 0
    }

    /// True when exactly one face shows up at least `n` times.
    pub fn is_n_of_a_kind(&self, n: u32) -> bool {
        self.counts[1..].iter().filter(|&&c| c >= n).count() == 1
    }

    /// True when exactly one face shows up exactly `n` times.
    pub fn is_exact_n_of_a_kind(&self, n: u32) -> bool {
        self.counts[1..].iter().filter(|&&c| c == n).count() == 1
    }

    /// Three or more of a kind; four and five of a kind qualify too.
    pub fn is_trips(&self) -> bool {
        self.is_n_of_a_kind(3)
    }

    pub(crate) fn is_exact_trips(&self) -> bool {
        self.is_exact_n_of_a_kind(3)
    }

    pub fn is_quads(&self) -> bool {
        self.is_n_of_a_kind(4)
    }

    pub fn is_yacht_see(&self) -> bool {
        self.is_n_of_a_kind(5)
    }

    /// Exactly two matching dice. Three or more of a kind is not a pair.
    pub fn is_exact_pair(&self) -> bool {
        self.is_exact_n_of_a_kind(2)
    }

    /// Three of one face and two of another, or five of a kind.
    pub fn is_full_house(&self) -> bool {
        (self.is_exact_trips() && self.is_exact_pair()) || self.is_yacht_see()
    }

    /// Four faces in a row: 1-4, 2-5 or 3-6.
    pub fn is_small_straight(&self) -> bool {
        // every run of four contains 3 and 4
        (self.has(3) && self.has(4))
            && ((self.has(1) && self.has(2))
                || (self.has(2) && self.has(5))
                || (self.has(5) && self.has(6)))
    }

    /// Five faces in a row: 1-5 or 2-6.
    pub fn is_large_straight(&self) -> bool {
        (self.has(2) && self.has(3) && self.has(4) && self.has(5)) && (self.has(1) || self.has(6))
    }

    pub fn score_chance(&self) -> u32 {
        self.faces.iter().sum()
    }

    /// Number of dice showing `digit`, times `digit`.
    pub fn score_digit(&self, digit: u32) -> u32 {
        self.count(digit) * digit
    }

    pub fn score_aces(&self) -> u32 {
        self.score_digit(1)
    }

    pub fn score_twos(&self) -> u32 {
        self.score_digit(2)
    }

    pub fn score_threes(&self) -> u32 {
        self.score_digit(3)
    }

    pub fn score_fours(&self) -> u32 {
        self.score_digit(4)
    }

    pub fn score_fives(&self) -> u32 {
        self.score_digit(5)
    }

    pub fn score_sixes(&self) -> u32 {
        self.score_digit(6)
    }

    pub fn score_trips(&self) -> u32 {
        if self.is_trips() { self.score_chance() } else { 0 }
    }

    pub fn score_quads(&self) -> u32 {
        if self.is_quads() { self.score_chance() } else { 0 }
    }

    pub fn score_full_house(&self) -> u32 {
        if self.is_full_house() {
            SCORE_FULL_HOUSE
        } else {
            0
        }
    }

    pub fn score_small_straight(&self) -> u32 {
        if self.is_small_straight() {
            SCORE_SMALL_STRAIGHT
        } else {
            0
        }
    }

    pub fn score_large_straight(&self) -> u32 {
        if self.is_large_straight() {
            SCORE_LARGE_STRAIGHT
        } else {
            0
        }
    }

    pub fn score_yacht_see(&self) -> u32 {
        if self.is_yacht_see() {
            SCORE_YACHT_SEE
        } else {
            0
        }
    }

    pub fn score(&self, category: Category) -> u32 {
        match category {
            Category::Aces => self.score_aces(),
            Category::Twos => self.score_twos(),
            Category::Threes => self.score_threes(),
            Category::Fours => self.score_fours(),
            Category::Fives => self.score_fives(),
            Category::Sixes => self.score_sixes(),
            Category::ThreeOfAKind => self.score_trips(),
            Category::FourOfAKind => self.score_quads(),
            Category::FullHouse => self.score_full_house(),
            Category::SmallStraight => self.score_small_straight(),
            Category::LargeStraight => self.score_large_straight(),
            Category::YachtSee => self.score_yacht_see(),
            Category::Chance => self.score_chance(),
        }
    }

    pub fn scorecard(&self) -> Scorecard {
        Scorecard {
            entries: Category::all()
                .into_iter()
                .map(|category| ScoreEntry {
                    category,
                    points: self.score(category),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub category: Category,
    pub points: u32,
}

/// Points every category would award for one snapshot, in [`Category::all`] order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, IntoIterator)]
#[serde(transparent)]
pub struct Scorecard {
    entries: Vec<ScoreEntry>,
}

impl Scorecard {
    pub fn get(&self, category: Category) -> u32 {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.points)
            .unwrap_or(0)
    }

    /// The highest-scoring category. Ties go to the one listed first.
    pub fn best(&self) -> Option<ScoreEntry> {
        self.entries
            .iter()
            .copied()
            .reduce(|best, e| if e.points > best.points { e } else { best })
    }

    pub fn pretty_print(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{} {:>3}", pad_cells(entry.category.name(), 16), entry.points)?;
        }
        Ok(())
    }
}
