use serde::{Deserialize, Serialize};

use crate::{
    rules::{
        die::Die,
        error::DiceError,
        scoring::{NUM_DICE, RollScorer},
    },
    statistics::roller::Roller,
    utils::face_glyph,
};

/// The five dice a player rolls together.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    dice: [Die; NUM_DICE],
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rolls every die. Frozen dice keep their faces.
    pub fn roll(&mut self, rng: &mut Roller) {
        for die in &mut self.dice {
            die.roll(rng);
        }
        log::debug!("Rolled hand: {}", self);
    }

    pub fn die(&self, pos: usize) -> Result<&Die, DiceError> {
        self.dice.get(pos).ok_or(DiceError::InvalidPosition(pos))
    }

    fn die_mut(&mut self, pos: usize) -> Result<&mut Die, DiceError> {
        self.dice.get_mut(pos).ok_or(DiceError::InvalidPosition(pos))
    }

    pub fn freeze(&mut self, pos: usize) -> Result<(), DiceError> {
        self.die_mut(pos)?.freeze();
        log::debug!("Froze die {}", pos);
        Ok(())
    }

    pub fn unfreeze(&mut self, pos: usize) -> Result<(), DiceError> {
        self.die_mut(pos)?.unfreeze();
        log::debug!("Unfroze die {}", pos);
        Ok(())
    }

    pub fn unfreeze_all(&mut self) {
        for die in &mut self.dice {
            die.unfreeze();
        }
    }

    pub fn dice(&self) -> &[Die; NUM_DICE] {
        &self.dice
    }

    pub fn faces(&self) -> Result<[u32; NUM_DICE], DiceError> {
        Ok(self.scorer()?.faces())
    }

    pub fn scorer(&self) -> Result<RollScorer, DiceError> {
        RollScorer::new(&self.dice)
    }

    /// Writes the faces as die glyphs, frozen dice in brackets.
    pub fn pretty_print(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        for (i, die) in self.dice.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let glyph = face_glyph(die.value().ok());
            if die.is_frozen() {
                write!(f, "[{}]", glyph)?;
            } else {
                write!(f, "{}", glyph)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.pretty_print(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hand_is_unrolled() {
        let hand = Hand::new();
        assert_eq!(hand.faces(), Err(DiceError::UnrolledDie));
        assert_eq!(hand.to_string(), "? ? ? ? ?");
    }

    #[test]
    fn test_roll_fills_every_die() {
        let mut rng = Roller::test_rng();
        let mut hand = Hand::new();
        hand.roll(&mut rng);
        for face in hand.faces().unwrap() {
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_frozen_positions_survive_reroll() -> anyhow::Result<()> {
        let mut rng = Roller::test_rng();
        let mut hand = Hand::new();
        hand.roll(&mut rng);
        let before = hand.faces()?;

        hand.freeze(0)?;
        hand.freeze(3)?;
        for _ in 0..50 {
            hand.roll(&mut rng);
            let after = hand.faces()?;
            assert_eq!(after[0], before[0]);
            assert_eq!(after[3], before[3]);
        }

        hand.unfreeze(3)?;
        assert!(hand.die(0)?.is_frozen());
        assert!(!hand.die(3)?.is_frozen());

        hand.unfreeze_all();
        assert!(hand.dice().iter().all(|d| !d.is_frozen()));
        Ok(())
    }

    #[test]
    fn test_invalid_position() {
        let mut hand = Hand::new();
        assert_eq!(hand.freeze(5), Err(DiceError::InvalidPosition(5)));
        assert_eq!(hand.unfreeze(9), Err(DiceError::InvalidPosition(9)));
        assert!(hand.die(5).is_err());
    }

    #[test]
    fn test_pretty_print_marks_frozen() -> anyhow::Result<()> {
        let mut hand = Hand {
            dice: [1, 2, 3, 4, 5].map(Die::rigged),
        };
        hand.freeze(1)?;
        assert_eq!(hand.to_string(), "⚀ [⚁] ⚂ ⚃ ⚄");
        Ok(())
    }

    #[test]
    fn test_scorer_from_hand() -> anyhow::Result<()> {
        let hand = Hand {
            dice: [2, 3, 4, 5, 6].map(Die::rigged),
        };
        let scorer = hand.scorer()?;
        assert!(scorer.is_large_straight());
        assert_eq!(scorer.score_chance(), 20);
        Ok(())
    }
}
