use serde::{Deserialize, Serialize};

use crate::{rules::error::DiceError, statistics::roller::Roller};

pub const DIE_SIDES: u32 = 6;

/// A single six-sided die that can be frozen between rolls.
///
/// A fresh die has no face. It gets one on its first roll while unfrozen, and
/// rolling a frozen die leaves whatever it shows untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SavedDie")]
pub struct Die {
    face: Option<u32>,
    frozen: bool,
}

/// A die as it was written out, before its face is checked.
#[derive(Deserialize)]
struct SavedDie {
    face: Option<u32>,
    frozen: bool,
}

impl TryFrom<SavedDie> for Die {
    type Error = DiceError;

    fn try_from(saved: SavedDie) -> Result<Self, Self::Error> {
        if let Some(face) = saved.face
            && !(1..=DIE_SIDES).contains(&face)
        {
            return Err(DiceError::InvalidFace(face));
        }
        Ok(Self {
            face: saved.face,
            frozen: saved.frozen,
        })
    }
}

impl Die {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roll(&mut self, rng: &mut Roller) {
        if self.frozen {
            log::trace!("Die is frozen, keeping {:?}", self.face);
            return;
        }
        let face = rng.d(DIE_SIDES);
        log::trace!("Rolled a {}", face);
        self.face = Some(face);
    }

    /// The face currently showing.
    ///
    /// Fails with [`DiceError::UnrolledDie`] until the die has been rolled while unfrozen.
    pub fn value(&self) -> Result<u32, DiceError> {
        self.face.ok_or(DiceError::UnrolledDie)
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn is_rolled(&self) -> bool {
        self.face.is_some()
    }

    /// Builds an unfrozen die already showing `face`, without rolling.
    /// Scoring tests use this to lay out exact hands.
    #[cfg(test)]
    pub(crate) fn rigged(face: u32) -> Self {
        let mut die = Self::new();
        die.rig(face);
        die
    }

    /// Forces the face shown, ignoring the frozen flag.
    #[cfg(test)]
    pub(crate) fn rig(&mut self, face: u32) {
        assert!((1..=DIE_SIDES).contains(&face), "face out of range: {}", face);
        self.face = Some(face);
    }
}
