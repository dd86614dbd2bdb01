pub mod roll_parser;
pub mod rules;
pub mod statistics;
pub mod utils;

pub mod prelude {
    pub use crate::{
        roll_parser::parse_faces,
        rules::{
            die::{DIE_SIDES, Die},
            error::DiceError,
            hand::Hand,
            scoring::{
                Category, NUM_DICE, RollScorer, SCORE_FULL_HOUSE, SCORE_LARGE_STRAIGHT,
                SCORE_SMALL_STRAIGHT, SCORE_YACHT_SEE, ScoreEntry, Scorecard,
            },
        },
        statistics::{
            integration::{SampleResults, Sampler},
            odds::{CategoryOdds, single_roll_odds},
            roller::Roller,
        },
    };
}
