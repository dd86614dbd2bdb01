use serde::{Deserialize, Serialize};

use crate::{
    rules::{hand::Hand, scoring::Category},
    statistics::{odds::CategoryOdds, roller::Roller},
};

pub type Timestamp = chrono::DateTime<chrono::Utc>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleResults {
    pub samples_run: usize,
    pub elapsed_ms: i64,
    pub odds: Vec<CategoryOdds>,
}

impl SampleResults {
    pub fn samples_per_second(&self) -> f64 {
        let elapsed = self.elapsed_ms as f64 / 1000.0;
        if elapsed > 0.0 {
            self.samples_run as f64 / elapsed
        } else {
            0.0
        }
    }
}

/// Monte-Carlo estimate of single-roll category odds, made by rolling fresh hands.
pub struct Sampler {
    pub samples: usize,
    pub start_time: Timestamp,
    pub roller: Roller,
}

impl Sampler {
    pub fn new(samples: usize, roller: Roller) -> Self {
        Self {
            samples,
            start_time: chrono::Utc::now(),
            roller,
        }
    }

    pub fn elapsed_time(&self) -> chrono::Duration {
        chrono::Utc::now() - self.start_time
    }

    pub fn run(&mut self) -> anyhow::Result<SampleResults> {
        if self.samples == 0 {
            anyhow::bail!("Sampler needs at least one sample");
        }
        self.start_time = chrono::Utc::now();

        let categories = Category::all();
        let mut hits = vec![0usize; categories.len()];
        let mut points = vec![0u64; categories.len()];

        for _ in 0..self.samples {
            let mut hand = Hand::new();
            hand.roll(&mut self.roller);
            let scorer = hand.scorer()?;
            for (i, &category) in categories.iter().enumerate() {
                let score = scorer.score(category);
                if score > 0 {
                    hits[i] += 1;
                    points[i] += score as u64;
                }
            }
        }

        let n = self.samples as f64;
        let odds = categories
            .into_iter()
            .enumerate()
            .map(|(i, category)| CategoryOdds {
                category,
                hit_probability: hits[i] as f64 / n,
                expected_score: points[i] as f64 / n,
            })
            .collect();

        let results = SampleResults {
            samples_run: self.samples,
            elapsed_ms: self.elapsed_time().num_milliseconds(),
            odds,
        };
        log::debug!(
            "Sampled {} hands in {} ms",
            results.samples_run,
            results.elapsed_ms
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::odds::single_roll_odds;

    #[test]
    fn test_sampler_close_to_exact_odds() -> anyhow::Result<()> {
        let mut sampler = Sampler::new(20000, Roller::test_rng());
        let results = sampler.run()?;
        assert_eq!(results.samples_run, 20000);

        let exact = single_roll_odds()?;
        for (sampled, exact) in results.odds.iter().zip(&exact) {
            assert_eq!(sampled.category, exact.category);
            assert!(
                (sampled.hit_probability - exact.hit_probability).abs() < 0.02,
                "{:?}: sampled {} vs exact {}",
                sampled.category,
                sampled.hit_probability,
                exact.hit_probability
            );
        }
        Ok(())
    }

    #[test]
    fn test_sampler_rejects_zero_samples() {
        let mut sampler = Sampler::new(0, Roller::test_rng());
        assert!(sampler.run().is_err());
    }

    #[test]
    fn test_sampler_chance_always_hits() -> anyhow::Result<()> {
        let mut sampler = Sampler::new(500, Roller::from_seed(3));
        let results = sampler.run()?;
        let chance = results
            .odds
            .iter()
            .find(|o| o.category == Category::Chance)
            .unwrap();
        assert_eq!(chance.hit_probability, 1.0);
        assert!(chance.expected_score >= 5.0 && chance.expected_score <= 30.0);
        Ok(())
    }
}
