use clap::Parser;
use serde::Serialize;
use yachtsee::prelude::*;

const MAX_REROLLS: u32 = 2;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Score these five faces instead of rolling, e.g. "1 2 3 4 5"
    #[arg(short, long, value_name = "FACES")]
    faces: Option<String>,

    /// Random seed for reproducibility
    #[arg(long, default_value = None)]
    seed: Option<u64>,

    /// Hand positions (0-4) to freeze before each reroll
    #[arg(long, value_delimiter = ',', conflicts_with = "faces")]
    hold: Vec<usize>,

    /// Number of rerolls after the first roll
    #[arg(short, long, default_value_t = 0, conflicts_with = "faces")]
    rerolls: u32,

    /// Print the exact single-roll odds of every category
    #[arg(long, default_value_t = false)]
    odds: bool,

    /// Also estimate the odds by rolling this many hands
    #[arg(long, default_value_t = 0, requires = "odds")]
    samples: usize,

    /// Print JSON instead of tables
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log at debug level
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report {
    faces: [u32; NUM_DICE],
    scorecard: Scorecard,
    #[serde(skip_serializing_if = "Option::is_none")]
    odds: Option<Vec<CategoryOdds>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sampled: Option<SampleResults>,
}

fn roll_hand(args: &Args, roller: &mut Roller) -> anyhow::Result<Hand> {
    if args.rerolls > MAX_REROLLS {
        anyhow::bail!(
            "At most {} rerolls are allowed, got {}",
            MAX_REROLLS,
            args.rerolls
        );
    }

    if !args.hold.is_empty() && args.rerolls == 0 {
        anyhow::bail!("--hold only applies to rerolls, pass --rerolls as well");
    }

    let mut hand = Hand::new();
    hand.roll(roller);
    log::info!("Rolled {}", hand);

    for reroll in 1..=args.rerolls {
        for &pos in &args.hold {
            hand.freeze(pos)?;
        }
        hand.roll(roller);
        log::info!("Reroll {}: {}", reroll, hand);
    }

    Ok(hand)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::builder()
        .format_timestamp_secs()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();
    log::debug!("Starting with args: {:?}", args);

    let mut roller = match args.seed {
        Some(seed) => Roller::from_seed(seed),
        None => Roller::new(),
    };

    let scorer = match &args.faces {
        Some(faces) => {
            log::info!("Scoring faces {}", faces);
            RollScorer::from_faces(parse_faces(faces)?)?
        }
        None => roll_hand(&args, &mut roller)?.scorer()?,
    };

    let scorecard = scorer.scorecard();
    if let Some(best) = scorecard.best() {
        log::info!("Best category: {} for {}", best.category.name(), best.points);
    }

    let odds = if args.odds {
        Some(single_roll_odds()?)
    } else {
        None
    };

    let sampled = if args.odds && args.samples > 0 {
        log::info!("Sampling {} hands...", args.samples);
        let results = Sampler::new(args.samples, roller.fork()).run()?;
        log::info!(
            "Sampling complete: {} hands in {} ms ({:.2} hands/sec)",
            results.samples_run,
            results.elapsed_ms,
            results.samples_per_second()
        );
        Some(results)
    } else {
        None
    };

    let report = Report {
        faces: scorer.faces(),
        scorecard,
        odds,
        sampled,
    };

    if args.json {
        let stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(stdout, &report)?;
        println!();
        return Ok(());
    }

    let mut out = String::new();
    report.scorecard.pretty_print(&mut out)?;
    println!("Faces: {:?}", report.faces);
    print!("{}", out);

    if let Some(odds) = &report.odds {
        println!();
        println!("Single-roll odds:");
        print_odds(odds)?;
    }
    if let Some(sampled) = &report.sampled {
        println!();
        println!("Sampled over {} hands:", sampled.samples_run);
        print_odds(&sampled.odds)?;
    }

    Ok(())
}

fn print_odds(odds: &[CategoryOdds]) -> anyhow::Result<()> {
    let mut out = String::new();
    for entry in odds {
        entry.pretty_print(&mut out)?;
        out.push('\n');
    }
    print!("{}", out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(cmdline: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("yachtsee").chain(cmdline.iter().copied())).unwrap()
    }

    #[test]
    fn test_hold_without_rerolls_is_rejected() {
        let args = args(&["--hold", "0,2"]);
        let mut roller = Roller::from_seed(1);
        assert!(roll_hand(&args, &mut roller).is_err());
    }

    #[test]
    fn test_hold_keeps_positions_across_rerolls() -> anyhow::Result<()> {
        let args = args(&["--hold", "0,2", "--rerolls", "2"]);
        assert_eq!(args.hold, vec![0, 2]);

        let mut roller = Roller::from_seed(1);
        let mut first = Hand::new();
        first.roll(&mut Roller::from_seed(1));

        let hand = roll_hand(&args, &mut roller)?;
        let faces = hand.faces()?;
        let first = first.faces()?;
        assert_eq!(faces[0], first[0]);
        assert_eq!(faces[2], first[2]);
        assert!(hand.die(0)?.is_frozen());
        assert!(!hand.die(1)?.is_frozen());
        Ok(())
    }

    #[test]
    fn test_too_many_rerolls() {
        let args = args(&["--rerolls", "3"]);
        assert!(roll_hand(&args, &mut Roller::from_seed(1)).is_err());
    }

    #[test]
    fn test_invalid_hold_position() {
        let args = args(&["--hold", "7", "--rerolls", "1"]);
        assert!(roll_hand(&args, &mut Roller::from_seed(1)).is_err());
    }
}
