/// `n!`, or `None` once it no longer fits in a `u64` (past 20!).
pub fn factorial(n: u32) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Number of distinct orderings of a roll with these per-face counts.
/// `None` when the intermediate factorials overflow.
pub fn multinomial_coefficient(counts: &[u32]) -> Option<u64> {
    let n = counts
        .iter()
        .try_fold(0u32, |acc, &k| acc.checked_add(k))?;
    let mut denominator = 1u64;
    for &k in counts {
        denominator = denominator.checked_mul(factorial(k)?)?;
    }
    Some(factorial(n)? / denominator)
}

/// Probability that `counts.iter().sum()` fair dice with `sides` faces land with
/// exactly `counts[i]` dice showing face `i + 1`, in any order.
pub fn fair_dice_probability(counts: &[u32], sides: u32) -> anyhow::Result<f64> {
    if counts.len() != sides as usize {
        anyhow::bail!(
            "Expected a count for each of {} faces, got {}",
            sides,
            counts.len()
        );
    }
    let Some(coefficient) = multinomial_coefficient(counts) else {
        anyhow::bail!("Too many dice to count orderings of {:?}", counts);
    };
    let n: u32 = counts.iter().sum();
    let outcomes = (sides as f64).powi(n as i32);
    Ok(coefficient as f64 / outcomes)
}
