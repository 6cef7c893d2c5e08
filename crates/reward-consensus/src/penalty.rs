use crate::error::{ErrorCode, RewardError};
use crate::wide::mul_div_by_square;

/// Outcome of evaluating one candidate block.
///
/// `reward` is only meaningful when `accepted` is true; rejected decisions
/// carry a zero reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardDecision {
    pub reward: u64,
    pub accepted: bool,
}

impl RewardDecision {
    pub fn accept(reward: u64) -> Self {
        Self {
            reward,
            accepted: true,
        }
    }

    pub fn reject() -> Self {
        Self {
            reward: 0,
            accepted: false,
        }
    }

    /// Converts the accept flag into a `Result` for callers that propagate with `?`.
    pub fn into_result(self) -> Result<u64, RewardError> {
        if !self.accepted {
            return Err(RewardError::new(
                ErrorCode::BlockErrWeightExceeded,
                "block weight exceeds twice the median",
            ));
        }
        Ok(self.reward)
    }
}

/// Median used for the penalty: a zero median is replaced by the baseline.
pub fn effective_median(median_weight: u64, min_baseline_weight: u64) -> u64 {
    if median_weight == 0 {
        min_baseline_weight
    } else {
        median_weight
    }
}

/// Largest candidate weight that is still accepted (`2 * effective median`).
pub fn max_block_weight(median_weight: u64, min_baseline_weight: u64) -> u64 {
    effective_median(median_weight, min_baseline_weight).saturating_mul(2)
}

/// Applies the quadratic size penalty to `base_reward`.
///
/// * `candidate <= median`: full reward.
/// * `median < candidate <= 2 * median`:
///   `floor(base_reward * (2 * median - candidate) * candidate / median²)`.
///   At exactly `2 * median` the reward is zero but the block is accepted.
/// * `candidate > 2 * median`: rejected.
///
/// `2 * median` and the weight product are formed in 128 bits and the product
/// with `base_reward` in 192 bits, so no input can wrap.
pub fn apply_size_penalty(
    base_reward: u64,
    median_weight: u64,
    candidate_weight: u64,
    min_baseline_weight: u64,
) -> RewardDecision {
    let median = effective_median(median_weight, min_baseline_weight);

    if candidate_weight <= median {
        return RewardDecision::accept(base_reward);
    }

    let limit = 2 * (median as u128);
    let candidate = candidate_weight as u128;
    if candidate > limit {
        log::warn!(
            "block weight too big: {candidate_weight}, expected at most {limit} (median {median})"
        );
        return RewardDecision::reject();
    }

    // median >= 1 here: candidate > median and candidate <= 2 * median.
    // (2m - c) * c <= m², so the quotient never exceeds base_reward.
    let numerator = (limit - candidate) * candidate;
    let reward = mul_div_by_square(base_reward, numerator, median).unwrap_or(0);
    log::trace!(
        "size penalty: median={median} weight={candidate_weight} base={base_reward} reward={reward}"
    );
    RewardDecision::accept(reward)
}

#[cfg(kani)]
mod verification {
    use super::*;

    /// Every accepted block is paid at most the base reward.
    #[kani::proof]
    fn verify_penalty_bounded_by_base() {
        let base: u64 = kani::any();
        let median: u64 = kani::any();
        let weight: u64 = kani::any();
        let d = apply_size_penalty(base, median, weight, 1);
        if d.accepted {
            assert!(d.reward <= base);
        }
    }

    /// Blocks above twice the effective median are always rejected.
    #[kani::proof]
    fn verify_reject_above_double_median() {
        let base: u64 = kani::any();
        let median: u64 = kani::any();
        let weight: u64 = kani::any();
        kani::assume(median > 0);
        kani::assume((weight as u128) > 2 * (median as u128));
        assert!(!apply_size_penalty(base, median, weight, 1).accepted);
    }
}
