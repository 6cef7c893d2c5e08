use crate::error::{ErrorCode, RewardError};
use crate::params::EmissionParams;
use crate::penalty::{apply_size_penalty, RewardDecision};
use crate::subsidy::base_reward;

/// Reward decision for one candidate block.
///
/// `median_block_weight` comes from the rolling-median tracker and
/// `already_generated_coins` from the chain-state ledger; neither is derived
/// here. A zero median is replaced by
/// [`MIN_BLOCK_WEIGHT_BASELINE`](crate::constants::MIN_BLOCK_WEIGHT_BASELINE).
///
/// Pure and allocation-free: safe to call concurrently from any number of
/// validation threads.
pub fn evaluate_reward(
    median_block_weight: u64,
    candidate_block_weight: u64,
    already_generated_coins: u64,
    emission_speed_factor: u32,
    final_subsidy_floor: u64,
) -> RewardDecision {
    let params = EmissionParams::with_default_baseline(emission_speed_factor, final_subsidy_floor);
    block_reward(
        &params,
        median_block_weight,
        candidate_block_weight,
        already_generated_coins,
    )
}

/// Same as [`evaluate_reward`] with constants taken from `params`.
pub fn block_reward(
    params: &EmissionParams,
    median_block_weight: u64,
    candidate_block_weight: u64,
    already_generated_coins: u64,
) -> RewardDecision {
    let base = base_reward(
        already_generated_coins,
        params.emission_speed_factor,
        params.final_subsidy_floor,
    );
    apply_size_penalty(
        base,
        median_block_weight,
        candidate_block_weight,
        params.full_reward_zone,
    )
}

/// Checks a coinbase's claimed subsidy (fees excluded) against the decision.
pub fn check_coinbase_reward(
    decision: RewardDecision,
    claimed_subsidy: u64,
) -> Result<(), RewardError> {
    let allowed = decision.into_result()?;
    if claimed_subsidy > allowed {
        return Err(RewardError::new(
            ErrorCode::BlockErrSubsidyExceeded,
            "coinbase subsidy exceeds block reward",
        ));
    }
    Ok(())
}
