/// Total atomic units that can ever be emitted by the decaying curve.
pub const MONEY_SUPPLY: u64 = u64::MAX;

pub const EMISSION_SPEED_FACTOR_PER_MINUTE: u32 = 20;
pub const FINAL_SUBSIDY_PER_MINUTE: u64 = 300_000_000_000;

pub const DIFFICULTY_TARGET_V1: u64 = 60;
pub const DIFFICULTY_TARGET_V2: u64 = 120;

pub const FULL_REWARD_ZONE_V1: u64 = 20_000;
pub const FULL_REWARD_ZONE_V2: u64 = 60_000;
pub const FULL_REWARD_ZONE_V5: u64 = 300_000;

/// Baseline weight substituted for a zero median by `evaluate_reward`.
pub const MIN_BLOCK_WEIGHT_BASELINE: u64 = FULL_REWARD_ZONE_V1;
