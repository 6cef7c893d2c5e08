use crate::constants::{
    DIFFICULTY_TARGET_V1, DIFFICULTY_TARGET_V2, EMISSION_SPEED_FACTOR_PER_MINUTE,
    FINAL_SUBSIDY_PER_MINUTE, FULL_REWARD_ZONE_V1, FULL_REWARD_ZONE_V2, FULL_REWARD_ZONE_V5,
    MIN_BLOCK_WEIGHT_BASELINE,
};
use crate::error::{ErrorCode, RewardError};

/// Emission and size-penalty constants active for one protocol version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmissionParams {
    pub emission_speed_factor: u32,
    pub final_subsidy_floor: u64,
    /// Baseline weight substituted for a zero median.
    pub full_reward_zone: u64,
}

impl EmissionParams {
    pub fn new(
        emission_speed_factor: u32,
        final_subsidy_floor: u64,
        full_reward_zone: u64,
    ) -> Self {
        Self {
            emission_speed_factor,
            final_subsidy_floor,
            full_reward_zone,
        }
    }

    /// Custom emission constants with the network-wide zero-median baseline.
    pub fn with_default_baseline(emission_speed_factor: u32, final_subsidy_floor: u64) -> Self {
        Self::new(
            emission_speed_factor,
            final_subsidy_floor,
            MIN_BLOCK_WEIGHT_BASELINE,
        )
    }

    /// Constants for hard-fork `version` (1-based).
    ///
    /// Version 1 targets 60 s blocks, later versions 120 s. The speed factor
    /// drops by one and the tail floor scales with each extra target minute.
    pub fn for_version(version: u8) -> Result<Self, RewardError> {
        if version == 0 {
            return Err(RewardError::new(
                ErrorCode::ParamsErrVersionInvalid,
                "hard-fork versions start at 1",
            ));
        }
        let target_minutes = block_target_seconds(version) / 60;
        Ok(Self {
            emission_speed_factor: EMISSION_SPEED_FACTOR_PER_MINUTE - (target_minutes as u32 - 1),
            final_subsidy_floor: FINAL_SUBSIDY_PER_MINUTE * target_minutes,
            full_reward_zone: full_reward_zone(version),
        })
    }
}

fn block_target_seconds(version: u8) -> u64 {
    if version < 2 {
        DIFFICULTY_TARGET_V1
    } else {
        DIFFICULTY_TARGET_V2
    }
}

fn full_reward_zone(version: u8) -> u64 {
    if version < 2 {
        FULL_REWARD_ZONE_V1
    } else if version < 5 {
        FULL_REWARD_ZONE_V2
    } else {
        FULL_REWARD_ZONE_V5
    }
}
