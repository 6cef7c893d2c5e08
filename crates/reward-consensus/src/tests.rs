use crate::constants::*;
use crate::error::ErrorCode;
use crate::{
    apply_size_penalty, base_reward, block_reward, check_coinbase_reward, evaluate_reward,
    max_block_weight, EmissionParams, RewardDecision,
};

const ESF: u32 = EMISSION_SPEED_FACTOR_PER_MINUTE;
const FLOOR: u64 = FINAL_SUBSIDY_PER_MINUTE;

fn standard_reward() -> u64 {
    let d = evaluate_reward(0, 0, 0, ESF, FLOOR);
    assert!(d.accepted);
    d.reward
}

fn expected_penalized(base: u64, median: u64, weight: u64) -> u64 {
    let excess = 2 * median as u128 - weight as u128;
    let product = base as u128 * excess * weight as u128;
    (product / (median as u128 * median as u128)) as u64
}

#[test]
fn base_reward_first_values() {
    assert_eq!(base_reward(0, ESF, FLOOR), 17_592_186_044_415);
    assert_eq!(base_reward(17_592_186_044_415, ESF, FLOOR), 17_592_169_267_200);
    assert_eq!(
        base_reward(2_756_434_948_434_199_641, ESF, FLOOR),
        14_963_444_829_249
    );
}

#[test]
fn base_reward_tail_region_is_floor() {
    for threshold in [1u64 << 20, 2u64 << 20] {
        for generated in [
            MONEY_SUPPLY - (threshold + 1),
            MONEY_SUPPLY - threshold,
            MONEY_SUPPLY - (threshold - 1),
        ] {
            assert_eq!(base_reward(generated, ESF, FLOOR), FINAL_SUBSIDY_PER_MINUTE);
        }
    }
    assert_eq!(base_reward(MONEY_SUPPLY, ESF, FLOOR), FINAL_SUBSIDY_PER_MINUTE);
}

#[test]
fn base_reward_large_shift_is_floor() {
    assert_eq!(base_reward(0, 64, 7), 7);
    assert_eq!(base_reward(0, u32::MAX, 0), 0);
    assert_eq!(base_reward(0, 63, 0), 1);
}

#[test]
fn base_reward_never_exceeds_curve_start() {
    let start = MONEY_SUPPLY >> ESF;
    let mut generated = 0u64;
    let mut prev = u64::MAX;
    // Walk the curve by minting each block's own reward.
    for _ in 0..10_000 {
        let r = base_reward(generated, ESF, FLOOR);
        assert!(r <= start);
        assert!(r <= prev);
        assert!(r >= FLOOR);
        prev = r;
        generated += r;
    }
}

#[test]
fn weight_at_or_below_median_gets_full_reward() {
    let standard = standard_reward();
    for weight in [100_000u64, 10_000, 0] {
        let d = evaluate_reward(100_000, weight, 0, ESF, FLOOR);
        assert!(d.accepted);
        assert_eq!(d.reward, standard);
    }
}

#[test]
fn weight_above_median_is_penalized() {
    let standard = standard_reward();
    for weight in [100_001u64, 199_999] {
        let d = evaluate_reward(100_000, weight, 0, ESF, FLOOR);
        assert!(d.accepted);
        assert!(d.reward < standard);
    }

    let d = evaluate_reward(100_000, 150_000, 0, ESF, FLOOR);
    assert!(d.accepted);
    assert_eq!(d.reward, expected_penalized(standard, 100_000, 150_000));
    assert_eq!(d.reward, 13_194_139_533_311);
}

#[test]
fn weight_at_twice_median_is_zero_but_accepted() {
    let d = evaluate_reward(100_000, 200_000, 0, ESF, FLOOR);
    assert_eq!(d, RewardDecision::accept(0));

    let d = evaluate_reward(100_000, 200_001, 0, ESF, FLOOR);
    assert!(!d.accepted);
}

#[test]
fn penalty_non_increasing_between_median_and_double() {
    let base = standard_reward();
    let median = 100_000u64;
    let mut prev = base;
    for weight in median..=2 * median {
        let d = apply_size_penalty(base, median, weight, MIN_BLOCK_WEIGHT_BASELINE);
        assert!(d.accepted);
        assert!(d.reward <= prev, "weight {weight}: {} > {prev}", d.reward);
        prev = d.reward;
    }
    assert_eq!(prev, 0);
}

#[test]
fn zero_median_uses_baseline() {
    let standard = standard_reward();

    let d = evaluate_reward(0, 10_000, 0, ESF, FLOOR);
    assert_eq!(d, RewardDecision::accept(standard));

    let d = evaluate_reward(0, MIN_BLOCK_WEIGHT_BASELINE + 1, 0, ESF, FLOOR);
    assert!(d.accepted);
    assert!(d.reward < standard);

    let d = evaluate_reward(0, 2 * MIN_BLOCK_WEIGHT_BASELINE, 0, ESF, FLOOR);
    assert_eq!(d, RewardDecision::accept(0));

    let d = evaluate_reward(0, 2 * MIN_BLOCK_WEIGHT_BASELINE + 1, 0, ESF, FLOOR);
    assert!(!d.accepted);
}

#[test]
fn zero_median_with_zero_baseline_does_not_divide() {
    let d = apply_size_penalty(1_000, 0, 0, 0);
    assert_eq!(d, RewardDecision::accept(1_000));
    let d = apply_size_penalty(1_000, 0, 1, 0);
    assert_eq!(d, RewardDecision::reject());
}

#[test]
fn small_nonzero_median_is_not_raised() {
    // Only a zero median is replaced; a tiny median is taken as is.
    let d = apply_size_penalty(1_000, 5, 11, MIN_BLOCK_WEIGHT_BASELINE);
    assert!(!d.accepted);
    let d = apply_size_penalty(1_000, 5, 10, MIN_BLOCK_WEIGHT_BASELINE);
    assert_eq!(d, RewardDecision::accept(0));
}

#[test]
fn extreme_weights_do_not_wrap() {
    let d = apply_size_penalty(u64::MAX, u64::MAX, u64::MAX, 0);
    assert_eq!(d, RewardDecision::accept(u64::MAX));

    let median = 1u64 << 63;
    let d = apply_size_penalty(u64::MAX, median, median + 1, 0);
    assert!(d.accepted);
    assert_eq!(d.reward, 18_446_744_073_709_551_614);

    // 2 * median overflows u64 but every u64 candidate is within the limit.
    let d = apply_size_penalty(u64::MAX, u64::MAX - 1, u64::MAX, 0);
    assert!(d.accepted);
    assert_eq!(d.reward, 18_446_744_073_709_551_614);
}

#[test]
fn max_block_weight_doubles_effective_median() {
    assert_eq!(max_block_weight(100_000, MIN_BLOCK_WEIGHT_BASELINE), 200_000);
    assert_eq!(max_block_weight(0, MIN_BLOCK_WEIGHT_BASELINE), 40_000);
    assert_eq!(max_block_weight(u64::MAX, 0), u64::MAX);

    let limit = max_block_weight(100_000, MIN_BLOCK_WEIGHT_BASELINE);
    assert!(evaluate_reward(100_000, limit, 0, ESF, FLOOR).accepted);
    assert!(!evaluate_reward(100_000, limit + 1, 0, ESF, FLOOR).accepted);
}

#[test]
fn emission_params_per_version() {
    let v1 = EmissionParams::for_version(1).expect("v1");
    assert_eq!(v1, EmissionParams::new(20, 300_000_000_000, FULL_REWARD_ZONE_V1));

    for version in 2..=4 {
        let p = EmissionParams::for_version(version).expect("v2-v4");
        assert_eq!(p, EmissionParams::new(19, 600_000_000_000, FULL_REWARD_ZONE_V2));
    }

    for version in [5u8, 16, u8::MAX] {
        let p = EmissionParams::for_version(version).expect("v5+");
        assert_eq!(p, EmissionParams::new(19, 600_000_000_000, FULL_REWARD_ZONE_V5));
    }

    let err = EmissionParams::for_version(0).unwrap_err();
    assert_eq!(err.code, ErrorCode::ParamsErrVersionInvalid);
}

#[test]
fn block_reward_v1_matches_evaluate_reward() {
    let v1 = EmissionParams::for_version(1).expect("v1");
    for (median, weight, generated) in [
        (0u64, 10_000u64, 0u64),
        (100_000, 150_000, 17_592_186_044_415),
        (100_000, 200_001, 0),
        (300_000, 250_000, MONEY_SUPPLY - 5),
    ] {
        assert_eq!(
            block_reward(&v1, median, weight, generated),
            evaluate_reward(median, weight, generated, ESF, FLOOR)
        );
    }
}

#[test]
fn block_reward_v2_halves_speed_factor() {
    let v2 = EmissionParams::for_version(2).expect("v2");
    let d = block_reward(&v2, 0, 0, 0);
    assert_eq!(d, RewardDecision::accept(MONEY_SUPPLY >> 19));

    // Zero median falls back to the v2 full reward zone.
    let d = block_reward(&v2, 0, FULL_REWARD_ZONE_V2, 0);
    assert_eq!(d.reward, MONEY_SUPPLY >> 19);
    let d = block_reward(&v2, 0, 2 * FULL_REWARD_ZONE_V2 + 1, 0);
    assert!(!d.accepted);

    let d = block_reward(&v2, 0, 0, MONEY_SUPPLY);
    assert_eq!(d.reward, 2 * FINAL_SUBSIDY_PER_MINUTE);
}

#[test]
fn decision_into_result() {
    assert_eq!(RewardDecision::accept(42).into_result(), Ok(42));
    let err = RewardDecision::reject().into_result().unwrap_err();
    assert_eq!(err.code, ErrorCode::BlockErrWeightExceeded);
}

#[test]
fn coinbase_claim_checked_against_decision() {
    let d = evaluate_reward(100_000, 150_000, 0, ESF, FLOOR);
    check_coinbase_reward(d, d.reward).expect("exact reward");
    check_coinbase_reward(d, 0).expect("under-claim");

    let err = check_coinbase_reward(d, d.reward + 1).unwrap_err();
    assert_eq!(err.code, ErrorCode::BlockErrSubsidyExceeded);

    let rejected = evaluate_reward(100_000, 200_001, 0, ESF, FLOOR);
    let err = check_coinbase_reward(rejected, 0).unwrap_err();
    assert_eq!(err.code, ErrorCode::BlockErrWeightExceeded);
}

#[test]
fn evaluate_reward_is_thread_independent() {
    let want = evaluate_reward(100_000, 150_000, 0, ESF, FLOOR);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| evaluate_reward(100_000, 150_000, 0, ESF, FLOOR)))
        .collect();
    for h in handles {
        assert_eq!(h.join().expect("join"), want);
    }
}
