#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz evaluate_reward: size penalty boundaries on arbitrary weights.
fuzz_target!(|data: &[u8]| {
    if data.len() < 36 {
        return;
    }

    let median = u64::from_le_bytes(data[..8].try_into().unwrap());
    let weight = u64::from_le_bytes(data[8..16].try_into().unwrap());
    let generated = u64::from_le_bytes(data[16..24].try_into().unwrap());
    let floor = u64::from_le_bytes(data[24..32].try_into().unwrap());
    let esf = u32::from_le_bytes(data[32..36].try_into().unwrap());

    let d1 = reward_consensus::evaluate_reward(median, weight, generated, esf, floor);
    let d2 = reward_consensus::evaluate_reward(median, weight, generated, esf, floor);
    if d1 != d2 {
        panic!("evaluate_reward non-deterministic: {d1:?} != {d2:?}");
    }

    let base = reward_consensus::base_reward(generated, esf, floor);
    let m = reward_consensus::effective_median(
        median,
        reward_consensus::constants::MIN_BLOCK_WEIGHT_BASELINE,
    ) as u128;
    let w = weight as u128;

    if w <= m && (!d1.accepted || d1.reward != base) {
        panic!("no-penalty region violated: {d1:?}, base {base}");
    }
    if w > 2 * m && d1.accepted {
        panic!("oversized block accepted: weight {w}, median {m}");
    }
    if d1.accepted && d1.reward > base {
        panic!("penalized reward above base: {} > {base}", d1.reward);
    }
});
