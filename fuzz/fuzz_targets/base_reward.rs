#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz base_reward: emission curve with tail floor.
// Verifies no-panic, determinism, floor and monotonicity.
fuzz_target!(|data: &[u8]| {
    if data.len() < 28 {
        return;
    }

    let a = u64::from_le_bytes(data[..8].try_into().unwrap());
    let b = u64::from_le_bytes(data[8..16].try_into().unwrap());
    let floor = u64::from_le_bytes(data[16..24].try_into().unwrap());
    let esf = u32::from_le_bytes(data[24..28].try_into().unwrap());

    let r1 = reward_consensus::base_reward(a, esf, floor);
    let r2 = reward_consensus::base_reward(a, esf, floor);
    if r1 != r2 {
        panic!("base_reward non-deterministic: {r1} != {r2}");
    }

    if r1 < floor {
        panic!("base_reward below floor: {r1} < {floor}");
    }

    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if reward_consensus::base_reward(lo, esf, floor) < reward_consensus::base_reward(hi, esf, floor)
    {
        panic!("base_reward increased with generated coins: {lo} -> {hi}");
    }
});
