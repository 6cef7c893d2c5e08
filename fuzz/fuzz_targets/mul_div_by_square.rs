#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

// Cross-checks the 192-bit penalty product against arbitrary precision.
fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }

    let value = u64::from_le_bytes(data[..8].try_into().unwrap());
    let divisor = u64::from_le_bytes(data[8..16].try_into().unwrap());
    let numerator = u128::from_le_bytes(data[16..32].try_into().unwrap());

    let got = reward_consensus::mul_div_by_square(value, numerator, divisor);

    let want = if divisor == 0 {
        None
    } else {
        let d = BigUint::from(divisor);
        (BigUint::from(value) * BigUint::from(numerator) / (&d * &d)).to_u64()
    };

    if got != want {
        panic!("mul_div_by_square({value}, {numerator}, {divisor}) = {got:?}, want {want:?}");
    }
});
