// ----- u192 arithmetic (big-endian 3-limb representation) -----
//
// The penalty product `base_reward * excess * candidate_weight` needs up to
// 64 + 128 = 192 bits. Both multiplications happen here before any division,
// and the single truncation is the final floor division.

const LIMB_MASK: u128 = 0xffff_ffff_ffff_ffff;

pub(crate) fn mul_u128_u64_to_u192(a: u128, m: u64) -> [u64; 3] {
    let limbs = [(a >> 64) as u64, (a & LIMB_MASK) as u64];
    let mut out = [0u64; 3];
    let mut carry: u128 = 0;
    for i in (0..2).rev() {
        let prod = (limbs[i] as u128) * (m as u128) + carry;
        out[i + 1] = (prod & LIMB_MASK) as u64;
        carry = prod >> 64;
    }
    out[0] = carry as u64;
    out
}

/// Long division of a 192-bit value by a non-zero 64-bit divisor.
#[allow(clippy::needless_range_loop)]
pub(crate) fn u192_div_u64(n: &[u64; 3], d: u64) -> [u64; 3] {
    debug_assert!(d != 0, "u192_div_u64: zero divisor");
    let d = d as u128;
    let mut q = [0u64; 3];
    let mut rem: u128 = 0;
    for i in 0..3 {
        let cur = (rem << 64) | (n[i] as u128);
        q[i] = (cur / d) as u64;
        rem = cur % d;
    }
    q
}

pub(crate) fn u192_to_u64(n: &[u64; 3]) -> Option<u64> {
    if n[0] != 0 || n[1] != 0 {
        return None;
    }
    Some(n[2])
}

/// `floor(value * numerator / (divisor * divisor))`, computed without any
/// intermediate truncation.
///
/// The quotient is divided by `divisor` twice, which equals a single floor
/// division by `divisor²` and never needs a 128-bit square. Returns `None`
/// when `divisor` is zero or when the quotient does not fit in 64 bits (it
/// always fits when `numerator <= divisor²`).
pub fn mul_div_by_square(value: u64, numerator: u128, divisor: u64) -> Option<u64> {
    if divisor == 0 {
        return None;
    }
    let product = mul_u128_u64_to_u192(numerator, value);
    let once = u192_div_u64(&product, divisor);
    let twice = u192_div_u64(&once, divisor);
    u192_to_u64(&twice)
}

#[cfg(kani)]
mod verification {
    use super::*;

    /// The quotient fits in 64 bits whenever the numerator is bounded by the
    /// squared divisor.
    #[kani::proof]
    fn verify_bounded_numerator_fits() {
        let value: u64 = kani::any();
        let divisor: u64 = kani::any();
        let numerator: u128 = kani::any();
        kani::assume(divisor != 0);
        kani::assume(numerator <= (divisor as u128) * (divisor as u128));
        let q = mul_div_by_square(value, numerator, divisor);
        assert!(q.is_some());
        assert!(q.unwrap() <= value);
    }
}
