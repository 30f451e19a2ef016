//! Counter arithmetic shared by the permutation and subset engines.

///Adds one to a mixed-radix number stored most significant digit first.
///
///Digits that reach `base` are reset to zero and carry into the digit on their left. Returns
///`false` once the carry falls off the most significant digit, at which point every digit is
///zero again.
pub(crate) fn increment_radix(digits: &mut [usize], base: usize) -> bool {
    for digit in digits.iter_mut().rev() {
        *digit += 1;
        if *digit < base {
            return true;
        }
        *digit = 0;
    }
    false
}

///Number of states a counter with `len` digits of radix `base` walks through, if it fits.
#[must_use]
pub fn counter_states(base: usize, len: usize) -> Option<u64> {
    let base = u64::try_from(base).ok()?;
    let len = u32::try_from(len).ok()?;
    base.checked_pow(len)
}

///`n!`, if it fits.
#[must_use]
pub fn factorial(n: usize) -> Option<u64> {
    (2..=n).try_fold(1u64, |acc, k| acc.checked_mul(u64::try_from(k).ok()?))
}

///Number of masks over `len` items, if it fits.
#[must_use]
pub fn mask_states(len: usize) -> Option<u64> {
    let len = u32::try_from(len).ok()?;
    1u64.checked_shl(len)
}
