// Signed-digit representations.
//
// Digit tables are little-endian: entry i carries weight 2^i. Every digit is
// one of {-1, 0, 1}.

/// Value of a signed-digit expansion, `sum(d_i * 2^i)`.
///
/// Returns `None` if a digit is outside {-1, 0, 1} or the value does not fit
/// in an i128.
pub fn signed_digits_value(digits: &[i8]) -> Option<i128> {
    let mut acc: i128 = 0;
    for &d in digits.iter().rev() {
        if !(-1..=1).contains(&d) {
            return None;
        }
        acc = acc.checked_mul(2)?.checked_add(d as i128)?;
    }
    Some(acc)
}

/// Non-adjacent form of a little-endian multi-word scalar.
///
/// No two consecutive digits of the result are non-zero, and the result is
/// at most one digit longer than the binary expansion.
pub fn non_adjacent_form(words: &[u64]) -> Vec<i8> {
    let mut k = words.to_vec();
    // headroom for the carry of the final +1
    k.push(0);
    let mut naf = Vec::with_capacity(64 * k.len());

    while k.iter().any(|&w| w != 0) {
        let digit = if k[0] & 1 == 1 {
            let d = 2 - (k[0] & 3) as i8;
            if d == 1 {
                sub_one(&mut k);
            } else {
                add_one(&mut k);
            }
            d
        } else {
            0
        };
        naf.push(digit);
        shr_one(&mut k);
    }
    naf
}

fn add_one(k: &mut [u64]) {
    for w in k.iter_mut() {
        let (v, overflow) = w.overflowing_add(1);
        *w = v;
        if !overflow {
            return;
        }
    }
}

fn sub_one(k: &mut [u64]) {
    for w in k.iter_mut() {
        let (v, underflow) = w.overflowing_sub(1);
        *w = v;
        if !underflow {
            return;
        }
    }
}

fn shr_one(k: &mut [u64]) {
    for i in 0..k.len() {
        let hi = if i + 1 < k.len() { k[i + 1] << 63 } else { 0 };
        k[i] = (k[i] >> 1) | hi;
    }
}
