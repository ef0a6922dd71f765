use std::cmp::Ordering;
use std::fmt::Display;

use crate::error::{Error, Result};

/// Absolute tolerance at which [`ternary_search`] stops narrowing.
pub const TERNARY_SEARCH_EPS: f64 = 1e-9;

/// Integer domains usable by [`partition_point`] and [`binary_search_by`].
pub trait SearchIndex: Copy + Ord + Display {
    /// `lo + (hi - lo) / 2`, computed without overflowing the domain.
    fn mid(lo: Self, hi: Self) -> Self;
    fn succ(self) -> Self;
}

macro_rules! impl_search_index {
    ($($t:ty => $wide:ty),*) => {
        $(
            impl SearchIndex for $t {
                #[inline]
                fn mid(lo: Self, hi: Self) -> Self {
                    (lo as $wide + (hi as $wide - lo as $wide) / 2) as $t
                }

                #[inline]
                fn succ(self) -> Self {
                    self + 1
                }
            }
        )*
    };
}

impl_search_index!(i32 => i64, i64 => i128, u32 => u64, u64 => u128, usize => u128);

fn check_bounds<I: SearchIndex>(from: I, to: I) -> Result<()> {
    if from > to {
        return Err(Error::InvalidArgument(format!(
            "from {from} is greater than to {to}"
        )));
    }
    Ok(())
}

/// First index in `[from, to)` where `pred` is false, assuming `pred` holds
/// on a prefix of the range and fails on the rest. Returns `to` if `pred`
/// never fails.
pub fn partition_point<I, P>(from: I, to: I, pred: P) -> Result<I>
where
    I: SearchIndex,
    P: FnMut(I) -> bool,
{
    check_bounds(from, to)?;
    Ok(partition_point_unchecked(from, to, pred))
}

pub(crate) fn partition_point_unchecked<I, P>(mut left: I, mut right: I, mut pred: P) -> I
where
    I: SearchIndex,
    P: FnMut(I) -> bool,
{
    while left < right {
        let mid = I::mid(left, right);
        if pred(mid) {
            left = mid.succ();
        } else {
            right = mid;
        }
    }
    left
}

// adoption from std crate; an inverted range is searched as if empty
pub fn binary_search_by<I, F>(mut left: I, mut right: I, mut f: F) -> std::result::Result<I, I>
where
    I: SearchIndex,
    F: FnMut(I) -> Ordering,
{
    while left < right {
        let mid = I::mid(left, right);
        match f(mid) {
            Ordering::Less => left = mid.succ(),
            Ordering::Greater => right = mid,
            Ordering::Equal => return Ok(mid),
        }
    }
    Err(left)
}

/// Real-valued partition point: shrinks `[left, right]` until it is at most
/// `eps` wide or `max_iter` halvings were spent, and returns the left end.
pub fn partition_point_f64<P>(
    mut left: f64,
    mut right: f64,
    eps: f64,
    mut max_iter: u32,
    mut pred: P,
) -> Result<f64>
where
    P: FnMut(f64) -> bool,
{
    check_interval(left, right, eps)?;
    while right - left > eps && max_iter > 0 {
        let mid = left + (right - left) / 2.0;
        if pred(mid) {
            left = mid;
        } else {
            right = mid;
        }
        max_iter -= 1;
    }
    Ok(left)
}

fn check_interval(left: f64, right: f64, eps: f64) -> Result<()> {
    if !left.is_finite() || !right.is_finite() {
        return Err(Error::InvalidArgument(format!(
            "interval [{left}, {right}] is not finite"
        )));
    }
    if left > right {
        return Err(Error::InvalidArgument(format!(
            "left {left} is greater than right {right}"
        )));
    }
    if eps.is_nan() || eps <= 0.0 {
        return Err(Error::InvalidArgument(format!("tolerance {eps} is not positive")));
    }
    Ok(())
}

/// Maximizer of a unimodal `f` on `[left, right]`, to within
/// [`TERNARY_SEARCH_EPS`]. Returns the point, not `f` of it.
pub fn ternary_search<F>(left: f64, right: f64, f: F) -> Result<f64>
where
    F: FnMut(f64) -> f64,
{
    ternary_search_with_eps(left, right, TERNARY_SEARCH_EPS, f)
}

pub fn ternary_search_with_eps<F>(mut left: f64, mut right: f64, eps: f64, mut f: F) -> Result<f64>
where
    F: FnMut(f64) -> f64,
{
    check_interval(left, right, eps)?;
    if left == right {
        return Ok(left);
    }

    let mut iterations = 0u32;
    while right - left >= eps {
        let third = (right - left) / 3.0;
        let (m1, m2) = (left + third, right - third);
        let (prev_left, prev_right) = (left, right);
        if f(m1) < f(m2) {
            left = m1;
        } else {
            right = m2;
        }
        iterations += 1;
        // out of float precision before reaching eps
        if left == prev_left && right == prev_right {
            break;
        }
    }
    log::trace!("ternary search converged after {iterations} iterations");
    Ok(left + (right - left) / 2.0)
}

/// Argmax of a unimodal `f` over the integers in `[left, right]`.
pub fn ternary_search_int<F, K>(mut left: i64, mut right: i64, mut f: F) -> Result<i64>
where
    K: Ord,
    F: FnMut(i64) -> K,
{
    check_bounds(left, right)?;
    while right as i128 - left as i128 > 3 {
        let third = ((right as i128 - left as i128) / 3) as i64;
        let (m1, m2) = (left + third, right - third);
        if f(m1) < f(m2) {
            left = m1;
        } else {
            right = m2;
        }
    }

    let mut best = left;
    let mut best_value = f(left);
    for x in (left..=right).skip(1) {
        let value = f(x);
        if value > best_value {
            best = x;
            best_value = value;
        }
    }
    Ok(best)
}
