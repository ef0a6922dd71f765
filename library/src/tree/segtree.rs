use std::fmt;

use crate::error::{Error, Result};

/// Range-query / point-update tree over an associative operation.
///
/// Nodes live in a 1-based implicit heap (`2i`, `2i + 1`) of `4n` slots.
/// Every internal node covering `[lo, hi]` holds `op(left, right)` where the
/// split point is `lo + (hi - lo) / 2`. No identity element is required:
/// partial results are combined only when both sides are present.
///
/// `op` must be associative. This is not checked; a non-associative `op`
/// gives meaningless (but memory safe) answers.
pub struct SegTree<T, F> {
    n: usize,
    sum: Vec<Option<T>>,
    op: F,
}

impl<T, F> SegTree<T, F>
where
    F: Fn(&T, &T) -> T,
{
    pub fn new<I>(iter: I, op: F) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let leaves: Vec<T> = iter.into_iter().collect();
        let n = leaves.len();
        let mut tree = Self {
            n,
            sum: (0..4 * n).map(|_| None).collect(),
            op,
        };
        if n > 0 {
            tree.build(1, 0, n - 1, &mut leaves.into_iter());
        }
        log::debug!("segment tree built over {n} elements");
        tree
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    fn build(&mut self, node: usize, lo: usize, hi: usize, leaves: &mut impl Iterator<Item = T>) {
        if lo == hi {
            self.sum[node] = leaves.next();
            return;
        }
        let mid = lo + (hi - lo) / 2;
        self.build(node << 1, lo, mid, leaves);
        self.build(node << 1 | 1, mid + 1, hi, leaves);
        self.pull(node);
    }

    fn pull(&mut self, node: usize) {
        // both children of an internal node are always built
        self.sum[node] = match (&self.sum[node << 1], &self.sum[node << 1 | 1]) {
            (Some(left), Some(right)) => Some((self.op)(left, right)),
            _ => None,
        };
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        if self.n == 0 {
            return Err(Error::EmptyStructure);
        }
        Error::check_index(end, self.n)?;
        if start > end {
            return Err(Error::InvalidArgument(format!(
                "start {start} is greater than end {end}"
            )));
        }
        Ok(())
    }

    /// Overwrites element `idx`, then recombines every ancestor of its leaf.
    pub fn set(&mut self, idx: usize, value: T) -> Result<()> {
        if self.n == 0 {
            return Err(Error::EmptyStructure);
        }
        Error::check_index(idx, self.n)?;
        self.set_rec(1, 0, self.n - 1, idx, value);
        Ok(())
    }

    fn set_rec(&mut self, node: usize, lo: usize, hi: usize, idx: usize, value: T) {
        if lo == hi {
            self.sum[node] = Some(value);
            return;
        }
        let mid = lo + (hi - lo) / 2;
        if idx <= mid {
            self.set_rec(node << 1, lo, mid, idx, value);
        } else {
            self.set_rec(node << 1 | 1, mid + 1, hi, idx, value);
        }
        self.pull(node);
    }

    fn leaves<'a>(&'a self, node: usize, lo: usize, hi: usize, out: &mut Vec<&'a T>) {
        if lo == hi {
            out.extend(self.sum[node].as_ref());
            return;
        }
        let mid = lo + (hi - lo) / 2;
        self.leaves(node << 1, lo, mid, out);
        self.leaves(node << 1 | 1, mid + 1, hi, out);
    }
}

impl<T, F> SegTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Combination of the elements in `[start, end]` (inclusive).
    pub fn get(&self, start: usize, end: usize) -> Result<T> {
        self.check_range(start, end)?;
        // a checked range is non-empty and inside [0, n), so every leaf it
        // covers is built and the query always yields a value
        self.query(1, 0, self.n - 1, start, end)
            .ok_or(Error::EmptyStructure)
    }

    #[inline]
    pub fn get_at(&self, idx: usize) -> Result<T> {
        self.get(idx, idx)
    }

    /// Like [`SegTree::get`], but any precondition violation yields `None`.
    pub fn get_or_none(&self, start: usize, end: usize) -> Option<T> {
        self.check_range(start, end).ok()?;
        self.query(1, 0, self.n - 1, start, end)
    }

    pub fn get_or_default(&self, start: usize, end: usize, default: T) -> T {
        self.get_or_none(start, end).unwrap_or(default)
    }

    /// Read-modify-write of a single element: `set(idx, f(&get_at(idx)))`.
    pub fn update(&mut self, idx: usize, f: impl FnOnce(&T) -> T) -> Result<()> {
        let current = self.get_at(idx)?;
        self.set(idx, f(&current))
    }

    fn query(&self, node: usize, lo: usize, hi: usize, start: usize, end: usize) -> Option<T> {
        if start > end {
            return None;
        }
        if start == lo && end == hi {
            return self.sum[node].clone();
        }
        let mid = lo + (hi - lo) / 2;
        let left = self.query(node << 1, lo, mid, start, end.min(mid));
        let right = self.query(node << 1 | 1, mid + 1, hi, start.max(mid + 1), end);
        match (left, right) {
            (Some(left), Some(right)) => Some((self.op)(&left, &right)),
            (left, None) => left,
            (None, right) => right,
        }
    }
}

impl<T, F> fmt::Debug for SegTree<T, F>
where
    T: fmt::Debug,
    F: Fn(&T, &T) -> T,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut leaves = Vec::with_capacity(self.n);
        if self.n > 0 {
            self.leaves(1, 0, self.n - 1, &mut leaves);
        }
        f.debug_struct("SegTree")
            .field("n", &self.n)
            .field("leaves", &leaves)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;

    fn gcd(a: u64, b: u64) -> u64 {
        if b == 0 {
            a
        } else {
            gcd(b, a % b)
        }
    }

    #[test]
    fn range_sum() {
        let mut tree = SegTree::new(vec![1, 2, 3, 4, 5], |a: &i64, b: &i64| a + b);
        assert_eq!(tree.get(0, 4), Ok(15));
        assert_eq!(tree.get(1, 3), Ok(9));
        tree.set(2, 10).unwrap();
        assert_eq!(tree.get(0, 4), Ok(22));
        assert_eq!(tree.get_at(2), Ok(10));
        assert_eq!(tree.get(0, 1), Ok(3));
        assert_eq!(tree.get(3, 4), Ok(9));
    }

    #[test]
    fn single_element() {
        let mut tree = SegTree::new([7], |a: &i32, b: &i32| *a.min(b));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(0, 0), Ok(7));
        tree.set(0, -3).unwrap();
        assert_eq!(tree.get_at(0), Ok(-3));
    }

    #[test]
    fn every_leaf_is_reachable() {
        let xs: Vec<u32> = (0..37).map(|i| i * 3 + 1).collect();
        let tree = SegTree::new(xs.clone(), |a: &u32, b: &u32| *a.max(b));
        for (i, &x) in xs.iter().enumerate() {
            assert_eq!(tree.get_at(i), Ok(x));
        }
    }

    #[test]
    fn min_max_gcd_or() {
        let xs = [12u64, 18, 30, 42, 7, 64];
        let min = SegTree::new(xs, |a: &u64, b: &u64| *a.min(b));
        let max = SegTree::new(xs, |a: &u64, b: &u64| *a.max(b));
        let g = SegTree::new(xs, |a: &u64, b: &u64| gcd(*a, *b));
        let or = SegTree::new(xs, |a: &u64, b: &u64| a | b);

        assert_eq!(min.get(0, 5), Ok(7));
        assert_eq!(max.get(0, 3), Ok(42));
        assert_eq!(g.get(0, 3), Ok(6));
        assert_eq!(g.get(0, 4), Ok(1));
        assert_eq!(or.get(4, 5), Ok(7 | 64));
    }

    #[test]
    fn non_commutative_concat_keeps_order() {
        let words = ["a", "b", "c", "d", "e", "f", "g"].map(String::from);
        let mut tree = SegTree::new(words, |a: &String, b: &String| format!("{a}{b}"));
        assert_eq!(tree.get(0, 6).unwrap(), "abcdefg");
        assert_eq!(tree.get(2, 5).unwrap(), "cdef");
        tree.update(3, |s| s.to_uppercase()).unwrap();
        assert_eq!(tree.get(1, 4).unwrap(), "bcDe");
    }

    #[test]
    fn update_applies_to_current_value() {
        let mut tree = SegTree::new(vec![1, 1, 1, 1], |a: &i32, b: &i32| a + b);
        tree.update(1, |x| x + 5).unwrap();
        tree.update(1, |x| x * 2).unwrap();
        assert_eq!(tree.get_at(1), Ok(12));
        assert_eq!(tree.get(0, 3), Ok(15));
    }

    #[test]
    fn precondition_errors() {
        let mut tree = SegTree::new(vec![1, 2, 3], |a: &i32, b: &i32| a + b);
        assert_eq!(tree.get(0, 3).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(tree.get(2, 1).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(tree.get_at(3).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(
            tree.set(3, 0),
            Err(Error::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(tree.get(0, 2), Ok(6));
    }

    #[test]
    fn empty_tree() {
        let mut tree = SegTree::new(Vec::<i32>::new(), |a: &i32, b: &i32| a + b);
        assert!(tree.is_empty());
        assert_eq!(tree.get(0, 0), Err(Error::EmptyStructure));
        assert_eq!(tree.set(0, 1), Err(Error::EmptyStructure));
        assert_eq!(tree.update(0, |x| *x), Err(Error::EmptyStructure));
        for (start, end) in [(0, 0), (0, 3), (2, 1)] {
            assert_eq!(tree.get_or_none(start, end), None);
            assert_eq!(tree.get_or_default(start, end, -1), -1);
        }
    }

    #[test]
    fn safe_queries() {
        let tree = SegTree::new(vec![4, 5, 6], |a: &i32, b: &i32| a * b);
        assert_eq!(tree.get_or_none(0, 2), Some(120));
        assert_eq!(tree.get_or_none(1, 3), None);
        assert_eq!(tree.get_or_none(2, 0), None);
        assert_eq!(tree.get_or_default(1, 1, 0), 5);
        assert_eq!(tree.get_or_default(0, 9, 0), 0);
    }

    #[test]
    fn every_checked_range_has_a_value() {
        let xs: Vec<i64> = (1..=13).collect();
        let tree = SegTree::new(xs.clone(), |a: &i64, b: &i64| a + b);
        for start in 0..xs.len() {
            for end in start..xs.len() {
                assert_eq!(tree.get(start, end), Ok(xs[start..=end].iter().sum()));
            }
        }
        assert_eq!(tree.get(0, 13).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(tree.get(5, 4).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn debug_lists_leaves() {
        let mut tree = SegTree::new(vec![3, 1, 2], |a: &i32, b: &i32| a + b);
        tree.set(1, 9).unwrap();
        assert_eq!(format!("{tree:?}"), "SegTree { n: 3, leaves: [3, 9, 2] }");
    }
}
