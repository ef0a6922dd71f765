use std::cmp::Ordering;

use crate::binary_search::partition_point_unchecked;
use crate::error::{Error, Result};

/// Lower / upper bound search over sorted slices, built on
/// [`partition_point`](crate::binary_search::partition_point).
///
/// `lower_bound*` is the first index whose element is not less than the
/// target, `upper_bound*` the first whose element is greater. The `_by`
/// forms take a three-way comparison of an element against the target, as
/// [`slice::binary_search_by`] does.
pub trait SliceExt<T> {
    fn as_slice(&self) -> &[T];

    fn lower_bound_by(&self, mut f: impl FnMut(&T) -> Ordering) -> usize {
        let xs = self.as_slice();
        partition_point_unchecked(0, xs.len(), |i| f(&xs[i]) == Ordering::Less)
    }
    fn upper_bound_by(&self, mut f: impl FnMut(&T) -> Ordering) -> usize {
        let xs = self.as_slice();
        partition_point_unchecked(0, xs.len(), |i| f(&xs[i]) != Ordering::Greater)
    }

    fn lower_bound(&self, target: &T) -> usize
    where
        T: Ord,
    {
        self.lower_bound_by(|x| x.cmp(target))
    }
    fn upper_bound(&self, target: &T) -> usize
    where
        T: Ord,
    {
        self.upper_bound_by(|x| x.cmp(target))
    }

    fn lower_bound_with(&self, target: &T, mut cmp: impl FnMut(&T, &T) -> Ordering) -> usize {
        self.lower_bound_by(|x| cmp(x, target))
    }
    fn upper_bound_with(&self, target: &T, mut cmp: impl FnMut(&T, &T) -> Ordering) -> usize {
        self.upper_bound_by(|x| cmp(x, target))
    }

    fn lower_bound_by_key<K: Ord>(&self, key: &K, mut f: impl FnMut(&T) -> K) -> usize {
        self.lower_bound_by(|x| f(x).cmp(key))
    }
    fn upper_bound_by_key<K: Ord>(&self, key: &K, mut f: impl FnMut(&T) -> K) -> usize {
        self.upper_bound_by(|x| f(x).cmp(key))
    }

    /// [`SliceExt::lower_bound_by`] restricted to `[from, to)`.
    fn lower_bound_by_in(
        &self,
        from: usize,
        to: usize,
        mut f: impl FnMut(&T) -> Ordering,
    ) -> Result<usize> {
        let xs = self.as_slice();
        check_subrange(from, to, xs.len())?;
        Ok(partition_point_unchecked(from, to, |i| {
            f(&xs[i]) == Ordering::Less
        }))
    }
    fn upper_bound_by_in(
        &self,
        from: usize,
        to: usize,
        mut f: impl FnMut(&T) -> Ordering,
    ) -> Result<usize> {
        let xs = self.as_slice();
        check_subrange(from, to, xs.len())?;
        Ok(partition_point_unchecked(from, to, |i| {
            f(&xs[i]) != Ordering::Greater
        }))
    }

    fn lower_bound_in(&self, from: usize, to: usize, target: &T) -> Result<usize>
    where
        T: Ord,
    {
        self.lower_bound_by_in(from, to, |x| x.cmp(target))
    }
    fn upper_bound_in(&self, from: usize, to: usize, target: &T) -> Result<usize>
    where
        T: Ord,
    {
        self.upper_bound_by_in(from, to, |x| x.cmp(target))
    }
}

impl<T> SliceExt<T> for [T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}

fn check_subrange(from: usize, to: usize, len: usize) -> Result<()> {
    if from > to {
        return Err(Error::InvalidArgument(format!(
            "from index {from} is greater than to index {to}"
        )));
    }
    if to > len {
        return Err(Error::OutOfRange { index: to, len });
    }
    Ok(())
}
