//! Reusable primitives for competitive programming: a segment tree over an
//! arbitrary associative operation, union-find, partition point and bound
//! search, ternary search, and the KMP prefix function.

pub mod binary_search;
pub mod counter;
pub mod dset;
pub mod error;
pub mod slice_utils;
pub mod string;
pub mod tree;

pub use binary_search::{
    binary_search_by, partition_point, partition_point_f64, ternary_search,
    ternary_search_int, ternary_search_with_eps, SearchIndex, TERNARY_SEARCH_EPS,
};
pub use counter::{decrement, increment, Counter};
pub use dset::DisjointSet;
pub use error::{Error, ErrorKind, Result};
pub use slice_utils::SliceExt;
pub use string::kmp::{
    all_indices_of, kmp_matches, prefix_function, PrefixFunction, DEFAULT_DELIMITER,
};
pub use tree::segtree::SegTree;
