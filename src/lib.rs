#![crate_name = "combinatorial_iter"]

#![doc = include_str!("../README.md")]

mod common;
pub use common::{Enumerator, EnumerationError};

mod combination_iter;
pub use combination_iter::CombinationIter;

mod multiset_iter;
pub use multiset_iter::MultisetIter;

mod subset_iter;
pub use subset_iter::SubsetIter;

mod ordered_subset_iter;
pub use ordered_subset_iter::OrderedSubsetIter;

mod simple_permutation_iter;
pub use simple_permutation_iter::SimplePermutationIter;

mod permutation_iter;
pub use permutation_iter::PermutationIter;
