pub mod multiset;

pub use multiset::{Iter, Multiset};
