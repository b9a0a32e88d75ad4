pub mod linkage;
pub mod union_find;

pub use linkage::{complete_linkage, flat_clusters, Merge};
