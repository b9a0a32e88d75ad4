//! # triage-clustering
//!
//! Groups failed test results by root cause: each failure becomes a
//! normalized document, documents are embedded with TF-IDF, and
//! complete-linkage agglomerative clustering is cut at
//! `1 - similarity_threshold`. Complete linkage bounds the distance between
//! every pair of members, so one cluster can honestly claim one root cause.

pub mod algorithms;
pub mod assembly;
pub mod distance;
pub mod document;
pub mod engine;

pub use engine::ClusteringEngine;
