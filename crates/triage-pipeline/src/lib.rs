//! # triage-pipeline
//!
//! Orchestrates one triage run over the collaborator traits from
//! `triage-core`: fetch results, extract log ERROR blocks, cluster failures,
//! match clusters against the knowledge base, optionally explain clusters
//! and publish recommendations. Only the fetch stage can fail the run;
//! every later stage degrades per item.

pub mod comment;
pub mod engine;
pub mod log_extraction;
pub mod prompt;
pub mod stages;

pub use engine::TriagePipeline;
