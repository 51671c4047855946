//! Distributed Text-Analytics Pipeline Library
//!
//! This library crate defines the modules shared by every role of the pipeline.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! A producer splits a document into sections, workers analyze sections in
//! parallel, and an aggregator merges their results into corpus reports. The
//! roles only talk through two named queues.
//!
//! - **`sectionizer`**: Sentence scanning and grouping of sentences into numbered sections.
//! - **`codec`**: Message types and their two wire encodings (tagged JSON and the
//!   legacy pipe-delimited records).
//! - **`analyzer`**: Per-section word counting, top words, lexicon sentiment,
//!   sentence ranking and name redaction.
//! - **`aggregator`**: The corpus state machine, word tally merging and report rendering.
//! - **`queue`**: The queue service abstraction with Redis and in-memory backends.
//! - **`roles`**: Producer, worker pool, aggregator loop and the single-process runner.
//! - **`cli`**, **`config`**, **`error`**: Command line, runtime settings and the error type.

pub mod aggregator;
pub mod analyzer;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod queue;
pub mod roles;
pub mod sectionizer;
