//! Sectionizer Module
//!
//! Turns a raw source document into the units of distributed work.
//!
//! ## Workflow
//! 1. **Join**: Non-empty input lines are concatenated into one logical text.
//! 2. **Scan**: The text is cut into sentences at `.`, `!` and `?` (terminator inclusive).
//! 3. **Group**: Consecutive sentences are packed into fixed-size `Section`s.
//!
//! The sentence scanner is shared with the analyzer's sentence ranking so both
//! sides agree on what a sentence is.

pub mod splitter;

pub use splitter::{sentences, split};

#[cfg(test)]
mod tests;
