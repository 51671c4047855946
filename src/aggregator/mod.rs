//! Aggregator Core Module
//!
//! Merges per-section results into a single corpus-level report.
//!
//! ## Responsibilities
//! - **Completion tracking**: expected vs. received section count, independent of arrival order.
//! - **Merging**: word totals, top-word frequencies, sentence rankings, sentiment.
//! - **Reporting**: rendering and writing the three report files once complete.
//!
//! ## Submodules
//! - **`state`**: the `CorpusState` state machine.
//! - **`tally`**: order-independent word frequency merging.
//! - **`report`**: the final `CorpusReport` and its writer.

pub mod report;
pub mod state;
pub mod tally;

pub use report::{CorpusReport, ReportWriter, SentimentSummary};
pub use state::{Applied, CorpusState, Phase};
pub use tally::WordTally;
