//! Pipeline Roles
//!
//! The three processes of a run, each talking only to the queue service:
//!
//! ```text
//! Producer --tasks--> [task queue] --> Worker pool --results--> [result queue] --> Aggregator
//!     \_____________________________ TOTAL_SECTIONS ____________/
//! ```
//!
//! ## Submodules
//! - **`producer`**: sectionizes a document and publishes the work.
//! - **`worker`**: the stateless analysis loops.
//! - **`aggregator`**: the single collection loop that ends in the reports.
//! - **`local`**: all three roles in one process over an in-memory queue.

pub mod aggregator;
pub mod local;
pub mod producer;
pub mod worker;

pub use aggregator::Aggregator;
pub use local::run_local;
pub use producer::Producer;
pub use worker::{Poll, WorkerPool};
