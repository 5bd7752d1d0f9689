//! Per-file download requests and their terminal outcomes.
//!
//! - `request` - The `FileRequest` describing one file to fetch
//! - `outcome` - `TransferOutcome` per request and the aggregate `BatchReport`

pub mod outcome;
pub mod request;

pub use outcome::{BatchReport, Status, TransferOutcome};
pub use request::FileRequest;
