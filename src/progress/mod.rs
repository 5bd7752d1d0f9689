//! Progress bar styling and display management.
//!
//! - `style` - Templates and options for the main and per-file bars
//! - `display` - The `ProgressDisplay` coordinating the bars of a batch

pub mod display;
pub mod style;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
