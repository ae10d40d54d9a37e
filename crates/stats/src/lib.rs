//! Race statistics engine
//!
//! Pure, deterministic aggregation over a race list plus the display
//! classification and formatting helpers the preview layer needs. No
//! state, no I/O; every function here is a read-only query.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod format;
pub mod grade;
pub mod totals;

pub use format::{format_fans, format_prize, group_thousands};
pub use grade::{GradeClass, RankClass};
pub use totals::{RaceTotals, compute_totals};
