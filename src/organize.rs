//! The two interactive passes.
//!
//! The file pass renames tracks and returns the aggregates it collected; the
//! folder pass consumes them to name the album folder.

mod aggregate;
mod file_pass;
mod folder_pass;
mod rename;

pub use aggregate::AggregateState;
pub use file_pass::run_file_pass;
pub use folder_pass::run_folder_pass;
