//! Recursive line and file counts for a directory tree, with name-based exclusions.

pub mod app;

pub use app::config::load_exclusions;
pub use app::error::ScanError;
pub use app::formatter::print_stats;
pub use app::models::{ExclusionSet, StatsNode};
pub use app::scanner::build_stats;
