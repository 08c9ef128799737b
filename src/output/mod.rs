//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::print_score_report;
pub use formatters::{row_to_emoji, tile_line};
