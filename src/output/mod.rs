pub mod formatter;

pub use formatter::{format_breakdown, format_final_message, should_use_colors};
