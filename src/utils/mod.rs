mod format_utils;
mod time_utils;

pub use format_utils::{format_axis_value, format_large_numbers, format_value};
pub use time_utils::TimeUtils;
