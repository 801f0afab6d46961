pub mod api_utils;
pub mod charts;
pub mod format;
pub mod page_frame;
