//! Pipeline stages.

pub mod fail_on_error;
pub mod format;
pub mod lint;
