mod calendar;
mod error;
pub mod theme;
pub use crate::calendar::*;
pub use crate::error::InvalidCalendarArgument;
