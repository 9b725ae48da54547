//! Type definitions for salescope

mod error;
mod order;
mod period;

pub use error::*;
pub use order::*;
pub use period::*;
