//! Data models for the polls application.

mod choice;
mod question;

pub use choice::*;
pub use question::*;
