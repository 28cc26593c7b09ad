//! Request handlers.
//!
//! `polls` contains the public HTML pages; `admin` is the JSON API used to
//! seed questions and choices.

mod admin;
mod polls;

pub use admin::*;
pub use polls::*;
