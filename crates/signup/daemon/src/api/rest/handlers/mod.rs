//! API request handlers

mod activities;
mod health;

pub use activities::*;
pub use health::*;
