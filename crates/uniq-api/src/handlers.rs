//! Request handlers.

pub mod health;
pub mod unikalize;

pub use health::*;
pub use unikalize::*;
