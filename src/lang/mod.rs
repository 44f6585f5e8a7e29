/*!
# Rust Language Module

This Rust module defines the loop drills and the errors they can raise.

*/

#[macro_use]
mod error;
mod drill;
mod frame;

pub use drill::Drill;
pub use error::Error;
pub use error::ErrorCode;
pub use frame::Frame;
pub use frame::Step;
