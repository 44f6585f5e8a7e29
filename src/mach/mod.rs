/*!
## Rust Machine Module

This Rust module runs queued drills in small slices so a
front end can stay responsive to interrupts.

*/

mod runtime;

pub use runtime::Event;
pub use runtime::Runtime;

#[cfg(test)]
mod tests;
