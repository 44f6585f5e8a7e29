//! # For-Loop Drills
//!
//! Four beginner exercises in counted loops: a number range, a sum of
//! even numbers, the characters of a string, and a multiplication table.
//!
//! Install with `cargo install for-loop-drills` and run `drills`.
//! With no arguments every drill runs once, in order.
//! ```text
//! Iteration is: 1
//! ...
//! Sum of even numbers is: 2550
//! J
//! ...
//! 5 * 10 = 50
//! ```
//!
//! The library runs the same drills without a terminal.
//! ```
//! use drills::lang::Drill;
//! let lines = Drill::EVEN_SUM.lines().unwrap();
//! assert_eq!(lines, vec!["Sum of even numbers is: 2550"]);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod lang;
pub mod mach;

#[doc(hidden)]
pub mod term;
