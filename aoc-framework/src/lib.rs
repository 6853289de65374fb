//! Framework of traits and utilities for Advent of Code.
//!
//! A day's solution is split into an optional parse step ([`ParseData`]) and one or two parts
//! ([`Solution<PartOne>`] and [`Solution<PartTwo>`]). The [`runner`] module drives those steps
//! and reports results through an output handler, while the [`grid`] module provides the
//! rectangular cell container most puzzle inputs are read into.
//!
//! # Example
//!
//! A character grid already implements [`ParseData`], so it can be used directly as a solution's
//! input:
//!
//! ```
//! use aoc_framework::grid::Grid;
//! use aoc_framework::{DynamicResult, ParseData, PartOne, Solution};
//!
//! struct CountWalls;
//!
//! impl Solution<PartOne> for CountWalls {
//!     type Input = Grid<char>;
//!     type Output = usize;
//!
//!     fn solve(input: &Grid<char>) -> DynamicResult<usize> {
//!         Ok(input.count(|cell| *cell == '#'))
//!     }
//! }
//!
//! # fn main() -> DynamicResult<()> {
//! let grid = Grid::<char>::parse("#.#\n.#.\n")?;
//! assert_eq!(<CountWalls as Solution<PartOne>>::solve(&grid)?, 3);
//! # Ok(())
//! # }
//! ```
//!
//! Puzzle-specific cells are usually converted from the character grid while parsing:
//!
//! ```
//! use aoc_framework::grid::Grid;
//! use aoc_framework::{DynamicResult, ParseData};
//!
//! struct Heights(Grid<u32>);
//!
//! impl ParseData for Heights {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let chars = Grid::from_lines(input.lines())?;
//!         let heights = chars.try_map(|cell| cell.to_digit(10).ok_or("expected a digit"))?;
//!         Ok(Self(heights))
//!     }
//! }
//! ```

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod grid;
pub mod runner;

mod private {
    /// Sealing trait so only this crate can implement [`Part`][super::Part].
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`DynamicError`] as an error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// Identifies which part of a day's puzzle is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// A marker for the part a [`Solution<P>`] solves.
pub trait Part: private::Sealed {
    /// Get the related [`PartKind`] for this part.
    fn kind() -> PartKind;
}

/// Marks a [`Solution`] for part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Marks a [`Solution`] for part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A solution to one [`Part`] of a day's puzzle.
pub trait Solution<P: Part> {
    /// The input data type passed to the solution.
    ///
    /// Set to `str` to solve the raw input, or to a [`ParseData`] type to solve parsed input.
    type Input: ?Sized;

    /// The answer type.
    type Output: Display;

    /// Solve with the given input.
    ///
    /// # Errors
    ///
    /// Any error met while solving, like input the puzzle rules don't allow, is returned as a
    /// dynamically dispatched error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// Data created by parsing a puzzle's input string.
pub trait ParseData {
    /// Parse an input string into an instance of self.
    ///
    /// # Errors
    ///
    /// If parsing fails, the resulting error is returned as a dynamically dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}
