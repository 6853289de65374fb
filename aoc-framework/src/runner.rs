//! Types for running solutions and reporting their results.
//!
//! # Quick Start
//!
//! Annotate a structure or impl-block with the [`#[solution_runner]`][solution_runner] attribute:
//!
//! ```
//! # use aoc_framework::runner::solution_runner;
//! # use aoc_framework::grid::Grid;
//! # use aoc_framework::{DynamicResult, PartOne, Solution};
//! #
//! struct Day04;
//!
//! impl Solution<PartOne> for Day04 {
//!     type Input = Grid<char>;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(input: &Grid<char>) -> DynamicResult<usize> {
//! #        Ok(input.len())
//! #    }
//! }
//!
//! #[solution_runner(name = "Day 4", parsed = Grid<char>, part_one = Day04)]
//! struct Day04Runner;
//! ```
//!
//! The generated [`SolutionRunner::run`] steps a [`Runner`] through naming, parsing and solving.

use std::fmt::Display;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::{DynamicResult, ParseData, Part, PartKind, Solution};

// re-export procedural macro
pub use aoc_framework_macros::solution_runner;

/// Receives the events of running a solution, as feedback and results for the user.
pub trait OutputHandler {
    /// Called with the name of the solution, before anything else runs.
    fn solution_name(&mut self, name: &str);

    /// Called when the solution starts parsing input.
    fn parse_start(&mut self);

    /// Called when parsing input is finished, with the time taken if the run is timed.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// Called when a part starts.
    fn part_start(&mut self, part: PartKind);

    /// Called with the answer of a part, and the time taken if the run is timed.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Configuration for a single solution run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Measure how long parsing and each part takes.
    pub timed: bool,
}

/// Call a function, measuring its duration when `timed` is set.
fn call_measured<T>(timed: bool, function: impl FnOnce() -> T) -> (T, Option<Duration>) {
    if timed {
        let start = Instant::now();
        let result = function();
        (result, Some(start.elapsed()))
    } else {
        (function(), None)
    }
}

/// Steps a solution through its parse and part stages, reporting to an [`OutputHandler`].
pub struct Runner<'h> {
    handler: &'h mut dyn OutputHandler,
    options: RunOptions,
}

impl<'h> Runner<'h> {
    /// Create a runner for a solution named `name`, reporting the name to the handler.
    pub fn start(name: &str, handler: &'h mut dyn OutputHandler, options: RunOptions) -> Self {
        debug!(name, ?options, "starting solution");
        handler.solution_name(name);
        Self { handler, options }
    }

    /// Parse the input string into the solution's input data.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from parsing is propagated.
    pub fn parse<D: ParseData>(&mut self, input: &str) -> DynamicResult<D> {
        self.handler.parse_start();
        let (result, duration_opt) = call_measured(self.options.timed, || D::parse(input));
        let parsed = result?;
        debug!(?duration_opt, "parsed input");
        self.handler.parse_end(duration_opt);
        Ok(parsed)
    }

    /// Solve a part with the given input.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from the solution is propagated.
    pub fn part<S, P>(&mut self, input: &S::Input) -> DynamicResult<()>
    where
        P: Part,
        S: Solution<P>,
    {
        let part = P::kind();
        self.handler.part_start(part);
        let (result, duration_opt) = call_measured(self.options.timed, || S::solve(input));
        let output = result?;
        debug!(%part, %output, ?duration_opt, "solved part");
        self.handler.part_output(part, &output, duration_opt);
        Ok(())
    }
}

/// A solution that can be run from raw input.
///
/// The trait can be implemented with the [`solution_runner`] attribute macro.
pub trait SolutionRunner {
    /// Run the solution.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from parsing or solving is propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, options: RunOptions) -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::{PartOne, PartTwo};

    /// Records handler events as strings.
    #[derive(Default)]
    struct RecordingHandler {
        events: Vec<String>,
    }

    impl OutputHandler for RecordingHandler {
        fn solution_name(&mut self, name: &str) {
            self.events.push(format!("name {name}"));
        }

        fn parse_start(&mut self) {
            self.events.push("parse start".to_string());
        }

        fn parse_end(&mut self, duration_opt: Option<Duration>) {
            self.events.push(format!("parse end timed={}", duration_opt.is_some()));
        }

        fn part_start(&mut self, part: PartKind) {
            self.events.push(format!("{part} start"));
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            duration_opt: Option<Duration>,
        ) {
            self.events.push(format!(
                "{part} output {output} timed={}",
                duration_opt.is_some()
            ));
        }
    }

    struct CountCells;

    impl Solution<PartOne> for CountCells {
        type Input = Grid<char>;
        type Output = usize;

        fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
            Ok(input.len())
        }
    }

    impl Solution<PartTwo> for CountCells {
        type Input = Grid<char>;
        type Output = usize;

        fn solve(_input: &Self::Input) -> DynamicResult<Self::Output> {
            Err("no answer".into())
        }
    }

    #[test]
    fn runner_reports_events_in_order() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        let mut runner = Runner::start("Counting", &mut handler, RunOptions { timed: true });
        let grid = runner.parse::<Grid<char>>("ab\ncd\n")?;
        runner.part::<CountCells, PartOne>(&grid)?;
        assert_eq!(
            handler.events,
            vec![
                "name Counting",
                "parse start",
                "parse end timed=true",
                "Part 1 start",
                "Part 1 output 4 timed=true",
            ]
        );
        Ok(())
    }

    #[test]
    fn runner_propagates_parse_errors() {
        let mut handler = RecordingHandler::default();
        let mut runner = Runner::start("Counting", &mut handler, RunOptions::default());
        assert!(runner.parse::<Grid<char>>("ab\nc\n").is_err());
        assert_eq!(handler.events, vec!["name Counting", "parse start"]);
    }

    #[test]
    fn runner_propagates_part_errors() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        let mut runner = Runner::start("Failing", &mut handler, RunOptions::default());
        let grid = runner.parse::<Grid<char>>("..\n")?;
        runner.part::<CountCells, PartOne>(&grid)?;
        assert!(runner.part::<CountCells, PartTwo>(&grid).is_err());
        assert_eq!(
            handler.events.last().map(String::as_str),
            Some("Part 2 start")
        );
        Ok(())
    }
}
