use std::collections::{BTreeSet, HashMap, HashSet};
use std::num::TryFromIntError;

use aoc_framework::grid::{Grid, GridCellPos};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use tracing::debug;

#[solution_runner(
    name = "Day 7: Laboratories",
    parsed = Manifold,
    part_one = Day07,
    part_two = Day07
)]
impl super::AdventOfCode2025<7> {}

/*
Input is a character grid of a tachyon manifold: `S` for where the beam enters, `^` for splitters,
`.` for empty space. The beam entry also acts as empty space.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Splitter,
}

/// A tachyon manifold with its beam entry position.
#[derive(Debug)]
struct Manifold {
    grid: Grid<Cell>,
    start: GridCellPos,
}

#[derive(thiserror::Error, Debug)]
enum ParseManifoldError {
    #[error("invalid character in grid: {0:?}")]
    InvalidChar(char),

    #[error("failed to find a start point")]
    MissingStart,

    #[error("found another start point after {first}: {second}")]
    MultipleStarts {
        first: GridCellPos,
        second: GridCellPos,
    },
}

impl ParseData for Manifold {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let chars = Grid::from_lines(input.lines())?;

        let start = chars
            .find_pos(|_, ch| *ch == 'S')
            .ok_or(ParseManifoldError::MissingStart)?;
        let start_index = chars.coord_to_index(start.row, start.col)?;
        if let Some(second) = chars.find_pos(|index, ch| index > start_index && *ch == 'S') {
            return Err(ParseManifoldError::MultipleStarts {
                first: start,
                second,
            }
            .into());
        }

        let grid = chars.try_map(|ch| match ch {
            '.' | 'S' => Ok(Cell::Empty),
            '^' => Ok(Cell::Splitter),
            _ => Err(ParseManifoldError::InvalidChar(*ch)),
        })?;

        Ok(Self { grid, start })
    }
}

/*
The beam moves down from the start. When it reaches a splitter the beam stops, and two new beams
continue down from the positions immediately left and right of the splitter. Beams sharing a
column merge into one.

For part 1, count how many splitters the beam is split by.
*/

struct Day07;

impl Manifold {
    fn count_splits(&self) -> Result<usize, TryFromIntError> {
        let height = isize::try_from(self.grid.height())?;
        let mut beam_cols = BTreeSet::from([self.start.col]);
        let mut splitters_hit = HashSet::new();

        for row in self.start.row..height {
            let mut next_cols = BTreeSet::new();
            for col in beam_cols {
                match self.grid.get(row, col) {
                    Some(Cell::Splitter) => {
                        splitters_hit.insert(GridCellPos::new(row, col));
                        next_cols.insert(col - 1);
                        next_cols.insert(col + 1);
                    }
                    Some(Cell::Empty) => {
                        next_cols.insert(col);
                    }
                    None => {} // beam left through a side of the manifold
                }
            }
            debug!(row, beams = next_cols.len(), "beams below row");
            beam_cols = next_cols;
        }

        Ok(splitters_hit.len())
    }
}

impl Solution<PartOne> for Day07 {
    type Input = Manifold;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.count_splits()?)
    }
}

/*
The manifold is quantum: a single particle takes both paths at every splitter, splitting the
timeline in two each time.

For part 2, count the timelines the particle ends up in. A timeline ends when its beam leaves the
manifold, through the bottom or a side.
*/

#[derive(thiserror::Error, Debug)]
#[error("timeline count overflowed")]
struct TimelineOverflow;

impl Manifold {
    /// Count the timelines of a beam travelling down from `pos`, memoized by start position.
    fn count_timelines(
        &self,
        pos: GridCellPos,
        memo: &mut HashMap<GridCellPos, u64>,
    ) -> Result<u64, TimelineOverflow> {
        if let Some(&count) = memo.get(&pos) {
            return Ok(count);
        }

        let mut row = pos.row;
        let count = loop {
            match self.grid.get(row, pos.col) {
                Some(Cell::Empty) => row += 1,
                Some(Cell::Splitter) => {
                    let left = self.count_timelines(GridCellPos::new(row, pos.col - 1), memo)?;
                    let right = self.count_timelines(GridCellPos::new(row, pos.col + 1), memo)?;
                    break left.checked_add(right).ok_or(TimelineOverflow)?;
                }
                None => break 1,
            }
        };

        memo.insert(pos, count);
        Ok(count)
    }
}

impl Solution<PartTwo> for Day07 {
    type Input = Manifold;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut memo = HashMap::new();
        let timelines = input.count_timelines(input.start, &mut memo)?;
        debug!(memoized = memo.len(), timelines, "counted timelines");
        Ok(timelines)
    }
}
