use std::fmt::Display;

use aoc_framework::grid::Grid;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use tracing::debug;

#[solution_runner(
    name = "Day 4: Printing Department",
    parsed = PaperGrid,
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2025<4> {}

/*
Input is a character grid of the printing department floor: `@` for a roll of paper, `.` for empty
floor.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Roll,
    /// A roll a forklift can reach.
    AccessibleRoll,
}

impl Cell {
    fn is_roll(self) -> bool {
        matches!(self, Self::Roll | Self::AccessibleRoll)
    }
}

#[derive(thiserror::Error, Debug)]
#[error("invalid character in grid: {0:?}")]
struct InvalidCell(char);

impl TryFrom<char> for Cell {
    type Error = InvalidCell;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Self::Empty),
            '@' => Ok(Self::Roll),
            'x' => Ok(Self::AccessibleRoll),
            _ => Err(InvalidCell(value)),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ch = match self {
            Self::Empty => '.',
            Self::Roll => '@',
            Self::AccessibleRoll => 'x',
        };
        write!(f, "{ch}")
    }
}

#[derive(Debug)]
struct PaperGrid(Grid<Cell>);

impl ParseData for PaperGrid {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let chars = Grid::from_lines(input.lines())?;
        let cells = chars.try_map(|ch| Cell::try_from(*ch))?;
        debug!("paper grid: {cells}");
        Ok(Self(cells))
    }
}

/*
A forklift can access a roll of paper if fewer than four of the eight positions around it hold
rolls.

For part 1, count the rolls forklifts can access.
*/

/// The number of surrounding rolls that blocks forklift access.
const BLOCKING_NEIGHBOR_ROLLS: usize = 4;

/// Create a copy of the grid with every accessible roll marked.
fn mark_accessible(grid: &Grid<Cell>) -> DynamicResult<Grid<Cell>> {
    let mut marked = grid.clone();
    for (pos, cell) in grid.positions() {
        if !cell.is_roll() {
            continue;
        }

        let neighbor_rolls = grid
            .neighbors(pos.row, pos.col)
            .filter(|(_, neighbor)| neighbor.is_roll())
            .count();
        if neighbor_rolls < BLOCKING_NEIGHBOR_ROLLS {
            marked.set(pos.row, pos.col, Cell::AccessibleRoll)?;
        }
    }
    Ok(marked)
}

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = PaperGrid;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let marked = mark_accessible(&input.0)?;
        debug!("accessible rolls: {marked}");
        Ok(marked.count(|cell| *cell == Cell::AccessibleRoll))
    }
}

/*
Once a roll is accessed it can be removed, which may open access to more rolls.

For part 2, keep removing every accessible roll until none are left accessible, and count the total
number of rolls removed.
*/

#[derive(thiserror::Error, Debug)]
#[error("total of removed rolls overflowed")]
struct RemovedRollsOverflow;

impl Solution<PartTwo> for Day04 {
    type Input = PaperGrid;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut current = input.0.clone();
        let mut removed_per_sweep = Vec::new();

        loop {
            let marked = mark_accessible(&current)?;
            let accessible = marked.count(|cell| *cell == Cell::AccessibleRoll);
            if accessible == 0 {
                break;
            }

            debug!(sweep = removed_per_sweep.len(), accessible, "removing rolls");
            removed_per_sweep.push(accessible);
            current = marked.map(|cell| match cell {
                Cell::AccessibleRoll => Cell::Empty,
                other => *other,
            });
        }

        removed_per_sweep
            .into_iter()
            .checked_sum()
            .ok_or_else(|| RemovedRollsOverflow.into())
    }
}
