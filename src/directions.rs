// Sopagrama – word games for an educational app
// Copyright (C) 2026  Sopagrama authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::f32::consts::PI;
use super::coord::Coord;

/// The eight straight-line directions a word can run in, ordered
/// clockwise starting from due east so that the variant index matches
/// the direction's angle in units of 45°.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
    Direction::North,
    Direction::NorthEast,
];

impl Direction {
    // Unit steps with rows growing downwards.
    pub fn row_step(self) -> i32 {
        match self {
            Direction::East | Direction::West => 0,
            Direction::SouthEast | Direction::South | Direction::SouthWest =>
                1,
            Direction::NorthWest | Direction::North | Direction::NorthEast =>
                -1,
        }
    }

    pub fn col_step(self) -> i32 {
        match self {
            Direction::South | Direction::North => 0,
            Direction::East | Direction::SouthEast | Direction::NorthEast => 1,
            Direction::SouthWest | Direction::West | Direction::NorthWest =>
                -1,
        }
    }

}

/// Snaps an arbitrary drag delta to the nearest of the eight
/// directions. The tolerance window is 45° wide and centred on each
/// direction, so a slightly wobbly diagonal still reads as a diagonal.
/// Both deltas being zero has no direction and returns `None`.
pub fn snap(d_row: i32, d_col: i32) -> Option<Direction> {
    if d_row == 0 && d_col == 0 {
        return None;
    }

    let angle = (d_row as f32).atan2(d_col as f32);
    let sector = (angle / (PI / 4.0)).round() as i32;

    Some(ALL_DIRECTIONS[sector.rem_euclid(8) as usize])
}

// Going off the top or left of the grid wraps the coordinate around
// the integer maximum so that callers can detect invalid positions
// with a single comparison against the grid size.
pub fn step(coord: Coord, direction: Direction) -> Coord {
    Coord::new(
        coord.row.wrapping_add_signed(direction.row_step()),
        coord.col.wrapping_add_signed(direction.col_step()),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn step_all_directions() {
        let center = Coord::new(2, 2);

        assert_eq!(step(center, Direction::East), Coord::new(2, 3));
        assert_eq!(step(center, Direction::SouthEast), Coord::new(3, 3));
        assert_eq!(step(center, Direction::South), Coord::new(3, 2));
        assert_eq!(step(center, Direction::SouthWest), Coord::new(3, 1));
        assert_eq!(step(center, Direction::West), Coord::new(2, 1));
        assert_eq!(step(center, Direction::NorthWest), Coord::new(1, 1));
        assert_eq!(step(center, Direction::North), Coord::new(1, 2));
        assert_eq!(step(center, Direction::NorthEast), Coord::new(1, 3));
    }

    #[test]
    fn overflow() {
        assert_eq!(
            step(Coord::new(0, 0), Direction::West),
            Coord::new(0, u32::MAX),
        );
        assert_eq!(
            step(Coord::new(0, 0), Direction::North),
            Coord::new(u32::MAX, 0),
        );
        assert_eq!(
            step(Coord::new(0, 0), Direction::NorthWest),
            Coord::new(u32::MAX, u32::MAX),
        );
    }

    #[test]
    fn snap_exact_axes() {
        assert_eq!(snap(0, 4), Some(Direction::East));
        assert_eq!(snap(4, 4), Some(Direction::SouthEast));
        assert_eq!(snap(4, 0), Some(Direction::South));
        assert_eq!(snap(4, -4), Some(Direction::SouthWest));
        assert_eq!(snap(0, -4), Some(Direction::West));
        assert_eq!(snap(-4, -4), Some(Direction::NorthWest));
        assert_eq!(snap(-4, 0), Some(Direction::North));
        assert_eq!(snap(-4, 4), Some(Direction::NorthEast));
    }

    #[test]
    fn snap_tolerance() {
        // A small vertical tremor doesn't break a horizontal drag…
        assert_eq!(snap(1, 6), Some(Direction::East));
        assert_eq!(snap(-1, 6), Some(Direction::East));
        // …nor does a small wobble break a diagonal.
        assert_eq!(snap(5, 6), Some(Direction::SouthEast));
        assert_eq!(snap(6, 5), Some(Direction::SouthEast));
        assert_eq!(snap(-6, 1), Some(Direction::North));
        assert_eq!(snap(1, -6), Some(Direction::West));
        assert_eq!(snap(-1, -6), Some(Direction::West));
    }

    #[test]
    fn snap_no_movement() {
        assert_eq!(snap(0, 0), None);
    }
}
