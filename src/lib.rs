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

pub mod coord;
pub mod directions;
pub mod generator;
pub mod grid;
pub mod palabreta;
pub mod puzzle;
pub mod quiz;
pub mod repository;
pub mod session;

pub use coord::Coord;
pub use generator::{Generate, RandomPlacer};
pub use grid::Grid;
pub use palabreta::Palabreta;
pub use puzzle::Puzzle;
pub use quiz::Attempt;
pub use repository::{MemoryRepository, Repository};
pub use session::Session;
