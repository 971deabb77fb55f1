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

use std::ffi::OsString;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::ExitCode;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use sopagrama::generator::{Generate, RandomPlacer};
use sopagrama::grid::Grid;

#[derive(Parser)]
#[command(name = "build-puzzle")]
struct Cli {
    /// Word list file, one word per line. Blank lines and lines
    /// starting with '#' are skipped.
    #[arg(required = true, value_name = "WORDS")]
    words: OsString,
    #[arg(short, long, value_name = "SIZE", default_value_t = 12)]
    size: u32,
    /// Seed for the placement RNG, for reproducible grids
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    #[arg(short = 'H', long)]
    human_readable: bool,
}

#[derive(Serialize)]
struct PuzzleDocument<'a> {
    size: u32,
    grid: Vec<String>,
    words: &'a [String],
}

fn read_word_list<P: AsRef<Path>>(
    filename: P,
) -> Result<Vec<String>, std::io::Error> {
    let mut words = Vec::new();

    for line in BufReader::new(std::fs::File::open(filename)?).lines() {
        let line = line?;
        let line = line.trim();

        if !line.is_empty() && !line.starts_with('#') {
            words.push(line.to_string());
        }
    }

    Ok(words)
}

fn grid_rows(grid: &Grid) -> Vec<String> {
    (0..grid.size())
        .map(|row| {
            (0..grid.size())
                .map(|col| grid.at(row, col))
                .collect()
        })
        .collect()
}

fn print_human_readable(grid: &Grid, words: &[String]) {
    print!("{}", grid);

    println!();

    let mut words = words.iter().collect::<Vec<_>>();
    words.sort_unstable();

    for word in words.into_iter() {
        println!("{}", word);
    }
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let words = match read_word_list(&cli.words) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{}: {}", cli.words.to_string_lossy(), e);
            return ExitCode::FAILURE;
        },
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let grid = match RandomPlacer::default()
        .generate(&words, cli.size, &mut rng)
    {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    if cli.human_readable {
        print_human_readable(&grid, &words);
    } else {
        let document = PuzzleDocument {
            size: grid.size(),
            grid: grid_rows(&grid),
            words: &words,
        };

        match serde_json::to_string_pretty(&document) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}
