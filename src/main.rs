use std::{env, fs};

#[allow(unused_imports)]
use itertools::Itertools;

use basins::{basin_product, explore_basin, find_low_points, risk_sum, InsufficientBasins};
use grid::Heightmap;

mod basins;
mod grid;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut reversed_args: Vec<_> = args.iter().map(|x| x.as_str()).rev().collect();

    reversed_args
        .pop()
        .expect("Expected the executable name to be the first argument, but was missing");

    let part = reversed_args.pop().expect("part selector");
    let input_file = reversed_args.pop().expect("input file");
    let content = fs::read_to_string(input_file).unwrap();

    let heightmap = Heightmap::parse(content.as_str()).unwrap();

    match part {
        "a" => {
            let result = solve_part_a(&heightmap);
            println!("{}", result);
        }
        "b" => {
            let result = solve_part_b(&heightmap).unwrap();
            println!("{}", result);
        }
        _ => unreachable!("{}", part),
    }
}

fn solve_part_a(heightmap: &Heightmap) -> u64 {
    risk_sum(heightmap, &find_low_points(heightmap))
}

fn solve_part_b(heightmap: &Heightmap) -> Result<usize, InsufficientBasins> {
    let sizes = find_low_points(heightmap)
        .into_iter()
        .map(|low_point| explore_basin(heightmap, low_point).len())
        .collect();

    basin_product(sizes)
}
