use std::collections::HashSet;

use itertools::Itertools;
use kth::SliceExtKth;
use thiserror::Error;

use crate::grid::Heightmap;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("need at least 3 basins to rank, found {0}")]
pub struct InsufficientBasins(pub usize);

pub fn find_low_points(map: &Heightmap) -> Vec<(usize, usize)> {
    let (rows, cols) = map.dimensions();

    (0..rows)
        .cartesian_product(0..cols)
        .filter(|&location| {
            let height = map.height(location);
            map.neighbors(location)
                .all(|neighbor| height < map.height(neighbor))
        })
        .collect()
}

pub fn explore_basin(map: &Heightmap, low_point: (usize, usize)) -> HashSet<(usize, usize)> {
    let mut basin: HashSet<(usize, usize)> = HashSet::new();
    let mut stack = vec![low_point];

    while let Some(location) = stack.pop() {
        basin.insert(location);

        let height = map.height(location);
        for neighbor in map.neighbors(location) {
            // basins grow strictly uphill, and height 9 never joins a basin
            let neighbor_height = map.height(neighbor);
            if height < neighbor_height && neighbor_height != 9 && !basin.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    basin
}

pub fn risk_sum(map: &Heightmap, low_points: &[(usize, usize)]) -> u64 {
    low_points
        .iter()
        .map(|&location| u64::from(map.height(location)) + 1)
        .sum()
}

pub fn basin_product(mut sizes: Vec<usize>) -> Result<usize, InsufficientBasins> {
    if sizes.len() < 3 {
        return Err(InsufficientBasins(sizes.len()));
    }

    // partitioning at len - 3 leaves the three largest sizes in the tail
    let pivot = sizes.len() - 3;
    sizes.partition_by_kth(pivot);

    Ok(sizes[pivot..].iter().copied().product())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;

    use super::{basin_product, explore_basin, find_low_points, risk_sum, InsufficientBasins};
    use crate::grid::{Heightmap, EXAMPLE};

    #[test]
    fn test_example_low_points_in_scan_order() {
        let map = Heightmap::parse(EXAMPLE).unwrap();
        let low_points = find_low_points(&map);

        assert_eq!(low_points, vec![(0, 1), (0, 9), (2, 2), (4, 6)]);

        let heights: Vec<u8> = low_points.iter().map(|&lp| map.height(lp)).collect();
        assert_eq!(heights, vec![1, 0, 5, 5]);
    }

    #[test]
    fn test_example_risk_sum() {
        let map = Heightmap::parse(EXAMPLE).unwrap();
        assert_eq!(risk_sum(&map, &find_low_points(&map)), 15);
    }

    #[test]
    fn test_example_basin_sizes_in_scan_order() {
        let map = Heightmap::parse(EXAMPLE).unwrap();
        let sizes: Vec<usize> = find_low_points(&map)
            .into_iter()
            .map(|low_point| explore_basin(&map, low_point).len())
            .collect();

        assert_eq!(sizes, vec![3, 9, 14, 9]);
    }

    #[test]
    fn test_top_left_basin_membership() {
        let map = Heightmap::parse(EXAMPLE).unwrap();
        let basin = explore_basin(&map, (0, 1));

        let expected: HashSet<(usize, usize)> = [(0, 0), (0, 1), (1, 0)].into_iter().collect();
        assert_eq!(basin, expected);
    }

    #[test]
    fn test_each_basin_contains_its_low_point() {
        let map = Heightmap::parse(EXAMPLE).unwrap();

        for low_point in find_low_points(&map) {
            let basin = explore_basin(&map, low_point);
            assert!(basin.contains(&low_point), "{:?}", low_point);
        }
    }

    #[test]
    fn test_example_basin_product() {
        assert_eq!(basin_product(vec![3, 9, 14, 9]), Ok(1134));
    }

    #[test]
    fn test_basin_product_ignores_input_order() {
        let sizes = [3usize, 9, 14, 9];

        for permutation in sizes.iter().copied().permutations(sizes.len()) {
            assert_eq!(basin_product(permutation), Ok(1134));
        }
    }

    #[test]
    fn test_basin_product_needs_three_basins() {
        assert_eq!(basin_product(vec![]), Err(InsufficientBasins(0)));
        assert_eq!(basin_product(vec![7]), Err(InsufficientBasins(1)));
        assert_eq!(basin_product(vec![7, 2]), Err(InsufficientBasins(2)));
        assert_eq!(basin_product(vec![7, 2, 5]), Ok(70));
    }

    #[test]
    fn test_single_cell_grid() {
        let map = Heightmap::parse("5").unwrap();
        let low_points = find_low_points(&map);

        assert_eq!(low_points, vec![(0, 0)]);
        assert_eq!(risk_sum(&map, &low_points), 6);
        assert_eq!(explore_basin(&map, (0, 0)).len(), 1);
    }

    #[test]
    fn test_all_nines_grid_has_no_low_points() {
        let map = Heightmap::parse("999\n999").unwrap();
        let low_points = find_low_points(&map);

        assert!(low_points.is_empty());
        assert_eq!(risk_sum(&map, &low_points), 0);
    }
}
