use crate::util::Coord;

/// Cell count of a row-major buffer with the given exclusive bounds.
pub fn buffer_size(exclusive_bounds: &Coord) -> usize {
    exclusive_bounds[0] as usize * exclusive_bounds[1] as usize
}

/// Row-major linearization, column index fastest.
pub fn coord_to_linear(coord: &Coord, exclusive_bounds: &Coord) -> usize {
    debug_assert!(coord[0] >= 0 && coord[1] >= 0);
    debug_assert!(coord[0] < exclusive_bounds[0] && coord[1] < exclusive_bounds[1]);
    coord[0] as usize * exclusive_bounds[1] as usize + coord[1] as usize
}

pub fn linear_to_coord(linear_index: usize, exclusive_bounds: &Coord) -> Coord {
    debug_assert!(linear_index < buffer_size(exclusive_bounds));
    let width = exclusive_bounds[1] as usize;
    Coord::new((linear_index / width) as i32, (linear_index % width) as i32)
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn buffer_size_test() {
        {
            let bound = vector![5, 7];
            assert_eq!(buffer_size(&bound), 5 * 7);
        }

        {
            let bound = vector![1, 1];
            assert_eq!(buffer_size(&bound), 1);
        }
    }

    #[test]
    fn coord_to_linear_test() {
        {
            let coord = vector![5, 7];
            let bound = vector![20, 20];
            assert_eq!(coord_to_linear(&coord, &bound), 5 * 20 + 7);
        }

        {
            let coord = vector![0, 0];
            let bound = vector![12, 9];
            assert_eq!(coord_to_linear(&coord, &bound), 0);
        }

        {
            let coord = vector![11, 8];
            let bound = vector![12, 9];
            assert_eq!(coord_to_linear(&coord, &bound), 12 * 9 - 1);
        }
    }

    #[test]
    fn linear_to_coord_test() {
        {
            let bound = vector![10, 10];
            assert_eq!(linear_to_coord(67, &bound), vector![6, 7]);
        }

        {
            let bound = vector![4, 9];
            assert_eq!(linear_to_coord(0, &bound), vector![0, 0]);
        }

        {
            let bound = vector![7, 11];
            for linear_index in 0..buffer_size(&bound) {
                let coord = linear_to_coord(linear_index, &bound);
                assert_eq!(coord_to_linear(&coord, &bound), linear_index);
            }
        }
    }
}
