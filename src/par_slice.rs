use num_traits::Num;
use rayon::prelude::*;

/// Fills a slice with one value across rayon tasks. `chunk_size` is
/// in elements; grid callers hand whole padded rows per task.
pub fn fill<NumType: Num + Copy + Send + Sync>(
    a_slice: &mut [NumType],
    value: NumType,
    chunk_size: usize,
) {
    a_slice
        .par_chunks_mut(chunk_size.max(1))
        .for_each(|a_chunk: &mut [NumType]| {
            for a in a_chunk {
                *a = value;
            }
        });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn fill_test() {
        {
            let mut a = vec![0.0; 48];
            fill(&mut a, 250.0, 12);
            for v in a {
                assert_eq!(v, 250.0);
            }
        }

        {
            // Chunk size larger than the slice still covers it.
            let mut a: Vec<i32> = (0..17).collect();
            fill(&mut a, -3, 64);
            for v in a {
                assert_eq!(v, -3);
            }
        }

        {
            // Zero chunk size is bumped to one element per task.
            let mut a = vec![1u64, 2, 3];
            fill(&mut a, 9, 0);
            assert_eq!(a, vec![9, 9, 9]);
        }
    }
}
