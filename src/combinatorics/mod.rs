pub mod permutations;
pub mod sampling;

pub use permutations::{for_each_permutation, generate_permutations, permutation_count};
pub use sampling::{sample_permutations, sample_with_replacement, sampling_rng, DEFAULT_SAMPLE_SIZE};
