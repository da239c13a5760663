use crate::combinatorics::permutations::generate_permutations;
use crate::error::{ToolError, ToolResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_SAMPLE_SIZE: usize = 20;

/// Draws `count` elements uniformly from `population`, with replacement.
///
/// Every draw is independent, so the same element may appear several times
/// and `count` may exceed the population size.
pub fn sample_with_replacement<T: Clone>(
    population: &[T],
    count: usize,
    rng: &mut impl Rng,
) -> ToolResult<Vec<T>> {
    if population.is_empty() {
        return Err(ToolError::EmptyPopulation);
    }

    let picks = (0..count)
        .map(|_| population[rng.random_range(0..population.len())].clone())
        .collect();
    Ok(picks)
}

/// Generates every permutation of `word` and draws `count` of them.
pub fn sample_permutations(word: &str, count: usize, rng: &mut impl Rng) -> ToolResult<Vec<String>> {
    let permutations = generate_permutations(word)?;
    sample_with_replacement(&permutations, count, rng)
}

/// Seeded generator when a seed is given, OS entropy otherwise.
pub fn sampling_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn draws_exact_count_from_population() {
        let population = vec!["abc".to_string(), "bac".to_string(), "cab".to_string()];
        let mut rng = StdRng::seed_from_u64(7);
        let picks = sample_with_replacement(&population, DEFAULT_SAMPLE_SIZE, &mut rng).unwrap();
        assert_eq!(picks.len(), DEFAULT_SAMPLE_SIZE);
        assert!(picks.iter().all(|pick| population.contains(pick)));
    }

    #[test]
    fn single_element_population_repeats() {
        let mut rng = StdRng::seed_from_u64(1);
        let picks = sample_with_replacement(&["a"], 20, &mut rng).unwrap();
        assert_eq!(picks, vec!["a"; 20]);
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let population: Vec<u32> = (0..100).collect();
        let first =
            sample_with_replacement(&population, 20, &mut StdRng::seed_from_u64(0xB10C)).unwrap();
        let second =
            sample_with_replacement(&population, 20, &mut StdRng::seed_from_u64(0xB10C)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_population_is_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        let empty: [String; 0] = [];
        assert!(matches!(
            sample_with_replacement(&empty, 20, &mut rng),
            Err(ToolError::EmptyPopulation)
        ));
    }

    #[test]
    fn zero_count_returns_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(sample_with_replacement(&[1, 2], 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn permutation_sample_draws_from_generated_set() {
        let mut rng = sampling_rng(Some(11));
        let picks = sample_permutations("abc", DEFAULT_SAMPLE_SIZE, &mut rng).unwrap();
        let allowed: HashSet<&str> = ["abc", "acb", "bac", "bca", "cab", "cba"].into_iter().collect();
        assert_eq!(picks.len(), 20);
        assert!(picks.iter().all(|pick| allowed.contains(pick.as_str())));
    }

    #[test]
    fn permutation_sample_of_empty_word_fails_before_sampling() {
        let mut rng = sampling_rng(Some(11));
        assert!(matches!(
            sample_permutations("", 20, &mut rng),
            Err(ToolError::EmptyInput)
        ));
    }
}
