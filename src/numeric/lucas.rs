use crate::numeric::memo::Memo;
use num_bigint::BigUint;

/// Memoized Lucas sequence: `L(0) = 2`, `L(1) = 1`, `L(n) = L(n-1) + L(n-2)`.
///
/// The cache lives as long as the value, so repeated requests are lookups.
#[derive(Debug, Default)]
pub struct LucasNumbers {
    memo: Memo<u64, BigUint>,
    highest: Option<u64>,
}

impl LucasNumbers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `L(n)`.
    ///
    /// Indices are filled bottom-up from the highest cached one, so every
    /// recursive step below finds both predecessors already cached and the
    /// call depth stays constant whatever `n` is.
    pub fn get(&mut self, n: u64) -> BigUint {
        let start = self.highest.map_or(0, |highest| highest + 1);
        if start <= n {
            for index in start..=n {
                lucas_recursive(&mut self.memo, index);
            }
            self.highest = Some(n);
            tracing::debug!(from = start, to = n, cached = self.memo.len(), "extended lucas cache");
        }
        lucas_recursive(&mut self.memo, n)
    }

    pub fn cached(&self) -> usize {
        self.memo.len()
    }

    pub fn cache_hits(&self) -> u64 {
        self.memo.hits()
    }

    pub fn cache_misses(&self) -> u64 {
        self.memo.misses()
    }
}

fn lucas_recursive(memo: &mut Memo<u64, BigUint>, n: u64) -> BigUint {
    memo.call(n, |memo, &n| match n {
        0 => BigUint::from(2u32),
        1 => BigUint::from(1u32),
        _ => lucas_recursive(memo, n - 1) + lucas_recursive(memo, n - 2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fibonacci(n: u64) -> BigUint {
        let (mut a, mut b) = (BigUint::from(0u32), BigUint::from(1u32));
        for _ in 0..n {
            let next = &a + &b;
            a = b;
            b = next;
        }
        a
    }

    #[test]
    fn first_terms_match_known_sequence() {
        let mut lucas = LucasNumbers::new();
        let terms: Vec<BigUint> = (0..10).map(|n| lucas.get(n)).collect();
        let expected: Vec<BigUint> = [2u32, 1, 3, 4, 7, 11, 18, 29, 47, 76]
            .into_iter()
            .map(BigUint::from)
            .collect();
        assert_eq!(terms, expected);
    }

    #[test]
    fn large_index_matches_fibonacci_identity() {
        let mut lucas = LucasNumbers::new();
        for n in [50u64, 200, 1_000] {
            assert_eq!(lucas.get(n), fibonacci(n - 1) + fibonacci(n + 1), "L({n})");
        }
    }

    #[test]
    fn smaller_index_after_larger_is_a_cache_hit() {
        let mut lucas = LucasNumbers::new();
        lucas.get(300);
        let cached = lucas.cached();
        let hits_before = lucas.cache_hits();
        assert_eq!(lucas.get(120), fibonacci(119) + fibonacci(121));
        assert_eq!(lucas.cached(), cached);
        assert_eq!(lucas.cache_hits(), hits_before + 1);
        assert_eq!(lucas.cache_misses(), 301);
    }

    #[test]
    fn deep_index_does_not_recurse_deeply() {
        let mut lucas = LucasNumbers::new();
        let value = lucas.get(20_000);
        assert_eq!(lucas.cached(), 20_001);
        assert_eq!(value.to_string().len(), 4_180);
    }
}
