use fxhash::FxHashMap;
use std::hash::Hash;

/// Hash-keyed result cache for a single function.
///
/// `call` hands the memo itself to the computation so a recursive definition
/// can look up (and fill) smaller arguments through the same cache.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    cache: FxHashMap<K, V>,
    hits: u64,
    misses: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Memo {
            cache: FxHashMap::default(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<K, V> Memo<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call<F>(&mut self, key: K, compute: F) -> V
    where
        F: FnOnce(&mut Self, &K) -> V,
    {
        if let Some(value) = self.cache.get(&key) {
            self.hits += 1;
            return value.clone();
        }
        self.misses += 1;
        let value = compute(self, &key);
        self.cache.insert(key, value.clone());
        value
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
