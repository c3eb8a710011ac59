//! Collection types for Trellis.
//!
//! Re-exports AHash-backed hash collections so every crate in the workspace
//! hashes surface and area handles the same way.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert(7usize, "surface");
        assert_eq!(map.get(&7), Some(&"surface"));
    }

    #[test]
    fn test_hashset_ahash() {
        let mut set = HashSet::new();
        set.insert(42usize);
        assert!(set.contains(&42));
        assert!(!set.insert(42));
    }
}
