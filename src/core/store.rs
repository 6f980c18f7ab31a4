//! Filtering over listed entities

/// A predicate over entities of type `T`.
///
/// Filtering is a pure read: it works on a listed snapshot and never touches
/// the collection it came from.
pub trait EntityFilter<T>: Send + Sync {
    /// Whether `entity` passes every constraint of this filter
    fn matches(&self, entity: &T) -> bool;

    /// Keep the entities that match, preserving their order
    fn apply(&self, data: Vec<T>) -> Vec<T> {
        data.into_iter().filter(|e| self.matches(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;

    impl EntityFilter<u32> for Even {
        fn matches(&self, n: &u32) -> bool {
            n % 2 == 0
        }
    }

    #[test]
    fn test_apply_preserves_order() {
        assert_eq!(Even.apply(vec![4, 1, 2, 7, 8]), vec![4, 2, 8]);
    }
}
