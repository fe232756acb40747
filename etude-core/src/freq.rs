use std::hash::Hash;

use hashbrown::HashMap;

/// How many times each distinct element occurs, in one O(n) pass.
pub fn frequencies<T>(items: &[T]) -> HashMap<T, usize>
where
    T: Eq + Hash + Clone,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.clone()).or_insert(0) += 1;
    }
    counts
}

/// The frequency table flattened to (element, count) pairs, sorted by
/// element so callers get a stable order.
pub fn frequency_pairs<T>(items: &[T]) -> Vec<(T, usize)>
where
    T: Eq + Hash + Ord + Clone,
{
    let mut pairs: Vec<(T, usize)> = frequencies(items).into_iter().collect();
    pairs.sort();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let counts = frequencies(&[10, 20, 20, 10, 10, 20, 5, 20]);
        assert_eq!(counts[&5], 1);
        assert_eq!(counts[&10], 3);
        assert_eq!(counts[&20], 4);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        let counts: HashMap<i64, usize> = frequencies(&[]);
        assert!(counts.is_empty());
        assert_eq!(frequency_pairs::<i64>(&[]), vec![]);
    }

    #[test]
    fn test_pairs_sorted_by_element() {
        let pairs = frequency_pairs(&[3, 1, 2, 1, 3, 3]);
        assert_eq!(pairs, vec![(1, 2), (2, 1), (3, 3)]);
    }

    #[test]
    fn test_string_elements() {
        let words = ["to", "be", "or", "not", "to", "be"];
        let pairs = frequency_pairs(&words);
        assert_eq!(pairs, vec![("be", 2), ("not", 1), ("or", 1), ("to", 2)]);
    }
}
