/// Whether some subset of `items` sums to exactly `target`. Bottom-up
/// dynamic programming over reachable sums, O(n * target) time and
/// O(target) space.
pub fn is_subset_sum(items: &[usize], target: usize) -> bool {
    let mut reachable = vec![false; target + 1];
    reachable[0] = true;
    for &item in items {
        // Sums descend so each item is counted at most once.
        for sum in (item..=target).rev() {
            if reachable[sum - item] {
                reachable[sum] = true;
            }
        }
    }
    reachable[target]
}
