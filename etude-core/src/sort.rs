/// In-place quicksort, ascending. Recurses on the two sides of a
/// last-element-pivot partition.
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = partition(arr);
    let (lower, upper) = arr.split_at_mut(pivot);
    quick_sort(lower);
    quick_sort(&mut upper[1..]);
}

// Moves everything <= the pivot to the front, then swaps the pivot into
// place and returns its final index.
fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let pivot = arr.len() - 1;
    let mut boundary = 0;
    for i in 0..pivot {
        if arr[i] <= arr[pivot] {
            arr.swap(boundary, i);
            boundary += 1;
        }
    }
    arr.swap(boundary, pivot);
    boundary
}
