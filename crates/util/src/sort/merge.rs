use std::cmp::Ordering;

/// Stable top-down merge sort with a custom comparator.
///
/// Elements that compare [`Ordering::Equal`] keep their input order: when the
/// heads of the two halves tie, the merge always takes the left one. Callers
/// rely on this to layer a secondary ordering underneath the comparator (sort
/// by the secondary key first, then merge sort by the primary key).
///
/// # Performance
///
/// - Time complexity: O(n log n) in every case
/// - Space complexity: O(n) scratch buffer, allocated once per call
///
/// # Examples
///
/// ```
/// use word_freq_util::sort::merge_sort_by;
///
/// let mut arr = vec![(1, 'a'), (3, 'b'), (1, 'c'), (3, 'd')];
/// merge_sort_by(&mut arr, |a, b| b.0.cmp(&a.0));
/// assert_eq!(arr, vec![(3, 'b'), (3, 'd'), (1, 'a'), (1, 'c')]);
/// ```
pub fn merge_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if arr.len() < 2 {
        return;
    }
    let mut scratch = arr.to_vec();
    sort_range(arr, &mut scratch, &mut compare);
}

/// Stable merge sort with a key extraction function.
///
/// # Examples
///
/// ```
/// use word_freq_util::sort::merge_sort_by_key;
///
/// let mut arr = vec!["pear", "fig", "kiwi", "apple", "yam"];
/// merge_sort_by_key(&mut arr, |s| s.len());
/// assert_eq!(arr, vec!["fig", "yam", "pear", "kiwi", "apple"]);
/// ```
pub fn merge_sort_by_key<T, K, F>(arr: &mut [T], mut key: F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_sort_by(arr, |a, b| key(a).cmp(&key(b)));
}

fn sort_range<T, F>(arr: &mut [T], scratch: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = arr.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    {
        let (left, right) = arr.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        sort_range(left, left_scratch, compare);
        sort_range(right, right_scratch, compare);
    }
    // Halves already in order.
    if compare(&arr[mid - 1], &arr[mid]) != Ordering::Greater {
        return;
    }
    merge(arr, mid, scratch, compare);
}

fn merge<T, F>(arr: &mut [T], mid: usize, scratch: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = arr.len();
    let mut a = 0;
    let mut b = mid;
    let mut c = 0;

    while a < mid && b < len {
        if compare(&arr[a], &arr[b]) != Ordering::Greater {
            scratch[c] = arr[a].clone();
            a += 1;
        } else {
            scratch[c] = arr[b].clone();
            b += 1;
        }
        c += 1;
    }
    while a < mid {
        scratch[c] = arr[a].clone();
        a += 1;
        c += 1;
    }
    while b < len {
        scratch[c] = arr[b].clone();
        b += 1;
        c += 1;
    }

    arr.clone_from_slice(&scratch[..len]);
}
