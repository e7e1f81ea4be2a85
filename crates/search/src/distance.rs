//! Levenshtein edit distance.
//!
//! Insertions, deletions and substitutions each cost one. Elements are
//! compared with `==`, so string callers get exact code-point comparison
//! with no case folding or collation.
//!
//! The bounded variant is what the index uses: the length difference of two
//! sequences is a lower bound on their distance, and after every DP row the
//! cheapest cell plus the length slack it still has to cover is a lower
//! bound on the final result. Once that bound passes `max` the row loop
//! stops.

/// Edit distance between two sequences.
///
/// # Example
/// ```
/// use fastmatch_search::levenshtein;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(levenshtein(&a, &b), 3);
/// ```
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Use two rows for space optimization
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Edit distance between two sequences, if it is at most `max`.
///
/// Returns `None` as soon as the distance is provably greater than `max`.
/// Whenever `max` is at or above the true distance the result equals
/// `Some(levenshtein(a, b))`.
///
/// # Example
/// ```
/// use fastmatch_search::levenshtein_bounded;
///
/// let a: Vec<char> = "Fat".chars().collect();
/// let b: Vec<char> = "Bats".chars().collect();
/// assert_eq!(levenshtein_bounded(&a, &b, 2), Some(2));
/// assert_eq!(levenshtein_bounded(&a, &b, 1), None);
/// ```
pub fn levenshtein_bounded<T: PartialEq>(a: &[T], b: &[T], max: usize) -> Option<usize> {
    let m = a.len();
    let n = b.len();

    if m.abs_diff(n) > max {
        return None;
    }
    if m == 0 || n == 0 {
        // Only reachable when the length difference already fits in `max`
        return Some(m.max(n));
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        let remaining = m - i;
        // Cost of finishing from (i, 0) is at least the slack between the suffixes
        let mut lower_bound = i + remaining.abs_diff(n);

        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
            lower_bound = lower_bound.min(curr[j] + remaining.abs_diff(n - j));
        }

        if lower_bound > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Some(prev[n]).filter(|&d| d <= max)
}

/// Edit distance between two strings, compared by `char`.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    levenshtein(&a_chars, &b_chars)
}

/// Edit distance between two strings if it is at most `max`.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    levenshtein_bounded(&a_chars, &b_chars, max)
}
