use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Computes the unrestricted Damerau-Levenshtein distance between two string slices.
///
/// The distance is the minimum number of single-character insertions, deletions,
/// substitutions, and transpositions required to change `a` into `b`. This is the
/// Lowrance-Wagner formulation: the transposed characters may be separated by
/// other characters in either string, unlike the cheaper "optimal string
/// alignment" variant (which, for example, prices `"ca" -> "abc"` at 3 instead
/// of 2).
///
/// Operates on `char` sequences; no Unicode normalization is applied.
///
/// # Examples
///
/// ```
/// use editdist::damerau_levenshtein_distance;
///
/// assert_eq!(damerau_levenshtein_distance("Steve", "Steven"), 1);
/// assert_eq!(damerau_levenshtein_distance("ab", "ba"), 1);
/// assert_eq!(damerau_levenshtein_distance("ca", "abc"), 2);
/// ```
pub fn damerau_levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    damerau_levenshtein(&a_chars, &b_chars)
}

/// Computes the unrestricted Damerau-Levenshtein distance between two slices of
/// any symbol type with total equality.
///
/// The last-occurrence table is a `HashMap` keyed by symbol, so the extra space
/// beyond the `(m+2) x (n+2)` matrix is proportional to the number of distinct
/// symbols in `a`.
///
/// # Examples
///
/// ```
/// use editdist::damerau_levenshtein;
///
/// let a = [1, 2, 3, 4];
/// let b = [2, 1, 3, 4];
/// assert_eq!(damerau_levenshtein(&a, &b), 1);
/// ```
///
/// # Complexity
/// * Time: O(m * n) for slices of length m and n
/// * Space: O(m * n) for the matrix, plus O(|alphabet of a|) for the table
pub fn damerau_levenshtein<T: Eq + Hash>(a: &[T], b: &[T]) -> usize {
    // If either sequence is empty, distance is the length of the other.
    if a.is_empty() {
        return b.len();
    } else if b.is_empty() {
        return a.len();
    }

    let m = a.len();
    let n = b.len();

    // Upper bound exceeding any real distance; the sentinel row and column
    // carry it so the transposition term is well-defined at the matrix edges.
    let max_dist = m + n;

    // h[i + 1][j + 1] is the distance between the length-i prefix of `a` and
    // the length-j prefix of `b`; row 0 and column 0 are the sentinels.
    let mut h = vec![vec![0usize; n + 2]; m + 2];
    h[0][0] = max_dist;
    for i in 0..=m {
        h[i + 1][0] = max_dist;
        h[i + 1][1] = i;
    }
    for j in 0..=n {
        h[0][j + 1] = max_dist;
        h[1][j + 1] = j;
    }

    // Last row (1-based) at which each symbol of `a` was seen; 0 = never.
    let mut da: HashMap<&T, usize> = HashMap::new();

    for i in 1..=m {
        // Column of the most recent match within the current row.
        let mut db = 0;

        for j in 1..=n {
            let k = da.get(&b[j - 1]).copied().unwrap_or(0);
            let l = db;
            let cost = if a[i - 1] == b[j - 1] {
                db = j;
                0
            } else {
                1
            };

            // The transposition term prices deleting the i-k-1 symbols between
            // the two occurrences in `a`, one transposition, and inserting the
            // j-l-1 symbols between the two occurrences in `b`. With k or l
            // still 0 it reads a sentinel and can never win the minimum.
            h[i + 1][j + 1] = (h[i][j + 1] + 1) // deletion
                .min(h[i + 1][j] + 1) // insertion
                .min(h[i][j] + cost) // substitution or exact match
                .min(h[k][l] + (i - k - 1) + 1 + (j - l - 1)); // transposition
        }

        da.insert(&a[i - 1], i);
    }

    h[m + 1][n + 1]
}

/// Byte-alphabet variant of [`damerau_levenshtein`].
///
/// Identical recurrence, but the last-occurrence table is a fixed
/// `[usize; 256]` array indexed by byte value instead of a hash map, which
/// avoids hashing in the inner loop for the common ASCII/byte case.
///
/// # Examples
///
/// ```
/// use editdist::damerau_levenshtein_bytes;
///
/// assert_eq!(damerau_levenshtein_bytes(b"hello", b"helo"), 1);
/// ```
pub fn damerau_levenshtein_bytes(a: &[u8], b: &[u8]) -> usize {
    if a.is_empty() {
        return b.len();
    } else if b.is_empty() {
        return a.len();
    }

    let m = a.len();
    let n = b.len();
    let max_dist = m + n;

    let mut h = vec![vec![0usize; n + 2]; m + 2];
    h[0][0] = max_dist;
    for i in 0..=m {
        h[i + 1][0] = max_dist;
        h[i + 1][1] = i;
    }
    for j in 0..=n {
        h[0][j + 1] = max_dist;
        h[1][j + 1] = j;
    }

    let mut da = [0usize; 256];

    for i in 1..=m {
        let mut db = 0;

        for j in 1..=n {
            let k = da[b[j - 1] as usize];
            let l = db;
            let cost = if a[i - 1] == b[j - 1] {
                db = j;
                0
            } else {
                1
            };

            h[i + 1][j + 1] = (h[i][j + 1] + 1)
                .min(h[i + 1][j] + 1)
                .min(h[i][j] + cost)
                .min(h[k][l] + (i - k - 1) + 1 + (j - l - 1));
        }

        da[a[i - 1] as usize] = i;
    }

    h[m + 1][n + 1]
}

/// Length-capped variant of [`damerau_levenshtein`].
///
/// The algorithm itself imposes no length limit, so a caller that must bound
/// running time (the computation is O(m * n) with no intrinsic timeout) can
/// impose one here and get a typed error instead of an unbounded computation.
///
/// # Errors
/// * `SequenceTooLong` if either slice is longer than `max_len`
///
/// # Examples
///
/// ```
/// use editdist::{checked_damerau_levenshtein, Error};
///
/// let a: Vec<char> = "colour".chars().collect();
/// let b: Vec<char> = "color".chars().collect();
/// assert_eq!(checked_damerau_levenshtein(&a, &b, 16), Ok(1));
/// assert_eq!(
///     checked_damerau_levenshtein(&a, &b, 4),
///     Err(Error::SequenceTooLong { len: 6, max: 4 })
/// );
/// ```
pub fn checked_damerau_levenshtein<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    max_len: usize,
) -> Result<usize> {
    if a.len() > max_len {
        return Err(Error::SequenceTooLong {
            len: a.len(),
            max: max_len,
        });
    }
    if b.len() > max_len {
        return Err(Error::SequenceTooLong {
            len: b.len(),
            max: max_len,
        });
    }

    Ok(damerau_levenshtein(a, b))
}
