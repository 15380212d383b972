use log::debug;
use rayon::prelude::*;

use crate::distance::damerau_levenshtein_distance;
use crate::error::{Error, Result};

/// Computes the Damerau-Levenshtein distance for every pair in `pairs`.
///
/// Pairs are independent, so they are distributed across the rayon thread
/// pool; each computation owns its own matrix and last-occurrence table, so
/// no coordination is needed. Output order matches input order.
///
/// # Examples
///
/// ```
/// use editdist::pair_distances;
///
/// let pairs = [("Steve", "Steven"), ("colour", "color"), ("book", "back")];
/// assert_eq!(pair_distances(&pairs), vec![1, 1, 2]);
/// ```
pub fn pair_distances(pairs: &[(&str, &str)]) -> Vec<usize> {
    let distances: Vec<usize> = pairs
        .par_iter()
        .map(|(a, b)| damerau_levenshtein_distance(a, b))
        .collect();
    debug!("computed {} pair distances", distances.len());
    distances
}

/// Length-capped variant of [`pair_distances`].
///
/// Every pair is validated before any distance is computed, so the parallel
/// pass either runs in full or not at all. Lengths are measured in `char`s,
/// matching what the distance itself operates on.
///
/// # Errors
/// * `SequenceTooLong` for the first string longer than `max_len`
pub fn checked_pair_distances(pairs: &[(&str, &str)], max_len: usize) -> Result<Vec<usize>> {
    for (a, b) in pairs {
        for s in [a, b] {
            let len = s.chars().count();
            if len > max_len {
                return Err(Error::SequenceTooLong { len, max: max_len });
            }
        }
    }

    Ok(pair_distances(pairs))
}

/// Renders one `"<s1>" → "<s2>": <distance>` report line per pair.
///
/// The line format is a convenience for batch harnesses and demos; it is not
/// part of the distance contract.
///
/// # Examples
///
/// ```
/// use editdist::distance_report;
///
/// let lines = distance_report(&[("hello", "helo")]);
/// assert_eq!(lines, vec!["\"hello\" → \"helo\": 1".to_string()]);
/// ```
pub fn distance_report(pairs: &[(&str, &str)]) -> Vec<String> {
    pair_distances(pairs)
        .into_iter()
        .zip(pairs)
        .map(|(d, (a, b))| format!("\"{}\" → \"{}\": {}", a, b, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_distances() {
        let pairs = [
            ("Steve", "Steven"),
            ("colour", "color"),
            ("book", "back"),
            ("hello", "helo"),
            ("", "abc"),
            ("abc", ""),
        ];
        assert_eq!(pair_distances(&pairs), vec![1, 1, 2, 1, 3, 3]);
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(pair_distances(&[]), Vec::<usize>::new());
        assert_eq!(distance_report(&[]), Vec::<String>::new());
    }

    #[test]
    fn test_checked_pair_distances() {
        let pairs = [("colour", "color"), ("ab", "ba")];
        assert_eq!(checked_pair_distances(&pairs, 6), Ok(vec![1, 1]));
        assert_eq!(
            checked_pair_distances(&pairs, 5),
            Err(Error::SequenceTooLong { len: 6, max: 5 })
        );
    }

    #[test]
    fn test_distance_report() {
        let lines = distance_report(&[("Steve", "Steven"), ("abc", "")]);
        assert_eq!(
            lines,
            vec![
                "\"Steve\" → \"Steven\": 1".to_string(),
                "\"abc\" → \"\": 3".to_string(),
            ]
        );
    }
}
