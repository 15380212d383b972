pub mod batch;
pub mod distance;
pub mod error;

pub use batch::{checked_pair_distances, distance_report, pair_distances};
pub use distance::{
    checked_damerau_levenshtein, damerau_levenshtein, damerau_levenshtein_bytes,
    damerau_levenshtein_distance,
};
pub use error::{Error, Result};
