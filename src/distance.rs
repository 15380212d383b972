pub mod damerau_levenshtein;

// Re-export the distance kernels with descriptive names
pub use damerau_levenshtein::{
    checked_damerau_levenshtein, damerau_levenshtein, damerau_levenshtein_bytes,
    damerau_levenshtein_distance,
};
