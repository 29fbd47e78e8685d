pub mod algorithm;
pub mod matcher;
pub mod nearest;
pub mod types;

pub use algorithm::MatchingAlgorithm;
pub use matcher::RequestMatcher;
pub use nearest::{FirstAvailableMatching, NearestMatching};
pub use types::MatchCandidate;
