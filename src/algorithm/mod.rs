pub mod traits;
pub mod analysis;
pub mod bellman_ford;
pub mod eccentricity;

pub use traits::{reconstruct_path, ShortestPathAlgorithm, ShortestPathResult};
pub use eccentricity::{eccentricity, Eccentricity};
