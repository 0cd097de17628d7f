pub mod traits;
pub mod directed;
pub mod generators;
pub mod io;

pub use traits::{Graph, MutableGraph};
pub use directed::DirectedGraph;
pub use io::{load_graph, read_graph, save_graph, write_graph};
