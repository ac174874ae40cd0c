pub mod index;
pub mod surface;

pub use index::{InMemoryIndexSource, IndexError, IndexSource, parse_index};
pub use surface::{NavigatorSurface, SearchSurface};
