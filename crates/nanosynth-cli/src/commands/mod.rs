//! Command implementations.

pub mod build_index;
pub mod extract;
pub mod search;

pub use self::build_index::execute_build_index;
pub use self::extract::execute_extract;
pub use self::search::execute_search;
