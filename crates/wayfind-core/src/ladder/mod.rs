pub mod bfs;
pub mod dictionary;
pub mod edit;

pub use bfs::generate_ladder;
pub use dictionary::Dictionary;
pub use edit::{edit_distance_within, is_adjacent, neighbors};
