pub mod types;

pub use types::{Move, MoveFlags, MoveKind, MoveList, make_promotion};
