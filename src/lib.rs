pub mod board;
pub(crate) mod guard;
pub mod hash;
#[cfg(feature = "logging")]
pub mod logger;
pub mod moves;
pub mod snapshot;
pub mod square;
