//! Binary images of a [`State`].
//!
//! Decoding goes through the same validating conversions as the rest of the
//! crate, so a corrupt image never yields a reserved piece code or castling
//! bit. A decoded state is not required to be a live-game position; call
//! [`State::validate`] for that.

use crate::board::State;
use thiserror::Error;
use tracing::{debug, instrument, warn};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec failed: {0}")]
    Codec(#[from] bincode::Error),
    #[error("{0} trailing bytes after snapshot")]
    TrailingBytes(usize),
}

#[instrument(skip_all)]
pub fn encode(state: &State) -> Result<Vec<u8>, SnapshotError> {
    let bytes = bincode::serialize(state)?;
    debug!(len = bytes.len(), "snapshot encoded");
    Ok(bytes)
}

#[instrument(skip_all, fields(len = bytes.len()))]
pub fn decode(bytes: &[u8]) -> Result<State, SnapshotError> {
    let state: State = bincode::deserialize(bytes).inspect_err(|err| {
        warn!(%err, "snapshot rejected");
    })?;

    let used = bincode::serialized_size(&state)? as usize;
    if used != bytes.len() {
        warn!(used, "snapshot has trailing bytes");
        return Err(SnapshotError::TrailingBytes(bytes.len() - used));
    }

    debug!(turn = ?state.turn_to_move, castlings = %state.castlings, "snapshot decoded");
    Ok(state)
}
