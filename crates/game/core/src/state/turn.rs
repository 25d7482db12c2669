use super::Tick;

/// Turn bookkeeping shared with the scheduler.
///
/// `clock` counts completed full turns and is advanced by the caller between
/// passes; `nonce` increments once per AI decision so that every random draw
/// in a game gets its own seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Current turn clock.
    pub clock: Tick,

    /// Decision sequence number, monotonically increasing.
    pub nonce: u64,
}

impl TurnState {
    /// Marks the end of a full turn pass over all actors.
    pub fn advance_clock(&mut self) {
        self.clock = self.clock + 1;
    }

    /// Claims the next decision ordinal.
    pub(crate) fn next_nonce(&mut self) -> u64 {
        let nonce = self.nonce;
        self.nonce += 1;
        nonce
    }
}
