//! History recorder: the ordered list of snapshots handed to presentation.

use skirmish_core::state::BattleSnapshot;

/// Snapshots in tick order. Frame 0 is the state before the first tick.
#[derive(Debug, Clone, Default)]
pub struct History {
    frames: Vec<BattleSnapshot>,
}

impl History {
    pub fn push(&mut self, snapshot: BattleSnapshot) {
        self.frames.push(snapshot);
    }

    pub fn frames(&self) -> &[BattleSnapshot] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Hand all recorded frames to the caller, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<BattleSnapshot> {
        std::mem::take(&mut self.frames)
    }
}
