//! Navigation commands
//!
//! Input adapters produce commands; the controller resolves them against the
//! current state. Resolution clamps instead of erroring: for a navigation
//! affordance it is always better to stop at an edge than to fail.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavCommand {
    /// Jump to an absolute section index (clamped to the valid range)
    GoToIndex(usize),
    /// Move relative to the current section (clamped, no wraparound)
    GoToRelative(i32),
}

impl NavCommand {
    /// Resolve to a concrete target index for a list of `len` sections.
    ///
    /// `len` must be non-zero; the controller guarantees this at
    /// construction time.
    pub fn resolve(&self, current: usize, len: usize) -> usize {
        let max = len.saturating_sub(1);
        match self {
            NavCommand::GoToIndex(index) => (*index).min(max),
            NavCommand::GoToRelative(delta) => {
                let target = current as i64 + i64::from(*delta);
                target.clamp(0, max as i64) as usize
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_clamps_to_last() {
        assert_eq!(NavCommand::GoToIndex(2).resolve(0, 4), 2);
        assert_eq!(NavCommand::GoToIndex(99).resolve(0, 4), 3);
    }

    #[test]
    fn test_relative_clamps_at_edges() {
        assert_eq!(NavCommand::GoToRelative(1).resolve(3, 4), 3);
        assert_eq!(NavCommand::GoToRelative(-1).resolve(0, 4), 0);
        assert_eq!(NavCommand::GoToRelative(1).resolve(1, 4), 2);
        assert_eq!(NavCommand::GoToRelative(-1).resolve(2, 4), 1);
    }

    #[test]
    fn test_relative_never_wraps() {
        assert_eq!(NavCommand::GoToRelative(-10).resolve(1, 4), 0);
        assert_eq!(NavCommand::GoToRelative(10).resolve(1, 4), 3);
    }
}
