//! Rule configuration for move generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How rook, bishop and queen rays are scanned.
///
/// Only `StopAtBlocker` yields the usual twenty opening moves (53 under
/// `SweepToEdge`, 44 under `SweepShort`). `SweepToEdge` is the legacy
/// blocker-blind scan loop that walks every ray to the edge. `SweepShort` is
/// the documented "one square short of the edge, no blocker stop" rule taken
/// literally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SlideRule {
    /// Slide to the board edge and stop at the first occupied square,
    /// which is a destination only when it holds an opposing piece.
    #[default]
    StopAtBlocker,
    /// Scan every square up to the board edge without stopping at blockers;
    /// any square not holding a same-colored piece is a destination.
    SweepToEdge,
    /// Like `SweepToEdge`, but the scan ends one square before the last
    /// rank/file in the direction of travel.
    SweepShort,
}

impl SlideRule {
    #[inline]
    #[must_use]
    pub(crate) const fn stops_at_blocker(self) -> bool {
        matches!(self, SlideRule::StopAtBlocker)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn stops_short(self) -> bool {
        matches!(self, SlideRule::SweepShort)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RulesConfig {
    pub slide_rule: SlideRule,
}

impl RulesConfig {
    #[must_use]
    pub const fn new(slide_rule: SlideRule) -> Self {
        RulesConfig { slide_rule }
    }
}
