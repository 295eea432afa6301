// SPDX-License-Identifier: MPL-2.0
//! Lens drag sub-component with hover tracking.
//!
//! Exactly one drag session exists process-wide. Hover follows
//! last-enter-wins semantics: entering a zone overwrites the previous hover
//! unconditionally, leaving only clears when the id matches.

use crate::domain::lens::LensId;
use crate::domain::zone::ZoneId;

/// Drag session status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragStatus {
    #[default]
    Idle,
    Dragging,
}

/// Drag sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    status: DragStatus,
    active_lens: Option<LensId>,
    hovered_zone: Option<ZoneId>,
}

/// Messages for the drag sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Start dragging a lens from the palette.
    Begin(LensId),
    /// The pointer entered a zone (reported by the zone itself).
    ZoneEntered(ZoneId),
    /// The pointer left a zone.
    ZoneLeft(ZoneId),
    /// The lens was released over a zone.
    Drop(ZoneId),
    /// The lens was released outside any zone, or the drag was aborted.
    Cancel,
    /// A zone was unregistered while a drag may be active.
    ZoneUnregistered(ZoneId),
}

/// Effects produced by drag operations.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// A drag session started.
    Started,
    /// A second `Begin` arrived while dragging; the first lens stays active.
    Rejected,
    /// The drag finalized over a zone; the orchestrator resolves the zone
    /// and starts the analysis. The session is already back to idle.
    Dropped { lens: LensId, zone: ZoneId },
    /// The drag ended without a drop.
    Cancelled,
}

impl State {
    /// Handle a drag message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Begin(lens) => {
                if self.status == DragStatus::Dragging {
                    return Effect::Rejected;
                }
                self.status = DragStatus::Dragging;
                self.active_lens = Some(lens);
                self.hovered_zone = None;
                Effect::Started
            }
            Message::ZoneEntered(zone) => {
                if self.status == DragStatus::Dragging {
                    self.hovered_zone = Some(zone);
                }
                Effect::None
            }
            Message::ZoneLeft(zone) => {
                if self.hovered_zone.as_ref() == Some(&zone) {
                    self.hovered_zone = None;
                }
                Effect::None
            }
            Message::Drop(zone) => {
                if self.status != DragStatus::Dragging {
                    return Effect::None;
                }
                let lens = self.reset();
                match lens {
                    Some(lens) => Effect::Dropped { lens, zone },
                    None => Effect::None,
                }
            }
            Message::Cancel => {
                if self.status != DragStatus::Dragging {
                    return Effect::None;
                }
                self.reset();
                Effect::Cancelled
            }
            Message::ZoneUnregistered(zone) => {
                if self.hovered_zone.as_ref() == Some(&zone) {
                    self.hovered_zone = None;
                }
                Effect::None
            }
        }
    }

    /// Resets to idle and yields the lens that was active.
    fn reset(&mut self) -> Option<LensId> {
        self.status = DragStatus::Idle;
        self.hovered_zone = None;
        self.active_lens.take()
    }

    /// Check if a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.status == DragStatus::Dragging
    }

    /// The lens being dragged, if any.
    #[must_use]
    pub fn active_lens(&self) -> Option<&LensId> {
        self.active_lens.as_ref()
    }

    /// The zone currently under the pointer, if any.
    #[must_use]
    pub fn hovered_zone(&self) -> Option<&ZoneId> {
        self.hovered_zone.as_ref()
    }

    /// Whether the given zone should render its drop highlight.
    #[must_use]
    pub fn is_highlighted(&self, zone: &ZoneId) -> bool {
        self.is_dragging() && self.hovered_zone.as_ref() == Some(zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lens(id: &str) -> LensId {
        LensId::new(id)
    }

    fn zone(id: &str) -> ZoneId {
        ZoneId::new(id)
    }

    #[test]
    fn begin_starts_a_session() {
        let mut state = State::default();
        assert!(!state.is_dragging());

        let effect = state.handle(Message::Begin(lens("risk-scanner")));
        assert!(matches!(effect, Effect::Started));
        assert!(state.is_dragging());
        assert_eq!(state.active_lens().map(LensId::as_str), Some("risk-scanner"));
    }

    #[test]
    fn second_begin_keeps_first_lens_active() {
        let mut state = State::default();
        state.handle(Message::Begin(lens("risk-scanner")));

        let effect = state.handle(Message::Begin(lens("yield-forecast")));
        assert!(matches!(effect, Effect::Rejected));
        assert_eq!(state.active_lens().map(LensId::as_str), Some("risk-scanner"));
    }

    #[test]
    fn hover_follows_last_enter_wins() {
        let mut state = State::default();
        state.handle(Message::Begin(lens("risk-scanner")));

        state.handle(Message::ZoneEntered(zone("dash")));
        assert!(state.is_highlighted(&zone("dash")));

        // Entering a nested zone overwrites the hover without a leave.
        state.handle(Message::ZoneEntered(zone("vines")));
        assert!(state.is_highlighted(&zone("vines")));
        assert!(!state.is_highlighted(&zone("dash")));
    }

    #[test]
    fn leave_only_clears_matching_hover() {
        let mut state = State::default();
        state.handle(Message::Begin(lens("risk-scanner")));
        state.handle(Message::ZoneEntered(zone("dash")));

        state.handle(Message::ZoneLeft(zone("vines")));
        assert!(state.is_highlighted(&zone("dash")));

        state.handle(Message::ZoneLeft(zone("dash")));
        assert!(state.hovered_zone().is_none());
    }

    #[test]
    fn hover_is_ignored_while_idle() {
        let mut state = State::default();
        state.handle(Message::ZoneEntered(zone("dash")));
        assert!(state.hovered_zone().is_none());
        assert!(!state.is_highlighted(&zone("dash")));
    }

    #[test]
    fn drop_finalizes_and_resets() {
        let mut state = State::default();
        state.handle(Message::Begin(lens("risk-scanner")));
        state.handle(Message::ZoneEntered(zone("dash")));

        let effect = state.handle(Message::Drop(zone("dash")));
        match effect {
            Effect::Dropped { lens, zone } => {
                assert_eq!(lens.as_str(), "risk-scanner");
                assert_eq!(zone.as_str(), "dash");
            }
            other => panic!("expected Dropped, got {other:?}"),
        }
        assert!(!state.is_dragging());
        assert!(state.hovered_zone().is_none());
    }

    #[test]
    fn drop_while_idle_is_a_no_op() {
        let mut state = State::default();
        let effect = state.handle(Message::Drop(zone("dash")));
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn cancel_resets_without_side_effects() {
        let mut state = State::default();
        state.handle(Message::Begin(lens("risk-scanner")));
        state.handle(Message::ZoneEntered(zone("dash")));

        let effect = state.handle(Message::Cancel);
        assert!(matches!(effect, Effect::Cancelled));
        assert!(!state.is_dragging());
        assert!(state.active_lens().is_none());
    }

    #[test]
    fn unregistering_hovered_zone_clears_highlight() {
        let mut state = State::default();
        state.handle(Message::Begin(lens("risk-scanner")));
        state.handle(Message::ZoneEntered(zone("dash")));
        assert!(state.is_highlighted(&zone("dash")));

        state.handle(Message::ZoneUnregistered(zone("dash")));
        assert!(state.hovered_zone().is_none());
        // The drag itself is still active.
        assert!(state.is_dragging());
    }
}
