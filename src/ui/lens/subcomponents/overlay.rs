// SPDX-License-Identifier: MPL-2.0
//! Overlay visibility sub-component for the analysis result panel.
//!
//! The overlay tracks which request it is showing by sequence number only;
//! the request itself lives in the analysis session. Closing detaches the
//! shown request, so its later resolution can never reopen the panel or
//! mutate what a reopened overlay shows.

use crate::domain::analysis::SequenceNumber;

/// Overlay visibility state.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    open: bool,
    shown: Option<SequenceNumber>,
}

/// Messages for the overlay sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Open the overlay for the given request, in loading state.
    Show(SequenceNumber),
    /// Close the overlay. Does not cancel the request by itself.
    Close,
}

impl State {
    /// Handle an overlay message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::Show(sequence) => {
                self.open = true;
                self.shown = Some(sequence);
            }
            Message::Close => {
                self.open = false;
                self.shown = None;
            }
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The sequence number of the request currently attached to the overlay.
    #[must_use]
    pub fn shown(&self) -> Option<SequenceNumber> {
        self.shown
    }

    /// Whether the overlay is open and attached to the given request.
    #[must_use]
    pub fn is_showing(&self, sequence: SequenceNumber) -> bool {
        self.open && self.shown == Some(sequence)
    }
}
