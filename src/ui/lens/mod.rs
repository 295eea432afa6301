// SPDX-License-Identifier: MPL-2.0
//! The lens workspace: drag coordination, analysis sessions, and the result
//! overlay.

pub mod clusters;
pub mod component;
pub mod subcomponents;
pub mod zone_adapter;

pub use component::{LensWorkspace, Message, OverlayView};
pub use zone_adapter::ZoneAdapter;
