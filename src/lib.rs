// SPDX-License-Identifier: MPL-2.0
//! Drag-and-drop lens analysis coordination for the VineLens vineyard
//! workspace.
//!
//! A *lens* is a named analytical capability the user drags from a palette
//! onto a *drop zone* somewhere in the workspace. Dropping freezes the
//! zone's data into a snapshot, submits it to an external analysis service,
//! and shows the outcome in an overlay. All coordination state lives in
//! [`ui::lens::LensWorkspace`] and is mutated exclusively on the UI event
//! loop; async completions come back as messages and are applied under a
//! monotonic sequence guard, so late or out-of-order responses can never
//! overwrite newer state.
//!
//! Rendering is out of scope: hosting views feed messages in and read the
//! observable state ([`ui::lens::OverlayView`], highlight queries, the
//! activity log) back out.

pub mod application;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod registry;
pub mod ui;

pub use error::{Error, Result};
