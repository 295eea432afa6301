// SPDX-License-Identifier: MPL-2.0
//! Single-concern sub-components of the lens workspace.

pub mod drag;
pub mod overlay;
