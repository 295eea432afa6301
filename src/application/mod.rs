// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the coordination logic depends on.

pub mod port;
