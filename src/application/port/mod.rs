// SPDX-License-Identifier: MPL-2.0
//! Port definitions. Infrastructure adapters implement these traits.

pub mod analysis;
