// SPDX-License-Identifier: MPL-2.0
//! Clusters combine closely coupled concerns that cannot be split without
//! leaking invariants across module boundaries.

pub mod analysis_session;
