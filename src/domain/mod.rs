// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure data model for the lens analysis subsystem.
//!
//! This module contains the value types shared by the registry, the drag
//! coordinator, and the analysis session. It performs no I/O.
//!
//! # Modules
//!
//! - [`lens`]: Lens descriptors ([`LensId`](lens::LensId), [`Lens`](lens::Lens))
//! - [`zone`]: Drop zone identity and workspace snapshots
//!   ([`ZoneId`](zone::ZoneId), [`ZoneDataType`](zone::ZoneDataType),
//!   [`WorkspaceSnapshot`](zone::WorkspaceSnapshot))
//! - [`analysis`]: Analysis requests and sequencing
//!   ([`SequenceNumber`](analysis::SequenceNumber),
//!   [`AnalysisRequest`](analysis::AnalysisRequest))

pub mod analysis;
pub mod lens;
pub mod zone;
