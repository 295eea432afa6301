// SPDX-License-Identifier: MPL-2.0
//! Concrete adapters for the application ports.

pub mod http;
