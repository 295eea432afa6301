// SPDX-License-Identifier: MPL-2.0
//! UI state machines, organized the Elm way: each sub-component owns its
//! state and answers messages with effects; orchestrators wire effects
//! together and schedule async work.

pub mod lens;
