// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for overlay and error strings.
//!
//! This module provides localization using the Fluent localization system.
//! It handles language detection, translation file loading, and string
//! formatting. Only the subsystem's own strings (overlay status lines and
//! analysis errors) are localized here; hosting views carry their own
//! bundles.

pub mod fluent;
