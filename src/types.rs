//! Common types used throughout sirenstream
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use std::collections::HashMap;

/// Query parameters keyed by name. Duplicate keys collapse to the last
/// value written, matching how link hrefs are folded.
pub type QueryMap = HashMap<String, String>;
