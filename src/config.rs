//! Framework configuration - the config sub-object of the global state.
//!
//! Selection hands this back verbatim. A few well-known fields are typed;
//! everything else a host stores under `config` survives in `extra`, so the
//! sub-object round-trips untouched.

use serde::{Deserialize, Serialize};

use crate::tree::Props;

/// Host framework configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Debug mode: hosts typically surface selection misses and timings.
    pub debug: bool,
    /// Whether the host validates incoming props against component types.
    pub props_check: bool,
    /// Window/terminal title the host should apply, if any.
    pub title: Option<String>,
    /// Any further host-specific configuration, kept verbatim.
    #[serde(flatten)]
    pub extra: Props,
}

// =============================================================================
// Tests
// =============================================================================
