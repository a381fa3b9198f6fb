//! Render state - the host-owned global state this crate projects over.
//!
//! The container bundles the layout tree, the layout-hash table, and the
//! config sub-object. This crate never decides how it changes; hosts build
//! one, hand it to the selectors (usually behind a signal), and replace it
//! as their own reducers see fit.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::hashes::LayoutHashes;
use crate::path::LayoutPath;
use crate::tree::Component;

/// Global application state: layout tree, layout hashes, config.
///
/// Serializes with the camelCase wire names hosts use for snapshots
/// (`layoutHashes`, `config`, `layout`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderState {
    /// The component tree, if one has been mounted.
    pub layout: Option<Component>,
    /// Per-path change-detection entries.
    pub layout_hashes: LayoutHashes,
    /// Framework configuration.
    pub config: Config,
}

impl RenderState {
    /// Empty state: no layout, no hashes, default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// State with a mounted layout tree.
    pub fn with_layout(layout: Component) -> Self {
        Self {
            layout: Some(layout),
            ..Self::default()
        }
    }

    /// Resolve a path against the mounted layout, if any.
    pub fn component_at(&self, path: &LayoutPath) -> Option<&Component> {
        self.layout.as_ref()?.resolve(path)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Component;

    #[test]
    fn test_component_at_without_layout() {
        let state = RenderState::new();
        assert!(state.component_at(&LayoutPath::root()).is_none());
    }

    #[test]
    fn test_component_at_with_layout() {
        let layout = Component::new("box")
            .with_prop("children", vec![Component::new("text").into()]);
        let state = RenderState::with_layout(layout);

        let path: LayoutPath = LayoutPath::root().child("children").child(0usize);
        assert_eq!(
            state.component_at(&path).map(|c| c.component_type.as_str()),
            Some("text")
        );
    }

    #[test]
    fn test_snapshot_wire_format() {
        let json = r#"{
            "layout": {"type": "box"},
            "layoutHashes": {"[\"a\"]": {"hash": 1, "renderType": "parent"}},
            "config": {"debug": true}
        }"#;
        let state: RenderState = serde_json::from_str(json).unwrap();
        assert!(state.layout.is_some());
        assert_eq!(state.layout_hashes.get(r#"["a"]"#).map(|e| e.hash), Some(1));
        assert!(state.config.debug);
    }
}
