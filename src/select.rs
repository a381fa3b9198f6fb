//! State selection - component-scoped projections over [`RenderState`].
//!
//! A [`PropsSelector`] is built once per component path and then applied to
//! every state snapshot. It resolves the component, reads the path's
//! layout-hash entry, and hands back the five values a binding layer needs
//! to decide whether to re-render. The key property is the equality
//! shortcut: the change-hash already aggregates every upstream update, so
//! [`props_equal`] compares one integer instead of deep-comparing props.

use tracing::trace;

use crate::config::Config;
use crate::path::LayoutPath;
use crate::state::RenderState;
use crate::tree::{Component, Props};

/// Shared empty props for selections whose hash entry is absent.
static EMPTY_PROPS: Props = Props::new();

// =============================================================================
// Selected Props
// =============================================================================

/// The projection of one component's slice of the global state.
///
/// All fields borrow from the state snapshot the selection ran against.
/// Absent lookups degrade to defaults (`None`, `0`, empty map, `""`); they
/// are valid results, not failures.
///
/// Deliberately not `PartialEq`: tuple-wide comparison is exactly what the
/// change-hash replaces. Use [`props_equal`].
#[derive(Debug, Clone, Copy)]
pub struct SelectedProps<'s> {
    /// The component record at the path, if the path resolves.
    pub component: Option<&'s Component>,
    /// The resolved component's props.
    pub props: Option<&'s Props>,
    /// Change-hash for the path; `0` when no entry exists.
    pub hash: u64,
    /// Props changed by the update that produced the hash; empty when no
    /// entry exists.
    pub changed_props: &'s Props,
    /// Render-type label; `""` when no entry exists.
    pub render_type: &'s str,
}

// =============================================================================
// Props Selector
// =============================================================================

/// Reusable selector for one layout path.
///
/// Construction stringifies the path once; every [`select`](Self::select)
/// after that is a map lookup plus a tree walk, with no allocation.
///
/// # Example
///
/// ```
/// use facet_tui::path::LayoutPath;
/// use facet_tui::select::{select_props, props_equal};
/// use facet_tui::state::RenderState;
///
/// let path: LayoutPath = ["a", "b"].into_iter().collect();
/// let selector = select_props(path);
///
/// let state = RenderState::new();
/// let selected = selector.select(&state);
/// assert_eq!(selected.hash, 0);
/// assert_eq!(selected.render_type, "");
/// assert!(props_equal(&selected, &selector.select(&state)));
/// ```
#[derive(Debug, Clone)]
pub struct PropsSelector {
    path: LayoutPath,
    key: String,
}

impl PropsSelector {
    /// Build a selector for the given path.
    pub fn new(path: LayoutPath) -> Self {
        let key = path.to_key();
        Self { path, key }
    }

    /// The path this selector projects.
    pub fn path(&self) -> &LayoutPath {
        &self.path
    }

    /// The stringified path used as the layout-hash key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Project the component's slice out of a state snapshot.
    ///
    /// Pure read; the snapshot is not modified and nothing is cached.
    pub fn select<'s>(&self, state: &'s RenderState) -> SelectedProps<'s> {
        let component = state
            .layout
            .as_ref()
            .and_then(|root| root.resolve(&self.path));
        if component.is_none() {
            trace!(path = %self.key, "path does not resolve to a component");
        }
        let props = component.map(|c| &c.props);

        match state.layout_hashes.get(&self.key) {
            Some(entry) => SelectedProps {
                component,
                props,
                hash: entry.hash,
                changed_props: &entry.changed_props,
                render_type: &entry.render_type,
            },
            None => SelectedProps {
                component,
                props,
                hash: 0,
                changed_props: &EMPTY_PROPS,
                render_type: "",
            },
        }
    }
}

/// Build a [`PropsSelector`] for a layout path.
pub fn select_props(path: LayoutPath) -> PropsSelector {
    PropsSelector::new(path)
}

// =============================================================================
// Equality Comparator
// =============================================================================

/// True iff two selections carry the same change-hash.
///
/// Any change to a component or its ancestors is summed into the hash by
/// the host, so this one comparison substitutes for deep-comparing props.
/// Every other field is ignored on purpose.
#[inline]
pub fn props_equal(a: &SelectedProps<'_>, b: &SelectedProps<'_>) -> bool {
    a.hash == b.hash
}

// =============================================================================
// Config Selector
// =============================================================================

/// The config sub-object of the state, verbatim.
#[inline]
pub fn select_config(state: &RenderState) -> &Config {
    &state.config
}

// =============================================================================
// Tests
// =============================================================================
