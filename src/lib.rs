//! # facet-tui
//!
//! Component-scoped state selection and change tracking for terminal UI
//! trees.
//!
//! A rendering framework keeps one global state value: the mounted
//! component tree, a table of per-path change-hashes, and its config.
//! facet-tui is the read side of that arrangement: it projects one
//! component's slice out of the state and tells the binding layer whether
//! that slice changed - by comparing a single integer instead of
//! deep-comparing props.
//!
//! ## Architecture
//!
//! ```text
//! Signal<RenderState> → PropsSelector::select → SelectedProps
//!                                │                    │
//!                                └─ hash comparison ──┴──▶ bound callback
//! ```
//!
//! The change-hash is maintained by the host (summed over a path and its
//! ancestors on every update); this crate only reads it. Absent lookups
//! degrade to defaults - a path with no entry selects hash `0`, empty
//! changed-props, and an empty render-type.
//!
//! ## Modules
//!
//! - [`path`] - Layout paths, stringification, parsing
//! - [`tree`] - `PropValue`, `Component`, path resolution
//! - [`hashes`] - Per-path change-hash entries
//! - [`config`] - The framework config sub-object
//! - [`state`] - `RenderState`, the host-owned container
//! - [`select`] - Selectors and the hash-equality comparator
//! - [`bind`] - Reactive bindings over [spark-signals](https://github.com/RLabs-Inc/spark-signals)

pub mod bind;
pub mod config;
pub mod hashes;
pub mod path;
pub mod select;
pub mod state;
pub mod tree;

// Re-export commonly used items
pub use bind::{Cleanup, bind_config, bind_props};
pub use config::Config;
pub use hashes::{HashEntry, LayoutHashes};
pub use path::{LayoutPath, PathError, PathSegment};
pub use select::{PropsSelector, SelectedProps, props_equal, select_config, select_props};
pub use state::RenderState;
pub use tree::{Component, PropValue, Props};
