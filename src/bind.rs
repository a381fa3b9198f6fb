//! Reactive bindings - effects that re-select when the state signal moves.
//!
//! The binding layer is where the equality shortcut pays off: each binding
//! runs its selector inside an effect and notifies its callback only when
//! the change-hash differs from the one it last delivered, so a state
//! update that left a component untouched costs that component one integer
//! comparison.

use spark_signals::{Signal, effect};
use tracing::debug;

use crate::config::Config;
use crate::path::LayoutPath;
use crate::select::{PropsSelector, SelectedProps, select_config};
use crate::state::RenderState;

/// Cleanup function returned by bindings.
///
/// Call it to tear the binding down and stop its effect.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Props Binding
// =============================================================================

/// Bind a callback to one component's slice of the state.
///
/// The callback runs once immediately with the initial selection, then
/// again whenever the state signal changes *and* the path's change-hash
/// differs from the last delivered one - the same rule as
/// [`props_equal`](crate::select::props_equal).
///
/// # Example
///
/// ```ignore
/// use facet_tui::bind::bind_props;
/// use facet_tui::path::LayoutPath;
/// use facet_tui::state::RenderState;
/// use spark_signals::signal;
///
/// let state = signal(RenderState::new());
/// let path = LayoutPath::root().child("children").child(0usize);
///
/// let cleanup = bind_props(&state, path, |selected| {
///     // schedule a re-render using selected.render_type
/// });
///
/// // ... host reducers call state.set(next_state) ...
///
/// cleanup();
/// ```
pub fn bind_props<F>(state: &Signal<RenderState>, path: LayoutPath, on_change: F) -> Cleanup
where
    F: Fn(SelectedProps<'_>) + 'static,
{
    let selector = PropsSelector::new(path);
    let state = state.clone();
    let mut last_hash: Option<u64> = None;

    let stop = effect(move || {
        // Reading the signal registers the dependency.
        let snapshot = state.get();
        let selected = selector.select(&snapshot);

        // The hash stands in for the props, exactly as in props_equal.
        if last_hash != Some(selected.hash) {
            last_hash = Some(selected.hash);
            debug!(path = %selector.key(), hash = selected.hash, "props binding notified");
            on_change(selected);
        }
    });

    Box::new(stop)
}

// =============================================================================
// Config Binding
// =============================================================================

/// Bind a callback to the config sub-object.
///
/// Config carries no change-hash, so this binding falls back to value
/// equality: the callback runs once immediately, then whenever the config
/// differs from the last delivered one.
pub fn bind_config<F>(state: &Signal<RenderState>, on_change: F) -> Cleanup
where
    F: Fn(&Config) + 'static,
{
    let state = state.clone();
    let mut last: Option<Config> = None;

    let stop = effect(move || {
        let snapshot = state.get();
        let config = select_config(&snapshot);

        if last.as_ref() != Some(config) {
            last = Some(config.clone());
            debug!("config binding notified");
            on_change(config);
        }
    });

    Box::new(stop)
}

// =============================================================================
// Tests
// =============================================================================
