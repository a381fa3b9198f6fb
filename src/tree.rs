//! Component tree - data-described components and path resolution.
//!
//! A component is a type label plus a properties mapping. Prop values are
//! JSON-like and may embed child components, so trees nest through ordinary
//! prop keys (a `children` prop holding a list of components is the common
//! shape, but nothing here privileges that name).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::path::{LayoutPath, PathSegment};

/// A properties mapping: prop name to value.
pub type Props = BTreeMap<String, PropValue>;

// =============================================================================
// Prop Value
// =============================================================================

/// A property value in the layout tree.
///
/// JSON-like, with one addition: a value can be a nested [`Component`],
/// which is how children are expressed in a data-described layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<PropValue>),
    /// A nested child component. Tried before `Map` when deserializing, so
    /// objects carrying a `type` field load as components.
    Component(Box<Component>),
    Map(Props),
}

impl PropValue {
    /// The nested component, if this value is one.
    pub fn as_component(&self) -> Option<&Component> {
        match self {
            Self::Component(component) => Some(component),
            _ => None,
        }
    }

    /// The string content, if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean content, if this value is a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer content, if this value is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(values: Vec<PropValue>) -> Self {
        Self::List(values)
    }
}

impl From<Component> for PropValue {
    fn from(component: Component) -> Self {
        Self::Component(Box::new(component))
    }
}

// =============================================================================
// Component
// =============================================================================

/// A component record: a type label and its properties.
///
/// The type label names the component kind in the host framework's registry
/// (`"box"`, `"text"`, ...); this crate treats it as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Component {
    /// Component kind, as registered with the host framework.
    #[serde(rename = "type")]
    pub component_type: String,
    /// Properties, including any nested children.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: Props,
}

impl Component {
    /// Create a component with no props.
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            props: Props::new(),
        }
    }

    /// Builder-style prop insertion.
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Resolve a layout path to the component it addresses.
    ///
    /// Key segments read props (or map entries), index segments read list
    /// elements, and the walk must end on a component. The empty path
    /// resolves to `self`. A path that leads nowhere, or that ends on a
    /// plain value, yields `None` - a valid miss, not an error.
    pub fn resolve(&self, path: &LayoutPath) -> Option<&Component> {
        let mut node = self;
        let mut segments = path.segments().iter();
        'component: loop {
            let Some(segment) = segments.next() else {
                return Some(node);
            };
            let mut value = match segment {
                PathSegment::Key(key) => node.props.get(key)?,
                // Components are keyed by prop name, never by position.
                PathSegment::Index(_) => return None,
            };
            loop {
                if let PropValue::Component(component) = value {
                    node = component;
                    continue 'component;
                }
                let Some(segment) = segments.next() else {
                    return None;
                };
                value = match (segment, value) {
                    (PathSegment::Key(key), PropValue::Map(map)) => map.get(key)?,
                    (PathSegment::Index(index), PropValue::List(items)) => items.get(*index)?,
                    _ => return None,
                };
            }
        }
    }

    /// Resolve a layout path to the props of the component it addresses.
    pub fn resolve_props(&self, path: &LayoutPath) -> Option<&Props> {
        self.resolve(path).map(|component| &component.props)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// A small tree: root box holding a list of children under "children"
    /// and a direct "footer" component prop.
    fn sample_tree() -> Component {
        Component::new("box")
            .with_prop(
                "children",
                vec![
                    Component::new("text").with_prop("content", "hello").into(),
                    Component::new("input").with_prop("value", "").into(),
                ],
            )
            .with_prop("footer", Component::new("text").with_prop("content", "bye"))
            .with_prop("visible", true)
    }

    #[test]
    fn test_resolve_root() {
        let tree = sample_tree();
        let found = tree.resolve(&LayoutPath::root()).unwrap();
        assert_eq!(found.component_type, "box");
    }

    #[test]
    fn test_resolve_through_list() {
        let tree = sample_tree();
        let path: LayoutPath = LayoutPath::root().child("children").child(1usize);
        let found = tree.resolve(&path).unwrap();
        assert_eq!(found.component_type, "input");
    }

    #[test]
    fn test_resolve_direct_component_prop() {
        let tree = sample_tree();
        let path: LayoutPath = LayoutPath::root().child("footer");
        let found = tree.resolve(&path).unwrap();
        assert_eq!(found.component_type, "text");
        assert_eq!(
            found.props.get("content").and_then(PropValue::as_str),
            Some("bye")
        );
    }

    #[test]
    fn test_resolve_nested_chain() {
        let inner = Component::new("text").with_prop("content", "deep");
        let middle = Component::new("box").with_prop("children", vec![inner.into()]);
        let root = Component::new("box").with_prop("children", vec![middle.into()]);

        let path: LayoutPath = LayoutPath::root()
            .child("children")
            .child(0usize)
            .child("children")
            .child(0usize);
        let found = root.resolve(&path).unwrap();
        assert_eq!(found.component_type, "text");
    }

    #[test]
    fn test_resolve_misses() {
        let tree = sample_tree();

        // Unknown prop.
        let missing: LayoutPath = LayoutPath::root().child("nope");
        assert!(tree.resolve(&missing).is_none());

        // Index out of bounds.
        let out_of_bounds: LayoutPath = LayoutPath::root().child("children").child(9usize);
        assert!(tree.resolve(&out_of_bounds).is_none());

        // Path ends on a plain value, not a component.
        let plain: LayoutPath = LayoutPath::root().child("visible");
        assert!(tree.resolve(&plain).is_none());

        // Index segment against a component.
        let indexed: LayoutPath = [PathSegment::Index(0)].into_iter().collect();
        assert!(tree.resolve(&indexed).is_none());
    }

    #[test]
    fn test_resolve_props() {
        let tree = sample_tree();
        let path: LayoutPath = LayoutPath::root().child("children").child(0usize);
        let props = tree.resolve_props(&path).unwrap();
        assert_eq!(props.get("content").and_then(PropValue::as_str), Some("hello"));
    }

    #[test]
    fn test_component_deserializes_from_json() {
        let json = r#"{
            "type": "box",
            "props": {
                "visible": true,
                "children": [
                    {"type": "text", "props": {"content": "hi"}}
                ]
            }
        }"#;
        let component: Component = serde_json::from_str(json).unwrap();
        assert_eq!(component.component_type, "box");

        let path: LayoutPath = LayoutPath::root().child("children").child(0usize);
        let child = component.resolve(&path).unwrap();
        assert_eq!(child.component_type, "text");
    }

    #[test]
    fn test_plain_map_stays_a_map() {
        // An object without a "type" field must not load as a component.
        let json = r#"{"type": "box", "props": {"style": {"pad": 1}}}"#;
        let component: Component = serde_json::from_str(json).unwrap();
        assert!(matches!(
            component.props.get("style"),
            Some(PropValue::Map(_))
        ));
    }
}
