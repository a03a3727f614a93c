//! crates/logging/src/style.rs
//! CSS-like style declarations attached to text segments and scope labels.

use serde::{Deserialize, Serialize};

/// Ordered set of CSS declarations keyed by camelCase property name.
///
/// Declarations keep their insertion order so the serialized CSS string is
/// stable. Setting a property twice replaces the earlier value in place.
///
/// ```
/// use logscope::StyleMap;
///
/// let style = StyleMap::new().with("color", "red").with("fontWeight", "bold");
/// assert_eq!(style.to_css(), "color:red;font-weight:bold");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    declarations: Vec<(String, String)>,
}

impl StyleMap {
    /// Creates an empty style map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// Returns the map with `property` set to `value`.
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Sets `property` to `value`, replacing any previous declaration.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();

        match self.declarations.iter_mut().find(|(name, _)| *name == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
    }

    /// Returns the value declared for `property`, if any.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Reports whether the map holds no declaration.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Iterates over the declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Serializes the declarations into an inline CSS string.
    ///
    /// Property names are converted from camelCase to kebab-case and the
    /// declarations are joined with `;` without a trailing separator.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        for (index, (name, value)) in self.declarations.iter().enumerate() {
            if index > 0 {
                css.push(';');
            }
            push_kebab_case(&mut css, name);
            css.push(':');
            css.push_str(value);
        }

        css
    }
}

fn push_kebab_case(buffer: &mut String, property: &str) {
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            buffer.push('-');
            buffer.push(ch.to_ascii_lowercase());
        } else {
            buffer.push(ch);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Self::new();
        for (property, value) in iter {
            style.set(property, value);
        }
        style
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for StyleMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(declarations: [(K, V); N]) -> Self {
        declarations.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_serializes_to_empty_string() {
        assert_eq!(StyleMap::new().to_css(), "");
        assert!(StyleMap::default().is_empty());
    }

    #[test]
    fn camel_case_properties_become_kebab_case() {
        let style = StyleMap::from([("backgroundColor", "black"), ("borderTopLeftRadius", "2px")]);
        assert_eq!(style.to_css(), "background-color:black;border-top-left-radius:2px");
    }

    #[test]
    fn values_are_copied_verbatim() {
        let style = StyleMap::from([("color", " red")]);
        assert_eq!(style.to_css(), "color: red");
    }

    #[test]
    fn setting_twice_replaces_in_place() {
        let mut style = StyleMap::from([("color", "red"), ("fontWeight", "bold")]);
        style.set("color", "blue");

        assert_eq!(style.len(), 2);
        assert_eq!(style.get("color"), Some("blue"));
        assert_eq!(style.to_css(), "color:blue;font-weight:bold");
    }

    #[test]
    fn deserializes_from_ordered_pairs() {
        let style: StyleMap = serde_json::from_str(r#"[["color","purple"],["fontSize","12px"]]"#)
            .expect("valid style");
        assert_eq!(style.to_css(), "color:purple;font-size:12px");
    }
}
