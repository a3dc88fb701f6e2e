//! Style attribute parsing.
//!
//! [CSS Style Attributes](https://www.w3.org/TR/css-style-attr/)
//!
//! "The value of the style attribute must match the syntax of the contents of
//! a CSS declaration block (excluding the delimiting braces)."
//!
//! Values are kept as raw strings here. Each consumer parses only the
//! properties it handles, so an unsupported value degrades to "that property
//! has no effect" rather than invalidating the whole block.

use std::collections::BTreeMap;

use serde::Serialize;

/// [§ 3.3 Inheritance](https://www.w3.org/TR/css-cascade-4/#inheriting)
///
/// Properties that flow from an element to its descendants' text.
/// `text-decoration` is not inherited in CSS, but decorations propagate to
/// inline descendants, which has the same visible effect for text runs.
const INHERITED_PROPERTIES: &[&str] = &[
    "color",
    "font-family",
    "font-size",
    "font-style",
    "font-weight",
    "letter-spacing",
    "line-height",
    "text-align",
    "text-decoration",
    "text-decoration-line",
];

/// A flat map of lower-case property name to raw value.
///
/// Shorthands are not expanded: `padding` and `padding-top` are separate
/// entries and the box model decides how they combine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParsedStyle {
    declarations: BTreeMap<String, String>,
}

impl ParsedStyle {
    /// Create an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `"prop: value; prop: value"` declaration list.
    ///
    /// [§ 5.4.5 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations)
    ///
    /// "If the same property is declared more than once, the last one wins."
    /// Semicolons and colons inside quotes or parentheses do not split.
    /// Comments are dropped, a trailing `!important` is dropped, and
    /// declarations without a name or value are skipped.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let mut style = Self::new();
        let source = strip_comments(source);
        for declaration in split_top_level(&source, ';') {
            let Some((name, value)) = split_declaration(declaration) else {
                continue;
            };
            style.set(name, value);
        }
        style
    }

    /// Raw value of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations.get(name).map(String::as_str)
    }

    /// Returns `true` if the property is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.declarations.contains_key(name)
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, name: &str, value: &str) {
        let _ = self
            .declarations
            .insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
    }

    /// Remove a property, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.declarations.remove(name)
    }

    /// Overlay `other` on top of `self`; declarations in `other` win.
    pub fn extend(&mut self, other: &Self) {
        for (name, value) in &other.declarations {
            let _ = self.declarations.insert(name.clone(), value.clone());
        }
    }

    /// Only the declarations that descendants inherit.
    #[must_use]
    pub fn inheritable(&self) -> Self {
        let declarations = self
            .declarations
            .iter()
            .filter(|(name, _)| INHERITED_PROPERTIES.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        Self { declarations }
    }

    /// Iterate over `(property, value)` pairs in property-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns `true` if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for ParsedStyle {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut style = Self::new();
        for (name, value) in iter {
            style.set(name, value);
        }
        style
    }
}

/// Split a value into its whitespace-separated components.
///
/// Whitespace inside parentheses or quotes does not split, so
/// `"calc(100% - 8px) 4px"` yields two components.
#[must_use]
pub fn split_components(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start: Option<usize> = None;

    for (i, c) in value.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => {
                quote = Some(c);
                let _ = start.get_or_insert(i);
            }
            (None, '(') => {
                depth += 1;
                let _ = start.get_or_insert(i);
            }
            (None, ')') => depth = depth.saturating_sub(1),
            (None, c) if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    parts.push(&value[s..i]);
                }
            }
            (None, _) => {
                let _ = start.get_or_insert(i);
            }
        }
    }
    if let Some(s) = start {
        parts.push(&value[s..]);
    }
    parts
}

/// Split on `delimiter` outside of quotes and parentheses.
fn split_top_level(source: &str, delimiter: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in source.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, c) if c == delimiter && depth == 0 => {
                parts.push(&source[start..i]);
                start = i + c.len_utf8();
            }
            (None, _) => {}
        }
    }
    parts.push(&source[start..]);
    parts
}

/// Split a single declaration at its first top-level colon.
fn split_declaration(declaration: &str) -> Option<(&str, &str)> {
    let (name, value) = declaration.split_once(':')?;
    let name = name.trim();
    let mut value = value.trim();

    // [§ 6.4.2 Important Declarations](https://www.w3.org/TR/css-cascade-4/#importance)
    // A style attribute is a single origin, so importance has nothing to
    // compete with; drop the annotation and keep the value.
    if let Some(bang) = value.rfind('!')
        && value[bang + 1..].trim().eq_ignore_ascii_case("important")
    {
        value = value[..bang].trim_end();
    }

    if name.is_empty() || value.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some((name, value))
}

/// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
///
/// Remove `/* ... */` comments. An unterminated comment runs to the end.
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(open) = rest.find("/*") {
        out.push_str(&rest[..open]);
        match rest[open + 2..].find("*/") {
            Some(close) => rest = &rest[open + 2 + close + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}
