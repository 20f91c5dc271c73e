//! Ordered command-line argument lists.

use std::fmt;

/// An ordered list of command-line argument strings.
///
/// Order is significant and is preserved by every capability query.
/// An empty list means "no extra arguments needed" - a valid answer,
/// distinct from "feature unsupported" (which is an error, never an
/// empty or absent list).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgList(Vec<String>);

impl ArgList {
    /// Create an empty argument list.
    pub fn new() -> Self {
        ArgList(Vec::new())
    }

    /// Append an argument.
    pub fn push(&mut self, arg: impl Into<String>) {
        self.0.push(arg.into());
    }

    /// Append all arguments from another list, preserving order.
    pub fn extend(&mut self, other: impl IntoIterator<Item = impl Into<String>>) {
        self.0.extend(other.into_iter().map(|a| a.into()));
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the arguments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// View the arguments as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume the list, yielding the underlying vector.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for ArgList {
    fn from(args: Vec<String>) -> Self {
        ArgList(args)
    }
}

impl FromIterator<String> for ArgList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        ArgList(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for ArgList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        ArgList(iter.into_iter().map(|a| a.to_string()).collect())
    }
}

impl IntoIterator for ArgList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArgList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ArgList {
    /// Space-joined rendering for log lines; not shell-safe quoting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}
