//! Class token list.

use std::fmt;

/// Ordered set of class tokens, mirroring the DOM `classList`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a class list from optional parts, skipping absent or blank ones.
    ///
    /// Each part may hold several whitespace-separated tokens.
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for part in parts.into_iter().flatten() {
            list.extend_str(part.as_ref());
        }
        list
    }

    /// Add a single token. Returns true if the token was not already present.
    pub fn add(&mut self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove a token. Returns true if it was present.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    /// Toggle a token, optionally forcing its presence.
    /// Returns whether the token is present afterwards.
    pub fn toggle(&mut self, token: &str, force: Option<bool>) -> bool {
        let present = force.unwrap_or(!self.contains(token));
        if present {
            self.add(token);
        } else {
            self.remove(token);
        }
        self.contains(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add every whitespace-separated token in `classes`.
    pub fn extend_str(&mut self, classes: &str) {
        for token in classes.split_whitespace() {
            self.add(token);
        }
    }

    pub fn extend(&mut self, other: &ClassList) {
        for token in &other.tokens {
            self.add(token);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        let mut list = Self::new();
        list.extend_str(classes);
        list
    }
}
