use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The unique name a user is known by inside a [`SocialGraph`](crate::social::graph::SocialGraph).
#[derive(Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Name(pub Arc<str>);

impl Clone for Name {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl Default for Name {
    fn default() -> Self {
        Self("".into())
    }
}

impl Display for Name {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Name {
    #[inline]
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for Name {
    #[inline]
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<&Name> for Name {
    #[inline]
    fn from(value: &Name) -> Self {
        value.clone()
    }
}

impl From<Arc<str>> for Name {
    #[inline]
    fn from(value: Arc<str>) -> Self {
        Self(value)
    }
}

impl From<Name> for Arc<str> {
    #[inline]
    fn from(value: Name) -> Self {
        value.0
    }
}

impl AsRef<str> for Name {
    #[inline]
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl Deref for Name {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for Name {
    #[inline]
    fn borrow(&self) -> &str {
        self.0.as_ref()
    }
}

impl PartialEq<str> for Name {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_ref() == other
    }
}

impl PartialEq<&str> for Name {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_ref() == *other
    }
}

/// A member of the network and the users they follow, in the order the
/// follows were added. The same followee may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub name: Name,
    pub followees: Vec<Name>,
}

impl User {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn follow(&mut self, other: impl Into<Name>) {
        self.followees.push(other.into());
    }

    #[must_use]
    pub fn follows(&self, other: &str) -> bool {
        self.followees.iter().any(|it| it == other)
    }

    /// Distinct followees, for set comparisons.
    #[must_use]
    pub fn followee_set(&self) -> HashSet<Name> {
        self.followees.iter().cloned().collect()
    }

    /// Raw number of outgoing follows, duplicates included.
    #[must_use]
    #[inline]
    pub fn popularity(&self) -> usize {
        self.followees.len()
    }
}
