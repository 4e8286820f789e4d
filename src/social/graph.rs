use std::collections::HashMap;

use log::trace;

use crate::social::error::{Error, Result};
use crate::social::user::{Name, User};

/// A directed "follows" network.
///
/// Users are kept in the order they were first referenced; that order drives
/// [`SocialGraph::list_users`], the DOT export and every tie-break in the
/// recommendation algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialGraph {
    users: Vec<User>,
    index: HashMap<Name, usize>,
}

impl SocialGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All user names in insertion order.
    #[must_use]
    pub fn list_users(&self) -> Vec<Name> {
        self.users.iter().map(|user| user.name.clone()).collect()
    }

    /// Registers `name` with no follows. Existing users are left untouched.
    pub fn add_user(&mut self, name: impl Into<Name>) -> usize {
        let name = name.into();
        if let Some(&idx) = self.index.get(&name) {
            return idx;
        }

        let idx = self.users.len();
        trace!("adding user {name} at {idx}");
        self.index.insert(name.clone(), idx);
        self.users.push(User::new(name));
        idx
    }

    /// Records "`follower` follows `followee`", creating either side if needed.
    pub fn add_follow(&mut self, follower: impl Into<Name>, followee: impl Into<Name>) {
        let follower = follower.into();
        let followee = followee.into();

        let follower_idx = self.add_user(follower);
        let followee_idx = self.add_user(followee);
        let followee = self.users[followee_idx].name.clone();

        trace!("{} -> {followee}", self.users[follower_idx].name);
        self.users[follower_idx].follow(followee);
    }

    /// Names `name` follows, in insertion order.
    pub fn get_followees(&self, name: &str) -> Result<Vec<Name>> {
        Ok(self.user(name)?.followees.clone())
    }

    pub fn user(&self, name: &str) -> Result<&User> {
        self.index
            .get(name)
            .map(|&idx| &self.users[idx])
            .ok_or_else(|| Error::UnknownUser(name.into()))
    }

    #[must_use]
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[User] {
        &self.users
    }

    #[inline]
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    /// Every (follower, followee) pair, outer loop over users and inner loop
    /// over their follows.
    pub fn edges(&self) -> impl Iterator<Item = (&Name, &Name)> {
        self.users.iter().flat_map(|user| {
            user.followees
                .iter()
                .map(move |followee| (&user.name, followee))
        })
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.users.iter().map(User::popularity).sum()
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
