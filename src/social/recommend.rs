use std::cmp::Reverse;
use std::collections::HashSet;

use indicatif::ParallelProgressIterator;
use log::debug;
use rayon::prelude::*;

use crate::social::error::Result;
use crate::social::graph::SocialGraph;
use crate::social::similarity::jaccard;
use crate::social::user::{Name, User};
use crate::social::utils::get_pb;

/// How similar another user's follows are to the target's.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub name: Name,
    pub similarity: f64,
}

/// The outcome of [`SocialGraph::recommend`].
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// The user to follow next.
    pub candidate: Name,
    /// How many users the candidate follows.
    pub popularity: usize,
    /// The best similarity score found.
    pub similarity: f64,
    /// Everyone who reached that score, in insertion order.
    pub similar_users: Vec<Name>,
}

impl SocialGraph {
    /// Jaccard similarity between `name` and every other user, in insertion
    /// order.
    pub fn similarity_scores(&self, name: &str) -> Result<Vec<Score>> {
        let target = self.user(name)?;
        Ok(self.score_against(target))
    }

    fn score_against(&self, target: &User) -> Vec<Score> {
        let followees = target.followee_set();
        self.as_slice()
            .par_iter()
            .filter(|user| user.name != target.name)
            .map(|user| Score {
                name: user.name.clone(),
                similarity: jaccard(&followees, &user.followee_set()),
            })
            .collect()
    }

    /// Suggests someone for `name` to follow, or `None` when there is nobody
    /// left to suggest.
    pub fn suggest_friend(&self, name: &str) -> Result<Option<Name>> {
        Ok(self
            .recommend(name)?
            .map(|recommendation| recommendation.candidate))
    }

    /// Finds the users whose follows overlap most with `name`'s, pools
    /// together the people they follow that `name` doesn't, and picks the
    /// one that follows the most users itself.
    ///
    /// Every user tied for the best score contributes to the pool. Ties in
    /// popularity go to the candidate that entered the pool first.
    #[allow(clippy::float_cmp)]
    pub fn recommend(&self, name: &str) -> Result<Option<Recommendation>> {
        let target = self.user(name)?;
        let scores = self.score_against(target);

        let Some(best) = scores.iter().map(|score| score.similarity).reduce(f64::max) else {
            debug!("{name} has nobody to be compared with");
            return Ok(None);
        };

        let similar_users = scores
            .into_iter()
            .filter(|score| score.similarity == best)
            .map(|score| score.name)
            .collect::<Vec<_>>();
        debug!("most similar to {name} ({best}): {similar_users:?}");

        let followees = target.followee_set();
        let mut seen = HashSet::new();
        let mut pool = Vec::new();
        for similar in &similar_users {
            for candidate in &self.user(similar)?.followees {
                if *candidate == target.name || followees.contains(candidate) {
                    continue;
                }
                if seen.insert(candidate.clone()) {
                    pool.push(self.user(candidate)?);
                }
            }
        }
        debug!(
            "candidates for {name}: {:?}",
            pool.iter().map(|user| &user.name).collect::<Vec<_>>()
        );

        let Some(chosen) = pool.into_iter().min_by_key(|user| Reverse(user.popularity())) else {
            return Ok(None);
        };

        Ok(Some(Recommendation {
            candidate: chosen.name.clone(),
            popularity: chosen.popularity(),
            similarity: best,
            similar_users,
        }))
    }

    /// Runs [`SocialGraph::suggest_friend`] for every user, in insertion order.
    pub fn suggest_all(&self) -> Result<Vec<(Name, Option<Name>)>> {
        self.as_slice()
            .par_iter()
            .progress_with(get_pb(self.len() as u64, "Suggesting friends"))
            .map(|user| {
                self.suggest_friend(&user.name)
                    .map(|suggestion| (user.name.clone(), suggestion))
            })
            .collect()
    }
}
