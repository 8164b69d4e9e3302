//! Cosine-similarity role adjacency.
//!
//! Each role is embedded as a dense vector over the sorted vocabulary of every
//! indexed skill (weight 0 where the role has no entry). Roles are then ranked
//! against each other by cosine similarity. Cost is O(R² · V), which suits the
//! role counts of a single organisation's extract.

use crate::index::SkillIndex;
use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Neighbors kept for next-role suggestions.
pub const NEXT_ROLE_NEIGHBORS: usize = 5;
/// Neighbors kept when matching mentor roles.
pub const MENTOR_ROLE_NEIGHBORS: usize = 10;

/// Cosine similarity of two equal-length vectors.
///
/// Returns 0.0 when either vector has zero norm. For the non-negative vectors
/// produced by [`SkillIndex`] the result lies in [0.0, 1.0].
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let nb = b.iter().map(|y| y * y).sum::<f64>().sqrt();
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    (dot / (na * nb)).clamp(0.0, 1.0)
}

/// Sorted union of every skill in the index.
pub fn vocabulary(index: &SkillIndex) -> Vec<&str> {
    index
        .roles()
        .flat_map(|(_, skills)| skills.keys().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// A neighboring role and its similarity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    /// Neighbor role name.
    pub role: String,
    /// Cosine similarity in [0.0, 1.0].
    pub similarity: f64,
}

/// Role → nearest roles, most similar first, never including the role itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleAdjacency {
    neighbors: IndexMap<String, Vec<Neighbor>>,
}

impl RoleAdjacency {
    /// Computes the top `top_k` neighbors of every indexed role.
    ///
    /// Ties keep the neighbors' order in the index.
    pub fn build(index: &SkillIndex, top_k: usize) -> Self {
        let vocab = vocabulary(index);
        let embedded: Vec<(&str, Vec<f64>)> = index
            .roles()
            .map(|(role, skills)| {
                let vector = vocab
                    .iter()
                    .map(|skill| skills.get(*skill).copied().unwrap_or(0.0))
                    .collect();
                (role, vector)
            })
            .collect();

        let mut neighbors = IndexMap::with_capacity(embedded.len());
        for (i, (role, vector)) in embedded.iter().enumerate() {
            let mut sims: Vec<Neighbor> = embedded
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, (other, other_vector))| Neighbor {
                    role: other.to_string(),
                    similarity: cosine(vector, other_vector),
                })
                .collect();
            sims.sort_by(|a, b| {
                b.similarity
                    .partial_cmp(&a.similarity)
                    .unwrap_or(Ordering::Equal)
            });
            sims.truncate(top_k);
            neighbors.insert(role.to_string(), sims);
        }

        tracing::debug!(
            target: "pathfinder::intelligence",
            roles = neighbors.len(),
            vocabulary = vocab.len(),
            top_k,
            "Computed role adjacency"
        );
        Self { neighbors }
    }

    /// Neighbors of `role`; empty for roles absent from the index.
    pub fn neighbors(&self, role: &str) -> &[Neighbor] {
        self.neighbors.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates every role with its neighbor list.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Neighbor])> {
        self.neighbors.iter().map(|(r, n)| (r.as_str(), n.as_slice()))
    }
}
