//! 4-clique hierarchy: the seed tetrahedron plus one clique per insertion.
//!
//! Clique 0 is the seed; clique `k >= 1` is the separator buried at step `k`
//! together with the vertex inserted there. Two cliques are linked in the
//! clique adjacency iff they share exactly three vertices. That relation is
//! computed by counting, without any acyclicity check, so with heavily tied
//! weights it can carry more than `N-4` links. `parents` always forms a tree.

use nalgebra::DMatrix;

use crate::engine::{EngineState, StepRecord, Triangle};

pub type Clique = [usize; 4];

#[derive(Clone, Debug, PartialEq)]
pub struct CliqueHierarchy {
    /// `N-3` cliques; clique 0 is the seed tetrahedron.
    pub cliques: Vec<Clique>,
    /// `parents[k]` owns the face buried at step `k`; `None` for clique 0.
    pub parents: Vec<Option<usize>>,
    /// `(N-3)×(N-3)` 0/1 adjacency, present when requested.
    pub tree: Option<DMatrix<u8>>,
}

impl CliqueHierarchy {
    pub fn from_engine(state: &EngineState, with_tree: bool) -> Self {
        let cliques = clique_list(state.tetra(), &state.separators, &state.inserted);
        let parents = clique_parents(&state.steps);
        let tree = with_tree.then(|| clique_adjacency(&cliques));
        Self {
            cliques,
            parents,
            tree,
        }
    }

    /// Links in the clique adjacency (`i < j`).
    pub fn tree_edges(&self) -> Vec<(usize, usize)> {
        let Some(t) = &self.tree else {
            return Vec::new();
        };
        let m = t.nrows();
        let mut out = Vec::new();
        for i in 0..m {
            for j in i + 1..m {
                if t[(i, j)] != 0 {
                    out.push((i, j));
                }
            }
        }
        out
    }
}

/// Seed tetrahedron, then `separators[k] ∪ {order[4 + k]}` for each step.
pub fn clique_list(tetra: [usize; 4], separators: &[Triangle], order: &[usize]) -> Vec<Clique> {
    let mut out = Vec::with_capacity(separators.len() + 1);
    out.push(tetra);
    for (k, sep) in separators.iter().enumerate() {
        out.push([sep[0], sep[1], sep[2], order[4 + k]]);
    }
    out
}

/// Owner of each buried face, replayed from the face slots the steps used.
///
/// The seed owns slots 0..4; step `k` hands its overwritten slot and the two
/// appended slots to clique `k + 1`.
pub fn clique_parents(steps: &[StepRecord]) -> Vec<Option<usize>> {
    let mut owner: Vec<usize> = vec![0; 4];
    owner.reserve(2 * steps.len());
    let mut parents = Vec::with_capacity(steps.len() + 1);
    parents.push(None);
    for (k, s) in steps.iter().enumerate() {
        let clique = k + 1;
        parents.push(Some(owner[s.slot]));
        owner[s.slot] = clique;
        owner.push(clique);
        owner.push(clique);
    }
    parents
}

/// 1 where two cliques share exactly three vertices.
pub fn clique_adjacency(cliques: &[Clique]) -> DMatrix<u8> {
    let m = cliques.len();
    let mut t = DMatrix::zeros(m, m);
    for i in 0..m {
        for j in i + 1..m {
            if shared(&cliques[i], &cliques[j]) == 3 {
                t[(i, j)] = 1;
                t[(j, i)] = 1;
            }
        }
    }
    t
}

#[inline]
fn shared(a: &Clique, b: &Clique) -> usize {
    a.iter().filter(|v| b.contains(v)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::run;
    use crate::seed::Seed;
    use crate::synth::uniform;

    fn uniform_run(n: usize) -> EngineState {
        let w = uniform(n, 1.0);
        let seed = Seed {
            tetra: [0, 1, 2, 3],
            outside: (4..n).collect(),
            strength: vec![0.0; n],
        };
        run(&w, &seed)
    }

    #[test]
    fn list_joins_separator_and_inserted_vertex() {
        let st = uniform_run(6);
        let h = CliqueHierarchy::from_engine(&st, false);
        assert_eq!(h.cliques, vec![[0, 1, 2, 3], [0, 1, 2, 4], [0, 1, 4, 5]]);
        assert_eq!(h.parents, vec![None, Some(0), Some(1)]);
        assert!(h.tree.is_none());
        assert!(h.tree_edges().is_empty());
    }

    #[test]
    fn adjacency_links_three_vertex_overlaps() {
        let st = uniform_run(6);
        let h = CliqueHierarchy::from_engine(&st, true);
        let t = h.tree.as_ref().unwrap();
        assert_eq!(t.shape(), (3, 3));
        // {0,1,2,3} ∩ {0,1,4,5} = {0,1}: not linked.
        assert_eq!(h.tree_edges(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn parents_share_three_vertices() {
        let st = uniform_run(15);
        let h = CliqueHierarchy::from_engine(&st, true);
        assert_eq!(h.cliques.len(), 12);
        for (k, p) in h.parents.iter().enumerate().skip(1) {
            let p = p.unwrap();
            assert!(p < k);
            assert_eq!(shared(&h.cliques[k], &h.cliques[p]), 3);
            assert_eq!(h.tree.as_ref().unwrap()[(k, p)], 1);
        }
    }
}
