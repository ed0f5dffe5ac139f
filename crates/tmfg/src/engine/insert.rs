//! Initialization, selection, subdivision and the run loop.

use nalgebra::DMatrix;

use crate::seed::Seed;

use super::types::{EngineState, Selection, StepRecord, Triangle};

/// Sum of `v`'s weights to the three corners of `t`.
#[inline]
pub fn face_gain(w: &DMatrix<f64>, v: usize, t: &Triangle) -> f64 {
    w[(v, t[0])] + w[(v, t[1])] + w[(v, t[2])]
}

impl EngineState {
    /// Register the tetrahedron's four faces and fill the gain table for them.
    ///
    /// Face order (seed `[a, b, c, d]`): `[a,b,c]`, `[a,b,d]`, `[a,c,d]`, `[b,c,d]`.
    pub fn init(w: &DMatrix<f64>, seed: &Seed) -> Self {
        let n = w.nrows();
        debug_assert!(n >= 4 && seed.outside.len() == n - 4);
        let [a, b, c, d] = seed.tetra;
        let slots = 2 * n - 4;

        let mut triangles = Vec::with_capacity(slots);
        triangles.extend([[a, b, c], [a, b, d], [a, c, d], [b, c, d]]);

        let mut edges = DMatrix::from_element(n, n, false);
        for (i, &p) in seed.tetra.iter().enumerate() {
            for &q in &seed.tetra[i + 1..] {
                edges[(p, q)] = true;
            }
        }

        let mut inserted = Vec::with_capacity(n);
        inserted.extend(seed.tetra);

        let mut state = Self {
            inserted,
            outside: seed.outside.clone(),
            triangles,
            gain: DMatrix::zeros(slots, n),
            edges,
            separators: Vec::with_capacity(n - 4),
            steps: Vec::with_capacity(n - 4),
        };
        for slot in 0..4 {
            state.refresh_slot(w, slot);
        }
        state
    }

    /// Recompute one face slot's gain for every outside vertex.
    fn refresh_slot(&mut self, w: &DMatrix<f64>, slot: usize) {
        let t = self.triangles[slot];
        for &v in &self.outside {
            self.gain[(slot, v)] = face_gain(w, v, &t);
        }
    }

    /// First live slot maximizing `v`'s gain.
    fn best_slot(&self, v: usize) -> Selection {
        let col = self.gain.column(v);
        let mut best = Selection {
            vertex: v,
            slot: 0,
            gain: col[0],
        };
        for slot in 1..self.triangles.len() {
            if col[slot] > best.gain {
                best.slot = slot;
                best.gain = col[slot];
            }
        }
        best
    }

    /// Best `(outside vertex, face slot)` pair, or `None` once every vertex is in.
    ///
    /// Scan order is outside vertices ascending, then slots ascending; only a
    /// strictly larger gain replaces the incumbent, so ties keep the earliest pair.
    pub fn select(&self) -> Option<Selection> {
        match self.outside.as_slice() {
            [] => None,
            [v] => Some(self.best_slot(*v)),
            vs => {
                let live = self.triangles.len();
                let mut best: Option<Selection> = None;
                for &v in vs {
                    let col = self.gain.column(v);
                    for slot in 0..live {
                        let g = col[slot];
                        if best.map_or(true, |b| g > b.gain) {
                            best = Some(Selection {
                                vertex: v,
                                slot,
                                gain: g,
                            });
                        }
                    }
                }
                best
            }
        }
    }

    /// Insert the best outside vertex. Returns `None` when nothing is left.
    ///
    /// Face `[a, b, c]` in slot `t` becomes `[a, b, v]` in place; `[a, c, v]`
    /// and `[b, c, v]` are appended.
    pub fn insert(&mut self, w: &DMatrix<f64>) -> Option<StepRecord> {
        let Selection { vertex: v, slot, gain } = self.select()?;
        let face = self.triangles[slot];
        let [a, b, c] = face;

        let pos = self.outside.binary_search(&v);
        debug_assert!(pos.is_ok(), "selected vertex {v} is not outside");
        if let Ok(pos) = pos {
            self.outside.remove(pos);
        }
        self.inserted.push(v);
        for &u in &face {
            self.edges[(v, u)] = true;
        }
        self.separators.push(face);

        self.triangles[slot] = [a, b, v];
        self.triangles.push([a, c, v]);
        self.triangles.push([b, c, v]);

        self.gain.column_mut(v).fill(0.0);
        let len = self.triangles.len();
        for s in [slot, len - 2, len - 1] {
            self.refresh_slot(w, s);
        }

        let record = StepRecord {
            vertex: v,
            slot,
            gain,
            separator: face,
        };
        tracing::trace!(
            k = self.inserted.len(),
            vertex = v,
            slot,
            gain,
            "insert"
        );
        self.steps.push(record.clone());
        Some(record)
    }
}

/// By-value step: the state after one insertion plus what it did.
pub fn step(mut state: EngineState, w: &DMatrix<f64>) -> (EngineState, Option<StepRecord>) {
    let record = state.insert(w);
    (state, record)
}

/// Initialize from `seed` and insert every outside vertex.
pub fn run(w: &DMatrix<f64>, seed: &Seed) -> EngineState {
    let mut state = EngineState::init(w, seed);
    while state.insert(w).is_some() {}
    state
}
