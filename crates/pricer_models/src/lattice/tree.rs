//! Recombining binomial price tree.
//!
//! A tree with `n` steps has `n + 1` levels; level `i` holds `i + 1` nodes and
//! node `(i, j)` is reached by `j` down-moves and `i - j` up-moves from the
//! root. All levels live in one contiguous arena, level `i` starting at
//! offset `i(i+1)/2`. Trees are built once and are read-only afterwards.

use super::error::LatticeError;

/// Arena offset of the first node of `level`.
#[inline]
pub(crate) const fn offset(level: usize) -> usize {
    level * (level + 1) / 2
}

/// Total node count of a tree with `steps` steps.
#[inline]
pub const fn node_count(steps: usize) -> usize {
    offset(steps + 1)
}

/// Immutable triangular tree of node values.
///
/// Serialises as an array of levels, e.g. `[[100.0], [110.0, 90.9]]`.
///
/// # Examples
/// ```
/// use pricer_models::lattice::build_underlying_tree;
///
/// let tree = build_underlying_tree(100.0, 1.1, 1.0 / 1.1, 2).unwrap();
/// assert_eq!(tree.num_levels(), 3);
/// assert_eq!(tree.root(), 100.0);
/// assert_eq!(tree.level(1).unwrap().len(), 2);
/// assert!((tree.get(2, 1).unwrap() - 100.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<f64>>"))]
pub struct PriceTree {
    steps: usize,
    nodes: Vec<f64>,
}

impl PriceTree {
    /// Wraps an arena already laid out level by level.
    pub(crate) fn from_arena(steps: usize, nodes: Vec<f64>) -> Self {
        debug_assert_eq!(nodes.len(), node_count(steps));
        Self { steps, nodes }
    }

    /// Builds a tree from nested levels, checking the triangular shape.
    ///
    /// # Errors
    /// `LatticeError::MalformedTree` if there are no levels or level `i`
    /// does not hold exactly `i + 1` values.
    pub fn from_levels(levels: Vec<Vec<f64>>) -> Result<Self, LatticeError> {
        if levels.is_empty() {
            return Err(LatticeError::MalformedTree {
                message: "tree has no levels".to_string(),
            });
        }
        let steps = levels.len() - 1;
        let mut nodes = Vec::with_capacity(node_count(steps));
        for (i, level) in levels.into_iter().enumerate() {
            if level.len() != i + 1 {
                return Err(LatticeError::MalformedTree {
                    message: format!("level {i} has {} nodes, expected {}", level.len(), i + 1),
                });
            }
            nodes.extend(level);
        }
        Ok(Self { steps, nodes })
    }

    /// Number of steps (levels minus one).
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of levels (`steps + 1`).
    #[inline]
    pub fn num_levels(&self) -> usize {
        self.steps + 1
    }

    /// Total number of nodes across all levels.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Value at `(level, node)`, or `None` outside the triangle.
    #[inline]
    pub fn get(&self, level: usize, node: usize) -> Option<f64> {
        if level > self.steps || node > level {
            return None;
        }
        Some(self.nodes[offset(level) + node])
    }

    /// All nodes of one level, ordered by number of down-moves.
    #[inline]
    pub fn level(&self, level: usize) -> Option<&[f64]> {
        if level > self.steps {
            return None;
        }
        let start = offset(level);
        Some(&self.nodes[start..start + level + 1])
    }

    /// Iterates over levels from the root to the terminal layer.
    pub fn levels(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        (0..self.steps + 1).map(move |i| {
            let start = offset(i);
            &self.nodes[start..start + i + 1]
        })
    }

    /// Value at the root node.
    #[inline]
    pub fn root(&self) -> f64 {
        self.nodes[0]
    }

    /// The terminal level (`steps + 1` nodes).
    #[inline]
    pub fn terminal(&self) -> &[f64] {
        &self.nodes[offset(self.steps)..]
    }

    /// Copies the tree into nested vectors.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.levels().map(<[f64]>::to_vec).collect()
    }

    /// The whole arena, level by level.
    #[inline]
    pub(crate) fn as_slice(&self) -> &[f64] {
        &self.nodes
    }

    /// Position of the first non-finite node, if any.
    pub(crate) fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.levels().enumerate().find_map(|(i, level)| {
            level
                .iter()
                .position(|value| !value.is_finite())
                .map(|j| (i, j))
        })
    }
}

impl TryFrom<Vec<Vec<f64>>> for PriceTree {
    type Error = LatticeError;

    fn try_from(levels: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_levels(levels)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PriceTree {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.num_levels()))?;
        for level in self.levels() {
            seq.serialize_element(level)?;
        }
        seq.end()
    }
}

/// Builds the recombining underlying-price tree.
///
/// Level 0 is `[underlying]`. Node 0 of level `i` is node 0 of level `i-1`
/// times `up`; node `j >= 1` of level `i` is node `j-1` of level `i-1` times
/// `down`.
///
/// # Errors
/// - `LatticeError::InvalidSteps` if `steps == 0`
/// - `LatticeError::DegenerateFactors` if a factor is non-positive or not finite
/// - `LatticeError::NonFinite` if a node overflows
///
/// # Examples
/// ```
/// use pricer_models::lattice::build_underlying_tree;
///
/// let tree = build_underlying_tree(100.0, 2.0, 0.5, 3).unwrap();
/// assert_eq!(tree.terminal(), &[800.0, 200.0, 50.0, 12.5]);
/// ```
pub fn build_underlying_tree(
    underlying: f64,
    up: f64,
    down: f64,
    steps: usize,
) -> Result<PriceTree, LatticeError> {
    if steps == 0 {
        return Err(LatticeError::InvalidSteps { steps });
    }
    if !(up.is_finite() && down.is_finite()) || up <= 0.0 || down <= 0.0 {
        return Err(LatticeError::DegenerateFactors { up, down });
    }

    let mut nodes = Vec::with_capacity(node_count(steps));
    nodes.push(underlying);
    for i in 1..=steps {
        let prev = offset(i - 1);
        nodes.push(nodes[prev] * up);
        for j in 1..=i {
            nodes.push(nodes[prev + j - 1] * down);
        }
    }

    let tree = PriceTree::from_arena(steps, nodes);
    if let Some((level, node)) = tree.first_non_finite() {
        return Err(LatticeError::NonFinite { level, node });
    }
    Ok(tree)
}
