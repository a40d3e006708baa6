//! Fold resolution
//!
//! Undoes the folds above a shape one crease at a time. A point on a folded
//! layer has up to two preimages on the layer beneath it: itself, and its
//! mirror image across the crease. Points on the discarded half of a crease
//! have none, and points lying on the crease have only one. Every preimage
//! that reaches a terminal shape and falls inside it counts as one layer.
//!
//! The default traversal keeps an explicit stack of `(shape, point)` pairs so
//! native stack use does not grow with the fold depth. A recursive traversal
//! with identical results is kept for comparison and can be selected through
//! [`ResolverOptions`]. Fold chains deeper than [`MAX_RECURSION_DEPTH`] are
//! always walked with the worklist.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FoldError, FoldResult};
use crate::geometry::{Point, Sign};
use crate::registry::ShapeRegistry;
use crate::shapes::Shape;

/// Deepest fold chain the recursive traversal will descend natively.
pub const MAX_RECURSION_DEPTH: usize = 1024;

/// How the fold history is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    /// Explicit stack of pending preimages
    #[default]
    Worklist,
    /// Direct recursion over the fold chain
    Recursive,
}

impl std::fmt::Display for Traversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Worklist => write!(f, "worklist"),
            Self::Recursive => write!(f, "recursive"),
        }
    }
}

impl std::str::FromStr for Traversal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "worklist" => Ok(Self::Worklist),
            "recursive" => Ok(Self::Recursive),
            _ => Err(format!("Unknown traversal: {}", s)),
        }
    }
}

/// Tuning knobs for a single resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverOptions {
    pub traversal: Traversal,
    /// Upper bound on `(shape, point)` pairs visited per query. `None` means
    /// unbounded; the walk is still finite because sources strictly decrease.
    pub max_preimages: Option<usize>,
}

/// Outcome of resolving one point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Terminal layers containing a preimage of the point.
    pub layers: u32,
    /// `(shape, point)` pairs examined.
    pub visited: usize,
    /// Preimages dropped because they fell on the discarded side of a crease.
    pub pruned: usize,
}

impl Resolution {
    fn visit(&mut self, options: &ResolverOptions) -> FoldResult<()> {
        self.visited += 1;
        match options.max_preimages {
            Some(limit) if self.visited > limit => Err(FoldError::PreimageLimitExceeded { limit }),
            _ => Ok(()),
        }
    }
}

/// What a single shape does with an incoming point.
enum Step {
    /// Terminal shape reached; `true` if it contains the point.
    Terminal(bool),
    /// Point lies on the discarded half of the crease.
    Pruned,
    /// Preimages on the source shape: the point itself, plus its mirror image
    /// unless the point is a fixed point of the reflection.
    Unfold {
        source: usize,
        kept: Point,
        mirrored: Option<Point>,
    },
}

fn step(shape: &Shape, p: Point) -> Step {
    match shape {
        Shape::Rectangle(r) => Step::Terminal(r.contains_point(p)),
        Shape::Circle(c) => Step::Terminal(c.contains_point(p)),
        Shape::Fold(fold) => {
            if fold.line.side_of(p) == Sign::Negative {
                return Step::Pruned;
            }
            let reflected = fold.line.reflect(p);
            Step::Unfold {
                source: fold.source,
                kept: p,
                mirrored: (!p.approx_eq(&reflected)).then_some(reflected),
            }
        }
    }
}

/// Count the terminal layers under `point` on shape `index`.
///
/// `registry` must have been validated on construction, which guarantees
/// every fold source precedes its fold. Fails only when `index` is outside
/// the registry or the preimage limit is hit.
///
/// [`Traversal::Recursive`] recurses once per fold, so it is only honored
/// while the fold chain under `index` is at most [`MAX_RECURSION_DEPTH`] deep.
pub fn resolve(
    registry: &ShapeRegistry,
    index: usize,
    point: Point,
    options: &ResolverOptions,
) -> FoldResult<Resolution> {
    let resolution = match options.traversal {
        Traversal::Worklist => resolve_worklist(registry, index, point, options)?,
        Traversal::Recursive if registry.fold_depth(index)? > MAX_RECURSION_DEPTH => {
            debug!(
                "Fold chain under shape {} exceeds {} folds, using worklist",
                index, MAX_RECURSION_DEPTH
            );
            resolve_worklist(registry, index, point, options)?
        }
        Traversal::Recursive => {
            let mut resolution = Resolution::default();
            resolve_recursive(registry, index, point, options, &mut resolution)?;
            resolution
        }
    };
    debug!(
        "Resolved shape {} at {}: {} layers ({} visited, {} pruned)",
        index, point, resolution.layers, resolution.visited, resolution.pruned
    );
    Ok(resolution)
}

fn resolve_worklist(
    registry: &ShapeRegistry,
    index: usize,
    point: Point,
    options: &ResolverOptions,
) -> FoldResult<Resolution> {
    let mut resolution = Resolution::default();
    let mut pending = vec![(index, point)];

    while let Some((current, p)) = pending.pop() {
        resolution.visit(options)?;
        match step(registry.get(current)?, p) {
            Step::Terminal(inside) => {
                if inside {
                    resolution.layers += 1;
                }
            }
            Step::Pruned => resolution.pruned += 1,
            Step::Unfold {
                source,
                kept,
                mirrored,
            } => {
                if let Some(mirrored) = mirrored {
                    pending.push((source, mirrored));
                }
                pending.push((source, kept));
            }
        }
    }

    Ok(resolution)
}

fn resolve_recursive(
    registry: &ShapeRegistry,
    index: usize,
    p: Point,
    options: &ResolverOptions,
    resolution: &mut Resolution,
) -> FoldResult<()> {
    resolution.visit(options)?;
    match step(registry.get(index)?, p) {
        Step::Terminal(inside) => {
            if inside {
                resolution.layers += 1;
            }
        }
        Step::Pruned => resolution.pruned += 1,
        Step::Unfold {
            source,
            kept,
            mirrored,
        } => {
            resolve_recursive(registry, source, kept, options, resolution)?;
            if let Some(mirrored) = mirrored {
                resolve_recursive(registry, source, mirrored, options, resolution)?;
            }
        }
    }
    Ok(())
}
