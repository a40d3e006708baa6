//! Shape registry
//!
//! Ordered, immutable list of shapes. Folds refer to earlier entries by
//! index, so the registry forms a DAG whose edges always point backwards;
//! that property is checked once when the registry is built and relied on
//! by the resolver afterwards.

use tracing::{debug, warn};

use crate::error::{FoldError, FoldResult};
use crate::shapes::Shape;

/// Immutable, validated sequence of shapes.
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    shapes: Vec<Shape>,
}

impl ShapeRegistry {
    /// Validate and wrap a complete list of shapes.
    pub fn new(shapes: Vec<Shape>) -> FoldResult<Self> {
        let len = shapes.len();
        for (index, shape) in shapes.iter().enumerate() {
            check_shape(index, shape, len)?;
        }
        debug!("Built shape registry with {} shapes", len);
        Ok(Self { shapes })
    }

    /// Start an append-only registry build.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Shape at a 0-based index.
    pub fn get(&self, index: usize) -> FoldResult<&Shape> {
        self.shapes.get(index).ok_or(FoldError::IndexOutOfRange {
            index,
            len: self.shapes.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of folds between `index` and the terminal shape beneath it.
    pub fn fold_depth(&self, index: usize) -> FoldResult<usize> {
        let mut depth = 0;
        let mut current = index;
        while let Shape::Fold(fold) = self.get(current)? {
            depth += 1;
            current = fold.source;
        }
        Ok(depth)
    }
}

/// Builds a [`ShapeRegistry`] one record at a time, validating each fold
/// against the shapes already pushed.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    shapes: Vec<Shape>,
}

impl RegistryBuilder {
    /// Append a shape and return its 0-based index.
    pub fn push(&mut self, shape: impl Into<Shape>) -> FoldResult<usize> {
        let shape = shape.into();
        let index = self.shapes.len();
        check_shape(index, &shape, index)?;
        self.shapes.push(shape);
        Ok(index)
    }

    pub fn build(self) -> ShapeRegistry {
        debug!("Built shape registry with {} shapes", self.shapes.len());
        ShapeRegistry {
            shapes: self.shapes,
        }
    }
}

// `len` bounds valid references: the full registry size for a bulk build,
// the shape's own index for an append.
fn check_shape(index: usize, shape: &Shape, len: usize) -> FoldResult<()> {
    match shape {
        Shape::Fold(fold) => {
            if fold.source >= len.max(index + 1) {
                return Err(FoldError::IndexOutOfRange {
                    index: fold.source,
                    len,
                });
            }
            if fold.source >= index {
                return Err(FoldError::CyclicFoldReference {
                    index,
                    source_index: fold.source,
                });
            }
            if fold.line.is_degenerate() {
                return Err(FoldError::DegenerateLine {
                    x: fold.line.anchor.x,
                    y: fold.line.anchor.y,
                });
            }
        }
        Shape::Rectangle(rect) => {
            if !rect.is_well_formed() {
                warn!(
                    "Rectangle {} has corners out of order and will contain no points",
                    index
                );
            }
        }
        Shape::Circle(_) => {}
    }
    Ok(())
}
