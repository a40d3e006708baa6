//! Query answering
//!
//! A query names a shape and a point and asks how many layers of the folded
//! sheet are punched there. Queries are independent; the engine only borrows
//! the registry, so any number of engines may share one registry across
//! threads.

use tracing::info;

use crate::error::FoldResult;
use crate::geometry::Point;
use crate::registry::ShapeRegistry;
use crate::resolver::{resolve, ResolverOptions};

/// A single containment question against the registry.
#[derive(Debug, Clone, Copy)]
pub struct Query {
    /// 0-based shape index.
    pub shape: usize,
    pub point: Point,
}

impl Query {
    pub fn new(shape: usize, point: Point) -> Self {
        Self { shape, point }
    }
}

/// Number of layers at `point` on shape `shape_index`, with default options.
pub fn answer(shape_index: usize, point: Point, shapes: &ShapeRegistry) -> FoldResult<u32> {
    resolve(shapes, shape_index, point, &ResolverOptions::default()).map(|r| r.layers)
}

/// Answers queries against a borrowed registry.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    registry: &'a ShapeRegistry,
    options: ResolverOptions,
}

impl<'a> QueryEngine<'a> {
    pub fn new(registry: &'a ShapeRegistry) -> Self {
        Self::with_options(registry, ResolverOptions::default())
    }

    pub fn with_options(registry: &'a ShapeRegistry, options: ResolverOptions) -> Self {
        Self { registry, options }
    }

    pub fn answer(&self, query: &Query) -> FoldResult<u32> {
        resolve(self.registry, query.shape, query.point, &self.options).map(|r| r.layers)
    }

    /// Answer every query in order. The first failure aborts the batch and
    /// no answers are returned.
    pub fn answer_all(&self, queries: &[Query]) -> FoldResult<Vec<u32>> {
        let mut answers = Vec::with_capacity(queries.len());
        let mut visited = 0usize;
        for query in queries {
            let resolution = resolve(self.registry, query.shape, query.point, &self.options)?;
            visited += resolution.visited;
            answers.push(resolution.layers);
        }
        info!(
            "Answered {} queries ({} preimages visited, traversal: {})",
            answers.len(),
            visited,
            self.options.traversal
        );
        Ok(answers)
    }
}
