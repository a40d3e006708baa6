//! # foldpunch parser
//!
//! Reads the problem stream and writes answers.
//!
//! The stream holds a shape count and a query count, then the shape records,
//! then the queries:
//!
//! ```text
//! 2 2
//! P 0 0 10 10        rectangle: bottom-left, top-right
//! Z 1 5 10 5 0       fold of shape 1 along the line (5,10)-(5,0)
//! 2 7 5              query: shape 2 at (7, 5)
//! 1 20 20
//! ```
//!
//! `K x y r` describes a circle. Indices in the stream are 1-based and are
//! converted to 0-based on the way in.

pub mod error;
pub mod tokenizer;

use std::io::{Read, Write};

use foldpunch_core::{Circle, Fold, Line, Query, Rectangle, Shape, ShapeRegistry, ShapeType};
use tracing::{debug, warn};

pub use error::{ParseError, ParseResult};
pub use tokenizer::Tokenizer;

/// Discriminator character for each shape kind.
pub fn shape_type_for(kind: char) -> Option<ShapeType> {
    match kind {
        'P' => Some(ShapeType::Rectangle),
        'K' => Some(ShapeType::Circle),
        'Z' => Some(ShapeType::Fold),
        _ => None,
    }
}

/// A parsed input stream: the validated registry and the queries to run.
#[derive(Debug)]
pub struct Problem {
    pub registry: ShapeRegistry,
    pub queries: Vec<Query>,
}

/// Parse one shape record, discriminator included.
pub fn parse_shape(tokens: &mut Tokenizer<'_>) -> ParseResult<Shape> {
    let line = tokens.line();
    let kind = tokens.next_char("shape kind")?;
    let shape = match shape_type_for(kind) {
        Some(ShapeType::Rectangle) => {
            let bottom_left = tokens.point("rectangle corner")?;
            let top_right = tokens.point("rectangle corner")?;
            Rectangle::new(bottom_left, top_right).into()
        }
        Some(ShapeType::Circle) => {
            let center = tokens.point("circle center")?;
            let radius = tokens.parse::<f64>("circle radius")?;
            Circle::new(center, radius).into()
        }
        Some(ShapeType::Fold) => {
            let source = tokens.index("fold source index")?;
            let p = tokens.point("fold line point")?;
            let q = tokens.point("fold line point")?;
            let line_through =
                Line::through(p, q).map_err(|source| ParseError::Shape { line, source })?;
            Fold::new(line_through, source).into()
        }
        None => return Err(ParseError::UnknownShapeKind { line, kind }),
    };
    Ok(shape)
}

pub fn parse_query(tokens: &mut Tokenizer<'_>) -> ParseResult<Query> {
    let shape = tokens.index("query shape index")?;
    let point = tokens.point("query point")?;
    Ok(Query::new(shape, point))
}

/// Parse a complete problem from text.
pub fn parse_problem(input: &str) -> ParseResult<Problem> {
    let mut tokens = Tokenizer::new(input);
    let shape_count = tokens.parse::<usize>("shape count")?;
    let query_count = tokens.parse::<usize>("query count")?;

    let mut builder = ShapeRegistry::builder();
    for _ in 0..shape_count {
        let line = tokens.line();
        let shape = parse_shape(&mut tokens)?;
        builder
            .push(shape)
            .map_err(|source| ParseError::Shape { line, source })?;
    }
    let registry = builder.build();

    let queries = (0..query_count)
        .map(|_| parse_query(&mut tokens))
        .collect::<ParseResult<Vec<_>>>()?;

    if !tokens.is_exhausted() {
        warn!("Ignoring trailing input from line {}", tokens.line());
    }
    debug!(
        "Parsed {} shapes and {} queries",
        registry.len(),
        queries.len()
    );

    Ok(Problem { registry, queries })
}

/// Read a reader to the end and parse it.
pub fn read_problem<R: Read>(mut reader: R) -> ParseResult<Problem> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_problem(&input)
}

/// One answer per line, in query order.
pub fn write_answers<W: Write>(mut out: W, answers: &[u32]) -> std::io::Result<()> {
    for answer in answers {
        writeln!(out, "{}", answer)?;
    }
    out.flush()
}
