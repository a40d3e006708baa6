//! # foldpunch
//!
//! Counts how many layers of a folded, punched sheet lie under a point.
//!
//! ## Architecture
//!
//! foldpunch is organized as a workspace with multiple crates:
//!
//! 1. **foldpunch-core** - Geometry, shape registry, fold resolver, queries
//! 2. **foldpunch-parser** - Input stream parsing and answer output
//! 3. **foldpunch-settings** - Configuration loading and validation
//! 4. **foldpunch** - Binary wiring logging, configuration and the batch run

use std::io::{Read, Write};

use anyhow::Context;
use foldpunch_core::QueryEngine;
use foldpunch_settings::{Config, LogFormat, LoggingSettings};
use tracing::info;

pub use foldpunch_core::{
    answer, Circle, Fold, FoldError, Line, Point, Query, Rectangle, ResolverOptions, Shape,
    ShapeRegistry, Traversal,
};
pub use foldpunch_parser::{parse_problem, read_problem, write_answers, ParseError, Problem};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("FOLDPUNCH_BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - stderr output, so stdout only ever carries answers
/// - RUST_LOG environment variable support, falling back to the configured level
/// - pretty, compact or JSON formatting
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .context("Invalid log filter")?;

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(settings.line_numbers);

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match settings.format {
        LogFormat::Pretty => registry.with(layer.pretty()).try_init(),
        LogFormat::Compact => registry.with(layer.compact()).try_init(),
        LogFormat::Json => registry.with(layer.json()).try_init(),
    };
    result.context("Logging already initialized")?;

    Ok(())
}

/// Read a problem from `input`, answer every query, and write the answers to
/// `output`.
///
/// Nothing is written unless every query succeeds.
pub fn run<R: Read, W: Write>(input: R, output: W, config: &Config) -> anyhow::Result<()> {
    let problem = read_problem(input).context("Failed to parse input")?;
    info!(
        "Loaded {} shapes and {} queries",
        problem.registry.len(),
        problem.queries.len()
    );

    let engine = QueryEngine::with_options(&problem.registry, config.resolver.options());
    let answers = engine
        .answer_all(&problem.queries)
        .context("Failed to answer queries")?;

    write_answers(output, &answers).context("Failed to write answers")?;
    Ok(())
}
