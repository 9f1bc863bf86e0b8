//! Incremental AST builder for logic programs.
//!
//! A shift-reduce parser drives [`ProgramBuilder`] one reduction at a time.
//! Intermediate nodes live in per-kind arenas and are referred to by `Copy`
//! handles from [`ids`]; finished statements are owned trees. After the last
//! reduction, [`ProgramBuilder::finish`] resolves user-defined theory
//! operators and returns the [`Program`] together with the diagnostics
//! collected on the way.
//!
//! # Tracing
//!
//! Enable with `RUST_LOG=asp_build=debug` (statements, registries) or
//! `RUST_LOG=asp_build=trace` (pooling and operator resolution steps).

mod aggregate;
mod builder;
mod config;
mod error;
pub mod ids;
mod lexing;
mod program;
pub mod resolver;
mod source;

use std::sync::Once;

pub use aggregate::{Aggregate, AggregateElements};
pub use builder::ProgramBuilder;
pub use config::BuilderConfig;
pub use error::{BuildError, Occurrence, TheoryError};
pub use lexing::TheoryLexing;
pub use program::{BuildOutput, Define, Defines, Program, TheoryRegistry};
pub use source::{Source, SourceStack};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
