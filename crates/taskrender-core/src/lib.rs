//! # taskrender-core
//!
//! Edits one property of one container definition inside a task definition.
//!
//! Handles:
//! - **Document**: Shape validation of the parsed task definition.
//! - **Locator**: First-match lookup of a container definition by name.
//! - **Coercer**: Conversion of raw input text into a typed JSON value.
//! - **Merger**: Setting a single property on a container definition.
//! - **Engine**: The validate, locate, coerce, merge pipeline.
//! - **Source / Sink**: Loading task definitions and writing rendered copies.

pub mod coercer;
pub mod document;
pub mod engine;
pub mod locator;
pub mod merger;
pub mod sink;
pub mod source;

pub use coercer::CoercedValue;
pub use document::ValidDocument;
pub use engine::{PropertyUpdate, apply, render};
