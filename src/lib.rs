//! # Creational Design Patterns
//!
//! Three small, independent illustrations of object creation behind an
//! abstraction.
//!
//! ## Patterns Covered
//!
//! 1. **Builder** ([`builder`])
//!    - `Cook` drives any `PizzaBuilder` through dough, sauce, topping
//!    - Retrieval before a build fails with `PatternError::NotBuilt`
//!
//! 2. **Factory Method** ([`factory_method`])
//!    - `Application` owns the document workflow
//!    - An injected `DocumentCreator` decides which document type is made
//!
//! 3. **Abstract Factory** ([`abstract_factory`])
//!    - `ShapeFactory` creates a curved and a straight shape
//!    - Simple and Robust factories each stay within their own family
//!    - Ids come from an explicit, shared `ShapeIds` counter
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run --bin creational_demo
//! cargo run --bin creational_demo -- demos/robust.toml
//! RUST_LOG=debug cargo run --bin creational_demo
//! ```

pub mod abstract_factory;
pub mod builder;
pub mod config;
pub mod demo;
pub mod error;
pub mod factory_method;
pub mod transcript;

pub use config::{DemoConfig, OutputFormat};
pub use error::{ConfigError, DemoError, PatternError};
pub use transcript::{Event, Transcript};
