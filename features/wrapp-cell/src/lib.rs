//! Wrapp Cell registers sets of constructors with a dependency injection
//! container and describes what was registered.
//!
//! Wrapp Cell consists of the following components:
//!
//! 1. Provider - a cell holding constructors, created with [provide] or [provide_private]
//! 2. Container - the collaborator constructors are registered with, [Registry] is an in-memory one
//! 3. Info - a tree describing each constructor's inputs and outputs
//!
//! # Examples
//!
//! ```rust
//! use std::{convert::Infallible, sync::Arc};
//! use wrapp_cell::{ctor, provide, ApplyConfig, Cell, Registry};
//!
//! struct Sun;
//! struct Flower;
//!
//! fn new_sun() -> Result<Sun, Infallible> {
//!     Ok(Sun)
//! }
//!
//! fn new_flower(_sun: Arc<Sun>) -> Result<Flower, Infallible> {
//!     Ok(Flower)
//! }
//!
//! let cell = provide(vec![ctor(new_sun), ctor(new_flower)]);
//!
//! // The same cell can be applied to any number of containers
//! for _ in 0..2 {
//!     let mut registry = Registry::new();
//!     cell.apply(&mut registry, &ApplyConfig::default()).unwrap();
//!     registry.check().unwrap();
//! }
//!
//! println!("{}", cell.info(&Registry::new()));
//! ```

pub mod cell;
pub mod config;
pub mod constructor;
pub mod container;
pub mod errors;
pub mod info;
pub mod provider;
pub mod registry;
pub mod types;

pub use cell::{Cell, Group};
pub use config::ApplyConfig;
pub use constructor::{ctor, Constructor, DynConstructor, FnConstructor, Signature};
pub use container::{Container, ProvideInfo, ProvideOptions};
pub use errors::{GraphError, GraphErrors, ProvideError};
pub use info::{Info, InfoNode};
pub use provider::{provide, provide_private, Provider};
pub use registry::Registry;
pub use types::{DependencyInfo, DynError, TypeInfo, Visibility};
