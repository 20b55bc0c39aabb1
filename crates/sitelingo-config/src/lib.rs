//! # Sitelingo Config
//!
//! Site settings consumed by the translation core.
//!
//! This crate parses settings documents (YAML or TOML text handed over by
//! the host toolchain), applies environment overrides, validates the result
//! and exposes it through the key/value [`ConfigProvider`] trait.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod provider;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use provider::*;
pub use schema::*;
pub use validator::*;
