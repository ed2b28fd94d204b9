//! # Fibre Locator
//!
//! A small, explicit service locator for Rust.
//!
//! A [`Registry`] maps a type, plus an optional name, to one of three bindings:
//! a fixed instance, a factory producing a fresh value on every resolution, or
//! a lazily created singleton. There is no global instance: create a registry,
//! pass it to whoever needs it, and drop it when you are done.
//!
//! ## Core Concepts
//!
//! - **Registry**: owns every binding. Construct one per application, or one
//!   per test.
//! - **Keys**: a type and an optional name. The unnamed slot is a key of its
//!   own. Values registered with the `*_as` methods are keyed by the type you
//!   name explicitly, such as a trait object.
//! - **Modes**: strict mode (the default) reports collisions and misses as
//!   [`RegistryError`]; silent mode overwrites on collision and resolves misses
//!   to `None`.
//! - **Resolution**: [`Registry::resolve`] returns a `Result`; the [`resolve!`]
//!   macro panics on the error case instead.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_locator::{resolve, Registry};
//! use std::rc::Rc;
//!
//! trait Greeter {
//!     fn greet(&self) -> String;
//! }
//!
//! struct EnglishGreeter {
//!     message: Rc<String>,
//! }
//!
//! impl Greeter for EnglishGreeter {
//!     fn greet(&self) -> String {
//!         self.message.to_string()
//!     }
//! }
//!
//! fn main() -> Result<(), fibre_locator::RegistryError> {
//!     let registry = Registry::new();
//!
//!     registry.register_instance(Some("greeting_message"), String::from("Hello, World!"))?;
//!
//!     // Creators receive the registry and can resolve their own dependencies.
//!     registry.register_singleton_as::<dyn Greeter>(None, |registry| {
//!         let message = resolve!(registry, String, "greeting_message").unwrap();
//!         Rc::new(EnglishGreeter { message })
//!     })?;
//!
//!     let greeter = resolve!(registry, trait Greeter).unwrap();
//!     assert_eq!(greeter.greet(), "Hello, World!");
//!     Ok(())
//! }
//! ```
//!
//! ## Registering Nothing
//!
//! Every registration takes an owned value or a creator, so there is no way to
//! register an absent one:
//!
//! ```compile_fail
//! use fibre_locator::Registry;
//!
//! let registry = Registry::new();
//! let missing: Option<fn(&Registry) -> String> = None;
//! registry.register_factory::<String>(None, missing).unwrap();
//! ```
//!
//! ## Logging
//!
//! Registrations, resolutions and removals are reported through `tracing` at
//! `trace` level; tolerated violations in silent mode and `clear` at `debug`.
//! The crate never installs a subscriber.

mod core;
mod error;
mod macros;
pub mod markers;
mod options;
mod registry;

pub use error::{RegistryError, Result};
pub use markers::{Inject, Named};
pub use options::RegistryOptions;
pub use registry::Registry;
