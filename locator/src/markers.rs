//! Inert annotation markers for code generators.
//!
//! These values carry no behaviour. A generator reads them next to a type's
//! declaration and emits `register_factory` / `register_singleton` calls with
//! creators it has already resolved. The registry never inspects them.

/// Marks a constructor or field as an injection point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Inject;

/// Qualifies an injection point or registration with a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Named(pub &'static str);

impl Named {
  /// A marker carrying `name`.
  pub const fn new(name: &'static str) -> Self {
    Self(name)
  }

  /// The qualifier name.
  pub const fn name(&self) -> &'static str {
    self.0
  }
}
