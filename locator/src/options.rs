//! Construction-time settings for a [`Registry`](crate::Registry).

/// Settings a registry is created with.
///
/// The options only seed the registry. The silent flag stays mutable afterwards
/// through [`Registry::set_silent`](crate::Registry::set_silent).
///
/// With the `serde` feature enabled this type can be read from an application's
/// configuration file; missing fields fall back to their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegistryOptions {
  /// Permissive mode when `true`: collisions overwrite, misses yield `None`.
  /// Strict mode (the default) reports both as [`RegistryError`](crate::RegistryError).
  pub silent: bool,
}

impl RegistryOptions {
  /// Strict-mode options. Same as `RegistryOptions::default()`.
  pub const fn strict() -> Self {
    Self { silent: false }
  }

  /// Permissive-mode options.
  pub const fn silent() -> Self {
    Self { silent: true }
  }
}
