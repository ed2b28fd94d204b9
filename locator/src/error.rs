use thiserror::Error;

/// A specialized `Result` type for registry operations.
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;

/// Contract violations reported by a [`Registry`](crate::Registry) in strict mode.
///
/// In permissive (silent) mode the same conditions never surface as errors:
/// collisions overwrite and misses resolve to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
  /// A binding already exists for the type and name.
  #[error("The type `{type_name}` was already registered{}", for_name(.name))]
  AlreadyRegistered {
    type_name: &'static str,
    name: Option<String>,
  },
  /// No binding exists for the type and name.
  #[error("The type `{type_name}` was not registered{}", for_name(.name))]
  NotRegistered {
    type_name: &'static str,
    name: Option<String>,
  },
}

impl RegistryError {
  /// The name of the type the failing operation was keyed by.
  pub fn type_name(&self) -> &'static str {
    match self {
      RegistryError::AlreadyRegistered { type_name, .. }
      | RegistryError::NotRegistered { type_name, .. } => type_name,
    }
  }

  /// The qualifier the failing operation was keyed by, if any.
  pub fn name(&self) -> Option<&str> {
    match self {
      RegistryError::AlreadyRegistered { name, .. } | RegistryError::NotRegistered { name, .. } => {
        name.as_deref()
      }
    }
  }
}

fn for_name(name: &Option<String>) -> String {
  match name {
    Some(name) => format!(" for the name `{}`", name),
    None => String::new(),
  }
}
