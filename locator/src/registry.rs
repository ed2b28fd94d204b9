//! The `Registry` struct and its associated methods.

use crate::core::{Binding, TypeKey};
use crate::error::{RegistryError, Result};
use crate::options::RegistryOptions;

use std::cell::{Cell, RefCell};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

type Bindings = HashMap<TypeKey, Rc<Binding>>;

/// A service locator mapping a type and an optional name to a binding.
///
/// Three kinds of binding exist:
///
/// - **instance**: a value handed over at registration and returned as-is;
/// - **factory**: a creator invoked on every resolution;
/// - **singleton**: a creator invoked on the first resolution only, whose
///   result is cached and whose closure is dropped afterwards.
///
/// Creators receive the registry itself, so they can resolve their own
/// dependencies. No borrow of the internal storage is held while a creator
/// runs; a creator may resolve, register or unregister freely.
///
/// # Keys
///
/// The unnamed slot (`None`) is a key of its own: it never matches named
/// bindings and vice versa. The type part of the key is the type parameter
/// used at registration. The `*_as` methods register under an explicit key,
/// typically a trait object such as `dyn Greeter`, and values must then be
/// resolved with exactly that key. No bridging between related types happens.
///
/// # Modes
///
/// In strict mode (the default) a collision on registration and a miss on
/// resolution or unregistration are reported as [`RegistryError`]. In silent
/// mode collisions overwrite (last write wins), a resolution miss yields
/// `Ok(None)` and an unregistration miss does nothing. The flag is read on
/// every call and can be flipped at any time.
///
/// # Threading
///
/// A `Registry` is neither `Send` nor `Sync` and never locks. It stays on the
/// thread that built it; build one per worker if several threads need one.
///
/// # Equality
///
/// Registries compare by identity: two separately constructed registries are
/// never equal, whatever they contain.
#[derive(Default)]
pub struct Registry {
  qualifiers: RefCell<HashMap<Option<String>, Bindings>>,
  silent: Cell<bool>,
}

impl Registry {
  /// Creates a new, empty registry in strict mode.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a new, empty registry from `options`.
  pub fn with_options(options: RegistryOptions) -> Self {
    let registry = Self::default();
    registry.silent.set(options.silent);
    registry
  }

  /// A snapshot of the registry's current settings.
  pub fn options(&self) -> RegistryOptions {
    RegistryOptions {
      silent: self.silent.get(),
    }
  }

  /// Whether the registry is in permissive (silent) mode.
  pub fn is_silent(&self) -> bool {
    self.silent.get()
  }

  /// Switches between strict (`false`) and permissive (`true`) mode.
  pub fn set_silent(&self, silent: bool) {
    self.silent.set(silent);
  }

  // --- PRIVATE HELPERS ---

  /// The one place strict and silent mode diverge.
  ///
  /// Returns the violation in strict mode and swallows it in silent mode.
  fn check(&self, violation: RegistryError) -> Result<()> {
    if self.silent.get() {
      debug!(error = %violation, "tolerated in silent mode");
      Ok(())
    } else {
      Err(violation)
    }
  }

  fn set_binding(&self, key: TypeKey, name: Option<&str>, binding: Binding) -> Result<()> {
    let kind = binding.kind();
    let replaced = {
      let mut qualifiers = self.qualifiers.borrow_mut();
      let bindings = qualifiers.entry(name.map(str::to_owned)).or_default();
      match bindings.entry(key) {
        Entry::Vacant(slot) => {
          slot.insert(Rc::new(binding));
          None
        }
        Entry::Occupied(mut slot) => {
          self.check(RegistryError::AlreadyRegistered {
            type_name: key.type_name(),
            name: name.map(str::to_owned),
          })?;
          Some(slot.insert(Rc::new(binding)))
        }
      }
    };

    trace!(type_name = key.type_name(), name = ?name, binding = kind, "registered");
    if let Some(previous) = replaced {
      debug!(
        type_name = key.type_name(),
        name = ?name,
        previous = previous.kind(),
        "overwrote existing binding"
      );
      // Dropped outside the storage borrow.
      drop(previous);
    }
    Ok(())
  }

  fn lookup(&self, key: &TypeKey, name: Option<&str>) -> Option<Rc<Binding>> {
    self
      .qualifiers
      .borrow()
      .get(&name.map(str::to_owned))
      .and_then(|bindings| bindings.get(key))
      .cloned()
  }

  // --- PUBLIC API ---

  // --- Instance Registration ---

  /// Registers `value` under its own type.
  pub fn register_instance<T: 'static>(&self, name: Option<&str>, value: T) -> Result<()> {
    self.register_instance_as::<T>(name, Rc::new(value))
  }

  /// Registers a shared value under the key `K`, which may be a trait object.
  ///
  /// ```
  /// use fibre_locator::Registry;
  /// use std::rc::Rc;
  ///
  /// trait Greeter { fn greet(&self) -> String; }
  /// struct English;
  /// impl Greeter for English { fn greet(&self) -> String { "Hello".into() } }
  ///
  /// let registry = Registry::new();
  /// registry.register_instance_as::<dyn Greeter>(None, Rc::new(English)).unwrap();
  ///
  /// let greeter = registry.resolve::<dyn Greeter>(None).unwrap().unwrap();
  /// assert_eq!(greeter.greet(), "Hello");
  ///
  /// // The concrete type is not a key of its own.
  /// registry.set_silent(true);
  /// assert!(registry.resolve::<English>(None).unwrap().is_none());
  /// ```
  pub fn register_instance_as<K: ?Sized + 'static>(
    &self,
    name: Option<&str>,
    value: Rc<K>,
  ) -> Result<()> {
    self.set_binding(TypeKey::of::<K>(), name, Binding::instance(value))
  }

  // --- Factory Registration ---

  /// Registers a creator invoked on every resolution of `T`.
  pub fn register_factory<T: 'static>(
    &self,
    name: Option<&str>,
    create: impl Fn(&Registry) -> T + 'static,
  ) -> Result<()> {
    self.register_factory_as::<T>(name, move |registry| Rc::new(create(registry)))
  }

  /// Registers a creator invoked on every resolution of the key `K`.
  pub fn register_factory_as<K: ?Sized + 'static>(
    &self,
    name: Option<&str>,
    create: impl Fn(&Registry) -> Rc<K> + 'static,
  ) -> Result<()> {
    self.set_binding(TypeKey::of::<K>(), name, Binding::factory(create))
  }

  // --- Singleton Registration ---

  /// Registers a creator invoked once, on the first resolution of `T`.
  pub fn register_singleton<T: 'static>(
    &self,
    name: Option<&str>,
    create: impl Fn(&Registry) -> T + 'static,
  ) -> Result<()> {
    self.register_singleton_as::<T>(name, move |registry| Rc::new(create(registry)))
  }

  /// Registers a creator invoked once, on the first resolution of the key `K`.
  pub fn register_singleton_as<K: ?Sized + 'static>(
    &self,
    name: Option<&str>,
    create: impl Fn(&Registry) -> Rc<K> + 'static,
  ) -> Result<()> {
    self.set_binding(TypeKey::of::<K>(), name, Binding::singleton(create))
  }

  // --- Resolution ---

  /// Resolves the binding registered under `K` and `name`.
  ///
  /// Returns `Ok(None)` on a miss in silent mode and
  /// [`RegistryError::NotRegistered`] on a miss in strict mode.
  ///
  /// # Panics
  ///
  /// Panics if a singleton is resolved from inside its own creator, or after
  /// its creator panicked.
  pub fn resolve<K: ?Sized + 'static>(&self, name: Option<&str>) -> Result<Option<Rc<K>>> {
    let key = TypeKey::of::<K>();
    let Some(binding) = self.lookup(&key, name) else {
      self.check(RegistryError::NotRegistered {
        type_name: key.type_name(),
        name: name.map(str::to_owned),
      })?;
      return Ok(None);
    };

    trace!(type_name = key.type_name(), name = ?name, binding = binding.kind(), "resolving");
    Ok(Some(binding.produce::<K>(&key, self)))
  }

  /// Whether a binding exists under `K` and `name`. Never fails, in either mode.
  pub fn contains<K: ?Sized + 'static>(&self, name: Option<&str>) -> bool {
    self.lookup(&TypeKey::of::<K>(), name).is_some()
  }

  // --- Removal ---

  /// Removes the binding registered under `K` and `name`.
  ///
  /// A cached singleton value stays alive for as long as callers hold it.
  pub fn unregister<K: ?Sized + 'static>(&self, name: Option<&str>) -> Result<()> {
    let key = TypeKey::of::<K>();
    let qualifier = name.map(str::to_owned);
    let removed = {
      let mut qualifiers = self.qualifiers.borrow_mut();
      let removed = qualifiers
        .get_mut(&qualifier)
        .and_then(|bindings| bindings.remove(&key));
      if qualifiers.get(&qualifier).is_some_and(HashMap::is_empty) {
        qualifiers.remove(&qualifier);
      }
      removed
    };

    match removed {
      Some(binding) => {
        trace!(type_name = key.type_name(), name = ?name, binding = binding.kind(), "unregistered");
        drop(binding);
        Ok(())
      }
      None => self.check(RegistryError::NotRegistered {
        type_name: key.type_name(),
        name: qualifier,
      }),
    }
  }

  /// Removes every binding under every name. The mode is left as it is.
  pub fn clear(&self) {
    let drained = std::mem::take(&mut *self.qualifiers.borrow_mut());
    let count: usize = drained.values().map(HashMap::len).sum();
    debug!(bindings = count, "cleared registry");
    drop(drained);
  }

  /// The number of bindings across all names.
  pub fn len(&self) -> usize {
    self.qualifiers.borrow().values().map(HashMap::len).sum()
  }

  /// Whether the registry holds no bindings at all.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl PartialEq for Registry {
  fn eq(&self, other: &Self) -> bool {
    std::ptr::eq(self, other)
  }
}

impl Eq for Registry {}

impl fmt::Debug for Registry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Registry")
      .field("silent", &self.silent.get())
      .field("bindings", &self.len())
      .finish_non_exhaustive()
  }
}
