//! Core, non-public data structures for the registry.

use crate::registry::Registry;

use once_cell::unsync::OnceCell;
use std::any::{Any, TypeId};
use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A type-erased value. Always holds an `Rc<K>` for the key type `K`.
pub(crate) type Erased = Box<dyn Any>;

/// A type-erased creator, invoked with the registry that owns the binding.
pub(crate) type Creator = Box<dyn Fn(&Registry) -> Erased>;

/// Identifies the type a binding was registered under.
///
/// Only the `TypeId` takes part in equality and hashing; the type name is
/// carried along for log fields and error messages.
#[derive(Clone, Copy)]
pub(crate) struct TypeKey {
  id: TypeId,
  type_name: &'static str,
}

impl TypeKey {
  pub(crate) fn of<K: ?Sized + Any>() -> Self {
    Self {
      id: TypeId::of::<K>(),
      type_name: std::any::type_name::<K>(),
    }
  }

  pub(crate) fn type_name(&self) -> &'static str {
    self.type_name
  }
}

impl PartialEq for TypeKey {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state);
  }
}

impl fmt::Debug for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "TypeKey({})", self.type_name)
  }
}

pub(crate) enum Binding {
  Instance(Erased),
  Factory(Creator),
  Singleton {
    cached: OnceCell<Erased>,
    // Taken on first resolution and never put back.
    creator: Cell<Option<Creator>>,
  },
}

impl Binding {
  pub(crate) fn instance<K: ?Sized + 'static>(value: Rc<K>) -> Self {
    Binding::Instance(Box::new(value))
  }

  pub(crate) fn factory<K: ?Sized + 'static>(
    create: impl Fn(&Registry) -> Rc<K> + 'static,
  ) -> Self {
    Binding::Factory(erase(create))
  }

  pub(crate) fn singleton<K: ?Sized + 'static>(
    create: impl Fn(&Registry) -> Rc<K> + 'static,
  ) -> Self {
    Binding::Singleton {
      cached: OnceCell::new(),
      creator: Cell::new(Some(erase(create))),
    }
  }

  pub(crate) fn kind(&self) -> &'static str {
    match self {
      Binding::Instance(_) => "instance",
      Binding::Factory(_) => "factory",
      Binding::Singleton { .. } => "singleton",
    }
  }

  /// Produces the value for this binding.
  ///
  /// Must be called without any borrow of the registry's storage held, since
  /// creators are free to call back into the registry.
  pub(crate) fn produce<K: ?Sized + 'static>(&self, key: &TypeKey, registry: &Registry) -> Rc<K> {
    match self {
      Binding::Instance(value) => downcast::<K>(value, key),
      Binding::Factory(create) => downcast::<K>(&create(registry), key),
      Binding::Singleton { cached, creator } => {
        if let Some(value) = cached.get() {
          return downcast::<K>(value, key);
        }
        let create = match creator.take() {
          Some(create) => create,
          None => panic!(
            "The singleton `{}` has no creator left: it is still being created or its creator panicked",
            key.type_name()
          ),
        };
        let value = create(registry);
        // `create` is dropped here, releasing whatever it captured.
        drop(create);
        downcast::<K>(cached.get_or_init(|| value), key)
      }
    }
  }
}

fn erase<K: ?Sized + 'static>(create: impl Fn(&Registry) -> Rc<K> + 'static) -> Creator {
  Box::new(move |registry| Box::new(create(registry)) as Erased)
}

fn downcast<K: ?Sized + 'static>(value: &Erased, key: &TypeKey) -> Rc<K> {
  match value.downcast_ref::<Rc<K>>() {
    Some(rc) => Rc::clone(rc),
    // Bindings are only ever stored under the key of the `Rc` they hold.
    None => unreachable!("binding stored under {:?} holds a value of another type", key),
  }
}
