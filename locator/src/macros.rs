//! Public macros for ergonomic service resolution.

/// Resolves a service from a registry, failing fast on contract violations.
///
/// `resolve!(registry, T)` is shorthand for `registry.resolve::<T>(None)`, with
/// the error case turned into a panic. It evaluates to `Option<Rc<T>>`: always
/// `Some` in strict mode, `None` on a miss in silent mode.
///
/// # Panics
///
/// Panics with the [`RegistryError`](crate::RegistryError) message when the
/// registry is in strict mode and nothing is registered under the key.
///
/// # Examples
///
/// ```
/// use fibre_locator::{resolve, Registry};
///
/// let registry = Registry::new();
/// registry.register_singleton(None, |_| String::from("hello")).unwrap();
///
/// let message = resolve!(registry, String).unwrap();
/// assert_eq!(*message, "hello");
/// ```
///
/// ```
/// use fibre_locator::{resolve, Registry};
/// use std::rc::Rc;
///
/// trait Greeter { fn greet(&self) -> String; }
/// struct English;
/// impl Greeter for English { fn greet(&self) -> String { "Hello!".to_string() } }
///
/// let registry = Registry::new();
/// registry.register_singleton_as::<dyn Greeter>(Some("en"), |_| Rc::new(English)).unwrap();
///
/// let greeter = resolve!(registry, trait Greeter, "en").unwrap();
/// assert_eq!(greeter.greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! resolve {
    (@unwrap $resolution:expr) => {
        match $resolution {
            Ok(resolved) => resolved,
            Err(error) => panic!("{}", error),
        }
    };

    // Arm for resolving a trait object: resolve!(registry, trait MyTrait)
    ($registry:expr, trait $trait_ident:ident) => {
        $crate::resolve!(@unwrap $registry.resolve::<dyn $trait_ident>(None))
    };

    // Arm for resolving a named trait object: resolve!(registry, trait MyTrait, "name")
    ($registry:expr, trait $trait_ident:ident, $name:expr) => {
        $crate::resolve!(@unwrap $registry.resolve::<dyn $trait_ident>(Some($name)))
    };

    // Arm for resolving a type: resolve!(registry, MyService)
    ($registry:expr, $type:ty) => {
        $crate::resolve!(@unwrap $registry.resolve::<$type>(None))
    };

    // Arm for resolving a named type: resolve!(registry, MyService, "name")
    ($registry:expr, $type:ty, $name:expr) => {
        $crate::resolve!(@unwrap $registry.resolve::<$type>(Some($name)))
    };
}
