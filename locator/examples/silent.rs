use fibre_locator::{resolve, Registry, RegistryOptions};
use std::panic;

struct UnregisteredService;

fn main() {
  // --- Strict mode: misses are errors ---
  let registry = Registry::new();

  match registry.resolve::<UnregisteredService>(None) {
    Err(error) => println!("Strict resolve failed as expected: {}", error),
    Ok(_) => panic!("Should not have found the service!"),
  }

  let result = panic::catch_unwind(|| {
    let registry = Registry::new();
    // This line will panic!
    let _service = resolve!(registry, UnregisteredService);
  });
  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Caught the expected panic from resolve!.");

  // --- Silent mode: misses are `None`, collisions overwrite ---
  let registry = Registry::with_options(RegistryOptions::silent());

  assert!(resolve!(registry, UnregisteredService).is_none());
  println!("Silent resolve returned `None` for the missing service.");

  registry.register_instance(None, "first").unwrap();
  registry.register_instance(None, "second").unwrap();
  assert_eq!(*resolve!(registry, &'static str).unwrap(), "second");
  println!("Silent re-registration kept the last value.");
}
