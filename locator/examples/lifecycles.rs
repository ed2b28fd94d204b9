use fibre_locator::{resolve, Registry};
use std::cell::Cell;
use std::rc::Rc;

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

fn main() -> Result<(), fibre_locator::RegistryError> {
  // Show the registry's own trace events.
  tracing_subscriber::fmt()
    .with_env_filter("fibre_locator=trace")
    .init();

  let registry = Registry::new();
  let next_id = Rc::new(Cell::new(0_usize));

  // --- Singleton Registration ---
  // This creator runs once, on first resolution.
  let ids = Rc::clone(&next_id);
  registry.register_singleton(Some("singleton_tracker"), move |_| {
    println!("Creating SINGLETON RequestTracker...");
    let id = ids.get();
    ids.set(id + 1);
    RequestTracker { id }
  })?;

  // --- Factory Registration ---
  // This creator runs on every resolution.
  let ids = Rc::clone(&next_id);
  registry.register_factory(Some("factory_tracker"), move |_| {
    println!("Creating FACTORY RequestTracker...");
    let id = ids.get();
    ids.set(id + 1);
    RequestTracker { id }
  })?;

  println!("--- Resolving Singletons ---");
  let s1 = resolve!(registry, RequestTracker, "singleton_tracker").unwrap();
  let s2 = resolve!(registry, RequestTracker, "singleton_tracker").unwrap();
  println!("Singleton 1 ID: {}, Singleton 2 ID: {}", s1.id, s2.id);
  assert!(Rc::ptr_eq(&s1, &s2));

  println!("--- Resolving Factories ---");
  let f1 = resolve!(registry, RequestTracker, "factory_tracker").unwrap();
  let f2 = resolve!(registry, RequestTracker, "factory_tracker").unwrap();
  println!("Factory 1 ID: {}, Factory 2 ID: {}", f1.id, f2.id);
  assert_ne!(f1.id, f2.id);

  Ok(())
}
