use fibre_locator::{resolve, Registry};
use std::rc::Rc;

// --- Abstraction and Implementations ---
trait MessageSender {
  fn send(&self, to: &str, message: &str) -> String;
}

struct EmailSender;
impl MessageSender for EmailSender {
  fn send(&self, to: &str, message: &str) -> String {
    format!("Sending email to {}: '{}'", to, message)
  }
}

struct SmsSender;
impl MessageSender for SmsSender {
  fn send(&self, to: &str, message: &str) -> String {
    format!("Sending SMS to {}: '{}'", to, message)
  }
}

fn main() -> Result<(), fibre_locator::RegistryError> {
  let registry = Registry::new();

  // --- Registration ---
  // Both implementations share the trait key and differ by name.
  registry.register_singleton_as::<dyn MessageSender>(Some("email"), |_| Rc::new(EmailSender))?;
  registry.register_singleton_as::<dyn MessageSender>(Some("sms"), |_| Rc::new(SmsSender))?;

  // --- Resolution ---
  let email_notifier = resolve!(registry, trait MessageSender, "email").unwrap();
  let sms_notifier = resolve!(registry, trait MessageSender, "sms").unwrap();

  let result1 = email_notifier.send("test@example.com", "Hello from Fibre!");
  let result2 = sms_notifier.send("+123456789", "Hello from Fibre!");

  println!("{}", result1);
  println!("{}", result2);

  assert!(result1.contains("email"));
  assert!(result2.contains("SMS"));
  Ok(())
}
