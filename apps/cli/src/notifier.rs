use fintrack_core::forms::{Notification, Notifier};

/// Prints notifications to the terminal: successes on stdout, the rest on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification {
            Notification::Success(m) => println!("✔ {}", m),
            Notification::Warning(m) => eprintln!("! {}", m),
            Notification::Error(m) => eprintln!("✖ {}", m),
        }
    }
}
