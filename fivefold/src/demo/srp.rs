//! Single responsibility: the user service that also sent email.

use fivefold_core::{DispatchError, Effect, Sink};
use fivefold_std::accounts::{Mailer, UserDirectory};

/// The "before" design: one service, two reasons to change.
struct UserService;

impl UserService {
    fn add_user(&self, name: &str) -> Effect {
        Effect::line(format!("User {name} added."))
    }

    fn send_email(&self, to: &str, subject: &str) -> Effect {
        Effect::line(format!("Email \"{subject}\" sent to {to}."))
    }
}

/// Run the lesson, emitting its fixed output sequence to `sink`.
///
/// Both halves produce the same lines; the lesson is in who owns them.
pub fn run(sink: &dyn Sink) -> Result<(), DispatchError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(lesson = "srp", "running demo");

    sink.emit("Problematic Code with Two Responsibilities:");
    let service = UserService;
    sink.emit(service.add_user("ada").as_str());
    sink.emit(service.send_email("ada", "Welcome").as_str());

    sink.emit("");
    sink.emit("Corrected Code with One Responsibility Each:");
    sink.emit(UserDirectory.add_user("ada").as_str());
    sink.emit(Mailer.send("ada", "Welcome").as_str());

    Ok(())
}
