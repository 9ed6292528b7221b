//! # Accounts (single responsibility)
//!
//! A user service that also sends email has two reasons to change. Here the
//! two jobs are two types: [`UserDirectory`] registers users, [`Mailer`]
//! sends mail. The combined "before" service lives with the demo programs.

use fivefold_core::Effect;

/// Registers users. Its one job.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserDirectory;

impl UserDirectory {
    /// Register a user by name.
    pub fn add_user(&self, name: &str) -> Effect {
        Effect::line(format!("User {name} added."))
    }
}

/// Sends email. Its one job.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mailer;

impl Mailer {
    /// Send an email.
    pub fn send(&self, to: &str, subject: &str) -> Effect {
        Effect::line(format!("Email \"{subject}\" sent to {to}."))
    }
}

#[cfg(test)]
mod tests {
    use super::{Mailer, UserDirectory};

    #[test]
    fn directory_only_registers() {
        assert_eq!(
            UserDirectory.add_user("ada").as_str(),
            "User ada added."
        );
    }

    #[test]
    fn mailer_only_sends() {
        assert_eq!(
            Mailer.send("ada", "Welcome").as_str(),
            "Email \"Welcome\" sent to ada."
        );
    }
}
