//! Mutation confirmations

use std::fmt;

/// Outcome of a successful roster change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    SignedUp { activity: String, email: String },
    Unregistered { activity: String, email: String },
}

impl Confirmation {
    pub fn signed_up(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Confirmation::SignedUp {
            activity: activity.into(),
            email: email.into(),
        }
    }

    pub fn unregistered(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Confirmation::Unregistered {
            activity: activity.into(),
            email: email.into(),
        }
    }

    pub fn activity(&self) -> &str {
        match self {
            Confirmation::SignedUp { activity, .. } | Confirmation::Unregistered { activity, .. } => {
                activity
            }
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Confirmation::SignedUp { email, .. } | Confirmation::Unregistered { email, .. } => email,
        }
    }

    /// Human-readable message returned to API callers
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confirmation::SignedUp { activity, email } => {
                write!(f, "Signed up {} for {}", email, activity)
            }
            Confirmation::Unregistered { activity, email } => {
                write!(f, "Unregistered {} from {}", email, activity)
            }
        }
    }
}
