use serde::Serialize;
use tracing::{info, warn};

use crate::database::activity_directory::{ActivityDirectory, AppendOutcome, Directory};
use crate::error::SignupError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupConfirmation {
    pub message: String,
}

pub async fn list_activities(directory: &ActivityDirectory) -> Directory {
    directory.snapshot().await
}

/// Adds `email` to the roster of `activity_name`.
///
/// `max_participants` is informational only; a full roster still accepts
/// new signups.
pub async fn signup_for_activity(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<SignupConfirmation, SignupError> {
    match directory.append_participant(activity_name, email).await {
        AppendOutcome::Appended => {
            info!(activity = %activity_name, email = %email, "activity_signup_ok");
            Ok(SignupConfirmation {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        AppendOutcome::AlreadyEnrolled => {
            warn!(activity = %activity_name, email = %email, "activity_signup_duplicate");
            Err(SignupError::AlreadySignedUp)
        }
        AppendOutcome::ActivityNotFound => {
            warn!(activity = %activity_name, "activity_signup_unknown_activity");
            Err(SignupError::ActivityNotFound)
        }
    }
}
