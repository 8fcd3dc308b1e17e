use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::database::activity_directory::ActivityDirectory;
use crate::error::SignupError;
use crate::services::activities_service::{self, SignupConfirmation};

pub async fn activity_signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<SignupConfirmation>, SignupError> {
    let Path(activity_name) =
        path.map_err(|rejection| SignupError::InvalidRequest(rejection.body_text()))?;
    let Query(params) =
        query.map_err(|rejection| SignupError::InvalidRequest(rejection.body_text()))?;

    // Only presence is checked; the address itself is taken as given.
    let email = last_value(params, "email").ok_or(SignupError::MissingEmail)?;

    let confirmation =
        activities_service::signup_for_activity(&directory, &activity_name, &email).await?;
    Ok(Json(confirmation))
}

// A repeated parameter resolves to its last occurrence.
fn last_value(params: Vec<(String, String)>, key: &str) -> Option<String> {
    params
        .into_iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}
