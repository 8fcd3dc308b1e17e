use axum::{extract::State, Json};

use crate::database::activity_directory::{ActivityDirectory, Directory};
use crate::services::activities_service;

pub async fn activities_handler(State(directory): State<ActivityDirectory>) -> Json<Directory> {
    Json(activities_service::list_activities(&directory).await)
}
