use crate::{errors::{ApiError, ServerResult}, AppState};
use activities_core::{Activity, ActivityDirectory, EmailQuery, MessageResponse, SignupResult};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Redirect,
    Json,
};
use std::sync::Arc;

pub const LANDING_PAGE: &str = "/static/index.html";

pub async fn root() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn list_activities(State(state): State<Arc<AppState>>) -> Json<ActivityDirectory> {
    Json(state.store.list_activities())
}

pub async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
) -> ServerResult<Json<Activity>> {
    Ok(Json(state.store.get(&activity_name)?))
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ServerResult<Json<MessageResponse>> {
    let email = required_email(query)?;
    let result = state.store.signup(&activity_name, &email);

    if let Some(monitoring) = &state.monitoring {
        match &result {
            Ok(_) => monitoring.log_signed_up(&activity_name, &email).await,
            Err(e) => monitoring.log_rejected(&activity_name, &email, e.to_string()).await,
        }
    }

    Ok(Json(logged(result, "signup")?))
}

pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ServerResult<Json<MessageResponse>> {
    let email = required_email(query)?;
    let result = state.store.unregister(&activity_name, &email);

    if let Some(monitoring) = &state.monitoring {
        match &result {
            Ok(_) => monitoring.log_unregistered(&activity_name, &email).await,
            Err(e) => monitoring.log_rejected(&activity_name, &email, e.to_string()).await,
        }
    }

    Ok(Json(logged(result, "unregister")?))
}

pub async fn reset_state(State(state): State<Arc<AppState>>) -> &'static str {
    tracing::info!("Resetting activity rosters to the seed catalog");
    state.store.reset();

    if let Some(monitoring) = &state.monitoring {
        monitoring.log_state_reset().await;
    }

    "Server state reset"
}

/// The `email` query parameter, present but otherwise unvalidated.
fn required_email(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::unprocessable(rejection.body_text()))?;
    query.email.ok_or_else(|| ApiError::missing_query("email"))
}

fn logged(result: SignupResult<MessageResponse>, operation: &str) -> SignupResult<MessageResponse> {
    if let Ok(response) = &result {
        tracing::info!(operation, "{}", response.message);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_email() {
        let email = |value: Option<&str>| -> Result<Query<EmailQuery>, QueryRejection> {
            Ok(Query(EmailQuery { email: value.map(String::from) }))
        };

        assert_eq!(required_email(email(Some("a@mergington.edu"))).unwrap(), "a@mergington.edu");
        // Present but empty is still an email as far as the roster cares
        assert_eq!(required_email(email(Some(""))).unwrap(), "");
        assert!(matches!(
            required_email(email(None)),
            Err(ApiError::Unprocessable(_))
        ));
    }
}
