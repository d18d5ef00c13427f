//! Activity listing and roster endpoints.

use axum::extract::{Path as AxumPath, Query, State};
use axum::Json;
use mergington_activities::{ActivitiesSnapshot, RegistryError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::server::{ApiError, SharedState};

/// Query string carried by signup and unregister.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /activities - every activity with its current roster
pub async fn handle_list_activities(State(state): State<SharedState>) -> Json<ActivitiesSnapshot> {
    state.record_request();
    Json(state.registry.list_activities())
}

/// POST /activities/{activity_name}/signup?email=
pub async fn handle_signup(
    State(state): State<SharedState>,
    AxumPath(activity_name): AxumPath<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.record_request();

    let receipt = state
        .registry
        .signup(&activity_name, &query.email)
        .map_err(reject)?;

    metrics::counter!("activity_signups_total").increment(1);
    info!(activity = %receipt.activity, email = %receipt.email, "student signed up");

    Ok(Json(MessageResponse {
        message: receipt.message(),
    }))
}

/// POST|DELETE /activities/{activity_name}/unregister?email=
pub async fn handle_unregister(
    State(state): State<SharedState>,
    AxumPath(activity_name): AxumPath<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.record_request();

    let receipt = state
        .registry
        .unregister(&activity_name, &query.email)
        .map_err(reject)?;

    metrics::counter!("activity_unregistrations_total").increment(1);
    info!(activity = %receipt.activity, email = %receipt.email, "student unregistered");

    Ok(Json(MessageResponse {
        message: receipt.message(),
    }))
}

fn reject(err: RegistryError) -> ApiError {
    debug!(activity = %err.activity(), reason = err.reason(), "roster request rejected");
    metrics::counter!("activity_requests_rejected_total", "reason" => err.reason()).increment(1);
    ApiError::from(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;

    #[test]
    fn test_email_query_from_uri() {
        let uri: Uri = "/activities/Drama%20Club/signup?email=new%2Bclub@mergington.edu"
            .parse()
            .unwrap();
        let Query(query) = Query::<EmailQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.email, "new+club@mergington.edu");
    }

    #[test]
    fn test_email_query_requires_email() {
        let uri: Uri = "/activities/Basketball/signup?mail=x@mergington.edu"
            .parse()
            .unwrap();
        assert!(Query::<EmailQuery>::try_from_uri(&uri).is_err());
    }

    #[test]
    fn test_message_response_shape() {
        let value = serde_json::to_value(MessageResponse {
            message: "Signed up a@mergington.edu for Tennis".into(),
        })
        .unwrap();
        assert_eq!(value["message"], "Signed up a@mergington.edu for Tennis");
    }
}
