use axum::{extract::State, Json};
use chrono::{Datelike, Utc};

use crate::profile::career::{career_trajectory, CareerPoint};
use crate::profile::models::ProfileData;
use crate::state::AppState;

/// GET /api/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<ProfileData> {
    Json(state.profile.as_ref().clone())
}

/// GET /api/profile/career
pub async fn handle_get_career(State(state): State<AppState>) -> Json<Vec<CareerPoint>> {
    Json(career_trajectory(&state.profile, Utc::now().year()))
}

#[cfg(test)]
mod tests {
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::routes::build_router;
    use crate::state::AppState;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = build_router(AppState::for_tests(None));
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_profile_endpoint_returns_camel_case_records() {
        let (status, json) = get_json("/api/profile").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["profile"]["name"], "Ada Wanjiru");
        assert_eq!(json["profile"]["yearsOfExperience"], 9);
        assert_eq!(json["experience"]["positions"][0]["type"], "Lead");
        assert_eq!(json["certifications"]["totalCount"], 40);
    }

    #[tokio::test]
    async fn test_career_endpoint_is_sorted_by_year() {
        let (status, json) = get_json("/api/profile/career").await;
        assert_eq!(status, StatusCode::OK);
        let years: Vec<i64> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["year"].as_i64().unwrap())
            .collect();
        assert_eq!(years.first(), Some(&2013));
        assert!(years.windows(2).all(|w| w[0] < w[1]));
    }
}
