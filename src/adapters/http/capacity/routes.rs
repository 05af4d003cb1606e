//! Route configuration for capacity and availability endpoints.

use axum::routing::{get, put};
use axum::Router;

use super::handlers::{
    clear_week_override, get_iteration_summary, get_week_availability, record_attendance,
    save_member_capacity, set_week_override, CapacityAppState,
};

/// Creates the capacity router with all endpoints.
///
/// Routes:
/// - `PUT /api/iterations/:id/members/:member_id/capacity` - Upsert capacity inputs
/// - `GET /api/iterations/:id/summary` - Capacity rollup (`?by_team=true` for subtotals)
/// - `PUT /api/weeks/:week_id/members/:member_id/attendance` - Save daily attendance
/// - `GET /api/weeks/:week_id/members/:member_id/availability` - Read a week cell
/// - `PUT /api/weeks/:week_id/members/:member_id/override` - Pin the week percent
/// - `DELETE /api/weeks/:week_id/members/:member_id/override` - Clear the override
pub fn capacity_router() -> Router<CapacityAppState> {
    Router::new()
        .route(
            "/api/iterations/:id/members/:member_id/capacity",
            put(save_member_capacity),
        )
        .route("/api/iterations/:id/summary", get(get_iteration_summary))
        .route(
            "/api/weeks/:week_id/members/:member_id/attendance",
            put(record_attendance),
        )
        .route(
            "/api/weeks/:week_id/members/:member_id/availability",
            get(get_week_availability),
        )
        .route(
            "/api/weeks/:week_id/members/:member_id/override",
            put(set_week_override).delete(clear_week_override),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        InMemoryAvailability, InMemoryCapacity, InMemoryIterations, InMemoryTeams,
    };
    use crate::domain::capacity::{
        generate_weeks, Iteration, IterationWeek, ModeWeights, WorkMode,
    };
    use crate::domain::foundation::{
        IterationId, IterationWeekId, Percentage, ProjectId, TeamId, TeamMemberId,
    };
    use crate::domain::team::TeamMember;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct Fixture {
        app: Router,
        iteration_id: IterationId,
        week_id: IterationWeekId,
        member_id: TeamMemberId,
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // One team, one member, one 2024-01-01..2024-01-14 iteration.
    fn fixture() -> Fixture {
        let team_id = TeamId::new();
        let member = TeamMember::new(
            TeamMemberId::new(),
            team_id,
            "Ada".to_string(),
            None,
            WorkMode::Office,
            Percentage::HUNDRED,
        )
        .unwrap();
        let member_id = *member.id();
        let teams = Arc::new(InMemoryTeams::with_member(member));

        let iteration = Iteration::new(
            IterationId::new(),
            ProjectId::new(),
            team_id,
            "Sprint 1".to_string(),
            date(2024, 1, 1),
            date(2024, 1, 14),
            10,
        )
        .unwrap();
        let iteration_id = *iteration.id();
        let weeks: Vec<IterationWeek> = generate_weeks(date(2024, 1, 1), date(2024, 1, 14))
            .unwrap()
            .into_iter()
            .map(|s| IterationWeek::from_span(IterationWeekId::new(), iteration_id, s))
            .collect();
        let week_id = *weeks[0].id();

        let state = CapacityAppState::new(
            teams,
            Arc::new(InMemoryIterations::with_iteration(iteration, weeks)),
            Arc::new(InMemoryAvailability::new()),
            Arc::new(InMemoryCapacity::new()),
            ModeWeights::default(),
        );
        Fixture {
            app: capacity_router().with_state(state),
            iteration_id,
            week_id,
            member_id,
        }
    }

    fn put_json(uri: String, body: String) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn save_capacity_returns_computed_snapshot() {
        let f = fixture();
        let response = f
            .app
            .oneshot(put_json(
                format!(
                    "/api/iterations/{}/members/{}/capacity",
                    f.iteration_id, f.member_id
                ),
                r#"{"leaves": "1", "availability_percent": 80, "work_mode": "hybrid"}"#.to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        // (10 - 1) * 0.8 * 0.95 = 6.84
        let effective: rust_decimal::Decimal = json["effective_capacity_days"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(effective, rust_decimal_macros::dec!(6.84));
    }

    #[tokio::test]
    async fn save_capacity_rejects_availability_over_100() {
        let f = fixture();
        let response = f
            .app
            .oneshot(put_json(
                format!(
                    "/api/iterations/{}/members/{}/capacity",
                    f.iteration_id, f.member_id
                ),
                r#"{"leaves": "0", "availability_percent": 150, "work_mode": "office"}"#.to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn summary_of_empty_iteration_is_zero() {
        let f = fixture();
        let response = f
            .app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/iterations/{}/summary", f.iteration_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["total_members"], 0);
        assert!(json.get("teams").is_none());
    }

    #[tokio::test]
    async fn summary_by_team_includes_subtotals() {
        let f = fixture();
        let (app, iteration_id, member_id) = (f.app.clone(), f.iteration_id, f.member_id);
        app.oneshot(put_json(
            format!(
                "/api/iterations/{}/members/{}/capacity",
                iteration_id, member_id
            ),
            r#"{"leaves": "0", "availability_percent": 100, "work_mode": "office"}"#.to_string(),
        ))
        .await
        .unwrap();

        let response = f
            .app
            .oneshot(
                Request::builder()
                    .uri(format!(
                        "/api/iterations/{}/summary?by_team=true",
                        iteration_id
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = json_body(response).await;
        assert_eq!(json["total_members"], 1);
        assert_eq!(json["teams"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn attendance_then_availability_round_trip() {
        let f = fixture();
        let uri = format!(
            "/api/weeks/{}/members/{}/attendance",
            f.week_id, f.member_id
        );
        let body = r#"{"entries": [
            {"date": "2024-01-01", "status": "present"},
            {"date": "2024-01-02", "status": "present"},
            {"date": "2024-01-03", "status": "absent"},
            {"date": "2024-01-04", "status": "present"},
            {"date": "2024-01-05", "status": "present"}
        ]}"#;

        let response = f
            .app
            .clone()
            .oneshot(put_json(uri, body.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["availability_percent"], 80);

        let response = f
            .app
            .oneshot(
                Request::builder()
                    .uri(format!(
                        "/api/weeks/{}/members/{}/availability",
                        f.week_id, f.member_id
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = json_body(response).await;
        assert_eq!(json["weekly"]["calculated_percent"], 80);
        assert_eq!(json["days"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn override_set_and_clear() {
        let f = fixture();
        let uri = format!("/api/weeks/{}/members/{}/override", f.week_id, f.member_id);

        let response = f
            .app
            .clone()
            .oneshot(put_json(
                uri.clone(),
                r#"{"override_percent": 60}"#.to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["availability_percent"], 60);
        assert_eq!(json["override_percent"], 60);

        let response = f
            .app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert!(json.get("override_percent").is_none());
    }

    #[tokio::test]
    async fn availability_for_unknown_cell_returns_404() {
        let f = fixture();
        let response = f
            .app
            .oneshot(
                Request::builder()
                    .uri(format!(
                        "/api/weeks/{}/members/{}/availability",
                        f.week_id, f.member_id
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
