//! CSV export and import.

mod common;

use axum::body::to_bytes;
use axum::extract::{Query, State};
use axum::Json;
use pretty_assertions::assert_eq;

use ssms::backend::middleware::auth::AuthUser;
use ssms::backend::schedule::csv::{export_schedules, import_schedules, CSV_HEADER};
use ssms::backend::schedule::db;
use ssms::backend::schedule::handlers::ScheduleQuery;
use ssms::shared::Weekday;

use common::{create_admin, create_teacher, principal, seed_schedule, test_state};

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn export_includes_header_and_rows() {
    let state = test_state().await;
    let admin = create_admin(&state.pool).await;
    let amy = create_teacher(&state.pool, "t_amy", "Amy Chen").await;
    seed_schedule(&state.pool, &amy, Weekday::Monday, 1, "Biology", "Grade 9A").await;

    let response = export_schedules(
        State(state.clone()),
        AuthUser(principal(&admin)),
        Query(ScheduleQuery::default()),
    )
    .await
    .unwrap();

    assert_eq!(
        response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap(),
        "text/csv; charset=utf-8"
    );

    let text = body_text(response).await;
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));
    let row = lines.next().unwrap();
    assert_eq!(
        row,
        format!("{},Amy Chen,Monday,1,Biology,Grade 9A", amy.id)
    );
}

#[tokio::test]
async fn export_is_scoped_for_teachers() {
    let state = test_state().await;
    let amy = create_teacher(&state.pool, "t_amy", "Amy Chen").await;
    let john = create_teacher(&state.pool, "t_john", "John Smith").await;
    seed_schedule(&state.pool, &amy, Weekday::Monday, 1, "Biology", "Grade 9A").await;
    seed_schedule(&state.pool, &john, Weekday::Monday, 2, "Grammar", "Grade 9B").await;

    let response = export_schedules(
        State(state.clone()),
        AuthUser(principal(&amy)),
        Query(ScheduleQuery::default()),
    )
    .await
    .unwrap();

    let text = body_text(response).await;
    // Header plus Amy's single row
    assert_eq!(text.lines().count(), 2);
    assert!(text.contains("Amy Chen"));
    assert!(!text.contains("John Smith"));
}

#[tokio::test]
async fn import_reports_per_line_outcomes() {
    let state = test_state().await;
    let admin = create_admin(&state.pool).await;
    let amy = create_teacher(&state.pool, "t_amy", "Amy Chen").await;
    let john = create_teacher(&state.pool, "t_john", "John Smith").await;
    seed_schedule(&state.pool, &amy, Weekday::Monday, 1, "Biology", "Grade 9A").await;

    let body = format!(
        "{header}\n\
         {john},John Smith,Monday,2,Grammar,Grade 9B\n\
         {john},John Smith,Monday,1,Grammar,Grade 9A\n\
         {john},John Smith,Funday,3,Grammar,Grade 9B\n\
         {john},John Smith,Tuesday\n\
         \n\
         {john},John Smith,Tuesday,1,Poetry,Grade 9B\n",
        header = CSV_HEADER,
        john = john.id,
    );

    let Json(report) = import_schedules(
        State(state.clone()),
        AuthUser(principal(&admin)),
        body,
    )
    .await
    .unwrap();

    // Two good rows; one class conflict, one bad day, one short row
    assert_eq!(report.imported, 2);
    assert_eq!(report.skipped, 3);
    assert_eq!(report.errors.len(), 3);
    assert!(report.errors[0].starts_with("line 3:"), "{:?}", report.errors);
    assert!(report.errors[1].starts_with("line 4:"), "{:?}", report.errors);
    assert!(report.errors[2].starts_with("line 5:"), "{:?}", report.errors);

    let schedules = db::list_schedules(&state.pool, Some(&john.id)).await.unwrap();
    assert_eq!(schedules.len(), 2);
}

#[tokio::test]
async fn import_is_admin_only() {
    let state = test_state().await;
    let amy = create_teacher(&state.pool, "t_amy", "Amy Chen").await;

    let err = import_schedules(
        State(state.clone()),
        AuthUser(principal(&amy)),
        format!("{}\n", CSV_HEADER),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ssms::backend::error::ApiError::Forbidden));
}
