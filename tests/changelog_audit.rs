//! Audit records produced by schedule updates.

mod common;

use axum::extract::{Path, Query, State};
use axum::Json;
use pretty_assertions::assert_eq;

use ssms::backend::changelog::db::list_changelogs;
use ssms::backend::changelog::handlers::{get_changelogs, ChangelogQuery};
use ssms::backend::middleware::auth::AuthUser;
use ssms::backend::schedule::handlers::{update_schedule, ScheduleUpdate};
use ssms::shared::Weekday;

use common::{create_admin, create_teacher, principal, seed_schedule, test_state};

#[tokio::test]
async fn update_writes_an_audit_record() {
    let state = test_state().await;
    let admin = create_admin(&state.pool).await;
    let amy = create_teacher(&state.pool, "t_amy", "Amy Chen").await;
    let entry = seed_schedule(&state.pool, &amy, Weekday::Monday, 1, "Biology", "Grade 9A").await;

    update_schedule(
        State(state.clone()),
        AuthUser(principal(&admin)),
        Path(entry.id.clone()),
        Json(ScheduleUpdate {
            subject: Some("Chemistry".to_string()),
            class_name: Some("Grade 9B".to_string()),
        }),
    )
    .await
    .unwrap();

    let logs = list_changelogs(&state.pool, None).await.unwrap();
    assert_eq!(logs.len(), 1);

    let record = &logs[0];
    assert_eq!(record.schedule_id, entry.id);
    assert_eq!(record.teacher_id, amy.id);
    assert_eq!(record.teacher_name, "Amy Chen");
    assert_eq!(record.day, Weekday::Monday);
    assert_eq!(record.period, 1);
    assert_eq!(record.old_value, "Biology - Grade 9A");
    assert_eq!(record.new_value, "Chemistry - Grade 9B");
    assert_eq!(record.changed_by, "Administrator");
}

#[tokio::test]
async fn noop_update_writes_nothing() {
    let state = test_state().await;
    let admin = create_admin(&state.pool).await;
    let amy = create_teacher(&state.pool, "t_amy", "Amy Chen").await;
    let entry = seed_schedule(&state.pool, &amy, Weekday::Monday, 1, "Biology", "Grade 9A").await;

    // Resubmitting identical values, and omitting both fields
    for update in [
        ScheduleUpdate {
            subject: Some("Biology".to_string()),
            class_name: Some("Grade 9A".to_string()),
        },
        ScheduleUpdate::default(),
    ] {
        update_schedule(
            State(state.clone()),
            AuthUser(principal(&admin)),
            Path(entry.id.clone()),
            Json(update),
        )
        .await
        .unwrap();
    }

    assert!(list_changelogs(&state.pool, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn rejected_update_leaves_no_audit_record() {
    let state = test_state().await;
    let admin = create_admin(&state.pool).await;
    let amy = create_teacher(&state.pool, "t_amy", "Amy Chen").await;
    let john = create_teacher(&state.pool, "t_john", "John Smith").await;

    let entry = seed_schedule(&state.pool, &amy, Weekday::Monday, 1, "Biology", "Grade 9A").await;
    seed_schedule(&state.pool, &john, Weekday::Monday, 1, "Grammar", "Grade 9B").await;

    update_schedule(
        State(state.clone()),
        AuthUser(principal(&admin)),
        Path(entry.id.clone()),
        Json(ScheduleUpdate {
            subject: None,
            class_name: Some("Grade 9B".to_string()),
        }),
    )
    .await
    .unwrap_err();

    // The conflict aborted before anything was written
    assert!(list_changelogs(&state.pool, None).await.unwrap().is_empty());

    let unchanged = ssms::backend::schedule::db::get_schedule(&state.pool, &entry.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.class_name, "Grade 9A");
}

#[tokio::test]
async fn changelog_listing_is_newest_first_and_scoped() {
    let state = test_state().await;
    let admin = create_admin(&state.pool).await;
    let amy = create_teacher(&state.pool, "t_amy", "Amy Chen").await;
    let john = create_teacher(&state.pool, "t_john", "John Smith").await;

    let amy_entry =
        seed_schedule(&state.pool, &amy, Weekday::Monday, 1, "Biology", "Grade 9A").await;
    let john_entry =
        seed_schedule(&state.pool, &john, Weekday::Monday, 2, "Grammar", "Grade 9B").await;

    for (id, subject) in [
        (&amy_entry.id, "Chemistry"),
        (&john_entry.id, "Poetry"),
        (&amy_entry.id, "Physics"),
    ] {
        update_schedule(
            State(state.clone()),
            AuthUser(principal(&admin)),
            Path(id.clone()),
            Json(ScheduleUpdate {
                subject: Some(subject.to_string()),
                class_name: None,
            }),
        )
        .await
        .unwrap();
    }

    // Admin sees all three, newest first
    let Json(all) = get_changelogs(
        State(state.clone()),
        AuthUser(principal(&admin)),
        Query(ChangelogQuery::default()),
    )
    .await
    .unwrap();
    assert_eq!(all.len(), 3);
    assert!(all[0].timestamp >= all[1].timestamp);
    assert!(all[1].timestamp >= all[2].timestamp);
    assert_eq!(all[0].new_value, "Physics - Grade 9A");

    // Amy is pinned to her own history even when asking for John's
    let Json(scoped) = get_changelogs(
        State(state.clone()),
        AuthUser(principal(&amy)),
        Query(ChangelogQuery {
            teacher_id: Some(john.id.clone()),
        }),
    )
    .await
    .unwrap();
    assert_eq!(scoped.len(), 2);
    assert!(scoped.iter().all(|record| record.teacher_id == amy.id));
}
