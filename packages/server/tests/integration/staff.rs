use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn staff_marking_twice_keeps_the_latest_status() {
    let app = TestApp::spawn().await;
    let event_id = app.create_event("Hack Day", "workshop", "2024-05-01").await;
    let student_id = app.create_student("Ann", "ann@x.edu").await;

    let first = app.staff_mark(student_id, event_id, "absent").await;
    assert_eq!(first.status, 201, "{}", first.text);
    let second = app.staff_mark(student_id, event_id, "present").await;
    assert_eq!(second.status, 201, "{}", second.text);

    let res = app.get(&routes::staff_attendance(event_id)).await;
    let rows = res.body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "present");
}

#[tokio::test]
async fn staff_can_correct_a_self_service_record() {
    let app = TestApp::spawn().await;
    let event_id = app.create_event("Hack Day", "workshop", "2024-05-01").await;
    let student_id = app.create_student("Ann", "ann@x.edu").await;
    assert_eq!(app.mark(student_id, event_id, "present").await.status, 201);

    let res = app.staff_mark(student_id, event_id, "absent").await;
    assert_eq!(res.status, 201);

    let list = app.get(routes::ATTENDANCE).await;
    let rows = list.body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "absent");
}

#[tokio::test]
async fn staff_marking_validates_like_self_service() {
    let app = TestApp::spawn().await;

    let missing = app
        .post(routes::STAFF_ATTENDANCE, &json!({"event_id": 1, "status": "present"}))
        .await;
    assert_eq!(missing.status, 400);
    assert_eq!(missing.body["error"], "Missing required field: student_id");

    let unknown = app.staff_mark(5, 5, "present").await;
    assert_eq!(unknown.status, 404);
}

#[tokio::test]
async fn staff_events_carry_registration_counts() {
    let app = TestApp::spawn().await;
    let later = app.create_event("Later", "talk", "2024-06-01").await;
    let sooner = app.create_event("Sooner", "talk", "2024-01-01").await;
    let ann = app.create_student("Ann", "ann@x.edu").await;
    app.register(ann, later).await;

    let res = app.get(routes::STAFF_EVENTS).await;

    assert_eq!(res.status, 200);
    let rows = res.body.as_array().unwrap();
    assert_eq!(rows[0]["event_id"], sooner);
    assert_eq!(rows[0]["registration_count"], 0);
    assert_eq!(rows[1]["event_id"], later);
    assert_eq!(rows[1]["registration_count"], 1);
    assert_eq!(rows[1]["type"], "talk");
}

#[tokio::test]
async fn registration_roster_lists_students_in_registration_order() {
    let app = TestApp::spawn().await;
    let event_id = app.create_event("Hack Day", "workshop", "2024-05-01").await;
    let other = app.create_event("Other", "talk", "2024-05-02").await;
    let ann = app.create_student("Ann", "ann@x.edu").await;
    let bob = app.create_student("Bob", "bob@x.edu").await;
    app.register(bob, event_id).await;
    app.register(ann, event_id).await;
    app.register(ann, other).await;

    let res = app.get(&routes::staff_registrations(event_id)).await;

    assert_eq!(res.status, 200);
    let rows = res.body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Bob");
    assert_eq!(rows[0]["email"], "bob@x.edu");
    assert_eq!(rows[0]["college_id"], "C1");
    assert_eq!(rows[1]["student_id"], ann);
}

#[tokio::test]
async fn attendance_roster_joins_student_details() {
    let app = TestApp::spawn().await;
    let event_id = app.create_event("Hack Day", "workshop", "2024-05-01").await;
    let ann = app.create_student("Ann", "ann@x.edu").await;
    let bob = app.create_student("Bob", "bob@x.edu").await;
    app.staff_mark(ann, event_id, "present").await;
    app.staff_mark(bob, event_id, "absent").await;

    let res = app.get(&routes::staff_attendance(event_id)).await;

    let rows = res.body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Ann");
    assert_eq!(rows[0]["status"], "present");
    assert_eq!(rows[1]["name"], "Bob");
    assert_eq!(rows[1]["status"], "absent");
}

#[tokio::test]
async fn rosters_for_unknown_events_are_empty() {
    let app = TestApp::spawn().await;

    let registrations = app.get(&routes::staff_registrations(77)).await;
    assert_eq!(registrations.status, 200);
    assert_eq!(registrations.body, json!([]));

    let attendance = app.get(&routes::staff_attendance(77)).await;
    assert_eq!(attendance.status, 200);
    assert_eq!(attendance.body, json!([]));
}

#[tokio::test]
async fn staff_feedback_is_newest_first() {
    let app = TestApp::spawn().await;
    let event_id = app.create_event("Hack Day", "workshop", "2024-05-01").await;
    let ann = app.create_student("Ann", "ann@x.edu").await;
    let bob = app.create_student("Bob", "bob@x.edu").await;
    app.rate(ann, event_id, 2).await;
    app.rate(bob, event_id, 5).await;

    let res = app.get(routes::STAFF_FEEDBACK).await;

    let rows = res.body.as_array().unwrap();
    assert_eq!(rows[0]["student_email"], "bob@x.edu");
    assert_eq!(rows[0]["rating"], 5);
    assert_eq!(rows[1]["student_email"], "ann@x.edu");
}

#[tokio::test]
async fn non_numeric_roster_id_is_a_json_validation_error() {
    let app = TestApp::spawn().await;

    for path in ["/staff/registrations/first", "/staff/attendance/first"] {
        let res = app.get(path).await;
        assert_eq!(res.status, 400, "{path}");
        assert_eq!(res.body["code"], "VALIDATION_ERROR", "{path}: {}", res.text);
    }
}
