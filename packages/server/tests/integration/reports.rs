use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn hack_day_walkthrough_produces_a_full_event_analysis() {
    let app = TestApp::spawn().await;

    let event = app
        .post(
            routes::EVENTS,
            &json!({"college_id": "C1", "name": "Hack Day", "type": "workshop", "date": "2024-05-01"}),
        )
        .await;
    assert_eq!(event.body["event_id"], 1);

    let student = app
        .post(
            routes::STUDENTS,
            &json!({"college_id": "C1", "name": "Ann", "email": "ann@x.edu"}),
        )
        .await;
    assert_eq!(student.body["student_id"], 1);

    assert_eq!(app.register(1, 1).await.status, 201);
    assert_eq!(app.mark(1, 1, "present").await.status, 201);
    assert_eq!(app.rate(1, 1, 5).await.status, 201);

    let res = app.get(routes::REPORT_EVENT_ANALYSIS).await;

    assert_eq!(res.status, 200);
    let rows = res.body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["event_name"], "Hack Day");
    assert_eq!(row["total_registered"], 1);
    assert_eq!(row["total_present"], 1);
    assert_eq!(row["total_absent"], 0);
    assert_eq!(row["attendance_percentage"], 100.0);
    assert_eq!(row["total_feedback_count"], 1);
    assert_eq!(row["average_rating"], 5.0);
    assert_eq!(row["min_rating"], 5);
    assert_eq!(row["max_rating"], 5);
}

#[tokio::test]
async fn empty_event_has_zero_percentage_in_every_report() {
    let app = TestApp::spawn().await;
    app.create_event("Quiet", "talk", "2024-02-01").await;

    let attendance = app.get(routes::REPORT_ATTENDANCE).await;
    assert_eq!(attendance.status, 200);
    assert_eq!(attendance.body[0]["total_registered"], 0);
    assert_eq!(attendance.body[0]["attendance_percentage"], 0.0);

    let analysis = app.get(routes::REPORT_EVENT_ANALYSIS).await;
    assert_eq!(analysis.status, 200);
    assert_eq!(analysis.body[0]["attendance_percentage"], 0.0);
    assert!(analysis.body[0]["average_rating"].is_null());
    assert!(analysis.body[0]["min_rating"].is_null());
}

#[tokio::test]
async fn registrations_report_includes_events_without_registrations() {
    let app = TestApp::spawn().await;
    let busy = app.create_event("Busy", "talk", "2024-02-01").await;
    let empty = app.create_event("Empty", "talk", "2024-03-01").await;
    let ann = app.create_student("Ann", "ann@x.edu").await;
    let bob = app.create_student("Bob", "bob@x.edu").await;
    app.register(ann, busy).await;
    app.register(bob, busy).await;

    let res = app.get(routes::REPORT_REGISTRATIONS).await;

    assert_eq!(res.status, 200);
    assert_eq!(
        res.body,
        json!([
            {"event_id": busy, "event_name": "Busy", "total_registrations": 2},
            {"event_id": empty, "event_name": "Empty", "total_registrations": 0},
        ])
    );
}

#[tokio::test]
async fn attendance_report_orders_by_percentage() {
    let app = TestApp::spawn().await;
    let half = app.create_event("Half", "talk", "2024-02-01").await;
    let full = app.create_event("Full", "talk", "2024-03-01").await;
    let ann = app.create_student("Ann", "ann@x.edu").await;
    let bob = app.create_student("Bob", "bob@x.edu").await;
    for event in [half, full] {
        app.register(ann, event).await;
        app.register(bob, event).await;
    }
    app.mark(ann, half, "present").await;
    app.mark(bob, half, "absent").await;
    app.mark(ann, full, "present").await;
    app.mark(bob, full, "present").await;

    let res = app.get(routes::REPORT_ATTENDANCE).await;

    let rows = res.body.as_array().unwrap();
    assert_eq!(rows[0]["event_name"], "Full");
    assert_eq!(rows[0]["attendance_percentage"], 100.0);
    assert_eq!(rows[1]["event_name"], "Half");
    assert_eq!(rows[1]["total_registered"], 2);
    assert_eq!(rows[1]["total_present"], 1);
    assert_eq!(rows[1]["attendance_percentage"], 50.0);
}

#[tokio::test]
async fn feedback_counts_do_not_inflate_attendance_counts() {
    let app = TestApp::spawn().await;
    let event = app.create_event("Hack Day", "workshop", "2024-05-01").await;
    let ann = app.create_student("Ann", "ann@x.edu").await;
    let bob = app.create_student("Bob", "bob@x.edu").await;
    let cy = app.create_student("Cy", "cy@x.edu").await;
    app.register(ann, event).await;
    app.mark(ann, event, "present").await;
    app.rate(ann, event, 4).await;
    app.rate(bob, event, 2).await;
    app.rate(cy, event, 3).await;

    let res = app.get(routes::REPORT_EVENT_ANALYSIS).await;

    let row = &res.body[0];
    assert_eq!(row["total_registered"], 1);
    assert_eq!(row["total_present"], 1);
    assert_eq!(row["total_feedback_count"], 3);
    assert_eq!(row["average_rating"], 3.0);
    assert_eq!(row["min_rating"], 2);
    assert_eq!(row["max_rating"], 4);
}

#[tokio::test]
async fn feedback_report_lists_unrated_events_last() {
    let app = TestApp::spawn().await;
    let unrated = app.create_event("Unrated", "talk", "2024-01-01").await;
    let rated = app.create_event("Rated", "talk", "2024-02-01").await;
    let ann = app.create_student("Ann", "ann@x.edu").await;
    let bob = app.create_student("Bob", "bob@x.edu").await;
    app.rate(ann, rated, 4).await;
    app.rate(bob, rated, 5).await;

    let res = app.get(routes::REPORT_FEEDBACK).await;

    let rows = res.body.as_array().unwrap();
    assert_eq!(rows[0]["event_id"], rated);
    assert_eq!(rows[0]["average_feedback_score"], 4.5);
    assert_eq!(rows[1]["event_id"], unrated);
    assert!(rows[1]["average_feedback_score"].is_null());
}

#[tokio::test]
async fn event_analysis_is_ordered_by_latest_date() {
    let app = TestApp::spawn().await;
    app.create_event("Old", "talk", "2023-01-01").await;
    app.create_event("New", "talk", "2025-01-01").await;

    let res = app.get(routes::REPORT_EVENT_ANALYSIS).await;

    let rows = res.body.as_array().unwrap();
    assert_eq!(rows[0]["event_name"], "New");
    assert_eq!(rows[0]["event_date"], "2025-01-01");
    assert_eq!(rows[1]["event_name"], "Old");
}

mod student_reports {
    use super::*;

    #[tokio::test]
    async fn student_analysis_summarises_attendance_and_feedback() {
        let app = TestApp::spawn().await;
        let first = app.create_event("First", "talk", "2024-01-01").await;
        let second = app.create_event("Second", "workshop", "2024-02-01").await;
        let ann = app.create_student("Ann", "ann@x.edu").await;
        app.register(ann, first).await;
        app.register(ann, second).await;
        app.mark(ann, first, "present").await;
        app.mark(ann, second, "absent").await;
        app.rate(ann, first, 4).await;

        let res = app.get(&routes::student_analysis(ann)).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["student_info"]["name"], "Ann");
        assert_eq!(res.body["student_info"]["email"], "ann@x.edu");

        let attendance = &res.body["attendance_summary"];
        assert_eq!(attendance["total_events_registered"], 2);
        assert_eq!(attendance["events_attended"], 1);
        assert_eq!(attendance["events_absent"], 1);
        assert_eq!(attendance["attendance_percentage"], 50.0);

        let feedback = &res.body["feedback_summary"];
        assert_eq!(feedback["total_feedback_given"], 1);
        assert_eq!(feedback["average_rating"], 4.0);

        let details = res.body["event_details"].as_array().unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0]["event_name"], "Second");
        assert_eq!(details[0]["attendance_status"], "absent");
        assert!(details[0]["feedback_rating"].is_null());
        assert_eq!(details[1]["event_name"], "First");
        assert_eq!(details[1]["feedback_rating"], 4);
    }

    #[tokio::test]
    async fn student_analysis_without_activity_is_zero_guarded() {
        let app = TestApp::spawn().await;
        let ann = app.create_student("Ann", "ann@x.edu").await;

        let res = app.get(&routes::student_analysis(ann)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["attendance_summary"]["total_events_registered"], 0);
        assert_eq!(res.body["attendance_summary"]["attendance_percentage"], 0.0);
        assert_eq!(res.body["feedback_summary"]["total_feedback_given"], 0);
        assert!(res.body["feedback_summary"]["average_rating"].is_null());
        assert_eq!(res.body["event_details"], json!([]));
    }

    #[tokio::test]
    async fn student_analysis_for_unknown_student_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::student_analysis(99)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["error"], "Student not found");
    }

    #[tokio::test]
    async fn participation_joins_attended_event_names() {
        let app = TestApp::spawn().await;
        let first = app.create_event("First", "talk", "2024-01-01").await;
        let skipped = app.create_event("Skipped", "talk", "2024-01-15").await;
        let second = app.create_event("Second", "talk", "2024-02-01").await;
        let ann = app.create_student("Ann", "ann@x.edu").await;
        app.mark(ann, second, "present").await;
        app.mark(ann, skipped, "absent").await;
        app.mark(ann, first, "present").await;

        let res = app.get(&routes::student_participation(ann)).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["student_name"], "Ann");
        assert_eq!(res.body["events_attended"], "First,Second");
    }

    #[tokio::test]
    async fn participation_without_attendance_is_not_found() {
        let app = TestApp::spawn().await;
        let event = app.create_event("Only", "talk", "2024-01-01").await;
        let ann = app.create_student("Ann", "ann@x.edu").await;
        app.mark(ann, event, "absent").await;

        let res = app.get(&routes::student_participation(ann)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["error"], "No participation found for this student");
    }
}

mod rankings {
    use super::*;

    #[tokio::test]
    async fn top_students_are_limited_to_three_with_ties_by_id() {
        let app = TestApp::spawn().await;
        let a = app.create_event("A", "talk", "2024-01-01").await;
        let b = app.create_event("B", "talk", "2024-01-02").await;
        let mut students = Vec::new();
        for name in ["s1", "s2", "s3", "s4"] {
            students.push(app.create_student(name, &format!("{name}@x.edu")).await);
        }
        // s4 attends twice; s1..s3 once each; s3 also has an absence.
        app.mark(students[3], a, "present").await;
        app.mark(students[3], b, "present").await;
        app.mark(students[2], a, "present").await;
        app.mark(students[2], b, "absent").await;
        app.mark(students[1], a, "present").await;
        app.mark(students[0], a, "present").await;

        let res = app.get(routes::REPORT_TOP_STUDENTS).await;

        assert_eq!(res.status, 200);
        let rows = res.body.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["student_id"], students[3]);
        assert_eq!(rows[0]["events_attended_count"], 2);
        assert_eq!(rows[1]["student_id"], students[0]);
        assert_eq!(rows[2]["student_id"], students[1]);
    }

    #[tokio::test]
    async fn events_by_type_matches_exactly_and_orders_by_date() {
        let app = TestApp::spawn().await;
        app.create_event("Later", "workshop", "2024-06-01").await;
        app.create_event("Talk", "talk", "2024-01-01").await;
        app.create_event("Sooner", "workshop", "2024-03-01").await;
        app.create_event("Caps", "Workshop", "2024-02-01").await;

        let res = app.get(&routes::events_by_type("workshop")).await;

        assert_eq!(res.status, 200);
        let rows = res.body.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["event_name"], "Sooner");
        assert_eq!(rows[0]["type"], "workshop");
        assert_eq!(rows[1]["event_name"], "Later");
    }

    #[tokio::test]
    async fn unknown_type_lists_nothing() {
        let app = TestApp::spawn().await;
        app.create_event("Talk", "talk", "2024-01-01").await;

        let res = app.get(&routes::events_by_type("hackathon")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }
}

mod bad_parameters {
    use super::*;

    #[tokio::test]
    async fn non_numeric_student_id_is_a_json_validation_error() {
        let app = TestApp::spawn().await;

        for path in [
            "/reports/student_analysis/abc",
            "/reports/student_participation/abc",
        ] {
            let res = app.get(path).await;
            assert_eq!(res.status, 400, "{path}");
            assert_eq!(res.body["code"], "VALIDATION_ERROR", "{path}: {}", res.text);
            assert!(res.body["error"].as_str().unwrap().contains("abc"));
        }
    }
}
