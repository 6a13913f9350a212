use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn ratings_outside_one_to_five_are_rejected() {
    let app = TestApp::spawn().await;
    let event_id = app.create_event("Hack Day", "workshop", "2024-05-01").await;
    let student_id = app.create_student("Ann", "ann@x.edu").await;

    for rating in [0, 6, -1] {
        let res = app.rate(student_id, event_id, rating).await;
        assert_eq!(res.status, 400, "rating {rating} accepted");
        assert_eq!(res.body["code"], "RANGE_ERROR");
        assert_eq!(res.body["error"], "Rating must be between 1 and 5");
    }
}

#[tokio::test]
async fn boundary_ratings_are_accepted() {
    let app = TestApp::spawn().await;
    let event_id = app.create_event("Hack Day", "workshop", "2024-05-01").await;
    let ann = app.create_student("Ann", "ann@x.edu").await;
    let bob = app.create_student("Bob", "bob@x.edu").await;

    let low = app.rate(ann, event_id, 1).await;
    assert_eq!(low.status, 201, "{}", low.text);
    let high = app.rate(bob, event_id, 5).await;
    assert_eq!(high.status, 201, "{}", high.text);
}

#[tokio::test]
async fn second_feedback_for_the_same_event_conflicts() {
    let app = TestApp::spawn().await;
    let event_id = app.create_event("Hack Day", "workshop", "2024-05-01").await;
    let student_id = app.create_student("Ann", "ann@x.edu").await;

    assert_eq!(app.rate(student_id, event_id, 4).await.status, 201);
    let second = app.rate(student_id, event_id, 2).await;

    assert_eq!(second.status, 400);
    assert_eq!(second.body["code"], "CONFLICT");
}

#[tokio::test]
async fn feedback_text_is_optional_and_kept_when_given() {
    let app = TestApp::spawn().await;
    let event_id = app.create_event("Hack Day", "workshop", "2024-05-01").await;
    let student_id = app.create_student("Ann", "ann@x.edu").await;

    let res = app
        .post(
            routes::FEEDBACK,
            &json!({
                "student_id": student_id,
                "event_id": event_id,
                "rating": 3,
                "feedback_text": "Good pacing",
            }),
        )
        .await;
    assert_eq!(res.status, 201, "{}", res.text);

    let list = app.get(routes::STAFF_FEEDBACK).await;
    let rows = list.body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["feedback_text"], "Good pacing");
    assert_eq!(rows[0]["student_name"], "Ann");
    assert_eq!(rows[0]["event_name"], "Hack Day");
}

#[tokio::test]
async fn missing_rating_is_a_validation_error() {
    let app = TestApp::spawn().await;

    let res = app
        .post(routes::FEEDBACK, &json!({"student_id": 1, "event_id": 1}))
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
    assert_eq!(res.body["error"], "Missing required field: rating");
}
