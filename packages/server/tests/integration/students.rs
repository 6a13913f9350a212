use serde_json::json;

use crate::common::{TestApp, routes};

mod student_creation {
    use super::*;

    #[tokio::test]
    async fn created_student_is_returned_with_its_id() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::STUDENTS,
                &json!({"college_id": "C1", "name": "Ann", "email": "ann@x.edu"}),
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["student_id"], 1);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let app = TestApp::spawn().await;
        app.create_student("Ann", "ann@x.edu").await;

        let res = app
            .post(
                routes::STUDENTS,
                &json!({"college_id": "C2", "name": "Other Ann", "email": "ann@x.edu"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "CONFLICT");
        assert_eq!(res.body["error"], "A student with this email already exists");
    }

    #[tokio::test]
    async fn blank_email_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::STUDENTS,
                &json!({"college_id": "C1", "name": "Ann", "email": "   "}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "Missing required field: email");
    }
}

mod find_or_create {
    use super::*;

    #[tokio::test]
    async fn second_call_finds_the_student_created_by_the_first() {
        let app = TestApp::spawn().await;
        let body = json!({"college_id": "C1", "name": "Ann", "email": "ann@x.edu"});

        let first = app.post(routes::FIND_OR_CREATE, &body).await;
        assert_eq!(first.status, 201, "{}", first.text);
        assert_eq!(first.body["is_new"], true);

        let second = app.post(routes::FIND_OR_CREATE, &body).await;
        assert_eq!(second.status, 200, "{}", second.text);
        assert_eq!(second.body["is_new"], false);
        assert_eq!(second.body["student_id"], first.body["student_id"]);
    }

    #[tokio::test]
    async fn existing_student_is_returned_unmodified() {
        let app = TestApp::spawn().await;
        let id = app.create_student("Ann", "ann@x.edu").await;

        let res = app
            .post(
                routes::FIND_OR_CREATE,
                &json!({"college_id": "C9", "name": "Annabel", "email": "ann@x.edu"}),
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["student_id"], id);
        assert_eq!(res.body["name"], "Ann");
        assert_eq!(res.body["email"], "ann@x.edu");
        assert_eq!(res.body["is_new"], false);
    }

    #[tokio::test]
    async fn missing_email_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .post(routes::FIND_OR_CREATE, &json!({"college_id": "C1", "name": "Ann"}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}
