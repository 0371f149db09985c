use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn mood_is_logged_with_optional_notes() {
    let app = TestApp::spawn().await;
    let user_id = app.create_user("river").await;

    let res = app
        .post(
            routes::MOODS,
            &json!({"user_id": user_id, "mood_score": 7, "notes": "Slept well."}),
        )
        .await;

    assert_eq!(res.status, 201, "{}", res.text);
    assert!(res.body["id"].is_number());
    assert_eq!(res.body["user_id"], user_id);
    assert_eq!(res.body["mood_score"], 7);
    assert_eq!(res.body["notes"], "Slept well.");
    assert!(res.body["entry_date"].is_string());
}

#[tokio::test]
async fn notes_default_to_null() {
    let app = TestApp::spawn().await;
    let user_id = app.create_user("river").await;

    let res = app
        .post(routes::MOODS, &json!({"user_id": user_id, "mood_score": 5}))
        .await;

    assert_eq!(res.status, 201);
    assert!(res.body["notes"].is_null());
}

#[tokio::test]
async fn boundary_scores_are_accepted() {
    let app = TestApp::spawn().await;
    let user_id = app.create_user("river").await;

    for score in [1, 10] {
        let res = app
            .post(routes::MOODS, &json!({"user_id": user_id, "mood_score": score}))
            .await;
        assert_eq!(res.status, 201, "score {score}: {}", res.text);
    }
    assert_eq!(app.count("SELECT COUNT(*) FROM mood_entries").await, 2);
}

#[tokio::test]
async fn out_of_range_scores_are_rejected_without_a_row() {
    let app = TestApp::spawn().await;
    let user_id = app.create_user("river").await;

    for score in [0, 11, -3] {
        let res = app
            .post(routes::MOODS, &json!({"user_id": user_id, "mood_score": score}))
            .await;
        assert_eq!(res.status, 400, "score {score}");
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(res.body["message"], "Mood score must be between 1 and 10.");
    }
    assert_eq!(app.count("SELECT COUNT(*) FROM mood_entries").await, 0);
}

#[tokio::test]
async fn mood_for_unknown_user_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post(routes::MOODS, &json!({"user_id": 31337, "mood_score": 4}))
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "INVALID_REFERENCE");
}

#[tokio::test]
async fn history_is_newest_first_and_scoped_to_the_user() {
    let app = TestApp::spawn().await;
    let river = app.create_user("river").await;
    let stone = app.create_user("stone").await;

    let first = app.log_mood(river, 3).await;
    app.log_mood(stone, 9).await;
    let second = app.log_mood(river, 6).await;

    let res = app.get(&routes::mood_history(river)).await;
    assert_eq!(res.status, 200);

    let entries = res.body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], second);
    assert_eq!(entries[0]["mood_score"], 6);
    assert_eq!(entries[1]["id"], first);
    assert!(entries.iter().all(|e| e["user_id"] == river));
}

#[tokio::test]
async fn history_of_unknown_user_is_empty() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::mood_history(404)).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body, json!([]));
}

#[tokio::test]
async fn history_with_non_numeric_user_id_is_a_validation_error() {
    let app = TestApp::spawn().await;

    let res = app.get("/moods/abc").await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}
