use serde_json::json;

use wellness_server::store::{NewResource, Store};

use crate::common::{TestApp, routes};

fn resource(name: &str, is_verified: bool) -> NewResource {
    NewResource {
        name: name.to_string(),
        resource_type: "Hotline".to_string(),
        contact_info: Some("555-0100".to_string()),
        website_url: None,
        description: Some(format!("{name} description")),
        is_verified,
    }
}

#[tokio::test]
async fn empty_directory_lists_nothing() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::RESOURCES).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body, json!([]));
}

#[tokio::test]
async fn only_verified_resources_are_listed_in_id_order() {
    let app = TestApp::spawn().await;
    let store = Store::new(&app.db);
    let first = store.insert_resource(resource("Warmline", true)).await.unwrap();
    store.insert_resource(resource("Unreviewed", false)).await.unwrap();
    let second = store.insert_resource(resource("Peer Support", true)).await.unwrap();

    let res = app.get(routes::RESOURCES).await;
    assert_eq!(res.status, 200);

    let listed = res.body.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], first.id);
    assert_eq!(listed[0]["name"], "Warmline");
    assert_eq!(listed[0]["resource_type"], "Hotline");
    assert_eq!(listed[0]["contact_info"], "555-0100");
    assert!(listed[0]["website_url"].is_null());
    assert!(listed[0].get("is_verified").is_none());
    assert_eq!(listed[1]["id"], second.id);
    assert!(listed.iter().all(|r| r["name"] != "Unreviewed"));
}

#[tokio::test]
async fn seeded_directory_is_listed() {
    let app = TestApp::spawn().await;
    wellness_server::seed::seed_resources(&app.db).await.unwrap();

    let res = app.get(routes::RESOURCES).await;

    assert_eq!(res.status, 200);
    let listed = res.body.as_array().unwrap();
    let stored = Store::new(&app.db).count_resources().await.unwrap();
    assert!(!listed.is_empty());
    assert_eq!(listed.len() as u64, stored);
}
