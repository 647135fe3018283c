//! Object API behavior: map and connection management through the client
//! and the resource objects.

mod common;

use common::{RecordingExecutor, client_with};
use mapwire_client::{ClientError, DEFAULT_HOSTNAME, Method};
use serde_json::json;

#[tokio::test]
async fn create_map_posts_the_source_and_returns_a_map() {
    let executor = RecordingExecutor::new();
    executor.push_json(
        201,
        json!({"id": "1234", "source": {"version": "1.0", "url": "https://provider.example"}}),
    );

    let client = client_with(&executor);
    let source = json!({"version": "1.0", "url": "https://provider.example"});
    let map = client.create_map(source.clone()).await.unwrap();

    assert_eq!(map.id(), "1234");
    assert_eq!(map.source().get("version").unwrap(), "1.0");

    let requests = executor.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/maps");
    assert_eq!(requests[0].hostname, DEFAULT_HOSTNAME);
    assert_eq!(requests[0].port, Some(443));
    assert_eq!(requests[0].body.as_ref().unwrap(), &source);
    assert_eq!(
        requests[0].headers.get("Authorization").unwrap(),
        "Bearer abcd"
    );
}

#[tokio::test]
async fn get_map_fetches_by_id() {
    let executor = RecordingExecutor::new();
    executor.push_json(200, json!({"id": "1234", "source": {"version": "1.0"}}));

    let client = client_with(&executor);
    let map = client.get_map("1234").await.unwrap();

    assert_eq!(map.id(), "1234");
    let requests = executor.requests();
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].path, "/maps/1234");
}

#[tokio::test]
async fn delete_map_issues_a_delete_and_drops_the_handle() {
    let executor = RecordingExecutor::new();
    executor.push_empty(204);

    let client = client_with(&executor);
    let before = client.api("1234").unwrap();

    client.delete_map("1234").await.unwrap();

    let requests = executor.requests();
    assert_eq!(requests[0].method, Method::DELETE);
    assert_eq!(requests[0].path, "/maps/1234");

    // The registry entry is gone: map() binds a fresh handle now.
    let after = client.map("1234").unwrap();
    assert!(!std::ptr::eq(before.identity(), after.identity()));
}

#[tokio::test]
async fn map_save_puts_the_edited_source() {
    let executor = RecordingExecutor::new();
    executor.push_json(200, json!({"id": "1234", "source": {"version": "1.0"}}));
    executor.push_json(200, json!({"id": "1234", "source": {"version": "2.0"}}));

    let client = client_with(&executor);
    let mut map = client.get_map("1234").await.unwrap();

    map.source_mut()
        .insert("version".to_string(), json!("2.0"));
    let saved = map.save().await.unwrap();

    assert_eq!(saved.source().get("version").unwrap(), "2.0");

    let requests = executor.requests();
    assert_eq!(requests[1].method, Method::PUT);
    assert_eq!(requests[1].path, "/maps/1234");
    assert_eq!(requests[1].body.as_ref().unwrap(), &json!({"version": "2.0"}));
}

#[tokio::test]
async fn map_delete_routes_through_the_originating_client() {
    let executor = RecordingExecutor::new();
    executor.push_json(200, json!({"id": "1234", "source": {}}));
    executor.push_empty(204);

    let client = client_with(&executor);
    let map = client.get_map("1234").await.unwrap();
    map.delete().await.unwrap();

    let requests = executor.requests();
    assert_eq!(requests[1].method, Method::DELETE);
    assert_eq!(requests[1].path, "/maps/1234");
}

#[tokio::test]
async fn map_create_connection_targets_the_maps_collection() {
    let executor = RecordingExecutor::new();
    executor.push_json(200, json!({"id": "1234", "source": {}}));
    executor.push_json(
        201,
        json!({"id": "conn1", "name": "acme", "created": "2017-03-01T12:00:00Z"}),
    );

    let client = client_with(&executor);
    let map = client.get_map("1234").await.unwrap();

    let data = json!({"name": "acme"});
    let connection = map.create_connection(Some(data.clone())).await.unwrap();

    assert_eq!(connection.id(), "conn1");
    assert!(connection.created().is_some());

    let requests = executor.requests();
    assert_eq!(requests[1].method, Method::POST);
    assert_eq!(requests[1].path, "/maps/1234/connections");
    assert_eq!(requests[1].body.as_ref().unwrap(), &data);
}

#[tokio::test]
async fn get_connection_strips_read_only_fields() {
    let executor = RecordingExecutor::new();
    executor.push_json(
        200,
        json!({
            "id": "conn1",
            "name": "acme",
            "auth": {"status": {"complete": true}},
            "created": "2017-03-01T12:00:00Z",
            "updated": "2017-03-02T12:00:00Z",
            "endpoint_data": {"Posts": {}}
        }),
    );

    let client = client_with(&executor);
    let connection = client.get_connection("conn1").await.unwrap();

    assert_eq!(connection.id(), "conn1");
    assert!(connection.created().is_some());
    assert!(connection.updated().is_some());
    assert!(connection.fields().contains_key("auth"));
    assert!(!connection.fields().contains_key("endpoint_data"));
    assert!(!connection.fields().contains_key("created"));

    assert_eq!(executor.requests()[0].path, "/connections/conn1");
}

#[tokio::test]
async fn connection_save_patches_the_editable_fields() {
    let executor = RecordingExecutor::new();
    executor.push_json(
        200,
        json!({"id": "conn1", "name": "acme", "created": "2017-03-01T12:00:00Z"}),
    );
    executor.push_json(
        200,
        json!({"id": "conn1", "name": "acme-prod", "created": "2017-03-01T12:00:00Z"}),
    );

    let client = client_with(&executor);
    let mut connection = client.get_connection("conn1").await.unwrap();

    connection
        .fields_mut()
        .insert("name".to_string(), json!("acme-prod"));
    let saved = connection.save().await.unwrap();

    assert_eq!(saved.fields().get("name").unwrap(), "acme-prod");

    let requests = executor.requests();
    assert_eq!(requests[1].method, Method::PATCH);
    assert_eq!(requests[1].path, "/connections/conn1");
    // Save bodies never carry the id or the gateway-owned fields.
    assert_eq!(requests[1].body.as_ref().unwrap(), &json!({"name": "acme-prod"}));
}

#[tokio::test]
async fn connection_delete_routes_through_the_originating_client() {
    let executor = RecordingExecutor::new();
    executor.push_json(200, json!({"id": "conn1", "name": "acme"}));
    executor.push_empty(204);

    let client = client_with(&executor);
    let connection = client.get_connection("conn1").await.unwrap();
    connection.delete().await.unwrap();

    let requests = executor.requests();
    assert_eq!(requests[1].method, Method::DELETE);
    assert_eq!(requests[1].path, "/connections/conn1");
}

#[tokio::test]
async fn non_2xx_rejects_with_the_remote_message() {
    let executor = RecordingExecutor::new();
    executor.push_json(404, json!({"message": "No map found"}));

    let client = client_with(&executor);
    let err = client.get_map("9999").await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Remote { status: 404, message } if message == "No map found"
    ));
}

#[tokio::test]
async fn malformed_bodies_are_invalid_data() {
    let executor = RecordingExecutor::new();
    // 2xx but not a JSON object: the record parser must reject it.
    executor.push_json(200, json!("not an object"));

    let client = client_with(&executor);
    let err = client.get_map("1234").await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Core(mapwire_client::CoreError::InvalidData(_))
    ));
}
