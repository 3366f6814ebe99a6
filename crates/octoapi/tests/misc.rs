//! Tests for settings, printer profile, system and miscellaneous actions.

mod common;

use octoapi::{CommandSource, Error};
use serde_json::json;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use common::{client_for, json_response, mock_get, mock_post, setup_mock_server};

#[tokio::test]
async fn test_version() {
    let server = setup_mock_server().await;
    mock_get(
        &server,
        "version",
        json_response(json!({"api": "0.1", "server": "1.10.2", "text": "OctoPrint 1.10.2"})),
    )
    .await;

    let client = client_for(&server);
    let version = client.misc().version().await.unwrap();
    assert_eq!(version["server"], "1.10.2");
}

#[tokio::test]
async fn test_logs_and_users() {
    let server = setup_mock_server().await;
    mock_get(&server, "logs", json_response(json!({"files": []}))).await;
    mock_get(&server, "users", json_response(json!({"users": []}))).await;
    mock_get(&server, "users/alice", json_response(json!({"name": "alice"}))).await;

    let client = client_for(&server);
    assert_eq!(client.misc().logs().await.unwrap(), json!({"files": []}));
    assert_eq!(client.misc().users(None).await.unwrap(), json!({"users": []}));
    assert_eq!(
        client.misc().users(Some("alice")).await.unwrap()["name"],
        "alice"
    );
}

#[tokio::test]
async fn test_user_name_is_escaped() {
    let server = setup_mock_server().await;
    mock_get(
        &server,
        "users/jane%20doe%23admin",
        json_response(json!({"name": "jane doe#admin"})),
    )
    .await;

    let client = client_for(&server);
    let user = client.misc().users(Some("jane doe#admin")).await.unwrap();
    assert_eq!(user["name"], "jane doe#admin");
}

#[tokio::test]
async fn test_settings() {
    let server = setup_mock_server().await;
    mock_get(
        &server,
        "settings",
        json_response(json!({"appearance": {"name": "Workshop"}})),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/api/settings"))
        .and(body_json(json!({"appearance": {"name": "Garage"}})))
        .respond_with(json_response(
            json!({"appearance": {"name": "Garage", "color": "default"}}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let settings = client.settings().get().await.unwrap();
    assert_eq!(settings["appearance"]["name"], "Workshop");

    let saved = client
        .settings()
        .update(json!({"appearance": {"name": "Garage"}}))
        .await
        .unwrap();
    assert_eq!(saved["appearance"]["color"], "default");
}

#[tokio::test]
async fn test_settings_update_rejects_non_object() {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .settings()
        .update(json!([{"appearance": {"name": "Garage"}}]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[tokio::test]
async fn test_printer_profiles() {
    let server = setup_mock_server().await;
    mock_get(
        &server,
        "printerprofiles",
        json_response(json!({"profiles": {"_default": {"name": "Default"}}})),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/api/printerprofiles"))
        .and(body_json(json!({"profile": {"id": "mk3", "name": "Prusa MK3"}})))
        .respond_with(json_response(
            json!({"profile": {"id": "mk3", "name": "Prusa MK3", "heatedBed": true}}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let profiles = client.profiles().list().await.unwrap();
    assert_eq!(profiles["profiles"]["_default"]["name"], "Default");

    let added = client
        .profiles()
        .add(json!({"id": "mk3", "name": "Prusa MK3"}))
        .await
        .unwrap();
    assert_eq!(added["profile"]["heatedBed"], true);
}

#[tokio::test]
async fn test_system_commands() {
    let server = setup_mock_server().await;
    mock_get(&server, "system/commands", json_response(json!({"core": [], "custom": []}))).await;
    mock_get(&server, "system/commands/core", json_response(json!([{"action": "restart"}]))).await;
    mock_post(&server, "system/commands/core/restart", json!({}), 204).await;

    let client = client_for(&server);
    let all = client.system().commands(None).await.unwrap();
    assert_eq!(all, json!({"core": [], "custom": []}));

    let core = client
        .system()
        .commands(Some(CommandSource::Core))
        .await
        .unwrap();
    assert_eq!(core[0]["action"], "restart");

    client
        .system()
        .execute(CommandSource::Core, "restart")
        .await
        .unwrap();
}
