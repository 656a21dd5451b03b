//! Login flow end to end
//!
//! Through the mock responder's credential table and against a wiremock
//! server standing in for the live API.

use std::sync::Arc;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use benevits::egui_app::security::RsaEncryption;
use benevits::egui_app::{
    Config, Endpoint, FileSessionStore, LoginViewModel, MemorySessionStore, NetworkClient, SessionStore,
};
use benevits::shared::config::AppConfig;
use benevits::shared::strings::login;
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{server_config, MockNetworkService};

fn mock_login(session: Arc<dyn SessionStore>) -> LoginViewModel<NetworkClient> {
    let config = Config::with_builder(
        AppConfig::builder()
            .use_mock_data(true)
            .mock_delay(Duration::ZERO)
            .mock_timeout_delay(Duration::from_millis(20)),
    )
    .unwrap();
    let network = Arc::new(NetworkClient::new(config, Arc::clone(&session)).unwrap());
    LoginViewModel::new(network, session)
}

async fn attempt(vm: &LoginViewModel<NetworkClient>, username: &str, password: &str) {
    vm.set_username(username);
    vm.set_password(password);
    vm.login().await;
}

#[tokio::test]
async fn test_known_credentials_authenticate_and_persist() {
    let dir = tempfile::tempdir().unwrap();
    let session: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(dir.path().join("session.json")));
    let vm = mock_login(Arc::clone(&session));

    attempt(&vm, "61917612998", "Contrasena01").await;

    assert!(vm.is_authenticated());
    assert_eq!(vm.error_message(), None);
    assert_eq!(session.get_token().as_deref(), Some("mock-jwt-token-12345"));

    // A fresh view-model over the same store starts logged in
    let reopened = mock_login(Arc::new(FileSessionStore::new(dir.path().join("session.json"))));
    assert!(reopened.is_authenticated());
}

#[tokio::test]
async fn test_second_account_authenticates() {
    let vm = mock_login(Arc::new(MemorySessionStore::new()));
    attempt(&vm, "61998018420", "Contrasena02").await;
    assert!(vm.is_authenticated());
}

#[tokio::test]
async fn test_rejected_combinations() {
    let cases = [
        ("61917612998", "Contrasena02", login::LOGIN_FAILED.to_string()),
        ("12345678901", "whatever12", login::LOGIN_FAILED.to_string()),
        ("61900000000", "ServerError", "Error del servidor (código: 500)".to_string()),
        ("61922222222", "Timeout0000", login::TIMEOUT.to_string()),
        ("6191761299", "Contrasena01", login::USERNAME_ERROR.to_string()),
        ("61917612998", "Contra", login::PASSWORD_ERROR.to_string()),
    ];

    for (username, password, expected) in cases {
        let session = Arc::new(MemorySessionStore::new());
        let vm = mock_login(session.clone());
        attempt(&vm, username, password).await;

        assert!(!vm.is_authenticated(), "{} / {}", username, password);
        assert_eq!(vm.error_message(), Some(expected));
        assert!(session.get_token().is_none());
        assert!(!vm.is_loading());
    }
}

#[tokio::test]
async fn test_offline_login() {
    let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let config = Config::with_builder(
        AppConfig::builder()
            .use_mock_data(true)
            .mock_delay(Duration::ZERO),
    )
    .unwrap();
    let client = NetworkClient::new(config, Arc::clone(&session)).unwrap();
    client.reachability().set_connected(false);
    let vm = LoginViewModel::new(Arc::new(client), session);

    attempt(&vm, "61917612998", "Contrasena01").await;
    assert_eq!(vm.error_message().as_deref(), Some(login::NO_INTERNET));
}

#[tokio::test]
async fn test_disabled_button_makes_no_call() {
    let network = Arc::new(MockNetworkService::new());
    let vm = LoginViewModel::with_encryption(Arc::clone(&network), Arc::new(MemorySessionStore::new()), None);

    vm.set_username("61917612998");
    vm.login().await;

    assert_eq!(network.call_count(), 0);
    assert!(!vm.is_authenticated());
}

#[tokio::test]
async fn test_mock_network_token_is_stored() {
    let network = Arc::new(MockNetworkService::new().with_response(
        &Endpoint::login("", "", ""),
        serde_json::json!({ "success": true, "message": "ok" }),
    ));
    let session = Arc::new(MemorySessionStore::new());
    let vm = LoginViewModel::with_encryption(Arc::clone(&network), session.clone(), None);

    vm.set_username("61917612998");
    vm.set_password("Contrasena01");
    vm.login().await;

    assert!(vm.is_authenticated());
    assert_eq!(session.get_token().as_deref(), Some("test-token-12345"));
    match network.last_endpoint() {
        Some(Endpoint::Login { credentials, username, .. }) => {
            assert_eq!(username, "61917612998");
            let decoded = STANDARD.decode(credentials).unwrap();
            assert_eq!(String::from_utf8(decoded).unwrap(), "61917612998:Contrasena01");
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_live_login_with_encrypted_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/member/authentication"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("token", "live-jwt")
                .set_body_json(serde_json::json!({})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let network = Arc::new(
        NetworkClient::new(server_config(&server.uri(), Duration::from_secs(5)), Arc::clone(&session)).unwrap(),
    );
    let vm = LoginViewModel::with_encryption(network, Arc::clone(&session), RsaEncryption::service_key().ok());

    vm.set_username("61917612998");
    vm.set_password("Contrasena01");
    vm.login().await;

    assert!(vm.is_authenticated());
    assert_eq!(session.get_token().as_deref(), Some("live-jwt"));

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let blob = body["credentials"].as_str().unwrap();
    // 2048 bit key: 256 bytes of ciphertext, never the plain pair
    assert_eq!(blob.len(), 344);
    assert!(!blob.contains("Contrasena01"));
}

#[tokio::test]
async fn test_live_login_rejected() {
    let server = MockServer::start().await;
    Mock::given(path("/api/v2/member/authentication"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let network = Arc::new(
        NetworkClient::new(server_config(&server.uri(), Duration::from_secs(5)), Arc::clone(&session)).unwrap(),
    );
    let vm = LoginViewModel::new(network, session);

    vm.set_username("61917612998");
    vm.set_password("Contrasena01");
    vm.login().await;

    assert!(!vm.is_authenticated());
    assert_eq!(vm.error_message().as_deref(), Some(login::LOGIN_FAILED));
}
