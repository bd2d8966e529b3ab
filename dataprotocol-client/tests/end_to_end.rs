mod support;

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use serde_json::json;

use dataprotocol_client::prelude::*;
use dataprotocol_client::types::{ClientCapabilitiesParams, ConnectionInfo, ServiceOptionType};
use support::{Harness, MemoryTransport, RecordingRegistrar};

#[tokio::test]
async fn connect_sends_converted_payload_and_degrades_on_failure() {
    let harness = Harness::new(ClientOptions::new("pg"));

    let mut advertised = ClientCapabilities::new();
    harness.client.fill_client_capabilities(&mut advertised);
    assert!(advertised.dynamic_registration("connection"));

    harness
        .client
        .register_capability(&[Registration::new("backend-connect", "connection/connect")])
        .unwrap();
    assert_eq!(harness.registrar.kinds(), vec![FeatureKind::Connection]);
    let feature = harness.client.feature(FeatureKind::Connection).unwrap();
    assert_eq!(feature.state(), FeatureState::Registered);
    assert_eq!(feature.registration_ids(), vec!["backend-connect"]);

    let connection = harness.registrar.connection();
    assert_eq!(connection.provider_id(), "pg");

    let info = ConnectionInfo::default()
        .with_option("server", "localhost")
        .with_option("database", "postgres")
        .with_option("port", 5432);

    harness.transport.respond("connection/connect", json!(true));
    assert!(connection.connect("file:///q.sql", &info).await.unwrap());

    let sent = harness.transport.last_request("connection/connect").unwrap();
    assert_eq!(sent["ownerUri"], json!("file:///q.sql"));
    assert_eq!(sent["connection"]["options"], serde_json::to_value(&info.options).unwrap());

    harness.transport.fail(
        "connection/connect",
        TransportError::rpc(-32000, "server unreachable"),
    );
    assert!(!connection.connect("file:///q.sql", &info).await.unwrap());
    assert_eq!(harness.diagnostics.methods(), vec!["connection/connect"]);
}

#[tokio::test]
async fn advertisement_covers_every_default_domain() {
    let harness = Harness::new(ClientOptions::new("MSSQL"));
    let document = harness.client.client_capabilities().to_value().unwrap();

    for kind in FeatureKind::DEFAULT {
        assert_eq!(
            document["connection"][kind.namespace()]["dynamicRegistration"],
            json!(true),
            "{kind}"
        );
    }
}

#[test]
fn initialize_registers_one_provider_per_feature() {
    let harness = Harness::initialized("MSSQL");

    assert_eq!(harness.registrar.kinds(), FeatureKind::DEFAULT.to_vec());
    for feature in harness.client.features() {
        assert_eq!(feature.state(), FeatureState::Registered);
        assert_eq!(feature.registration_ids().len(), 1);
    }
}

#[test]
fn missing_provider_id_is_rejected() {
    let err = DataProtocolClient::new(
        ClientOptions::new("  "),
        MemoryTransport::new(),
        RecordingRegistrar::new(),
    )
    .unwrap_err();
    assert!(matches!(err, ClientError::MissingProviderId));
}

#[test]
fn configured_subset_limits_active_features() {
    let options = ClientOptions::from_toml_str(
        r#"
        provider_id = "pg"
        features = ["query", "connection", "query"]
        "#,
    )
    .unwrap();
    let harness = Harness::new(options);

    let kinds: Vec<FeatureKind> = harness.client.features().iter().map(|f| f.kind()).collect();
    assert_eq!(kinds, vec![FeatureKind::Query, FeatureKind::Connection]);
    assert!(harness.client.feature(FeatureKind::Profiler).is_none());
}

#[tokio::test]
async fn server_capabilities_are_converted_for_the_host() {
    let harness = Harness::initialized("MSSQL");
    harness.transport.respond(
        "capabilities/list",
        json!({
            "capabilities": {
                "protocolVersion": "1.0",
                "providerName": "MSSQL",
                "providerDisplayName": "Microsoft SQL Server",
                "connectionProvider": {
                    "options": [
                        { "name": "server", "valueType": "string", "specialValueType": "serverName", "isIdentity": true },
                        { "name": "port", "displayName": "Port", "valueType": "number" }
                    ]
                }
            }
        }),
    );

    let params = ClientCapabilitiesParams {
        host_name: "host".into(),
        host_version: "1.0".into(),
    };
    let capabilities = harness
        .registrar
        .capabilities()
        .get_server_capabilities(params)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(capabilities.provider_name, "MSSQL");
    let options = capabilities.connection_provider.unwrap().options;
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].display_name, "server");
    assert_eq!(options[1].value_type, ServiceOptionType::Number);
    assert!(capabilities.features.is_empty());

    let sent = harness.transport.last_request("capabilities/list").unwrap();
    assert_eq!(sent, json!({ "hostName": "host", "hostVersion": "1.0" }));
}

#[tokio::test]
async fn failed_discovery_resolves_to_none() {
    let harness = Harness::initialized("MSSQL");
    harness
        .transport
        .fail("capabilities/list", TransportError::Closed);

    let params = ClientCapabilitiesParams {
        host_name: "host".into(),
        host_version: "1.0".into(),
    };
    let result = harness
        .registrar
        .capabilities()
        .get_server_capabilities(params)
        .await
        .unwrap();

    assert_eq!(result, None);
    assert_eq!(harness.diagnostics.methods(), vec!["capabilities/list"]);
}

#[tokio::test]
async fn intellisense_ready_delivers_owner_uri() {
    let harness = Harness::initialized("MSSQL");
    let connection = harness.registrar.connection();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _handle = connection.register_on_intellisense_cache_complete(move |uri| {
        sink.lock().unwrap().push(uri.to_string());
    });

    connection.rebuild_intellisense_cache("file:///a.sql");
    harness.transport.emit(
        "textDocument/intelliSenseReady",
        json!({ "ownerUri": "file:///a.sql" }),
    );

    assert_eq!(*seen.lock().unwrap(), vec!["file:///a.sql".to_string()]);
    assert_eq!(
        harness.transport.notifications(),
        vec![(
            "textDocument/rebuildIntelliSense".to_string(),
            json!({ "ownerUri": "file:///a.sql" })
        )]
    );
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let harness = Harness::initialized("MSSQL");
    let connection = harness.registrar.connection();
    harness.transport.respond("connection/disconnect", json!(true));
    harness
        .transport
        .fail("connection/cancelconnect", TransportError::Closed);

    let (disconnected, cancelled) = futures::join!(
        connection.disconnect("file:///a.sql"),
        connection.cancel_connect("file:///b.sql")
    );

    assert!(disconnected.unwrap());
    assert!(!cancelled.unwrap());
    assert_eq!(harness.diagnostics.methods(), vec!["connection/cancelconnect"]);
}
