mod support;

use pretty_assertions::assert_eq;

use dataprotocol_client::prelude::*;
use dataprotocol_client::protocol::messages;
use support::Harness;

#[test]
fn every_bundle_message_registers_on_its_feature() {
    let harness = Harness::new(ClientOptions::new("MSSQL"));

    for feature in harness.client.features() {
        for (i, descriptor) in feature.messages().iter().enumerate() {
            let id = format!("{}-{i}", feature.namespace());
            feature.register_message(*descriptor, &id).unwrap();
        }
        assert_eq!(feature.registration_ids().len(), feature.messages().len());
        feature.register(feature.messages(), "whole-bundle").unwrap();
    }
}

#[test]
fn foreign_message_is_a_wiring_error() {
    let harness = Harness::new(ClientOptions::new("MSSQL"));
    let query = harness.client.feature(FeatureKind::Query).unwrap();

    let err = query
        .register_message(messages::backup::BACKUP.descriptor(), "bad")
        .unwrap_err();

    match err {
        ClientError::WrongFeature { requested, feature } => {
            assert_eq!(requested, "backup/backup");
            assert_eq!(feature, "query");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(query.registration_ids().is_empty());
    assert_eq!(harness.registrar.live_count(), 0);
}

#[test]
fn mixed_message_set_is_rejected_whole() {
    let harness = Harness::new(ClientOptions::new("MSSQL"));
    let connection = harness.client.feature(FeatureKind::Connection).unwrap();
    let mixed = [
        messages::connection::CONNECT.descriptor(),
        messages::query::CANCEL.descriptor(),
    ];

    assert!(matches!(
        connection.register(&mixed, "mixed"),
        Err(ClientError::WrongFeature { .. })
    ));
    assert_eq!(connection.state(), FeatureState::Constructed);
}

#[test]
fn unregister_unknown_or_twice_is_a_noop() {
    let harness = Harness::initialized("MSSQL");
    let before = harness.registrar.live_count();

    harness.client.unregister_capability(["never-registered"]);
    assert_eq!(harness.registrar.live_count(), before);

    let backup = harness.client.feature(FeatureKind::Backup).unwrap();
    let id = backup.registration_ids().remove(0);
    backup.unregister(&id);
    backup.unregister(&id);

    assert_eq!(harness.registrar.live_count(), before - 1);
    assert!(backup.registration_ids().is_empty());
    assert_eq!(backup.state(), FeatureState::Registered);
}

#[test]
fn backend_registrations_route_by_method() {
    let harness = Harness::new(ClientOptions::new("MSSQL"));

    harness
        .client
        .register_capability(&[
            Registration::new("r1", "query/saveCsv"),
            Registration::new("r2", "profiler/eventsavailable"),
            Registration::new("r3", "connection/listdatabases"),
        ])
        .unwrap();

    let ids = |kind| harness.client.feature(kind).unwrap().registration_ids();
    assert_eq!(ids(FeatureKind::Query), vec!["r1"]);
    assert_eq!(ids(FeatureKind::Profiler), vec!["r2"]);
    assert_eq!(ids(FeatureKind::Connection), vec!["r3"]);
    assert!(ids(FeatureKind::Metadata).is_empty());

    harness.client.unregister_capability(vec!["r1".to_string(), "r2".to_string()]);
    assert!(ids(FeatureKind::Query).is_empty());
    assert!(ids(FeatureKind::Profiler).is_empty());
    assert_eq!(harness.registrar.kinds(), vec![FeatureKind::Connection]);
}

#[test]
fn unknown_backend_method_is_rejected() {
    let harness = Harness::new(ClientOptions::new("MSSQL"));
    let err = harness
        .client
        .register_capability(&[Registration::new("r1", "telemetry/event")])
        .unwrap_err();
    assert!(matches!(err, ClientError::WrongFeature { requested, .. } if requested == "telemetry/event"));
}

#[test]
fn batch_with_unknown_method_registers_nothing() {
    let harness = Harness::new(ClientOptions::new("MSSQL"));

    let err = harness
        .client
        .register_capability(&[
            Registration::new("r1", "query/saveCsv"),
            Registration::new("r2", "connection/connect"),
            Registration::new("r3", "telemetry/event"),
        ])
        .unwrap_err();

    assert!(matches!(err, ClientError::WrongFeature { requested, .. } if requested == "telemetry/event"));
    assert_eq!(harness.registrar.live_count(), 0);
    for feature in harness.client.features() {
        assert!(feature.registration_ids().is_empty(), "{}", feature.namespace());
        assert_eq!(feature.channel_count(), 0);
    }
}

#[test]
fn batch_touching_a_disposed_feature_registers_nothing() {
    let harness = Harness::new(ClientOptions::new("MSSQL"));
    harness.client.feature(FeatureKind::Profiler).unwrap().dispose();

    let err = harness
        .client
        .register_capability(&[
            Registration::new("r1", "metadata/list"),
            Registration::new("r2", "profiler/start"),
        ])
        .unwrap_err();

    assert!(matches!(err, ClientError::FeatureDisposed(domain) if domain == "profiler"));
    assert!(harness
        .client
        .feature(FeatureKind::Metadata)
        .unwrap()
        .registration_ids()
        .is_empty());
    assert_eq!(harness.registrar.live_count(), 0);
}

#[test]
fn reregistering_an_id_replaces_the_provider() {
    let harness = Harness::new(ClientOptions::new("MSSQL"));
    let metadata = harness.client.feature(FeatureKind::Metadata).unwrap();

    metadata.register(metadata.messages(), "same").unwrap();
    metadata.register(metadata.messages(), "same").unwrap();

    assert_eq!(metadata.registration_ids(), vec!["same"]);
    assert_eq!(harness.registrar.live_count(), 1);
}

#[test]
fn repeated_registration_reuses_notification_channels() {
    let harness = Harness::new(ClientOptions::new("MSSQL"));
    let query = harness.client.feature(FeatureKind::Query).unwrap();

    query.register(query.messages(), "a").unwrap();
    query.register(query.messages(), "b").unwrap();

    assert_eq!(query.channel_count(), 7);
    assert_eq!(harness.transport.handler_count("query/complete"), 1);
    assert_eq!(harness.transport.handler_count("edit/sessionReady"), 1);
}

#[test]
fn dispose_twice_leaves_the_same_empty_state() {
    let harness = Harness::initialized("MSSQL");
    let object_explorer = harness.client.feature(FeatureKind::ObjectExplorer).unwrap();
    assert_eq!(object_explorer.channel_count(), 3);

    harness.client.dispose();
    let snapshot = (
        object_explorer.state(),
        object_explorer.registration_ids(),
        object_explorer.channel_count(),
    );
    harness.client.dispose();

    assert_eq!(snapshot, (FeatureState::Disposed, Vec::<String>::new(), 0));
    assert_eq!(
        (
            object_explorer.state(),
            object_explorer.registration_ids(),
            object_explorer.channel_count()
        ),
        snapshot
    );
    assert_eq!(harness.registrar.live_count(), 0);
    assert_eq!(
        harness
            .transport
            .handler_count("objectexplorer/sessioncreated"),
        0
    );
}

#[test]
fn disposed_feature_refuses_registration() {
    let harness = Harness::new(ClientOptions::new("MSSQL"));
    let tasks = harness.client.feature(FeatureKind::TaskServices).unwrap();
    tasks.dispose();

    assert!(matches!(
        tasks.initialize(),
        Err(ClientError::FeatureDisposed(domain)) if domain == "taskServices"
    ));
    assert_eq!(harness.registrar.live_count(), 0);
}

#[test]
fn capability_declaration_is_idempotent() {
    let harness = Harness::new(ClientOptions::new("MSSQL"));
    let mut first = ClientCapabilities::new();
    harness.client.fill_client_capabilities(&mut first);
    let mut second = first.clone();
    harness.client.fill_client_capabilities(&mut second);

    assert_eq!(first, second);
    for feature in harness.client.features() {
        assert_eq!(feature.state(), FeatureState::CapabilitiesDeclared);
    }
}
