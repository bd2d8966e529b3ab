//! Wire to host.

use crate::types::{
    AdminServicesOptions, CapabilitiesDiscoveryResult, ConnectionOption,
    ConnectionOptionSpecialType, ConnectionProviderOptions, FeatureMetadataProvider,
    MetadataQueryResult, MetadataType, ObjectMetadata, ProviderMetadata, ServerCapabilities,
    ServiceOption, ServiceOptionType, WireObjectMetadata, WireServiceOption,
};

/// Type name for an object the backend did not name explicitly.
pub fn metadata_type_name(explicit: Option<&str>, kind: MetadataType) -> String {
    if let Some(name) = explicit.filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    match kind {
        MetadataType::View => "View",
        MetadataType::SProc => "StoredProcedure",
        MetadataType::Function => "Function",
        _ => "Table",
    }
    .to_string()
}

fn as_object_metadata(wire: WireObjectMetadata) -> ObjectMetadata {
    ObjectMetadata {
        metadata_type_name: metadata_type_name(wire.metadata_type_name.as_deref(), wire.metadata_type),
        metadata_type: wire.metadata_type,
        urn: wire.urn,
        name: wire.name,
        schema: wire.schema,
        parent_name: wire.parent_name,
        parent_type_name: wire.parent_type_name,
    }
}

pub fn as_provider_metadata(result: MetadataQueryResult) -> ProviderMetadata {
    ProviderMetadata {
        object_metadata: result
            .metadata
            .unwrap_or_default()
            .into_iter()
            .map(as_object_metadata)
            .collect(),
    }
}

fn display_name(wire: &WireServiceOption) -> String {
    match wire.display_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => wire.name.clone(),
    }
}

pub fn as_service_option(wire: WireServiceOption) -> ServiceOption {
    ServiceOption {
        display_name: display_name(&wire),
        value_type: ServiceOptionType::parse(wire.value_type.as_deref()),
        name: wire.name,
        description: wire.description,
        group_name: wire.group_name,
        default_value: wire.default_value,
        category_values: wire.category_values,
        is_required: wire.is_required,
        is_array: wire.is_array,
        object_type: wire.object_type,
    }
}

pub fn as_connection_option(wire: WireServiceOption) -> ConnectionOption {
    ConnectionOption {
        display_name: display_name(&wire),
        value_type: ServiceOptionType::parse(wire.value_type.as_deref()),
        special_value_type: ConnectionOptionSpecialType::parse(wire.special_value_type.as_deref()),
        name: wire.name,
        description: wire.description,
        group_name: wire.group_name,
        default_value: wire.default_value,
        category_values: wire.category_values,
        is_identity: wire.is_identity,
        is_required: wire.is_required,
    }
}

fn service_options(options: Option<Vec<WireServiceOption>>) -> Vec<ServiceOption> {
    options
        .unwrap_or_default()
        .into_iter()
        .map(as_service_option)
        .collect()
}

pub fn as_server_capabilities(result: CapabilitiesDiscoveryResult) -> ServerCapabilities {
    let wire = result.capabilities;

    let admin_services_provider = wire.admin_services_provider.map(|admin| AdminServicesOptions {
        database_info_options: service_options(admin.database_info_options),
        database_file_info_options: service_options(admin.database_file_info_options),
        file_group_info_options: service_options(admin.file_group_info_options),
    });

    // An empty option list means no connection provider at all.
    let connection_provider = wire
        .connection_provider
        .and_then(|provider| provider.options)
        .filter(|options| !options.is_empty())
        .map(|options| ConnectionProviderOptions {
            options: options.into_iter().map(as_connection_option).collect(),
        });

    let features = wire
        .features
        .unwrap_or_default()
        .into_iter()
        .map(|feature| FeatureMetadataProvider {
            enabled: feature.enabled,
            feature_name: feature.feature_name,
            options_metadata: service_options(feature.options_metadata),
        })
        .collect();

    ServerCapabilities {
        protocol_version: wire.protocol_version,
        provider_name: wire.provider_name,
        provider_display_name: wire.provider_display_name,
        connection_provider,
        admin_services_provider,
        features,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn explicit_type_name_wins() {
        assert_eq!(metadata_type_name(Some("Synonym"), MetadataType::View), "Synonym");
    }

    #[test]
    fn type_name_inferred_from_kind() {
        assert_eq!(metadata_type_name(None, MetadataType::View), "View");
        assert_eq!(metadata_type_name(None, MetadataType::SProc), "StoredProcedure");
        assert_eq!(metadata_type_name(Some(""), MetadataType::Function), "Function");
        assert_eq!(metadata_type_name(None, MetadataType::Table), "Table");
        assert_eq!(metadata_type_name(None, MetadataType::Other(42)), "Table");
    }

    #[test]
    fn provider_metadata_from_wire() {
        let result: MetadataQueryResult = serde_json::from_value(json!({
            "metadata": [
                { "metadataType": 1, "name": "v_orders", "schema": "sales" },
                { "metadataType": 0, "metadataTypeName": "Table", "name": "orders", "schema": "sales" },
                { "metadataType": 9, "name": "mystery" }
            ]
        }))
        .unwrap();

        let names: Vec<String> = as_provider_metadata(result)
            .object_metadata
            .into_iter()
            .map(|o| o.metadata_type_name)
            .collect();
        assert_eq!(names, vec!["View", "Table", "Table"]);
    }

    #[test]
    fn missing_metadata_list_is_empty() {
        let metadata = as_provider_metadata(MetadataQueryResult { metadata: None });
        assert!(metadata.object_metadata.is_empty());
    }

    #[test]
    fn server_capabilities_reshaped() {
        let result: CapabilitiesDiscoveryResult = serde_json::from_value(json!({
            "capabilities": {
                "protocolVersion": "1.0",
                "providerName": "PGSQL",
                "providerDisplayName": "PostgreSQL",
                "connectionProvider": {
                    "options": [
                        { "name": "host", "valueType": "string", "specialValueType": "serverName", "isIdentity": true },
                        { "name": "password", "displayName": "Password", "valueType": "password", "specialValueType": "password" },
                        { "name": "sslmode", "valueType": "enum-ish", "specialValueType": "tls" }
                    ]
                },
                "adminServicesProvider": {
                    "databaseInfoOptions": [ { "name": "owner", "valueType": "category" } ]
                },
                "features": [
                    { "enabled": true, "featureName": "serializationService",
                      "optionsMetadata": [ { "name": "batchSize", "valueType": "number" } ] }
                ]
            }
        }))
        .unwrap();

        let caps = as_server_capabilities(result);
        assert_eq!(caps.provider_name, "PGSQL");

        let options = caps.connection_provider.unwrap().options;
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].display_name, "host");
        assert_eq!(
            options[0].special_value_type,
            Some(ConnectionOptionSpecialType::ServerName)
        );
        assert_eq!(options[0].is_identity, Some(true));
        assert_eq!(options[1].display_name, "Password");
        assert_eq!(options[1].value_type, ServiceOptionType::Password);
        assert_eq!(options[2].value_type, ServiceOptionType::String);
        assert_eq!(options[2].special_value_type, None);

        let admin = caps.admin_services_provider.unwrap();
        assert_eq!(admin.database_info_options[0].value_type, ServiceOptionType::Category);
        assert!(admin.database_file_info_options.is_empty());
        assert!(admin.file_group_info_options.is_empty());

        assert_eq!(caps.features.len(), 1);
        assert_eq!(caps.features[0].options_metadata[0].value_type, ServiceOptionType::Number);
    }

    #[test]
    fn absent_sections_stay_absent() {
        let result: CapabilitiesDiscoveryResult = serde_json::from_value(json!({
            "capabilities": {
                "protocolVersion": "1.0",
                "providerName": "X",
                "providerDisplayName": "X",
                "connectionProvider": { "options": [] }
            }
        }))
        .unwrap();

        let caps = as_server_capabilities(result);
        assert!(caps.connection_provider.is_none());
        assert!(caps.admin_services_provider.is_none());
        assert!(caps.features.is_empty());
    }
}
