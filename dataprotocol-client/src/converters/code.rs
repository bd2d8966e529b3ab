//! Host to wire.

use crate::types::{
    ConnectParams, ConnectionInfo, ExecutionPlanFlags, ExecutionPlanOptions, ObjectMetadata,
    ScriptOperation, ScriptOptions, ScriptingObject, ScriptingParamDetails, ScriptingParams,
};

pub const DEFAULT_ENGINE_EDITION: &str = "SqlServerEnterpriseEdition";
pub const DEFAULT_ENGINE_TYPE: &str = "SingleInstance";
pub const DEFAULT_COMPATIBILITY: &str = "Script140Compat";

pub fn as_connection_params(owner_uri: &str, info: &ConnectionInfo) -> ConnectParams {
    ConnectParams {
        owner_uri: owner_uri.to_string(),
        connection: ConnectionInfo {
            options: info.options.clone(),
        },
    }
}

/// Absent options leave both flags unset rather than `false`.
pub fn as_execution_plan_options(options: Option<&ExecutionPlanOptions>) -> ExecutionPlanFlags {
    ExecutionPlanFlags {
        include_estimated_execution_plan_xml: options
            .and_then(|o| o.display_estimated_query_plan),
        include_actual_execution_plan_xml: options.and_then(|o| o.display_actual_query_plan),
    }
}

pub fn script_create_drop(operation: ScriptOperation) -> &'static str {
    match operation {
        ScriptOperation::Delete => "ScriptDrop",
        ScriptOperation::Select => "ScriptSelect",
        _ => "ScriptCreate",
    }
}

fn or_default(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

pub fn as_scripting_params(
    owner_uri: &str,
    operation: ScriptOperation,
    metadata: &ObjectMetadata,
    details: &ScriptingParamDetails,
) -> ScriptingParams {
    let scripting_object = ScriptingObject {
        object_type: metadata.metadata_type_name.clone(),
        schema: metadata.schema.clone(),
        name: metadata.name.clone(),
        parent_name: None,
        parent_type_name: None,
    };

    let script_options = ScriptOptions {
        script_create_drop: script_create_drop(operation).to_string(),
        type_of_data_to_script: "SchemaOnly".to_string(),
        script_statistics: "ScriptStatsNone".to_string(),
        target_database_engine_edition: or_default(
            &details.target_database_engine_edition,
            DEFAULT_ENGINE_EDITION,
        ),
        target_database_engine_type: or_default(
            &details.target_database_engine_type,
            DEFAULT_ENGINE_TYPE,
        ),
        script_compatibility_option: or_default(
            &details.script_compatibility_option,
            DEFAULT_COMPATIBILITY,
        ),
    };

    ScriptingParams {
        file_path: details.file_path.clone(),
        script_destination: "ToEditor".to_string(),
        connection_string: None,
        scripting_objects: vec![scripting_object],
        include_object_criteria: None,
        exclude_object_criteria: None,
        include_schemas: None,
        exclude_schemas: None,
        include_types: None,
        exclude_types: None,
        script_options,
        connection_details: None,
        owner_uri: owner_uri.to_string(),
        select_script: None,
        operation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MetadataType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn table(name: &str) -> ObjectMetadata {
        ObjectMetadata {
            metadata_type: MetadataType::Table,
            metadata_type_name: "Table".to_string(),
            urn: None,
            name: name.to_string(),
            schema: Some("dbo".to_string()),
            parent_name: None,
            parent_type_name: None,
        }
    }

    fn details() -> ScriptingParamDetails {
        ScriptingParamDetails {
            file_path: "/tmp/out.sql".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn script_action_follows_operation() {
        let cases = [
            (ScriptOperation::Delete, "ScriptDrop"),
            (ScriptOperation::Select, "ScriptSelect"),
            (ScriptOperation::Create, "ScriptCreate"),
            (ScriptOperation::Insert, "ScriptCreate"),
            (ScriptOperation::Update, "ScriptCreate"),
            (ScriptOperation::Execute, "ScriptCreate"),
            (ScriptOperation::Alter, "ScriptCreate"),
        ];
        for (operation, expected) in cases {
            let params = as_scripting_params("uri", operation, &table("t"), &details());
            assert_eq!(params.script_options.script_create_drop, expected);
        }
    }

    #[test]
    fn engine_fields_fall_back_to_defaults() {
        let params =
            as_scripting_params("uri", ScriptOperation::Create, &table("t"), &details());
        assert_eq!(
            params.script_options.target_database_engine_edition,
            "SqlServerEnterpriseEdition"
        );
        assert_eq!(params.script_options.target_database_engine_type, "SingleInstance");
        assert_eq!(params.script_options.script_compatibility_option, "Script140Compat");
    }

    #[test]
    fn engine_overrides_are_kept() {
        let details = ScriptingParamDetails {
            file_path: "f".to_string(),
            script_compatibility_option: Some("Script150Compat".to_string()),
            target_database_engine_edition: Some("SqlAzureDatabaseEdition".to_string()),
            target_database_engine_type: Some(String::new()),
        };
        let params = as_scripting_params("uri", ScriptOperation::Create, &table("t"), &details);
        assert_eq!(params.script_options.script_compatibility_option, "Script150Compat");
        assert_eq!(
            params.script_options.target_database_engine_edition,
            "SqlAzureDatabaseEdition"
        );
        // an empty override counts as absent
        assert_eq!(params.script_options.target_database_engine_type, "SingleInstance");
    }

    #[test]
    fn scripting_params_keep_null_fields() {
        let params =
            as_scripting_params("conn://1", ScriptOperation::Select, &table("users"), &details());
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(value["connectionString"], json!(null));
        assert_eq!(value["includeObjectCriteria"], json!(null));
        assert_eq!(value["connectionDetails"], json!(null));
        assert_eq!(value["selectScript"], json!(null));
        assert_eq!(value["ownerURI"], json!("conn://1"));
        assert_eq!(value["operation"], json!(0));
        assert_eq!(value["scriptDestination"], json!("ToEditor"));
        assert_eq!(
            value["scriptingObjects"],
            json!([{ "type": "Table", "schema": "dbo", "name": "users" }])
        );
    }

    #[test]
    fn execution_plan_flags_stay_unset_without_options() {
        let flags = as_execution_plan_options(None);
        assert_eq!(serde_json::to_value(flags).unwrap(), json!({}));

        let flags = as_execution_plan_options(Some(&ExecutionPlanOptions {
            display_estimated_query_plan: Some(true),
            display_actual_query_plan: None,
        }));
        assert_eq!(
            serde_json::to_value(flags).unwrap(),
            json!({ "includeEstimatedExecutionPlanXml": true })
        );
    }

    #[test]
    fn connection_params_copy_options() {
        let info = ConnectionInfo::default()
            .with_option("server", "localhost")
            .with_option("port", 5432);
        let params = as_connection_params("uri://a", &info);
        assert_eq!(params.owner_uri, "uri://a");
        assert_eq!(params.connection.options, info.options);
    }
}
