//! Wire messages, one submodule per capability domain.
//!
//! Each submodule declares its typed messages and a `BUNDLE` listing every
//! message the domain owns. `connection/listdatabases` is the one message
//! shared by two bundles (connection and metadata).

use serde_json::Value;

use super::{CapabilityBundle, NotificationType, RequestType};
use crate::types::*;

pub mod capabilities {
    use super::*;

    pub const LIST: RequestType<ClientCapabilitiesParams, CapabilitiesDiscoveryResult> =
        RequestType::new("capabilities/list");

    pub const BUNDLE: CapabilityBundle = &[LIST.descriptor()];
}

pub mod connection {
    use super::*;

    pub const CONNECT: RequestType<ConnectParams, bool> = RequestType::new("connection/connect");
    pub const COMPLETE: NotificationType<ConnectionCompleteParams> =
        NotificationType::new("connection/complete");
    pub const CHANGED: NotificationType<ConnectionChangedParams> =
        NotificationType::new("connection/connectionchanged");
    pub const DISCONNECT: RequestType<OwnerUriParams, bool> =
        RequestType::new("connection/disconnect");
    pub const CANCEL_CONNECT: RequestType<OwnerUriParams, bool> =
        RequestType::new("connection/cancelconnect");
    pub const CHANGE_DATABASE: RequestType<ChangeDatabaseParams, bool> =
        RequestType::new("connection/changedatabase");
    pub const LIST_DATABASES: RequestType<OwnerUriParams, ListDatabasesResult> =
        RequestType::new("connection/listdatabases");
    pub const GET_CONNECTION_STRING: RequestType<GetConnectionStringParams, String> =
        RequestType::new("connection/getconnectionstring");
    pub const BUILD_CONNECTION_INFO: RequestType<String, ConnectionInfo> =
        RequestType::new("connection/buildconnectioninfo");
    pub const CHANGE_PASSWORD: RequestType<ChangePasswordParams, PasswordChangeResult> =
        RequestType::new("connection/changepassword");
    pub const LANGUAGE_FLAVOR_CHANGED: NotificationType<LanguageFlavorChangedParams> =
        NotificationType::new("connection/languageflavorchanged");
    pub const REBUILD_INTELLISENSE: NotificationType<RebuildIntelliSenseParams> =
        NotificationType::new("textDocument/rebuildIntelliSense");
    pub const INTELLISENSE_READY: NotificationType<IntelliSenseReadyParams> =
        NotificationType::new("textDocument/intelliSenseReady");

    pub const BUNDLE: CapabilityBundle = &[
        CONNECT.descriptor(),
        COMPLETE.descriptor(),
        CHANGED.descriptor(),
        DISCONNECT.descriptor(),
        CANCEL_CONNECT.descriptor(),
        CHANGE_DATABASE.descriptor(),
        LIST_DATABASES.descriptor(),
        GET_CONNECTION_STRING.descriptor(),
        BUILD_CONNECTION_INFO.descriptor(),
        CHANGE_PASSWORD.descriptor(),
        LANGUAGE_FLAVOR_CHANGED.descriptor(),
        REBUILD_INTELLISENSE.descriptor(),
        INTELLISENSE_READY.descriptor(),
    ];
}

pub mod query {
    use super::*;

    pub const EXECUTE_DOCUMENT_SELECTION: RequestType<QueryExecuteParams, Value> =
        RequestType::new("query/executeDocumentSelection");
    pub const CANCEL: RequestType<OwnerUriParams, QueryCancelResult> =
        RequestType::new("query/cancel");
    pub const EXECUTE_DOCUMENT_STATEMENT: RequestType<QueryExecuteStatementParams, Value> =
        RequestType::new("query/executedocumentstatement");
    pub const EXECUTE_STRING: RequestType<QueryExecuteStringParams, Value> =
        RequestType::new("query/executeString");
    pub const SIMPLE_EXECUTE: RequestType<SimpleExecuteParams, SimpleExecuteResult> =
        RequestType::new("query/simpleexecute");
    pub const SUBSET: RequestType<QueryExecuteSubsetParams, QueryExecuteSubsetResult> =
        RequestType::new("query/subset");
    pub const DISPOSE: RequestType<OwnerUriParams, Value> = RequestType::new("query/dispose");
    pub const SET_EXECUTION_OPTIONS: RequestType<QueryExecutionOptionsParams, Value> =
        RequestType::new("query/setexecutionoptions");
    pub const SYNTAX_PARSE: RequestType<SyntaxParseParams, SyntaxParseResult> =
        RequestType::new("query/syntaxparse");
    pub const COPY_RESULTS: RequestType<CopyResultsRequestParams, Value> =
        RequestType::new("query/copy");

    pub const SAVE_CSV: RequestType<SaveResultsRequestParams, SaveResultRequestResult> =
        RequestType::new("query/saveCsv");
    pub const SAVE_JSON: RequestType<SaveResultsRequestParams, SaveResultRequestResult> =
        RequestType::new("query/saveJson");
    pub const SAVE_MARKDOWN: RequestType<SaveResultsRequestParams, SaveResultRequestResult> =
        RequestType::new("query/saveMarkdown");
    pub const SAVE_EXCEL: RequestType<SaveResultsRequestParams, SaveResultRequestResult> =
        RequestType::new("query/saveExcel");
    pub const SAVE_XML: RequestType<SaveResultsRequestParams, SaveResultRequestResult> =
        RequestType::new("query/saveXml");

    pub const COMPLETE: NotificationType<QueryExecuteCompleteParams> =
        NotificationType::new("query/complete");
    pub const BATCH_START: NotificationType<QueryExecuteBatchParams> =
        NotificationType::new("query/batchStart");
    pub const BATCH_COMPLETE: NotificationType<QueryExecuteBatchParams> =
        NotificationType::new("query/batchComplete");
    pub const RESULT_SET_AVAILABLE: NotificationType<QueryExecuteResultSetParams> =
        NotificationType::new("query/resultSetAvailable");
    pub const RESULT_SET_UPDATED: NotificationType<QueryExecuteResultSetParams> =
        NotificationType::new("query/resultSetUpdated");
    pub const MESSAGE: NotificationType<QueryExecuteMessageParams> =
        NotificationType::new("query/message");

    pub const EDIT_COMMIT: RequestType<OwnerUriParams, Value> = RequestType::new("edit/commit");
    pub const EDIT_CREATE_ROW: RequestType<OwnerUriParams, EditCreateRowResult> =
        RequestType::new("edit/createRow");
    pub const EDIT_DELETE_ROW: RequestType<EditRowParams, Value> =
        RequestType::new("edit/deleteRow");
    pub const EDIT_DISPOSE: RequestType<OwnerUriParams, Value> = RequestType::new("edit/dispose");
    pub const EDIT_INITIALIZE: RequestType<EditInitializeParams, Value> =
        RequestType::new("edit/initialize");
    pub const EDIT_REVERT_CELL: RequestType<EditCellParams, EditCellResult> =
        RequestType::new("edit/revertCell");
    pub const EDIT_REVERT_ROW: RequestType<EditRowParams, Value> =
        RequestType::new("edit/revertRow");
    pub const EDIT_UPDATE_CELL: RequestType<EditUpdateCellParams, EditCellResult> =
        RequestType::new("edit/updateCell");
    pub const EDIT_SUBSET: RequestType<EditSubsetParams, EditSubsetResult> =
        RequestType::new("edit/subset");
    pub const EDIT_SESSION_READY: NotificationType<EditSessionReadyParams> =
        NotificationType::new("edit/sessionReady");

    pub const BUNDLE: CapabilityBundle = &[
        EXECUTE_DOCUMENT_SELECTION.descriptor(),
        CANCEL.descriptor(),
        EXECUTE_DOCUMENT_STATEMENT.descriptor(),
        EXECUTE_STRING.descriptor(),
        SIMPLE_EXECUTE.descriptor(),
        SUBSET.descriptor(),
        DISPOSE.descriptor(),
        COMPLETE.descriptor(),
        BATCH_START.descriptor(),
        BATCH_COMPLETE.descriptor(),
        RESULT_SET_AVAILABLE.descriptor(),
        RESULT_SET_UPDATED.descriptor(),
        MESSAGE.descriptor(),
        SET_EXECUTION_OPTIONS.descriptor(),
        SAVE_CSV.descriptor(),
        SAVE_JSON.descriptor(),
        SAVE_MARKDOWN.descriptor(),
        SAVE_EXCEL.descriptor(),
        SAVE_XML.descriptor(),
        SYNTAX_PARSE.descriptor(),
        COPY_RESULTS.descriptor(),
        EDIT_COMMIT.descriptor(),
        EDIT_CREATE_ROW.descriptor(),
        EDIT_DELETE_ROW.descriptor(),
        EDIT_DISPOSE.descriptor(),
        EDIT_INITIALIZE.descriptor(),
        EDIT_REVERT_CELL.descriptor(),
        EDIT_REVERT_ROW.descriptor(),
        EDIT_UPDATE_CELL.descriptor(),
        EDIT_SUBSET.descriptor(),
        EDIT_SESSION_READY.descriptor(),
    ];
}

pub mod metadata {
    use super::*;

    pub const LIST: RequestType<OwnerUriParams, MetadataQueryResult> =
        RequestType::new("metadata/list");
    pub const TABLE: RequestType<TableMetadataParams, TableMetadataResult> =
        RequestType::new("metadata/table");
    pub const VIEW: RequestType<TableMetadataParams, TableMetadataResult> =
        RequestType::new("metadata/view");
    pub use super::connection::LIST_DATABASES;

    pub const BUNDLE: CapabilityBundle = &[
        LIST.descriptor(),
        LIST_DATABASES.descriptor(),
        TABLE.descriptor(),
        VIEW.descriptor(),
    ];
}

pub mod admin {
    use super::*;

    pub const CREATE_DATABASE: RequestType<CreateDatabaseParams, CreateDatabaseResponse> =
        RequestType::new("admin/createdatabase");
    pub const DEFAULT_DATABASE_INFO: RequestType<OwnerUriParams, DefaultDatabaseInfoResponse> =
        RequestType::new("admin/defaultdatabaseinfo");
    pub const GET_DATABASE_INFO: RequestType<OwnerUriParams, GetDatabaseInfoResponse> =
        RequestType::new("admin/getdatabaseinfo");
    pub const CREATE_LOGIN: RequestType<CreateLoginParams, CreateLoginResponse> =
        RequestType::new("admin/createlogin");

    pub const BUNDLE: CapabilityBundle = &[
        CREATE_DATABASE.descriptor(),
        DEFAULT_DATABASE_INFO.descriptor(),
        GET_DATABASE_INFO.descriptor(),
        CREATE_LOGIN.descriptor(),
    ];
}

pub mod backup {
    use super::*;

    pub const BACKUP: RequestType<BackupParams, BackupResponse> = RequestType::new("backup/backup");
    pub const CONFIG_INFO: RequestType<OwnerUriParams, BackupConfigInfoResponse> =
        RequestType::new("backup/backupconfiginfo");

    pub const BUNDLE: CapabilityBundle = &[BACKUP.descriptor(), CONFIG_INFO.descriptor()];
}

pub mod restore {
    use super::*;

    pub const RESTORE: RequestType<RestoreParams, RestoreResponse> =
        RequestType::new("restore/restore");
    pub const PLAN: RequestType<RestoreParams, RestorePlanResponse> =
        RequestType::new("restore/restoreplan");
    pub const CANCEL_PLAN: RequestType<RestoreParams, bool> =
        RequestType::new("restore/cancelrestoreplan");
    pub const CONFIG_INFO: RequestType<OwnerUriParams, RestoreConfigInfoResponse> =
        RequestType::new("restore/restoreconfiginfo");

    pub const BUNDLE: CapabilityBundle = &[
        PLAN.descriptor(),
        RESTORE.descriptor(),
        CONFIG_INFO.descriptor(),
        CANCEL_PLAN.descriptor(),
    ];
}

pub mod object_explorer {
    use super::*;

    pub const CREATE_SESSION: RequestType<ConnectionInfo, CreateSessionResponse> =
        RequestType::new("objectexplorer/createsession");
    pub const EXPAND: RequestType<ExpandNodeInfo, bool> =
        RequestType::new("objectexplorer/expand");
    pub const REFRESH: RequestType<ExpandNodeInfo, bool> =
        RequestType::new("objectexplorer/refresh");
    pub const CLOSE_SESSION: RequestType<CloseSessionInfo, CloseSessionResponse> =
        RequestType::new("objectexplorer/closesession");
    pub const FIND_NODES: RequestType<FindNodesInfo, FindNodesResponse> =
        RequestType::new("objectexplorer/findnodes");
    pub const SESSION_CREATED: NotificationType<SessionCreatedParams> =
        NotificationType::new("objectexplorer/sessioncreated");
    pub const SESSION_DISCONNECTED: NotificationType<SessionDisconnectedParams> =
        NotificationType::new("objectexplorer/sessiondisconnected");
    pub const EXPAND_COMPLETED: NotificationType<ExpandCompletedParams> =
        NotificationType::new("objectexplorer/expandCompleted");

    pub const BUNDLE: CapabilityBundle = &[
        CREATE_SESSION.descriptor(),
        EXPAND.descriptor(),
        REFRESH.descriptor(),
        CLOSE_SESSION.descriptor(),
        SESSION_CREATED.descriptor(),
        SESSION_DISCONNECTED.descriptor(),
        EXPAND_COMPLETED.descriptor(),
        FIND_NODES.descriptor(),
    ];
}

pub mod scripting {
    use super::*;

    pub const SCRIPT: RequestType<ScriptingParams, ScriptingResult> =
        RequestType::new("scripting/script");
    pub const COMPLETE: NotificationType<ScriptingCompleteParams> =
        NotificationType::new("scripting/scriptComplete");

    pub const BUNDLE: CapabilityBundle = &[SCRIPT.descriptor(), COMPLETE.descriptor()];
}

pub mod tasks {
    use super::*;

    pub const LIST: RequestType<ListTasksParams, ListTasksResponse> =
        RequestType::new("tasks/listtasks");
    pub const CANCEL: RequestType<CancelTaskParams, bool> = RequestType::new("tasks/canceltask");
    pub const CREATED: NotificationType<TaskInfo> = NotificationType::new("tasks/newtaskcreated");
    pub const STATUS_CHANGED: NotificationType<TaskProgressInfo> =
        NotificationType::new("tasks/statuschanged");

    pub const BUNDLE: CapabilityBundle = &[
        LIST.descriptor(),
        CANCEL.descriptor(),
        CREATED.descriptor(),
        STATUS_CHANGED.descriptor(),
    ];
}

pub mod file_browser {
    use super::*;

    pub const OPEN: RequestType<FileBrowserOpenParams, bool> =
        RequestType::new("filebrowser/open");
    pub const OPENED: NotificationType<FileBrowserOpenedParams> =
        NotificationType::new("filebrowser/opencomplete");
    pub const EXPAND: RequestType<FileBrowserExpandParams, bool> =
        RequestType::new("filebrowser/expand");
    pub const EXPANDED: NotificationType<FileBrowserExpandedParams> =
        NotificationType::new("filebrowser/expandcomplete");
    pub const VALIDATE: RequestType<FileBrowserValidateParams, bool> =
        RequestType::new("filebrowser/validate");
    pub const VALIDATED: NotificationType<FileBrowserValidatedParams> =
        NotificationType::new("filebrowser/validatecomplete");
    pub const CLOSE: RequestType<OwnerUriParams, FileBrowserCloseResponse> =
        RequestType::new("filebrowser/close");

    pub const BUNDLE: CapabilityBundle = &[
        OPEN.descriptor(),
        OPENED.descriptor(),
        EXPAND.descriptor(),
        EXPANDED.descriptor(),
        VALIDATE.descriptor(),
        VALIDATED.descriptor(),
        CLOSE.descriptor(),
    ];
}

pub mod profiler {
    use super::*;

    pub const CREATE_SESSION: RequestType<CreateXEventSessionParams, Value> =
        RequestType::new("profiler/createsession");
    pub const START: RequestType<StartProfilingParams, Value> = RequestType::new("profiler/start");
    pub const STOP: RequestType<OwnerUriParams, Value> = RequestType::new("profiler/stop");
    pub const PAUSE: RequestType<OwnerUriParams, Value> = RequestType::new("profiler/pause");
    pub const GET_SESSIONS: RequestType<OwnerUriParams, GetXEventSessionsResponse> =
        RequestType::new("profiler/getsessions");
    pub const DISCONNECT: RequestType<OwnerUriParams, Value> =
        RequestType::new("profiler/disconnect");
    pub const EVENTS_AVAILABLE: NotificationType<ProfilerEventsAvailableParams> =
        NotificationType::new("profiler/eventsavailable");
    pub const SESSION_STOPPED: NotificationType<ProfilerSessionStoppedParams> =
        NotificationType::new("profiler/sessionstopped");
    pub const SESSION_CREATED: NotificationType<ProfilerSessionCreatedParams> =
        NotificationType::new("profiler/sessioncreated");

    pub const BUNDLE: CapabilityBundle = &[
        CREATE_SESSION.descriptor(),
        START.descriptor(),
        STOP.descriptor(),
        PAUSE.descriptor(),
        GET_SESSIONS.descriptor(),
        DISCONNECT.descriptor(),
        EVENTS_AVAILABLE.descriptor(),
        SESSION_STOPPED.descriptor(),
        SESSION_CREATED.descriptor(),
    ];
}

/// Every bundle in the catalog, in default feature order.
pub const ALL_BUNDLES: &[CapabilityBundle] = &[
    connection::BUNDLE,
    capabilities::BUNDLE,
    query::BUNDLE,
    metadata::BUNDLE,
    admin::BUNDLE,
    backup::BUNDLE,
    restore::BUNDLE,
    object_explorer::BUNDLE,
    scripting::BUNDLE,
    tasks::BUNDLE,
    file_browser::BUNDLE,
    profiler::BUNDLE,
];
