use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-domain entry of the advertisement document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainClientCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_registration: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The outbound capability-advertisement document.
///
/// Every domain lives under the `connection` root. Features merge into it
/// additively during the handshake; keys owned by other layers are kept in
/// `other` and serialized back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientCapabilities {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub connection: BTreeMap<String, DomainClientCapabilities>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl ClientCapabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for `namespace`, created empty if absent.
    pub fn ensure_domain(&mut self, namespace: &str) -> &mut DomainClientCapabilities {
        self.connection.entry(namespace.to_string()).or_default()
    }

    /// Set `connection.<namespace>.dynamicRegistration = true`.
    pub fn enable_dynamic_registration(&mut self, namespace: &str) {
        self.ensure_domain(namespace).dynamic_registration = Some(true);
    }

    pub fn dynamic_registration(&self, namespace: &str) -> bool {
        self.connection
            .get(namespace)
            .and_then(|domain| domain.dynamic_registration)
            .unwrap_or(false)
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn enable_creates_intermediate_objects() {
        let mut caps = ClientCapabilities::new();
        caps.enable_dynamic_registration("query");

        assert_eq!(
            caps.to_value().unwrap(),
            json!({ "connection": { "query": { "dynamicRegistration": true } } })
        );
        assert!(caps.dynamic_registration("query"));
        assert!(!caps.dynamic_registration("backup"));
    }

    #[test]
    fn enable_is_idempotent_and_additive() {
        let mut caps: ClientCapabilities = serde_json::from_value(json!({
            "textDocument": { "synchronization": {} },
            "connection": { "backup": { "dynamicRegistration": true, "extra": 1 } }
        }))
        .unwrap();

        caps.enable_dynamic_registration("backup");
        caps.enable_dynamic_registration("backup");
        caps.enable_dynamic_registration("restore");

        assert_eq!(
            caps.to_value().unwrap(),
            json!({
                "textDocument": { "synchronization": {} },
                "connection": {
                    "backup": { "dynamicRegistration": true, "extra": 1 },
                    "restore": { "dynamicRegistration": true }
                }
            })
        );
    }
}
