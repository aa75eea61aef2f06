// Rust structs mirroring the panel's resource-provisioning types
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every resource kind the panel can create. The set is fixed at build
/// time; storage keys and API paths use the kebab-case identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Pod,
    Deployment,
    StatefulSet,
    Ingress,
    ConfigMap,
    Secret,
    PersistentVolumeClaim,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Pod,
        ResourceKind::Deployment,
        ResourceKind::StatefulSet,
        ResourceKind::Ingress,
        ResourceKind::ConfigMap,
        ResourceKind::Secret,
        ResourceKind::PersistentVolumeClaim,
    ];

    /// Stable identifier used in cache keys and API paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Pod => "pod",
            ResourceKind::Deployment => "deployment",
            ResourceKind::StatefulSet => "stateful-set",
            ResourceKind::Ingress => "ingress",
            ResourceKind::ConfigMap => "config-map",
            ResourceKind::Secret => "secret",
            ResourceKind::PersistentVolumeClaim => "persistent-volume-claim",
        }
    }

    /// Reverse of [`as_str`](Self::as_str). Returns `None` for anything
    /// that is not a concrete kind (category values included).
    pub fn from_value(value: &str) -> Option<ResourceKind> {
        Self::ALL.iter().copied().find(|k| k.as_str() == value)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the cascading kind selector.
///
/// Only leaf nodes carry a valid [`ResourceKind`] in `value`; category
/// nodes are labels only and are never submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogNode {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CatalogNode>>,
}

impl CatalogNode {
    /// The concrete kind this node selects, or `None` for category nodes.
    pub fn kind(&self) -> Option<ResourceKind> {
        if self.children.is_some() {
            return None;
        }
        ResourceKind::from_value(&self.value)
    }
}

/// Wire shape returned by the resource-creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreationResponse {
    pub code: u16,
    #[serde(default)]
    pub data: CreationData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreationData {
    #[serde(default)]
    pub message: String,
}

/// Outcome of one creation attempt as surfaced to the caller.
///
/// A transport failure is folded in with `status_code = 0` and the
/// transport error text as the message, so both rejection paths produce
/// the same user notice.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationResult {
    pub status_code: u16,
    pub message: Option<String>,
}

impl CreationResult {
    /// 201 Created is the sole success marker.
    pub fn is_success(&self) -> bool {
        self.status_code == http::StatusCode::CREATED.as_u16()
    }

    /// User-visible notice text for this outcome.
    pub fn notice(&self) -> String {
        if self.is_success() {
            "Successfully created resource".to_string()
        } else {
            format!(
                "Failed to create resource: {}",
                self.message.as_deref().unwrap_or("unknown error")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_identifiers_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_value(kind.as_str()), Some(kind));
        }
        assert_eq!(ResourceKind::from_value("workload"), None);
    }

    #[test]
    fn only_201_is_success() {
        let created = CreationResult {
            status_code: 201,
            message: None,
        };
        assert!(created.is_success());
        assert_eq!(created.notice(), "Successfully created resource");

        let rejected = CreationResult {
            status_code: 403,
            message: Some("forbidden".to_string()),
        };
        assert!(!rejected.is_success());
        assert_eq!(rejected.notice(), "Failed to create resource: forbidden");
    }
}
