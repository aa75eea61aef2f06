//! Static taxonomy feeding the cascading kind selector: category nodes at
//! the top level, concrete resource kinds as leaves.

use crate::models::resource::{CatalogNode, ResourceKind};

fn leaf(kind: ResourceKind, label: &str) -> CatalogNode {
    CatalogNode {
        value: kind.as_str().to_string(),
        label: label.to_string(),
        children: None,
    }
}

fn category(value: &str, label: &str, children: Vec<CatalogNode>) -> CatalogNode {
    CatalogNode {
        value: value.to_string(),
        label: label.to_string(),
        children: Some(children),
    }
}

/// The full catalog, in display order. Pure data; no state, no errors.
pub fn list() -> Vec<CatalogNode> {
    vec![
        category(
            "workload",
            "Workload",
            vec![
                leaf(ResourceKind::Pod, "Pod"),
                leaf(ResourceKind::Deployment, "Deployment"),
                leaf(ResourceKind::StatefulSet, "Stateful Set"),
            ],
        ),
        category("network", "Network", vec![leaf(ResourceKind::Ingress, "Ingress")]),
        category(
            "config",
            "Config",
            vec![
                leaf(ResourceKind::ConfigMap, "Config Map"),
                leaf(ResourceKind::Secret, "Secret"),
            ],
        ),
        category(
            "storage",
            "Storage",
            vec![leaf(ResourceKind::PersistentVolumeClaim, "Persistent Volume Claim")],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_leaf_is_a_valid_kind() {
        let mut kinds = Vec::new();
        for node in list() {
            // top level is categories only
            assert!(node.kind().is_none());
            for child in node.children.unwrap() {
                assert!(child.children.is_none());
                kinds.push(child.kind().expect("leaf must carry a kind"));
            }
        }
        kinds.sort_by_key(|k| k.as_str());
        let mut all = ResourceKind::ALL.to_vec();
        all.sort_by_key(|k| k.as_str());
        assert_eq!(kinds, all);
    }
}
