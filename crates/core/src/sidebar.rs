//! Kubernetes environment sidebar navigation tree.
//!
//! Produces the entry tree for one environment; rendering (icons,
//! routing, active-path highlighting) is the UI's concern. Entries that
//! require a capability are filtered out by [`visible_entries`].

use serde::Serialize;

use crate::authorization::{has_capability, Edition, User, CAP_K8S_CLUSTER_SETUP_RW};
use crate::types::EnvironmentId;

// ---------------------------------------------------------------------------
// Route identifiers
// ---------------------------------------------------------------------------

pub const ROUTE_DASHBOARD: &str = "kubernetes.dashboard";
pub const ROUTE_CUSTOM_TEMPLATES: &str = "kubernetes.templates.custom";
pub const ROUTE_NAMESPACES: &str = "kubernetes.resourcePools";
pub const ROUTE_APPLICATIONS: &str = "kubernetes.applications";
pub const ROUTE_SERVICES: &str = "kubernetes.services";
pub const ROUTE_INGRESSES: &str = "kubernetes.ingresses";
pub const ROUTE_CONFIGURATIONS: &str = "kubernetes.configurations";
pub const ROUTE_VOLUMES: &str = "kubernetes.volumes";
pub const ROUTE_CLUSTER: &str = "kubernetes.cluster";
pub const ROUTE_CLUSTER_SETUP: &str = "kubernetes.cluster.setup";
pub const ROUTE_SECURITY_CONSTRAINTS: &str = "kubernetes.cluster.securityConstraint";
pub const ROUTE_REGISTRIES: &str = "kubernetes.registries";

// ---------------------------------------------------------------------------
// Tree model
// ---------------------------------------------------------------------------

/// One sidebar entry, possibly a collapsible group with children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    pub label: &'static str,
    /// Route identifier the UI resolves into a link.
    pub route: &'static str,
    /// Environment the route is parameterized with.
    pub environment_id: EnvironmentId,
    /// Capability required to see this entry, if any.
    pub required_capability: Option<&'static str>,
    pub children: Vec<SidebarEntry>,
}

impl SidebarEntry {
    fn leaf(label: &'static str, route: &'static str, environment_id: EnvironmentId) -> Self {
        Self {
            label,
            route,
            environment_id,
            required_capability: None,
            children: Vec::new(),
        }
    }

    fn gated(
        label: &'static str,
        route: &'static str,
        environment_id: EnvironmentId,
        capability: &'static str,
    ) -> Self {
        Self {
            required_capability: Some(capability),
            ..Self::leaf(label, route, environment_id)
        }
    }

    fn group(
        label: &'static str,
        route: &'static str,
        environment_id: EnvironmentId,
        children: Vec<SidebarEntry>,
    ) -> Self {
        Self {
            children,
            ..Self::leaf(label, route, environment_id)
        }
    }
}

/// Build the full navigation tree for a Kubernetes environment.
///
/// The tree is edition-independent; "Security constraints" appears
/// exactly once.
pub fn kubernetes_sidebar(environment_id: EnvironmentId) -> Vec<SidebarEntry> {
    vec![
        SidebarEntry::leaf("Dashboard", ROUTE_DASHBOARD, environment_id),
        SidebarEntry::leaf("Custom Templates", ROUTE_CUSTOM_TEMPLATES, environment_id),
        SidebarEntry::leaf("Namespaces", ROUTE_NAMESPACES, environment_id),
        SidebarEntry::leaf("Applications", ROUTE_APPLICATIONS, environment_id),
        SidebarEntry::group(
            "Networking",
            ROUTE_SERVICES,
            environment_id,
            vec![
                SidebarEntry::leaf("Services", ROUTE_SERVICES, environment_id),
                SidebarEntry::leaf("Ingresses", ROUTE_INGRESSES, environment_id),
            ],
        ),
        SidebarEntry::leaf("ConfigMaps & Secrets", ROUTE_CONFIGURATIONS, environment_id),
        SidebarEntry::leaf("Volumes", ROUTE_VOLUMES, environment_id),
        SidebarEntry::group(
            "Cluster",
            ROUTE_CLUSTER,
            environment_id,
            vec![
                SidebarEntry::leaf("Details", ROUTE_CLUSTER, environment_id),
                SidebarEntry::gated(
                    "Setup",
                    ROUTE_CLUSTER_SETUP,
                    environment_id,
                    CAP_K8S_CLUSTER_SETUP_RW,
                ),
                SidebarEntry::gated(
                    "Security constraints",
                    ROUTE_SECURITY_CONSTRAINTS,
                    environment_id,
                    CAP_K8S_CLUSTER_SETUP_RW,
                ),
                SidebarEntry::leaf("Registries", ROUTE_REGISTRIES, environment_id),
            ],
        ),
    ]
}

/// Filter a tree down to the entries `user` may see.
///
/// Gated entries are dropped when the capability check fails; groups are
/// kept with their remaining children.
pub fn visible_entries(
    entries: &[SidebarEntry],
    user: &User,
    edition: Edition,
) -> Vec<SidebarEntry> {
    entries
        .iter()
        .filter(|entry| match entry.required_capability {
            Some(capability) => has_capability(user, capability, entry.environment_id, edition),
            None => true,
        })
        .map(|entry| SidebarEntry {
            children: visible_entries(&entry.children, user, edition),
            ..entry.clone()
        })
        .collect()
}
