//! Capability-based authorization checks.
//!
//! A pure predicate over an already-authenticated user — no session or
//! token handling here. UI layers use [`authorized`] to produce gated
//! values only when the check passes.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::EnvironmentId;

/// Well-known role name constants.
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Capability required to manage cluster setup and security constraints.
pub const CAP_K8S_CLUSTER_SETUP_RW: &str = "K8sClusterSetupRW";

/// Product edition of the running console.
///
/// The Community edition has no per-user capability grants; gated
/// features degrade to administrator-only there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    Community,
    Business,
}

/// An authenticated console user.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    /// Role name (see the `ROLE_*` constants).
    pub role: String,
    /// Capability grants per environment. Only consulted in the
    /// Business edition.
    pub authorizations: HashMap<EnvironmentId, HashSet<String>>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Decide whether `user` may exercise `capability` in `environment_id`.
///
/// Administrators always pass. Other users pass only in the Business
/// edition, and only when their grant set for the environment contains
/// the capability.
pub fn has_capability(
    user: &User,
    capability: &str,
    environment_id: EnvironmentId,
    edition: Edition,
) -> bool {
    if user.is_admin() {
        return true;
    }
    match edition {
        Edition::Community => false,
        Edition::Business => user
            .authorizations
            .get(&environment_id)
            .is_some_and(|grants| grants.contains(capability)),
    }
}

/// Produce `render()` only when the capability check passes.
///
/// The value-level counterpart of wrapping a UI fragment in an
/// authorization guard.
pub fn authorized<T>(
    user: &User,
    capability: &str,
    environment_id: EnvironmentId,
    edition: Edition,
    render: impl FnOnce() -> T,
) -> Option<T> {
    has_capability(user, capability, environment_id, edition).then(render)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User {
            id: 1,
            role: ROLE_ADMIN.to_string(),
            authorizations: HashMap::new(),
        }
    }

    fn user_with_grants(environment_id: EnvironmentId, grants: &[&str]) -> User {
        let mut authorizations = HashMap::new();
        authorizations.insert(
            environment_id,
            grants.iter().map(|g| g.to_string()).collect::<HashSet<_>>(),
        );
        User {
            id: 2,
            role: ROLE_USER.to_string(),
            authorizations,
        }
    }

    #[test]
    fn admin_passes_in_both_editions() {
        let user = admin();
        assert!(has_capability(
            &user,
            CAP_K8S_CLUSTER_SETUP_RW,
            1,
            Edition::Community
        ));
        assert!(has_capability(
            &user,
            CAP_K8S_CLUSTER_SETUP_RW,
            1,
            Edition::Business
        ));
    }

    #[test]
    fn standard_user_is_rejected_in_community_edition() {
        // Grants exist but are not consulted outside the Business edition.
        let user = user_with_grants(1, &[CAP_K8S_CLUSTER_SETUP_RW]);
        assert!(!has_capability(
            &user,
            CAP_K8S_CLUSTER_SETUP_RW,
            1,
            Edition::Community
        ));
    }

    #[test]
    fn granted_user_passes_in_business_edition() {
        let user = user_with_grants(1, &[CAP_K8S_CLUSTER_SETUP_RW]);
        assert!(has_capability(
            &user,
            CAP_K8S_CLUSTER_SETUP_RW,
            1,
            Edition::Business
        ));
    }

    #[test]
    fn grants_are_scoped_to_their_environment() {
        let user = user_with_grants(1, &[CAP_K8S_CLUSTER_SETUP_RW]);
        assert!(!has_capability(
            &user,
            CAP_K8S_CLUSTER_SETUP_RW,
            2,
            Edition::Business
        ));
    }

    #[test]
    fn authorized_yields_value_only_when_permitted() {
        let user = user_with_grants(1, &[]);
        assert_eq!(
            authorized(&admin(), CAP_K8S_CLUSTER_SETUP_RW, 1, Edition::Community, || 42),
            Some(42)
        );
        assert_eq!(
            authorized(&user, CAP_K8S_CLUSTER_SETUP_RW, 1, Edition::Business, || 42),
            None
        );
    }
}
