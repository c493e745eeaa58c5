//! Member state snapshot and role configuration

/// Snapshot of a member's platform-owned state at reconcile time
///
/// The messaging platform owns the authoritative copy; this is what the
/// reconciler reads to plan the minimal set of mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberState {
    /// Platform member id
    pub id: u64,
    /// Platform username (used in log lines, not the nickname)
    pub username: String,
    /// Current server nickname, if any
    pub nickname: Option<String>,
    /// Names of the roles the member currently holds
    pub roles: Vec<String>,
}

impl MemberState {
    /// Whether the member currently holds the named role
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// The mutually exclusive verification role pair
///
/// After any successful reconciliation a member holds exactly one of the
/// two. The names drifted across deployments, so they are configuration
/// rather than constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePair {
    /// Role granted to verified members
    pub verified: String,
    /// Role granted to members who failed verification
    pub unverified: String,
}

impl Default for RolePair {
    fn default() -> Self {
        Self {
            verified: "Verified Member".to_string(),
            unverified: "Unverified Member".to_string(),
        }
    }
}
