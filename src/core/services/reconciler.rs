//! Member state reconciliation
//!
//! Brings a member's roles and nickname into alignment with a
//! verification outcome. Planning is pure: the target role set is
//! computed as an exact pair (one role present, the other absent) and
//! diffed against the member snapshot. Applying is guarded per mutation:
//! one failed gateway call is logged and the remaining mutations still
//! run.

use crate::core::models::{IdentitySubmission, MemberState, RolePair, VerificationOutcome};
use crate::core::ports::{ChatGateway, EventLog};

/// The minimal mutation set for one reconciliation
///
/// `None` in `add`/`remove` means the member already matches the target
/// for that role; the apply step then only emits the informational log
/// line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// Role to grant, absent from the member's snapshot
    pub add: Option<String>,
    /// Role the member already holds that matches the target
    pub already_present: Option<String>,
    /// Role to revoke, present in the member's snapshot
    pub remove: Option<String>,
    /// Counterpart role the member never held
    pub already_absent: Option<String>,
    /// Nickname to set
    pub nickname: Option<String>,
}

impl ReconcilePlan {
    /// A plan that performs nothing (malformed submissions)
    const fn noop() -> Self {
        Self {
            add: None,
            already_present: None,
            remove: None,
            already_absent: None,
            nickname: None,
        }
    }

    /// Number of mutating gateway calls this plan will issue
    #[must_use]
    pub const fn mutation_count(&self) -> usize {
        self.add.is_some() as usize
            + self.remove.is_some() as usize
            + self.nickname.is_some() as usize
    }
}

/// What actually happened while applying a plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileResult {
    /// Roles granted
    pub roles_added: usize,
    /// Roles revoked
    pub roles_removed: usize,
    /// Whether the nickname was set
    pub renamed: bool,
    /// Mutations that failed at the gateway
    pub failures: usize,
}

/// Compute the minimal mutation set for `outcome` against `member`
///
/// `Verified` targets {verified present, unverified absent};
/// `NotVerified` is symmetric; `Malformed` plans nothing.
#[must_use]
pub fn plan(
    outcome: VerificationOutcome,
    member: &MemberState,
    roles: &RolePair,
    submission: &IdentitySubmission,
) -> ReconcilePlan {
    let (target, other) = match outcome {
        VerificationOutcome::Verified => (&roles.verified, &roles.unverified),
        VerificationOutcome::NotVerified => (&roles.unverified, &roles.verified),
        VerificationOutcome::Malformed => return ReconcilePlan::noop(),
    };

    let (add, already_present) = if member.has_role(target) {
        (None, Some(target.clone()))
    } else {
        (Some(target.clone()), None)
    };
    let (remove, already_absent) = if member.has_role(other) {
        (Some(other.clone()), None)
    } else {
        (None, Some(other.clone()))
    };

    ReconcilePlan {
        add,
        already_present,
        remove,
        already_absent,
        nickname: Some(submission.display_name()),
    }
}

/// Plan and apply a reconciliation in one call
///
/// Mutation order matches the original deployment: counterpart role
/// removed first, target role added, nickname set last. Re-running with
/// a converged member performs zero mutating calls but still logs one
/// informational line per role.
pub async fn reconcile<G: ChatGateway, L: EventLog>(
    gateway: &G,
    log: &L,
    outcome: VerificationOutcome,
    member: &MemberState,
    roles: &RolePair,
    submission: &IdentitySubmission,
) -> ReconcileResult {
    let plan = plan(outcome, member, roles, submission);
    let mut result = ReconcileResult::default();
    let user = &member.username;

    if let Some(role) = &plan.remove {
        match gateway.remove_role(member.id, role).await {
            Ok(()) => {
                result.roles_removed += 1;
                log.record(&format!("\"{role}\" role removed from [{user}]")).await;
            },
            Err(err) => {
                result.failures += 1;
                log.record(&format!(
                    "\"{role}\" role could not be removed from [{user}] due to ``{}``",
                    err.brief()
                ))
                .await;
            },
        }
    } else if let Some(role) = &plan.already_absent {
        log.record(&format!(
            "Tried to remove role \"{role}\" from [{user}], but they never had that role"
        ))
        .await;
    }

    if let Some(role) = &plan.add {
        match gateway.add_role(member.id, role).await {
            Ok(()) => {
                result.roles_added += 1;
                log.record(&format!("\"{role}\" role added to [{user}]")).await;
            },
            Err(err) => {
                result.failures += 1;
                log.record(&format!(
                    "\"{role}\" could not be added to [{user}] due to ``{}``",
                    err.brief()
                ))
                .await;
            },
        }
    } else if let Some(role) = &plan.already_present {
        log.record(&format!(
            "Tried to add role \"{role}\" to [{user}], but they already had that role"
        ))
        .await;
    }

    if let Some(nickname) = &plan.nickname {
        match gateway.set_nickname(member.id, nickname).await {
            Ok(()) => {
                result.renamed = true;
                log.record(&format!("Changing [{user}] nickname to \"{nickname}\"")).await;
            },
            Err(err) => {
                result.failures += 1;
                log.record(&format!(
                    "Could not change [{user}] nickname to \"{nickname}\" due to ``{}``",
                    err.brief()
                ))
                .await;
            },
        }
    }

    result
}
