//! # Agent Aggregate
//!
//! A licensed marketplace agent.
//!
//! This module provides the [`Agent`] aggregate root. Going live is gated
//! by compliance: verification prerequisites, a currently valid license,
//! an active affiliation (when one is attached), at least one service
//! area, and the required document set.
//!
//! # State Machine
//!
//! ```text
//! Onboarding → Active ⇄ Suspended
//!      ↓          ↓         ↓
//!      └──────────┴─────────┴→ Deactivated
//! ```
//!
//! `Deactivated` is terminal. License renewal and ending an affiliation
//! stay permitted afterwards so historical records can be corrected;
//! everything else is blocked.
//!
//! # Examples
//!
//! ```
//! use amlaki_domain::domain::entities::Agent;
//! use amlaki_domain::domain::value_objects::{
//!     AgentDocument, AgentDocuments, AgentLicense, CommissionSplit, DocumentType,
//!     LicenseStatus, ServiceAreas, UserId, VerificationSnapshot,
//! };
//! use chrono::{Duration, Utc};
//! use rust_decimal::Decimal;
//!
//! let now = Utc::now();
//! let license = AgentLicense::new(
//!     "LIC-42",
//!     "Tehran Union",
//!     now - Duration::days(30),
//!     now + Duration::days(365),
//!     LicenseStatus::Active,
//! )
//! .unwrap();
//! let split = CommissionSplit::new(
//!     Decimal::new(70, 0),
//!     Decimal::new(20, 0),
//!     Decimal::new(10, 0),
//! )
//! .unwrap();
//! let docs = AgentDocuments::default()
//!     .add(AgentDocument::new(DocumentType::License, "https://cdn/l.pdf", now).unwrap())
//!     .add(AgentDocument::new(DocumentType::IdProof, "https://cdn/id.pdf", now).unwrap())
//!     .add(AgentDocument::new(DocumentType::ProfilePhoto, "https://cdn/p.jpg", now).unwrap());
//!
//! let mut agent = Agent::enroll(
//!     UserId::new_v4(),
//!     VerificationSnapshot::new(true, true, true),
//!     license,
//!     split,
//!     ServiceAreas::new(["Tehran"]).unwrap(),
//!     docs,
//!     now,
//! )
//! .unwrap();
//!
//! agent.activate(now).unwrap();
//! assert!(agent.is_active());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    AgentDocument, AgentDocuments, AgentId, AgentLicense, BrokerageAffiliation, CommissionSplit,
    ServiceAreas, UserId, VerificationSnapshot,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Agent lifecycle state.
///
/// # Terminal States
///
/// - [`Deactivated`](AgentStatus::Deactivated) - the profile is retired;
///   only license renewal and affiliation closure remain permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentStatus {
    /// Enrolled, not yet cleared to operate.
    #[default]
    Onboarding,

    /// Cleared to operate and list properties.
    Active,

    /// Temporarily barred from operating.
    Suspended,

    /// Permanently retired (terminal).
    Deactivated,
}

impl AgentStatus {
    /// Returns true if this is the terminal state.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Deactivated)
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Onboarding => "ONBOARDING",
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Deactivated => "DEACTIVATED",
        };
        write!(f, "{}", s)
    }
}

/// A licensed marketplace agent.
///
/// # Invariants
///
/// - The user id is non-nil
/// - Verification prerequisites held at enrollment time
/// - `Deactivated` is never left once entered
/// - A suspension reason is present iff set by `suspend`/`deactivate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    user_id: UserId,
    verification: VerificationSnapshot,
    license: AgentLicense,
    commission: CommissionSplit,
    affiliation: Option<BrokerageAffiliation>,
    service_areas: ServiceAreas,
    documents: AgentDocuments,
    status: AgentStatus,
    suspension_reason: Option<String>,
    version: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Agent {
    /// Enrolls a new agent in the `Onboarding` state.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidId`] for a nil user id and
    /// [`DomainError::VerificationIncomplete`] when the snapshot does not
    /// satisfy the email/phone/KYC prerequisites.
    pub fn enroll(
        user_id: UserId,
        verification: VerificationSnapshot,
        license: AgentLicense,
        commission: CommissionSplit,
        service_areas: ServiceAreas,
        documents: AgentDocuments,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if user_id.is_nil() {
            return Err(DomainError::InvalidId("user id is required".to_string()));
        }
        if !verification.meets_agent_prerequisites() {
            return Err(DomainError::VerificationIncomplete(
                "user must have verified email/phone and approved KYC to enroll as agent"
                    .to_string(),
            ));
        }

        let agent = Self {
            id: AgentId::new_v4(),
            user_id,
            verification,
            license,
            commission,
            affiliation: None,
            service_areas,
            documents,
            status: AgentStatus::Onboarding,
            suspension_reason: None,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        debug!(agent_id = %agent.id, user_id = %user_id, "agent enrolled");
        Ok(agent)
    }

    /// Reconstructs an agent from stored state.
    ///
    /// Bypasses enrollment validation; intended for the persistence
    /// collaborator only.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: AgentId,
        user_id: UserId,
        verification: VerificationSnapshot,
        license: AgentLicense,
        commission: CommissionSplit,
        affiliation: Option<BrokerageAffiliation>,
        service_areas: ServiceAreas,
        documents: AgentDocuments,
        status: AgentStatus,
        suspension_reason: Option<String>,
        version: u64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            verification,
            license,
            commission,
            affiliation,
            service_areas,
            documents,
            status,
            suspension_reason,
            version,
            created_at,
            updated_at,
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
        self.version = self.version.saturating_add(1);
    }

    fn ensure_not_deactivated(&self, action: &str) -> DomainResult<()> {
        if self.status == AgentStatus::Deactivated {
            return Err(DomainError::OperationNotAllowed(format!(
                "deactivated agent cannot {}",
                action
            )));
        }
        Ok(())
    }

    // ========== Accessors ==========

    /// Returns the agent id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Returns the owning user id.
    #[inline]
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the cached verification snapshot.
    #[inline]
    #[must_use]
    pub fn verification(&self) -> VerificationSnapshot {
        self.verification
    }

    /// Returns the license.
    #[inline]
    #[must_use]
    pub fn license(&self) -> &AgentLicense {
        &self.license
    }

    /// Returns the commission split.
    #[inline]
    #[must_use]
    pub fn commission(&self) -> CommissionSplit {
        self.commission
    }

    /// Returns the brokerage affiliation, if any.
    #[inline]
    #[must_use]
    pub fn affiliation(&self) -> Option<&BrokerageAffiliation> {
        self.affiliation.as_ref()
    }

    /// Returns the service areas.
    #[inline]
    #[must_use]
    pub fn service_areas(&self) -> &ServiceAreas {
        &self.service_areas
    }

    /// Returns the uploaded documents.
    #[inline]
    #[must_use]
    pub fn documents(&self) -> &AgentDocuments {
        &self.documents
    }

    /// Returns the lifecycle status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> AgentStatus {
        self.status
    }

    /// Returns the suspension or deactivation reason, if any.
    #[inline]
    #[must_use]
    pub fn suspension_reason(&self) -> Option<&str> {
        self.suspension_reason.as_deref()
    }

    /// Returns the version for optimistic locking.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns when this agent was enrolled.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when this agent was last updated.
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns true if the agent is active.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }

    /// Returns true if the agent may list a property right now:
    /// active status, valid license, and verification prerequisites.
    ///
    /// Convenience for the orchestration layer creating listings.
    #[must_use]
    pub fn can_list_property_now(&self, now: DateTime<Utc>) -> bool {
        self.status == AgentStatus::Active
            && self.license.is_currently_valid(now)
            && self.verification.meets_agent_prerequisites()
    }

    // ========== Attribute Mutators ==========

    /// Attaches a brokerage affiliation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] once deactivated, and
    /// [`DomainError::AlreadyExists`] while an active affiliation is in
    /// place - it must be ended first, never overwritten.
    pub fn attach_affiliation(
        &mut self,
        affiliation: BrokerageAffiliation,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_not_deactivated("change affiliation")?;
        if self.affiliation.as_ref().is_some_and(|a| a.is_active()) {
            return Err(DomainError::AlreadyExists(
                "an active affiliation already exists; end it before attaching a new one"
                    .to_string(),
            ));
        }
        self.affiliation = Some(affiliation);
        self.touch(now);
        Ok(())
    }

    /// Ends the current affiliation at `ended_at`.
    ///
    /// A no-op when no affiliation exists or it has already ended.
    /// Permitted even when deactivated, for historical correctness.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInterval`] if the end instant is not
    /// after the affiliation start.
    pub fn end_affiliation(
        &mut self,
        ended_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let ended = match self.affiliation.as_ref() {
            Some(affiliation) if affiliation.is_active() => affiliation.end(ended_at)?,
            _ => return Ok(()),
        };
        self.affiliation = Some(ended);
        self.touch(now);
        Ok(())
    }

    /// Replaces the cached verification snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] once deactivated.
    pub fn refresh_verification(
        &mut self,
        snapshot: VerificationSnapshot,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_not_deactivated("update verification")?;
        self.verification = snapshot;
        self.touch(now);
        Ok(())
    }

    /// Replaces the commission split.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] once deactivated.
    pub fn update_commission(
        &mut self,
        split: CommissionSplit,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_not_deactivated("update commission")?;
        self.commission = split;
        self.touch(now);
        Ok(())
    }

    /// Replaces the service areas.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] once deactivated.
    pub fn replace_service_areas(
        &mut self,
        areas: ServiceAreas,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_not_deactivated("update service areas")?;
        self.service_areas = areas;
        self.touch(now);
        Ok(())
    }

    /// Adds an uploaded document (duplicates are ignored).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] once deactivated.
    pub fn add_document(&mut self, doc: AgentDocument, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deactivated("add documents")?;
        self.documents = self.documents.add(doc);
        self.touch(now);
        Ok(())
    }

    /// Renews the license with a later expiry.
    ///
    /// Permitted even when deactivated, for historical correctness.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLicense`] if the new expiry is not
    /// strictly later than the current one.
    pub fn renew_license(
        &mut self,
        new_expiry: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.license = self.license.renew(new_expiry)?;
        self.touch(now);
        Ok(())
    }

    /// Revokes the license.
    ///
    /// When the agent is active, the revocation cascades into a suspension
    /// so a revoked agent can never keep operating.
    pub fn revoke_license(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.license = self.license.revoke();
        if self.status == AgentStatus::Active {
            self.suspend("License revoked.", now)?;
        }
        self.touch(now);
        debug!(agent_id = %self.id, "license revoked");
        Ok(())
    }

    // ========== Lifecycle Transitions ==========

    /// Activates the agent.
    ///
    /// Idempotent: activating an already active agent is a no-op that
    /// leaves the aggregate untouched.
    ///
    /// All gates are checked atomically before any state change:
    /// verification prerequisites, current license validity, an active
    /// affiliation when one is attached, at least one service area, and
    /// the required document set. On success the suspension reason is
    /// cleared.
    ///
    /// # Errors
    ///
    /// A distinct violation for each failed gate:
    /// [`DomainError::VerificationIncomplete`],
    /// [`DomainError::LicenseNotValid`], [`DomainError::AffiliationEnded`],
    /// [`DomainError::NoServiceAreas`], or
    /// [`DomainError::MissingDocument`]. Also
    /// [`DomainError::OperationNotAllowed`] once deactivated.
    pub fn activate(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status == AgentStatus::Active {
            return Ok(());
        }
        self.ensure_not_deactivated("activate")?;

        if !self.verification.meets_agent_prerequisites() {
            return Err(DomainError::VerificationIncomplete(
                "cannot activate: user verification/KYC not satisfied".to_string(),
            ));
        }
        if !self.license.is_currently_valid(now) {
            return Err(DomainError::LicenseNotValid(
                "cannot activate: license invalid or expired".to_string(),
            ));
        }
        if self.affiliation.as_ref().is_some_and(|a| !a.is_active()) {
            return Err(DomainError::AffiliationEnded(
                "cannot activate: affiliation ended".to_string(),
            ));
        }
        if self.service_areas.is_empty() {
            return Err(DomainError::NoServiceAreas);
        }
        self.documents.ensure_required_for_activation()?;

        self.status = AgentStatus::Active;
        self.suspension_reason = None;
        self.touch(now);
        debug!(agent_id = %self.id, "agent activated");
        Ok(())
    }

    /// Suspends the agent with a reason.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] once deactivated and
    /// [`DomainError::ValidationError`] for a blank reason.
    pub fn suspend(&mut self, reason: &str, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status == AgentStatus::Deactivated {
            return Err(DomainError::OperationNotAllowed(
                "agent already deactivated".to_string(),
            ));
        }
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(DomainError::ValidationError(
                "suspension reason is required".to_string(),
            ));
        }
        self.status = AgentStatus::Suspended;
        self.suspension_reason = Some(reason.to_string());
        self.touch(now);
        debug!(agent_id = %self.id, reason, "agent suspended");
        Ok(())
    }

    /// Returns a suspended agent to active duty.
    ///
    /// Re-checks license validity and verification prerequisites only -
    /// a narrower gate set than [`activate`](Self::activate), which the
    /// agent already passed once.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OperationNotAllowed`] once deactivated,
    /// [`DomainError::LicenseNotValid`], or
    /// [`DomainError::VerificationIncomplete`].
    pub fn reactivate(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status == AgentStatus::Deactivated {
            return Err(DomainError::OperationNotAllowed(
                "cannot reactivate a deactivated agent".to_string(),
            ));
        }
        if !self.license.is_currently_valid(now) {
            return Err(DomainError::LicenseNotValid(
                "cannot reactivate: license invalid or expired".to_string(),
            ));
        }
        if !self.verification.meets_agent_prerequisites() {
            return Err(DomainError::VerificationIncomplete(
                "cannot reactivate: user verification/KYC not satisfied".to_string(),
            ));
        }
        self.status = AgentStatus::Active;
        self.suspension_reason = None;
        self.touch(now);
        debug!(agent_id = %self.id, "agent reactivated");
        Ok(())
    }

    /// Permanently retires the agent. Always succeeds; terminal.
    ///
    /// A blank reason is stored as `None`.
    pub fn deactivate(&mut self, reason: Option<&str>, now: DateTime<Utc>) {
        self.status = AgentStatus::Deactivated;
        self.suspension_reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        self.touch(now);
        debug!(agent_id = %self.id, "agent deactivated");
    }
}
