//! Host service — inventory listing and the admin actions on hosts.

use std::fmt::Display;

use chrono::TimeZone;
use serde_json::json;

use rackdash_domain::address::ManagementIp;
use rackdash_domain::controls::HostDraft;
use rackdash_domain::enums::{EnumCategory, EnumCode, resolve_label};
use rackdash_domain::error::ValidationError;
use rackdash_domain::host::{Host, hosts_from_json};
use rackdash_domain::power::PowerStatus;
use rackdash_domain::time::{as_of_caption, now};
use rackdash_domain::view::{HostListView, HostView};

use crate::endpoints::Endpoint;
use crate::error::{AppError, expect_success};
use crate::ports::ApiTransport;
use crate::services::enum_service::EnumResolver;

pub const LOAD_HOSTS_FAILED: &str = "Failed to load hosts.";
pub const LOAD_HOST_FAILED: &str = "Failed to load host.";
pub const POWER_FAILED: &str = "Failed to change power state.";
pub const ADD_HOST_FAILED: &str = "Failed to add host. Please try again.";
pub const REMOVE_HOST_FAILED: &str = "Failed to remove host.";

/// Application service for the host inventory.
pub struct HostService<T> {
    transport: T,
    enums: EnumResolver<T>,
}

impl<T: ApiTransport + Clone> HostService<T> {
    /// Create a new service talking through `transport`.
    pub fn new(transport: T) -> Self {
        Self {
            enums: EnumResolver::new(transport.clone()),
            transport,
        }
    }

    /// Fetch the inventory and the display enums together and project every
    /// host. An empty inventory projects nothing.
    ///
    /// `tz` is the viewer's time zone for the "as of" captions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Rejected`] when the host list is refused, or
    /// [`AppError::Transport`] when the backend cannot be reached.
    #[tracing::instrument(skip(self, tz))]
    pub async fn list<Tz>(&self, tz: &Tz) -> Result<HostListView, AppError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let hosts_path = Endpoint::Hosts.path();
        let (response, labels) = futures::try_join!(
            async {
                let response = self.transport.get(&hosts_path, &[]).await?;
                Ok::<_, AppError>(response)
            },
            self.enums.display_labels(),
        )?;
        let response = expect_success(response, LOAD_HOSTS_FAILED)?;

        let hosts = hosts_from_json(&response.body);
        if hosts.is_empty() {
            tracing::debug!("inventory is empty");
            return Ok(HostListView::default());
        }
        tracing::debug!(count = hosts.len(), "projecting hosts");
        Ok(HostListView::project(&hosts, &labels, tz))
    }

    /// Fetch and project a single host.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Rejected`] for an unknown host, or
    /// [`AppError::Decode`] when the body is not a host.
    #[tracing::instrument(skip(self, tz))]
    pub async fn get<Tz>(&self, management_ip: &str, tz: &Tz) -> Result<HostView, AppError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let host_path = Endpoint::Host { management_ip }.path();
        let (response, labels) = futures::try_join!(
            async {
                let response = self.transport.get(&host_path, &[]).await?;
                Ok::<_, AppError>(response)
            },
            self.enums.display_labels(),
        )?;
        let host: Host = expect_success(response, LOAD_HOST_FAILED)?.decode()?;
        Ok(HostView::project(&host, &labels, tz))
    }

    /// Labels of the power actions, ordered by code, for the power menus.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] when the backend cannot be reached.
    pub async fn power_actions(&self) -> Result<Vec<String>, AppError> {
        let actions = self.enums.fetch(EnumCategory::PowerActions).await?;
        Ok(actions.labels_by_code())
    }

    /// Labels of the management types, for the add-host dropdown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] when the backend cannot be reached.
    pub async fn management_types(&self) -> Result<Vec<String>, AppError> {
        let types = self.enums.fetch(EnumCategory::ManagementTypes).await?;
        Ok(types.labels_by_code())
    }

    /// Request a power action on a host, identified by its label.
    ///
    /// The action table is fetched at call time to map the label to its
    /// code. On success the returned power state is resolved for display and
    /// stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unknown action label, or
    /// [`AppError::Rejected`] carrying the server message when the backend
    /// refuses the request or does not report the new state.
    #[tracing::instrument(skip(self, tz))]
    pub async fn power<Tz>(
        &self,
        management_ip: &str,
        action: &str,
        tz: &Tz,
    ) -> Result<PowerStatus, AppError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let actions = self.enums.fetch(EnumCategory::PowerActions).await?;
        let code = actions
            .require_code(EnumCategory::PowerActions, action)
            .inspect_err(|err| tracing::warn!(management_ip, error = %err, "power action not mapped"))?;

        let path = Endpoint::HostPower {
            management_ip,
            power_action: code.as_str(),
        }
        .path();
        let response = self.transport.post_json(&path, &json!({})).await?;
        let response = expect_success(response, POWER_FAILED).inspect_err(|err| {
            tracing::warn!(management_ip, error = %err, "power action rejected");
        })?;

        // An "already on/off" answer is 2xx but carries no new state.
        let Some(state) = response.body.get("power_state").and_then(EnumCode::from_json) else {
            return Err(AppError::Rejected {
                status: response.status_code,
                message: response.message().unwrap_or(POWER_FAILED).to_string(),
            });
        };

        let states = self.enums.fetch(EnumCategory::PowerStates).await?;
        let label = resolve_label(&states.labels(), Some(&state));
        tracing::info!(management_ip, %state, "power state changed");
        Ok(PowerStatus::new(label, Some(as_of_caption(&now(), tz))))
    }

    /// Validate the add-host form and enroll the host.
    ///
    /// The address is checked before anything is sent, ignoring surrounding
    /// whitespace; the management-type label is then mapped to its code from
    /// a fresh fetch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a bad address, a missing or
    /// unknown management type, or [`AppError::Rejected`] when the backend
    /// refuses the host.
    #[tracing::instrument(skip(self, draft), fields(management_ip = %draft.address))]
    pub async fn add_host(&self, draft: &HostDraft) -> Result<(), AppError> {
        let management_ip = ManagementIp::from_input(&draft.address)?;
        let label = draft
            .management_type
            .as_deref()
            .filter(|label| !label.is_empty())
            .ok_or(ValidationError::MissingManagementType)?;

        let types = self.enums.fetch(EnumCategory::ManagementTypes).await?;
        let management_type = types
            .require_code(EnumCategory::ManagementTypes, label)
            .inspect_err(|err| tracing::warn!(error = %err, "management type not mapped"))?;

        let body = json!({
            "management_ip": management_ip,
            "management_type": management_type,
        });
        let response = self.transport.post_json(&Endpoint::Hosts.path(), &body).await?;
        expect_success(response, ADD_HOST_FAILED)?;
        tracing::info!("host enrolled");
        Ok(())
    }

    /// Remove a host from the inventory.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Rejected`] when the backend refuses the removal.
    #[tracing::instrument(skip(self))]
    pub async fn remove_host(&self, management_ip: &str) -> Result<(), AppError> {
        let path = Endpoint::Host { management_ip }.path();
        let response = self.transport.delete(&path, None).await?;
        expect_success(response, REMOVE_HOST_FAILED)?;
        tracing::info!("host removed");
        Ok(())
    }
}
