//! Enum resolver — fetches the backend's label → code tables.

use rackdash_domain::enums::{EnumCategory, EnumMap};
use rackdash_domain::view::EnumLabels;

use crate::endpoints::Endpoint;
use crate::error::AppError;
use crate::ports::ApiTransport;

/// Fetches enum categories. Nothing is cached: every call hits the backend.
pub struct EnumResolver<T> {
    transport: T,
}

impl<T: ApiTransport> EnumResolver<T> {
    /// Create a resolver on top of the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch one category as served (label → code).
    ///
    /// A non-2xx answer or a body that is not an object yields an empty map,
    /// so callers fall back to showing raw codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] when the backend cannot be reached.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, category: EnumCategory) -> Result<EnumMap, AppError> {
        let response = self
            .transport
            .get(&Endpoint::Enum(category).path(), &[])
            .await?;
        if !response.is_success() {
            tracing::warn!(
                %category,
                status = response.status_code,
                "enum category unavailable, falling back to raw codes"
            );
            return Ok(EnumMap::default());
        }
        Ok(EnumMap::from_json(&response.body))
    }

    /// Fetch the four categories shown on host cards, concurrently, and
    /// reverse them for display.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] when any of the fetches cannot reach
    /// the backend.
    pub async fn display_labels(&self) -> Result<EnumLabels, AppError> {
        let (vendors, form_factors, management_types, power_states) = futures::try_join!(
            self.fetch(EnumCategory::Vendors),
            self.fetch(EnumCategory::FormFactors),
            self.fetch(EnumCategory::ManagementTypes),
            self.fetch(EnumCategory::PowerStates),
        )?;
        Ok(EnumLabels {
            vendors: vendors.labels(),
            form_factors: form_factors.labels(),
            management_types: management_types.labels(),
            power_states: power_states.labels(),
        })
    }
}
