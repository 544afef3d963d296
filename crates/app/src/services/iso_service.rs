//! ISO image service — listing stored images and uploading new ones.

use rackdash_domain::enums::EnumCategory;
use rackdash_domain::iso::{IsoImageView, UPLOAD_FIELD, images_from_json};

use crate::endpoints::Endpoint;
use crate::error::{AppError, expect_success};
use crate::ports::{ApiTransport, RawBody};
use crate::services::enum_service::EnumResolver;

pub const LOAD_IMAGES_FAILED: &str = "Failed to load ISO images.";
pub const UPLOAD_FAILED: &str = "Failed to upload ISO.";

/// Application service for provisioning images.
pub struct IsoService<T> {
    transport: T,
    enums: EnumResolver<T>,
}

impl<T: ApiTransport + Clone> IsoService<T> {
    pub fn new(transport: T) -> Self {
        Self {
            enums: EnumResolver::new(transport.clone()),
            transport,
        }
    }

    /// Fetch the stored images with the architecture and preconfigure-type
    /// tables, and project each image.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Rejected`] when the listing is refused, or
    /// [`AppError::Transport`] when the backend cannot be reached.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<IsoImageView>, AppError> {
        let path = Endpoint::IsoImages.path();
        let (response, architectures, preconfigure_types) = futures::try_join!(
            async {
                let response = self.transport.get(&path, &[]).await?;
                Ok::<_, AppError>(response)
            },
            self.enums.fetch(EnumCategory::Architectures),
            self.enums.fetch(EnumCategory::PreconfigureTypes),
        )?;
        let response = expect_success(response, LOAD_IMAGES_FAILED)?;

        let architectures = architectures.labels();
        let preconfigure_types = preconfigure_types.labels();
        Ok(images_from_json(&response.body)
            .iter()
            .map(|image| IsoImageView::project(image, &architectures, &preconfigure_types))
            .collect())
    }

    /// Upload an image as a multipart body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Rejected`] carrying the server message when the
    /// upload is refused.
    #[tracing::instrument(skip(self, file))]
    pub async fn upload(&self, file: T::File) -> Result<(), AppError> {
        let body = RawBody::File {
            field: UPLOAD_FIELD.to_string(),
            file,
        };
        let response = self
            .transport
            .post_raw(&Endpoint::IsoImages.path(), body)
            .await?;
        expect_success(response, UPLOAD_FAILED).inspect_err(|err| {
            tracing::warn!(error = %err, "upload rejected");
        })?;
        tracing::info!("image uploaded");
        Ok(())
    }
}
