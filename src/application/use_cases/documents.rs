use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::require_resource_id,
    domain::entities::content::{Record, Upload},
};

/// Document endpoints of the remote API. Every call forwards the caller's
/// access token as a bearer credential.
#[async_trait]
pub trait DocumentsGateway: Send + Sync {
    async fn list_documents(&self, access_token: &str) -> AppResult<Vec<Record>>;
    async fn get_document(&self, access_token: &str, id: &str) -> AppResult<Record>;
    async fn upload_document(&self, access_token: &str, upload: &Upload) -> AppResult<Record>;
    async fn delete_document(&self, access_token: &str, id: &str) -> AppResult<()>;
}

#[derive(Clone)]
pub struct DocumentUseCases {
    gateway: Arc<dyn DocumentsGateway>,
}

impl DocumentUseCases {
    pub fn new(gateway: Arc<dyn DocumentsGateway>) -> Self {
        Self { gateway }
    }

    #[instrument(skip_all)]
    pub async fn list(&self, access_token: &str) -> AppResult<Vec<Record>> {
        self.gateway.list_documents(access_token).await
    }

    #[instrument(skip(self, access_token))]
    pub async fn get(&self, access_token: &str, id: &str) -> AppResult<Record> {
        require_resource_id(id)?;
        self.gateway.get_document(access_token, id).await
    }

    #[instrument(skip_all, fields(file_name = %upload.file_name, size = upload.bytes.len()))]
    pub async fn upload(&self, access_token: &str, upload: Upload) -> AppResult<Record> {
        if upload.file_name.trim().is_empty() || upload.bytes.is_empty() {
            return Err(AppError::InvalidInput("No file provided".into()));
        }
        self.gateway.upload_document(access_token, &upload).await
    }

    #[instrument(skip(self, access_token))]
    pub async fn delete(&self, access_token: &str, id: &str) -> AppResult<()> {
        require_resource_id(id)?;
        self.gateway.delete_document(access_token, id).await
    }
}
