use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{is_present, require_resource_id},
    domain::entities::content::{DraftUpdate, GenerateDraft, Record, RefineDraft},
};

/// Blog-draft endpoints of the remote API, called with the user's bearer token.
#[async_trait]
pub trait DraftsGateway: Send + Sync {
    async fn list_drafts(&self, access_token: &str) -> AppResult<Vec<Record>>;
    async fn get_draft(&self, access_token: &str, id: &str) -> AppResult<Record>;
    async fn generate_draft(
        &self,
        access_token: &str,
        request: &GenerateDraft,
    ) -> AppResult<Record>;
    async fn update_draft(
        &self,
        access_token: &str,
        id: &str,
        update: &DraftUpdate,
    ) -> AppResult<Record>;
    async fn refine_draft(
        &self,
        access_token: &str,
        id: &str,
        request: &RefineDraft,
    ) -> AppResult<Record>;
}

#[derive(Clone)]
pub struct DraftUseCases {
    gateway: Arc<dyn DraftsGateway>,
}

impl DraftUseCases {
    pub fn new(gateway: Arc<dyn DraftsGateway>) -> Self {
        Self { gateway }
    }

    #[instrument(skip_all)]
    pub async fn list(&self, access_token: &str) -> AppResult<Vec<Record>> {
        self.gateway.list_drafts(access_token).await
    }

    #[instrument(skip(self, access_token))]
    pub async fn get(&self, access_token: &str, id: &str) -> AppResult<Record> {
        require_resource_id(id)?;
        self.gateway.get_draft(access_token, id).await
    }

    /// Asks the remote API to write a draft from the selected documents.
    #[instrument(skip(self, access_token, description))]
    pub async fn generate(
        &self,
        access_token: &str,
        document_ids: Vec<String>,
        title: &str,
        description: Option<&str>,
    ) -> AppResult<Record> {
        let document_ids: Vec<String> = document_ids
            .into_iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        if document_ids.is_empty() {
            return Err(AppError::InvalidInput(
                "Please select at least one document".into(),
            ));
        }
        for id in &document_ids {
            require_resource_id(id)?;
        }

        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::InvalidInput("Please provide a title".into()));
        }

        let request = GenerateDraft {
            document_ids,
            title: title.to_string(),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        };
        self.gateway.generate_draft(access_token, &request).await
    }

    #[instrument(skip(self, access_token, update))]
    pub async fn update(
        &self,
        access_token: &str,
        id: &str,
        update: DraftUpdate,
    ) -> AppResult<Record> {
        require_resource_id(id)?;
        if update.is_empty() {
            return Err(AppError::InvalidInput("Nothing to update".into()));
        }
        self.gateway.update_draft(access_token, id, &update).await
    }

    pub async fn publish(&self, access_token: &str, id: &str) -> AppResult<Record> {
        self.update(access_token, id, DraftUpdate::publish()).await
    }

    #[instrument(skip(self, access_token, feedback))]
    pub async fn refine(&self, access_token: &str, id: &str, feedback: &str) -> AppResult<Record> {
        require_resource_id(id)?;
        if !is_present(feedback) {
            return Err(AppError::InvalidInput("Feedback is required".into()));
        }
        let request = RefineDraft {
            feedback: feedback.trim().to_string(),
        };
        self.gateway.refine_draft(access_token, id, &request).await
    }
}
