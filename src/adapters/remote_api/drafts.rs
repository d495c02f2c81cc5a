use async_trait::async_trait;
use reqwest::Method;

use super::{HttpContentGateway, records_in};
use crate::{
    app_error::AppResult,
    application::use_cases::drafts::DraftsGateway,
    domain::entities::content::{DraftUpdate, GenerateDraft, Record, RefineDraft},
};

#[async_trait]
impl DraftsGateway for HttpContentGateway {
    async fn list_drafts(&self, access_token: &str) -> AppResult<Vec<Record>> {
        let request = self.request(Method::GET, &["api", "v1", "blog"], access_token)?;
        let body = self.fetch(request, "Failed to fetch drafts").await?;
        Ok(records_in(body, "drafts"))
    }

    async fn get_draft(&self, access_token: &str, id: &str) -> AppResult<Record> {
        let request = self.request(Method::GET, &["api", "v1", "blog", id], access_token)?;
        self.fetch(request, "Failed to fetch draft").await
    }

    async fn generate_draft(
        &self,
        access_token: &str,
        request: &GenerateDraft,
    ) -> AppResult<Record> {
        let http = self
            .request(Method::POST, &["api", "v1", "blog", "generate"], access_token)?
            .json(request);
        self.fetch(http, "Failed to generate blog").await
    }

    async fn update_draft(
        &self,
        access_token: &str,
        id: &str,
        update: &DraftUpdate,
    ) -> AppResult<Record> {
        let request = self
            .request(Method::PUT, &["api", "v1", "blog", id], access_token)?
            .json(update);
        self.fetch(request, "Failed to update draft").await
    }

    async fn refine_draft(
        &self,
        access_token: &str,
        id: &str,
        request: &RefineDraft,
    ) -> AppResult<Record> {
        let http = self
            .request(Method::POST, &["api", "v1", "blog", id, "refine"], access_token)?
            .json(request);
        self.fetch(http, "Failed to refine draft").await
    }
}
