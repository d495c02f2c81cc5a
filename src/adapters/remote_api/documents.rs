use async_trait::async_trait;
use reqwest::{
    Method,
    multipart::{Form, Part},
};
use serde_json::Value;

use super::{HttpContentGateway, records_in};
use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::documents::DocumentsGateway,
    domain::entities::content::{Record, Upload},
};

#[async_trait]
impl DocumentsGateway for HttpContentGateway {
    async fn list_documents(&self, access_token: &str) -> AppResult<Vec<Record>> {
        let request = self.request(Method::GET, &["api", "v1", "documents"], access_token)?;
        let body: Value = self.fetch(request, "Failed to fetch documents").await?;
        Ok(records_in(body, "documents"))
    }

    async fn get_document(&self, access_token: &str, id: &str) -> AppResult<Record> {
        let request = self.request(Method::GET, &["api", "v1", "documents", id], access_token)?;
        self.fetch(request, "Failed to fetch document").await
    }

    async fn upload_document(&self, access_token: &str, upload: &Upload) -> AppResult<Record> {
        let mut part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
        if let Some(content_type) = &upload.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|_| AppError::InvalidInput("Invalid content type".into()))?;
        }

        let request = self
            .request(
                Method::POST,
                &["api", "v1", "documents", "upload"],
                access_token,
            )?
            .multipart(Form::new().part("file", part));
        self.fetch(request, "Failed to upload document").await
    }

    async fn delete_document(&self, access_token: &str, id: &str) -> AppResult<()> {
        let request =
            self.request(Method::DELETE, &["api", "v1", "documents", id], access_token)?;
        self.send(request, "Failed to delete document").await?;
        Ok(())
    }
}
