//! In-memory stand-in for the remote document and draft endpoints.

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::{documents::DocumentsGateway, drafts::DraftsGateway},
    domain::entities::content::{DraftUpdate, GenerateDraft, Record, RefineDraft, Upload},
};

/// One recorded gateway call.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCall {
    pub op: &'static str,
    pub access_token: String,
    pub target: Option<String>,
}

/// Makes every call fail the way the HTTP gateway would.
#[derive(Debug, Clone, Copy)]
pub enum ContentFailure {
    /// The remote answered 401.
    Unauthorized,
    /// The remote answered 500.
    Rejected,
    Unreachable,
}

impl ContentFailure {
    fn to_error(self) -> AppError {
        match self {
            ContentFailure::Unauthorized => AppError::InvalidCredentials,
            ContentFailure::Rejected => AppError::RemoteRejected("Request failed".into()),
            ContentFailure::Unreachable => AppError::Upstream("connection refused".into()),
        }
    }
}

#[derive(Default)]
pub struct StubContentGateway {
    documents: Mutex<Vec<Record>>,
    drafts: Mutex<Vec<Record>>,
    failure: Mutex<Option<ContentFailure>>,
    calls: Mutex<Vec<ContentCall>>,
    uploads: Mutex<Vec<Upload>>,
    generated: Mutex<Vec<GenerateDraft>>,
    updates: Mutex<Vec<(String, DraftUpdate)>>,
}

impl StubContentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(self, documents: Vec<Record>) -> Self {
        *self.documents.lock().unwrap() = documents;
        self
    }

    pub fn with_drafts(self, drafts: Vec<Record>) -> Self {
        *self.drafts.lock().unwrap() = drafts;
        self
    }

    pub fn failing_with(self, failure: ContentFailure) -> Self {
        *self.failure.lock().unwrap() = Some(failure);
        self
    }

    pub fn calls(&self) -> Vec<ContentCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn generated(&self) -> Vec<GenerateDraft> {
        self.generated.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<(String, DraftUpdate)> {
        self.updates.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str, access_token: &str, target: Option<&str>) -> AppResult<()> {
        self.calls.lock().unwrap().push(ContentCall {
            op,
            access_token: access_token.to_string(),
            target: target.map(str::to_string),
        });
        match *self.failure.lock().unwrap() {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

fn find(records: &Mutex<Vec<Record>>, id: &str, what: &str) -> AppResult<Record> {
    records
        .lock()
        .unwrap()
        .iter()
        .find(|record| record["id"] == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("{what} not found")))
}

#[async_trait]
impl DocumentsGateway for StubContentGateway {
    async fn list_documents(&self, access_token: &str) -> AppResult<Vec<Record>> {
        self.record("list_documents", access_token, None)?;
        Ok(self.documents.lock().unwrap().clone())
    }

    async fn get_document(&self, access_token: &str, id: &str) -> AppResult<Record> {
        self.record("get_document", access_token, Some(id))?;
        find(&self.documents, id, "Document")
    }

    async fn upload_document(&self, access_token: &str, upload: &Upload) -> AppResult<Record> {
        self.record("upload_document", access_token, Some(upload.file_name.as_str()))?;
        self.uploads.lock().unwrap().push(upload.clone());
        Ok(json!({
            "id": "doc-new",
            "filename": upload.file_name,
            "size": upload.bytes.len(),
        }))
    }

    async fn delete_document(&self, access_token: &str, id: &str) -> AppResult<()> {
        self.record("delete_document", access_token, Some(id))
    }
}

#[async_trait]
impl DraftsGateway for StubContentGateway {
    async fn list_drafts(&self, access_token: &str) -> AppResult<Vec<Record>> {
        self.record("list_drafts", access_token, None)?;
        Ok(self.drafts.lock().unwrap().clone())
    }

    async fn get_draft(&self, access_token: &str, id: &str) -> AppResult<Record> {
        self.record("get_draft", access_token, Some(id))?;
        find(&self.drafts, id, "Draft")
    }

    async fn generate_draft(
        &self,
        access_token: &str,
        request: &GenerateDraft,
    ) -> AppResult<Record> {
        self.record("generate_draft", access_token, None)?;
        self.generated.lock().unwrap().push(request.clone());
        Ok(json!({
            "id": "draft-new",
            "title": request.title,
            "document_ids": request.document_ids,
            "status": "draft",
        }))
    }

    async fn update_draft(
        &self,
        access_token: &str,
        id: &str,
        update: &DraftUpdate,
    ) -> AppResult<Record> {
        self.record("update_draft", access_token, Some(id))?;
        self.updates
            .lock()
            .unwrap()
            .push((id.to_string(), update.clone()));

        let mut record = Map::new();
        record.insert("id".into(), Value::from(id));
        if let Value::Object(fields) = json!(update) {
            record.extend(fields);
        }
        Ok(Value::Object(record))
    }

    async fn refine_draft(
        &self,
        access_token: &str,
        id: &str,
        request: &RefineDraft,
    ) -> AppResult<Record> {
        self.record("refine_draft", access_token, Some(id))?;
        Ok(json!({ "id": id, "feedback": request.feedback }))
    }
}
