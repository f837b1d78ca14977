//! Multipart form collection shared by the upload-carrying handlers.

use std::collections::HashMap;

use axum::extract::multipart::Multipart;
use hrms_core::error::CoreError;
use hrms_core::types::{DbId, Money};

use crate::error::{AppError, AppResult};

/// Text fields and file parts drained from a multipart request body.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
}

impl FormData {
    /// Drain a multipart stream. Parts with a filename (or a content type)
    /// are collected as files, everything else as text fields.
    pub async fn read(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = FormData::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            if field.file_name().is_some() || field.content_type().is_some() {
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read upload '{name}': {e}"))
                })?;
                form.files.insert(name, bytes.to_vec());
            } else {
                let value = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read field '{name}': {e}"))
                })?;
                form.fields.insert(name, value);
            }
        }
        Ok(form)
    }

    /// A required text field.
    pub fn require(&self, name: &str) -> AppResult<&str> {
        self.fields.get(name).map(String::as_str).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!("Field '{name}' is required")))
        })
    }

    /// An optional text field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// A required id field.
    pub fn require_id(&self, name: &str) -> AppResult<DbId> {
        self.require(name)?.parse::<DbId>().map_err(|_| {
            AppError::Core(CoreError::Validation(format!(
                "Field '{name}' must be an integer id"
            )))
        })
    }

    /// An optional id field.
    pub fn id(&self, name: &str) -> AppResult<Option<DbId>> {
        match self.fields.get(name) {
            None => Ok(None),
            Some(_) => self.require_id(name).map(Some),
        }
    }

    /// A required money field (integer centavos).
    pub fn require_money(&self, name: &str) -> AppResult<Money> {
        self.require(name)?.parse::<Money>().map_err(|_| {
            AppError::Core(CoreError::Validation(format!(
                "Field '{name}' must be an integer amount in centavos"
            )))
        })
    }

    /// A money field defaulting to zero when absent.
    pub fn money_or_zero(&self, name: &str) -> AppResult<Money> {
        match self.fields.get(name) {
            None => Ok(0),
            Some(_) => self.require_money(name),
        }
    }

    /// An optional file part.
    pub fn file(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }

    /// A required file part.
    pub fn require_file(&self, name: &str) -> AppResult<&[u8]> {
        self.file(name).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!("File '{name}' is required")))
        })
    }
}
