//! HTTP controllers.
//!
//! Controllers stay thin: extract and validate the request shape, run the
//! auth guard, delegate to a service and serialize the result. Business rules
//! live in the service layer.

pub mod admin;
pub mod auth;
pub mod media;
pub mod notification;
pub mod post;
pub mod route;
pub mod user;

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::error::AppError;

/// One uploaded file from a multipart form.
pub struct UploadedFile {
    pub field: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A fully read multipart form: text fields by name, files in submission
/// order. Repeated text fields keep the last value; repeated file fields
/// (post images) are all kept.
#[derive(Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub files: Vec<UploadedFile>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = MultipartForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(filename) => {
                    let bytes = field.bytes().await?.to_vec();
                    form.files.push(UploadedFile {
                        field: name,
                        filename,
                        bytes,
                    });
                }
                None => {
                    let value = field.text().await?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Whether a flag field was submitted truthy ("1", "true", "True",
    /// "yes").
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.text(name), Some("1" | "true" | "True" | "yes"))
    }

    pub fn files_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a UploadedFile> {
        self.files.iter().filter(move |file| file.field == name)
    }

    pub fn file_named<'a>(&'a self, name: &'a str) -> Option<&'a UploadedFile> {
        self.files_named(name).next()
    }
}

/// Parses an optional numeric text field, naming the field in the error.
fn parse_field<T: std::str::FromStr>(form: &MultipartForm, name: &str) -> Result<Option<T>, AppError> {
    match form.text(name) {
        None => Ok(None),
        Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| AppError::Validation {
            field: name.to_string(),
            message: format!("Invalid value for '{}'.", name),
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flags_accept_common_truthy_spellings() {
        let mut form = MultipartForm::default();
        form.fields.insert("clear_profile_pic".to_string(), "1".to_string());
        form.fields.insert("clear_cover_pic".to_string(), "false".to_string());

        assert!(form.flag("clear_profile_pic"));
        assert!(!form.flag("clear_cover_pic"));
        assert!(!form.flag("missing"));
    }

    #[test]
    fn parse_field_treats_empty_as_absent() {
        let mut form = MultipartForm::default();
        form.fields.insert("distance".to_string(), String::new());
        form.fields.insert("hours".to_string(), "12.5".to_string());
        form.fields.insert("bad".to_string(), "abc".to_string());

        assert_eq!(parse_field::<f64>(&form, "distance").ok(), Some(None));
        assert_eq!(parse_field::<f64>(&form, "hours").ok(), Some(Some(12.5)));
        assert!(parse_field::<f64>(&form, "bad").is_err());
    }
}
