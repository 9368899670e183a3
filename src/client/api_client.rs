use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::client::errors::ClientError;
use crate::client::forms::{CreateUserForm, EditUserForm};
use crate::types::dto::common::MessageResponse;
use crate::types::dto::user::{DeleteUserRequest, UserRecord, UserResponse, UsersResponse};
use crate::types::internal::user::ImageUpload;

/// HTTP client for the directory endpoints
#[derive(Clone, Debug)]
pub struct DirectoryClient {
    client: Client,
    base_url: String,
}

/// Only the message of an error body is shown to users
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        tracing::debug!("Directory client targeting {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// The full record list
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>, ClientError> {
        let response = self.client.post(self.url("fetch-users")).send().await?;
        let body: UsersResponse = parse_response(response).await?;

        Ok(body.users)
    }

    pub async fn add_user(
        &self,
        form: &CreateUserForm,
        image: Option<ImageUpload>,
    ) -> Result<UserRecord, ClientError> {
        let mut multipart = Form::new()
            .text("name", form.name.clone())
            .text("email", form.email.clone())
            .text("workEmail", form.work_email.clone())
            .text("gender", form.gender.clone())
            .text("nationality", form.nationality.clone())
            .text("contact", form.contact.to_string())
            .text("role", form.role.clone())
            .text("teams", form.teams.join(","));

        if let Some(status) = &form.status {
            multipart = multipart.text("status", status.clone());
        }
        if let Some(date_of_birth) = form.date_of_birth {
            multipart = multipart.text("dateOfBirth", date_of_birth.format("%Y-%m-%d").to_string());
        }
        let multipart = attach_image(multipart, image)?;

        let response = self
            .client
            .post(self.url("add-user"))
            .multipart(multipart)
            .send()
            .await?;
        let body: UserResponse = parse_response(response).await?;

        Ok(body.user)
    }

    pub async fn edit_user(
        &self,
        id: &str,
        form: &EditUserForm,
        image: Option<ImageUpload>,
    ) -> Result<UserRecord, ClientError> {
        let multipart = Form::new()
            .text("_id", id.to_string())
            .text("name", form.name.clone())
            .text("email", form.email.clone())
            .text("role", form.role.clone())
            .text("status", form.status.clone())
            .text("teams", form.teams.join(","));
        let multipart = attach_image(multipart, image)?;

        let response = self
            .client
            .post(self.url("edit-user"))
            .multipart(multipart)
            .send()
            .await?;
        let body: UserResponse = parse_response(response).await?;

        Ok(body.user)
    }

    /// Returns the server's confirmation message
    pub async fn delete_user(&self, id: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.url("delete-user"))
            .json(&DeleteUserRequest {
                id: Some(id.to_string()),
            })
            .send()
            .await?;
        let body: MessageResponse = parse_response(response).await?;

        Ok(body.message)
    }
}

fn attach_image(form: Form, image: Option<ImageUpload>) -> Result<Form, ClientError> {
    let Some(image) = image else {
        return Ok(form);
    };

    let mut part = Part::bytes(image.bytes)
        .file_name(image.file_name.unwrap_or_else(|| "profile-pic".to_string()));
    if let Some(content_type) = image.content_type {
        part = part.mime_str(&content_type)?;
    }

    Ok(form.part("profilePic", part))
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return response.json::<T>().await.map_err(|err| {
            if err.is_decode() {
                tracing::warn!("Unreadable {} response from directory API: {}", status, err);
                ClientError::InvalidResponse {
                    status: status.as_u16(),
                    message: err.to_string(),
                }
            } else {
                ClientError::from(err)
            }
        });
    }

    let reason = || {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    };

    let message = match response.text().await {
        Ok(text) => serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or_else(|_| reason()),
        Err(err) => {
            tracing::warn!("Failed to read {} error body from directory API: {}", status, err);
            reason()
        }
    };

    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}
