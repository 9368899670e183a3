use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::client::api_client::DirectoryClient;
use crate::client::errors::ClientError;
use crate::client::forms::{CreateUserForm, EditUserForm, error_messages};
use crate::directory::DirectoryView;
use crate::types::dto::user::UserRecord;
use crate::types::internal::user::ImageUpload;

/// Why a form submission did not go through
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("{}", error_messages(.0).join("; "))]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// A directory screen: the API client plus the table state it feeds
///
/// Every successful mutation refetches the whole record list.
pub struct DirectorySession {
    client: DirectoryClient,
    view: DirectoryView,
}

impl DirectorySession {
    pub fn new(client: DirectoryClient, page_size: usize) -> Self {
        Self {
            client,
            view: DirectoryView::new(page_size),
        }
    }

    pub fn view(&self) -> &DirectoryView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut DirectoryView {
        &mut self.view
    }

    pub fn client(&self) -> &DirectoryClient {
        &self.client
    }

    pub async fn reload(&mut self) -> Result<(), ClientError> {
        let users = self.client.fetch_users().await?;
        tracing::debug!("Loaded {} users", users.len());
        self.view.set_records(users);
        Ok(())
    }

    /// Record with the given id from the last reload
    pub fn find(&self, id: &str) -> Option<&UserRecord> {
        self.view.records().iter().find(|record| record.id == id)
    }

    pub async fn create(
        &mut self,
        form: CreateUserForm,
        image: Option<ImageUpload>,
    ) -> Result<UserRecord, SubmitError> {
        form.validate()?;

        let user = self.client.add_user(&form, image).await?;
        self.reload().await?;

        Ok(user)
    }

    pub async fn edit(
        &mut self,
        id: &str,
        form: EditUserForm,
        image: Option<ImageUpload>,
    ) -> Result<UserRecord, SubmitError> {
        form.validate()?;

        let user = self.client.edit_user(id, &form, image).await?;
        self.reload().await?;

        Ok(user)
    }

    pub async fn delete(&mut self, id: &str) -> Result<String, ClientError> {
        let message = self.client.delete_user(id).await?;
        self.reload().await?;

        Ok(message)
    }
}
