use chrono::NaiveDate;
use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};
use serde::{Deserialize, Serialize};

use crate::errors::InternalError;
use crate::types::db::user;
use crate::types::internal::user::{CreateUserInput, ImageUpload, UpdateUserInput};

/// A directory entry as exchanged with clients
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server-assigned identifier (UUID)
    #[oai(rename = "_id")]
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    /// Personal email, unique across the directory
    pub email: String,

    pub work_email: String,
    pub gender: String,
    pub nationality: String,
    pub contact: i64,
    pub role: String,

    /// Team memberships, never duplicated
    pub teams: Vec<String>,

    /// Active, Inactive or Do Not Disturb
    pub status: String,

    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,

    /// URL of the stored profile picture
    #[serde(default)]
    pub profile_pic: Option<String>,
}

impl TryFrom<user::Model> for UserRecord {
    type Error = InternalError;

    fn try_from(model: user::Model) -> Result<Self, Self::Error> {
        let teams: Vec<String> = serde_json::from_str(&model.teams)
            .map_err(|e| InternalError::parse("teams", e.to_string()))?;

        Ok(Self {
            id: model.id,
            name: model.name,
            email: model.email,
            work_email: model.work_email,
            gender: model.gender,
            nationality: model.nationality,
            contact: model.contact,
            role: model.role,
            teams,
            status: model.status,
            date_of_birth: model.date_of_birth,
            profile_pic: model.profile_pic,
        })
    }
}

/// Multipart form for creating a user
///
/// Every field is optional at the transport level so that missing values
/// surface as validation errors with a readable message.
#[derive(Multipart, Debug)]
pub struct CreateUserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    #[oai(rename = "workEmail")]
    pub work_email: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub contact: Option<String>,
    pub role: Option<String>,
    /// Repeated fields or a single comma-joined value
    pub teams: Vec<String>,
    pub status: Option<String>,
    #[oai(rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,
    #[oai(rename = "profilePic")]
    pub profile_pic: Option<Upload>,
}

impl CreateUserPayload {
    /// Read the uploaded image (if any) and hand the fields to the domain layer
    pub async fn into_input(self) -> Result<CreateUserInput, InternalError> {
        let image = read_upload(self.profile_pic).await?;

        Ok(CreateUserInput {
            name: self.name,
            email: self.email,
            work_email: self.work_email,
            gender: self.gender,
            nationality: self.nationality,
            contact: self.contact,
            role: self.role,
            teams: self.teams,
            status: self.status,
            date_of_birth: self.date_of_birth,
            image,
        })
    }
}

/// Multipart form for editing a user
#[derive(Multipart, Debug)]
pub struct UpdateUserPayload {
    #[oai(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub teams: Vec<String>,
    #[oai(rename = "profilePic")]
    pub profile_pic: Option<Upload>,
}

impl UpdateUserPayload {
    pub async fn into_input(self) -> Result<UpdateUserInput, InternalError> {
        let image = read_upload(self.profile_pic).await?;

        Ok(UpdateUserInput {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            status: self.status,
            teams: self.teams,
            image,
        })
    }
}

async fn read_upload(upload: Option<Upload>) -> Result<Option<ImageUpload>, InternalError> {
    let Some(upload) = upload else {
        return Ok(None);
    };

    let file_name = upload.file_name().map(str::to_string);
    let content_type = upload.content_type().map(str::to_string);
    let bytes = upload
        .into_vec()
        .await
        .map_err(|e| InternalError::parse("profilePic", e.to_string()))?;

    // Browsers send an empty part when no file was picked
    if bytes.is_empty() {
        return Ok(None);
    }

    Ok(Some(ImageUpload {
        file_name,
        content_type,
        bytes,
    }))
}

/// Request model for deleting a user
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    /// Identifier of the user to remove
    #[oai(rename = "_id")]
    #[serde(rename = "_id")]
    pub id: Option<String>,
}

/// Response model for the user list
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub message: String,
    pub users: Vec<UserRecord>,
}

/// Response model for a created or updated user
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub message: String,
    pub user: UserRecord,
}
