use std::sync::Arc;

use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::app_data::AppData;
use crate::coordinators::UserCoordinator;
use crate::errors::UserApiError;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::user::{
    CreateUserPayload, DeleteUserRequest, UpdateUserPayload, UserResponse, UsersResponse,
};

/// Directory mutation endpoints
pub struct UserApi {
    user_coordinator: UserCoordinator,
}

impl UserApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            user_coordinator: UserCoordinator::new(app_data),
        }
    }
}

/// API tags for directory endpoints
#[derive(Tags)]
enum UserTags {
    /// Directory records
    Users,
}

#[OpenApi]
impl UserApi {
    /// List every user in the directory
    #[oai(path = "/fetch-users", method = "post", tag = "UserTags::Users")]
    async fn fetch_users(&self) -> Result<Json<UsersResponse>, UserApiError> {
        let users = self.user_coordinator.list_users().await?;

        Ok(Json(UsersResponse {
            message: "Users Fetched Successfully".to_string(),
            users,
        }))
    }

    /// Create a user from a multipart form, with an optional profile picture
    #[oai(path = "/add-user", method = "post", tag = "UserTags::Users")]
    async fn add_user(&self, payload: CreateUserPayload) -> Result<Json<UserResponse>, UserApiError> {
        let input = payload.into_input().await?;
        let user = self.user_coordinator.create_user(input).await?;

        Ok(Json(UserResponse {
            message: "User created successfully".to_string(),
            user,
        }))
    }

    /// Edit name, email, role, status and teams of a user
    ///
    /// A new profile picture replaces the old one; other fields are left as they are.
    #[oai(path = "/edit-user", method = "post", tag = "UserTags::Users")]
    async fn edit_user(&self, payload: UpdateUserPayload) -> Result<Json<UserResponse>, UserApiError> {
        let input = payload.into_input().await?;
        let user = self.user_coordinator.update_user(input).await?;

        Ok(Json(UserResponse {
            message: "User updated successfully.".to_string(),
            user,
        }))
    }

    /// Permanently remove a user
    #[oai(path = "/delete-user", method = "post", tag = "UserTags::Users")]
    async fn delete_user(
        &self,
        body: Json<DeleteUserRequest>,
    ) -> Result<Json<MessageResponse>, UserApiError> {
        self.user_coordinator.delete_user(body.0.id).await?;

        Ok(Json(MessageResponse {
            message: "User deleted successfully.".to_string(),
        }))
    }
}
