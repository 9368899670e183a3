/// Image received with a create or edit request
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Raw fields of a create request, validated by the user coordinator
#[derive(Debug, Clone, Default)]
pub struct CreateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub work_email: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub contact: Option<String>,
    pub role: Option<String>,
    pub teams: Vec<String>,
    pub status: Option<String>,
    pub date_of_birth: Option<String>,
    pub image: Option<ImageUpload>,
}

/// Raw fields of an edit request
///
/// Only the edit subset (name, email, role, status, teams) can change;
/// the picture is replaced when a new image is uploaded.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub teams: Vec<String>,
    pub image: Option<ImageUpload>,
}

/// A validated record ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub work_email: String,
    pub gender: String,
    pub nationality: String,
    pub contact: i64,
    pub role: String,
    pub teams: Vec<String>,
    pub status: String,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub profile_pic: Option<String>,
}

/// Validated changes applied by an edit
#[derive(Debug, Clone, PartialEq)]
pub struct UserPatch {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub teams: Vec<String>,
    /// `None` keeps the current picture
    pub profile_pic: Option<String>,
}
