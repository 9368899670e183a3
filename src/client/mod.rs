// Client side of the directory: HTTP client, forms and the reload-on-mutation session

pub mod api_client;
pub mod errors;
pub mod forms;
pub mod session;

pub use api_client::DirectoryClient;
pub use errors::ClientError;
pub use forms::{CreateUserForm, EditUserForm};
pub use session::{DirectorySession, SubmitError};
