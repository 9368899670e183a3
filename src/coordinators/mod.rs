// Coordinators layer - Workflow orchestration
//
// Coordinators compose store operations for specific API endpoints and own
// the request validation that decides which store calls happen.

pub mod user_coordinator;

pub use user_coordinator::UserCoordinator;
