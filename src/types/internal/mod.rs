// Domain types shared by coordinators, stores and the client
pub mod options;
pub mod user;
