// Directory view model - client-side derivation of the table rows
//
// records -> search -> role filter -> team filter -> sort -> page

pub mod filters;
pub mod pagination;
pub mod search;
pub mod sort;
pub mod view_model;

pub use sort::{SortColumn, SortDirection, SortState};
pub use view_model::{DirectoryView, Page};
