use std::collections::BTreeSet;

use crate::directory::filters::{filter_by_role, filter_by_team};
use crate::directory::pagination::{clamp_page, page_count, page_slice};
use crate::directory::search::search;
use crate::directory::sort::{SortColumn, SortState, sort_records};
use crate::types::dto::user::UserRecord;

/// One rendered page of the directory table
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub rows: Vec<&'a UserRecord>,
    pub page_index: usize,
    pub page_count: usize,
    /// Records left after search and filters, across all pages
    pub filtered_count: usize,
}

/// Table state over the full record set
///
/// Rows are derived on demand: search, role filter, team filter, sort, then
/// pagination. Search and filter changes return to the first page; reloads
/// and page-size changes keep the page index but clamp it into range.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    records: Vec<UserRecord>,
    search: String,
    roles: BTreeSet<String>,
    teams: BTreeSet<String>,
    sort: Option<SortState>,
    page_index: usize,
    page_size: usize,
}

impl DirectoryView {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            search: String::new(),
            roles: BTreeSet::new(),
            teams: BTreeSet::new(),
            sort: None,
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn selected_roles(&self) -> &BTreeSet<String> {
        &self.roles
    }

    pub fn selected_teams(&self) -> &BTreeSet<String> {
        &self.teams
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the record set after a fetch
    pub fn set_records(&mut self, records: Vec<UserRecord>) {
        self.records = records;
        self.clamp_page_index();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page_index = 0;
    }

    pub fn set_roles<I, S>(&mut self, roles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self.page_index = 0;
    }

    /// Add the role to the selection, or remove it when already selected
    pub fn toggle_role(&mut self, role: &str) {
        if !self.roles.remove(role) {
            self.roles.insert(role.to_string());
        }
        self.page_index = 0;
    }

    pub fn set_teams<I, S>(&mut self, teams: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.teams = teams.into_iter().map(Into::into).collect();
        self.page_index = 0;
    }

    pub fn toggle_team(&mut self, team: &str) {
        if !self.teams.remove(team) {
            self.teams.insert(team.to_string());
        }
        self.page_index = 0;
    }

    /// Drop search and filters
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.roles.clear();
        self.teams.clear();
        self.page_index = 0;
    }

    /// Click on a column header
    pub fn sort_by(&mut self, column: SortColumn) -> SortState {
        let state = SortState::toggled(self.sort, column);
        self.sort = Some(state);
        state
    }

    pub fn set_sort(&mut self, sort: Option<SortState>) {
        self.sort = sort;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.clamp_page_index();
    }

    /// Go to a page; out-of-range indices land on the last page
    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
        self.clamp_page_index();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page_index.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page_index.saturating_sub(1));
    }

    /// Records after search, filters and sort, before pagination
    pub fn filtered(&self) -> Vec<&UserRecord> {
        let rows: Vec<&UserRecord> = self.records.iter().collect();
        let rows = search(rows, &self.search);
        let rows = filter_by_role(rows, &self.roles);
        let mut rows = filter_by_team(rows, &self.teams);
        sort_records(&mut rows, self.sort);
        rows
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered().len(), self.page_size)
    }

    /// The rows to display for the current state
    pub fn page(&self) -> Page<'_> {
        let filtered = self.filtered();
        let count = page_count(filtered.len(), self.page_size);
        let page_index = clamp_page(self.page_index, count);

        Page {
            rows: page_slice(&filtered, page_index, self.page_size).to_vec(),
            page_index,
            page_count: count,
            filtered_count: filtered.len(),
        }
    }

    fn clamp_page_index(&mut self) {
        self.page_index = clamp_page(self.page_index, self.page_count());
    }
}

impl Default for DirectoryView {
    fn default() -> Self {
        Self::new(10)
    }
}
