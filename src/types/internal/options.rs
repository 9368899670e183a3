use std::fmt;
use std::str::FromStr;

/// Job titles offered by the directory forms
pub const ROLE_OPTIONS: [&str; 4] = [
    "Frontend Developer",
    "Backend Developer",
    "Product Designer",
    "Product Manager",
];

/// Teams a user can belong to (any number of them)
pub const TEAM_OPTIONS: [&str; 4] = ["Technology", "Product", "Marketing", "Design"];

pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

pub const NATIONALITY_OPTIONS: [&str; 12] = [
    "American",
    "Australian",
    "British",
    "Canadian",
    "Chinese",
    "French",
    "German",
    "Indian",
    "Japanese",
    "Russian",
    "South African",
    "Spanish",
];

/// Availability status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    DoNotDisturb,
}

impl UserStatus {
    pub const ALL: [UserStatus; 3] = [Self::Active, Self::Inactive, Self::DoNotDisturb];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::DoNotDisturb => "Do Not Disturb",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value.trim())
            .ok_or_else(|| format!("Unknown status: {}", value))
    }
}

/// Normalize raw team values into an ordered set
///
/// Accepts repeated values as well as comma-joined lists, which is what
/// browsers send when an array is appended to multipart form data.
pub fn normalize_teams<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut teams: Vec<String> = Vec::new();

    for team in raw.iter().flat_map(|value| value.as_ref().split(',')) {
        let team = team.trim();
        if !team.is_empty() && !teams.iter().any(|existing| existing == team) {
            teams.push(team.to_string());
        }
    }

    teams
}
