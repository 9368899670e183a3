// Command line entry points: the HTTP server and a directory client for the terminal

pub mod serve;
pub mod users;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::config::{BootstrapSettings, ClientSettings};
use crate::directory::SortColumn;

/// People directory server and client
#[derive(Parser, Debug)]
#[command(name = "people-directory")]
#[command(about = "Personnel directory service and command line client", long_about = None)]
pub struct Cli {
    /// Base URL of the directory API (overrides DIRECTORY_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API (default when no command is given)
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Browse and manage directory records through the API
    #[command(subcommand)]
    Users(UserCommands),
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Show one page of the directory table
    List(ListArgs),

    /// Show every field of one user
    Show {
        id: String,
    },

    /// Add a user
    Add(AddArgs),

    /// Edit name, email, role, status, teams or picture of a user
    Edit(EditArgs),

    /// Permanently delete a user
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive text matched against every text field
    #[arg(long)]
    pub search: Option<String>,

    /// Only these roles (repeatable)
    #[arg(long = "role")]
    pub roles: Vec<String>,

    /// Only users in at least one of these teams (repeatable)
    #[arg(long = "team")]
    pub teams: Vec<String>,

    /// Column to sort on
    #[arg(long)]
    pub sort: Option<SortColumn>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (overrides DIRECTORY_PAGE_SIZE)
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub work_email: String,

    #[arg(long)]
    pub gender: String,

    #[arg(long)]
    pub nationality: String,

    #[arg(long)]
    pub contact: i64,

    #[arg(long)]
    pub role: String,

    /// Team membership (repeatable or comma separated)
    #[arg(long = "team", value_delimiter = ',')]
    pub teams: Vec<String>,

    #[arg(long)]
    pub status: Option<String>,

    /// YYYY-MM-DD
    #[arg(long)]
    pub date_of_birth: Option<NaiveDate>,

    /// Image file to upload as profile picture
    #[arg(long)]
    pub picture: Option<PathBuf>,
}

/// Omitted fields keep their current value
#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    /// Replaces the team set (repeatable or comma separated)
    #[arg(long = "team", value_delimiter = ',')]
    pub teams: Option<Vec<String>>,

    #[arg(long)]
    pub picture: Option<PathBuf>,
}

/// Execute CLI command
///
/// Server settings are read only for `serve`, client settings only for `users`.
pub async fn execute_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        None => {
            let settings = BootstrapSettings::from_env()?;
            serve::run_server(settings).await?;
        }
        Some(Commands::Serve { port }) => {
            let mut settings = BootstrapSettings::from_env()?;
            if let Some(port) = port {
                settings = settings.with_port(port);
            }
            serve::run_server(settings).await?;
        }
        Some(Commands::Users(command)) => {
            let mut settings = ClientSettings::from_env()?;
            if let Some(api_url) = cli.api_url {
                settings = settings.with_api_url(api_url);
            }
            users::run(command, &settings).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::SortColumn;

    #[test]
    fn test_no_command_means_serve() {
        let cli = Cli::try_parse_from(["people-directory"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_list_arguments() {
        let cli = Cli::try_parse_from([
            "people-directory",
            "--api-url",
            "http://directory.local",
            "users",
            "list",
            "--search",
            "a@x",
            "--role",
            "Designer",
            "--team",
            "Design",
            "--team",
            "Tech",
            "--sort",
            "work-email",
            "--desc",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://directory.local"));
        match cli.command {
            Some(Commands::Users(UserCommands::List(args))) => {
                assert_eq!(args.search.as_deref(), Some("a@x"));
                assert_eq!(args.roles, vec!["Designer"]);
                assert_eq!(args.teams, vec!["Design", "Tech"]);
                assert_eq!(args.sort, Some(SortColumn::WorkEmail));
                assert!(args.desc);
                assert_eq!(args.page, 1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_add_accepts_comma_separated_teams() {
        let cli = Cli::try_parse_from([
            "people-directory",
            "users",
            "add",
            "--name",
            "A",
            "--email",
            "a@x.com",
            "--work-email",
            "a@corp.example",
            "--gender",
            "Female",
            "--nationality",
            "British",
            "--contact",
            "7700900123",
            "--role",
            "Product Designer",
            "--team",
            "Design,Product",
            "--date-of-birth",
            "1991-02-03",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Users(UserCommands::Add(args))) => {
                assert_eq!(args.teams, vec!["Design", "Product"]);
                assert_eq!(args.contact, 7700900123);
                assert_eq!(args.date_of_birth, NaiveDate::from_ymd_opt(1991, 2, 3));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_desc_requires_sort() {
        assert!(Cli::try_parse_from(["people-directory", "users", "list", "--desc"]).is_err());
    }

    #[test]
    fn test_serve_port() {
        let cli = Cli::try_parse_from(["people-directory", "serve", "--port", "4000"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve { port: Some(4000) })));
    }
}
