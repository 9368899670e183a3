// Users commands: the directory table and record management from the terminal

use std::io::{self, Write};
use std::path::Path;

use crate::cli::{AddArgs, EditArgs, ListArgs, UserCommands};
use crate::client::{CreateUserForm, DirectoryClient, DirectorySession, EditUserForm};
use crate::config::ClientSettings;
use crate::directory::{Page, SortDirection, SortState};
use crate::types::dto::user::UserRecord;
use crate::types::internal::user::ImageUpload;

pub async fn run(command: UserCommands, settings: &ClientSettings) -> Result<(), Box<dyn std::error::Error>> {
    let client = DirectoryClient::new(settings.api_url())?;
    let mut session = DirectorySession::new(client, settings.page_size());

    if let Err(e) = session.reload().await {
        println!("❌ {}", e.notification());
        return Err(e.into());
    }

    match command {
        UserCommands::List(args) => list_users(&mut session, args),
        UserCommands::Show { id } => show_user(&session, &id),
        UserCommands::Add(args) => add_user(&mut session, args).await,
        UserCommands::Edit(args) => edit_user(&mut session, args).await,
        UserCommands::Delete { id, yes } => delete_user(&mut session, &id, yes).await,
    }
}

fn list_users(session: &mut DirectorySession, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let view = session.view_mut();

    if let Some(page_size) = args.page_size {
        view.set_page_size(page_size);
    }
    view.set_search(args.search.unwrap_or_default());
    view.set_roles(args.roles);
    view.set_teams(args.teams);
    view.set_sort(args.sort.map(|column| SortState {
        column,
        direction: if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        },
    }));
    view.set_page(args.page.saturating_sub(1));

    print!("{}", render_page(&view.page()));

    Ok(())
}

fn show_user(session: &DirectorySession, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let Some(user) = session.find(id) else {
        println!("❌ User not found: {}", id);
        return Err("User not found".into());
    };

    print!("{}", render_details(user));

    Ok(())
}

async fn add_user(session: &mut DirectorySession, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let image = match &args.picture {
        Some(path) => Some(load_image(path).await?),
        None => None,
    };

    let form = CreateUserForm {
        name: args.name,
        email: args.email,
        work_email: args.work_email,
        gender: args.gender,
        nationality: args.nationality,
        contact: args.contact,
        role: args.role,
        teams: args.teams,
        status: args.status,
        date_of_birth: args.date_of_birth,
    };

    match session.create(form, image).await {
        Ok(user) => {
            println!("✅ User Added Successfully");
            print!("{}", render_details(&user));
            Ok(())
        }
        Err(e) => {
            println!("❌ {}", e);
            Err(e.into())
        }
    }
}

async fn edit_user(session: &mut DirectorySession, args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let Some(current) = session.find(&args.id) else {
        println!("❌ User not found: {}", args.id);
        return Err("User not found".into());
    };

    let mut form = EditUserForm::from_record(current);
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(email) = args.email {
        form.email = email;
    }
    if let Some(role) = args.role {
        form.role = role;
    }
    if let Some(status) = args.status {
        form.status = status;
    }
    if let Some(teams) = args.teams {
        form.teams = teams;
    }

    let image = match &args.picture {
        Some(path) => Some(load_image(path).await?),
        None => None,
    };

    match session.edit(&args.id, form, image).await {
        Ok(user) => {
            println!("✅ User updated successfully.");
            print!("{}", render_details(&user));
            Ok(())
        }
        Err(e) => {
            println!("❌ {}", e);
            Err(e.into())
        }
    }
}

async fn delete_user(
    session: &mut DirectorySession,
    id: &str,
    skip_confirmation: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !skip_confirmation {
        let label = session
            .find(id)
            .map(|user| format!("{} <{}>", user.name, user.email))
            .unwrap_or_else(|| id.to_string());

        print!("⚠️  Delete {}? This cannot be undone. (yes/no): ", label);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if input.trim().to_lowercase() != "yes" {
            println!("❌ Deletion cancelled.");
            return Ok(());
        }
    }

    match session.delete(id).await {
        Ok(message) => {
            println!("✅ {}", message);
            Ok(())
        }
        Err(e) => {
            println!("❌ {}", e.notification());
            Err(e.into())
        }
    }
}

/// Read an image file, guessing the content type from its extension
async fn load_image(path: &Path) -> Result<ImageUpload, Box<dyn std::error::Error>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());
    let content_type = match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    };

    Ok(ImageUpload {
        file_name: path.file_name().and_then(|name| name.to_str()).map(str::to_string),
        content_type: Some(content_type.to_string()),
        bytes,
    })
}

const COLUMNS: [&str; 6] = ["ID", "Name", "Email", "Role", "Teams", "Status"];

fn row_cells(user: &UserRecord) -> [String; 6] {
    [
        user.id.clone(),
        user.name.clone(),
        user.email.clone(),
        user.role.clone(),
        user.teams.join(", "),
        user.status.clone(),
    ]
}

/// Plain-text table with a page footer
pub fn render_page(page: &Page<'_>) -> String {
    let rows: Vec<[String; 6]> = page.rows.iter().map(|user| row_cells(user)).collect();

    let mut widths = COLUMNS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = String::new();
    let headers: Vec<String> = COLUMNS.iter().map(|h| h.to_string()).collect();
    out.push_str(&format_line(&headers));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format_line(&rule));

    if rows.is_empty() {
        out.push_str("No users found.\n");
    }
    for row in &rows {
        out.push_str(&format_line(row));
    }

    let shown_page = if page.page_count == 0 { 0 } else { page.page_index + 1 };
    out.push_str(&format!(
        "Page {} of {} ({} users)\n",
        shown_page, page.page_count, page.filtered_count
    ));

    out
}

/// Every field of a record, one per line
pub fn render_details(user: &UserRecord) -> String {
    let fields = [
        ("ID", user.id.clone()),
        ("Name", user.name.clone()),
        ("Email", user.email.clone()),
        ("Work email", user.work_email.clone()),
        ("Gender", user.gender.clone()),
        ("Nationality", user.nationality.clone()),
        ("Contact", user.contact.to_string()),
        ("Role", user.role.clone()),
        ("Teams", user.teams.join(", ")),
        ("Status", user.status.clone()),
        (
            "Date of birth",
            user.date_of_birth
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Profile picture", user.profile_pic.clone().unwrap_or_else(|| "-".to_string())),
    ];

    fields
        .iter()
        .map(|(label, value)| format!("   {:<16}{}\n", format!("{}:", label), value))
        .collect()
}
