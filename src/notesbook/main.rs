use clap::Parser;
use colored::*;
use log::warn;
use notesbook::api::{CmdMessage, ConfigAction, MessageLevel, NotesApi};
use notesbook::config::{self, NotesConfig, NOTES_FILE_KEY};
use notesbook::error::Result;
use notesbook::model::Record;
use notesbook::store::fs::FileStore;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> Result<()> {
    let mut api = init_api()?;

    match cli.command {
        Some(Commands::Add { body, tags }) => handle_add(&mut api, body, tags),
        Some(Commands::List) | None => handle_list(&api),
        Some(Commands::View { ids }) => handle_view(&api, ids),
        Some(Commands::Search { tag }) => handle_search(&api, tag),
        Some(Commands::Tag { id, tags }) => handle_tag(&mut api, id, tags),
        Some(Commands::Untag { id, tags }) => handle_untag(&mut api, id, tags),
        Some(Commands::Edit { id, body }) => handle_edit(&mut api, id, body),
        Some(Commands::Delete { ids }) => handle_delete(&mut api, ids),
        Some(Commands::Path) => handle_path(&api),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
    }
}

fn init_api() -> Result<NotesApi<FileStore>> {
    let data_dir = config::data_dir()?;
    let config = NotesConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!("ignoring unreadable config in {}: {}", data_dir.display(), e);
        NotesConfig::default()
    });

    let store = FileStore::new(config.notes_path(&data_dir));
    NotesApi::new(store, data_dir)
}

fn handle_add(api: &mut NotesApi<FileStore>, body: String, tags: Vec<String>) -> Result<()> {
    let result = api.create_note(&body, &tags)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &NotesApi<FileStore>) -> Result<()> {
    let result = api.list_notes()?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &NotesApi<FileStore>, ids: Vec<String>) -> Result<()> {
    let result = api.view_notes(&ids)?;
    print_full_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(api: &NotesApi<FileStore>, tag: String) -> Result<()> {
    let result = api.search_tag(&tag)?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_tag(api: &mut NotesApi<FileStore>, id: String, tags: Vec<String>) -> Result<()> {
    let result = api.add_tags(&id, &tags)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_untag(api: &mut NotesApi<FileStore>, id: String, tags: Vec<String>) -> Result<()> {
    let result = api.remove_tags(&id, &tags)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(api: &mut NotesApi<FileStore>, id: String, body: String) -> Result<()> {
    let result = api.update_note(&id, &body)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut NotesApi<FileStore>, ids: Vec<String>) -> Result<()> {
    let result = api.delete_notes(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(api: &NotesApi<FileStore>) -> Result<()> {
    if let Some(path) = api.notes_location() {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(
    api: &NotesApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            println!("{} = {}", NOTES_FILE_KEY, config.notes_file);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

fn print_full_records(records: &[Record]) {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{} {}", record.id().yellow(), join_tags(record).cyan());
        println!("--------------------------------");
        println!("{}", record.body());
    }
}

const LINE_WIDTH: usize = 100;

fn print_records(records: &[Record]) {
    for record in records {
        let id_str = format!("{:>4}. ", record.id());
        let tags = join_tags(record);
        let tags_str = if tags.is_empty() {
            String::new()
        } else {
            format!("{} ", tags)
        };

        let preview: String = record
            .body()
            .value()
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        let available = LINE_WIDTH.saturating_sub(id_str.width() + tags_str.width());
        let preview = truncate_to_width(&preview, available);

        println!("{}{}{}", id_str.yellow(), tags_str.cyan(), preview);
    }
}

fn join_tags(record: &Record) -> String {
    record
        .tags()
        .iter()
        .map(|t| t.value())
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
