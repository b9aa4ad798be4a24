use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notesbook")]
#[command(about = "Tagged notes for the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    #[command(alias = "n")]
    Add {
        /// Text of the note (1 to 300 characters)
        body: String,

        /// Tags for the note, e.g. -t '#work' -t '#todo'
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// List all notes
    #[command(alias = "ls")]
    List,

    /// View one or more notes
    #[command(alias = "v")]
    View {
        /// Ids of the notes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Find notes carrying a tag
    #[command(alias = "s")]
    Search {
        /// Tag to look for, e.g. '#work'
        tag: String,
    },

    /// Add tags to a note
    Tag {
        /// Id of the note
        id: String,

        /// Tags to add
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Remove tags from a note
    Untag {
        /// Id of the note
        id: String,

        /// Tags to remove
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,
    },

    /// Replace the text of a note
    #[command(alias = "e")]
    Edit {
        /// Id of the note
        id: String,

        /// New text
        body: String,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Ids of the notes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Print the path of the notes file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., notes-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
