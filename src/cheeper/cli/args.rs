use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cheeper", bin_name = "cheeper", version)]
#[command(about = "A simple CLI program to manage your cheeper", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store location: file://<dir> or a directory path
    #[arg(short, long, global = true, help_heading = "Options")]
    pub store: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create and add test data
    #[command(visible_alias = "t")]
    AddTestData {
        /// Number of users to create
        num_users: usize,
    },

    /// Add a user
    #[command(visible_alias = "u")]
    CreateUser { login: String, name: String },

    /// Post a message as a user
    #[command(visible_alias = "m")]
    CreateMessage { login: String, text: String },

    /// Befriend another user
    #[command(visible_alias = "f")]
    CreateFriendship { login: String, friend: String },

    /// List the names of a user's friends
    #[command(visible_alias = "fn")]
    FriendNames { login: String },

    /// Count a user's friends
    #[command(visible_alias = "cf")]
    CountFriends { login: String },

    /// Messages a user posted between two times ("HH:MM DD-MM-YYYY")
    #[command(visible_alias = "ms")]
    Messages {
        login: String,
        start: String,
        end: String,
    },

    /// Time message writes and reads
    #[command(visible_alias = "b")]
    Bench {
        #[arg(value_enum)]
        target: BenchTarget,

        /// Request counts, one run each
        #[arg(required = true)]
        counts: Vec<usize>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BenchTarget {
    Insert,
    Read,
    All,
}
