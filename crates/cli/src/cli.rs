use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vigor",
    version,
    about = "Browse workout moves and generate a daily workout plan"
)]
pub struct Cli {
    /// Enable verbose (DEBUG) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List workout moves, filtered by search text and category
    List {
        /// Case-insensitive substring to match against move names
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category to restrict the listing to (Legs, Arms, Core or All)
        #[arg(short, long, default_value = vigor_domain::ALL)]
        category: String,

        /// Print the matching moves as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one workout move in detail
    Show {
        /// Name of the move (case-insensitive)
        name: String,

        /// Print the move as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a randomized three-exercise workout plan
    Plan {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}
