use std::path::PathBuf;

use clap::{Parser, Subcommand};
use quiz_core::StrategyChoice;
use storage::DEFAULT_COLLECTION_KEY;

#[derive(Parser, Debug)]
#[command(name = "quiz", version, about = "Flashcard quiz trainer")]
pub struct Cli {
    /// Directory holding saved question groups and settings
    #[arg(long, env = "QUIZ_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Name of the saved question group collection
    #[arg(long, env = "QUIZ_COLLECTION", default_value = DEFAULT_COLLECTION_KEY, global = true)]
    pub collection: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List question groups with their last scores (default)
    Groups,

    /// Run through one question group
    Play {
        /// Title of the group to play
        title: String,
    },

    /// Show or change the question order used by new runs
    Strategy {
        /// "sequential" or "random"; omit to show the current choice
        choice: Option<StrategyChoice>,
    },

    /// Create a new question group
    Add {
        /// Group title
        #[arg(long)]
        title: String,

        /// A question as PROMPT|ANSWER or PROMPT|ANSWER|HINT (repeatable)
        #[arg(long = "question", value_name = "PROMPT|ANSWER[|HINT]")]
        questions: Vec<String>,
    },
}
