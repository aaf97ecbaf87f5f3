use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qrdaily", bin_name = "qrdaily", version)]
#[command(about = "Daily puzzles and scan history", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding qrdaily's data (defaults to $QRDAILY_DATA or the OS data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's puzzle
    #[command(alias = "p")]
    Puzzle {
        /// Also show the hint
        #[arg(long)]
        hint: bool,
    },

    /// Answer the current puzzle and count it towards the streak
    #[command(alias = "s")]
    Solve {
        /// Your answer (omit to mark the puzzle solved without checking)
        #[arg(num_args = 0..)]
        answer: Vec<String>,

        /// Show the answer and explanation afterwards
        #[arg(long)]
        reveal: bool,
    },

    /// Move on to the next puzzle
    Next,

    /// Show the current streak
    Streak,

    /// List solved puzzles, most recent first
    Archive {
        #[command(subcommand)]
        action: Option<ArchiveAction>,
    },

    /// Show profile statistics
    Profile,

    /// Record a scanned code
    Scan {
        /// The decoded payload
        data: String,

        /// Symbology of the code
        #[arg(long = "type", value_name = "TYPE", default_value = "qr")]
        kind: String,
    },

    /// Show or edit the scan history
    #[command(alias = "h")]
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Show or set the daily reminder opt-in
    Notifications {
        state: Option<Toggle>,
    },

    /// Get or set configuration values
    Config {
        /// Config key (reminder-time, show-hints, catalog)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ArchiveAction {
    /// Delete all solved puzzles and reset the streak
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// Delete one entry by id
    #[command(alias = "rm")]
    Delete { id: String },

    /// Delete all entries
    Clear,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_multi_word_answer() {
        let cli = Cli::parse_from(["qrdaily", "solve", "a", "piano", "--reveal"]);
        match cli.command {
            Some(Commands::Solve { answer, reveal }) => {
                assert_eq!(answer, vec!["a", "piano"]);
                assert!(reveal);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_scan_with_type() {
        let cli = Cli::parse_from(["qrdaily", "scan", "4006381333931", "--type", "ean13"]);
        match cli.command {
            Some(Commands::Scan { data, kind }) => {
                assert_eq!(data, "4006381333931");
                assert_eq!(kind, "ean13");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_history_delete_and_global_data_dir() {
        let cli = Cli::parse_from(["qrdaily", "history", "delete", "abc", "--data-dir", "/tmp/x"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(
            cli.command,
            Some(Commands::History {
                action: Some(HistoryAction::Delete { .. })
            })
        ));
    }

    #[test]
    fn parses_notifications_toggle() {
        let cli = Cli::parse_from(["qrdaily", "notifications", "on"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Notifications {
                state: Some(Toggle::On)
            })
        ));
    }

    #[test]
    fn parses_archive_clear() {
        let cli = Cli::parse_from(["qrdaily", "archive", "clear"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Archive {
                action: Some(ArchiveAction::Clear)
            })
        ));
        let cli = Cli::parse_from(["qrdaily", "archive"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Archive { action: None })
        ));
    }
}
