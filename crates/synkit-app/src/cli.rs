use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use synkit_types::Script;

#[derive(Debug, Parser)]
#[command(
    name = "synkit",
    version,
    about = "Synonym lookup and autocomplete for English, Korean and Japanese"
)]
pub struct Cli {
    /// Config file to load instead of a profile
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Profile name under the user config folder
    #[arg(long, global = true, default_value = "main")]
    pub profile: String,

    /// Write logs as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look the word under the cursor up in the web dictionaries
    Lookup {
        #[command(flatten)]
        buffer: BufferArgs,

        /// Dictionary to use instead of detecting the script
        #[arg(long, value_enum)]
        lang: Option<Language>,
    },
    /// Look the word under the cursor up in custom dictionary files
    Dict {
        #[arg(long = "file", required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        buffer: BufferArgs,
    },
    /// Print autocomplete rows for a prefix
    Complete {
        /// Folder to index, may be repeated
        #[arg(long = "root", required = true)]
        roots: Vec<PathBuf>,

        prefix: String,
    },
}

#[derive(Debug, Args)]
pub struct BufferArgs {
    /// Buffer contents
    #[arg(long)]
    pub text: String,

    /// Cursor position in chars
    #[arg(long, default_value_t = 0)]
    pub cursor: usize,

    /// Result index to insert, -1 cancels. Prompts on stdin when absent.
    #[arg(long, allow_negative_numbers = true)]
    pub pick: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    English,
    Korean,
    Japanese,
}

impl From<Language> for Script {
    fn from(language: Language) -> Self {
        match language {
            Language::English => Script::English,
            Language::Korean => Script::Korean,
            Language::Japanese => Script::Japanese,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::parse_from([
            "synkit", "lookup", "--text", "빠르다 말", "--cursor", "2", "--lang", "korean",
            "--pick", "-1",
        ]);

        let Command::Lookup { buffer, lang } = cli.command else {
            panic!("Expected lookup command");
        };
        assert_eq!(buffer.text, "빠르다 말");
        assert_eq!(buffer.cursor, 2);
        assert_eq!(buffer.pick, Some(-1));
        assert_eq!(lang.map(Script::from), Some(Script::Korean));
        assert_eq!(cli.profile, "main");
    }

    #[test]
    fn test_parse_complete_with_globals() {
        let cli = Cli::parse_from([
            "synkit", "--json", "complete", "--root", "a", "--root", "b", "wri",
        ]);

        assert!(cli.json);
        let Command::Complete { roots, prefix } = cli.command else {
            panic!("Expected complete command");
        };
        assert_eq!(roots, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(prefix, "wri");
    }
}
