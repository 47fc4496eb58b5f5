use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "verlog",
    about = "Versioned changelogs for any folder of files",
    version,
)]
pub struct Cli {
    /// Running with no subcommand takes a checkpoint of the current
    /// directory.
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start tracking the current directory
    Init,
    /// Show pending changes without checkpointing
    Status,
    /// Show the current version and tracked files
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_invocation_defaults_to_checkpoint() {
        let cli = Cli::try_parse_from(["verlog"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_init() {
        let cli = Cli::try_parse_from(["verlog", "init"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Init)));
    }

    #[test]
    fn parse_status() {
        let cli = Cli::try_parse_from(["verlog", "status"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Status)));
    }

    #[test]
    fn parse_show() {
        let cli = Cli::try_parse_from(["verlog", "show"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Show)));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["verlog", "--verbose"]).unwrap();
        assert!(cli.verbose);
        let cli = Cli::try_parse_from(["verlog", "-v", "status"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["verlog", "frobnicate"]).is_err());
    }
}
