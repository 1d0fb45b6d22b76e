use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tally_config::TallyConfig;

/// Command-line flags for the `tally` binary.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "Tally - project-scoped issue tracker API")]
pub struct Cli {
    /// Extra TOML config file, merged above tally.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Listen address, overrides server.host and server.port
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Database path, overrides database.path (":memory:" allowed)
    #[arg(long)]
    pub database: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply flag overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut TallyConfig) {
        if let Some(addr) = self.bind {
            config.server.host = addr.ip().to_string();
            config.server.port = addr.port();
        }
        if let Some(path) = &self.database {
            config.database.path.clone_from(path);
        }
    }

    /// Log filter implied by `-q`/`-v`, if either was given.
    pub const fn level(&self) -> Option<&'static str> {
        if self.quiet {
            Some("error")
        } else if self.verbose {
            Some("debug")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::Cli;
    use tally_config::TallyConfig;

    #[test]
    fn clap_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_leave_config_untouched() {
        let cli = Cli::try_parse_from(["tally"]).expect("cli should parse");
        let mut config = TallyConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "tally.db");
        assert_eq!(cli.level(), None);
    }

    #[test]
    fn bind_and_database_override_config() {
        let cli = Cli::try_parse_from([
            "tally",
            "--bind",
            "127.0.0.1:8080",
            "--database",
            ":memory:",
        ])
        .expect("cli should parse");
        let mut config = TallyConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(config.database.is_in_memory());
    }

    #[test]
    fn verbosity_flags_pick_level() {
        let verbose = Cli::try_parse_from(["tally", "-v"]).expect("cli should parse");
        assert_eq!(verbose.level(), Some("debug"));

        let quiet = Cli::try_parse_from(["tally", "--quiet"]).expect("cli should parse");
        assert_eq!(quiet.level(), Some("error"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["tally", "-q", "-v"]).is_err());
    }

    #[test]
    fn bind_rejects_non_socket_address() {
        assert!(Cli::try_parse_from(["tally", "--bind", "localhost"]).is_err());
    }
}
