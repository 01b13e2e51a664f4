//! CLI module for the Personal Library API

pub mod serve;

use clap::{Parser, Subcommand};

/// Personal Library API - books and reader comments over HTTP
#[derive(Parser)]
#[command(name = "library")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve(serve::ServeArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(serve::ServeArgs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["library"]).unwrap();
        assert!(cli.command.is_none());

        let Command::Serve(args) = cli.command.unwrap_or_default();
        assert!(args.host.is_none());
        assert!(args.port.is_none());
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from(["library", "serve", "--host", "127.0.0.1", "--port", "3000"])
            .unwrap();

        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(3000));
    }
}
