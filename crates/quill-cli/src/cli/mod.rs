use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `quill` binary.
#[derive(Debug, Parser)]
#[command(
    name = "quill",
    version,
    about = "Quill - topic-driven newsletter content generation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project name
    #[arg(short, long, global = true, default_value = "default")]
    pub project: String,

    /// Progress bar: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
            progress: self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use quill_core::enums::ContentKind;

    use super::{Cli, Commands, OutputFormat, ProgressMode};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "quill",
            "--format",
            "raw",
            "--project",
            "weekly",
            "--verbose",
            "show",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.project, "weekly");
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Show));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["quill", "preview", "--quiet", "--progress", "off"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.progress, ProgressMode::Off);
        assert_eq!(cli.project, "default");
        assert!(matches!(cli.command, Commands::Preview));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["quill", "--format", "table", "show"]).is_err());
    }

    #[test]
    fn generate_parses_kind_list() {
        let cli = Cli::try_parse_from([
            "quill",
            "generate",
            "AI in marketing",
            "--kinds",
            "authors,newsletters",
            "--subject",
        ])
        .expect("cli should parse");

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.topic, "AI in marketing");
        assert_eq!(
            args.requested_kinds(),
            vec![ContentKind::Authors, ContentKind::Newsletters]
        );
        assert!(args.subject);
        assert!(!args.intro);
    }

    #[test]
    fn generate_defaults_to_all_kinds() {
        let cli = Cli::try_parse_from(["quill", "generate", "AI"]).expect("cli should parse");
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.requested_kinds(), ContentKind::ALL.to_vec());
    }

    #[test]
    fn header_only_targets_no_kinds() {
        let cli = Cli::try_parse_from(["quill", "generate", "AI", "--header-only", "--intro"])
            .expect("cli should parse");
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.requested_kinds().is_empty());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(Cli::try_parse_from(["quill", "generate", "AI", "--kinds", "videos"]).is_err());
    }

    #[test]
    fn check_link_requires_a_url() {
        assert!(Cli::try_parse_from(["quill", "check-link"]).is_err());
        let cli = Cli::try_parse_from(["quill", "check-link", "https://a.example", "https://b.example"])
            .expect("cli should parse");
        let Commands::CheckLink(args) = cli.command else {
            panic!("expected check-link");
        };
        assert_eq!(args.urls.len(), 2);
    }
}
