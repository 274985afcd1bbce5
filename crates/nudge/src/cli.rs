use clap::Parser;

/// Check a remote versions table for a newer application release.
#[derive(Debug, Parser)]
#[command(name = "nudge", version, about)]
pub struct Cli {
    /// Version to compare against (defaults to this binary's version).
    #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
    pub current: String,

    /// Base URL of the versions service.
    #[arg(long, env = "NUDGE_ENDPOINT")]
    pub endpoint: String,

    /// Table holding the published versions.
    #[arg(long, env = "NUDGE_TABLE", default_value = "app_versions")]
    pub table: String,

    /// Static API key, sent as both the apikey header and the bearer token.
    #[arg(long, env = "NUDGE_API_KEY")]
    pub api_key: String,

    /// Accept an available update without prompting and open the store page.
    #[arg(long, short = 'y')]
    pub assume_yes: bool,

    /// Enable debug logging.
    #[arg(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn parses_required_flags() {
        let cli = parse(&[
            "nudge",
            "--endpoint",
            "https://example.supabase.co",
            "--api-key",
            "key",
        ]);

        assert_eq!(cli.endpoint, "https://example.supabase.co");
        assert_eq!(cli.table, "app_versions");
        assert_eq!(cli.current, env!("CARGO_PKG_VERSION"));
        assert!(!cli.assume_yes);
        assert!(!cli.verbose);
    }

    #[test]
    fn overrides_current_version_and_table() {
        let cli = parse(&[
            "nudge",
            "--endpoint",
            "https://example.supabase.co",
            "--api-key",
            "key",
            "--table",
            "releases",
            "--current",
            "3.4.5",
            "-y",
        ]);

        assert_eq!(cli.table, "releases");
        assert_eq!(cli.current, "3.4.5");
        assert!(cli.assume_yes);
    }

    #[test]
    fn rejects_missing_endpoint() {
        // Guard against the env fallback leaking in from the test environment.
        if std::env::var_os("NUDGE_ENDPOINT").is_some() {
            return;
        }
        let result = Cli::try_parse_from(["nudge", "--api-key", "key"]);
        assert!(result.is_err());
    }
}
