//! Command-line argument definition.

use clap::Parser;

use crate::app::StartView;
use crate::config::Settings;
use crate::state::CategoryId;

/// trivia-browser - browse, filter, search and delete trivia questions from the terminal
#[derive(Parser, Debug)]
#[command(name = "trivia-browser")]
#[command(version)]
#[command(about = "Browse, filter, search and delete trivia questions from the terminal", long_about = None)]
pub struct Args {
    /// Backend base URL (overrides `api_base_url` in settings.conf)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Page to open (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Open filtered to this category id
    #[arg(short, long)]
    pub category: Option<CategoryId>,

    /// Open with this search submitted
    #[arg(short, long)]
    pub search: Option<String>,

    /// Print the selected page to stdout and exit instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// What: Apply command-line overrides on top of file settings.
    ///
    /// Details:
    /// - Only `--base-url` maps to a setting; an empty value is ignored.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
        {
            settings.api_base_url = url.to_string();
        }
    }

    /// Where the view (or the printed page) should start.
    #[must_use]
    pub fn start_view(&self) -> StartView {
        StartView {
            page: self.page.max(1),
            category: self.category,
            search: self.search.clone().filter(|s| !s.is_empty()),
        }
    }
}

/// What: Determine the log level from command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - The verbose flag overrides `--log-level`.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Defaults open page 1 of the plain list at info level.
    fn defaults() {
        let args = Args::parse_from(["trivia-browser"]);
        assert_eq!(args.start_view(), StartView {
            page: 1,
            category: None,
            search: None,
        });
        assert!(!args.print);
        assert_eq!(determine_log_level(&args), "info");
    }

    #[test]
    /// What: Flags map onto the start view, settings and log level.
    ///
    /// Inputs:
    /// - `--base-url`, `--page 0`, `-c 3`, `-s "  river "`, `-v`.
    ///
    /// Output:
    /// - Page clamped to 1, search term kept verbatim, overridden URL, debug level.
    fn flags_map_through() {
        let args = Args::parse_from([
            "trivia-browser",
            "--base-url",
            "http://trivia.local:8080/",
            "--page",
            "0",
            "-c",
            "3",
            "-s",
            "  river ",
            "-v",
        ]);
        let start = args.start_view();
        assert_eq!(start.page, 1);
        assert_eq!(start.category, Some(3));
        assert_eq!(start.search.as_deref(), Some("  river "));

        let mut settings = Settings::default();
        args.apply_overrides(&mut settings);
        assert_eq!(settings.api_base_url, "http://trivia.local:8080/");
        assert_eq!(determine_log_level(&args), "debug");
    }

    #[test]
    /// What: A blank base URL and an empty search are treated as absent.
    fn blank_values_ignored() {
        let args = Args::parse_from(["trivia-browser", "--base-url", " ", "--search", ""]);
        let mut settings = Settings::default();
        args.apply_overrides(&mut settings);
        assert_eq!(settings, Settings::default());
        assert_eq!(args.start_view().search, None);
    }
}
