//! Command line arguments

use clap::Parser;
use std::path::PathBuf;

/// Terminal UI for tokenization, stemming, lemmatization, POS tagging and
/// entity recognition backed by a remote NLP service.
#[derive(Parser, Debug, Default)]
#[command(name = "nlp-tui", version, about)]
pub struct Cli {
    /// Base URL of the NLP backend (overrides the config file)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Text to pre-fill the input with
    #[arg(long)]
    pub text: Option<String>,

    /// Where to write the log (defaults to ~/.nlp-tui/nlp-tui.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::parse_from([
            "nlp-tui",
            "--api-url",
            "http://localhost:9000",
            "--text",
            "Sundar Pichai is the CEO of Google.",
            "--log-file",
            "/tmp/nlp.log",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cli.text.as_deref(), Some("Sundar Pichai is the CEO of Google."));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/nlp.log")));
    }
}
