//! Command line and environment configuration

use clap::{Args, Parser, Subcommand, ValueEnum};
use pagebrief::{
    BriefError, BriefTask, Briefer, HttpPageReader, LlmClient, LlmConfig, ReaderOptions,
    DEFAULT_BASE_URL, DEFAULT_MODEL,
};
use std::str::FromStr;

/// PageBrief - LLM summaries and key topics for web pages
#[derive(Parser, Debug)]
#[command(name = "pagebrief")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Listener used when no subcommand is given
    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

impl Cli {
    /// Subcommand to run, `serve` when none was given
    pub fn take_command(&mut self) -> Commands {
        self.command
            .take()
            .unwrap_or_else(|| Commands::Serve(self.serve.clone()))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve(ServeArgs),
    /// Brief a single URL and print the result
    Brief {
        /// URL to brief
        url: String,

        /// What to produce
        #[arg(long, short, default_value = "summarize", value_parser = parse_task)]
        task: BriefTask,

        /// Output format
        #[arg(long, short, default_value = "text")]
        output: OutputFormat,
    },
}

/// Listener settings
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "PAGEBRIEF_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, env = "PAGEBRIEF_PORT", default_value_t = 8787)]
    pub port: u16,
}

/// Output format for the brief subcommand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The model's answer only
    #[default]
    Text,
    /// The same HTML page the server returns
    Html,
}

/// LLM provider and page reader settings shared by all commands
#[derive(Args, Debug, Clone)]
pub struct LlmArgs {
    /// API key for the OpenAI-compatible provider
    #[arg(long, env = "OPENAI_API_KEY", global = true, hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// API base URL of the provider
    #[arg(long, env = "OPENAI_BASE_URL", global = true, default_value = DEFAULT_BASE_URL)]
    pub openai_base_url: String,

    /// Chat model
    #[arg(long, env = "PAGEBRIEF_MODEL", global = true, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Custom User-Agent for page reads
    #[arg(long, env = "PAGEBRIEF_USER_AGENT", global = true)]
    pub user_agent: Option<String>,
}

impl LlmArgs {
    /// Build a briefer, or `None` when no API key is configured
    pub fn briefer(&self) -> Result<Option<Briefer>, BriefError> {
        let Some(api_key) = self
            .openai_api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
        else {
            return Ok(None);
        };

        let config = LlmConfig::new(api_key)
            .base_url(&self.openai_base_url)
            .model(&self.model);
        let reader = HttpPageReader::with_options(ReaderOptions {
            user_agent: self.user_agent.clone(),
            ..Default::default()
        })?;

        Ok(Some(Briefer::with_reader(
            LlmClient::new(config)?,
            Box::new(reader),
        )))
    }
}

fn parse_task(s: &str) -> Result<BriefTask, String> {
    BriefTask::from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(api_key: Option<&str>) -> LlmArgs {
        LlmArgs {
            openai_api_key: api_key.map(str::to_string),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            user_agent: None,
        }
    }

    #[test]
    fn test_no_api_key_means_no_briefer() {
        assert!(args(None).briefer().unwrap().is_none());
        assert!(args(Some("")).briefer().unwrap().is_none());
        assert!(args(Some("  ")).briefer().unwrap().is_none());
    }

    #[test]
    fn test_briefer_uses_model() {
        let mut llm = args(Some("sk-test"));
        llm.model = "gpt-4o-mini".to_string();
        let briefer = llm.briefer().unwrap().unwrap();
        assert_eq!(briefer.llm().config().model, "gpt-4o-mini");
    }

    #[test]
    fn test_parse_brief_command() {
        let cli = Cli::try_parse_from([
            "pagebrief",
            "brief",
            "https://example.com",
            "--task",
            "key-topics",
            "--output",
            "html",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Brief { url, task, output }) => {
                assert_eq!(url, "https://example.com");
                assert_eq!(task, BriefTask::KeyTopics);
                assert_eq!(output, OutputFormat::Html);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_task() {
        let result = Cli::try_parse_from([
            "pagebrief",
            "brief",
            "https://example.com",
            "--task",
            "translate",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_serve_port() {
        let cli = Cli::try_parse_from(["pagebrief", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Some(Commands::Serve(serve)) => assert_eq!(serve.port, 9000),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_serves() {
        let mut cli = Cli::try_parse_from(["pagebrief"]).unwrap();
        assert!(cli.command.is_none());
        match cli.take_command() {
            Commands::Serve(serve) => {
                assert_eq!(serve.host, "127.0.0.1");
                assert_eq!(serve.port, 8787);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_takes_listener_flags() {
        let mut cli =
            Cli::try_parse_from(["pagebrief", "--host", "0.0.0.0", "--port", "9100"]).unwrap();
        match cli.take_command() {
            Commands::Serve(serve) => assert_eq!(
                serve,
                ServeArgs {
                    host: "0.0.0.0".to_string(),
                    port: 9100,
                }
            ),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
