//! Core types for PageBrief

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What the model is asked to produce for a URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BriefTask {
    /// A concise summary of the page
    #[default]
    Summarize,
    /// The key topics of the page
    KeyTopics,
}

impl BriefTask {
    /// Instruction placed in front of the URL in the user message
    pub fn prompt(&self) -> &'static str {
        match self {
            BriefTask::Summarize => "Provide a concise summary",
            BriefTask::KeyTopics => "List the key topics",
        }
    }

    /// Page title used when rendering the brief
    pub fn title(&self) -> &'static str {
        match self {
            BriefTask::Summarize => "URL Summary",
            BriefTask::KeyTopics => "Key Topics",
        }
    }

    /// Page heading used when rendering the brief
    pub fn heading(&self) -> &'static str {
        match self {
            BriefTask::Summarize => "Summary of URL",
            BriefTask::KeyTopics => "Key Topics",
        }
    }

    /// The full user message for a URL
    pub fn user_message(&self, url: &str) -> String {
        format!("{} for the content at {}", self.prompt(), url)
    }
}

impl FromStr for BriefTask {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summarize" | "summary" => Ok(BriefTask::Summarize),
            "key-topics" | "key_topics" | "topics" => Ok(BriefTask::KeyTopics),
            _ => Err("Invalid task: must be summarize or key-topics".to_string()),
        }
    }
}

impl std::fmt::Display for BriefTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BriefTask::Summarize => write!(f, "summarize"),
            BriefTask::KeyTopics => write!(f, "key-topics"),
        }
    }
}

/// Arguments of a `read_website_content` tool call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReadWebsiteArgs {
    /// The URL to the website to read
    pub url: String,
}

/// Result of reading a website, handed back to the model as the tool output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteContent {
    /// Paragraph text of the page
    pub website_body: String,

    /// The URL that was read
    pub url: String,
}

/// Outcome of one brief
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brief {
    /// Task that was performed
    pub task: BriefTask,

    /// URL the brief is about
    pub url: String,

    /// Final answer from the model, if it produced any text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// True when the model asked for the page content
    pub used_tool: bool,
}
