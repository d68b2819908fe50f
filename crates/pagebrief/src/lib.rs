//! PageBrief - LLM-powered summaries and key topics for web pages
//!
//! This crate asks an OpenAI-compatible chat-completion API to brief a URL.
//! The model is offered a single tool, `read_website_content`; when it calls
//! that tool the page is fetched once, its paragraph text is extracted and
//! handed back, and a follow-up completion produces the final answer.
//!
//! ## Pieces
//! - [`LlmClient`] - chat-completion client with tool definitions
//! - [`PageReader`] / [`HttpPageReader`] - page fetch and paragraph extraction
//! - [`Briefer`] - the one tool-call round-trip tying them together

pub mod brief;
mod error;
pub mod extract;
pub mod llm;
pub mod reader;
pub mod tool;
mod types;

pub use brief::Briefer;
pub use error::BriefError;
pub use extract::paragraph_text;
pub use llm::{ChatMessage, LlmClient, LlmConfig, Role, ToolCall, ToolChoice, ToolDefinition};
pub use reader::{HttpPageReader, PageReader, ReaderOptions};
pub use tool::{read_website_tool, READ_WEBSITE_CONTENT, TOOL_DESCRIPTION};
pub use types::{Brief, BriefTask, ReadWebsiteArgs, WebsiteContent};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Everruns PageBrief/1.0";

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default OpenAI-compatible API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
