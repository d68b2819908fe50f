//! Brief orchestration
//!
//! One brief is at most two completions: the first offers the
//! `read_website_content` tool, and only if the model calls it is the page
//! read and a second, tool-less completion requested.

use crate::error::BriefError;
use crate::llm::{ChatMessage, LlmClient, ToolChoice};
use crate::reader::{HttpPageReader, PageReader};
use crate::tool::{parse_args, read_website_tool, READ_WEBSITE_CONTENT};
use crate::types::{Brief, BriefTask};
use tracing::{debug, info};

/// Produces briefs for URLs
pub struct Briefer {
    llm: LlmClient,
    reader: Box<dyn PageReader>,
}

impl Briefer {
    /// Create a briefer that reads pages over HTTP
    pub fn new(llm: LlmClient) -> Result<Self, BriefError> {
        Ok(Self::with_reader(llm, Box::new(HttpPageReader::new()?)))
    }

    /// Create a briefer with a custom page reader
    pub fn with_reader(llm: LlmClient, reader: Box<dyn PageReader>) -> Self {
        Self { llm, reader }
    }

    /// Get the LLM client
    pub fn llm(&self) -> &LlmClient {
        &self.llm
    }

    /// Run `task` for `url`
    ///
    /// Tool calls always read `url` itself; the URL the model passes in the
    /// call arguments is only logged when it differs.
    pub async fn run(&self, task: BriefTask, url: &str) -> Result<Brief, BriefError> {
        if url.is_empty() {
            return Err(BriefError::MissingUrl);
        }

        info!(%task, url, "Starting brief");

        let tools = [read_website_tool()];
        let mut messages = vec![ChatMessage::user(task.user_message(url))];

        let assistant = self
            .llm
            .complete(&messages, Some(&tools[..]), Some(ToolChoice::Auto))
            .await?;
        messages.push(assistant.clone());

        // Any `tool_calls` field, even an empty list, gets a follow-up
        if assistant.tool_calls.is_none() {
            debug!(url, "Model answered without reading the page");
            return Ok(Brief {
                task,
                url: url.to_string(),
                content: assistant.content,
                used_tool: false,
            });
        }

        for call in assistant.requested_tools() {
            if call.function.name != READ_WEBSITE_CONTENT {
                debug!(tool = %call.function.name, "Skipping unknown tool call");
                continue;
            }

            if let Some(args) = parse_args(&call.function.arguments) {
                if args.url != url {
                    debug!(requested = %args.url, url, "Tool call URL differs, reading query URL");
                }
            }

            debug!(reader = self.reader.name(), call_id = %call.id, url, "Dispatching tool call");
            let website = self.reader.read(url).await?;
            let payload = serde_json::to_string(&website)?;
            messages.push(ChatMessage::tool_result(call, payload));
        }

        let answer = self.llm.complete(&messages, None, None).await?;

        Ok(Brief {
            task,
            url: url.to_string(),
            content: answer.content,
            used_tool: true,
        })
    }
}
