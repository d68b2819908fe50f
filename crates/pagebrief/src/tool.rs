//! The `read_website_content` tool offered to the model

use crate::llm::{FunctionDefinition, ToolDefinition};
use crate::types::ReadWebsiteArgs;
use schemars::schema_for;

/// Function name of the website reading tool
pub const READ_WEBSITE_CONTENT: &str = "read_website_content";

/// Tool description for LLM consumption
pub const TOOL_DESCRIPTION: &str = "Read the content on a given website";

/// Definition of the website reading tool
pub fn read_website_tool() -> ToolDefinition {
    ToolDefinition {
        kind: "function".to_string(),
        function: FunctionDefinition {
            name: READ_WEBSITE_CONTENT.to_string(),
            description: TOOL_DESCRIPTION.to_string(),
            parameters: input_schema(),
        },
    }
}

/// JSON schema of the tool arguments
fn input_schema() -> serde_json::Value {
    let schema = schema_for!(ReadWebsiteArgs);
    let mut value = serde_json::to_value(schema).unwrap_or_default();

    // Providers want a bare object schema
    if let Some(obj) = value.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");
    }

    value
}

/// Decode tool-call arguments, `None` if they are not valid
pub fn parse_args(arguments: &str) -> Option<ReadWebsiteArgs> {
    serde_json::from_str(arguments).ok()
}
