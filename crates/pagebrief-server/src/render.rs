//! HTML rendering of briefs

use askama::Template;
use pagebrief::Brief;

/// Brief result page.
#[derive(Template)]
#[template(path = "brief.html")]
pub struct BriefPage<'a> {
    pub title: &'a str,
    pub heading: &'a str,
    pub content: &'a str,
}

impl<'a> BriefPage<'a> {
    pub fn new(brief: &'a Brief) -> Self {
        Self {
            title: brief.task.title(),
            heading: brief.task.heading(),
            content: brief.content.as_deref().unwrap_or_default(),
        }
    }
}

/// Render a brief as a standalone HTML page
pub fn render_brief(brief: &Brief) -> Result<String, askama::Error> {
    BriefPage::new(brief).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebrief::BriefTask;

    fn brief(task: BriefTask, content: Option<&str>) -> Brief {
        Brief {
            task,
            url: "https://example.com".to_string(),
            content: content.map(str::to_string),
            used_tool: true,
        }
    }

    #[test]
    fn test_summary_page() {
        let html = render_brief(&brief(BriefTask::Summarize, Some("Short summary."))).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>URL Summary</title>"));
        assert!(html.contains("<h1>Summary of URL</h1>"));
        assert!(html.contains("<p>Short summary.</p>"));
    }

    #[test]
    fn test_key_topics_page() {
        let html = render_brief(&brief(BriefTask::KeyTopics, Some("Rust"))).unwrap();

        assert!(html.contains("<title>Key Topics</title>"));
        assert!(html.contains("<h1>Key Topics</h1>"));
        assert!(html.contains("<p>Rust</p>"));
    }

    #[test]
    fn test_content_is_escaped() {
        let html = render_brief(&brief(
            BriefTask::Summarize,
            Some("<script>alert(1)</script>"),
        ))
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_missing_content_renders_empty_paragraph() {
        let html = render_brief(&brief(BriefTask::Summarize, None)).unwrap();
        assert!(html.contains("<p></p>"));
    }
}
