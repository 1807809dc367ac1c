//! Markdown rendering for terminal output.

use termimad::MadSkin;

/// Renders generated text and page bodies, or passes them through untouched
#[derive(Clone)]
pub struct MarkdownRenderer {
    skin: MadSkin,
    enabled: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MarkdownRenderer {
    pub fn new(enabled: bool) -> Self {
        Self {
            skin: MadSkin::default(),
            enabled,
        }
    }

    pub fn render(&self, markdown: &str) -> String {
        if self.enabled {
            self.skin.term_text(markdown).to_string()
        } else {
            markdown.to_string()
        }
    }

    pub fn print(&self, markdown: &str) {
        println!("{}", self.render(markdown));
    }
}

/// Render a markdown string with the default skin
pub fn render_markdown(markdown: &str) -> String {
    MarkdownRenderer::default().render(markdown)
}
