//! Prompt sections for the agent's operating instructions.

/// A named block of instructional text: free body text, bullets, or both.
#[derive(Debug, Clone)]
pub struct PromptSection {
    pub title: String,
    pub body: Option<String>,
    pub bullets: Vec<String>,
}

impl PromptSection {
    /// A section with free body text.
    pub fn text(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: Some(body.to_string()),
            bullets: Vec::new(),
        }
    }

    /// A section with an ordered bullet list.
    pub fn bullets(title: &str, items: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            body: None,
            bullets: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Assemble prompt sections into a single instruction string.
pub fn render(sections: &[PromptSection]) -> String {
    let mut out = Vec::with_capacity(sections.len());
    for section in sections {
        let mut block = format!("## {}", section.title);
        if let Some(body) = &section.body {
            block.push('\n');
            block.push_str(body);
        }
        for bullet in &section.bullets {
            block.push_str("\n- ");
            block.push_str(bullet);
        }
        out.push(block);
    }
    out.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_text_and_bullets_in_order() {
        let sections = vec![
            PromptSection::text("Role", "You are a test assistant."),
            PromptSection::bullets("Guidelines", &["Be brief", "Be kind"]),
        ];
        let rendered = render(&sections);
        assert_eq!(
            rendered,
            "## Role\nYou are a test assistant.\n\n## Guidelines\n- Be brief\n- Be kind"
        );
    }

    #[test]
    fn empty_sections_render_empty() {
        assert_eq!(render(&[]), "");
    }
}
