//! Prompt Builder
//!
//! Prompts are composed from ordered sections and rendered to a single
//! string. The documentation prompt is the category template followed by the
//! declaration source in a fenced block.

/// Prompt section types
#[derive(Debug, Clone)]
pub enum PromptSection {
    /// Raw text section with optional header
    Text {
        header: Option<String>,
        content: String,
    },
    /// Code block with language
    Code { language: String, content: String },
}

/// Prompt builder for consistent prompt construction
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    sections: Vec<PromptSection>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add text section
    pub fn text(mut self, content: &str) -> Self {
        self.sections.push(PromptSection::Text {
            header: None,
            content: content.to_string(),
        });
        self
    }

    /// Add text section with header
    pub fn section(mut self, header: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Text {
            header: Some(header.to_string()),
            content: content.to_string(),
        });
        self
    }

    /// Add code block
    pub fn code(mut self, language: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Code {
            language: language.to_string(),
            content: content.to_string(),
        });
        self
    }

    /// Build the final prompt string
    pub fn build(self) -> String {
        let mut prompt = String::new();

        for section in self.sections {
            match section {
                PromptSection::Text { header, content } => {
                    if let Some(h) = header {
                        prompt.push_str(&format!("# {}\n\n", h));
                    }
                    prompt.push_str(content.trim_end());
                    prompt.push_str("\n\n");
                }
                PromptSection::Code { language, content } => {
                    prompt.push_str(&format!("```{}\n", language));
                    prompt.push_str(content.trim_end());
                    prompt.push_str("\n```\n\n");
                }
            }
        }

        prompt.trim_end().to_string()
    }
}

/// The single prompt sent for one documentation job.
pub fn documentation_prompt(template: &str, source: &str) -> String {
    PromptBuilder::new()
        .text(template)
        .section("Source", "Document the following declaration.")
        .code("typescript", source)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sections_in_order() {
        let prompt = PromptBuilder::new()
            .text("intro")
            .section("Header", "body")
            .code("ts", "let x = 1;")
            .build();

        assert_eq!(prompt, "intro\n\n# Header\n\nbody\n\n```ts\nlet x = 1;\n```");
    }

    #[test]
    fn test_documentation_prompt_embeds_template_and_source() {
        let template = "# {{name}}\n\nDescribe inputs and outputs.\n";
        let source = "@Component({})\nexport class HeroComponent {}";
        let prompt = documentation_prompt(template, source);

        assert!(prompt.starts_with("# {{name}}"));
        assert!(prompt.contains("```typescript\n@Component({})\nexport class HeroComponent {}\n```"));
        assert!(prompt.find("Describe inputs").unwrap() < prompt.find("HeroComponent").unwrap());
    }

    #[test]
    fn test_documentation_prompt_is_stable() {
        assert_eq!(
            documentation_prompt("t", "export enum A { X }"),
            documentation_prompt("t", "export enum A { X }")
        );
    }
}
