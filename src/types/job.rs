//! Template categories and documentation jobs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Documentation template kind selected per declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Component,
    Directive,
    Service,
    Guard,
    Interceptor,
    Resolver,
    Pipe,
    Module,
    Interface,
    Enum,
    Type,
    Constant,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 12] = [
        TemplateCategory::Component,
        TemplateCategory::Directive,
        TemplateCategory::Service,
        TemplateCategory::Guard,
        TemplateCategory::Interceptor,
        TemplateCategory::Resolver,
        TemplateCategory::Pipe,
        TemplateCategory::Module,
        TemplateCategory::Interface,
        TemplateCategory::Enum,
        TemplateCategory::Type,
        TemplateCategory::Constant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Directive => "directive",
            Self::Service => "service",
            Self::Guard => "guard",
            Self::Interceptor => "interceptor",
            Self::Resolver => "resolver",
            Self::Pipe => "pipe",
            Self::Module => "module",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Type => "type",
            Self::Constant => "constant",
        }
    }

    /// File name of the template backing this category
    pub fn template_file_name(&self) -> String {
        format!("{}.{}", self.as_str(), crate::constants::paths::TEMPLATE_EXT)
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for TemplateCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown template category: {}", s))
    }
}

/// One unit of work: a declaration rendered through one template into one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub declaration_name: String,
    pub raw_text: String,
    pub category: TemplateCategory,
    pub output_dir: PathBuf,
    pub output_file_name: String,
    /// Source file the declaration came from, for progress reporting
    pub source_path: PathBuf,
}

impl Job {
    /// Full path of the document this job writes
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for category in TemplateCategory::ALL {
            let parsed: TemplateCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("widget".parse::<TemplateCategory>().is_err());
    }

    #[test]
    fn test_template_file_name() {
        assert_eq!(TemplateCategory::Interceptor.template_file_name(), "interceptor.md");
        assert_eq!(TemplateCategory::Type.template_file_name(), "type.md");
    }

    #[test]
    fn test_output_path() {
        let job = Job {
            declaration_name: "HeroService".to_string(),
            raw_text: String::new(),
            category: TemplateCategory::Service,
            output_dir: PathBuf::from("docs/app"),
            output_file_name: "HeroService.md".to_string(),
            source_path: PathBuf::from("src/app/hero.service.ts"),
        };
        assert_eq!(job.output_path(), PathBuf::from("docs/app/HeroService.md"));
    }
}
