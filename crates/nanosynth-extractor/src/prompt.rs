//! Prompt assembly for the generative model

use crate::error::ExtractError;
use nanosynth_domain::MaterialCategory;
use std::path::Path;

/// Built-in base template, overridable via `PromptBuilder::from_file`
const DEFAULT_TEMPLATE: &str = include_str!("prompt.txt");

/// Per-category guidance appended to the base template
///
/// Total over the category enum; `Other` gets the generic instruction
/// rather than a lookup miss.
pub fn category_hint(category: MaterialCategory) -> &'static str {
    match category {
        MaterialCategory::MetalOxides => {
            "Focus on parameters like precursor (e.g., zinc nitrate, ammonium carbonate, \
             aluminum nitrate), temperature (e.g., 100-240°C), pH (e.g., 6-8 or null), \
             solvent (e.g., deionized water), and methods like hydrothermal, sol-gel, or \
             calcination."
        }
        MaterialCategory::MetalSulfides => {
            "Focus on parameters like sulfur source (e.g., thiourea), temperature \
             (e.g., 150-300°C), solvent, and methods like chemical vapor deposition, \
             solvothermal, or precipitation."
        }
        MaterialCategory::MetalOrganicFrameworks => {
            "Focus on parameters like metal ion (e.g., zinc, copper), organic linker \
             (e.g., terephthalic acid), solvent (e.g., DMF), temperature (e.g., 100-150°C), \
             and methods like solvothermal or microwave-assisted synthesis."
        }
        MaterialCategory::CarbonBased => {
            "Focus on parameters like carbon source (e.g., methane, glucose), temperature \
             (e.g., 700-1000°C), catalyst, and methods like chemical vapor deposition, \
             arc discharge, or pyrolysis."
        }
        MaterialCategory::PolymericNanomaterials => {
            "Focus on parameters like monomer (e.g., styrene), initiator (e.g., AIBN), \
             solvent, temperature (e.g., 60-80°C), and methods like emulsion \
             polymerization or electrospinning."
        }
        MaterialCategory::PureMetalsAlloys => {
            "Focus on parameters like metal precursor (e.g., gold chloride), reduction \
             agent (e.g., sodium borohydride), temperature (e.g., 20-100°C), and methods \
             like chemical reduction or electrodeposition."
        }
        MaterialCategory::Other => "Extract relevant synthesis parameters.",
    }
}

/// Composes the final instruction text for the generative model
///
/// The template supports `{category}`, `{text}` and `{examples}`
/// placeholders; retrieved examples are joined with newlines in retrieval
/// order. Building is pure: identical inputs and template always produce
/// the identical prompt.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    template: String,
}

impl PromptBuilder {
    /// Create a builder using the built-in template
    pub fn new() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Create a builder with an explicit template string
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Load the template from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let template = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ExtractError::Template(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(Self { template })
    }

    /// Render the prompt for one extraction call
    pub fn build(
        &self,
        category: MaterialCategory,
        document_text: &str,
        examples: &[String],
    ) -> String {
        let template = format!(
            "{}\nCategory-specific instructions: {}",
            self.template,
            category_hint(category)
        );

        // Substitute the document text last so braces inside it are
        // never re-expanded.
        template
            .replace("{category}", category.as_str())
            .replace("{examples}", &examples.join("\n"))
            .replace("{text}", document_text)
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_category_name() {
        let prompt = PromptBuilder::new().build(MaterialCategory::MetalOxides, "doc", &[]);
        assert!(prompt.contains("Metal Oxides"));
    }

    #[test]
    fn test_prompt_includes_document_text() {
        let prompt = PromptBuilder::new().build(
            MaterialCategory::CarbonBased,
            "graphene grown by CVD at 1000°C",
            &[],
        );
        assert!(prompt.contains("graphene grown by CVD at 1000°C"));
    }

    #[test]
    fn test_prompt_joins_examples_in_order() {
        let examples = vec!["first example".to_string(), "second example".to_string()];
        let prompt =
            PromptBuilder::new().build(MaterialCategory::MetalSulfides, "doc", &examples);
        assert!(prompt.contains("first example\nsecond example"));
    }

    #[test]
    fn test_prompt_appends_category_hint() {
        let prompt =
            PromptBuilder::new().build(MaterialCategory::PolymericNanomaterials, "doc", &[]);
        assert!(prompt.contains("Category-specific instructions:"));
        assert!(prompt.contains("emulsion"));
    }

    #[test]
    fn test_other_category_gets_generic_hint() {
        let prompt = PromptBuilder::new().build(MaterialCategory::Other, "doc", &[]);
        assert!(prompt.contains("Extract relevant synthesis parameters."));
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = PromptBuilder::new();
        let examples = vec!["ex".to_string()];
        let a = builder.build(MaterialCategory::MetalOxides, "doc", &examples);
        let b = builder.build(MaterialCategory::MetalOxides, "doc", &examples);
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_template_substitution() {
        let builder = PromptBuilder::with_template("cat={category} ex={examples} txt={text}");
        let prompt = builder.build(
            MaterialCategory::PureMetalsAlloys,
            "body",
            &["e1".to_string()],
        );
        assert!(prompt.starts_with("cat=Pure Metals / Alloys ex=e1 txt=body"));
    }

    #[test]
    fn test_braces_in_document_are_not_expanded() {
        let builder = PromptBuilder::with_template("{text}");
        let prompt = builder.build(MaterialCategory::Other, "literal {category} stays", &[]);
        assert!(prompt.starts_with("literal {category} stays"));
    }

    #[test]
    fn test_from_file_missing_is_template_error() {
        let result = PromptBuilder::from_file("/nonexistent/prompt.txt");
        assert!(matches!(result, Err(ExtractError::Template(_))));
    }

    #[test]
    fn test_every_category_has_a_hint() {
        for category in MaterialCategory::ALL {
            assert!(!category_hint(category).is_empty());
        }
    }
}
