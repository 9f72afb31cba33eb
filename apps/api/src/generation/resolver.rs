//! Prompt resolution — maps untyped wire strings to a composed prompt.
//!
//! Pure and side-effect free. Input text is passed through verbatim: no
//! trimming, normalization, or length capping happens here (non-emptiness is
//! the handler's job).

use thiserror::Error;

use crate::generation::prompts;
use crate::generation::tone::{ContentCategory, ToneVariant};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unknown content category: {0}")]
    InvalidCategory(String),

    #[error("tone {tone} is not valid for category {category}")]
    InvalidTone { category: String, tone: String },
}

/// A fully composed prompt ready for the generation provider, tagged with the
/// validated pair it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub category: ContentCategory,
    pub tone: ToneVariant,
    pub text: String,
}

/// Resolves `(content_type, tone, input_text)` into a composed prompt.
///
/// Validation order matters for error reporting: an unknown category fails
/// with `InvalidCategory` before the tone is ever inspected.
pub fn resolve(
    content_type: &str,
    tone: &str,
    input_text: &str,
) -> Result<ComposedPrompt, ResolveError> {
    let category = ContentCategory::parse(content_type)
        .ok_or_else(|| ResolveError::InvalidCategory(content_type.to_string()))?;

    let tone_variant = category
        .parse_tone(tone)
        .ok_or_else(|| ResolveError::InvalidTone {
            category: content_type.to_string(),
            tone: tone.to_string(),
        })?;

    // verify_table() at startup guarantees every valid pair is bound.
    let instruction = prompts::instruction(category, tone_variant)
        .unwrap_or_else(|| unreachable!("instruction table verified at startup"));

    let text = format!(
        "{instruction}\n\n{label} \"{input_text}\"",
        label = category.input_label()
    );

    Ok(ComposedPrompt {
        category,
        tone: tone_variant,
        text,
    })
}
