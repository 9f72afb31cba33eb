//! Instruction templates for every (category, tone) pair, plus the fixed
//! persona system prompt sent with every generation call.
//!
//! The table is a process-wide constant. `verify_table()` runs once at startup
//! and fails fast if any declared tone is missing a bound template, so a
//! lookup during request handling can never come up empty for a valid pair.

use anyhow::{bail, Result};

use crate::generation::tone::{ContentCategory, ToneVariant};

/// System prompt for all generation calls. The persona is fixed; tone and
/// platform steering happens entirely in the composed user prompt.
pub const PERSONA_SYSTEM: &str = "You are Tonaire, an AI-powered tone stylist that helps users \
    rewrite and generate content in different tones and for different social platforms. \
    Always match the requested tone and platform.";

/// Sampling temperature for all generation calls. Fixed rather than
/// per-request configurable; trades determinism for creative variety.
pub const TEMPERATURE: f64 = 0.8;

/// Static binding of a (category, tone) pair to its instruction text.
type TemplateEntry = (ContentCategory, ToneVariant, &'static str);

const TEMPLATES: &[TemplateEntry] = &[
    // rephrase — edit an existing message
    (
        ContentCategory::Rephrase,
        ToneVariant::Professional,
        "Rewrite the following message in a formal, business-appropriate, and concise tone. \
         Use clear, polite, and professional language. Only return the rewritten message, \
         do not include any explanations or quotation marks.",
    ),
    (
        ContentCategory::Rephrase,
        ToneVariant::Casual,
        "Rewrite the following message in a casual, friendly, and informal way. Use natural, \
         conversational language and contractions. Only return the rewritten message, do not \
         include any explanations or quotation marks.",
    ),
    (
        ContentCategory::Rephrase,
        ToneVariant::Funny,
        "Rewrite the following message in a humorous, witty, and playful way. Add a light joke \
         or clever twist if possible. Only return the rewritten message, do not include any \
         explanations or quotation marks.",
    ),
    (
        ContentCategory::Rephrase,
        ToneVariant::Emotional,
        "Rewrite the following message with emotional depth and sincerity. Express feelings \
         and empathy. Only return the rewritten message, do not include any explanations or \
         quotation marks.",
    ),
    (
        ContentCategory::Rephrase,
        ToneVariant::Assertive,
        "Rewrite the following message in a confident, assertive, and direct tone. Be clear \
         and decisive. Only return the rewritten message, do not include any explanations or \
         quotation marks.",
    ),
    (
        ContentCategory::Rephrase,
        ToneVariant::Friendly,
        "Rewrite the following message in a warm, approachable, and friendly tone. Sound \
         supportive and positive. Only return the rewritten message, do not include any \
         explanations or quotation marks.",
    ),
    // linkedin — generate a post about a topic
    (
        ContentCategory::Linkedin,
        ToneVariant::Empowering,
        "Write a LinkedIn post that is empowering, motivational, and inspiring for others. \
         Use uplifting language and include relevant hashtags. Only return the post, do not \
         include any explanations or quotation marks.",
    ),
    (
        ContentCategory::Linkedin,
        ToneVariant::Professional,
        "Write a LinkedIn post in a formal, polished, and business-appropriate tone. Be clear, \
         concise, and include relevant hashtags. Only return the post, do not include any \
         explanations or quotation marks.",
    ),
    (
        ContentCategory::Linkedin,
        ToneVariant::Thankful,
        "Write a LinkedIn post that expresses gratitude and appreciation. Be sincere and \
         include relevant hashtags. Only return the post, do not include any explanations or \
         quotation marks.",
    ),
    (
        ContentCategory::Linkedin,
        ToneVariant::Inspiring,
        "Write a LinkedIn post that is inspiring and focused on lessons learned or motivation. \
         Include relevant hashtags. Only return the post, do not include any explanations or \
         quotation marks.",
    ),
    (
        ContentCategory::Linkedin,
        ToneVariant::Humblebrag,
        "Write a LinkedIn post that shares an achievement with humility and gratitude. Balance \
         confidence with modesty. Include relevant hashtags. Only return the post, do not \
         include any explanations or quotation marks.",
    ),
    // twitter
    (
        ContentCategory::Twitter,
        ToneVariant::Funny,
        "Write a tweet that is funny, witty, and playful about the following topic. Keep it \
         under 280 characters. Only return the tweet, do not include any explanations or \
         quotation marks.",
    ),
    (
        ContentCategory::Twitter,
        ToneVariant::Confident,
        "Write a tweet that is confident and self-assured, but not arrogant. Keep it under \
         280 characters. Only return the tweet, do not include any explanations or quotation \
         marks.",
    ),
    (
        ContentCategory::Twitter,
        ToneVariant::Relatable,
        "Write a tweet that is relatable and easy for others to connect with. Keep it under \
         280 characters. Only return the tweet, do not include any explanations or quotation \
         marks.",
    ),
    (
        ContentCategory::Twitter,
        ToneVariant::Witty,
        "Write a tweet that is clever and smart with the humor. Keep it under 280 characters. \
         Only return the tweet, do not include any explanations or quotation marks.",
    ),
    (
        ContentCategory::Twitter,
        ToneVariant::Hype,
        "Write a tweet that is energetic, exciting, and hype. Build excitement. Keep it under \
         280 characters. Only return the tweet, do not include any explanations or quotation \
         marks.",
    ),
    // instagram
    (
        ContentCategory::Instagram,
        ToneVariant::Aesthetic,
        "Write an Instagram caption that is aesthetic, dreamy, and visually appealing. Use \
         minimal, poetic language. Only return the caption, do not include any explanations \
         or quotation marks.",
    ),
    (
        ContentCategory::Instagram,
        ToneVariant::Chill,
        "Write an Instagram caption that is chill, relaxed, and laid-back. Only return the \
         caption, do not include any explanations or quotation marks.",
    ),
    (
        ContentCategory::Instagram,
        ToneVariant::Soft,
        "Write an Instagram caption that is gentle, soft, and peaceful. Only return the \
         caption, do not include any explanations or quotation marks.",
    ),
    (
        ContentCategory::Instagram,
        ToneVariant::Motivational,
        "Write an Instagram caption that is motivational and inspiring. Encourage your \
         audience. Only return the caption, do not include any explanations or quotation \
         marks.",
    ),
    (
        ContentCategory::Instagram,
        ToneVariant::Humorous,
        "Write an Instagram caption that is funny and entertaining. Add a playful twist. Only \
         return the caption, do not include any explanations or quotation marks.",
    ),
];

/// Looks up the instruction bound to a (category, tone) pair. The pair must
/// already be validated — `tone` must be a member of `category.tones()`.
pub fn instruction(category: ContentCategory, tone: ToneVariant) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(c, t, _)| *c == category && *t == tone)
        .map(|(_, _, text)| *text)
}

/// Verifies every declared tone of every category has exactly one bound
/// template. Called once from `main` before the server accepts traffic.
pub fn verify_table() -> Result<()> {
    for category in ContentCategory::ALL {
        for tone in category.tones() {
            let bound = TEMPLATES
                .iter()
                .filter(|(c, t, _)| *c == category && t == tone)
                .count();
            if bound != 1 {
                bail!(
                    "instruction table broken: ({}, {}) has {} bound templates, expected 1",
                    category.as_str(),
                    tone.as_str(),
                    bound
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_exhaustive() {
        verify_table().expect("every (category, tone) pair must have a template");
    }

    #[test]
    fn test_table_has_no_orphan_entries() {
        // Every entry's tone must be declared under its category.
        for (category, tone, _) in TEMPLATES {
            assert!(
                category.tones().contains(tone),
                "template bound to ({}, {}) but that category does not declare the tone",
                category.as_str(),
                tone.as_str()
            );
        }
    }

    #[test]
    fn test_instruction_lookup_respects_category() {
        // `funny` maps to different instructions under rephrase vs twitter.
        let rephrase = instruction(ContentCategory::Rephrase, ToneVariant::Funny).unwrap();
        let twitter = instruction(ContentCategory::Twitter, ToneVariant::Funny).unwrap();
        assert_ne!(rephrase, twitter);
        assert!(rephrase.starts_with("Rewrite the following message"));
        assert!(twitter.starts_with("Write a tweet"));
    }

    #[test]
    fn test_cross_category_pair_has_no_binding() {
        assert!(instruction(ContentCategory::Linkedin, ToneVariant::Funny).is_none());
        assert!(instruction(ContentCategory::Rephrase, ToneVariant::Aesthetic).is_none());
    }
}
