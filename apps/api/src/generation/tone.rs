//! Content categories and their tone variants.
//!
//! A `ToneVariant` has no meaning outside its owning `ContentCategory`:
//! `funny` exists under both `rephrase` and `twitter` but is a different
//! instruction in each, and e.g. `aesthetic` is only valid under `instagram`.
//! Cross-category pairings are rejected at parse time, never looked up.

/// One of the four supported generation targets. Fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCategory {
    Rephrase,
    Linkedin,
    Twitter,
    Instagram,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 4] = [
        ContentCategory::Rephrase,
        ContentCategory::Linkedin,
        ContentCategory::Twitter,
        ContentCategory::Instagram,
    ];

    /// Parses a wire string into a category. Strings arrive untyped from the
    /// client and must not be assumed valid.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rephrase" => Some(ContentCategory::Rephrase),
            "linkedin" => Some(ContentCategory::Linkedin),
            "twitter" => Some(ContentCategory::Twitter),
            "instagram" => Some(ContentCategory::Instagram),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCategory::Rephrase => "rephrase",
            ContentCategory::Linkedin => "linkedin",
            ContentCategory::Twitter => "twitter",
            ContentCategory::Instagram => "instagram",
        }
    }

    /// The tone set owned by this category.
    pub fn tones(&self) -> &'static [ToneVariant] {
        use ToneVariant::*;
        match self {
            ContentCategory::Rephrase => {
                &[Professional, Casual, Funny, Emotional, Assertive, Friendly]
            }
            ContentCategory::Linkedin => {
                &[Empowering, Professional, Thankful, Inspiring, Humblebrag]
            }
            ContentCategory::Twitter => &[Funny, Confident, Relatable, Witty, Hype],
            ContentCategory::Instagram => &[Aesthetic, Chill, Soft, Motivational, Humorous],
        }
    }

    /// Parses a tone string scoped to this category. Returns `None` both for
    /// unknown tone names and for tones that belong to a different category.
    pub fn parse_tone(&self, s: &str) -> Option<ToneVariant> {
        self.tones().iter().copied().find(|t| t.as_str() == s)
    }

    /// Label prefixing the quoted user input in the composed prompt.
    /// `rephrase` edits an existing message; the other three generate new
    /// content about a topic.
    pub fn input_label(&self) -> &'static str {
        match self {
            ContentCategory::Rephrase => "Message:",
            ContentCategory::Linkedin | ContentCategory::Twitter | ContentCategory::Instagram => {
                "Topic:"
            }
        }
    }
}

/// A named stylistic mode. The union of all tone names across categories;
/// validity of a (category, tone) pair is decided by [`ContentCategory::tones`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneVariant {
    // rephrase (Professional and Funny are shared with other categories)
    Professional,
    Casual,
    Funny,
    Emotional,
    Assertive,
    Friendly,
    // linkedin
    Empowering,
    Thankful,
    Inspiring,
    Humblebrag,
    // twitter
    Confident,
    Relatable,
    Witty,
    Hype,
    // instagram
    Aesthetic,
    Chill,
    Soft,
    Motivational,
    Humorous,
}

impl ToneVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneVariant::Professional => "professional",
            ToneVariant::Casual => "casual",
            ToneVariant::Funny => "funny",
            ToneVariant::Emotional => "emotional",
            ToneVariant::Assertive => "assertive",
            ToneVariant::Friendly => "friendly",
            ToneVariant::Empowering => "empowering",
            ToneVariant::Thankful => "thankful",
            ToneVariant::Inspiring => "inspiring",
            ToneVariant::Humblebrag => "humblebrag",
            ToneVariant::Confident => "confident",
            ToneVariant::Relatable => "relatable",
            ToneVariant::Witty => "witty",
            ToneVariant::Hype => "hype",
            ToneVariant::Aesthetic => "aesthetic",
            ToneVariant::Chill => "chill",
            ToneVariant::Soft => "soft",
            ToneVariant::Motivational => "motivational",
            ToneVariant::Humorous => "humorous",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!(
            ContentCategory::parse("rephrase"),
            Some(ContentCategory::Rephrase)
        );
        assert_eq!(
            ContentCategory::parse("linkedin"),
            Some(ContentCategory::Linkedin)
        );
        assert_eq!(
            ContentCategory::parse("twitter"),
            Some(ContentCategory::Twitter)
        );
        assert_eq!(
            ContentCategory::parse("instagram"),
            Some(ContentCategory::Instagram)
        );
    }

    #[test]
    fn test_parse_unknown_category() {
        assert_eq!(ContentCategory::parse("facebook"), None);
        assert_eq!(ContentCategory::parse(""), None);
        // Case-sensitive — the wire format is lowercase.
        assert_eq!(ContentCategory::parse("Rephrase"), None);
    }

    #[test]
    fn test_tone_counts_per_category() {
        assert_eq!(ContentCategory::Rephrase.tones().len(), 6);
        assert_eq!(ContentCategory::Linkedin.tones().len(), 5);
        assert_eq!(ContentCategory::Twitter.tones().len(), 5);
        assert_eq!(ContentCategory::Instagram.tones().len(), 5);
    }

    #[test]
    fn test_tone_scoped_to_owning_category() {
        // `funny` lives under rephrase and twitter, nowhere else.
        assert!(ContentCategory::Rephrase.parse_tone("funny").is_some());
        assert!(ContentCategory::Twitter.parse_tone("funny").is_some());
        assert!(ContentCategory::Linkedin.parse_tone("funny").is_none());
        assert!(ContentCategory::Instagram.parse_tone("funny").is_none());

        // `aesthetic` belongs to instagram only.
        assert!(ContentCategory::Instagram.parse_tone("aesthetic").is_some());
        assert!(ContentCategory::Linkedin.parse_tone("aesthetic").is_none());
    }

    #[test]
    fn test_parse_tone_rejects_unknown_names() {
        for category in ContentCategory::ALL {
            assert!(category.parse_tone("sarcastic").is_none());
            assert!(category.parse_tone("").is_none());
        }
    }

    #[test]
    fn test_input_label_switches_on_category() {
        assert_eq!(ContentCategory::Rephrase.input_label(), "Message:");
        assert_eq!(ContentCategory::Linkedin.input_label(), "Topic:");
        assert_eq!(ContentCategory::Twitter.input_label(), "Topic:");
        assert_eq!(ContentCategory::Instagram.input_label(), "Topic:");
    }

    #[test]
    fn test_tone_round_trips_through_as_str() {
        for category in ContentCategory::ALL {
            for tone in category.tones() {
                assert_eq!(category.parse_tone(tone.as_str()), Some(*tone));
            }
        }
    }
}
