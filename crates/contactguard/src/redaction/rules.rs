//! Built-in redaction rules.
//!
//! The rule table is ordered. Each rule runs over the output of the rules
//! before it, so a substring claimed by an earlier rule is never seen by a
//! later one.
//!
//! Every replacement token is inert: no rule matches any part of a token, and
//! no rule match can overlap one. Re-filtering redacted text is a no-op.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Token for redacted email addresses and `[at]`/`[dot]` spellings.
pub const EMAIL_TOKEN: &str = "[EMAIL REDACTED]";

/// Token for redacted phone numbers.
pub const PHONE_TOKEN: &str = "[PHONE REDACTED]";

/// Token for redacted links.
pub const LINK_TOKEN: &str = "[LINK REDACTED]";

/// Token for redacted social media handles.
pub const HANDLE_TOKEN: &str = "[HANDLE REDACTED]";

/// Token for redacted Skype ids.
pub const SKYPE_TOKEN: &str = "[SKYPE REDACTED]";

/// Token for redacted WhatsApp numbers.
pub const WHATSAPP_TOKEN: &str = "[WHATSAPP REDACTED]";

/// Token for redacted Zoom meeting links.
pub const ZOOM_TOKEN: &str = "[ZOOM LINK REDACTED]";

/// Token for redacted "call me at" / "email me at" phrases.
pub const CONTACT_TOKEN: &str = "[CONTACT INFO REDACTED]";

/// Every distinct replacement token.
pub const REDACTION_TOKENS: [&str; 8] = [
    EMAIL_TOKEN,
    PHONE_TOKEN,
    LINK_TOKEN,
    HANDLE_TOKEN,
    SKYPE_TOKEN,
    WHATSAPP_TOKEN,
    ZOOM_TOKEN,
    CONTACT_TOKEN,
];

/// The kind of contact information a rule detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Email addresses.
    Email,
    /// Phone numbers.
    Phone,
    /// Links to external sites.
    Url,
    /// `@handle` style social media usernames.
    #[serde(rename = "social")]
    SocialHandle,
    /// `skype:` ids.
    Skype,
    /// WhatsApp numbers.
    Whatsapp,
    /// Zoom meeting links.
    Zoom,
    /// Addresses spelled as `name [at] domain [dot] com`.
    EmailWorkaround,
    /// "call me at 555 1234" style phrases.
    CallMePhrase,
    /// "email me at x@y.com" style phrases.
    EmailMePhrase,
}

impl RuleKind {
    /// All kinds, in rule application order.
    pub const ALL: [RuleKind; 10] = [
        Self::Email,
        Self::Phone,
        Self::Url,
        Self::SocialHandle,
        Self::Skype,
        Self::Whatsapp,
        Self::Zoom,
        Self::EmailWorkaround,
        Self::CallMePhrase,
        Self::EmailMePhrase,
    ];

    /// Stable identifier, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Url => "url",
            Self::SocialHandle => "social",
            Self::Skype => "skype",
            Self::Whatsapp => "whatsapp",
            Self::Zoom => "zoom",
            Self::EmailWorkaround => "email_workaround",
            Self::CallMePhrase => "call_me_phrase",
            Self::EmailMePhrase => "email_me_phrase",
        }
    }

    /// The literal token substituted for matches of this kind.
    #[must_use]
    pub fn replacement(self) -> &'static str {
        match self {
            Self::Email | Self::EmailWorkaround => EMAIL_TOKEN,
            Self::Phone => PHONE_TOKEN,
            Self::Url => LINK_TOKEN,
            Self::SocialHandle => HANDLE_TOKEN,
            Self::Skype => SKYPE_TOKEN,
            Self::Whatsapp => WHATSAPP_TOKEN,
            Self::Zoom => ZOOM_TOKEN,
            Self::CallMePhrase | Self::EmailMePhrase => CONTACT_TOKEN,
        }
    }

    /// Whether matches of this kind are reported individually as blocked items.
    ///
    /// The remaining kinds are redacted without enumerating what was removed.
    #[must_use]
    pub fn tracks_originals(self) -> bool {
        matches!(
            self,
            Self::Email | Self::Phone | Self::Url | Self::SocialHandle
        )
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled redaction rule.
#[derive(Debug)]
pub struct Rule {
    /// What this rule detects.
    pub kind: RuleKind,

    /// Human-readable description of the pattern.
    pub description: &'static str,

    regex: Regex,
}

impl Rule {
    /// Create a new rule.
    ///
    /// # Panics
    ///
    /// Panics if the regex pattern is invalid.
    #[must_use]
    pub fn new(kind: RuleKind, description: &'static str, pattern: &str) -> Self {
        Self {
            kind,
            description,
            regex: Regex::new(pattern).expect("Invalid regex pattern"),
        }
    }

    /// The token substituted for matches of this rule.
    #[must_use]
    pub fn replacement(&self) -> &'static str {
        self.kind.replacement()
    }

    /// Whether this rule reports its matches as blocked items.
    #[must_use]
    pub fn tracks_originals(&self) -> bool {
        self.kind.tracks_originals()
    }

    #[cfg(test)]
    fn matches(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }

    /// Find all non-overlapping matches, leftmost first.
    pub fn find_all<'a>(
        &self,
        content: &'a str,
    ) -> impl Iterator<Item = regex::Match<'a>> + use<'a, '_> {
        self.regex.find_iter(content)
    }
}

/// Get the built-in rules in application order.
#[must_use]
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            RuleKind::Email,
            "Email addresses",
            r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        ),
        Rule::new(
            RuleKind::Phone,
            "Phone numbers with optional country code and area code parentheses",
            // Leading digits are absorbed so a match never starts mid-run.
            r"\d*(?:\+?\d{1,3}[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}\b",
        ),
        Rule::new(
            RuleKind::Url,
            "Links with or without scheme and www prefix",
            r"(?i:https?://)?(?i:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z]{2,24}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*",
        ),
        Rule::new(
            RuleKind::SocialHandle,
            "Social media handles",
            r"@[A-Za-z0-9_]{3,}",
        ),
        Rule::new(RuleKind::Skype, "Skype ids", r"(?i)skype:[\w.-]+"),
        // Must end on a digit so the token text "WHATSAPP" never re-matches.
        Rule::new(
            RuleKind::Whatsapp,
            "WhatsApp numbers",
            r"(?i)whatsapp\s*:?\s*[+(]?\d(?:[\d\s()+-]*[\d)])?",
        ),
        Rule::new(
            RuleKind::Zoom,
            "Zoom meeting links",
            r"(?i)zoom\.us/[^\s\[\]]+",
        ),
        Rule::new(
            RuleKind::EmailWorkaround,
            "Addresses spelled out with [at] and [dot]",
            r"\b[A-Za-z0-9._%+-]+\s*\[\s*(?i:at)\s*\]\s*[A-Za-z0-9.-]+\s*\[\s*(?i:dot)\s*\]\s*[A-Za-z]{2,}\b",
        ),
        Rule::new(
            RuleKind::CallMePhrase,
            "\"call me at\" followed by a number",
            r"(?i)(?:call|text|reach|contact)\s+(?:me|us)\s+(?:at|on)\s*:?\s*[+(]?\d(?:[\d\s()+-]*[\d)])?",
        ),
        Rule::new(
            RuleKind::EmailMePhrase,
            "\"email me at\" followed by an address",
            r"(?i)(?:email|e-mail|mail)\s+(?:me|us)\s+(?:at|to)\s*:?\s*[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
        ),
    ]
}

/// A phrase that hints at moving the conversation off-platform.
///
/// Suspicious phrases only raise a flag; they never redact.
#[derive(Debug)]
pub struct SuspiciousPhrase {
    /// Short identifier for logging.
    pub name: &'static str,

    regex: Regex,
}

impl SuspiciousPhrase {
    /// Create a new suspicious phrase.
    ///
    /// # Panics
    ///
    /// Panics if the regex pattern is invalid.
    #[must_use]
    pub fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("Invalid regex pattern"),
        }
    }

    /// Check if the content contains this phrase.
    #[must_use]
    pub fn matches(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }
}

/// Get the built-in suspicious phrases.
#[must_use]
pub fn suspicious_phrases() -> Vec<SuspiciousPhrase> {
    vec![
        SuspiciousPhrase::new(
            "my_number_is",
            r"(?i)my\s+(?:phone|number|cell|mobile)\s+is",
        ),
        SuspiciousPhrase::new("my_email_is", r"(?i)my\s+email\s+is"),
        SuspiciousPhrase::new("contact_me", r"(?i)contact\s+me\s+(?:at|on)"),
        SuspiciousPhrase::new("reach_me", r"(?i)reach\s+me\s+(?:at|on)"),
        SuspiciousPhrase::new("call_me", r"(?i)call\s+me\s+(?:at|on)"),
        SuspiciousPhrase::new("text_me", r"(?i)text\s+me\s+(?:at|on)"),
        SuspiciousPhrase::new("whatsapp_me", r"(?i)whatsapp\s+me"),
        SuspiciousPhrase::new("talk_off", r"(?i)let['’]?s\s+talk\s+off"),
        SuspiciousPhrase::new("take_offline", r"(?i)take\s+this\s+offline"),
        SuspiciousPhrase::new("continue_outside", r"(?i)continue\s+this\s+outside"),
    ]
}
