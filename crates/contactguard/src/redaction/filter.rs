//! Contact-information filter for outbound chat messages.
//!
//! The filter runs the ordered rule table over a message, replacing matches
//! with redaction tokens and reporting what was removed. It never rejects a
//! message: every input yields a well-formed [`FilterResult`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::rules::{builtin_rules, suspicious_phrases, Rule, RuleKind, SuspiciousPhrase};
use super::warning::{get_warning_message, FILTERED_WARNING, MULTI_KIND_WARNING};
use crate::error::{Error, Result};

/// One piece of contact information that was removed from a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedItem {
    /// What kind of contact information this was.
    pub kind: RuleKind,

    /// The exact text that was redacted.
    pub original_value: String,
}

impl BlockedItem {
    /// Create a new blocked item.
    #[must_use]
    pub fn new(kind: RuleKind, original_value: impl Into<String>) -> Self {
        Self {
            kind,
            original_value: original_value.into(),
        }
    }
}

/// Outcome of filtering one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterResult {
    /// The redacted message. `None` only when the input was absent.
    pub filtered_text: Option<String>,

    /// Whether any redaction took place.
    pub was_filtered: bool,

    /// Values removed by the tracking rules, in the order they were found.
    pub blocked_items: Vec<BlockedItem>,

    /// Whether the original message contains an off-platform phrase.
    pub has_suspicious_phrase: bool,
}

impl FilterResult {
    /// A result that returns the input untouched.
    fn passthrough(message: Option<&str>) -> Self {
        Self {
            filtered_text: message.map(str::to_string),
            ..Self::default()
        }
    }

    /// The filtered text, or an empty string when the input was absent.
    #[must_use]
    pub fn text(&self) -> &str {
        self.filtered_text.as_deref().unwrap_or_default()
    }

    /// The notice to show the sender, if anything was removed.
    ///
    /// Uses the kind-specific wording when the blocked items allow it and the
    /// generic wording otherwise, including for redactions that do not record
    /// blocked items.
    #[must_use]
    pub fn warning(&self) -> Option<String> {
        if !self.was_filtered {
            return None;
        }
        get_warning_message(&self.blocked_items).or_else(|| Some(MULTI_KIND_WARNING.to_string()))
    }
}

/// Outcome of validating a message before it is sent.
///
/// Messages are always allowed; validation only sanitizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// Whether the message may be sent. Always `true`.
    pub allowed: bool,

    /// The redacted message.
    pub filtered: Option<String>,

    /// Whether any redaction took place.
    pub was_filtered: bool,

    /// Values removed by the tracking rules.
    pub blocked_items: Vec<BlockedItem>,

    /// Fixed notice for the sender when something was removed.
    pub warning: Option<String>,
}

impl From<FilterResult> for Validation {
    fn from(result: FilterResult) -> Self {
        Self {
            allowed: true,
            warning: result.was_filtered.then(|| FILTERED_WARNING.to_string()),
            filtered: result.filtered_text,
            was_filtered: result.was_filtered,
            blocked_items: result.blocked_items,
        }
    }
}

/// Configuration for the contact filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Whether filtering is enabled. When disabled, messages pass through.
    pub enabled: bool,

    /// Domains whose links are never redacted. Subdomains are included.
    pub allowed_domains: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_domains: default_allowed_domains(),
        }
    }
}

impl FilterConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an allowed domain is not a bare hostname.
    pub fn validate(&self) -> Result<()> {
        for domain in &self.allowed_domains {
            let trimmed = domain.trim();
            if trimmed.is_empty() {
                return Err(Error::config_validation("allowed domain cannot be empty"));
            }
            if trimmed.contains("://") || trimmed.contains(['/', '?', '#', '@']) {
                return Err(Error::config_validation(format!(
                    "allowed domain must be a bare hostname: {domain}"
                )));
            }
            if trimmed.contains(char::is_whitespace) || !trimmed.contains('.') {
                return Err(Error::config_validation(format!(
                    "invalid allowed domain: {domain}"
                )));
            }
        }
        Ok(())
    }
}

/// Default trusted domains.
fn default_allowed_domains() -> Vec<String> {
    vec![
        "piconnect.com".to_string(),
        "inquireconnect.com".to_string(),
    ]
}

/// Set of trusted domains exempt from link redaction.
///
/// A link is exempt when its host equals a listed domain or is a subdomain of
/// one. Comparison is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainAllowlist {
    domains: Vec<String>,
}

impl DomainAllowlist {
    /// Create an allowlist from domain names.
    ///
    /// Names are lowercased and stripped of surrounding dots and whitespace;
    /// empty names are dropped.
    #[must_use]
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = domains
            .into_iter()
            .filter_map(|d| normalize_domain(d.as_ref()))
            .collect();
        normalized.sort();
        normalized.dedup();
        Self {
            domains: normalized,
        }
    }

    /// The normalized domains.
    #[must_use]
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Check if a host belongs to an allowed domain.
    #[must_use]
    pub fn contains_host(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        self.domains.iter().any(|domain| {
            host == *domain
                || host
                    .strip_suffix(domain.as_str())
                    .is_some_and(|rest| rest.ends_with('.'))
        })
    }

    /// Check if a matched link points at an allowed domain.
    #[must_use]
    pub fn permits(&self, link: &str) -> bool {
        link_host(link).is_some_and(|host| self.contains_host(host))
    }
}

fn normalize_domain(domain: &str) -> Option<String> {
    let domain = domain.trim().trim_matches('.').to_ascii_lowercase();
    (!domain.is_empty()).then_some(domain)
}

/// Host portion of a link: no scheme, credentials, port, or path.
fn link_host(link: &str) -> Option<&str> {
    let rest = ["https://", "http://"]
        .iter()
        .find_map(|scheme| {
            link.get(..scheme.len())
                .filter(|prefix| prefix.eq_ignore_ascii_case(scheme))
                .map(|_| &link[scheme.len()..])
        })
        .unwrap_or(link);

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    (!host.is_empty()).then_some(host)
}

/// Redacts contact information from chat messages.
///
/// The filter is immutable after construction and holds no per-call state,
/// so a single instance can be shared across threads.
#[derive(Debug)]
pub struct ContactFilter {
    enabled: bool,
    rules: Vec<Rule>,
    phrases: Vec<SuspiciousPhrase>,
    allowlist: DomainAllowlist,
}

impl ContactFilter {
    /// Create a new contact filter with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FilterConfig::default())
    }

    /// Create a new contact filter with custom configuration.
    #[must_use]
    pub fn with_config(config: FilterConfig) -> Self {
        Self {
            enabled: config.enabled,
            rules: builtin_rules(),
            phrases: suspicious_phrases(),
            allowlist: DomainAllowlist::new(&config.allowed_domains),
        }
    }

    /// Check if filtering is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The trusted domains exempt from link redaction.
    #[must_use]
    pub fn allowlist(&self) -> &DomainAllowlist {
        &self.allowlist
    }

    /// Filter a message that may be absent.
    ///
    /// An absent message yields an unfiltered result with no text.
    #[must_use]
    pub fn filter_message_content(&self, message: Option<&str>) -> FilterResult {
        match message {
            Some(message) => self.filter(message),
            None => FilterResult::passthrough(None),
        }
    }

    /// Filter a message and return the redacted text with a report.
    #[must_use]
    pub fn filter(&self, message: &str) -> FilterResult {
        if !self.enabled {
            return FilterResult::passthrough(Some(message));
        }

        // A redaction can expose a neighbouring match to an earlier rule (the
        // token brackets create a word boundary), so passes repeat until one
        // changes nothing. No match overlaps a token, so every productive pass
        // turns at least one byte of message text into token text; the loop
        // ends within `message.len()` passes.
        let mut text = message.to_string();
        let mut blocked_items = Vec::new();
        let mut passes = 0;
        while self.redact_pass(&mut text, &mut blocked_items) {
            passes += 1;
            trace!(pass = passes, "Redaction pass changed message");
        }

        let has_suspicious_phrase = self.suspicious_phrase(message).is_some();

        FilterResult {
            filtered_text: Some(text),
            was_filtered: passes > 0,
            blocked_items,
            has_suspicious_phrase,
        }
    }

    /// Validate a message that may be absent.
    ///
    /// Messages are always allowed; the result carries the sanitized text.
    #[must_use]
    pub fn validate_message(&self, message: Option<&str>) -> Validation {
        self.filter_message_content(message).into()
    }

    /// Validate a message before it is sent.
    #[must_use]
    pub fn validate(&self, message: &str) -> Validation {
        self.filter(message).into()
    }

    /// Run every rule once, in order. Returns whether anything was redacted.
    fn redact_pass(&self, text: &mut String, blocked_items: &mut Vec<BlockedItem>) -> bool {
        let mut redacted = false;
        for rule in &self.rules {
            redacted |= self.apply_rule(rule, text, blocked_items) > 0;
        }
        redacted
    }

    /// Replace the matches of one rule. Returns the number of redactions.
    fn apply_rule(
        &self,
        rule: &Rule,
        text: &mut String,
        blocked_items: &mut Vec<BlockedItem>,
    ) -> usize {
        let mut output = String::with_capacity(text.len());
        let mut last = 0;
        let mut count = 0;

        for found in rule.find_all(text) {
            if rule.kind == RuleKind::Url && self.allowlist.permits(found.as_str()) {
                trace!("Link on allowed domain left in place");
                continue;
            }
            output.push_str(&text[last..found.start()]);
            output.push_str(rule.replacement());
            if rule.tracks_originals() {
                blocked_items.push(BlockedItem::new(rule.kind, found.as_str()));
            }
            last = found.end();
            count += 1;
        }

        if count > 0 {
            output.push_str(&text[last..]);
            *text = output;
            debug!(
                kind = %rule.kind,
                description = rule.description,
                count,
                "Redacted contact information"
            );
        }
        count
    }

    /// The first suspicious phrase found in the message, if any.
    fn suspicious_phrase(&self, message: &str) -> Option<&SuspiciousPhrase> {
        let phrase = self.phrases.iter().find(|p| p.matches(message));
        if let Some(phrase) = phrase {
            debug!(phrase = %phrase.name, "Message contains an off-platform phrase");
        }
        phrase
    }
}

impl Default for ContactFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redaction::rules::{
        CONTACT_TOKEN, EMAIL_TOKEN, HANDLE_TOKEN, LINK_TOKEN, PHONE_TOKEN, SKYPE_TOKEN,
        WHATSAPP_TOKEN, ZOOM_TOKEN,
    };

    fn filter_with_domains(domains: &[&str]) -> ContactFilter {
        ContactFilter::with_config(FilterConfig {
            allowed_domains: domains.iter().map(ToString::to_string).collect(),
            ..Default::default()
        })
    }

    #[test]
    fn test_filter_config_default() {
        let config = FilterConfig::default();
        assert!(config.enabled);
        assert_eq!(
            config.allowed_domains,
            ["piconnect.com", "inquireconnect.com"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_filter_config_rejects_bad_domains() {
        let bad_domains = [
            "",
            "   ",
            "https://piconnect.com",
            "piconnect.com/help",
            "pi connect.com",
            "localhost",
        ];
        for bad in bad_domains {
            let config = FilterConfig {
                allowed_domains: vec![bad.to_string()],
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_contact_filter_new() {
        let filter = ContactFilter::new();
        assert!(filter.is_enabled());
        assert_eq!(filter.rules.len(), RuleKind::ALL.len());
        assert!(!filter.allowlist().domains().is_empty());
    }

    #[test]
    fn test_email_detection() {
        let filter = ContactFilter::new();
        let result = filter.filter("reach me at john.doe@example.com");

        assert!(result.text().contains(EMAIL_TOKEN));
        assert!(!result.text().contains("john.doe@example.com"));
        assert!(result.was_filtered);
        assert_eq!(
            result.blocked_items,
            vec![BlockedItem::new(RuleKind::Email, "john.doe@example.com")]
        );
    }

    #[test]
    fn test_phone_detection() {
        let filter = ContactFilter::new();
        let result = filter.filter("call 555-123-4567");

        assert_eq!(result.text(), format!("call {PHONE_TOKEN}"));
        assert!(result.was_filtered);
        assert_eq!(result.blocked_items[0].kind, RuleKind::Phone);
        assert_eq!(result.blocked_items[0].original_value, "555-123-4567");
    }

    #[test]
    fn test_allowlisted_url_passthrough() {
        let filter = filter_with_domains(&["piconnect.com"]);

        let result = filter.filter("visit piconnect.com/help");
        assert_eq!(result.text(), "visit piconnect.com/help");
        assert!(!result.was_filtered);
        assert!(result.blocked_items.is_empty());

        let result = filter.filter("visit evilsite.com");
        assert_eq!(result.text(), format!("visit {LINK_TOKEN}"));
        assert!(result.was_filtered);
        assert_eq!(
            result.blocked_items,
            vec![BlockedItem::new(RuleKind::Url, "evilsite.com")]
        );
    }

    #[test]
    fn test_mixed_allowlisted_and_external_urls() {
        let filter = filter_with_domains(&["piconnect.com"]);
        let message = "see https://www.piconnect.com/jobs and https://evilsite.com/x";
        let result = filter.filter(message);

        assert_eq!(
            result.text(),
            format!("see https://www.piconnect.com/jobs and {LINK_TOKEN}")
        );
        assert_eq!(result.blocked_items.len(), 1);
        assert_eq!(
            result.blocked_items[0].original_value,
            "https://evilsite.com/x"
        );
    }

    #[test]
    fn test_allowlist_requires_matching_host() {
        let filter = filter_with_domains(&["piconnect.com"]);

        let result = filter.filter("go to notpiconnect.com.attacker.net now");
        assert_eq!(result.text(), format!("go to {LINK_TOKEN} now"));

        let result = filter.filter("go to help.PIConnect.com now");
        assert!(!result.was_filtered);
    }

    #[test]
    fn test_link_host() {
        assert_eq!(
            link_host("https://www.example.com/a"),
            Some("www.example.com")
        );
        assert_eq!(
            link_host("HTTP://user:pw@example.com:8080?x"),
            Some("example.com")
        );
        assert_eq!(link_host("example.com#frag"), Some("example.com"));
        assert_eq!(link_host("/path"), None);
    }

    #[test]
    fn test_domain_allowlist_normalizes() {
        let allowlist = DomainAllowlist::new([" .PIConnect.com. ", "", "piconnect.com"]);
        assert_eq!(allowlist.domains(), ["piconnect.com".to_string()]);
        assert!(allowlist.contains_host("piconnect.com."));
        assert!(allowlist.contains_host("a.b.piconnect.com"));
        assert!(!allowlist.contains_host("xpiconnect.com"));
    }

    #[test]
    fn test_social_handle_detection() {
        let filter = ContactFilter::new();
        let result = filter.filter("follow @jane_doe for updates");

        assert_eq!(result.text(), format!("follow {HANDLE_TOKEN} for updates"));
        assert_eq!(
            result.blocked_items,
            vec![BlockedItem::new(RuleKind::SocialHandle, "@jane_doe")]
        );
    }

    #[test]
    fn test_flag_only_rules_redact_without_items() {
        let filter = ContactFilter::new();
        let cases = [
            ("add skype:bob_smith", format!("add {SKYPE_TOKEN}")),
            ("whatsapp 44 7946 0958", WHATSAPP_TOKEN.to_string()),
            ("name [at] mail [dot] com", EMAIL_TOKEN.to_string()),
            ("text me at 555 1234", CONTACT_TOKEN.to_string()),
        ];
        for (input, expected) in cases {
            let result = filter.filter(input);
            assert_eq!(result.text(), expected, "input {input:?}");
            assert!(result.was_filtered, "input {input:?}");
            assert!(result.blocked_items.is_empty(), "input {input:?}");
        }
    }

    #[test]
    fn test_zoom_rule_applies_when_zoom_is_allowlisted() {
        let filter = filter_with_domains(&["zoom.us"]);
        let result = filter.filter("join zoom.us/j/123456");

        assert_eq!(result.text(), format!("join {ZOOM_TOKEN}"));
        assert!(result.was_filtered);
        assert!(result.blocked_items.is_empty());
    }

    #[test]
    fn test_earlier_rule_claims_overlapping_text() {
        let filter = ContactFilter::new();
        let result = filter.filter("email me at sam@example.com");

        // The email rule runs before the phrase rule and removes the address.
        assert_eq!(result.text(), format!("email me at {EMAIL_TOKEN}"));
        assert_eq!(result.blocked_items.len(), 1);
        assert_eq!(result.blocked_items[0].kind, RuleKind::Email);
    }

    #[test]
    fn test_multiple_matches_recorded_in_order() {
        let filter = ContactFilter::new();
        let result = filter.filter("a@b.co, 555-123-4567, c@d.io");

        let kinds: Vec<_> = result.blocked_items.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![RuleKind::Email, RuleKind::Email, RuleKind::Phone]
        );
        assert_eq!(
            result.text(),
            format!("{EMAIL_TOKEN}, {PHONE_TOKEN}, {EMAIL_TOKEN}")
        );
    }

    #[test]
    fn test_settling_pass_catches_exposed_match() {
        let filter = ContactFilter::new();
        let result = filter.filter("555-123-4567skype:bob");

        assert_eq!(result.text(), format!("{PHONE_TOKEN}{SKYPE_TOKEN}"));
        assert_eq!(
            result.blocked_items,
            vec![BlockedItem::new(RuleKind::Phone, "555-123-4567")]
        );

        let again = filter.filter(result.text());
        assert_eq!(again.text(), result.text());
        assert!(!again.was_filtered);
    }

    #[test]
    fn test_long_digit_run_is_redacted_whole() {
        let filter = ContactFilter::new();
        let result = filter.filter(&"1".repeat(130));

        assert_eq!(result.text(), PHONE_TOKEN);
        assert_eq!(result.blocked_items.len(), 1);

        let again = filter.filter(result.text());
        assert_eq!(again.text(), result.text());
        assert!(!again.was_filtered);
        assert!(again.blocked_items.is_empty());
    }

    #[test]
    fn test_refiltering_long_digit_run_is_noop() {
        let filter = ContactFilter::new();
        let message = format!("ref {} ok", "9".repeat(500));
        let result = filter.filter(&message);

        assert_eq!(result.text(), format!("ref {PHONE_TOKEN} ok"));
        assert!(!filter.filter(result.text()).was_filtered);
    }

    #[test]
    fn test_absent_message() {
        let filter = ContactFilter::new();
        let result = filter.filter_message_content(None);

        assert!(result.filtered_text.is_none());
        assert!(!result.was_filtered);
        assert!(result.blocked_items.is_empty());
        assert!(!result.has_suspicious_phrase);
    }

    #[test]
    fn test_empty_message() {
        let filter = ContactFilter::new();
        let result = filter.filter_message_content(Some(""));

        assert_eq!(result.filtered_text.as_deref(), Some(""));
        assert!(!result.was_filtered);
    }

    #[test]
    fn test_clean_text_not_filtered() {
        let filter = ContactFilter::new();
        let message = "Looking forward to working together on this case.";
        let result = filter.filter(message);

        assert_eq!(result.text(), message);
        assert!(!result.was_filtered);
        assert!(!result.has_suspicious_phrase);
        assert!(result.warning().is_none());
    }

    #[test]
    fn test_suspicious_phrase_without_redaction() {
        let filter = ContactFilter::new();
        let result = filter.filter("let's take this offline");

        assert!(result.has_suspicious_phrase);
        assert!(!result.was_filtered);
        assert_eq!(result.text(), "let's take this offline");
    }

    #[test]
    fn test_suspicious_phrase_checked_on_original_text() {
        let filter = ContactFilter::new();
        let result = filter.filter("call me at 555-123-4567");

        assert_eq!(result.text(), format!("call me at {PHONE_TOKEN}"));
        assert!(result.has_suspicious_phrase);
    }

    #[test]
    fn test_repeated_calls_do_not_share_state() {
        let filter = ContactFilter::new();

        let first = filter.filter("mail a@b.co and c@d.co");
        let second = filter.filter("x@y.io");
        let third = filter.filter("mail a@b.co and c@d.co");

        assert_eq!(second.text(), EMAIL_TOKEN);
        assert_eq!(second.blocked_items.len(), 1);
        assert_eq!(first, third);
    }

    #[test]
    fn test_concurrent_calls_do_not_share_state() {
        let filter = ContactFilter::new();
        let inputs = [
            "reach me at john.doe@example.com",
            "call 555-123-4567",
            "nothing to see here",
            "visit evilsite.com",
        ];
        let expected: Vec<_> = inputs.iter().map(|m| filter.filter(m)).collect();
        let filter = &filter;

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(move || {
                        let mut results = Vec::new();
                        for _ in 0..50 {
                            for message in inputs {
                                results.push(filter.filter(message));
                            }
                        }
                        results
                    })
                })
                .collect();

            for handle in handles {
                let results = handle.join().unwrap();
                for (i, result) in results.iter().enumerate() {
                    assert_eq!(result, &expected[i % inputs.len()]);
                }
            }
        });
    }

    #[test]
    fn test_disabled_filter_passes_through() {
        let filter = ContactFilter::with_config(FilterConfig {
            enabled: false,
            ..Default::default()
        });

        assert!(!filter.is_enabled());
        let result = filter.filter("a@b.co let's take this offline");
        assert_eq!(result.text(), "a@b.co let's take this offline");
        assert!(!result.was_filtered);
        assert!(!result.has_suspicious_phrase);
    }

    #[test]
    fn test_validate_always_allows() {
        let filter = ContactFilter::new();

        let validation = filter.validate("my email is a@b.co");
        assert!(validation.allowed);
        assert!(validation.was_filtered);
        assert_eq!(validation.warning.as_deref(), Some(FILTERED_WARNING));
        assert_eq!(
            validation.filtered,
            Some(format!("my email is {EMAIL_TOKEN}"))
        );

        let validation = filter.validate("see you tomorrow");
        assert!(validation.allowed);
        assert!(!validation.was_filtered);
        assert!(validation.warning.is_none());
    }

    #[test]
    fn test_validate_absent_message() {
        let filter = ContactFilter::new();
        let validation = filter.validate_message(None);

        assert!(validation.allowed);
        assert!(validation.filtered.is_none());
        assert!(validation.warning.is_none());
    }

    #[test]
    fn test_result_warning_for_untracked_redaction() {
        let filter = ContactFilter::new();
        let result = filter.filter("skype:bob");

        assert!(result.blocked_items.is_empty());
        assert_eq!(result.warning().as_deref(), Some(MULTI_KIND_WARNING));
    }

    #[test]
    fn test_filter_result_serialize() {
        let filter = ContactFilter::new();
        let json = serde_json::to_value(filter.filter("@someone")).unwrap();

        assert_eq!(json["was_filtered"], true);
        assert_eq!(json["blocked_items"][0]["kind"], "social");
        assert_eq!(json["blocked_items"][0]["original_value"], "@someone");
    }
}
