//! Contact-information redaction for chat messages.
//!
//! Messages pass through an ordered table of rules that detect emails, phone
//! numbers, links, social handles, and common workaround spellings. Matches
//! are replaced with fixed tokens such as `[EMAIL REDACTED]`; the filter
//! never blocks a message outright.
//!
//! - **Ordered rules**: each rule sees the output of the ones before it, so
//!   overlapping detections are claimed by the earliest rule.
//!
//! - **Domain allowlist**: links to trusted domains are left in place.
//!
//! - **Suspicious phrases**: "let's take this offline" style phrases are
//!   reported but not redacted.
//!
//! # Example
//!
//! ```
//! use contactguard::redaction::{ContactFilter, FilterConfig, get_warning_message};
//!
//! let filter = ContactFilter::with_config(FilterConfig {
//!     allowed_domains: vec!["piconnect.com".to_string()],
//!     ..Default::default()
//! });
//!
//! let result = filter.filter("mail me: jo@example.com or see piconnect.com/help");
//! assert_eq!(result.text(), "mail me: [EMAIL REDACTED] or see piconnect.com/help");
//!
//! if result.was_filtered {
//!     println!("{}", get_warning_message(&result.blocked_items).unwrap_or_default());
//! }
//! ```

mod filter;
mod rules;
mod warning;

use std::sync::LazyLock;

pub use filter::{
    BlockedItem, ContactFilter, DomainAllowlist, FilterConfig, FilterResult, Validation,
};
pub use rules::{
    builtin_rules, suspicious_phrases, Rule, RuleKind, SuspiciousPhrase, CONTACT_TOKEN,
    EMAIL_TOKEN, HANDLE_TOKEN, LINK_TOKEN, PHONE_TOKEN, REDACTION_TOKENS, SKYPE_TOKEN,
    WHATSAPP_TOKEN, ZOOM_TOKEN,
};
pub use warning::{get_warning_message, kind_phrase, FILTERED_WARNING, MULTI_KIND_WARNING};

static DEFAULT_FILTER: LazyLock<ContactFilter> = LazyLock::new(ContactFilter::new);

/// Filter a message with the default configuration.
///
/// Build a [`ContactFilter`] to use a different domain allowlist.
#[must_use]
pub fn filter_message_content(message: Option<&str>) -> FilterResult {
    DEFAULT_FILTER.filter_message_content(message)
}

/// Validate a message with the default configuration.
#[must_use]
pub fn validate_message(message: Option<&str>) -> Validation {
    DEFAULT_FILTER.validate_message(message)
}
