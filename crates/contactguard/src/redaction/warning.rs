//! User-facing notices for filtered messages.

use std::collections::BTreeSet;

use super::filter::BlockedItem;
use super::rules::RuleKind;

/// Notice attached to every validated message that was filtered.
pub const FILTERED_WARNING: &str =
    "For your safety, contact information has been automatically removed from this message.";

/// Notice used when several kinds of contact information were removed.
pub const MULTI_KIND_WARNING: &str =
    "For your safety, contact information has been removed from this message.";

/// Plural phrase naming a kind in single-kind notices.
#[must_use]
pub fn kind_phrase(kind: RuleKind) -> Option<&'static str> {
    match kind {
        RuleKind::Email => Some("email addresses"),
        RuleKind::Phone => Some("phone numbers"),
        RuleKind::Url => Some("external links"),
        RuleKind::SocialHandle => Some("social media handles"),
        _ => None,
    }
}

/// Build the notice for a set of blocked items.
///
/// Returns `None` when nothing was blocked. A single kind gets a notice naming
/// it; several kinds get the generic notice.
#[must_use]
pub fn get_warning_message(blocked_items: &[BlockedItem]) -> Option<String> {
    let mut kinds = blocked_items
        .iter()
        .map(|item| item.kind)
        .collect::<BTreeSet<_>>()
        .into_iter();

    match (kinds.next(), kinds.next()) {
        (None, _) => None,
        (Some(kind), None) => Some(kind_phrase(kind).map_or_else(
            || MULTI_KIND_WARNING.to_string(),
            |phrase| format!("For your safety, {phrase} have been removed from this message."),
        )),
        (Some(_), Some(_)) => Some(MULTI_KIND_WARNING.to_string()),
    }
}
