//! `contactguard` - Contact-information redaction for marketplace chat
//!
//! This library removes emails, phone numbers, external links, social
//! handles, and workaround spellings from chat messages before they are
//! stored, so that conversations stay on-platform.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod redaction;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use redaction::{
    filter_message_content, get_warning_message, validate_message, BlockedItem, ContactFilter,
    DomainAllowlist, FilterConfig, FilterResult, RuleKind, Validation,
};
