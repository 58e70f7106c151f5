//! # Twilio Lookup client
//!
//! Turns freeform user text into an E.164 [`CanonicalNumber`] and queries the Twilio Lookup v2
//! API for carrier, line type and caller name data.
//!
//! - [`normalize`]: strict international-format parsing (no default region).
//! - [`LookupService`]: the seam handlers depend on; [`TwilioLookupClient`] is the HTTP impl.
//! - [`mask_token`]: safe logging of account identifiers and secrets.

mod client;
mod error;
mod mask;
mod model;
mod normalize;

pub use client::{
    LookupConfig, LookupService, TwilioLookupClient, BODY_SNIPPET_LIMIT, DEFAULT_FIELDS,
    DEFAULT_LOOKUP_URL, DEFAULT_TIMEOUT_SECS,
};
pub use error::{truncate_chars, LookupError};
pub use mask::mask_token;
pub use model::{CallerName, Carrier, LineTypeIntelligence, LookupResult, PhoneInfo};
pub use normalize::{normalize, CanonicalNumber, InvalidNumber};
