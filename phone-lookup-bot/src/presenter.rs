//! Renders lookup results as fixed-layout reply text. Pure functions, no I/O.

use twilio_lookup::{CanonicalNumber, LookupError, LookupResult, PhoneInfo};

use crate::i18n::{Locale, ERROR_GLYPH, PLACEHOLDER};
use crate::pipeline::LookupOutcome;

pub fn start_text(locale: Locale) -> &'static str {
    locale.messages().start
}

pub fn help_text(locale: Locale) -> &'static str {
    locale.messages().help
}

/// Retry prompt for input that is not an international number.
pub fn render_invalid(locale: Locale) -> String {
    locale.messages().invalid_number.to_string()
}

/// Not found: one line. Found: six lines (number, country, name, caller type, carrier, line type).
pub fn render_result(result: &LookupResult, number: &CanonicalNumber, locale: Locale) -> String {
    match result {
        LookupResult::NotFound => render_not_found(number, locale),
        LookupResult::Found(info) => render_info(info, number, locale),
    }
}

fn render_not_found(number: &CanonicalNumber, locale: Locale) -> String {
    format!("{} {} ({})", ERROR_GLYPH, locale.messages().not_found, number)
}

fn render_info(info: &PhoneInfo, number: &CanonicalNumber, locale: Locale) -> String {
    let m = locale.messages();
    let value = |v: Option<&str>| v.unwrap_or(PLACEHOLDER).to_string();

    let lines = [
        format!("📞 {}: {}", m.label_number, number),
        format!("🌍 {}: {}", m.label_country, value(info.country())),
        format!("👤 {}: {}", m.label_name, value(info.name())),
        format!("🏷️ {}: {}", m.label_caller_type, value(info.caller_type())),
        format!("📡 {}: {}", m.label_carrier, value(info.carrier_name())),
        format!("🔌 {}: {}", m.label_line_type, value(info.network_type())),
    ];
    lines.join("\n")
}

/// Provider errors show status and body snippet; everything else gets the generic message.
pub fn render_lookup_error(error: &LookupError, locale: Locale) -> String {
    let m = locale.messages();
    match error {
        LookupError::Status { status, body } => {
            format!("{}: {}\n{}", m.provider_error, status, body)
        }
        other => format!("{}: {}", m.unexpected_error, other),
    }
}

pub fn render_outcome(outcome: &LookupOutcome, locale: Locale) -> String {
    match outcome {
        LookupOutcome::Invalid(_) => render_invalid(locale),
        LookupOutcome::NotFound(number) => render_not_found(number, locale),
        LookupOutcome::Found(number, info) => render_info(info, number, locale),
        LookupOutcome::ServiceError { status, body, .. } => render_lookup_error(
            &LookupError::Status {
                status: *status,
                body: body.clone(),
            },
            locale,
        ),
        LookupOutcome::TransportFailure { error, .. } => render_lookup_error(error, locale),
    }
}
