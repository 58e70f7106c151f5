//! One message through normalize → lookup, classified into a [`LookupOutcome`].

use tracing::{error, info, instrument, warn};
use twilio_lookup::{
    normalize, CanonicalNumber, InvalidNumber, LookupError, LookupResult, LookupService, PhoneInfo,
};

/// Every way a lookup request can end. Each variant renders to exactly one reply.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Input was not an international number; no HTTP call was made.
    Invalid(InvalidNumber),
    NotFound(CanonicalNumber),
    Found(CanonicalNumber, PhoneInfo),
    /// Service answered with a non-2xx status other than 404.
    ServiceError {
        number: CanonicalNumber,
        status: u16,
        body: String,
    },
    /// Timeout, network failure, or an unreadable response.
    TransportFailure {
        number: CanonicalNumber,
        error: LookupError,
    },
}

impl LookupOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            LookupOutcome::Invalid(_) => "invalid_input",
            LookupOutcome::NotFound(_) => "not_found",
            LookupOutcome::Found(..) => "found",
            LookupOutcome::ServiceError { .. } => "service_error",
            LookupOutcome::TransportFailure { .. } => "transport_failure",
        }
    }
}

/// Normalizes `raw` and, if valid, performs a single lookup.
#[instrument(skip(service, raw))]
pub async fn resolve(service: &dyn LookupService, raw: &str) -> LookupOutcome {
    let number = match normalize(raw) {
        Ok(number) => number,
        Err(reason) => {
            info!(reason = %reason, "Rejected input as phone number");
            return LookupOutcome::Invalid(reason);
        }
    };

    match service.lookup(&number).await {
        Ok(LookupResult::Found(info)) => LookupOutcome::Found(number, info),
        Ok(LookupResult::NotFound) => LookupOutcome::NotFound(number),
        Err(LookupError::Status { status, body }) => {
            warn!(number = %number, status, body = %body, "Lookup service error");
            LookupOutcome::ServiceError {
                number,
                status,
                body,
            }
        }
        Err(err) => {
            error!(number = %number, error = ?err, "Lookup failed");
            LookupOutcome::TransportFailure { number, error: err }
        }
    }
}
