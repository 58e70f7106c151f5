//! Lookup v2 response model.
//!
//! Every field is optional; Twilio omits or nulls data packages that were not requested or are
//! unavailable for the number's region (CNAM is mostly North America only). Accessors treat an
//! absent parent object, a null, and an empty string the same way: `None`.

use serde::Deserialize;

/// `caller_name` data package.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CallerName {
    pub caller_name: Option<String>,
    pub caller_type: Option<String>,
    pub error_code: Option<i64>,
}

/// `carrier` data package.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Carrier {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub mobile_country_code: Option<String>,
    pub mobile_network_code: Option<String>,
}

/// `line_type_intelligence` data package.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LineTypeIntelligence {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub carrier_name: Option<String>,
    pub error_code: Option<i64>,
}

/// 2xx body of `GET /v2/PhoneNumbers/{number}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PhoneInfo {
    pub phone_number: Option<String>,
    pub country_code: Option<String>,
    pub calling_country_code: Option<String>,
    pub national_format: Option<String>,
    pub valid: Option<bool>,
    pub caller_name: Option<CallerName>,
    pub carrier: Option<Carrier>,
    pub line_type_intelligence: Option<LineTypeIntelligence>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl PhoneInfo {
    /// ISO country code, e.g. `US`.
    pub fn country(&self) -> Option<&str> {
        present(&self.country_code)
    }

    /// CNAM caller name.
    pub fn name(&self) -> Option<&str> {
        self.caller_name.as_ref().and_then(|c| present(&c.caller_name))
    }

    /// `CONSUMER` / `BUSINESS`.
    pub fn caller_type(&self) -> Option<&str> {
        self.caller_name.as_ref().and_then(|c| present(&c.caller_type))
    }

    /// Carrier name from the `carrier` package only.
    pub fn carrier_name(&self) -> Option<&str> {
        self.carrier.as_ref().and_then(|c| present(&c.name))
    }

    /// Carrier network type; falls back to the line type intelligence type.
    pub fn network_type(&self) -> Option<&str> {
        self.carrier
            .as_ref()
            .and_then(|c| present(&c.kind))
            .or_else(|| {
                self.line_type_intelligence
                    .as_ref()
                    .and_then(|l| present(&l.kind))
            })
    }
}

/// Outcome of a lookup that reached the service and got a usable answer.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    Found(PhoneInfo),
    /// The service answered 404: the number is unknown to it.
    NotFound,
}

impl LookupResult {
    pub fn info(&self) -> Option<&PhoneInfo> {
        match self {
            LookupResult::Found(info) => Some(info),
            LookupResult::NotFound => None,
        }
    }
}
