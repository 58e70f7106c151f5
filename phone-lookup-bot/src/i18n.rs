//! User-facing strings. Arabic is the default locale; English is available via `BOT_LOCALE=en`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Placeholder for a value the lookup service did not return.
pub const PLACEHOLDER: &str = "—";
pub const ERROR_GLYPH: &str = "❌";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Arabic,
    English,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown locale '{0}', expected 'ar' or 'en'")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" | "arabic" => Ok(Locale::Arabic),
            "en" | "english" => Ok(Locale::English),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::Arabic => "ar",
            Locale::English => "en",
        })
    }
}

/// Every string the bot sends, for one locale.
#[derive(Debug)]
pub struct Messages {
    pub start: &'static str,
    pub help: &'static str,
    pub invalid_number: &'static str,
    pub not_found: &'static str,
    pub provider_error: &'static str,
    pub unexpected_error: &'static str,
    pub label_number: &'static str,
    pub label_country: &'static str,
    pub label_name: &'static str,
    pub label_caller_type: &'static str,
    pub label_carrier: &'static str,
    pub label_line_type: &'static str,
}

static ARABIC: Messages = Messages {
    start: "أهلاً! أرسل رقم الهاتف بالتنسيق الدولي مثل:\n+14155552671\n\
            سأحاول جلب الدولة/شركة الاتصال/نوع الخط، والاسم إذا متاح.",
    help: "طريقة الاستخدام:\n\
           • أرسل الرقم بصيغة دولية يبدأ بـ +\n\
           • مثال: +9705XXXXXXXX\n\
           • ملاحظة: إظهار الاسم (CNAM) متاح غالبًا للأرقام الأمريكية فقط.",
    invalid_number: "أرسل رقمًا بالتنسيق الدولي (مثال: +14155552671).",
    not_found: "الرقم غير موجود في خدمة البحث",
    provider_error: "خطأ من مزود الخدمة",
    unexpected_error: "حدث خطأ غير متوقع",
    label_number: "الرقم",
    label_country: "الدولة",
    label_name: "الاسم",
    label_caller_type: "نوع المتصل",
    label_carrier: "شركة الاتصال",
    label_line_type: "نوع الخط",
};

static ENGLISH: Messages = Messages {
    start: "Hi! Send a phone number in international format, for example:\n+14155552671\n\
            I will try to fetch the country, carrier, line type, and the caller name when available.",
    help: "How to use:\n\
           • Send the number in international format starting with +\n\
           • Example: +9705XXXXXXXX\n\
           • Note: caller name (CNAM) is mostly available for US numbers only.",
    invalid_number: "Send a number in international format (example: +14155552671).",
    not_found: "Number not found in the lookup service",
    provider_error: "Lookup provider error",
    unexpected_error: "An unexpected error occurred",
    label_number: "Number",
    label_country: "Country",
    label_name: "Name",
    label_caller_type: "Caller type",
    label_carrier: "Carrier",
    label_line_type: "Line type",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Arabic => &ARABIC,
            Locale::English => &ENGLISH,
        }
    }
}
