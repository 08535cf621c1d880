use serde::{Deserialize, Serialize};

/// UI language of the insights panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "zh" | "zh-cn" | "cn" => Some(Self::Zh),
            "en" | "en-us" | "en-gb" => Some(Self::En),
            _ => None,
        }
    }

    /// Symbol used when a statement carries no currency of its own.
    pub fn default_currency_symbol(&self) -> &'static str {
        match self {
            Self::Zh => "\u{00a5}",
            Self::En => "$",
        }
    }

    /// Decimal places for scaled monetary amounts.
    pub fn money_decimals(&self) -> usize {
        match self {
            Self::Zh => 0,
            Self::En => 1,
        }
    }

    /// Unit scale used when the caller has no explicit preference.
    pub fn default_unit(&self) -> UnitScale {
        match self {
            Self::Zh => UnitScale::HundredMillion,
            Self::En => UnitScale::Billion,
        }
    }
}

/// Magnitude in which monetary amounts are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitScale {
    HundredMillion,
    Billion,
    Million,
}

impl UnitScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HundredMillion => "hundred_million",
            Self::Billion => "billion",
            Self::Million => "million",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "hundred_million" => Some(Self::HundredMillion),
            "billion" => Some(Self::Billion),
            "million" => Some(Self::Million),
            _ => None,
        }
    }

    pub fn divider(&self) -> f64 {
        match self {
            Self::HundredMillion => 1e8,
            Self::Billion => 1e9,
            Self::Million => 1e6,
        }
    }

    /// Suffix appended to a formatted amount, e.g. "¥5000亿" or "$1.2B".
    pub fn suffix(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::HundredMillion, Language::Zh) => "\u{4ebf}",
            (Self::HundredMillion, Language::En) => " hundred million",
            (Self::Billion, Language::Zh) => "\u{5341}\u{4ebf}",
            (Self::Billion, Language::En) => "B",
            (Self::Million, Language::Zh) => "\u{767e}\u{4e07}",
            (Self::Million, Language::En) => "M",
        }
    }

    /// Axis label for charts.
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::HundredMillion, Language::Zh) => "\u{4ebf}",
            (Self::HundredMillion, Language::En) => "hundred million",
            (Self::Billion, Language::Zh) => "\u{5341}\u{4ebf}",
            (Self::Billion, Language::En) => "billion",
            (Self::Million, Language::Zh) => "\u{767e}\u{4e07}",
            (Self::Million, Language::En) => "million",
        }
    }
}

/// Display preferences threaded explicitly into the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(default)]
    pub language: Language,
    /// ISO code to convert amounts into. `None` keeps the statement currency.
    #[serde(default)]
    pub currency: Option<String>,
    /// Explicit unit preference. `None` follows the language default.
    #[serde(default)]
    pub unit: Option<UnitScale>,
}

impl DisplayOptions {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            currency: None,
            unit: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_unit(mut self, unit: UnitScale) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn unit(&self) -> UnitScale {
        self.unit.unwrap_or_else(|| self.language.default_unit())
    }
}
