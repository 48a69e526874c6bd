// 🏢 Company Entity - one curated startup profile
//
// Every data source (profile sheets, curated seed) maps into this single
// canonical shape. Records are authored as static data and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AtlasError;

// ============================================================================
// READINESS
// ============================================================================

/// Editorial classification of how easy cross-border engagement is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Readiness {
    /// Global-ready
    Green,

    /// Japan-first
    Yellow,

    /// Highly domestic
    Red,
}

/// Display metadata for a readiness value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadinessMeta {
    pub label: &'static str,
    pub emoji: &'static str,
    pub hint: &'static str,

    /// "What this means for overseas partners"
    pub partner_note: &'static str,
}

impl Readiness {
    pub const ALL: [Readiness; 3] = [Readiness::Green, Readiness::Yellow, Readiness::Red];

    pub fn as_str(&self) -> &'static str {
        match self {
            Readiness::Green => "green",
            Readiness::Yellow => "yellow",
            Readiness::Red => "red",
        }
    }

    pub fn meta(&self) -> ReadinessMeta {
        match self {
            Readiness::Green => ReadinessMeta {
                label: "Global-ready",
                emoji: "🟢",
                hint: "Can engage quickly with overseas investors/partners (English support & clear positioning).",
                partner_note: "The company can engage quickly with international investors/partners and has clear messaging in English.",
            },
            Readiness::Yellow => ReadinessMeta {
                label: "Japan-first",
                emoji: "🟡",
                hint: "Strong in Japan; cross-border discussions may benefit from local bridging and context-setting.",
                partner_note: "Initial discussions are viable, but benefit from context-setting (local decision-making, compliance, and partnership structure).",
            },
            Readiness::Red => ReadinessMeta {
                label: "Highly domestic",
                emoji: "🔴",
                hint: "Heavily shaped by local regulation/operations; international engagement needs careful structuring.",
                partner_note: "International engagement may require careful regulatory and operational structuring before proceeding.",
            },
        }
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Readiness {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "green" => Ok(Readiness::Green),
            "yellow" => Ok(Readiness::Yellow),
            "red" => Ok(Readiness::Red),
            _ => Err(AtlasError::InvalidReadiness(s.to_string())),
        }
    }
}

// ============================================================================
// TOTAL FUNDING
// ============================================================================

/// Total funding as published: a free-text estimate, a numeric amount, or nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TotalFunding {
    /// Editorial text, e.g. "$10–20M (est.)"
    Label(String),

    /// Disclosed amount in millions of USD
    UsdMillions(f64),

    Undisclosed,
}

impl fmt::Display for TotalFunding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotalFunding::Label(label) => f.write_str(label),
            TotalFunding::UsdMillions(amount) => write!(f, "${}M", amount),
            TotalFunding::Undisclosed => f.write_str("Undisclosed"),
        }
    }
}

// ============================================================================
// COMPANY ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Stable slug, unique across a catalog (e.g. "sustainable-lab")
    pub id: String,

    pub name_en: String,

    /// Localized (Japanese) name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_jp: Option<String>,

    pub one_liner: String,

    /// Ordered category tags; may be empty
    pub tags: Vec<String>,

    pub founded: i32,

    /// Headquarters, e.g. "Nagoya, Japan"
    pub hq: String,

    /// Free-text stage label ("Seed", "Series A", "Unknown", ...)
    pub funding_stage: String,

    pub total_funding: TotalFunding,
    pub website: String,
    pub readiness: Readiness,

    // ========================================================================
    // NARRATIVE (one entry per paragraph)
    // ========================================================================
    #[serde(default)]
    pub what_they_do: Vec<String>,
    #[serde(default)]
    pub why_matters_in_japan: Vec<String>,
    #[serde(default)]
    pub target_customers: Vec<String>,
    #[serde(default)]
    pub business_model: Vec<String>,
    #[serde(default)]
    pub competitive_landscape: Vec<String>,
    #[serde(default)]
    pub what_makes_interesting: Vec<String>,
    #[serde(default)]
    pub editors_note: String,

    /// "Mon YYYY" label; empty when never reviewed
    #[serde(default)]
    pub last_updated: String,

    /// Editorial flag for directory featuring
    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub disclosure: String,
}

impl Company {
    /// Text the free-text search scans: names, summary, HQ, stage and tags.
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.name_en,
            self.name_jp.as_deref().unwrap_or(""),
            self.one_liner,
            self.hq,
            self.funding_stage,
            self.tags.join(" ")
        )
        .to_lowercase()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// "Name (名前)" when a localized name exists, else just the name.
    pub fn display_name(&self) -> String {
        match &self.name_jp {
            Some(jp) => format!("{} ({})", self.name_en, jp),
            None => self.name_en.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> Company {
        Company {
            id: "acme".to_string(),
            name_en: "Acme".to_string(),
            name_jp: Some("アクメ".to_string()),
            one_liner: "Rockets for roadrunners.".to_string(),
            tags: vec!["DeepTech".to_string(), "B2B".to_string()],
            founded: 2020,
            hq: "Tokyo, Japan".to_string(),
            funding_stage: "Seed".to_string(),
            total_funding: TotalFunding::Undisclosed,
            website: "https://example.com".to_string(),
            readiness: Readiness::Red,
            what_they_do: vec![],
            why_matters_in_japan: vec![],
            target_customers: vec![],
            business_model: vec![],
            competitive_landscape: vec![],
            what_makes_interesting: vec![],
            editors_note: String::new(),
            last_updated: String::new(),
            featured: false,
            disclosure: String::new(),
        }
    }

    #[test]
    fn test_readiness_parse() {
        assert_eq!("green".parse::<Readiness>().unwrap(), Readiness::Green);
        assert_eq!(" Yellow ".parse::<Readiness>().unwrap(), Readiness::Yellow);
        assert!(matches!(
            "purple".parse::<Readiness>(),
            Err(AtlasError::InvalidReadiness(_))
        ));
    }

    #[test]
    fn test_readiness_meta() {
        assert_eq!(Readiness::Green.meta().label, "Global-ready");
        assert_eq!(Readiness::Yellow.meta().emoji, "🟡");
        assert_eq!(Readiness::Red.meta().label, "Highly domestic");
    }

    #[test]
    fn test_readiness_serializes_lowercase() {
        let json = serde_json::to_string(&Readiness::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
    }

    #[test]
    fn test_haystack_is_lowercase_and_complete() {
        let hay = company().search_haystack();
        assert!(hay.contains("acme"));
        assert!(hay.contains("アクメ"));
        assert!(hay.contains("roadrunners"));
        assert!(hay.contains("tokyo, japan"));
        assert!(hay.contains("seed"));
        assert!(hay.contains("deeptech b2b"));
    }

    #[test]
    fn test_display_name() {
        let mut c = company();
        assert_eq!(c.display_name(), "Acme (アクメ)");
        c.name_jp = None;
        assert_eq!(c.display_name(), "Acme");
    }

    #[test]
    fn test_total_funding_display() {
        assert_eq!(TotalFunding::UsdMillions(30.0).to_string(), "$30M");
        assert_eq!(TotalFunding::Undisclosed.to_string(), "Undisclosed");
        assert_eq!(
            TotalFunding::Label("$10–20M (est.)".to_string()).to_string(),
            "$10–20M (est.)"
        );
    }
}
