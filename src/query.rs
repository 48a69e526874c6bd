// 🔎 Directory Query Engine
//
// Pure functions from (companies, params) to the visible subset.
// Filtering is an order-preserving predicate scan; sorting runs afterwards.

use chrono::Month;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::company::{Company, Readiness};
use crate::error::AtlasError;

/// How many companies the "recently updated" strip shows
pub const RECENT_LIMIT: usize = 4;

/// How many companies the "featured" strip shows
pub const FEATURED_LIMIT: usize = 2;

// ============================================================================
// SORT MODE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Input order, no ranking
    #[default]
    Relevance,

    /// Display name, locale-aware
    Name,

    /// Most recently founded first
    FoundedDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Relevance, SortMode::Name, SortMode::FoundedDesc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::Name => "name",
            SortMode::FoundedDesc => "founded_desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Relevance => "Relevance",
            SortMode::Name => "Name",
            SortMode::FoundedDesc => "Newest",
        }
    }

    /// Next mode in button order (wraps)
    pub fn next(&self) -> Self {
        match self {
            SortMode::Relevance => SortMode::Name,
            SortMode::Name => SortMode::FoundedDesc,
            SortMode::FoundedDesc => SortMode::Relevance,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(SortMode::Relevance),
            "name" => Ok(SortMode::Name),
            "founded_desc" | "founded-desc" | "founded" => Ok(SortMode::FoundedDesc),
            _ => Err(AtlasError::InvalidSortMode(s.to_string())),
        }
    }
}

// ============================================================================
// FACET ("all" or one value)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: PartialEq> Facet<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => f.write_str("all"),
            Facet::Only(value) => value.fmt(f),
        }
    }
}

impl FromStr for Facet<Readiness> {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Facet::All)
        } else {
            s.parse().map(Facet::Only)
        }
    }
}

impl FromStr for Facet<String> {
    type Err = AtlasError;

    // Stage labels are matched verbatim, so only the literal "all" is special.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Facet::All)
        } else {
            Ok(Facet::Only(s.to_string()))
        }
    }
}

// ============================================================================
// FILTER PARAMS
// ============================================================================

/// Immutable snapshot of the directory controls.
///
/// Every change produces a new value; the query is recomputed from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub query: String,

    /// Required tags (AND semantics), in selection order
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub readiness: Facet<Readiness>,

    #[serde(default)]
    pub stage: Facet<String>,

    #[serde(default)]
    pub sort: SortMode,
}

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self { query: query.into(), ..self.clone() }
    }

    pub fn with_tags<I, S>(&self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { tags: tags.into_iter().map(Into::into).collect(), ..self.clone() }
    }

    /// Add the tag if absent, remove it if present.
    pub fn toggle_tag(&self, tag: &str) -> Self {
        let mut tags = self.tags.clone();
        if let Some(pos) = tags.iter().position(|t| t == tag) {
            tags.remove(pos);
        } else {
            tags.push(tag.to_string());
        }
        Self { tags, ..self.clone() }
    }

    pub fn with_readiness(&self, readiness: Facet<Readiness>) -> Self {
        Self { readiness, ..self.clone() }
    }

    pub fn with_stage(&self, stage: Facet<String>) -> Self {
        Self { stage, ..self.clone() }
    }

    pub fn with_sort(&self, sort: SortMode) -> Self {
        Self { sort, ..self.clone() }
    }

    /// Back to the defaults: no filters, relevance order.
    pub fn reset(&self) -> Self {
        Self::default()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.query.trim().is_empty()
            && self.tags.is_empty()
            && self.readiness.is_all()
            && self.stage.is_all()
    }

    /// Whether a single company passes all four filters.
    pub fn matches(&self, company: &Company) -> bool {
        let needle = self.query.trim().to_lowercase();

        if !needle.is_empty() && !company.search_haystack().contains(&needle) {
            return false;
        }
        if !self.readiness.admits(&company.readiness) {
            return false;
        }
        if !self.stage.admits(&company.funding_stage) {
            return false;
        }
        self.tags.iter().all(|t| company.has_tag(t))
    }
}

// ============================================================================
// QUERY
// ============================================================================

/// Filter then sort. The result is always a subset of `companies`.
pub fn filter_companies(companies: &[Company], params: &FilterParams) -> Vec<Company> {
    let mut out: Vec<Company> = companies
        .iter()
        .filter(|c| params.matches(c))
        .cloned()
        .collect();

    sort_companies(&mut out, params.sort);

    tracing::debug!(
        total = companies.len(),
        visible = out.len(),
        sort = %params.sort,
        "directory query"
    );

    out
}

/// Stable in-place sort; `Relevance` leaves the order untouched.
pub fn sort_companies(companies: &mut [Company], mode: SortMode) {
    match mode {
        SortMode::Relevance => {}
        SortMode::Name => companies.sort_by(|a, b| locale_compare(&a.name_en, &b.name_en)),
        SortMode::FoundedDesc => companies.sort_by(|a, b| b.founded.cmp(&a.founded)),
    }
}

/// Case-insensitive comparison with the raw string as tie-breaker.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// ============================================================================
// AUXILIARY VIEWS
// ============================================================================

/// Distinct tags across the collection, sorted.
pub fn all_tags(companies: &[Company]) -> Vec<String> {
    companies
        .iter()
        .flat_map(|c| c.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct funding-stage labels, sorted.
pub fn all_stages(companies: &[Company]) -> Vec<String> {
    companies
        .iter()
        .map(|c| c.funding_stage.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn find_company<'a>(companies: &'a [Company], id: &str) -> Option<&'a Company> {
    companies.iter().find(|c| c.id == id)
}

/// Featured companies, falling back to the first entries when none are flagged.
pub fn featured(companies: &[Company]) -> Vec<Company> {
    let flagged: Vec<&Company> = companies.iter().filter(|c| c.featured).collect();
    let pool: Vec<&Company> = if flagged.is_empty() {
        companies.iter().collect()
    } else {
        flagged
    };

    pool.into_iter().take(FEATURED_LIMIT).cloned().collect()
}

/// Newest `last_updated` first; unparseable labels sort as oldest.
pub fn recently_updated(companies: &[Company], limit: usize) -> Vec<Company> {
    let mut out = companies.to_vec();
    out.sort_by_key(|c| std::cmp::Reverse(parse_month_year(&c.last_updated)));
    out.truncate(limit);
    out
}

/// Parse "Jan 2026" into `202601`. Anything unparseable yields 0.
pub fn parse_month_year(s: &str) -> i32 {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() < 2 {
        return 0;
    }

    let month = match parse_month(parts[0]) {
        Some(m) => m.number_from_month() as i32,
        None => return 0,
    };

    match parts[1].parse::<i32>() {
        Ok(year) if year != 0 => year
            .checked_mul(100)
            .and_then(|y| y.checked_add(month))
            .unwrap_or(0),
        _ => 0,
    }
}

/// Three-letter abbreviations plus "sept"; full names are not month tokens.
fn parse_month(token: &str) -> Option<Month> {
    let token = token.to_lowercase();
    match token.as_str() {
        "sept" => Some(Month::September),
        t if t.chars().count() == 3 => t.parse::<Month>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogSource};

    fn sample() -> Vec<Company> {
        Catalog::load(CatalogSource::Profiles).into_companies()
    }

    fn ids(companies: &[Company]) -> Vec<&str> {
        companies.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_default_params_return_everything_in_order() {
        let companies = sample();
        let out = filter_companies(&companies, &FilterParams::new());
        assert_eq!(ids(&out), ids(&companies));
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let companies = sample();
        let out = filter_companies(&companies, &FilterParams::new().with_query("  FINTECH "));
        assert_eq!(ids(&out), vec!["sustainable-lab", "payzen"]);
    }

    #[test]
    fn test_query_matches_localized_name_and_hq() {
        let companies = sample();
        let jp = filter_companies(&companies, &FilterParams::new().with_query("インスペクサ"));
        assert_eq!(ids(&jp), vec!["inspexa"]);

        let hq = filter_companies(&companies, &FilterParams::new().with_query("osaka"));
        assert_eq!(ids(&hq), vec!["carbonweave"]);
    }

    #[test]
    fn test_query_does_not_scan_narrative_fields() {
        let companies = sample();
        // Only appears in what_they_do / editors_note
        let out = filter_companies(&companies, &FilterParams::new().with_query("terrast"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_tags_use_and_semantics() {
        let companies = sample();
        let both = filter_companies(&companies, &FilterParams::new().with_tags(["AI", "Manufacturing"]));
        assert_eq!(ids(&both), vec!["inspexa"]);

        let none = filter_companies(&companies, &FilterParams::new().with_tags(["AI", "Climate"]));
        assert!(none.is_empty());
    }

    #[test]
    fn test_tags_are_exact_match() {
        let companies = sample();
        let out = filter_companies(&companies, &FilterParams::new().with_tags(["fintech"]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_readiness_filter() {
        let companies = sample();
        let green = filter_companies(
            &companies,
            &FilterParams::new().with_readiness(Facet::Only(Readiness::Green)),
        );
        assert_eq!(ids(&green), vec!["inspexa"]);

        let red = filter_companies(
            &companies,
            &FilterParams::new().with_readiness(Facet::Only(Readiness::Red)),
        );
        assert!(red.is_empty());
    }

    #[test]
    fn test_stage_filter_is_case_sensitive() {
        let companies = sample();
        let seed = filter_companies(&companies, &FilterParams::new().with_stage(Facet::Only("Seed".into())));
        assert_eq!(ids(&seed), vec!["payzen"]);

        let lower = filter_companies(&companies, &FilterParams::new().with_stage(Facet::Only("seed".into())));
        assert!(lower.is_empty());
    }

    #[test]
    fn test_filters_combine() {
        let companies = sample();
        let params = FilterParams::new()
            .with_query("japan")
            .with_readiness(Facet::Only(Readiness::Yellow))
            .with_tags(["SaaS"]);
        let out = filter_companies(&companies, &params);
        assert_eq!(ids(&out), vec!["sustainable-lab", "carbonweave"]);
    }

    #[test]
    fn test_sort_by_name() {
        let companies = sample();
        let out = filter_companies(&companies, &FilterParams::new().with_sort(SortMode::Name));
        assert_eq!(ids(&out), vec!["carbonweave", "inspexa", "payzen", "sustainable-lab"]);
    }

    #[test]
    fn test_sort_founded_desc_is_stable() {
        let companies = sample();
        let out = filter_companies(&companies, &FilterParams::new().with_sort(SortMode::FoundedDesc));
        // sustainable-lab and carbonweave share 2019 and keep input order
        assert_eq!(ids(&out), vec!["payzen", "inspexa", "sustainable-lab", "carbonweave"]);
    }

    #[test]
    fn test_locale_compare_ignores_case() {
        assert_eq!(locale_compare("abeja", "Mujin"), Ordering::Less);
        assert_eq!(locale_compare("ABEJA", "abeja"), Ordering::Less);
        assert_eq!(locale_compare("ubie", "Ubie"), Ordering::Greater);
        assert_eq!(locale_compare("Same", "Same"), Ordering::Equal);
    }

    #[test]
    fn test_toggle_tag_and_reset() {
        let params = FilterParams::new().with_sort(SortMode::Name).toggle_tag("AI");
        assert_eq!(params.tags, vec!["AI"]);
        let params = params.toggle_tag("B2B").toggle_tag("AI");
        assert_eq!(params.tags, vec!["B2B"]);

        let params = params.with_query("x").reset();
        assert!(params.is_unfiltered());
        assert_eq!(params.sort, SortMode::Relevance);
    }

    #[test]
    fn test_all_tags_and_stages() {
        let companies = sample();
        let tags = all_tags(&companies);
        assert_eq!(tags.first().map(String::as_str), Some("AI"));
        assert!(tags.windows(2).all(|w| w[0] < w[1]));
        assert!(tags.contains(&"Fintech".to_string()));

        assert_eq!(all_stages(&companies), vec!["Private", "Seed", "Series A", "Series B"]);
        assert!(all_tags(&[]).is_empty());
    }

    #[test]
    fn test_parse_month_year() {
        assert_eq!(parse_month_year("Jan 2026"), 202601);
        assert_eq!(parse_month_year("Dec 2025"), 202512);
        assert_eq!(parse_month_year("Nov 2025"), 202511);
        assert!(parse_month_year("Dec 2025") > parse_month_year("Nov 2025"));
        assert_eq!(parse_month_year("sept 2024"), 202409);
        assert_eq!(parse_month_year("  MAR   2023 "), 202303);
    }

    #[test]
    fn test_parse_month_year_garbage_is_zero() {
        assert_eq!(parse_month_year("garbage"), 0);
        assert_eq!(parse_month_year(""), 0);
        assert_eq!(parse_month_year("Foo 2026"), 0);
        assert_eq!(parse_month_year("Jan twenty"), 0);
        assert_eq!(parse_month_year("Jan 0"), 0);
    }

    #[test]
    fn test_parse_month_year_overflowing_year_is_zero() {
        assert_eq!(parse_month_year("Jan 99999999"), 0);
        assert_eq!(parse_month_year("Dec -99999999"), 0);
        assert_eq!(parse_month_year("Dec 21474836"), 2147483612);
    }

    #[test]
    fn test_parse_month_year_rejects_full_month_names() {
        assert_eq!(parse_month_year("January 2026"), 0);
        assert_eq!(parse_month_year("September 2024"), 0);
        assert_eq!(parse_month_year("Sep 2024"), 202409);
    }

    #[test]
    fn test_featured_prefers_flagged() {
        let companies = sample();
        assert_eq!(ids(&featured(&companies)), vec!["sustainable-lab", "inspexa"]);

        let unflagged: Vec<Company> = companies
            .into_iter()
            .map(|mut c| {
                c.featured = false;
                c
            })
            .collect();
        assert_eq!(ids(&featured(&unflagged)), vec!["sustainable-lab", "payzen"]);
    }

    #[test]
    fn test_recently_updated_puts_unparseable_last() {
        let mut companies = sample();
        companies[0].last_updated = "someday".to_string();
        companies[3].last_updated = "Mar 2026".to_string();

        let out = recently_updated(&companies, 3);
        assert_eq!(ids(&out), vec!["carbonweave", "payzen", "inspexa"]);
    }

    #[test]
    fn test_facet_parsing() {
        assert_eq!("all".parse::<Facet<Readiness>>().unwrap(), Facet::All);
        assert_eq!(
            "red".parse::<Facet<Readiness>>().unwrap(),
            Facet::Only(Readiness::Red)
        );
        assert!("blue".parse::<Facet<Readiness>>().is_err());
        assert_eq!(
            "Series A".parse::<Facet<String>>().unwrap(),
            Facet::Only("Series A".to_string())
        );
    }

    #[test]
    fn test_sort_mode_parsing() {
        assert_eq!("founded_desc".parse::<SortMode>().unwrap(), SortMode::FoundedDesc);
        assert_eq!("Name".parse::<SortMode>().unwrap(), SortMode::Name);
        assert!(matches!(
            "random".parse::<SortMode>(),
            Err(AtlasError::InvalidSortMode(_))
        ));
    }
}
