// 📇 Profile sheets - full editorial records
//
// The directory's primary dataset. Each sheet carries the complete narrative
// shown on a company profile page.

use crate::company::{Company, Readiness, TotalFunding};

/// Source shape of a profile sheet, as authored.
#[derive(Debug, Clone, Copy)]
pub struct ProfileRecord {
    pub id: &'static str,
    pub featured: bool,
    pub name_en: &'static str,
    pub name_jp: Option<&'static str>,
    pub one_liner: &'static str,
    pub tags: &'static [&'static str],
    pub founded: i32,
    pub hq: &'static str,
    pub funding_stage: &'static str,
    /// Free text; "Undisclosed" when nothing is published
    pub total_funding: &'static str,
    pub website: &'static str,
    pub readiness: Readiness,
    pub what_they_do: &'static [&'static str],
    pub why_matters_in_japan: &'static [&'static str],
    pub target_customers: &'static [&'static str],
    pub business_model: &'static [&'static str],
    pub competitive_landscape: &'static [&'static str],
    pub what_makes_interesting: &'static [&'static str],
    pub editors_note: &'static str,
    pub last_updated: &'static str,
    pub disclosure: &'static str,
}

fn paragraphs(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}

impl From<&ProfileRecord> for Company {
    fn from(r: &ProfileRecord) -> Self {
        let total_funding = match r.total_funding.trim() {
            "" | "Undisclosed" => TotalFunding::Undisclosed,
            label => TotalFunding::Label(label.to_string()),
        };

        Company {
            id: r.id.to_string(),
            name_en: r.name_en.to_string(),
            name_jp: r.name_jp.map(str::to_string),
            one_liner: r.one_liner.to_string(),
            tags: paragraphs(r.tags),
            founded: r.founded,
            hq: r.hq.to_string(),
            funding_stage: r.funding_stage.to_string(),
            total_funding,
            website: r.website.to_string(),
            readiness: r.readiness,
            what_they_do: paragraphs(r.what_they_do),
            why_matters_in_japan: paragraphs(r.why_matters_in_japan),
            target_customers: paragraphs(r.target_customers),
            business_model: paragraphs(r.business_model),
            competitive_landscape: paragraphs(r.competitive_landscape),
            what_makes_interesting: paragraphs(r.what_makes_interesting),
            editors_note: r.editors_note.to_string(),
            last_updated: r.last_updated.to_string(),
            featured: r.featured,
            disclosure: r.disclosure.to_string(),
        }
    }
}

pub const PROFILES: &[ProfileRecord] = &[
    ProfileRecord {
        id: "sustainable-lab",
        featured: true,
        name_en: "Sustainable Lab",
        name_jp: Some("サステナブル・ラボ株式会社"),
        one_liner: "An ESG tech company building Japan’s leading non-financial data platform, helping financial institutions and corporates collect, analyze, and disclose ESG information.",
        tags: &["ESG Data", "SaaS", "Climate", "Disclosure", "Fintech"],
        founded: 2019,
        hq: "Tokyo, Japan (Otemachi / FINOLAB)",
        funding_stage: "Private",
        total_funding: "Undisclosed",
        website: "https://en.suslab.net/",
        readiness: Readiness::Yellow,
        what_they_do: &[
            "Sustainable Lab develops and provides 'TERRAST', one of Japan’s largest non-financial (ESG/SDGs) data platforms for investors, financial institutions, and professional firms.",
            "It also offers solutions for corporates to manage ESG data collection, analysis, and disclosure aligned with evolving Japanese and global standards.",
        ],
        why_matters_in_japan: &[
            "In Japan, ESG and sustainability data is increasingly required across lending, investment, procurement, and disclosure—yet information is fragmented and costly to compile.",
            "Platforms that connect 'data users' (investors/banks) with 'data disclosers' (listed companies and suppliers/SMEs) are becoming essential as disclosure standards mature.",
        ],
        target_customers: &[
            "Financial institutions & institutional investors (ESG research, risk assessment, sustainable finance)",
            "Large listed companies (ESG data disclosure & reporting workflows)",
            "SMEs / suppliers (ESG data aggregation and information provision across supply chains)",
        ],
        business_model: &[
            "Enterprise SaaS subscriptions (platform access + modules) with annual contracts.",
            "Professional services may be offered for onboarding, data structuring, and analytics support.",
        ],
        competitive_landscape: &[
            "Alternatives: consultants + spreadsheets, internal ESG teams compiling reports manually.",
            "Competitors: global ESG data providers and disclosure/reporting software; domestic ESG analytics and sustainability SaaS vendors.",
        ],
        what_makes_interesting: &[
            "Japan-specific coverage and workflows for non-financial (ESG/SDGs) data across both financial institutions and corporates.",
            "A platform strategy that connects the ESG ecosystem—those who need data and those who disclose it—reducing friction and improving data usability.",
            "Positioned at the intersection of data science × sustainability × finance, where Japan’s disclosure and sustainable finance requirements are accelerating.",
        ],
        editors_note: "A strong infrastructure play for Japan’s ESG data market. For overseas partners, it’s most relevant as a gateway to understand Japanese ESG datasets, disclosure maturity, and financial-institution use cases.",
        last_updated: "Jan 2026",
        disclosure: "Japan Startup Atlas may support introductions or advisory services related to this company. Editorial content remains independent and curated for global understanding.",
    },
    ProfileRecord {
        id: "payzen",
        featured: false,
        name_en: "PayZen",
        name_jp: Some("ペイゼン"),
        one_liner: "A B2B fintech helping Japanese mid-market exporters streamline invoicing and reduce payment friction for overseas buyers.",
        tags: &["Fintech", "B2B", "Payments", "SME", "Cross-border"],
        founded: 2021,
        hq: "Tokyo, Japan",
        funding_stage: "Seed",
        total_funding: "Undisclosed",
        website: "https://example.com",
        readiness: Readiness::Yellow,
        what_they_do: &[
            "PayZen provides an invoicing + payment workflow that helps Japanese exporters issue compliant invoices and get paid faster by overseas buyers.",
            "It combines invoice creation, buyer payment options, and reconciliation into a single dashboard for finance teams.",
        ],
        why_matters_in_japan: &[
            "Many Japanese exporters still rely on manual invoice processes and bank transfers, which increases delays and administrative burden.",
            "Language, compliance, and buyer payment preferences make cross-border collections especially complex for SMEs and mid-market companies.",
        ],
        target_customers: &[
            "Japanese exporters (SME–mid market)",
            "Industries: manufacturing, specialty goods, B2B wholesale",
            "Primary buyer: CFO / Finance lead",
        ],
        business_model: &[
            "SaaS subscription (per company) + transaction fee on processed payments.",
            "Enterprise tier includes compliance support and custom integrations.",
        ],
        competitive_landscape: &[
            "Alternatives: bank transfers, spreadsheets, manual reconciliation, or generalized invoicing tools.",
            "Competitors: global invoicing/payment platforms and domestic invoice software expanding into cross-border workflows.",
        ],
        what_makes_interesting: &[
            "Focused on Japan-specific invoice compliance while enabling global buyer-friendly payment options.",
            "Designed for finance teams—not just sales—reducing reconciliation time and operational risk.",
            "Potential distribution via trading companies, banks, and export support organizations.",
        ],
        editors_note: "Worth watching if you track Japan’s SME digitization and cross-border trade enablement. Partnerships with banks/trade bodies could accelerate adoption.",
        last_updated: "Jan 2026",
        disclosure: "Japan Startup Atlas may support introductions or advisory services related to this company. Editorial content remains independent and curated for global understanding.",
    },
    ProfileRecord {
        id: "inspexa",
        featured: true,
        name_en: "Inspexa",
        name_jp: Some("インスペクサ"),
        one_liner: "An AI quality-inspection startup helping Japanese factories detect defects faster and reduce labor-intensive checks.",
        tags: &["AI", "Manufacturing", "B2B", "Computer Vision"],
        founded: 2020,
        hq: "Nagoya, Japan",
        funding_stage: "Series A",
        total_funding: "$10–20M (est.)",
        website: "https://example.com",
        readiness: Readiness::Green,
        what_they_do: &[
            "Inspexa deploys computer-vision models on production lines to identify defects and anomalies in real time.",
            "It integrates with existing factory cameras and can operate on-premise for security-sensitive environments.",
        ],
        why_matters_in_japan: &[
            "Japan’s manufacturing sector faces labor shortages and rising quality costs, making automation increasingly urgent.",
            "High expectations for precision and traceability create strong demand for inspection tooling that auditors can trust.",
        ],
        target_customers: &[
            "Large manufacturers and tier-1 suppliers",
            "Use cases: visual inspection, traceability, process monitoring",
            "Primary buyer: Plant director / Quality head / CIO",
        ],
        business_model: &[
            "Annual enterprise license + implementation fee.",
            "Optional support package for model updates and monitoring.",
        ],
        competitive_landscape: &[
            "Alternatives: manual inspection teams, legacy machine-vision vendors.",
            "Competitors: global industrial AI providers and domestic SI-led solutions.",
        ],
        what_makes_interesting: &[
            "Designed to fit Japanese factory governance (auditability, on-prem options).",
            "Clear ROI in labor cost reduction and yield improvement.",
        ],
        editors_note: "A good candidate for global expansion if packaged with strong SI partners and multilingual documentation.",
        last_updated: "Jan 2026",
        disclosure: "Japan Startup Atlas may support introductions or advisory services related to this company. Editorial content remains independent and curated for global understanding.",
    },
    ProfileRecord {
        id: "carbonweave",
        featured: false,
        name_en: "CarbonWeave",
        name_jp: Some("カーボンウィーブ"),
        one_liner: "A climate SaaS platform helping Japanese enterprises measure supply-chain emissions and prepare for global reporting requirements.",
        tags: &["Climate", "SaaS", "Enterprise", "Reporting"],
        founded: 2019,
        hq: "Osaka, Japan",
        funding_stage: "Series B",
        total_funding: "$30–50M (est.)",
        website: "https://example.com",
        readiness: Readiness::Yellow,
        what_they_do: &[
            "CarbonWeave provides emissions calculation workflows, supplier data collection, and audit-ready reporting dashboards.",
            "It supports common frameworks and helps teams operationalize data collection across large supplier networks.",
        ],
        why_matters_in_japan: &[
            "Large Japanese manufacturers have complex supplier ecosystems, making Scope 3 emissions data especially difficult.",
            "Global customers increasingly expect standardized disclosures, pushing Japanese firms to modernize reporting.",
        ],
        target_customers: &[
            "Large enterprises with multi-tier supply chains",
            "Industries: automotive, electronics, industrials",
            "Primary buyer: Sustainability lead / Procurement / CFO",
        ],
        business_model: &[
            "Enterprise SaaS subscription + onboarding.",
            "Upsell: supplier engagement modules.",
        ],
        competitive_landscape: &[
            "Alternatives: consultants + spreadsheets, legacy ESG tools.",
            "Competitors: global carbon accounting platforms, domestic ESG vendors.",
        ],
        what_makes_interesting: &[
            "Built for Japan’s supplier reality (engagement workflows, governance).",
            "Clear relevance for exporters serving EU/US reporting requirements.",
        ],
        editors_note: "Likely to benefit from partnerships with consultants and trading companies supporting supplier engagement.",
        last_updated: "Jan 2026",
        disclosure: "Japan Startup Atlas may support introductions or advisory services related to this company. Editorial content remains independent and curated for global understanding.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undisclosed_funding_maps_to_variant() {
        let company = Company::from(&PROFILES[0]);
        assert_eq!(company.total_funding, TotalFunding::Undisclosed);
    }

    #[test]
    fn test_estimate_is_kept_as_label() {
        let inspexa = PROFILES.iter().find(|r| r.id == "inspexa").unwrap();
        let company = Company::from(inspexa);
        assert_eq!(company.total_funding, TotalFunding::Label("$10–20M (est.)".to_string()));
        assert_eq!(company.what_they_do.len(), 2);
        assert!(company.featured);
    }
}
