// 🌱 Curated seed - slim startup records
//
// An earlier, flatter record shape kept as a second catalog source. Each
// record is adapted into the canonical Company at this boundary.

use crate::company::{Company, Readiness, TotalFunding};

#[derive(Debug, Clone, Copy)]
pub struct CuratedStartup {
    pub slug: &'static str,
    pub name_en: &'static str,
    pub name_jp: Option<&'static str>,
    pub one_liner: &'static str,
    pub tags: &'static [&'static str],
    pub founded_year: i32,
    pub hq_city: &'static str,
    pub hq_prefecture: &'static str,
    pub funding_stage: &'static str,
    pub total_funding_usd_millions: Option<f64>,
    pub website_url: &'static str,
    pub readiness: Readiness,
    pub description: &'static str,
}

impl CuratedStartup {
    /// "Tokyo" when city and prefecture coincide, else "Tsuruoka, Yamagata".
    pub fn hq(&self) -> String {
        if self.hq_city == self.hq_prefecture {
            self.hq_city.to_string()
        } else {
            format!("{}, {}", self.hq_city, self.hq_prefecture)
        }
    }
}

impl From<&CuratedStartup> for Company {
    fn from(s: &CuratedStartup) -> Self {
        Company {
            id: s.slug.to_string(),
            name_en: s.name_en.to_string(),
            name_jp: s.name_jp.map(str::to_string),
            one_liner: s.one_liner.to_string(),
            tags: s.tags.iter().map(|t| t.to_string()).collect(),
            founded: s.founded_year,
            hq: s.hq(),
            funding_stage: s.funding_stage.to_string(),
            total_funding: match s.total_funding_usd_millions {
                Some(amount) => TotalFunding::UsdMillions(amount),
                None => TotalFunding::Undisclosed,
            },
            website: s.website_url.to_string(),
            readiness: s.readiness,
            what_they_do: vec![s.description.to_string()],
            why_matters_in_japan: Vec::new(),
            target_customers: Vec::new(),
            business_model: Vec::new(),
            competitive_landscape: Vec::new(),
            what_makes_interesting: Vec::new(),
            editors_note: String::new(),
            last_updated: String::new(),
            featured: false,
            disclosure: String::new(),
        }
    }
}

pub const CURATED: &[CuratedStartup] = &[
    CuratedStartup {
        slug: "preferred-networks",
        name_en: "Preferred Networks",
        name_jp: Some("株式会社Preferred Networks"),
        one_liner: "Deep learning and robotics company building AI solutions for industry.",
        tags: &["AI", "Robotics", "DeepTech", "Manufacturing"],
        founded_year: 2014,
        hq_city: "Tokyo",
        hq_prefecture: "Tokyo",
        funding_stage: "Unknown",
        total_funding_usd_millions: None,
        website_url: "https://www.preferred.jp/en/",
        readiness: Readiness::Yellow,
        description: "Preferred Networks develops deep learning technologies and applies them to robotics and industrial use cases in Japan.",
    },
    CuratedStartup {
        slug: "sakana-ai",
        name_en: "Sakana AI",
        name_jp: Some("Sakana AI株式会社"),
        one_liner: "Nature-inspired AI R&D company building next-generation foundation model research.",
        tags: &["AI", "Foundation-Models", "R&D", "DeepTech"],
        founded_year: 2023,
        hq_city: "Tokyo",
        hq_prefecture: "Tokyo",
        funding_stage: "Seed",
        total_funding_usd_millions: Some(30.0),
        website_url: "https://sakana.ai/",
        readiness: Readiness::Green,
        description: "Sakana AI is a Tokyo-based AI R&D company focused on nature-inspired approaches to foundation models and applied AI solutions.",
    },
    CuratedStartup {
        slug: "ubie",
        name_en: "Ubie",
        name_jp: Some("Ubie株式会社"),
        one_liner: "AI healthtech helping patients and clinicians navigate to the right care faster.",
        tags: &["Healthcare", "AI", "Digital-Health", "B2B2C"],
        founded_year: 2017,
        hq_city: "Tokyo",
        hq_prefecture: "Tokyo",
        funding_stage: "Unknown",
        total_funding_usd_millions: None,
        website_url: "https://ubiehealth.com/",
        readiness: Readiness::Green,
        description: "Ubie develops AI-powered products such as symptom assessment and clinical support tools to guide patients to appropriate care and improve healthcare workflows.",
    },
    CuratedStartup {
        slug: "asuene",
        name_en: "ASUENE",
        name_jp: Some("アスエネ株式会社"),
        one_liner: "Climate SaaS for measuring and reducing corporate greenhouse gas emissions.",
        tags: &["Climate", "SaaS", "Carbon-Accounting", "ESG"],
        founded_year: 2019,
        hq_city: "Tokyo",
        hq_prefecture: "Tokyo",
        funding_stage: "Unknown",
        total_funding_usd_millions: None,
        website_url: "https://asuene.com/en",
        readiness: Readiness::Green,
        description: "ASUENE provides a climate platform for GHG accounting and decarbonization support including ESG-related services for enterprises.",
    },
    CuratedStartup {
        slug: "abeja",
        name_en: "ABEJA",
        name_jp: Some("株式会社ABEJA"),
        one_liner: "AI platform and solutions provider supporting enterprise DX and analytics.",
        tags: &["AI", "Enterprise", "SaaS", "DX"],
        founded_year: 2012,
        hq_city: "Tokyo",
        hq_prefecture: "Tokyo",
        funding_stage: "Public",
        total_funding_usd_millions: None,
        website_url: "https://www.abejainc.com/en/",
        readiness: Readiness::Green,
        description: "ABEJA provides AI-driven platforms and solutions to help enterprises accelerate digital transformation and deploy AI in production.",
    },
    CuratedStartup {
        slug: "smarthr",
        name_en: "SmartHR",
        name_jp: Some("株式会社SmartHR"),
        one_liner: "Cloud HR and labor-management software for back-office operations in Japan.",
        tags: &["Enterprise-SaaS", "HR-Tech", "B2B"],
        founded_year: 2013,
        hq_city: "Tokyo",
        hq_prefecture: "Tokyo",
        funding_stage: "Unknown",
        total_funding_usd_millions: None,
        website_url: "https://smarthr.co.jp/en/",
        readiness: Readiness::Green,
        description: "SmartHR provides cloud software that simplifies HR and labor administration for companies operating in Japan.",
    },
    CuratedStartup {
        slug: "money-forward",
        name_en: "Money Forward",
        name_jp: Some("株式会社マネーフォワード"),
        one_liner: "Fintech platform offering personal finance and cloud services for businesses.",
        tags: &["Fintech", "SaaS", "Accounting", "SMB"],
        founded_year: 2012,
        hq_city: "Tokyo",
        hq_prefecture: "Tokyo",
        funding_stage: "Public",
        total_funding_usd_millions: None,
        website_url: "https://corp.moneyforward.com/en/",
        readiness: Readiness::Green,
        description: "Money Forward operates fintech services spanning personal finance management and business cloud products including accounting and related back-office tools.",
    },
    CuratedStartup {
        slug: "spiber",
        name_en: "Spiber",
        name_jp: Some("Spiber株式会社"),
        one_liner: "Bio-based materials company developing brewed structural proteins for sustainable products.",
        tags: &["Bio", "Materials", "Climate", "Manufacturing"],
        founded_year: 2007,
        hq_city: "Tsuruoka",
        hq_prefecture: "Yamagata",
        funding_stage: "Unknown",
        total_funding_usd_millions: None,
        website_url: "https://spiber.inc/en",
        readiness: Readiness::Green,
        description: "Spiber develops bio-based structural protein materials (Brewed Protein™) aimed at enabling more sustainable apparel and industrial applications.",
    },
    CuratedStartup {
        slug: "mujin",
        name_en: "Mujin",
        name_jp: Some("株式会社Mujin"),
        one_liner: "Industrial automation company building intelligent robot control for logistics and manufacturing.",
        tags: &["Robotics", "Manufacturing", "Automation", "Logistics"],
        founded_year: 2011,
        hq_city: "Koto",
        hq_prefecture: "Tokyo",
        funding_stage: "Unknown",
        total_funding_usd_millions: None,
        website_url: "https://mujin-corp.com/",
        readiness: Readiness::Green,
        description: "Mujin develops robotics automation and teachless robot control technologies to improve productivity in logistics and industrial operations.",
    },
    CuratedStartup {
        slug: "rapyuta-robotics",
        name_en: "Rapyuta Robotics",
        name_jp: Some("ラピュタロボティクス株式会社"),
        one_liner: "Warehouse automation company building robotics solutions for logistics operations.",
        tags: &["Robotics", "Logistics", "Automation", "Enterprise"],
        founded_year: 2014,
        hq_city: "Tokyo",
        hq_prefecture: "Tokyo",
        funding_stage: "Unknown",
        total_funding_usd_millions: None,
        website_url: "https://www.rapyuta-robotics.com/",
        readiness: Readiness::Yellow,
        description: "Rapyuta Robotics develops warehouse automation solutions including pick-assist systems to improve logistics productivity.",
    },
];
