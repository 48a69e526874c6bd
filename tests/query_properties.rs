// Property tests for the directory query engine

use proptest::prelude::*;
use std::collections::HashMap;

use startup_atlas::{
    filter_companies, locale_compare, sort_companies, Company, Facet, FilterParams, Readiness,
    SortMode, TotalFunding,
};

const TAG_POOL: &[&str] = &["AI", "SaaS", "Fintech", "Climate", "B2B", "Robotics"];
const STAGE_POOL: &[&str] = &["Seed", "Series A", "Series B", "Public", "Unknown"];

fn readiness_strategy() -> impl Strategy<Value = Readiness> {
    prop::sample::select(Readiness::ALL.to_vec())
}

fn company_strategy() -> impl Strategy<Value = Company> {
    (
        "[A-Za-z]{1,8}( [A-Za-z]{1,6})?",
        "[a-z ]{0,20}",
        prop::sample::subsequence(TAG_POOL.to_vec(), 0..=TAG_POOL.len()),
        prop::sample::select(STAGE_POOL.to_vec()),
        readiness_strategy(),
        1990i32..2026,
    )
        .prop_map(|(name, one_liner, tags, stage, readiness, founded)| Company {
            id: String::new(),
            name_en: name,
            name_jp: None,
            one_liner,
            tags: tags.into_iter().map(str::to_string).collect(),
            founded,
            hq: "Tokyo, Japan".to_string(),
            funding_stage: stage.to_string(),
            total_funding: TotalFunding::Undisclosed,
            website: "https://example.com".to_string(),
            readiness,
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
        })
}

fn companies_strategy() -> impl Strategy<Value = Vec<Company>> {
    prop::collection::vec(company_strategy(), 0..24).prop_map(|mut xs| {
        for (i, c) in xs.iter_mut().enumerate() {
            c.id = format!("c{}", i);
        }
        xs
    })
}

fn params_strategy() -> impl Strategy<Value = FilterParams> {
    (
        prop::sample::select(vec!["", "a", " E ", "ai", "seed", "tokyo", "series b", "zz"]),
        prop::sample::subsequence(TAG_POOL.to_vec(), 0..=2),
        prop::option::of(readiness_strategy()),
        prop::option::of(prop::sample::select(STAGE_POOL.to_vec())),
        prop::sample::select(SortMode::ALL.to_vec()),
    )
        .prop_map(|(query, tags, readiness, stage, sort)| {
            FilterParams::new()
                .with_query(query)
                .with_tags(tags)
                .with_readiness(readiness.map_or(Facet::All, Facet::Only))
                .with_stage(stage.map_or(Facet::All, |s| Facet::Only(s.to_string())))
                .with_sort(sort)
        })
}

fn id_counts(companies: &[Company]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for c in companies {
        *counts.entry(c.id.as_str()).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn prop_result_is_subset_of_input(companies in companies_strategy(), params in params_strategy()) {
        let out = filter_companies(&companies, &params);
        let input = id_counts(&companies);

        prop_assert!(out.len() <= companies.len());
        for (id, n) in id_counts(&out) {
            prop_assert_eq!(n, 1);
            prop_assert!(input.contains_key(id));
        }
        for c in &out {
            let original = companies.iter().find(|x| x.id == c.id).unwrap();
            prop_assert_eq!(original, c);
        }
    }

    #[test]
    fn prop_filtering_is_idempotent(companies in companies_strategy(), params in params_strategy()) {
        let once = filter_companies(&companies, &params);
        let twice = filter_companies(&once, &params);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_tags_require_superset(companies in companies_strategy(), params in params_strategy()) {
        let out = filter_companies(&companies, &params);
        let without_tags = filter_companies(&companies, &params.with_tags(Vec::<String>::new()));

        let expected: Vec<&str> = without_tags
            .iter()
            .filter(|c| params.tags.iter().all(|t| c.tags.contains(t)))
            .map(|c| c.id.as_str())
            .collect();
        let actual: Vec<&str> = out.iter().map(|c| c.id.as_str()).collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_relevance_preserves_input_order(companies in companies_strategy(), params in params_strategy()) {
        let out = filter_companies(&companies, &params.with_sort(SortMode::Relevance));
        let positions: Vec<usize> = out
            .iter()
            .map(|c| companies.iter().position(|x| x.id == c.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_name_sort_is_noop_on_sorted_input(mut companies in companies_strategy()) {
        sort_companies(&mut companies, SortMode::Name);
        let sorted = companies.clone();
        sort_companies(&mut companies, SortMode::Name);

        prop_assert_eq!(&companies, &sorted);
        prop_assert!(companies
            .windows(2)
            .all(|w| locale_compare(&w[0].name_en, &w[1].name_en) != std::cmp::Ordering::Greater));
    }

    #[test]
    fn prop_founded_desc_puts_newest_first(mut companies in companies_strategy()) {
        let newest = companies.iter().map(|c| c.founded).max();
        companies.reverse();
        sort_companies(&mut companies, SortMode::FoundedDesc);

        prop_assert_eq!(companies.first().map(|c| c.founded), newest);
        prop_assert!(companies.windows(2).all(|w| w[0].founded >= w[1].founded));
    }
}
