// End-to-end directory behaviour over the bundled catalogs

use startup_atlas::{
    all_stages, all_tags, fetch, filter_companies, get_companies, parse_month_year,
    recently_updated, CatalogSource, Facet, FilterParams, Readiness, SortMode, RECENT_LIMIT,
};

fn ids(companies: &[startup_atlas::Company]) -> Vec<&str> {
    companies.iter().map(|c| c.id.as_str()).collect()
}

#[tokio::test]
async fn test_accessor_resolves_with_the_sample_set() {
    let companies = get_companies().await;
    assert_eq!(ids(&companies), vec!["sustainable-lab", "payzen", "inspexa", "carbonweave"]);

    // Same data on every call
    assert_eq!(get_companies().await, companies);
}

#[tokio::test]
async fn test_fintech_query_matches_fintech_tagged_entities() {
    let companies = get_companies().await;
    let params = FilterParams::new()
        .with_query("fintech")
        .with_readiness(Facet::All);

    let out = filter_companies(&companies, &params);

    assert_eq!(ids(&out), vec!["sustainable-lab", "payzen"]);
    assert!(out.iter().all(|c| c.has_tag("Fintech")));
}

#[tokio::test]
async fn test_ai_and_manufacturing_tags() {
    let companies = get_companies().await;
    let out = filter_companies(&companies, &FilterParams::new().with_tags(["AI", "Manufacturing"]));
    assert_eq!(ids(&out), vec!["inspexa"]);
}

#[tokio::test]
async fn test_curated_catalog_queries() {
    let companies = fetch(CatalogSource::Curated).await;
    assert_eq!(companies.len(), 10);

    let fintech = filter_companies(&companies, &FilterParams::new().with_query("FinTech"));
    assert_eq!(ids(&fintech), vec!["money-forward"]);

    let robots = filter_companies(
        &companies,
        &FilterParams::new()
            .with_tags(["Robotics", "Logistics"])
            .with_readiness(Facet::Only(Readiness::Yellow)),
    );
    assert_eq!(ids(&robots), vec!["rapyuta-robotics"]);

    let public = filter_companies(
        &companies,
        &FilterParams::new()
            .with_stage(Facet::Only("Public".to_string()))
            .with_sort(SortMode::Name),
    );
    assert_eq!(ids(&public), vec!["abeja", "money-forward"]);

    let newest = filter_companies(&companies, &FilterParams::new().with_sort(SortMode::FoundedDesc));
    assert_eq!(newest.first().map(|c| c.id.as_str()), Some("sakana-ai"));
}

#[tokio::test]
async fn test_curated_facets() {
    let companies = fetch(CatalogSource::Curated).await;
    assert_eq!(all_stages(&companies), vec!["Public", "Seed", "Unknown"]);

    let tags = all_tags(&companies);
    assert!(tags.contains(&"Manufacturing".to_string()));
    assert!(tags.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_recently_updated_on_sample() {
    let companies = get_companies().await;
    let recent = recently_updated(&companies, RECENT_LIMIT);

    // All sample entries share "Jan 2026"; the stable sort keeps authored order
    assert_eq!(ids(&recent), ids(&companies));
    assert!(recent.iter().all(|c| parse_month_year(&c.last_updated) == 202601));
}

#[test]
fn test_month_year_examples() {
    assert_eq!(parse_month_year("Jan 2026"), 202601);
    assert_eq!(parse_month_year("garbage"), 0);
    assert_eq!(parse_month_year("Dec 2025"), 202512);
    assert_eq!(parse_month_year("Nov 2025"), 202511);
}
