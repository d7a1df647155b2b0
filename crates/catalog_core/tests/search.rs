use catalog_core::ProductCatalog;

fn seeded_catalog() -> ProductCatalog {
    let mut catalog = ProductCatalog::new();
    catalog.creator.create("p1", "d1", 10.0, "C1").unwrap();
    catalog.creator.create("p2", "d2", 20.0, "C1").unwrap();
    catalog.creator.create("p3", "d3", 5.0, "C2").unwrap();
    catalog
}

#[test]
fn category_and_max_price_combine_as_conjunction() {
    let catalog = seeded_catalog();

    let hits = catalog
        .searcher
        .search_by_category_and_max_price(Some("C1"), Some(15.0));

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name.as_deref(), Some("p1"));
    assert_eq!(hits[0].price, Some(10.0));
}

#[test]
fn absent_filters_return_everything_in_insertion_order() {
    let catalog = seeded_catalog();

    let hits = catalog.searcher.search_by_category_and_max_price(None, None);

    let names: Vec<_> = hits
        .into_iter()
        .map(|product| product.name.unwrap())
        .collect();
    assert_eq!(names, vec!["p1", "p2", "p3"]);
}

#[test]
fn empty_category_filter_behaves_like_absent() {
    let catalog = seeded_catalog();

    let all = catalog
        .searcher
        .search_by_category_and_max_price(Some(""), None);
    assert_eq!(all.len(), 3);
}

#[test]
fn category_match_is_exact_and_case_sensitive() {
    let catalog = seeded_catalog();

    assert!(catalog
        .searcher
        .search_by_category_and_max_price(Some("c1"), None)
        .is_empty());
    assert!(catalog
        .searcher
        .search_by_category_and_max_price(Some("C1 "), None)
        .is_empty());
    assert_eq!(
        catalog
            .searcher
            .search_by_category_and_max_price(Some("C1"), None)
            .len(),
        2
    );
}

#[test]
fn max_price_filter_alone_keeps_order() {
    let catalog = seeded_catalog();

    let hits = catalog
        .searcher
        .search_by_category_and_max_price(None, Some(10.0));

    let names: Vec<_> = hits
        .into_iter()
        .map(|product| product.name.unwrap())
        .collect();
    assert_eq!(names, vec!["p1", "p3"]);
}

#[test]
fn no_match_is_an_empty_result_not_an_error() {
    let catalog = seeded_catalog();

    let hits = catalog
        .searcher
        .search_by_category_and_max_price(Some("C3"), Some(1.0));
    assert!(hits.is_empty());
}

#[test]
fn price_boundary_is_inclusive() {
    let catalog = seeded_catalog();

    let hits = catalog
        .searcher
        .search_by_category_and_max_price(Some("C1"), Some(20.0));
    assert_eq!(hits.len(), 2);
}
