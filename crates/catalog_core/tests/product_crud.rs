use catalog_core::{InMemoryProductRepository, Product, ProductReader, ProductWriter};

fn sample(name: &str, price: f64) -> Product {
    Product::transient(name, "desc", price, "C1")
}

#[test]
fn add_assigns_ids_from_one_upwards() {
    let mut repo = InMemoryProductRepository::new();

    let first = repo.add(sample("a", 1.0));
    let second = repo.add(sample("b", 2.0));

    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
    assert_eq!(repo.len(), 2);
}

#[test]
fn ids_are_never_reused_after_delete() {
    let mut repo = InMemoryProductRepository::new();

    let a = repo.add(sample("a", 1.0));
    assert_eq!(a.id, Some(1));
    assert!(repo.delete(1));

    let b = repo.add(sample("b", 2.0));
    assert_eq!(b.id, Some(2));
}

#[test]
fn get_by_id_returns_none_for_unknown_or_deleted_ids() {
    let mut repo = InMemoryProductRepository::new();

    assert!(repo.get_by_id(42).is_none());

    let stored = repo.add(sample("a", 1.0));
    let id = stored.id.unwrap();
    assert!(repo.get_by_id(id).is_some());

    repo.delete(id);
    assert!(repo.get_by_id(id).is_none());
}

#[test]
fn get_all_preserves_insertion_order() {
    let mut repo = InMemoryProductRepository::new();

    repo.add(sample("first", 1.0));
    repo.add(sample("second", 2.0));
    repo.add(sample("third", 3.0));

    let names: Vec<_> = repo
        .get_all()
        .into_iter()
        .map(|product| product.name.unwrap())
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn update_replaces_stored_value_wholesale() {
    let mut repo = InMemoryProductRepository::new();

    let mut stored = repo.add(sample("draft", 10.0));
    stored.name = Some("final".to_string());
    stored.description = Some("reviewed".to_string());
    stored.price = Some(12.5);
    stored.category = Some("C2".to_string());

    assert!(repo.update(&stored));

    let loaded = repo.get_by_id(stored.id.unwrap()).unwrap();
    assert_eq!(loaded, stored);
}

#[test]
fn update_reports_failure_for_unknown_id_and_never_creates() {
    let mut repo = InMemoryProductRepository::new();

    let mut ghost = sample("ghost", 5.0);
    ghost.id = Some(99);

    assert!(!repo.update(&ghost));
    assert!(repo.is_empty());
    assert!(repo.get_by_id(99).is_none());
}

#[test]
fn delete_reports_true_exactly_once() {
    let mut repo = InMemoryProductRepository::new();

    let stored = repo.add(sample("a", 1.0));
    let id = stored.id.unwrap();

    assert!(repo.delete(id));
    assert!(!repo.delete(id));
    assert!(!repo.delete(id));
}

#[test]
fn create_then_get_roundtrips_all_fields() {
    let mut repo = InMemoryProductRepository::new();

    let stored = repo.add(Product::transient(
        "Laptop",
        "Puissant",
        1200.0,
        "Électronique",
    ));
    let loaded = repo.get_by_id(stored.id.unwrap()).unwrap();

    assert_eq!(loaded, stored);
    assert_eq!(loaded.name.as_deref(), Some("Laptop"));
    assert_eq!(loaded.description.as_deref(), Some("Puissant"));
    assert_eq!(loaded.price, Some(1200.0));
    assert_eq!(loaded.category.as_deref(), Some("Électronique"));
}
