//! Tests for the pure filter/sort/summarize engine.

mod common;

use std::cmp::Ordering;

use marketplace_views::collection::{remove_by_id, update_by_id};
use marketplace_views::models::{
    Investment, Product, ProductCategory, ProductStatus, RepaymentStatus,
};
use marketplace_views::pipeline::{
    derive_view, FilterCriteria, Record, SortDirection, SortKey, SortSpec, Summary,
};
use marketplace_views::views::{
    InvestmentFacet, ProductFacet, ProductFilterField, ProductSortField,
};

fn ids(items: &[Product]) -> Vec<&str> {
    items.iter().map(|p| p.id.as_str()).collect()
}

// ---------------------------------------------------------------------------
// FilterCriteria
// ---------------------------------------------------------------------------

#[test]
fn toggle_adds_then_removes_value() {
    let mut criteria = FilterCriteria::new();
    criteria.toggle(ProductFacet::Status(ProductStatus::Active));
    assert!(criteria.is_selected(ProductFacet::Status(ProductStatus::Active)));
    assert_eq!(criteria.active_count(), 1);

    criteria.toggle(ProductFacet::Status(ProductStatus::Active));
    assert!(!criteria.is_selected(ProductFacet::Status(ProductStatus::Active)));
    assert!(criteria.is_empty());
    assert_eq!(criteria, FilterCriteria::new());
}

#[test]
fn selections_are_kept_per_field() {
    let mut criteria = FilterCriteria::new();
    criteria.toggle(ProductFacet::Status(ProductStatus::Draft));
    criteria.toggle(ProductFacet::Category(ProductCategory::Food));
    criteria.toggle(ProductFacet::Status(ProductStatus::Active));

    assert_eq!(
        criteria.selected(ProductFilterField::Status),
        vec![
            ProductFacet::Status(ProductStatus::Active),
            ProductFacet::Status(ProductStatus::Draft),
        ]
    );
    assert_eq!(
        criteria.selected(ProductFilterField::Category),
        vec![ProductFacet::Category(ProductCategory::Food)]
    );
    assert_eq!(criteria.active_count(), 3);
}

#[test]
fn toggle_order_does_not_matter() {
    let mut a = FilterCriteria::new();
    a.toggle(ProductFacet::Status(ProductStatus::Active));
    a.toggle(ProductFacet::Category(ProductCategory::Electronics));

    let mut b = FilterCriteria::new();
    b.toggle(ProductFacet::Category(ProductCategory::Electronics));
    b.toggle(ProductFacet::Status(ProductStatus::Active));

    assert_eq!(a, b);
    let products = common::sample_products();
    let sort = Product::default_sort();
    assert_eq!(derive_view(&products, &a, sort), derive_view(&products, &b, sort));
}

#[test]
fn deriving_from_a_derived_view_changes_nothing() {
    let products = common::sample_products();
    let mut criteria = FilterCriteria::new();
    criteria.set_query("e");
    criteria.toggle(ProductFacet::Category(ProductCategory::Electronics));
    criteria.toggle(ProductFacet::Status(ProductStatus::Active));
    criteria.toggle(ProductFacet::Status(ProductStatus::OutOfStock));
    let sort = SortSpec::ascending(ProductSortField::Price);

    let once = derive_view(&products, &criteria, sort);
    assert_eq!(ids(&once.items), vec!["p2", "p3"]);
    let twice = derive_view(&once.items, &criteria, sort);
    assert_eq!(twice, once);
}

#[test]
fn query_matches_case_insensitive_substring() {
    let products = common::sample_products();
    let mut criteria = FilterCriteria::new();
    criteria.set_query("LAMP");
    let view = derive_view(&products, &criteria, Product::default_sort());
    assert_eq!(ids(&view.items), vec!["p1"]);
}

#[test]
fn query_matches_any_search_field() {
    let products = common::sample_products();
    let mut criteria = FilterCriteria::new();
    criteria.set_query("sku-p3");
    let view = derive_view(&products, &criteria, Product::default_sort());
    assert_eq!(ids(&view.items), vec!["p3"]);
}

#[test]
fn query_is_not_trimmed() {
    let products = common::sample_products();
    let mut criteria = FilterCriteria::new();
    criteria.set_query(" lamp ");
    let view = derive_view(&products, &criteria, Product::default_sort());
    assert!(view.is_empty());
}

// ---------------------------------------------------------------------------
// derive_view
// ---------------------------------------------------------------------------

#[test]
fn default_criteria_yield_whole_collection_sorted() {
    let products = common::sample_products();
    let view = derive_view(&products, &FilterCriteria::new(), Product::default_sort());
    // created_at descending
    assert_eq!(ids(&view.items), vec!["p4", "p2", "p1", "p3"]);
    assert_eq!(view.summary.total_products, 4);
}

#[test]
fn status_filter_keeps_active_products_in_original_order() {
    let products = vec![
        common::product("a", "Alpha", ProductStatus::Active, 10.0, 5),
        common::product("b", "Bravo", ProductStatus::OutOfStock, 10.0, 0),
        common::product("c", "Charlie", ProductStatus::Active, 10.0, 5),
        common::product("d", "Delta", ProductStatus::Draft, 10.0, 5),
    ];
    let mut criteria = FilterCriteria::new();
    criteria.toggle(ProductFacet::Status(ProductStatus::Active));

    let view = derive_view(&products, &criteria, Product::default_sort());
    assert_eq!(ids(&view.items), vec!["a", "c"]);
}

#[test]
fn every_item_satisfies_every_predicate() {
    let products = common::sample_products();
    let mut criteria = FilterCriteria::new();
    criteria.toggle(ProductFacet::Status(ProductStatus::Active));
    criteria.toggle(ProductFacet::Category(ProductCategory::Electronics));

    let view = derive_view(&products, &criteria, Product::default_sort());
    assert_eq!(ids(&view.items), vec!["p3"]);
    for p in &view.items {
        assert_eq!(p.status, ProductStatus::Active);
        assert_eq!(p.category, ProductCategory::Electronics);
    }
    let excluded: Vec<&Product> = products
        .iter()
        .filter(|p| !view.items.contains(p))
        .collect();
    for p in excluded {
        assert!(p.status != ProductStatus::Active || p.category != ProductCategory::Electronics);
    }
}

#[test]
fn multiple_values_in_one_field_are_an_inclusion_list() {
    let products = common::sample_products();
    let mut criteria = FilterCriteria::new();
    criteria.toggle(ProductFacet::Status(ProductStatus::Draft));
    criteria.toggle(ProductFacet::Status(ProductStatus::OutOfStock));

    let view = derive_view(&products, &criteria, Product::default_sort());
    assert_eq!(ids(&view.items), vec!["p4", "p2"]);
}

#[test]
fn empty_result_is_not_an_error() {
    let products = common::sample_products();
    let mut criteria = FilterCriteria::new();
    criteria.toggle(ProductFacet::Status(ProductStatus::Archived));
    let view = derive_view(&products, &criteria, Product::default_sort());
    assert!(view.is_empty());
    assert_eq!(view.summary.total_products, 0);
    assert_eq!(view.summary.inventory_value, 0.0);
}

#[test]
fn derive_view_leaves_input_untouched() {
    let products = common::sample_products();
    let before = products.clone();
    let mut criteria = FilterCriteria::new();
    criteria.set_query("a");
    let _ = derive_view(&products, &criteria, SortSpec::ascending(ProductSortField::Price));
    assert_eq!(products, before);
}

#[test]
fn sort_is_stable_for_equal_keys_in_both_directions() {
    let products = vec![
        common::product("a", "Alpha", ProductStatus::Active, 20.0, 1),
        common::product("b", "Bravo", ProductStatus::Active, 10.0, 1),
        common::product("c", "Charlie", ProductStatus::Active, 20.0, 1),
        common::product("d", "Delta", ProductStatus::Active, 10.0, 1),
    ];
    let criteria = FilterCriteria::new();

    let desc = derive_view(&products, &criteria, SortSpec::descending(ProductSortField::Price));
    assert_eq!(ids(&desc.items), vec!["a", "c", "b", "d"]);

    let asc = derive_view(&products, &criteria, SortSpec::ascending(ProductSortField::Price));
    assert_eq!(ids(&asc.items), vec!["b", "d", "a", "c"]);
}

#[test]
fn text_sort_ignores_case() {
    let products = vec![
        common::product("a", "banana", ProductStatus::Active, 1.0, 1),
        common::product("b", "Apple", ProductStatus::Active, 1.0, 1),
        common::product("c", "cherry", ProductStatus::Active, 1.0, 1),
    ];
    let view = derive_view(
        &products,
        &FilterCriteria::new(),
        SortSpec::ascending(ProductSortField::Name),
    );
    assert_eq!(ids(&view.items), vec!["b", "a", "c"]);
}

#[test]
fn summary_is_computed_over_filtered_items() {
    let investments = vec![
        common::investment("x", "North", 50000.0, RepaymentStatus::OnTime),
        common::investment("y", "South", 25000.0, RepaymentStatus::Late),
    ];
    let mut criteria = FilterCriteria::new();
    criteria.toggle(InvestmentFacet::Status(RepaymentStatus::OnTime));

    let view = derive_view(&investments, &criteria, Investment::default_sort());
    assert_eq!(view.summary.total_invested, 50000.0);
    assert_eq!(view.summary.investment_count, 1);
}

#[test]
fn summary_metrics_use_serialized_names() {
    let products = common::sample_products();
    let view = derive_view(&products, &FilterCriteria::new(), Product::default_sort());
    let metrics = view.summary.metrics();
    assert_eq!(metrics["totalProducts"], 4.0);
    assert_eq!(metrics["activeCount"], 2.0);
    assert_eq!(metrics["outOfStockCount"], 1.0);
}

// ---------------------------------------------------------------------------
// SortSpec and SortKey
// ---------------------------------------------------------------------------

#[test]
fn toggled_same_field_flips_direction() {
    let spec = SortSpec::descending(ProductSortField::Price);
    let once = spec.toggled(ProductSortField::Price);
    assert_eq!(once.direction, SortDirection::Ascending);
    assert_eq!(once.toggled(ProductSortField::Price), spec);
}

#[test]
fn toggled_new_field_resets_to_descending() {
    let spec = SortSpec::ascending(ProductSortField::Price);
    let next = spec.toggled(ProductSortField::Stock);
    assert_eq!(next, SortSpec::descending(ProductSortField::Stock));
}

#[test]
fn missing_keys_sort_below_present_ones() {
    let missing = SortKey::from(None::<chrono::NaiveDate>);
    let present = SortKey::from(common::date(2020, 1, 1));
    assert_eq!(missing, SortKey::Missing);
    assert_eq!(missing.compare(&present), Ordering::Less);
    assert_eq!(missing.compare(&SortKey::Missing), Ordering::Equal);
}

#[test]
fn dates_compare_by_calendar_value() {
    let earlier = SortKey::from(common::date(2023, 12, 31));
    let later = SortKey::from(common::date(2024, 2, 1));
    assert_eq!(earlier.compare(&later), Ordering::Less);
}

#[test]
fn numbers_compare_numerically() {
    assert_eq!(SortKey::from(9.5).compare(&SortKey::from(10.0)), Ordering::Less);
    assert_eq!(SortKey::from(100u32).compare(&SortKey::from(20u32)), Ordering::Greater);
}

// ---------------------------------------------------------------------------
// Collection mutations
// ---------------------------------------------------------------------------

#[test]
fn remove_unknown_id_returns_equal_collection() {
    let products = common::sample_products();
    let next = remove_by_id(&products, "missing");
    assert_eq!(next, products);
}

#[test]
fn remove_preserves_order_of_remaining_records() {
    let products = common::sample_products();
    let next = remove_by_id(&products, "p2");
    assert_eq!(ids(&next), vec!["p1", "p3", "p4"]);
    assert_eq!(products.len(), 4);
}

#[test]
fn update_touches_only_the_target_record() {
    let products = common::sample_products();
    let next = update_by_id(&products, "p3", |p| p.price = 99.0).unwrap();
    assert_eq!(next[2].price, 99.0);
    assert_eq!(products[2].price, 75.0);
    assert_eq!(next[0], products[0]);
    assert_eq!(next[1], products[1]);
    assert_eq!(next[3], products[3]);
}

#[test]
fn update_unknown_id_yields_nothing() {
    let products = common::sample_products();
    assert!(update_by_id(&products, "nope", |p| p.price = 0.0).is_none());
}

#[test]
fn update_that_rewrites_the_id_is_rejected() {
    let products = common::sample_products();
    let next = update_by_id(&products, "p1", |p| {
        p.id = "p2".to_string();
        p.price = 1.0;
    });
    assert!(next.is_none());
    assert_eq!(products, common::sample_products());
}
