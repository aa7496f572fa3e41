//! Live integration tests for brandsight-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/brandsight-db/`), so `"../../migrations"` resolves to the
//! workspace migration directory.

use brandsight_core::{FaqEntry, PolicySet, StructuredInsights, StructuredProduct};
use brandsight_db::{
    get_brand_by_site_url, list_brand_contacts, list_brand_faqs, list_brand_links,
    list_brand_products, list_brand_socials, list_brands, save_brand_insights,
};

fn sample_insights() -> StructuredInsights {
    StructuredInsights {
        products_catalog: vec![StructuredProduct {
            title: Some("Ceramic Mug".to_owned()),
            price: Some("$10".to_owned()),
            image: Some("/img/mug.jpg".to_owned()),
        }],
        hero_products: vec![StructuredProduct {
            title: Some("Tote Bag".to_owned()),
            price: None,
            image: None,
        }],
        policies: PolicySet {
            privacy: "We respect your data.".to_owned(),
            refund: "Refunds within 14 days.".to_owned(),
            return_policy: "Returns within 30 days.".to_owned(),
        },
        faqs: vec![FaqEntry {
            question: "Do you ship abroad?".to_owned(),
            answer: "Yes, worldwide.".to_owned(),
        }],
        contacts: vec!["support@example.com".to_owned()],
        social_handles: vec!["https://instagram.com/examplebrand".to_owned()],
        brand_about: "We make mugs.".to_owned(),
        important_links: vec!["/pages/track".to_owned()],
        competitors: vec!["https://rival.example".to_owned()],
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn first_ingestion_creates_brand_with_children(pool: sqlx::PgPool) {
    let brand = save_brand_insights(&pool, "https://shop.example.com", &sample_insights())
        .await
        .expect("save should succeed");

    assert_eq!(brand.name, "Shop");
    assert_eq!(brand.site_url, "https://shop.example.com");
    assert_eq!(brand.privacy_policy.as_deref(), Some("We respect your data."));
    assert_eq!(brand.brand_about.as_deref(), Some("We make mugs."));

    let products = list_brand_products(&pool, brand.id)
        .await
        .expect("query should succeed");
    assert_eq!(products.len(), 2, "catalog and hero products both persist");
    assert_eq!(products[0].title, "Ceramic Mug");
    assert_eq!(products[1].title, "Tote Bag");
    assert!(products[1].price.is_none());

    let faqs = list_brand_faqs(&pool, brand.id)
        .await
        .expect("query should succeed");
    assert_eq!(faqs.len(), 1);

    let socials = list_brand_socials(&pool, brand.id)
        .await
        .expect("query should succeed");
    assert_eq!(socials.len(), 1);

    let contacts = list_brand_contacts(&pool, brand.id)
        .await
        .expect("query should succeed");
    assert_eq!(contacts.len(), 1);

    let links = list_brand_links(&pool, brand.id)
        .await
        .expect("query should succeed");
    assert_eq!(links.len(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn saving_same_record_twice_is_idempotent(pool: sqlx::PgPool) {
    let insights = sample_insights();

    let first = save_brand_insights(&pool, "https://shop.example.com", &insights)
        .await
        .expect("first save should succeed");
    let second = save_brand_insights(&pool, "https://shop.example.com", &insights)
        .await
        .expect("second save should succeed");

    assert_eq!(first.id, second.id, "same address maps to the same brand");
    assert_eq!(list_brands(&pool).await.expect("list").len(), 1);

    let products = list_brand_products(&pool, second.id)
        .await
        .expect("query should succeed");
    assert_eq!(products.len(), 2, "re-ingestion must not duplicate children");

    let faqs = list_brand_faqs(&pool, second.id)
        .await
        .expect("query should succeed");
    assert_eq!(faqs.len(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn reingestion_replaces_all_child_rows_and_scalars(pool: sqlx::PgPool) {
    let brand = save_brand_insights(&pool, "https://shop.example.com", &sample_insights())
        .await
        .expect("first save should succeed");

    let replacement = StructuredInsights {
        products_catalog: vec![StructuredProduct {
            title: Some("Espresso Cup".to_owned()),
            price: Some("$8".to_owned()),
            image: None,
        }],
        policies: PolicySet {
            privacy: "Updated privacy.".to_owned(),
            ..PolicySet::default()
        },
        ..StructuredInsights::default()
    };

    let updated = save_brand_insights(&pool, "https://shop.example.com", &replacement)
        .await
        .expect("second save should succeed");
    assert_eq!(updated.id, brand.id);
    assert_eq!(updated.privacy_policy.as_deref(), Some("Updated privacy."));
    assert!(updated.refund_policy.is_none(), "empty scalars become NULL");
    assert!(updated.brand_about.is_none());

    let products = list_brand_products(&pool, brand.id)
        .await
        .expect("query should succeed");
    assert_eq!(products.len(), 1, "no rows from the first record remain");
    assert_eq!(products[0].title, "Espresso Cup");

    for count in [
        list_brand_faqs(&pool, brand.id).await.expect("faqs").len(),
        list_brand_socials(&pool, brand.id).await.expect("socials").len(),
        list_brand_contacts(&pool, brand.id).await.expect("contacts").len(),
        list_brand_links(&pool, brand.id).await.expect("links").len(),
    ] {
        assert_eq!(count, 0, "old child rows must be gone");
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn products_without_title_are_never_persisted(pool: sqlx::PgPool) {
    let insights = StructuredInsights {
        products_catalog: vec![
            StructuredProduct {
                title: None,
                price: Some("$5".to_owned()),
                image: Some("/img/mystery.jpg".to_owned()),
            },
            StructuredProduct {
                title: Some("Named Product".to_owned()),
                price: None,
                image: None,
            },
        ],
        hero_products: vec![StructuredProduct {
            title: Some("   ".to_owned()),
            price: Some("$7".to_owned()),
            image: None,
        }],
        ..StructuredInsights::default()
    };

    let brand = save_brand_insights(&pool, "https://shop.example.com", &insights)
        .await
        .expect("save should succeed");

    let products = list_brand_products(&pool, brand.id)
        .await
        .expect("query should succeed");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title, "Named Product");
}

#[sqlx::test(migrations = "../../migrations")]
async fn addresses_differing_cosmetically_are_distinct_brands(pool: sqlx::PgPool) {
    // No canonicalization: scheme and trailing-slash variants are separate
    // keys by design.
    save_brand_insights(&pool, "https://shop.example.com", &sample_insights())
        .await
        .expect("first save should succeed");
    save_brand_insights(&pool, "https://shop.example.com/", &sample_insights())
        .await
        .expect("second save should succeed");
    save_brand_insights(&pool, "http://shop.example.com", &sample_insights())
        .await
        .expect("third save should succeed");

    assert_eq!(list_brands(&pool).await.expect("list").len(), 3);

    let exact = get_brand_by_site_url(&pool, "https://shop.example.com")
        .await
        .expect("query should succeed");
    assert!(exact.is_some());
}
