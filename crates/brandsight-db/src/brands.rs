//! Database operations for the `brands` table and its owned child collections.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use brandsight_core::StructuredInsights;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `brands` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BrandRow {
    pub id: i64,
    pub name: String,
    pub site_url: String,
    pub privacy_policy: Option<String>,
    pub refund_policy: Option<String>,
    pub return_policy: Option<String>,
    pub brand_about: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A row from the `products` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub brand_id: i64,
    pub title: String,
    pub price: Option<String>,
    pub image: Option<String>,
}

/// A row from the `faqs` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FaqRow {
    pub id: i64,
    pub brand_id: i64,
    pub question: String,
    pub answer: String,
}

/// A row from the `social_handles` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SocialHandleRow {
    pub id: i64,
    pub brand_id: i64,
    pub url: String,
}

/// A row from the `contact_details` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactDetailRow {
    pub id: i64,
    pub brand_id: i64,
    pub contact: String,
}

/// A row from the `important_links` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ImportantLinkRow {
    pub id: i64,
    pub brand_id: i64,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Upsert
// ---------------------------------------------------------------------------

/// Derive a display name from the host component of a site address.
///
/// `https://shop.example.com` becomes `Shop`: the first host label with its
/// first letter uppercased. Falls back to the raw address when the host is
/// empty.
#[must_use]
pub fn display_name_from_url(site_url: &str) -> String {
    let without_scheme = site_url
        .strip_prefix("https://")
        .or_else(|| site_url.strip_prefix("http://"))
        .unwrap_or(site_url);
    let host = without_scheme.split('/').next().unwrap_or(without_scheme);
    let label = host.split(['.', ':']).next().unwrap_or(host);

    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => site_url.to_string(),
    }
}

/// Persist one structured record for `site_url`, creating the brand on first
/// ingestion and fully refreshing it afterwards.
///
/// Runs in a single transaction: look up the brand by `site_url`; insert it
/// if absent, otherwise delete every row of its five child collections and
/// overwrite the scalar policy/about fields; then insert the new child rows
/// and commit. Child collections are replaced, never merged, so re-ingesting
/// the same record is idempotent.
///
/// Product rows come from the union of `products_catalog` and
/// `hero_products`; entries without a non-empty title are skipped.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any statement in the transaction fails.
pub async fn save_brand_insights(
    pool: &PgPool,
    site_url: &str,
    insights: &StructuredInsights,
) -> Result<BrandRow, DbError> {
    let name = display_name_from_url(site_url);
    fn nullify(s: &str) -> Option<&str> {
        if s.is_empty() { None } else { Some(s) }
    }
    let privacy = nullify(&insights.policies.privacy);
    let refund = nullify(&insights.policies.refund);
    let return_policy = nullify(&insights.policies.return_policy);
    let about = nullify(&insights.brand_about);

    let mut tx = pool.begin().await?;

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM brands WHERE site_url = $1")
        .bind(site_url)
        .fetch_optional(&mut *tx)
        .await?;

    let brand_id = if let Some(id) = existing {
        for delete in [
            "DELETE FROM products WHERE brand_id = $1",
            "DELETE FROM faqs WHERE brand_id = $1",
            "DELETE FROM social_handles WHERE brand_id = $1",
            "DELETE FROM contact_details WHERE brand_id = $1",
            "DELETE FROM important_links WHERE brand_id = $1",
        ] {
            sqlx::query(delete).bind(id).execute(&mut *tx).await?;
        }

        sqlx::query(
            "UPDATE brands \
             SET privacy_policy = $2, refund_policy = $3, return_policy = $4, \
                 brand_about = $5, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(privacy)
        .bind(refund)
        .bind(return_policy)
        .bind(about)
        .execute(&mut *tx)
        .await?;

        id
    } else {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO brands \
               (name, site_url, privacy_policy, refund_policy, return_policy, brand_about) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(&name)
        .bind(site_url)
        .bind(privacy)
        .bind(refund)
        .bind(return_policy)
        .bind(about)
        .fetch_one(&mut *tx)
        .await?
    };

    for product in insights
        .products_catalog
        .iter()
        .chain(insights.hero_products.iter())
    {
        let Some(title) = product.title.as_deref().filter(|t| !t.trim().is_empty()) else {
            continue;
        };
        sqlx::query("INSERT INTO products (brand_id, title, price, image) VALUES ($1, $2, $3, $4)")
            .bind(brand_id)
            .bind(title)
            .bind(product.price.as_deref())
            .bind(product.image.as_deref())
            .execute(&mut *tx)
            .await?;
    }

    for faq in &insights.faqs {
        sqlx::query("INSERT INTO faqs (brand_id, question, answer) VALUES ($1, $2, $3)")
            .bind(brand_id)
            .bind(&faq.question)
            .bind(&faq.answer)
            .execute(&mut *tx)
            .await?;
    }

    for social in &insights.social_handles {
        sqlx::query("INSERT INTO social_handles (brand_id, url) VALUES ($1, $2)")
            .bind(brand_id)
            .bind(social)
            .execute(&mut *tx)
            .await?;
    }

    for contact in &insights.contacts {
        sqlx::query("INSERT INTO contact_details (brand_id, contact) VALUES ($1, $2)")
            .bind(brand_id)
            .bind(contact)
            .execute(&mut *tx)
            .await?;
    }

    for link in &insights.important_links {
        sqlx::query("INSERT INTO important_links (brand_id, url) VALUES ($1, $2)")
            .bind(brand_id)
            .bind(link)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    let row = sqlx::query_as::<_, BrandRow>(
        "SELECT id, name, site_url, privacy_policy, refund_policy, return_policy, \
                brand_about, created_at, updated_at \
         FROM brands WHERE id = $1",
    )
    .bind(brand_id)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// Returns all persisted brands, ordered by name.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_brands(pool: &PgPool) -> Result<Vec<BrandRow>, DbError> {
    let rows = sqlx::query_as::<_, BrandRow>(
        "SELECT id, name, site_url, privacy_policy, refund_policy, return_policy, \
                brand_about, created_at, updated_at \
         FROM brands ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Returns a single brand by its site address, or `None` if never ingested.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_brand_by_site_url(
    pool: &PgPool,
    site_url: &str,
) -> Result<Option<BrandRow>, DbError> {
    let row = sqlx::query_as::<_, BrandRow>(
        "SELECT id, name, site_url, privacy_policy, refund_policy, return_policy, \
                brand_about, created_at, updated_at \
         FROM brands WHERE site_url = $1",
    )
    .bind(site_url)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Returns a brand's product rows in insertion order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_brand_products(pool: &PgPool, brand_id: i64) -> Result<Vec<ProductRow>, DbError> {
    let rows = sqlx::query_as::<_, ProductRow>(
        "SELECT id, brand_id, title, price, image FROM products WHERE brand_id = $1 ORDER BY id",
    )
    .bind(brand_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Returns a brand's FAQ rows in insertion order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_brand_faqs(pool: &PgPool, brand_id: i64) -> Result<Vec<FaqRow>, DbError> {
    let rows = sqlx::query_as::<_, FaqRow>(
        "SELECT id, brand_id, question, answer FROM faqs WHERE brand_id = $1 ORDER BY id",
    )
    .bind(brand_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Returns a brand's social handle rows in insertion order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_brand_socials(
    pool: &PgPool,
    brand_id: i64,
) -> Result<Vec<SocialHandleRow>, DbError> {
    let rows = sqlx::query_as::<_, SocialHandleRow>(
        "SELECT id, brand_id, url FROM social_handles WHERE brand_id = $1 ORDER BY id",
    )
    .bind(brand_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Returns a brand's contact detail rows in insertion order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_brand_contacts(
    pool: &PgPool,
    brand_id: i64,
) -> Result<Vec<ContactDetailRow>, DbError> {
    let rows = sqlx::query_as::<_, ContactDetailRow>(
        "SELECT id, brand_id, contact FROM contact_details WHERE brand_id = $1 ORDER BY id",
    )
    .bind(brand_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Returns a brand's important link rows in insertion order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_brand_links(
    pool: &PgPool,
    brand_id: i64,
) -> Result<Vec<ImportantLinkRow>, DbError> {
    let rows = sqlx::query_as::<_, ImportantLinkRow>(
        "SELECT id, brand_id, url FROM important_links WHERE brand_id = $1 ORDER BY id",
    )
    .bind(brand_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
