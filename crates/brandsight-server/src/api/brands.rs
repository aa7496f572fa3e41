//! Brand endpoints: trigger one ingestion run, list persisted brands.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use brandsight_pipeline::IngestOutcome;

use crate::middleware::RequestId;

use super::{map_db_error, map_pipeline_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(in crate::api) struct IngestRequest {
    site_url: String,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct BrandDetail {
    pub id: i64,
    pub name: String,
    pub site_url: String,
    pub privacy_policy: Option<String>,
    pub refund_policy: Option<String>,
    pub return_policy: Option<String>,
    pub brand_about: Option<String>,
    pub products: Vec<ProductItem>,
    pub faqs: Vec<FaqItem>,
    pub social_handles: Vec<String>,
    pub contact_details: Vec<String>,
    pub important_links: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct ProductItem {
    pub title: String,
    pub price: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// POST /api/v1/brands/ingest — run the full pipeline for one address.
///
/// Synchronous: responds once the run (including competitor fan-out) is
/// done. A structuring failure anywhere in the chain maps to 502 with the
/// failing address in the message.
pub(in crate::api) async fn ingest_brand(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<IngestRequest>,
) -> Result<Json<ApiResponse<IngestOutcome>>, ApiError> {
    let site_url = request.site_url.trim();
    if site_url.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "site_url must not be empty",
        ));
    }

    let outcome = brandsight_pipeline::ingest_brand(
        &state.pool,
        &state.site,
        &state.structurer,
        site_url,
    )
    .await
    .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: outcome,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// GET /api/v1/brands — every persisted brand with its child collections.
pub(in crate::api) async fn list_brands(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<BrandDetail>>>, ApiError> {
    let brands = brandsight_db::list_brands(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let mut data = Vec::with_capacity(brands.len());
    for brand in brands {
        let products = brandsight_db::list_brand_products(&state.pool, brand.id)
            .await
            .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
        let faqs = brandsight_db::list_brand_faqs(&state.pool, brand.id)
            .await
            .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
        let socials = brandsight_db::list_brand_socials(&state.pool, brand.id)
            .await
            .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
        let contacts = brandsight_db::list_brand_contacts(&state.pool, brand.id)
            .await
            .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
        let links = brandsight_db::list_brand_links(&state.pool, brand.id)
            .await
            .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

        data.push(BrandDetail {
            id: brand.id,
            name: brand.name,
            site_url: brand.site_url,
            privacy_policy: brand.privacy_policy,
            refund_policy: brand.refund_policy,
            return_policy: brand.return_policy,
            brand_about: brand.brand_about,
            products: products
                .into_iter()
                .map(|p| ProductItem {
                    title: p.title,
                    price: p.price,
                    image: p.image,
                })
                .collect(),
            faqs: faqs
                .into_iter()
                .map(|f| FaqItem {
                    question: f.question,
                    answer: f.answer,
                })
                .collect(),
            social_handles: socials.into_iter().map(|s| s.url).collect(),
            contact_details: contacts.into_iter().map(|c| c.contact).collect(),
            important_links: links.into_iter().map(|l| l.url).collect(),
        });
    }

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
