//! # Review Repository
//!
//! Per-product review listing and submission.
//!
//! Submitted reviews live alongside (not inside) the catalog's seed blurbs:
//! the client concatenates the two when it renders a product page, and only
//! the submitted half ever grows.

use tokio::time::sleep;
use tracing::{debug, info};

use chrono::Utc;
use kirana_core::validation::{validate_rating, validate_review_text};
use kirana_core::{PublicUser, Review};

use crate::error::{BackendError, BackendResult};
use crate::store::SharedStore;
use crate::{ADD_REVIEW_LATENCY, LIST_REVIEWS_LATENCY};

/// Repository for review operations.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    store: SharedStore,
}

impl ReviewRepository {
    pub(crate) fn new(store: SharedStore) -> Self {
        ReviewRepository { store }
    }

    /// Lists submitted reviews for one product, in submission order.
    ///
    /// Anonymous callers may list reviews; only submission requires a user.
    pub async fn list_for_product(&self, product_id: u32) -> Vec<Review> {
        sleep(LIST_REVIEWS_LATENCY).await;

        let data = self.store.lock().expect("store mutex poisoned");
        let reviews: Vec<Review> = data
            .reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect();

        debug!(product_id = %product_id, count = reviews.len(), "listed reviews");
        reviews
    }

    /// Submits a review for a product.
    ///
    /// ## Rules
    /// - Requires an authenticated user; the author is the user's display
    ///   name, never caller-supplied
    /// - Rating must be 1..=5, text non-empty after trimming
    /// - Returns the stored review so the caller can render it immediately
    pub async fn add(
        &self,
        product_id: u32,
        rating: u8,
        text: &str,
        user: Option<&PublicUser>,
    ) -> BackendResult<Review> {
        sleep(ADD_REVIEW_LATENCY).await;

        let user = user.ok_or(BackendError::AuthenticationRequired)?;
        validate_rating(rating)?;
        validate_review_text(text)?;

        let review = Review {
            product_id,
            rating,
            text: text.trim().to_string(),
            author: user.name.clone(),
            created_at: Utc::now(),
        };

        let mut data = self.store.lock().expect("store mutex poisoned");
        data.reviews.push(review.clone());

        info!(product_id = %product_id, user_id = %user.id, rating = %rating, "review submitted");
        Ok(review)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
