//! List-view orchestration for the admin product screen.
//!
//! Owns the canonical in-memory product list, the search/filter/pagination
//! parameters, and the modal markers. Local state is a cache for the current
//! page view only; the backend stays the source of truth and create/update
//! mutations are reconciled with a follow-up fetch.

use serde_json::Value;

use crate::gateway::{GatewayError, ProductGateway};
use crate::mapper;
use crate::models::{Brand, Category, ListFilters, PAGE_SIZE, Product};

/// Statuses offered in the filter dropdown when the enum lookup fails.
pub const DEFAULT_STATUSES: [&str; 3] = ["ACTIVE", "INACTIVE", "OUT_OF_STOCK"];

/// Backend statuses accepted by the product validators.
const VALID_PAYLOAD_STATUSES: [&str; 3] = ["draft", "active", "archived"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Ready,
    Errored(String),
}

/// Identifies one list request; a response carrying a stale token must not
/// overwrite state produced by a newer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshToken(u64);

pub struct ProductListController<G> {
    gateway: G,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
    pub statuses: Vec<String>,
    pub filters: ListFilters,
    pub phase: ListPhase,
    /// Product shown in the view modal, if any.
    pub viewing: Option<Product>,
    /// Product open in the edit modal, if any.
    pub editing: Option<Product>,
    /// Row with a delete in flight; blocks duplicate deletes of that row.
    pub deleting_id: Option<String>,
    pub saving: bool,
    seq: u64,
}

impl<G: ProductGateway> ProductListController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            products: Vec::new(),
            categories: Vec::new(),
            brands: Vec::new(),
            statuses: Vec::new(),
            filters: ListFilters::default(),
            phase: ListPhase::Loading,
            viewing: None,
            editing: None,
            deleting_id: None,
            saving: false,
            seq: 0,
        }
    }

    // --- list fetching -----------------------------------------------------

    /// Enter `Loading` and mint the token for a new list request.
    pub fn begin_refresh(&mut self) -> RefreshToken {
        self.seq += 1;
        self.phase = ListPhase::Loading;
        RefreshToken(self.seq)
    }

    /// Apply a list result. Stale results (an older request resolving after
    /// a newer one) are discarded. A failed fetch clears the list and
    /// records the message for the empty-state UI.
    pub fn apply_list(&mut self, token: RefreshToken, result: Result<Vec<Product>, GatewayError>) {
        if token != RefreshToken(self.seq) {
            tracing::debug!("discarding stale list response");
            return;
        }
        match result {
            Ok(products) => {
                self.products = products;
                self.phase = ListPhase::Ready;
            }
            Err(err) => {
                self.products.clear();
                self.phase = ListPhase::Errored(err.to_string());
            }
        }
    }

    pub async fn refresh(&mut self) {
        let token = self.begin_refresh();
        let filters = self.filters.clone();
        let result = self.gateway.list(&filters).await;
        self.apply_list(token, result);
    }

    /// Post-mutation re-fetch. Unlike `refresh`, a failure here keeps the
    /// locally spliced list rather than reverting to an empty error state.
    async fn reconcile(&mut self) {
        self.seq += 1;
        let token = RefreshToken(self.seq);
        let filters = self.filters.clone();
        match self.gateway.list(&filters).await {
            Ok(products) if token == RefreshToken(self.seq) => self.products = products,
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(error = %err, "reconcile fetch failed, keeping local state");
            }
        }
    }

    // --- parameter changes -------------------------------------------------

    pub async fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.filters.search = (!term.is_empty()).then_some(term);
        self.refresh().await;
    }

    pub async fn set_category_filter(&mut self, category_id: Option<String>) {
        self.filters.category_id = category_id;
        self.refresh().await;
    }

    pub async fn set_status_filter(&mut self, status: Option<String>) {
        self.filters.status = status;
        self.refresh().await;
    }

    pub async fn set_page(&mut self, page: u32) {
        self.filters.page = page.max(1);
        self.refresh().await;
    }

    // --- row actions -------------------------------------------------------

    /// Open the view modal, fetching the product only when it is not in the
    /// current page.
    pub async fn view(&mut self, id: &str) -> Result<(), GatewayError> {
        if let Some(product) = self.products.iter().find(|p| p.id == id) {
            self.viewing = Some(product.clone());
            return Ok(());
        }
        self.viewing = Some(self.gateway.get(id).await?);
        Ok(())
    }

    pub async fn edit(&mut self, id: &str) -> Result<(), GatewayError> {
        if let Some(product) = self.products.iter().find(|p| p.id == id) {
            self.editing = Some(product.clone());
            return Ok(());
        }
        self.editing = Some(self.gateway.get(id).await?);
        Ok(())
    }

    /// Delete a product. On success the row is removed locally and an open
    /// modal for that id closes; no re-fetch follows a delete.
    pub async fn delete(&mut self, id: &str) -> Result<(), GatewayError> {
        if self.deleting_id.as_deref() == Some(id) {
            return Ok(());
        }
        self.deleting_id = Some(id.to_string());
        let result = self.gateway.remove(id).await;
        self.deleting_id = None;
        result?;

        self.products.retain(|p| p.id != id);
        if self.viewing.as_ref().is_some_and(|p| p.id == id) {
            self.viewing = None;
        }
        if self.editing.as_ref().is_some_and(|p| p.id == id) {
            self.editing = None;
        }
        Ok(())
    }

    /// Create a product: prepend the mapped result locally, then reconcile.
    pub async fn create(&mut self, payload: Value) -> Result<(), GatewayError> {
        self.saving = true;
        let result = self.gateway.create(&payload).await;
        self.saving = false;

        let created = mapper::created_product_from_value(&result?);
        if !created.id.is_empty() {
            self.products.insert(0, created);
        }
        self.reconcile().await;
        Ok(())
    }

    /// Save the edit modal: replace the row with the merged response, then
    /// reconcile and close the modal.
    pub async fn save_edit(&mut self, payload: Value) -> Result<(), GatewayError> {
        let Some(editing) = self.editing.clone() else {
            return Ok(());
        };
        let payload = ensure_valid_status(payload);

        self.saving = true;
        let result = self.gateway.update(&editing.id, &payload).await;
        self.saving = false;

        let merged = mapper::merge_product_value(&result?, &editing);
        if let Some(slot) = self.products.iter_mut().find(|p| p.id == editing.id) {
            *slot = merged;
        }
        self.reconcile().await;
        self.editing = None;
        Ok(())
    }

    // --- metadata ----------------------------------------------------------

    /// Load the filter dropdown data. Category and brand failures degrade to
    /// "no options available" rather than blocking the page; the status enum
    /// falls back to the fixed default set.
    pub async fn load_metadata(&mut self) {
        self.categories = self.gateway.list_categories().await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "categories unavailable");
            Vec::new()
        });
        self.brands = self.gateway.list_brands().await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "brands unavailable");
            Vec::new()
        });
        self.statuses = self
            .gateway
            .list_statuses()
            .await
            .unwrap_or_else(|_| DEFAULT_STATUSES.iter().map(|s| s.to_string()).collect());
    }

    /// Create a category by name and refresh the dropdown; returns the new
    /// id when the backend reports one.
    pub async fn create_category(&mut self, name: &str) -> Result<Option<String>, GatewayError> {
        let id = self.gateway.create_category(name).await?;
        if let Ok(categories) = self.gateway.list_categories().await {
            self.categories = categories;
        }
        Ok(id)
    }

    // --- derived view state ------------------------------------------------

    /// Redundant client-side filter guard. Server-side filtering is
    /// authoritative; this re-applies the same category/status filters to
    /// the held page so the grid never shows a row the filters exclude.
    pub fn filtered_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| {
                self.filters
                    .category_id
                    .as_ref()
                    .is_none_or(|wanted| &p.category_id == wanted)
            })
            .filter(|p| {
                self.filters
                    .status
                    .as_ref()
                    .is_none_or(|wanted| &p.status.to_string() == wanted)
            })
            .collect()
    }

    /// "Showing X–Y of N" figures for the pagination footer.
    ///
    /// N is the client-side filtered length, not a server-reported total, so
    /// the footer can disagree with the true total count when later pages
    /// exist. Kept as-is until the backend reports a total.
    pub fn page_summary(&self) -> (usize, usize, usize) {
        let total = self.filtered_products().len();
        let page = self.filters.page as usize;
        let start = page.saturating_sub(1) * PAGE_SIZE as usize + 1;
        let end = (page * PAGE_SIZE as usize).min(total);
        (start, end, total)
    }

    pub fn has_prev(&self) -> bool {
        self.filters.page > 1
    }

    pub fn has_next(&self) -> bool {
        ((self.filters.page * PAGE_SIZE) as usize) < self.filtered_products().len()
    }
}

/// Force a missing or unrecognized payload status to `draft` before sending;
/// the backend rejects anything outside its lowercase enum.
fn ensure_valid_status(mut payload: Value) -> Value {
    if let Some(fields) = payload.as_object_mut() {
        let valid = fields
            .get("status")
            .and_then(Value::as_str)
            .is_some_and(|s| VALID_PAYLOAD_STATUSES.contains(&s));
        if !valid {
            fields.insert("status".to_string(), Value::String("draft".to_string()));
        }
    }
    payload
}
