/// Fixed number of products per page in the admin grid.
pub const PAGE_SIZE: u32 = 12;

/// Search and filter parameters for the paged admin list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilters {
    /// Free-text search term; empty means no search filter.
    pub search: Option<String>,
    pub category_id: Option<String>,
    pub status: Option<String>,
    /// 1-based page number as shown in the UI.
    pub page: u32,
}

impl Default for ListFilters {
    fn default() -> Self {
        Self {
            search: None,
            category_id: None,
            status: None,
            page: 1,
        }
    }
}

impl ListFilters {
    /// Query parameters for the backend list endpoint.
    ///
    /// The wire `page` parameter is zero-based and the page size is fixed.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(q) = self.search.as_deref().filter(|q| !q.is_empty()) {
            params.push(("q", q.to_string()));
        }
        if let Some(category_id) = &self.category_id {
            params.push(("categoryId", category_id.clone()));
        }
        if let Some(status) = &self.status {
            params.push(("status", status.clone()));
        }
        params.push(("page", self.page.saturating_sub(1).to_string()));
        params.push(("size", PAGE_SIZE.to_string()));
        params
    }
}
