use serde::{Deserialize, Serialize};

/// Default number of assets requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Body of the asset search POST.
///
/// Both criteria are always serialized, so an unfiltered search is sent
/// as `{"asset": null, "vulnerability": null}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSearchRequest {
    /// Asset search criteria (e.g. `"asset.ipv4 = 10.0.0.1"`).
    pub asset: Option<String>,
    /// Vulnerability search criteria.
    pub vulnerability: Option<String>,
}

impl AssetSearchRequest {
    /// Search with no asset or vulnerability filter.
    pub fn unfiltered() -> Self {
        Self::default()
    }
}

/// Pagination query parameters, encoded as `?size=<n>&page=<p>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub size: u32,
    pub page: u32,
}

impl PageQuery {
    /// The first page at the default size.
    pub fn first() -> Self {
        Self {
            size: DEFAULT_PAGE_SIZE,
            page: 0,
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::first()
    }
}
