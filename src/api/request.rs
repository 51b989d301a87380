//! Request descriptors produced by the API client.
//!
//! A request is plain data: the plugin shim turns it into a Zellij
//! `web_request` call, and tests inspect it directly.

use std::collections::BTreeMap;
use std::fmt;

/// Identifier attached to every dispatched request.
///
/// Travels through the `web_request` context map so the response event can be
/// matched back to the state that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RequestId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// The API operation a request performs.
///
/// Carries the parameters the request was built from, which is what the
/// response decoder and the logs need to know about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOp {
    ListAll { page: u32, size: u32 },
    GetById { id: i64 },
    Create,
    Update { id: i64 },
    Remove { id: i64 },
    Search { keyword: String, page: u32, size: u32 },
    ByTag { tag: String, page: u32, size: u32 },
    ListTags,
}

impl ApiOp {
    /// Short operation name used in logs and error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ListAll { .. } => "list_all",
            Self::GetById { .. } => "get_by_id",
            Self::Create => "create",
            Self::Update { .. } => "update",
            Self::Remove { .. } => "remove",
            Self::Search { .. } => "search",
            Self::ByTag { .. } => "by_tag",
            Self::ListTags => "list_tags",
        }
    }

    /// Whether the operation yields a page of bookmarks.
    #[must_use]
    pub const fn is_listing(&self) -> bool {
        matches!(
            self,
            Self::ListAll { .. } | Self::Search { .. } | Self::ByTag { .. }
        )
    }
}

/// A fully built HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub op: ApiOp,
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}
