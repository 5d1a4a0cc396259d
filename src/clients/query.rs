//! JSON:API query parameters and their encoding.
//!
//! [`RequestOptions`] collects the recognized JSON:API query parameters
//! (`include`, sparse `fields`, `filter`, `sort`, `page`). [`encode_query`]
//! turns them into a query string using nested-bracket keys:
//!
//! ```text
//! include=a,b  fields[type]=x,y  filter[key]=v  sort=-created  page[limit]=10&page[offset]=0
//! ```
//!
//! Keys and values are percent-encoded, so `,` goes over the wire as `%2C`
//! and brackets as `%5B`/`%5D`.
//!
//! # Example
//!
//! ```rust
//! use commerce_cart::clients::{encode_query, RequestOptions};
//!
//! assert_eq!(encode_query(None), "");
//!
//! let options = RequestOptions::new().includes(["order_items", "order_items.purchased_entity"]);
//! assert_eq!(
//!     encode_query(Some(&options)),
//!     "?include=order_items%2Corder_items.purchased_entity"
//! );
//! ```

use std::collections::BTreeMap;

/// Sparse fieldsets: resource type to the fields to return for it.
pub type Fields = BTreeMap<String, Vec<String>>;

/// Filters: filter key to an opaque value.
pub type Filters = BTreeMap<String, String>;

/// Offset pagination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of resources to return.
    pub limit: u64,
    /// Number of resources to skip.
    pub offset: u64,
}

/// JSON:API query options for a request.
///
/// `None` means the option is omitted (unfiltered, default sort, ...), which
/// is distinct from an empty collection only at the type level: both encode
/// to nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Relationship paths to include.
    pub includes: Option<Vec<String>>,
    /// Sparse fieldsets per resource type.
    pub fields: Option<Fields>,
    /// Single-level filters.
    pub filter: Option<Filters>,
    /// Sort fields, `-` prefixed for descending.
    pub sort: Option<Vec<String>>,
    /// Pagination window.
    pub page: Option<Page>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the relationship paths to include.
    #[must_use]
    pub fn includes<I, S>(mut self, includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes = Some(includes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the sparse fieldsets.
    #[must_use]
    pub fn fields(mut self, fields: Fields) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Adds a sparse fieldset for one resource type.
    #[must_use]
    pub fn field<I, S>(mut self, kind: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .get_or_insert_with(Fields::new)
            .insert(kind.into(), names.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a filter.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter
            .get_or_insert_with(Filters::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the sort fields.
    #[must_use]
    pub fn sort<I, S>(mut self, sort: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort = Some(sort.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the pagination window.
    #[must_use]
    pub const fn page(mut self, limit: u64, offset: u64) -> Self {
        self.page = Some(Page { limit, offset });
        self
    }

    /// Returns the options as ordered `(key, value)` pairs, unencoded.
    ///
    /// Order: `include`, `fields[..]`, `filter[..]`, `sort`, `page[limit]`, `page[offset]`.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(includes) = &self.includes {
            pairs.push(("include".to_string(), includes.join(",")));
        }
        if let Some(fields) = &self.fields {
            for (kind, names) in fields {
                pairs.push((format!("fields[{kind}]"), names.join(",")));
            }
        }
        if let Some(filter) = &self.filter {
            for (key, value) in filter {
                pairs.push((format!("filter[{key}]"), value.clone()));
            }
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.join(",")));
        }
        if let Some(page) = &self.page {
            pairs.push(("page[limit]".to_string(), page.limit.to_string()));
            pairs.push(("page[offset]".to_string(), page.offset.to_string()));
        }

        pairs
    }
}

/// Encodes options as a query string, including the leading `?`.
///
/// Returns an empty string when `options` is `None` or yields no parameters.
#[must_use]
pub fn encode_query(options: Option<&RequestOptions>) -> String {
    let Some(options) = options else {
        return String::new();
    };

    let pairs = options.to_pairs();
    if pairs.is_empty() {
        return String::new();
    }

    let query_string = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("?{query_string}")
}
