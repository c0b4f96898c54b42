use crate::codes::{FilterCodes, FilterKind};

/// The three filter selections of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub pos: FilterCodes,
    pub region: FilterCodes,
    pub cat: FilterCodes,
}

impl Filters {
    pub fn set(&mut self, kind: FilterKind, codes: FilterCodes) {
        match kind {
            FilterKind::Pos => self.pos = codes,
            FilterKind::Region => self.region = codes,
            FilterKind::Category => self.cat = codes,
        }
    }
}

/// Everything sent with a search request.
/// Only `start` moves while paging, the rest is fixed for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub key: String,
    pub q: String,
    pub req_type: &'static str,
    pub start: u32,
    pub num: u32,
    pub method: &'static str,
    pub advanced: &'static str,
    pub filters: Filters,
}

impl QueryParams {
    pub fn new(key: impl Into<String>, q: impl Into<String>, num: u32, filters: Filters) -> Self {
        Self {
            key: key.into(),
            q: q.into(),
            req_type: "json",
            start: 1,
            num,
            method: "include",
            advanced: "y",
            filters,
        }
    }

    /// Query string pairs in the order the API documents them.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("key", self.key.clone()),
            ("q", self.q.clone()),
            ("req_type", self.req_type.to_owned()),
            ("start", self.start.to_string()),
            ("num", self.num.to_string()),
            ("method", self.method.to_owned()),
            ("advanced", self.advanced.to_owned()),
            ("pos", self.filters.pos.to_string()),
            ("region", self.filters.region.to_string()),
            ("cat", self.filters.cat.to_string()),
        ]
    }
}
