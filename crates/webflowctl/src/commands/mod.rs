//! Command handlers grouped by API resource.

pub(crate) mod collections;
pub(crate) mod completions;
pub(crate) mod sites;
pub(crate) mod webhooks;
