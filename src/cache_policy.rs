//! Route kind → cache directive table.
//!
//! Directives are hints for downstream caches (CDN, browser) and for the
//! prerender manifest. Nothing is cached or evicted in this process.

use actix_web::http::header::{HeaderValue, CACHE_CONTROL};
use actix_web::HttpResponseBuilder;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// `/api/ex2`, `/api/ex2/{id}`
    ProductProxy,
    /// `/api/ex3`, `/api/ex4`, `/api/ex4/{category}`
    CategoryProxy,
    /// `/ui/ex3`, `/ui/ex4/{category}`, `/ui/ex4/{category}/{id}`
    RenderedPage,
    /// `/ui/ex4`
    CategoryIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CacheDirective {
    /// Fresh for `fresh`, then served stale for up to `stale_while_revalidate` while refreshing.
    Edge {
        #[serde(with = "secs")]
        fresh: Duration,
        #[serde(with = "secs")]
        stale_while_revalidate: Duration,
    },
    /// Regenerate the rendered page at most once per interval.
    Revalidate {
        #[serde(with = "secs")]
        every: Duration,
    },
}

impl CacheDirective {
    pub const fn edge(fresh_secs: u64, swr_secs: u64) -> Self {
        Self::Edge {
            fresh: Duration::from_secs(fresh_secs),
            stale_while_revalidate: Duration::from_secs(swr_secs),
        }
    }

    pub const fn revalidate(every_secs: u64) -> Self {
        Self::Revalidate {
            every: Duration::from_secs(every_secs),
        }
    }

    pub fn cache_control_header(&self) -> String {
        match self {
            Self::Edge {
                fresh,
                stale_while_revalidate,
            } => format!(
                "public, s-maxage={}, stale-while-revalidate={}",
                fresh.as_secs(),
                stale_while_revalidate.as_secs()
            ),
            Self::Revalidate { every } => format!(
                "public, s-maxage={}, stale-while-revalidate",
                every.as_secs()
            ),
        }
    }

    /// Revalidation interval in seconds, if this directive has one.
    pub fn revalidate_secs(&self) -> Option<u64> {
        match self {
            Self::Revalidate { every } => Some(every.as_secs()),
            Self::Edge { .. } => None,
        }
    }

    pub fn apply(&self, builder: &mut HttpResponseBuilder) {
        match HeaderValue::from_str(&self.cache_control_header()) {
            Ok(value) => {
                builder.insert_header((CACHE_CONTROL, value));
            }
            Err(err) => tracing::error!(error = %err, "Invalid Cache-Control value"),
        }
    }
}

impl RouteKind {
    pub const fn directive(self) -> CacheDirective {
        match self {
            Self::ProductProxy => CacheDirective::edge(60, 300),
            Self::CategoryProxy => CacheDirective::edge(3_600, 86_400),
            Self::RenderedPage => CacheDirective::revalidate(3_600),
            Self::CategoryIndex => CacheDirective::revalidate(86_400),
        }
    }
}

mod secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_routes_use_edge_directives() {
        assert_eq!(
            RouteKind::ProductProxy.directive().cache_control_header(),
            "public, s-maxage=60, stale-while-revalidate=300"
        );
        assert_eq!(
            RouteKind::CategoryProxy.directive().cache_control_header(),
            "public, s-maxage=3600, stale-while-revalidate=86400"
        );
    }

    #[test]
    fn pages_use_revalidate_directives() {
        assert_eq!(RouteKind::RenderedPage.directive().revalidate_secs(), Some(3_600));
        assert_eq!(RouteKind::CategoryIndex.directive().revalidate_secs(), Some(86_400));
        assert_eq!(RouteKind::ProductProxy.directive().revalidate_secs(), None);
        assert_eq!(
            RouteKind::CategoryIndex.directive().cache_control_header(),
            "public, s-maxage=86400, stale-while-revalidate"
        );
    }

    #[test]
    fn directive_serializes_in_seconds() {
        let value = serde_json::to_value(RouteKind::RenderedPage.directive()).unwrap();
        assert_eq!(value, serde_json::json!({"kind": "revalidate", "every": 3600}));
    }

    #[test]
    fn apply_sets_cache_control_header() {
        let mut builder = actix_web::HttpResponse::Ok();
        RouteKind::ProductProxy.directive().apply(&mut builder);
        let resp = builder.finish();
        assert_eq!(
            resp.headers().get(CACHE_CONTROL).unwrap(),
            "public, s-maxage=60, stale-while-revalidate=300"
        );
    }
}
