use async_trait::async_trait;
use http::Extensions;
use reqwest::{Method, Request, Response};
use reqwest_middleware::{Middleware, Next};

/// Query param carrying the cache busting timestamp.
pub const CACHE_BUST_PARAM: &str = "t";

/// Puts `t=<epoch millis>` in front of the query of every GET request.
///
/// A caller supplied `t` takes precedence and is left untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct CacheBustMiddleware;

impl CacheBustMiddleware {
    fn bust(req: &mut Request) {
        let url = req.url_mut();
        let mut pairs: Vec<(String, String)> =
            url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
        if pairs.iter().any(|(k, _)| k == CACHE_BUST_PARAM) {
            return;
        }
        pairs.insert(0, (String::from(CACHE_BUST_PARAM), chrono::Utc::now().timestamp_millis().to_string()));
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
}

#[async_trait]
impl Middleware for CacheBustMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        if req.method() == Method::GET {
            Self::bust(&mut req);
        }
        next.run(req, extensions).await
    }
}
