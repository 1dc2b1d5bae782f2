//! ==============================================================================
//! remote.rs - http client for remote modules
//! ==============================================================================

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use shared::{LoadError, ManifestSource, RemoteRegistry, TextFetcher};

/// module source used in the browser
pub type HttpModuleSource = ManifestSource<HttpFetcher>;

pub fn http_source(registry: RemoteRegistry) -> HttpModuleSource {
    ManifestSource::new(registry, HttpFetcher)
}

/// GET over the browser's fetch api
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

impl TextFetcher for HttpFetcher {
    fn get_text(&self, url: &str) -> LocalBoxFuture<'static, Result<String, LoadError>> {
        let url = url.to_string();

        async move {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| LoadError::Network(e.to_string()))?;

            if !response.ok() {
                return Err(LoadError::Network(format!(
                    "{} returned {}",
                    url,
                    response.status()
                )));
            }

            response
                .text()
                .await
                .map_err(|e| LoadError::InvalidModule(e.to_string()))
        }
        .boxed_local()
    }
}
