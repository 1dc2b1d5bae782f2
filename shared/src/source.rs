//! where remote modules come from
//!
//! `ModuleSource` is the seam between the shell view and the network.
//! `ManifestSource` implements it on top of any `TextFetcher`: read the
//! remote's manifest, resolve the exposed path, fetch the fragment.

use futures::future::{FutureExt, LocalBoxFuture};
use tracing::debug;

use crate::error::LoadError;
use crate::module::{ModuleRef, RemoteComponent, RemoteManifest, RemoteRegistry};

pub trait ModuleSource {
    fn fetch(&self, module: &ModuleRef) -> LocalBoxFuture<'static, Result<RemoteComponent, LoadError>>;
}

/// plain GET returning the response body
pub trait TextFetcher: Clone + 'static {
    fn get_text(&self, url: &str) -> LocalBoxFuture<'static, Result<String, LoadError>>;
}

#[derive(Debug, Clone)]
pub struct ManifestSource<F> {
    registry: RemoteRegistry,
    fetcher: F,
}

impl<F: TextFetcher> ManifestSource<F> {
    pub fn new(registry: RemoteRegistry, fetcher: F) -> Self {
        Self { registry, fetcher }
    }
}

impl<F: TextFetcher> ModuleSource for ManifestSource<F> {
    fn fetch(&self, module: &ModuleRef) -> LocalBoxFuture<'static, Result<RemoteComponent, LoadError>> {
        let registry = self.registry.clone();
        let fetcher = self.fetcher.clone();
        let module = module.clone();

        async move {
            let base_url = registry.base_url(module.remote())?.to_string();
            let manifest_url = registry.manifest_url(&module)?;
            debug!(%module, url = %manifest_url, "fetching remote manifest");

            let manifest = RemoteManifest::from_json(&fetcher.get_text(&manifest_url).await?)?;
            let module_url = manifest.resolve(&base_url, &module)?;
            debug!(%module, url = %module_url, "fetching remote module");

            let markup = fetcher.get_text(&module_url).await?;
            Ok(RemoteComponent::new(module, markup))
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeWeb;
    use futures::executor::block_on;

    fn registry() -> RemoteRegistry {
        RemoteRegistry::new().register("HeaderApp", "http://localhost:3001")
    }

    fn header_ref() -> ModuleRef {
        "HeaderApp/Header".parse().unwrap()
    }

    #[test]
    fn test_fetch_through_manifest() {
        let web = FakeWeb::with(&[
            (
                "http://localhost:3001/remoteEntry.json",
                r#"{"name": "HeaderApp", "exposes": {"./Header": "header.html"}}"#,
            ),
            ("http://localhost:3001/header.html", "<h1>Header Loaded</h1>"),
        ]);
        let source = ManifestSource::new(registry(), web.clone());

        let component = block_on(source.fetch(&header_ref())).unwrap();
        assert_eq!(component.markup, "<h1>Header Loaded</h1>");
        assert_eq!(component.module, header_ref());
        assert_eq!(
            web.requests(),
            [
                "http://localhost:3001/remoteEntry.json",
                "http://localhost:3001/header.html",
            ]
        );
    }

    #[test]
    fn test_unknown_remote_makes_no_request() {
        let web = FakeWeb::default();
        let source = ManifestSource::new(RemoteRegistry::new(), web.clone());

        let err = block_on(source.fetch(&header_ref())).unwrap_err();
        assert_eq!(err, LoadError::UnknownRemote("HeaderApp".to_string()));
        assert!(web.requests().is_empty());
    }

    #[test]
    fn test_missing_manifest_is_network_error() {
        let source = ManifestSource::new(registry(), FakeWeb::default());
        assert!(matches!(
            block_on(source.fetch(&header_ref())),
            Err(LoadError::Network(_))
        ));
    }

    #[test]
    fn test_manifest_without_module() {
        let web = FakeWeb::with(&[(
            "http://localhost:3001/remoteEntry.json",
            r#"{"name": "HeaderApp", "exposes": {"./Footer": "footer.html"}}"#,
        )]);
        let source = ManifestSource::new(registry(), web);
        assert!(matches!(
            block_on(source.fetch(&header_ref())),
            Err(LoadError::NotExposed { .. })
        ));
    }
}
