//! test doubles shared by the unit tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::error::LoadError;
use crate::source::TextFetcher;

/// in-memory web: url -> body, recording every request when it is sent
#[derive(Clone, Default)]
pub(crate) struct FakeWeb {
    pages: Rc<HashMap<String, String>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl FakeWeb {
    pub(crate) fn with(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: Rc::new(
                pages
                    .iter()
                    .map(|(url, body)| (url.to_string(), body.to_string()))
                    .collect(),
            ),
            requests: Rc::default(),
        }
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl TextFetcher for FakeWeb {
    fn get_text(&self, url: &str) -> LocalBoxFuture<'static, Result<String, LoadError>> {
        let url = url.to_string();
        let pages = Rc::clone(&self.pages);
        let requests = Rc::clone(&self.requests);

        async move {
            requests.borrow_mut().push(url.clone());
            pages
                .get(&url)
                .cloned()
                .ok_or_else(|| LoadError::Network(format!("{url} returned 404")))
        }
        .boxed_local()
    }
}
