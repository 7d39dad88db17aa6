// tests/common/mod.rs
//
// Offline `Fetch` for integration tests: URL → (final URL, body).
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use bo_scrape::core::net::{Fetch, Fetched};
use bo_scrape::error::ScrapeError;

pub fn fixture(name: &str) -> String {
    let p = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    std::fs::read_to_string(&p).unwrap_or_else(|e| panic!("read {}: {e}", p.display()))
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("bo_test_{}", name));
    let _ = std::fs::remove_dir_all(&p);
    std::fs::create_dir_all(&p).unwrap();
    p
}

#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, (String, String)>,
    pub requested: RefCell<Vec<String>>,
}

impl StubFetcher {
    /// Serve `body` for `url` without a redirect.
    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), (url.to_string(), body.to_string()));
        self
    }

    /// Serve `body` for `url` as if the site redirected to `final_url`.
    pub fn redirect(mut self, url: &str, final_url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), (final_url.to_string(), body.to_string()));
        self
    }
}

impl Fetch for StubFetcher {
    fn get(&self, url: &str) -> Result<Fetched, ScrapeError> {
        self.requested.borrow_mut().push(url.to_string());
        match self.pages.get(url) {
            Some((final_url, body)) => Ok(Fetched { url: final_url.clone(), body: body.clone() }),
            None => Err(ScrapeError::Status { status: 404, url: url.to_string() }),
        }
    }
}
