// src/core/net.rs
//
// Blocking HTTP GET behind a tiny trait so specs and the collector can run
// against saved pages in tests.

use std::{thread, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::ScrapeError;

/// A fetched page. `url` is the final URL after redirects.
pub struct Fetched {
    pub url: String,
    pub body: String,
}

pub trait Fetch {
    fn get(&self, url: &str) -> Result<Fetched, ScrapeError>;
}

pub struct HttpFetcher {
    client: Client,
    pause: Duration,
}

impl HttpFetcher {
    /// `pause_ms` is slept after every request, successful or not.
    pub fn new(pause_ms: u64) -> Result<Self, ScrapeError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, pause: Duration::from_millis(pause_ms) })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Fetched, ScrapeError> {
        let t = std::time::Instant::now();
        let res = fetch_once(&self.client, url);
        logd!("Net: GET {} in {:?}", url, t.elapsed());
        thread::sleep(self.pause);
        res
    }
}

fn fetch_once(client: &Client, url: &str) -> Result<Fetched, ScrapeError> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status { status: status.as_u16(), url: s!(url) });
    }
    let final_url = resp.url().to_string();
    let body = resp.text()?;
    Ok(Fetched { url: final_url, body })
}
