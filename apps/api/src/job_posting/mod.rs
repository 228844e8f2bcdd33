//! Fetches a job posting page and pulls out the description text.
//!
//! Known job-board containers are tried first, then generic page regions.
//! When nothing usable is found the caller gets `NoContent`; no text is ever made up.
//!
//! Only public addresses are fetched. Redirects are followed by hand so every
//! hop goes through the same host check, and page bodies are capped.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, redirect, Client, Response, Url};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{info, warn};

pub mod handlers;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: usize = 5;
/// Bytes of HTML read from a posting; anything past this is dropped.
const MAX_PAGE_BYTES: usize = 2 * 1024 * 1024;
/// Shorter matches are usually a title or a button label, not a description.
const MIN_DESCRIPTION_CHARS: usize = 40;

const DESCRIPTION_SELECTORS: &[&str] = &[
    ".jobs-description__container",
    ".jobs-box__html-content",
    ".show-more-less-html__markup",
    "#jobDescriptionText",
    "[data-testid='job-description']",
    "[itemprop='description']",
    "[class*='job-description']",
    "[class*='jobDescription']",
    "[id*='job-description']",
    "[class*='description']",
];

const FALLBACK_SELECTORS: &[&str] = &["main", "article", "[role='main']", "body"];

const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "svg"];

#[derive(Debug, Error)]
pub enum JobFetchError {
    #[error("Invalid job posting URL: {0}")]
    InvalidUrl(String),

    #[error("Job posting host is not publicly routable: {0}")]
    ForbiddenHost(String),

    #[error("Could not resolve job posting host: {0}")]
    Resolve(String),

    #[error("Job posting redirected too many times")]
    TooManyRedirects,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Job posting returned status {0}")]
    Status(u16),

    #[error("No job description found on the page")]
    NoContent,
}

/// Source of job description text for a posting URL.
///
/// Carried in `AppState` as `Arc<dyn JobPostingSource>` so handlers can be
/// exercised without network access.
#[async_trait]
pub trait JobPostingSource: Send + Sync {
    async fn fetch_description(&self, url: &str) -> Result<String, JobFetchError>;
}

/// Live implementation: HTTP GET plus HTML extraction.
#[derive(Clone)]
pub struct JobPostingFetcher {
    client: Client,
    allow_private_hosts: bool,
}

impl JobPostingFetcher {
    pub fn new() -> Result<Self, JobFetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .redirect(redirect::Policy::none())
            .build()?;
        Ok(Self {
            client,
            allow_private_hosts: false,
        })
    }

    /// Fetcher that skips the public-address check, for local test servers.
    #[cfg(test)]
    fn allowing_private_hosts() -> Result<Self, JobFetchError> {
        Ok(Self {
            allow_private_hosts: true,
            ..Self::new()?
        })
    }

    async fn check_host(&self, url: &Url) -> Result<(), JobFetchError> {
        if self.allow_private_hosts {
            return Ok(());
        }
        let Some(domain) = screen_host(url)? else {
            return Ok(());
        };

        let port = url.port_or_known_default().unwrap_or(80);
        let addrs = tokio::net::lookup_host((domain, port))
            .await
            .map_err(|e| JobFetchError::Resolve(e.to_string()))?;
        for addr in addrs {
            if !is_public_ip(addr.ip()) {
                warn!("Refusing job posting host {domain} resolving to {}", addr.ip());
                return Err(JobFetchError::ForbiddenHost(domain.to_string()));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl JobPostingSource for JobPostingFetcher {
    async fn fetch_description(&self, url: &str) -> Result<String, JobFetchError> {
        let mut url = parse_posting_url(url)?;
        let mut redirects = 0;

        let response = loop {
            self.check_host(&url).await?;
            info!("Fetching job posting: {url}");

            let response = self.client.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_redirection() {
                break response;
            }
            if redirects == MAX_REDIRECTS {
                return Err(JobFetchError::TooManyRedirects);
            }
            redirects += 1;

            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .ok_or(JobFetchError::Status(status.as_u16()))?;
            url = redirect_target(&url, location)?;
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Job posting fetch returned {status}");
            return Err(JobFetchError::Status(status.as_u16()));
        }

        let html = read_capped(response, MAX_PAGE_BYTES).await?;
        let description = extract_posting_text(&html).ok_or(JobFetchError::NoContent)?;
        info!("Extracted {} chars of job description", description.len());
        Ok(description)
    }
}

fn parse_posting_url(raw: &str) -> Result<Url, JobFetchError> {
    let url = Url::parse(raw.trim()).map_err(|e| JobFetchError::InvalidUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(JobFetchError::InvalidUrl(format!(
            "unsupported scheme '{other}'"
        ))),
    }
}

fn redirect_target(current: &Url, location: &str) -> Result<Url, JobFetchError> {
    let next = current
        .join(location)
        .map_err(|e| JobFetchError::InvalidUrl(e.to_string()))?;
    let next = parse_posting_url(next.as_str())?;
    screen_host(&next)?;
    Ok(next)
}

/// Rejects IP-literal and well-known local hosts. Returns the domain name
/// still to be resolved, or `None` when the host is a public IP literal.
fn screen_host(url: &Url) -> Result<Option<&str>, JobFetchError> {
    let host = url
        .host_str()
        .ok_or_else(|| JobFetchError::InvalidUrl("missing host".to_string()))?;

    let literal = host.trim_start_matches('[').trim_end_matches(']');
    if let Ok(ip) = literal.parse::<IpAddr>() {
        if !is_public_ip(ip) {
            return Err(JobFetchError::ForbiddenHost(host.to_string()));
        }
        return Ok(None);
    }

    let name = host.trim_end_matches('.');
    let local = name == "localhost"
        || [".localhost", ".local", ".internal"]
            .iter()
            .any(|suffix| name.ends_with(suffix));
    if local {
        return Err(JobFetchError::ForbiddenHost(host.to_string()));
    }
    Ok(Some(host))
}

fn is_public_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => is_public_ipv4(v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => is_public_ipv4(v4),
            None => is_public_ipv6(v6),
        },
    }
}

fn is_public_ipv4(ip: Ipv4Addr) -> bool {
    let [a, b, ..] = ip.octets();
    // 100.64.0.0/10 is carrier-grade NAT
    let shared = a == 100 && (64..128).contains(&b);
    !(ip.is_loopback()
        || ip.is_private()
        || ip.is_link_local()
        || ip.is_unspecified()
        || ip.is_broadcast()
        || ip.is_documentation()
        || ip.is_multicast()
        || shared
        || a == 0)
}

fn is_public_ipv6(ip: Ipv6Addr) -> bool {
    let first = ip.segments()[0];
    let unique_local = first & 0xfe00 == 0xfc00;
    let link_local = first & 0xffc0 == 0xfe80;
    !(ip.is_loopback() || ip.is_unspecified() || ip.is_multicast() || unique_local || link_local)
}

/// Reads at most `cap` bytes of body; the rest of the page is never buffered.
async fn read_capped(mut response: Response, cap: usize) -> Result<String, JobFetchError> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let room = cap - body.len();
        if chunk.len() > room {
            body.extend_from_slice(&chunk[..room]);
            warn!("Job posting exceeds {cap} bytes, truncating");
            break;
        }
        body.extend_from_slice(&chunk);
    }
    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Returns the best description text found in `html`, if any.
pub fn extract_posting_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    find_text(&document, DESCRIPTION_SELECTORS, MIN_DESCRIPTION_CHARS).or_else(|| {
        warn!("Falling back to generic page regions for job description");
        find_text(&document, FALLBACK_SELECTORS, 1)
    })
}

fn find_text(document: &Html, selectors: &[&str], min_chars: usize) -> Option<String> {
    for selector_str in selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        for element in document.select(&selector) {
            let text = visible_text(element);
            if text.chars().count() >= min_chars {
                return Some(text);
            }
        }
    }
    None
}

/// Text content of `element`, minus script-like subtrees, with whitespace collapsed.
fn visible_text(element: ElementRef<'_>) -> String {
    let mut pieces = Vec::new();
    for node in element.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|e| SKIPPED_ELEMENTS.contains(&e.name()))
        });
        if !hidden {
            pieces.push(&**text);
        }
    }
    pieces
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
