//! Bucket listing over the S3 ListObjectsV2 REST API.

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::DiscoveryConfig;
use crate::error::{DiscoveryError, DiscoveryResult};

/// Read access to a bucket laid out as a folder tree.
#[async_trait]
pub trait BucketListing: Send + Sync {
    /// Immediate sub-folders of `prefix`, each ending in `/`, sorted.
    async fn list_prefixes(&self, prefix: &str) -> DiscoveryResult<Vec<String>>;

    /// All object keys under `prefix`, sorted.
    async fn list_keys(&self, prefix: &str) -> DiscoveryResult<Vec<String>>;
}

/// One page of a ListObjectsV2 response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    pub prefixes: Vec<String>,
    pub keys: Vec<String>,
    pub next_token: Option<String>,
    pub is_truncated: bool,
}

/// Parse a ListObjectsV2 XML document.
///
/// Only `CommonPrefixes/Prefix` and `Contents/Key` are collected; the
/// top-level `Prefix` echoing the request is ignored.
pub fn parse_list_response(xml: &str) -> DiscoveryResult<ListPage> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut page = ListPage::default();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => path.push(e.name().as_ref().to_vec()),
            Ok(Event::End(_)) => {
                path.pop();
            }
            Ok(Event::Text(t)) => {
                let text = t.unescape()?.into_owned();
                let parent = path.len().checked_sub(2).map(|i| path[i].as_slice());
                let current = path.last().map(Vec::as_slice);

                match (parent, current) {
                    (Some(b"CommonPrefixes"), Some(b"Prefix")) => page.prefixes.push(text),
                    (Some(b"Contents"), Some(b"Key")) => page.keys.push(text),
                    (Some(b"ListBucketResult"), Some(b"NextContinuationToken")) => {
                        page.next_token = Some(text)
                    }
                    (Some(b"ListBucketResult"), Some(b"IsTruncated")) => {
                        page.is_truncated = text == "true"
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DiscoveryError::Xml(format!(
                    "error at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(page)
}

/// [`BucketListing`] over plain HTTPS, for public buckets.
#[derive(Debug, Clone)]
pub struct S3Listing {
    client: Client,
    config: DiscoveryConfig,
}

impl S3Listing {
    pub fn new(config: DiscoveryConfig) -> DiscoveryResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.request_timeout)
            .pool_max_idle_per_host(4)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| DiscoveryError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// HTTP client shared with verification requests.
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    #[instrument(skip(self), level = "debug")]
    async fn fetch_page(
        &self,
        prefix: &str,
        delimited: bool,
        token: Option<&str>,
    ) -> DiscoveryResult<ListPage> {
        let url = &self.config.base_url;
        let mut query = vec![("list-type", "2"), ("prefix", prefix)];
        if delimited {
            query.push(("delimiter", "/"));
        }
        if let Some(token) = token {
            query.push(("continuation-token", token));
        }

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|e| DiscoveryError::http(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscoveryError::Status {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DiscoveryError::http(url, e))?;
        parse_list_response(&body)
    }

    /// Follow continuation tokens until the listing is complete.
    async fn fetch_all(&self, prefix: &str, delimited: bool) -> DiscoveryResult<ListPage> {
        let mut all = ListPage::default();
        let mut token: Option<String> = None;

        loop {
            let page = self.fetch_page(prefix, delimited, token.as_deref()).await?;
            all.prefixes.extend(page.prefixes);
            all.keys.extend(page.keys);

            match page.next_token {
                Some(next) if page.is_truncated => token = Some(next),
                _ => break,
            }
        }

        debug!(
            prefix,
            prefixes = all.prefixes.len(),
            keys = all.keys.len(),
            "Listed bucket"
        );
        Ok(all)
    }
}

#[async_trait]
impl BucketListing for S3Listing {
    async fn list_prefixes(&self, prefix: &str) -> DiscoveryResult<Vec<String>> {
        let mut prefixes = self.fetch_all(prefix, true).await?.prefixes;
        prefixes.sort();
        Ok(prefixes)
    }

    async fn list_keys(&self, prefix: &str) -> DiscoveryResult<Vec<String>> {
        let mut keys = self.fetch_all(prefix, false).await?.keys;
        keys.sort();
        Ok(keys)
    }
}
