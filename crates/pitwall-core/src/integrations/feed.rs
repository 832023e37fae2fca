//! Paddock headlines from an RSS 2.0 feed.
//!
//! Only `<item>` children `title`, `link`, `pubDate` and `source` are read;
//! everything else in the document is ignored.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use tokio::runtime::Handle;

use super::{Headline, HeadlineFeed};

const USER_AGENT: &str = concat!("pitwall/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy)]
enum ItemField {
    Title,
    Link,
    PubDate,
    Source,
}

#[derive(Debug, Default)]
struct ItemDraft {
    title: String,
    link: String,
    pub_date: String,
    source: String,
}

impl ItemDraft {
    fn push(&mut self, field: ItemField, text: &str) {
        let slot = match field {
            ItemField::Title => &mut self.title,
            ItemField::Link => &mut self.link,
            ItemField::PubDate => &mut self.pub_date,
            ItemField::Source => &mut self.source,
        };
        slot.push_str(text);
    }

    fn finish(self) -> Headline {
        let source = self.source.trim();
        Headline {
            published: parse_pub_date(&self.pub_date),
            title: self.title.trim().to_string(),
            link: self.link.trim().to_string(),
            source: if source.is_empty() {
                "Unknown".to_string()
            } else {
                source.to_string()
            },
        }
    }
}

/// RFC 2822 `pubDate` as naive UTC.
pub fn parse_pub_date(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc2822(raw.trim())
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Extracts headlines from an RSS document, in document order.
pub fn parse_rss(xml: &str) -> Result<Vec<Headline>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut draft: Option<ItemDraft> = None;
    let mut field: Option<ItemField> = None;

    loop {
        match reader.read_event().context("parse feed xml")? {
            Event::Start(e) => match e.name().as_ref() {
                b"item" => draft = Some(ItemDraft::default()),
                b"title" => field = Some(ItemField::Title),
                b"link" => field = Some(ItemField::Link),
                b"pubDate" => field = Some(ItemField::PubDate),
                b"source" => field = Some(ItemField::Source),
                _ => field = None,
            },
            Event::Text(t) => {
                if let (Some(item), Some(f)) = (draft.as_mut(), field) {
                    let text = t.unescape().context("decode feed text")?;
                    item.push(f, &text);
                }
            }
            Event::CData(c) => {
                if let (Some(item), Some(f)) = (draft.as_mut(), field) {
                    item.push(f, &String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Event::End(e) => {
                field = None;
                if e.name().as_ref() == b"item" {
                    if let Some(item) = draft.take() {
                        items.push(item.finish());
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(items)
}

/// Fetches and parses the feed at `url`.
pub async fn fetch_headlines(client: &reqwest::Client, url: &str) -> Result<Vec<Headline>> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request {url}"))?
        .error_for_status()
        .context("feed returned an error status")?;
    let body = response.text().await.context("read feed body")?;
    let headlines = parse_rss(&body)?;
    tracing::debug!(count = headlines.len(), "feed fetched");
    Ok(headlines)
}

/// Blocking [`HeadlineFeed`] over [`fetch_headlines`].
#[derive(Debug)]
pub struct RssFeed {
    handle: Handle,
    client: reqwest::Client,
    url: String,
}

impl RssFeed {
    pub fn new(handle: Handle, url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("build feed http client")?;
        Ok(Self {
            handle,
            client,
            url: url.into(),
        })
    }
}

impl HeadlineFeed for RssFeed {
    fn fetch(&mut self) -> Result<Vec<Headline>> {
        self.handle
            .block_on(fetch_headlines(&self.client, &self.url))
            .inspect_err(|e| tracing::warn!("headline feed failed: {e:#}"))
    }
}
