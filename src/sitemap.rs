//! Document Builder: turns an ordered URL collection into a sitemap document.
//!
//! The in-memory document is the ordered URL set; serialization produces the
//! standard sitemap-protocol XML (root `urlset` carrying the namespace, one
//! `url` child with a single `loc` leaf per entry). Building is pure and
//! total over any input, including the empty collection.

use std::io;

use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;

/// The sitemap protocol namespace carried by the root `urlset` element.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Serialization failure. Writing to a `Vec<u8>` cannot fail on I/O, but the
/// writer's contract is fallible and the publish stage must surface it.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("failed to write sitemap XML: {0}")]
    Write(#[from] io::Error),
}

/// A sitemap document: the ordered URL set under a single `urlset` root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapDocument {
    urls: Vec<String>,
}

impl SitemapDocument {
    /// Build a document from URLs in discovery order.
    ///
    /// No deduplication, sorting or well-formedness checks; the builder
    /// trusts its input. Zero URLs yields a legal document with an empty
    /// root.
    pub fn from_urls(urls: Vec<String>) -> Self {
        Self { urls }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Serialize to UTF-8 bytes with an XML declaration.
    ///
    /// Child order equals input order; reserved markup characters in URLs
    /// are escaped by the writer, nothing else is rewritten.
    pub fn to_xml(&self) -> Result<Vec<u8>, XmlError> {
        let mut buf = Vec::with_capacity(
            128 + self.urls.iter().map(|url| url.len() + 32).sum::<usize>(),
        );
        let mut writer = Writer::new(&mut buf);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer
            .create_element("urlset")
            .with_attribute(("xmlns", SITEMAP_NAMESPACE))
            .write_inner_content(|w| {
                for url in &self.urls {
                    w.create_element("url").write_inner_content(|w| {
                        w.create_element("loc")
                            .write_text_content(BytesText::new(url))?;
                        Ok(())
                    })?;
                }
                Ok(())
            })?;

        Ok(buf)
    }
}
