use crate::error::{FirmscrapeError, Result};
use crate::siteconfig::descriptor::{DescriptorBuilder, SiteDescriptor, parse_directive};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Descriptor file parser
#[derive(Debug)]
pub struct ConfigParser;

impl ConfigParser {
    /// Parse a single descriptor file
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SiteDescriptor> {
        let file = std::fs::File::open(&path).map_err(|e| {
            FirmscrapeError::ConfigError(format!("Cannot open file {}: {}", path.as_ref().display(), e))
        })?;

        let reader = BufReader::new(file);
        Self::parse_reader(reader)
    }

    /// Parse a descriptor from a reader
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<SiteDescriptor> {
        let mut builder = DescriptorBuilder::new();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line
                .map_err(|e| FirmscrapeError::ConfigError(format!("Read error at line {}: {}", line_number, e)))?;
            Self::parse_line(&mut builder, &line, line_number)?;
        }

        builder.build()
    }

    /// Parse a descriptor from a string
    pub fn parse_string(content: &str) -> Result<SiteDescriptor> {
        let mut builder = DescriptorBuilder::new();

        for (index, line) in content.lines().enumerate() {
            Self::parse_line(&mut builder, line, index + 1)?;
        }

        builder.build()
    }

    fn parse_line(builder: &mut DescriptorBuilder, line: &str, line_number: usize) -> Result<()> {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        match parse_directive(line) {
            Ok(directive) => {
                builder.add_directive(directive);
                Ok(())
            }
            Err(e) => Err(FirmscrapeError::ConfigError(format!(
                "Parse error at line {}: {}",
                line_number, e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SOLARKAL: &str = r#"
# Webflow marketing site
description: p.subhead
hq_url: https://www.solarkal.com/contact-us
hq_offices: p.contact-p
clients: div.slider img@src

news: div.w-dyn-list div.collection-item-3.w-dyn-item
news_title: h3
news_date_index: 2
"#;

    #[test]
    fn test_parse_string_full_descriptor() {
        let descriptor = ConfigParser::parse_string(SOLARKAL).unwrap();

        let description = descriptor.description.unwrap();
        assert_eq!(description.tag, "p");
        assert_eq!(description.class, "subhead");

        let hq = descriptor.hq_offices.unwrap();
        assert_eq!(hq.url.as_deref(), Some("https://www.solarkal.com/contact-us"));
        assert_eq!(hq.class, "contact-p");

        let clients = descriptor.clients.unwrap();
        assert_eq!(clients.container_class, "slider");
        assert_eq!(clients.attribute, "src");

        let news = descriptor.news.unwrap();
        assert_eq!(news.item_class, "collection-item-3 w-dyn-item");
        assert_eq!(news.title_tag, "h3");
        assert_eq!(news.date_index, 2);
    }

    #[test]
    fn test_parse_string_partial_descriptor() {
        let descriptor = ConfigParser::parse_string("description: h2.tagline\n").unwrap();

        assert!(descriptor.description.is_some());
        assert!(descriptor.hq_offices.is_none());
        assert!(descriptor.clients.is_none());
        assert!(descriptor.news.is_none());
    }

    #[test]
    fn test_parse_string_comments_only() {
        let descriptor = ConfigParser::parse_string("# nothing here\n\n   \n").unwrap();
        assert!(descriptor.is_empty());
    }

    #[test]
    fn test_parse_error_reports_line_number() {
        let content = "description: p.subhead\n\nbogus: value\n";
        let err = ConfigParser::parse_string(content).unwrap_err();

        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_parse_reader() {
        let reader = Cursor::new("clients: div.logos img@data-src\n");
        let descriptor = ConfigParser::parse_reader(reader).unwrap();

        assert_eq!(descriptor.clients.unwrap().attribute, "data-src");
    }

    #[test]
    fn test_parse_file_missing() {
        let result = ConfigParser::parse_file("/nonexistent/site.txt");
        assert!(matches!(result, Err(FirmscrapeError::ConfigError(_))));
    }
}
