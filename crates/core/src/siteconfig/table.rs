use crate::siteconfig::descriptor::{ClientsSelector, NewsSelector, OfficeSelector, SiteDescriptor, TextSelector};
use crate::siteconfig::loader::ConfigLoader;
use std::collections::HashMap;

/// Mapping from site id to the descriptor of that site's markup.
///
/// # Example
///
/// ```rust
/// use firmscrape_core::SiteTable;
///
/// let table = SiteTable::builtin();
/// assert!(table.lookup("Solarkal").description.is_some());
/// assert!(table.lookup("Unknown").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SiteTable {
    sites: HashMap<String, SiteDescriptor>,
}

impl SiteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The descriptors shipped with the crate
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert("Solarkal", solarkal());
        table
    }

    /// Add or replace the descriptor for a site
    pub fn insert(&mut self, site: impl Into<String>, descriptor: SiteDescriptor) {
        self.sites.insert(site.into(), descriptor);
    }

    /// Get the descriptor for a site, if one is configured
    pub fn get(&self, site: &str) -> Option<&SiteDescriptor> {
        self.sites.get(site)
    }

    /// Get the descriptor for a site, or an empty one for unknown sites
    pub fn lookup(&self, site: &str) -> SiteDescriptor {
        self.get(site).cloned().unwrap_or_default()
    }

    /// Replace descriptors with any found on disk for the given sites
    pub fn apply_overrides(&mut self, loader: &mut ConfigLoader, sites: &[&str]) {
        for site in sites {
            if let Some(descriptor) = loader.load_for_site(site) {
                self.insert(*site, descriptor);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

/// Webflow site: hero subhead, contact page address, logo slider, CMS blog list
fn solarkal() -> SiteDescriptor {
    SiteDescriptor {
        description: Some(TextSelector::new("p", "subhead")),
        hq_offices: Some(OfficeSelector {
            url: Some("https://www.solarkal.com/contact-us".to_string()),
            tag: "p".to_string(),
            class: "contact-p".to_string(),
        }),
        clients: Some(ClientsSelector {
            container_class: "slider".to_string(),
            tag: "img".to_string(),
            attribute: "src".to_string(),
        }),
        news: Some(NewsSelector {
            container_class: "w-dyn-list".to_string(),
            item_class: "collection-item-3 w-dyn-item".to_string(),
            title_tag: "h3".to_string(),
            date_index: 2,
        }),
    }
}
