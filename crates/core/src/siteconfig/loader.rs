use crate::siteconfig::descriptor::SiteDescriptor;
use crate::siteconfig::parser::ConfigParser;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Loads site descriptors from `<site>.txt` files
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Custom config directory path
    custom_dir: Option<PathBuf>,
    /// Standard config directory path
    standard_dir: Option<PathBuf>,
    /// Per-site results, including misses
    cache: HashMap<String, Option<SiteDescriptor>>,
}

impl ConfigLoader {
    /// Create a new config loader with no search directories
    pub fn new() -> Self {
        Self { custom_dir: None, standard_dir: None, cache: HashMap::new() }
    }

    /// Load the descriptor for a site id.
    ///
    /// The custom directory is searched before the standard one and the
    /// first file that parses wins. Files that fail to parse are logged and
    /// skipped. Returns `None` when no usable file exists.
    pub fn load_for_site(&mut self, site: &str) -> Option<SiteDescriptor> {
        if let Some(cached) = self.cache.get(site) {
            return cached.clone();
        }

        let mut loaded = None;
        for file_path in self.find_config_files(site) {
            match ConfigParser::parse_file(&file_path) {
                Ok(descriptor) => {
                    tracing::debug!(site, path = %file_path.display(), "loaded site descriptor");
                    loaded = Some(descriptor);
                    break;
                }
                Err(e) => {
                    tracing::warn!(path = %file_path.display(), error = %e, "skipping site descriptor");
                }
            }
        }

        self.cache.insert(site.to_string(), loaded.clone());
        loaded
    }

    /// Find all descriptor files for a site in priority order
    fn find_config_files(&self, site: &str) -> Vec<PathBuf> {
        let mut config_files = Vec::new();
        let config_names = self.generate_config_names(site);

        for dir in [&self.custom_dir, &self.standard_dir].into_iter().flatten() {
            for name in &config_names {
                let file_path = dir.join(name);
                if file_path.is_file() && !config_files.contains(&file_path) {
                    config_files.push(file_path);
                }
            }
        }

        config_files
    }

    /// Generate possible file names for a site id
    fn generate_config_names(&self, site: &str) -> Vec<String> {
        let mut names = vec![format!("{}.txt", site)];

        let lower = site.to_lowercase();
        if lower != site {
            names.push(format!("{}.txt", lower));
        }

        names
    }

    /// Clear the descriptor cache
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

/// Builder for ConfigLoader
#[derive(Debug)]
pub struct ConfigLoaderBuilder {
    custom_dir: Option<PathBuf>,
    standard_dir: Option<PathBuf>,
}

impl ConfigLoaderBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self { custom_dir: None, standard_dir: None }
    }

    /// Set custom config directory
    pub fn custom_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.custom_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set standard config directory
    pub fn standard_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.standard_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the config loader
    pub fn build(self) -> ConfigLoader {
        ConfigLoader { custom_dir: self.custom_dir, standard_dir: self.standard_dir, cache: HashMap::new() }
    }
}

impl Default for ConfigLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        let mut builder = ConfigLoaderBuilder::new();

        if let Some(custom_dir) = Self::default_custom_dir() {
            builder = builder.custom_dir(custom_dir);
        }

        if let Some(standard_dir) = Self::default_standard_dir() {
            builder = builder.standard_dir(standard_dir);
        }

        builder.build()
    }
}

impl ConfigLoader {
    /// Get default custom config directory (~/.config/firmscrape/sites)
    pub fn default_custom_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home_dir| home_dir.join(".config").join("firmscrape").join("sites"))
    }

    /// Get default standard config directory (next to the working directory)
    pub fn default_standard_dir() -> Option<PathBuf> {
        let std_dir = PathBuf::from("site_configs");
        if std_dir.exists() { Some(std_dir) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_names() {
        let loader = ConfigLoader::new();

        let names = loader.generate_config_names("Solarkal");
        assert_eq!(names, vec!["Solarkal.txt".to_string(), "solarkal.txt".to_string()]);

        let names = loader.generate_config_names("acme");
        assert_eq!(names, vec!["acme.txt".to_string()]);
    }

    #[test]
    fn test_config_loader_builder() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().join("custom");
        let standard_path = temp_dir.path().join("standard");

        let loader = ConfigLoaderBuilder::new()
            .custom_dir(&custom_path)
            .standard_dir(&standard_path)
            .build();

        assert_eq!(loader.custom_dir, Some(custom_path));
        assert_eq!(loader.standard_dir, Some(standard_path));
    }

    #[test]
    fn test_load_for_site() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("acme.txt"), "description: h2.tagline\n").unwrap();

        let mut loader = ConfigLoaderBuilder::new().custom_dir(temp_dir.path()).build();
        let descriptor = loader.load_for_site("acme").unwrap();

        assert_eq!(descriptor.description.unwrap().class, "tagline");
    }

    #[test]
    fn test_load_for_site_lowercase_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("solarkal.txt"), "description: p.subhead\n").unwrap();

        let mut loader = ConfigLoaderBuilder::new().custom_dir(temp_dir.path()).build();
        assert!(loader.load_for_site("Solarkal").is_some());
    }

    #[test]
    fn test_load_for_site_missing() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = ConfigLoaderBuilder::new().custom_dir(temp_dir.path()).build();

        assert!(loader.load_for_site("nobody").is_none());
        assert_eq!(loader.cache.len(), 1);
    }

    #[test]
    fn test_custom_dir_takes_priority() {
        let temp_dir = TempDir::new().unwrap();

        let custom_path = temp_dir.path().join("custom");
        fs::create_dir_all(&custom_path).unwrap();
        fs::write(custom_path.join("acme.txt"), "description: h1.custom\n").unwrap();

        let standard_path = temp_dir.path().join("standard");
        fs::create_dir_all(&standard_path).unwrap();
        fs::write(standard_path.join("acme.txt"), "description: h1.standard\n").unwrap();

        let mut loader = ConfigLoaderBuilder::new()
            .custom_dir(&custom_path)
            .standard_dir(&standard_path)
            .build();

        let descriptor = loader.load_for_site("acme").unwrap();
        assert_eq!(descriptor.description.unwrap().class, "custom");
    }

    #[test]
    fn test_invalid_file_falls_through() {
        let temp_dir = TempDir::new().unwrap();

        let custom_path = temp_dir.path().join("custom");
        fs::create_dir_all(&custom_path).unwrap();
        fs::write(custom_path.join("acme.txt"), "nonsense line\n").unwrap();

        let standard_path = temp_dir.path().join("standard");
        fs::create_dir_all(&standard_path).unwrap();
        fs::write(standard_path.join("acme.txt"), "description: h1.standard\n").unwrap();

        let mut loader = ConfigLoaderBuilder::new()
            .custom_dir(&custom_path)
            .standard_dir(&standard_path)
            .build();

        let descriptor = loader.load_for_site("acme").unwrap();
        assert_eq!(descriptor.description.unwrap().class, "standard");
    }

    #[test]
    fn test_config_caching() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("acme.txt");
        fs::write(&config_path, "description: h1.first\n").unwrap();

        let mut loader = ConfigLoaderBuilder::new().custom_dir(temp_dir.path()).build();
        let first = loader.load_for_site("acme").unwrap();

        fs::write(&config_path, "description: h1.second\n").unwrap();
        let second = loader.load_for_site("acme").unwrap();
        assert_eq!(first, second);
        assert_eq!(loader.cache.len(), 1);

        loader.clear_cache();
        let third = loader.load_for_site("acme").unwrap();
        assert_eq!(third.description.unwrap().class, "second");
    }
}
