//! Configuration for PDF serialization

/// Configuration options for PDF output
#[derive(Debug, Clone)]
pub struct PdfConfig {
    /// Flate-compress the page content stream
    pub compress: bool,

    /// Value of the Info dictionary's /Producer entry
    pub producer: String,

    /// Optional /Title for the Info dictionary
    pub title: Option<String>,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            compress: true,
            producer: "endorsement-form".to_string(),
            title: Some("GCA Endorsement Form".to_string()),
        }
    }
}

impl PdfConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the content stream is compressed
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Set the producer name
    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    /// Omit the document title
    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PdfConfig::default();
        assert!(config.compress);
        assert_eq!(config.producer, "endorsement-form");
        assert_eq!(config.title, Some("GCA Endorsement Form".to_string()));
    }

    #[test]
    fn test_builder_pattern() {
        let config = PdfConfig::new()
            .with_compress(false)
            .with_producer("test")
            .without_title();

        assert!(!config.compress);
        assert_eq!(config.producer, "test");
        assert_eq!(config.title, None);
    }
}
