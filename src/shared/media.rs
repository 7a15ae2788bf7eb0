// src/shared/media.rs

/// Turns stored file references into public URLs.
///
/// File bytes live in an external blob layer; the database only keeps a
/// storage path such as `projects/cover.png`.
#[derive(Debug, Clone)]
pub struct MediaUrlResolver {
    media_url: String,
    public_base_url: Option<String>,
}

impl MediaUrlResolver {
    pub fn new(media_url: &str, public_base_url: Option<&str>) -> Self {
        let trimmed = media_url.trim().trim_matches('/');
        let media_url = if trimmed.is_empty() {
            "/".to_string()
        } else if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            format!("{}/", trimmed)
        } else {
            format!("/{}/", trimmed)
        };

        let public_base_url = public_base_url
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .filter(|b| !b.is_empty());

        Self {
            media_url,
            public_base_url,
        }
    }

    /// URL relative to the site root, e.g. `/media/projects/cover.png`.
    pub fn relative_url(&self, stored: &str) -> String {
        if is_absolute(stored) {
            return stored.to_string();
        }
        format!("{}{}", self.media_url, stored.trim_start_matches('/'))
    }

    /// Absolute URL. The configured public base wins over the request base.
    pub fn absolute_url(&self, request_base: &str, stored: &str) -> String {
        let relative = self.relative_url(stored);
        if is_absolute(&relative) {
            return relative;
        }

        let base = self
            .public_base_url
            .as_deref()
            .unwrap_or_else(|| request_base.trim_end_matches('/'));
        format!("{}{}", base, relative)
    }
}

impl Default for MediaUrlResolver {
    fn default() -> Self {
        Self::new("/media/", None)
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
