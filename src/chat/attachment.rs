// chat/attachment.rs - Message attachment model

/// File attached to a chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub identifier: String,
    pub title: String,
    /// Absolute URL or a path relative to the server
    pub image_url: Option<String>,
    pub server_url: Option<String>,
}

impl Attachment {
    pub fn image(identifier: &str, title: &str, image_url: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            title: title.to_string(),
            image_url: Some(image_url.to_string()),
            server_url: None,
        }
    }

    pub fn with_server(mut self, server_url: &str) -> Self {
        self.server_url = Some(server_url.to_string());
        self
    }

    /// Absolute URL of the full-size image, if one can be built
    pub fn full_image_url(&self) -> Option<String> {
        let url = self.image_url.as_deref()?.trim();
        if url.is_empty() {
            return None;
        }
        if url.contains("://") {
            return Some(url.to_string());
        }

        let server = self.server_url.as_deref()?.trim_end_matches('/');
        Some(format!("{}/{}", server, url.trim_start_matches('/')))
    }

    pub fn is_insecure(&self) -> bool {
        self.full_image_url()
            .is_some_and(|url| url.starts_with("http://"))
    }
}
