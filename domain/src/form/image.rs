//! Image source value objects

/// An image chosen by the user, held in memory until submit
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Keep image bytes out of debug logs
impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Where the source image comes from.
///
/// Both halves are independent: a file, a URL, or both may be set. The
/// webhook decides which one wins when both are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSource {
    pub file: Option<ImageFile>,
    pub url: Option<String>,
}

impl ImageSource {
    /// At least one of file or URL is set
    pub fn is_present(&self) -> bool {
        self.file.is_some() || self.url.is_some()
    }

    pub fn clear(&mut self) {
        self.file = None;
        self.url = None;
    }
}
