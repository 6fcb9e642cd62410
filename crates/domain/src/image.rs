use std::fmt;

use serde::Serialize;

/// Reference to a renderable image, either a bundled asset identifier or a
/// remote URL. Resolving the reference to actual image data is up to the
/// rendering layer.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ImageRef {
    Asset(String),
    Url(String),
}

impl ImageRef {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            ImageRef::Url(value.to_string())
        } else {
            ImageRef::Asset(value.to_string())
        }
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, ImageRef::Url(_))
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Asset(name) | ImageRef::Url(name) => f.write_str(name),
        }
    }
}
