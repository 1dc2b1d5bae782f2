//! static image asset rendered beside the remote header

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGO_URL: &str =
    "https://sns-img-hw.xhscdn.com/47eb6e4a-0b8e-a0e7-9778-7c199931ef12";

/// output format requested from the image service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Webp,
    Jpg,
    Png,
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Webp => "webp",
            Self::Jpg => "jpg",
            Self::Png => "png",
        };
        f.write_str(name)
    }
}

/// server-side transformation, encoded as vendor query parameters
///
/// `imageView2/2/w/<width>/format/<format>` resizes and re-encodes,
/// `imageMogr2/strip` drops metadata. operations are joined with `|`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageTransform {
    pub width: Option<u32>,
    pub format: Option<ImageFormat>,
    pub strip: bool,
}

impl ImageTransform {
    pub fn query(&self) -> Option<String> {
        let mut ops = Vec::new();

        if self.width.is_some() || self.format.is_some() {
            let mut view = String::from("imageView2/2");
            if let Some(width) = self.width {
                view.push_str(&format!("/w/{width}"));
            }
            if let Some(format) = self.format {
                view.push_str(&format!("/format/{format}"));
            }
            ops.push(view);
        }
        if self.strip {
            ops.push("imageMogr2/strip".to_string());
        }

        (!ops.is_empty()).then(|| ops.join("|"))
    }
}

/// fixed image reference; immutable once configured
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageAsset {
    pub url: String,
    pub transform: ImageTransform,
    pub class: String,
    pub alt: String,
}

impl ImageAsset {
    /// full `src` attribute, transformation included
    pub fn src(&self) -> String {
        match self.transform.query() {
            Some(query) => format!("{}?{}", self.url, query),
            None => self.url.clone(),
        }
    }
}

impl Default for ImageAsset {
    fn default() -> Self {
        Self {
            url: DEFAULT_LOGO_URL.to_string(),
            transform: ImageTransform {
                width: Some(1920),
                format: Some(ImageFormat::Webp),
                strip: true,
            },
            class: "App-logo".to_string(),
            alt: "img".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logo_src() {
        assert_eq!(
            ImageAsset::default().src(),
            "https://sns-img-hw.xhscdn.com/47eb6e4a-0b8e-a0e7-9778-7c199931ef12?imageView2/2/w/1920/format/webp|imageMogr2/strip"
        );
    }

    #[test]
    fn test_no_transform_keeps_plain_url() {
        let asset = ImageAsset {
            url: "https://example.com/logo.png".to_string(),
            transform: ImageTransform::default(),
            ..ImageAsset::default()
        };
        assert_eq!(asset.src(), "https://example.com/logo.png");
    }

    #[test]
    fn test_partial_transform() {
        let transform = ImageTransform {
            width: None,
            format: Some(ImageFormat::Png),
            strip: false,
        };
        assert_eq!(transform.query().as_deref(), Some("imageView2/2/format/png"));
    }

    #[test]
    fn test_asset_from_json_fills_defaults() {
        let asset: ImageAsset =
            serde_json::from_str(r#"{"url": "https://example.com/a.jpg", "transform": {"width": 640}}"#)
                .unwrap();
        assert_eq!(asset.src(), "https://example.com/a.jpg?imageView2/2/w/640");
        assert_eq!(asset.class, "App-logo");
    }
}
