//! Background image loading

use std::fmt;
use std::path::{Path, PathBuf};

use base64::Engine;
use image::GenericImageView;
use thiserror::Error;
use tracing::debug;

/// Errors that make the background unusable
#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data URI: {0}")]
    InvalidDataUri(String),

    #[error("unsupported media type '{0}', expected image/jpeg")]
    UnsupportedMediaType(String),

    #[error("not a decodable JPEG: {0}")]
    Decode(#[from] image::ImageError),

    #[error("malformed JPEG header: {0}")]
    MalformedHeader(&'static str),

    #[error("unsupported JPEG with {0} colour components")]
    UnsupportedComponents(u8),
}

/// Where the background JPEG comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundSource {
    Path(PathBuf),
    /// A `data:image/jpeg;base64,...` URI
    DataUri(String),
}

impl BackgroundSource {
    /// Interpret a string as a data URI when it starts with `data:`, else a path
    pub fn parse(source: &str) -> Self {
        if source.starts_with("data:") {
            BackgroundSource::DataUri(source.to_string())
        } else {
            BackgroundSource::Path(PathBuf::from(source))
        }
    }

    /// Read the raw bytes and check that they decode as a JPEG
    pub fn load(&self) -> Result<JpegImage, BackgroundError> {
        let data = match self {
            BackgroundSource::Path(path) => read_file(path)?,
            BackgroundSource::DataUri(uri) => decode_data_uri(uri)?,
        };
        JpegImage::from_bytes(data)
    }
}

impl Default for BackgroundSource {
    fn default() -> Self {
        BackgroundSource::Path(PathBuf::from("assets/background.jpg"))
    }
}

impl fmt::Display for BackgroundSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundSource::Path(path) => write!(f, "{}", path.display()),
            BackgroundSource::DataUri(_) => f.write_str("<data URI>"),
        }
    }
}

impl From<PathBuf> for BackgroundSource {
    fn from(path: PathBuf) -> Self {
        BackgroundSource::Path(path)
    }
}

/// Inverted sample mapping for Adobe CMYK streams
pub const ADOBE_CMYK_DECODE: &str = "[1 0 1 0 1 0 1 0]";

/// A JPEG ready to embed with DCTDecode
///
/// `data` is the original file, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JpegImage {
    pub width: u32,
    pub height: u32,
    pub color_space: &'static str,
    /// Optional /Decode array for the image dictionary
    pub decode: Option<&'static str>,
    pub data: Vec<u8>,
}

impl JpegImage {
    /// Validate a JPEG and describe it for embedding
    ///
    /// The colour space follows the component count in the frame header,
    /// since the decoder converts CMYK to RGB on the way out.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, BackgroundError> {
        let decoded = image::load_from_memory_with_format(&data, image::ImageFormat::Jpeg)?;
        let (width, height) = decoded.dimensions();

        let header = scan_header(&data)?;
        let (color_space, decode) = match header.components {
            1 => ("/DeviceGray", None),
            3 => ("/DeviceRGB", None),
            4 if header.adobe => ("/DeviceCMYK", Some(ADOBE_CMYK_DECODE)),
            4 => ("/DeviceCMYK", None),
            n => return Err(BackgroundError::UnsupportedComponents(n)),
        };

        debug!(width, height, color_space, bytes = data.len(), "background decoded");
        Ok(JpegImage {
            width,
            height,
            color_space,
            decode,
            data,
        })
    }
}

/// What the embedder needs from the JPEG marker segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct JpegHeader {
    components: u8,
    adobe: bool,
}

fn is_start_of_frame(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC)
}

/// Walk the marker segments up to the first start-of-frame
fn scan_header(data: &[u8]) -> Result<JpegHeader, BackgroundError> {
    if !data.starts_with(&[0xFF, 0xD8]) {
        return Err(BackgroundError::MalformedHeader("missing SOI marker"));
    }

    let mut adobe = false;
    let mut pos = 2;
    loop {
        if data.get(pos) != Some(&0xFF) {
            return Err(BackgroundError::MalformedHeader("expected a marker"));
        }
        while data.get(pos) == Some(&0xFF) {
            pos += 1;
        }
        let marker = *data
            .get(pos)
            .ok_or(BackgroundError::MalformedHeader("truncated marker"))?;
        pos += 1;

        match marker {
            0x01 | 0xD0..=0xD7 => continue,
            0xD9 | 0xDA => {
                return Err(BackgroundError::MalformedHeader("no frame header before scan"))
            }
            _ => {}
        }

        let length = match data.get(pos..pos + 2) {
            Some(&[hi, lo]) => usize::from(u16::from_be_bytes([hi, lo])),
            _ => return Err(BackgroundError::MalformedHeader("truncated segment length")),
        };
        let segment = data
            .get(pos + 2..pos + length)
            .ok_or(BackgroundError::MalformedHeader("truncated segment"))?;

        if marker == 0xEE && segment.starts_with(b"Adobe") {
            adobe = true;
        }
        if is_start_of_frame(marker) {
            // precision(1) height(2) width(2) components(1)
            let components = *segment
                .get(5)
                .ok_or(BackgroundError::MalformedHeader("short frame header"))?;
            return Ok(JpegHeader { components, adobe });
        }
        pos += length;
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, BackgroundError> {
    std::fs::read(path).map_err(|source| BackgroundError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn decode_data_uri(uri: &str) -> Result<Vec<u8>, BackgroundError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| BackgroundError::InvalidDataUri("missing 'data:' prefix".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| BackgroundError::InvalidDataUri("missing ','".to_string()))?;

    let mut params = header.split(';');
    let mime = params.next().unwrap_or_default();
    if !(mime.eq_ignore_ascii_case("image/jpeg") || mime.eq_ignore_ascii_case("image/jpg")) {
        return Err(BackgroundError::UnsupportedMediaType(mime.to_string()));
    }
    if !params.any(|p| p == "base64") {
        return Err(BackgroundError::InvalidDataUri(
            "only base64 payloads are supported".to_string(),
        ));
    }

    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| BackgroundError::InvalidDataUri(e.to_string()))
}
