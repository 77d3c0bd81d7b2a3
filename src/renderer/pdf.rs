//! PDF generation from a page layout

use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use tracing::{debug, warn};

use crate::layout::{DrawOp, FontFace, PageLayout, Rect, TextRun};

use super::background::JpegImage;
use super::encoding::{encode_win_ansi, pdf_literal};
use super::PdfConfig;

const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const PAGE_ID: usize = 3;
const CONTENT_ID: usize = 4;
const FONT_BOLD_ID: usize = 5;
const FONT_REGULAR_ID: usize = 6;
const IMAGE_ID: usize = 7;
const INFO_ID: usize = 8;
const OBJECT_COUNT: usize = 8;

const IMAGE_RESOURCE: &str = "Im1";

/// Build a page content stream op by op
#[derive(Debug, Default)]
pub struct ContentStream {
    ops: String,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint the named image XObject scaled to `rect`
    pub fn image(&mut self, name: &str, rect: &Rect) {
        self.ops.push_str(&format!(
            "q\n{} 0 0 {} {} {} cm\n/{} Do\nQ\n",
            fmt_num(rect.width),
            fmt_num(rect.height),
            fmt_num(rect.x),
            fmt_num(rect.y),
            name
        ));
    }

    /// Stroke a rectangle outline in black
    pub fn stroke_rect(&mut self, rect: &Rect, line_width: f64) {
        self.ops.push_str(&format!(
            "0 0 0 RG\n{} w\n{} {} {} {} re\nS\n",
            fmt_num(line_width),
            fmt_num(rect.x),
            fmt_num(rect.y),
            fmt_num(rect.width),
            fmt_num(rect.height)
        ));
    }

    /// Show one line of black text
    pub fn text(&mut self, run: &TextRun) {
        let encoded = encode_win_ansi(&run.text);
        if encoded.replaced > 0 {
            warn!(
                replaced = encoded.replaced,
                "characters outside WinAnsi were replaced with '?'"
            );
        }
        self.ops.push_str(&format!(
            "BT\n/{} {} Tf\n0 0 0 rg\n{} {} Td\n{} Tj\nET\n",
            run.font.resource(),
            fmt_num(run.size),
            fmt_num(run.x),
            fmt_num(run.y),
            pdf_literal(&encoded.bytes)
        ));
    }

    pub fn as_str(&self) -> &str {
        &self.ops
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.ops.into_bytes()
    }
}

/// Serialize objects into a PDF file, tracking xref offsets
struct PdfWriter {
    out: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> Self {
        let mut out = Vec::new();
        out.extend_from_slice(b"%PDF-1.7\n");
        out.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");
        Self {
            out,
            offsets: vec![0; OBJECT_COUNT],
        }
    }

    fn begin(&mut self, id: usize) {
        self.offsets[id - 1] = self.out.len();
        self.out
            .extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
    }

    fn object(&mut self, id: usize, body: &str) {
        self.begin(id);
        self.out.extend_from_slice(body.as_bytes());
        self.out.extend_from_slice(b"\nendobj\n");
    }

    /// Write a stream object; `dict` holds entries other than /Length
    fn stream(&mut self, id: usize, dict: &str, data: &[u8]) {
        self.begin(id);
        let header = if dict.is_empty() {
            format!("<< /Length {} >>\nstream\n", data.len())
        } else {
            format!("<< {} /Length {} >>\nstream\n", dict, data.len())
        };
        self.out.extend_from_slice(header.as_bytes());
        self.out.extend_from_slice(data);
        self.out.extend_from_slice(b"\nendstream\nendobj\n");
    }

    fn finish(mut self) -> Vec<u8> {
        let xref_start = self.out.len();
        self.out
            .extend_from_slice(format!("xref\n0 {}\n", OBJECT_COUNT + 1).as_bytes());
        self.out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &self.offsets {
            self.out
                .extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        let trailer = format!(
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            OBJECT_COUNT + 1,
            CATALOG_ID,
            INFO_ID,
            xref_start
        );
        self.out.extend_from_slice(trailer.as_bytes());
        self.out
    }
}

/// Render a page layout to a complete single-page PDF
///
/// The returned bytes are only produced once every object has been written;
/// any failure yields an error and no output.
pub fn render_pdf(
    page: &PageLayout,
    background: &JpegImage,
    config: &PdfConfig,
) -> io::Result<Vec<u8>> {
    let mut content = ContentStream::new();
    for op in &page.ops {
        match op {
            DrawOp::Background(rect) => content.image(IMAGE_RESOURCE, rect),
            DrawOp::StrokeRect { rect, line_width } => content.stroke_rect(rect, *line_width),
            DrawOp::Text(run) => content.text(run),
        }
    }

    let raw = content.into_bytes();
    let (content_dict, content_data) = if config.compress {
        ("/Filter /FlateDecode", deflate(&raw)?)
    } else {
        ("", raw)
    };

    let mut writer = PdfWriter::new();
    writer.object(
        CATALOG_ID,
        &format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_ID),
    );
    writer.object(
        PAGES_ID,
        &format!("<< /Type /Pages /Kids [{} 0 R] /Count 1 >>", PAGE_ID),
    );
    writer.object(PAGE_ID, &page_object(page));
    writer.stream(CONTENT_ID, content_dict, &content_data);
    writer.object(FONT_BOLD_ID, &font_object(FontFace::Bold));
    writer.object(FONT_REGULAR_ID, &font_object(FontFace::Regular));
    writer.stream(IMAGE_ID, &image_dict(background), &background.data);
    writer.object(INFO_ID, &info_object(config));

    let bytes = writer.finish();
    debug!(bytes = bytes.len(), compressed = config.compress, "pdf serialized");
    Ok(bytes)
}

fn page_object(page: &PageLayout) -> String {
    format!(
        "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] /Resources << /Font << /{} {} 0 R /{} {} 0 R >> /XObject << /{} {} 0 R >> >> /Contents {} 0 R >>",
        PAGES_ID,
        fmt_num(page.width),
        fmt_num(page.height),
        FontFace::Bold.resource(),
        FONT_BOLD_ID,
        FontFace::Regular.resource(),
        FONT_REGULAR_ID,
        IMAGE_RESOURCE,
        IMAGE_ID,
        CONTENT_ID
    )
}

fn font_object(face: FontFace) -> String {
    format!(
        "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
        face.base_font()
    )
}

fn image_dict(image: &JpegImage) -> String {
    let mut dict = format!(
        "/Type /XObject /Subtype /Image /Width {} /Height {} /ColorSpace {} /BitsPerComponent 8",
        image.width, image.height, image.color_space
    );
    if let Some(decode) = image.decode {
        dict.push_str(&format!(" /Decode {}", decode));
    }
    dict.push_str(" /Filter /DCTDecode");
    dict
}

fn info_object(config: &PdfConfig) -> String {
    let mut entries = vec![format!(
        "/Producer {}",
        pdf_literal(&encode_win_ansi(&config.producer).bytes)
    )];
    if let Some(title) = &config.title {
        entries.push(format!(
            "/Title {}",
            pdf_literal(&encode_win_ansi(title).bytes)
        ));
    }
    format!("<< {} >>", entries.join(" "))
}

fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Format a coordinate without trailing zeros
fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.3}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn background() -> JpegImage {
        JpegImage {
            width: 2,
            height: 2,
            color_space: "/DeviceRGB",
            decode: None,
            data: vec![0xff, 0xd8, 0xff, 0xd9],
        }
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(580.0), "580");
        assert_eq!(fmt_num(-3.0), "-3");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(12.3456), "12.346");
    }

    #[test]
    fn test_content_stream_ops() {
        let mut content = ContentStream::new();
        content.image("Im1", &Rect::new(0.0, 0.0, 600.0, 800.0));
        content.stroke_rect(&Rect::new(50.0, 580.0, 250.0, 25.0), 1.0);
        content.text(&TextRun {
            text: "AMOUNT".to_string(),
            x: 60.0,
            y: 537.0,
            size: 12.0,
            font: FontFace::Bold,
        });

        assert_eq!(
            content.as_str(),
            "q\n600 0 0 800 0 0 cm\n/Im1 Do\nQ\n\
             0 0 0 RG\n1 w\n50 580 250 25 re\nS\n\
             BT\n/F1 12 Tf\n0 0 0 rg\n60 537 Td\n(AMOUNT) Tj\nET\n"
        );
    }

    #[test]
    fn test_regular_face_uses_second_font() {
        let mut content = ContentStream::new();
        content.text(&TextRun {
            text: "n".to_string(),
            x: 60.0,
            y: 190.0,
            size: 12.0,
            font: FontFace::Regular,
        });
        assert!(content.as_str().contains("/F2 12 Tf"));
    }

    #[test]
    fn test_document_structure() {
        let mut page = PageLayout::new(600.0, 800.0);
        page.push(DrawOp::Background(Rect::new(0.0, 0.0, 600.0, 800.0)));
        let bytes = render_pdf(&page, &background(), &PdfConfig::new().with_compress(false)).unwrap();
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.starts_with("%PDF-1.7\n"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("/MediaBox [0 0 600 800]"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/BaseFont /Helvetica "));
        assert!(text.contains("/Filter /DCTDecode"));
        assert!(text.contains("/Producer (endorsement-form)"));
        assert!(!text.contains("/FlateDecode"));
    }

    #[test]
    fn test_image_dict_carries_cmyk_decode() {
        let cmyk = JpegImage {
            color_space: "/DeviceCMYK",
            decode: Some("[1 0 1 0 1 0 1 0]"),
            ..background()
        };
        assert_eq!(
            image_dict(&cmyk),
            "/Type /XObject /Subtype /Image /Width 2 /Height 2 /ColorSpace /DeviceCMYK \
             /BitsPerComponent 8 /Decode [1 0 1 0 1 0 1 0] /Filter /DCTDecode"
        );
        assert!(!image_dict(&background()).contains("/Decode"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let page = PageLayout::new(600.0, 800.0);
        let bytes = render_pdf(&page, &background(), &PdfConfig::default()).unwrap();

        let xref_at = bytes
            .windows(b"\nxref\n".len())
            .rposition(|w| w == b"\nxref\n")
            .unwrap()
            + 1;
        let tail = std::str::from_utf8(&bytes[xref_at..]).unwrap();
        let entries: Vec<&str> = tail.lines().skip(3).take(OBJECT_COUNT).collect();
        assert_eq!(entries.len(), OBJECT_COUNT);
        for (i, entry) in entries.iter().enumerate() {
            let offset: usize = entry[..10].parse().unwrap();
            let expected = format!("{} 0 obj", i + 1);
            assert_eq!(&bytes[offset..offset + expected.len()], expected.as_bytes());
        }

        let startxref: usize = tail.lines().rev().nth(1).unwrap().parse().unwrap();
        assert_eq!(startxref, xref_at);
    }

    #[test]
    fn test_compressed_content_inflates_back() {
        use std::io::Read;

        let mut page = PageLayout::new(600.0, 800.0);
        page.push_text("Smith", 310.0, 462.0, 12.0, FontFace::Bold);
        let bytes = render_pdf(&page, &background(), &PdfConfig::default()).unwrap();

        let marker = b"/Filter /FlateDecode /Length ";
        let at = bytes
            .windows(marker.len())
            .position(|w| w == marker)
            .unwrap();
        let rest = &bytes[at + marker.len()..];
        let len_end = rest.iter().position(|b| *b == b' ').unwrap();
        let len: usize = std::str::from_utf8(&rest[..len_end]).unwrap().parse().unwrap();
        let data_start = rest
            .windows(b"stream\n".len())
            .position(|w| w == b"stream\n")
            .unwrap()
            + b"stream\n".len();

        let mut inflated = String::new();
        flate2::read::ZlibDecoder::new(&rest[data_start..data_start + len])
            .read_to_string(&mut inflated)
            .unwrap();
        assert!(inflated.contains("(Smith) Tj"));
    }
}
