//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use endorsement_form::{Field, FieldSet};

/// Encode a small solid-colour JPEG in memory
pub fn jpeg_bytes() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(8, 10, image::Rgb([236, 226, 198]));
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Jpeg)
        .expect("Should encode JPEG");
    buf.into_inner()
}

/// Encode a small four-component (CMYK) JPEG in memory
pub fn cmyk_jpeg_bytes() -> Vec<u8> {
    let pixels = vec![40u8; 16 * 16 * 4];
    let mut bytes = Vec::new();
    jpeg_encoder::Encoder::new(&mut bytes, 90)
        .encode(&pixels, 16, 16, jpeg_encoder::ColorType::Cmyk)
        .expect("Should encode CMYK JPEG");
    bytes
}

/// Write a background JPEG into `dir` and return its path
pub fn write_background(dir: &Path) -> PathBuf {
    let path = dir.join("background.jpg");
    std::fs::write(&path, jpeg_bytes()).expect("Should write background");
    path
}

pub fn sample_fields() -> FieldSet {
    FieldSet::new()
        .with(Field::BankName, "First National")
        .with(Field::AccountNumber, "000123456")
        .with(Field::Amount, "1,250.00")
        .with(Field::TraceNumber, "T100")
        .with(Field::FirstName, "Jane")
        .with(Field::LastName, "Smith")
        .with(Field::Email, "jane@example.com")
        .with(Field::Notes, "Second installment")
}
