//! Image XObject creation
//!
//! 8-bit JPEG files with one, three or four components are embedded untouched
//! behind a `DCTDecode` filter. Anything else `image` can read is decoded to
//! 8-bit RGB and left for `compress()` to deflate.

use crate::types::Result;
use image::ImageFormat;
use lopdf::{Dictionary, Object, Stream};

/// Build an image XObject stream from encoded image bytes.
pub fn create_image_xobject(bytes: &[u8]) -> Result<Stream> {
    if image::guess_format(bytes)? == ImageFormat::Jpeg {
        if let Some(stream) = jpeg_passthrough(bytes) {
            return Ok(stream);
        }
        log::debug!("JPEG layout not embeddable as-is, re-encoding as RGB");
    }

    let rgb = image::load_from_memory(bytes)?.to_rgb8();
    let dict = image_dictionary(rgb.width(), rgb.height(), "DeviceRGB");
    Ok(Stream::new(dict, rgb.into_raw()))
}

// =============================================================================
// JPEG Passthrough
// =============================================================================

/// Frame header of a JPEG file, as stored (not as a decoder would output it)
#[derive(Debug, Clone, Copy, PartialEq)]
struct JpegFrame {
    width: u32,
    height: u32,
    precision: u8,
    components: u8,
    /// An Adobe APP14 segment precedes the frame
    adobe: bool,
}

fn jpeg_passthrough(bytes: &[u8]) -> Option<Stream> {
    let frame = read_jpeg_frame(bytes)?;
    if frame.precision != 8 {
        return None;
    }
    let color_space = match frame.components {
        1 => "DeviceGray",
        3 => "DeviceRGB",
        4 => "DeviceCMYK",
        _ => return None,
    };

    let mut dict = image_dictionary(frame.width, frame.height, color_space);
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));
    // Adobe CMYK JPEGs store inverted ink values
    if frame.components == 4 && frame.adobe {
        let decode = [1, 0, 1, 0, 1, 0, 1, 0].map(Object::Integer).to_vec();
        dict.set("Decode", Object::Array(decode));
    }
    Some(Stream::new(dict, bytes.to_vec()).with_compression(false))
}

/// Walk the marker segments up to the first start-of-frame.
///
/// Returns `None` for truncated data or when scan data comes before a frame.
fn read_jpeg_frame(bytes: &[u8]) -> Option<JpegFrame> {
    let mut pos = 2;
    let mut adobe = false;

    while pos + 4 <= bytes.len() {
        if bytes[pos] != 0xFF {
            return None;
        }
        let marker = bytes[pos + 1];
        match marker {
            // Fill byte
            0xFF => {
                pos += 1;
                continue;
            }
            // Markers without a length field
            0x01 | 0xD0..=0xD7 => {
                pos += 2;
                continue;
            }
            // Start of scan or end of image before any frame
            0xDA | 0xD9 => return None,
            _ => {}
        }

        let length = u16::from_be_bytes([bytes[pos + 2], bytes[pos + 3]]) as usize;
        let body = bytes.get(pos + 4..pos + 2 + length)?;
        match marker {
            0xEE => adobe |= body.starts_with(b"Adobe"),
            // SOF0..SOF15, except DHT, JPG and DAC
            0xC0..=0xCF if !matches!(marker, 0xC4 | 0xC8 | 0xCC) => {
                let &[precision, h0, h1, w0, w1, components, ..] = body else {
                    return None;
                };
                return Some(JpegFrame {
                    width: u16::from_be_bytes([w0, w1]) as u32,
                    height: u16::from_be_bytes([h0, h1]) as u32,
                    precision,
                    components,
                    adobe,
                });
            }
            _ => {}
        }
        pos += 2 + length;
    }
    None
}

fn image_dictionary(width: u32, height: u32, color_space: &str) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(color_space.as_bytes().to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict
}
