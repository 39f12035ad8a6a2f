//! Custom protocol handlers for efficient data transfer
//!
//! This module implements the `frame://` custom protocol for direct binary
//! transfer of render frames, bypassing Tauri's IPC JSON serialization.

use image::{codecs::jpeg::JpegEncoder, ImageBuffer, ImageEncoder, Rgba};
use tauri::http::Response as HttpResponse;

use super::shared_state::{SharedFrameBuffer, SharedPerfStats};
use crate::config::{compression::JPEG_QUALITY, RENDER_HEIGHT, RENDER_WIDTH};

type Response = HttpResponse<Vec<u8>>;

/// Handle requests to the custom `frame://` protocol
///
/// Supported endpoints:
/// - `frame` or `frame.jpg`: JPEG-compressed frame (~50-100KB)
/// - `frame.raw`: Raw RGBA frame (~1.8MB)
/// - `stats`: Performance statistics as JSON
pub fn handle_frame_protocol(
    uri_path: &str,
    buffer: &SharedFrameBuffer,
    perf_stats: &SharedPerfStats,
) -> Response {
    // Strip leading slash and any cache-busting query the frontend appends
    let resource = uri_path
        .trim_start_matches('/')
        .split('?')
        .next()
        .unwrap_or("");

    match resource {
        // JPEG compressed frame - much smaller data size!
        "frame" | "frame.jpg" => with_frame(buffer, encode_jpeg_response),

        // Raw RGBA frame (for comparison/debugging)
        "frame.raw" => with_frame(buffer, |rgba| {
            frame_response(rgba.to_vec(), "application/octet-stream")
        }),

        // Performance stats as JSON
        "stats" => handle_stats(perf_stats),

        _ => text_response(404, "Not Found"),
    }
}

/// Run `encode` against the latest frame, or report that none exists yet
fn with_frame(buffer: &SharedFrameBuffer, encode: impl Fn(&[u8]) -> Response) -> Response {
    let guard = match buffer.0.lock() {
        Ok(g) => g,
        Err(_) => return text_response(500, "Frame buffer poisoned"),
    };
    match &*guard {
        Some(rgba_data) => encode(rgba_data),
        None => text_response(503, "Frame not ready"),
    }
}

/// Compress an RGBA frame to JPEG - reduces ~1.8MB to ~50-100KB!
fn encode_jpeg_response(rgba_data: &[u8]) -> Response {
    let Some(img) = ImageBuffer::<Rgba<u8>, _>::from_raw(
        RENDER_WIDTH,
        RENDER_HEIGHT,
        rgba_data.to_vec(),
    ) else {
        return text_response(500, "Frame size mismatch");
    };

    // Convert RGBA to RGB for JPEG (no alpha channel)
    let rgb_img = image::DynamicImage::ImageRgba8(img).to_rgb8();

    let mut jpeg_data = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg_data, JPEG_QUALITY);
    if encoder
        .write_image(
            rgb_img.as_raw(),
            RENDER_WIDTH,
            RENDER_HEIGHT,
            image::ExtendedColorType::Rgb8,
        )
        .is_err()
    {
        return text_response(500, "JPEG encoding failed");
    }

    frame_response(jpeg_data, "image/jpeg")
}

/// Handle performance stats request
fn handle_stats(perf_stats: &SharedPerfStats) -> Response {
    let json = match perf_stats.0.lock() {
        Ok(guard) => serde_json::to_vec(&*guard).unwrap_or_default(),
        Err(_) => Vec::new(),
    };

    HttpResponse::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(json)
        .unwrap()
}

fn frame_response(body: Vec<u8>, content_type: &str) -> Response {
    HttpResponse::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("X-Frame-Width", RENDER_WIDTH.to_string())
        .header("X-Frame-Height", RENDER_HEIGHT.to_string())
        .header("Access-Control-Allow-Origin", "*")
        .header(
            "Access-Control-Expose-Headers",
            "X-Frame-Width, X-Frame-Height",
        )
        .body(body)
        .unwrap()
}

fn text_response(status: u16, message: &str) -> Response {
    HttpResponse::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(message.as_bytes().to_vec())
        .unwrap()
}
