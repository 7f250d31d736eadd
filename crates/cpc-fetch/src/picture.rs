//! Portrait decoding.

use cpc_types::{Picture, RemoteError};

/// Decodes a portrait (PNG or JPEG) into RGBA pixels.
///
/// The decoded image must be exactly `pixels` x `pixels`; a portrait served
/// at any other size is rejected rather than resized.
///
/// # Errors
///
/// Returns [`RemoteError::Image`] if the bytes are not a supported image and
/// [`RemoteError::Resolution`] if the dimensions do not match.
pub fn decode_picture(data: &[u8], pixels: u32) -> Result<Picture, RemoteError> {
    if data.is_empty() {
        return Err(RemoteError::Image("empty response body".to_string()));
    }

    let rgba = image::load_from_memory(data)
        .map_err(|e| RemoteError::Image(e.to_string()))?
        .into_rgba8();
    let (width, height) = rgba.dimensions();

    let picture = Picture::from_rgba(width, height, rgba.into_raw())?;
    picture.ensure_square(pixels)?;
    Ok(picture)
}
