//! Static files embedded into the binary.

use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Placeholder shown as the database side of a face comparison.
pub const DATABASE_IMAGE: &str = "database.svg";

/// Serve an embedded file with a guessed content type.
pub async fn serve(Path(path): Path<String>) -> Response {
    match Assets::get(&path) {
        Some(file) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref().to_string())], file.data.into_owned()).into_response()
        }
        None => (StatusCode::NOT_FOUND, format!("missing embedded asset: {path}")).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_image_is_embedded() {
        let file = Assets::get(DATABASE_IMAGE).unwrap();
        assert!(file.data.starts_with(b"<svg"));
    }

    #[test]
    fn test_missing_asset() {
        assert!(Assets::get("nope.txt").is_none());
    }
}
