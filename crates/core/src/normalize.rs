//! Client name normalization from logo image URLs.
//!
//! Marketing sites tend to name logo files after the client, with an upload
//! prefix and a `-logo` suffix (`64f0c1_Acme-logo.png`). [`normalize`] turns
//! such a URL back into a readable client name.

use std::sync::LazyLock;

use regex::Regex;

/// Last path segment followed by a recognised image extension at the very end.
static IMAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/([^/]+)\.(png|jpg|jpeg|gif)$").expect("image name pattern is valid"));

/// Derives a human-readable client name from an image URL.
///
/// The URL is percent-decoded, the file name before a `png`, `jpg`, `jpeg`
/// or `gif` extension is split on `_`, and the last piece has `-logo`
/// removed. Returns an empty string when the URL does not end in a
/// recognised extension.
///
/// The result never carries an extension, so normalizing it a second time
/// yields `""`.
///
/// # Example
///
/// ```rust
/// use firmscrape_core::normalize;
///
/// assert_eq!(normalize("https://cdn.example.com/64f0c1_Acme-logo.png"), "Acme");
/// assert_eq!(normalize("https://cdn.example.com/a%20b_Client%20Name.jpg"), "Client Name");
/// assert_eq!(normalize("https://cdn.example.com/noext"), "");
/// ```
pub fn normalize(image_url: &str) -> String {
    let decoded = urlencoding::decode_binary(image_url.as_bytes());
    let decoded = String::from_utf8_lossy(&decoded);

    let Some(captures) = IMAGE_NAME.captures(&decoded) else {
        return String::new();
    };

    let segment = captures.get(1).map_or("", |m| m.as_str());
    let last_piece = segment.rsplit('_').next().unwrap_or(segment);

    let name = last_piece.replace("-logo", "");
    let name = name.trim();

    name.replace("%20", " ").trim().to_string()
}
