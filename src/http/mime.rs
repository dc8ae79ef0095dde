/// Extension table consulted in order; first suffix match wins.
const MIME_TABLE: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".css", "text/css"),
    (".json", "application/json"),
    (".js", "application/javascript"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
];

/// Media type used when no table entry matches the path.
pub const FALLBACK_TYPE: &str = "application/octet-stream";

/// Classifies a path into a MIME type by its extension.
///
/// Matching is plain suffix matching against [`MIME_TABLE`], so the table
/// order decides ties and paths without a known extension (including paths
/// with no extension at all) classify as [`FALLBACK_TYPE`].
pub fn content_type_for(path: &str) -> &'static str {
    MIME_TABLE
        .iter()
        .find(|(ext, _)| path.ends_with(ext))
        .map(|(_, mime)| *mime)
        .unwrap_or(FALLBACK_TYPE)
}
