//! JSON codec for the preferences document.
//!
//! Wire format: a single JSON object whose keys are the camelCase field names
//! of [`ConfigDocument`].  Encoding is pretty-printed with a trailing newline
//! so the file stays pleasant to edit by hand.
//!
//! ```json
//! {
//!   "theme": "dark",
//!   "useSystemTitleBar": false,
//!   "enableLogging": true
//! }
//! ```

use crate::domain::document::ConfigDocument;
use crate::error::ConfigError;

/// Encodes a document as pretty-printed JSON.
///
/// Absent fields are omitted from the output.
///
/// # Errors
///
/// Returns [`ConfigError::Encode`] if serialization fails.
pub fn encode_document(doc: &ConfigDocument) -> Result<String, ConfigError> {
    let mut text = serde_json::to_string_pretty(doc).map_err(ConfigError::Encode)?;
    text.push('\n');
    Ok(text)
}

/// Decodes a document from JSON text.
///
/// Missing keys decode as absent fields and unknown keys are ignored.  A file
/// containing only whitespace decodes as an empty document.
///
/// # Errors
///
/// Returns [`ConfigError::Decode`] if the text is not a JSON object of the
/// expected shape (malformed JSON, `"theme": 3`, a bare string, ...).
pub fn decode_document(text: &str) -> Result<ConfigDocument, ConfigError> {
    if text.trim().is_empty() {
        return Ok(ConfigDocument::empty());
    }
    serde_json::from_str(text).map_err(ConfigError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{WindowGeometry, WindowState};

    #[test]
    fn test_full_document_round_trips() {
        // Arrange
        let mut doc = ConfigDocument::defaults();
        doc.theme = Some("dark".to_string());
        doc.apply_geometry(WindowGeometry {
            x: -1920,
            y: 40,
            width: 1024,
            height: 768,
            state: WindowState::Maximised,
        });

        // Act
        let text = encode_document(&doc).expect("encode");
        let restored = decode_document(&text).expect("decode");

        // Assert
        assert_eq!(doc, restored);
    }

    #[test]
    fn test_partial_document_decodes_with_absent_fields() {
        let doc = decode_document(r#"{"theme":"dark"}"#).expect("decode");
        assert_eq!(doc.theme.as_deref(), Some("dark"));
        assert_eq!(doc.use_system_title_bar, None);
        assert_eq!(doc.window_start_state, None);
    }

    #[test]
    fn test_null_value_decodes_as_absent() {
        let doc = decode_document(r#"{"enableTrace":null}"#).expect("decode");
        assert_eq!(doc.enable_trace, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let doc =
            decode_document(r#"{"maxLogFiles":20,"language":"en-US","enableInfo":false}"#)
                .expect("decode");
        assert_eq!(doc.enable_info, Some(false));
    }

    #[test]
    fn test_absent_fields_are_omitted_on_encode() {
        let doc = ConfigDocument {
            use_system_title_bar: Some(true),
            ..ConfigDocument::empty()
        };
        let text = encode_document(&doc).expect("encode");
        assert!(text.contains("\"useSystemTitleBar\": true"));
        assert!(!text.contains("theme"));
    }

    #[test]
    fn test_whitespace_only_text_is_empty_document() {
        assert_eq!(decode_document("  \n").unwrap(), ConfigDocument::empty());
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        assert!(matches!(
            decode_document("{\"theme\": "),
            Err(ConfigError::Decode(_))
        ));
        assert!(matches!(
            decode_document(r#"{"theme": 3}"#),
            Err(ConfigError::Decode(_))
        ));
        assert!(matches!(
            decode_document("\"dark\""),
            Err(ConfigError::Decode(_))
        ));
    }
}
