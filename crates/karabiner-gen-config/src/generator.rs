//! Assemble and render the Karabiner-Elements configuration document

use std::io::Write;

use crate::error::ConfigError;
use crate::layout::{default_profile, global_settings, vanilla_profile};
use crate::model::Document;

/// Build the full document from the literal layout data.
///
/// Profile order is the order shown in the runtime's profile switcher.
pub fn build_document() -> Document {
    let document = Document {
        global: global_settings(),
        profiles: vec![default_profile(), vanilla_profile()],
    };

    tracing::debug!(
        "Assembled document with {} profile(s), {} selected",
        document.profiles.len(),
        document.profiles.iter().filter(|p| p.selected).count()
    );

    document
}

/// Render the document as 2-space indented JSON with a trailing newline.
///
/// Output depends only on `document`, so identical input renders to
/// identical bytes.
pub fn render_document(document: &Document) -> Result<String, ConfigError> {
    let mut output = serde_json::to_string_pretty(document)?;
    output.push('\n');
    Ok(output)
}

/// Render the document and write it to `writer` in one piece.
///
/// Nothing is written if rendering fails. A failed write (e.g. a closed
/// pipe) is returned to the caller.
pub fn write_document<W: Write>(document: &Document, mut writer: W) -> Result<(), ConfigError> {
    let content = render_document(document)?;

    writer.write_all(content.as_bytes())?;
    writer.flush()?;

    tracing::info!("Wrote configuration document ({} bytes)", content.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Writer that fails like a pipe whose reader has gone away
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_build_document_profile_order() {
        let document = build_document();
        let names: Vec<&str> = document.profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Default", "Vanilla"]);
        assert!(document.profiles[0].selected);
        assert!(!document.profiles[1].selected);
    }

    #[test]
    fn test_render_document_format() {
        let output = render_document(&build_document()).unwrap();
        assert!(output.starts_with("{\n  \"global\": {\n    \"check_for_updates_on_startup\": true,"));
        assert!(output.ends_with("}\n"));
        assert!(!output.ends_with("\n\n"));
        assert!(!output.contains("null"));
    }

    #[test]
    fn test_render_document_is_deterministic() {
        let first = render_document(&build_document()).unwrap();
        let second = render_document(&build_document()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_document_writes_rendered_output() {
        let document = build_document();
        let mut buffer = Vec::new();
        write_document(&document, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            render_document(&document).unwrap()
        );
    }

    #[test]
    fn test_write_document_reports_broken_pipe() {
        let result = write_document(&build_document(), ClosedPipe);
        match result {
            Err(ConfigError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("Expected ConfigError::Io, got: {:?}", other),
        }
    }
}
