//! Clipboard boundary for the detail panel's copy actions.
//!
//! The host provides the real clipboard. Copy failures are logged and
//! swallowed; losing a copy must never disturb the inspected page.

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Absent clipboard. Every write fails, which `copy_text` downgrades to a
/// logged no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> anyhow::Result<()> {
        anyhow::bail!("no clipboard available")
    }
}

/// Primary writer with a legacy fallback, tried in order.
pub struct ClipboardChain<Primary: Clipboard, Legacy: Clipboard> {
    pub primary: Primary,
    pub legacy: Legacy,
}

impl<Primary: Clipboard, Legacy: Clipboard> Clipboard for ClipboardChain<Primary, Legacy> {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        match self.primary.write_text(text) {
            Ok(()) => Ok(()),
            Err(error) => {
                log::debug!("primary clipboard failed, trying legacy path: {error:#}");
                self.legacy.write_text(text)
            }
        }
    }
}

/// Copy with failure tolerance. Returns whether the text actually landed.
pub fn copy_text(clipboard: &mut impl Clipboard, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => true,
        Err(error) => {
            log::warn!("clipboard copy failed: {error:#}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingClipboard {
        copied: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
            self.copied.push(text.to_owned());
            Ok(())
        }
    }

    #[test]
    fn copy_records_text() {
        let mut clipboard = RecordingClipboard { copied: Vec::new() };
        assert!(copy_text(&mut clipboard, "padding: 8px;"));
        assert_eq!(clipboard.copied, vec!["padding: 8px;".to_owned()]);
    }

    #[test]
    fn missing_clipboard_is_a_silent_no_op() {
        assert!(!copy_text(&mut NoClipboard, "anything"));
    }

    #[test]
    fn chain_falls_through_to_legacy() {
        let mut chain = ClipboardChain {
            primary: NoClipboard,
            legacy: RecordingClipboard { copied: Vec::new() },
        };
        assert!(copy_text(&mut chain, "margin: 0;"));
        assert_eq!(chain.legacy.copied, vec!["margin: 0;".to_owned()]);
    }
}
