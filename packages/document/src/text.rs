//! Inline text runs and the byte-offset helpers the editor splits with.
//!
//! Caret offsets are byte offsets into a node's concatenated text. Every
//! helper here clamps offsets into range and snaps them back to a char
//! boundary, so a malformed caret degrades instead of panicking.

use serde::{Deserialize, Serialize};

/// Inline formatting marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strike,
}

/// A run of inline text sharing one set of marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

impl TextRun {
    pub fn new(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }

    /// A run with no marks.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }
}

/// Total byte length of a run list.
pub fn runs_len(runs: &[TextRun]) -> usize {
    runs.iter().map(|run| run.text.len()).sum()
}

/// Clamp a byte offset into `text`, snapping back to a char boundary so the
/// caller can never split a code point.
pub fn clamp_offset(text: &str, offset: usize) -> usize {
    let mut at = offset.min(text.len());
    while at > 0 && !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

/// Split a run list at a byte offset into the concatenated text.
///
/// Marks survive on both sides of the split point. Runs left empty by the
/// split are dropped; the offset is clamped and boundary-snapped.
pub fn split_runs(runs: &[TextRun], at: usize) -> (Vec<TextRun>, Vec<TextRun>) {
    let mut before = Vec::new();
    let mut after = Vec::new();
    let mut remaining = at.min(runs_len(runs));

    for run in runs {
        if run.text.is_empty() {
            continue;
        }
        if remaining >= run.text.len() {
            remaining -= run.text.len();
            before.push(run.clone());
        } else if remaining == 0 {
            after.push(run.clone());
        } else {
            let cut = clamp_offset(&run.text, remaining);
            remaining = 0;
            if cut > 0 {
                before.push(TextRun::new(&run.text[..cut], run.marks.clone()));
            }
            if cut < run.text.len() {
                after.push(TextRun::new(&run.text[cut..], run.marks.clone()));
            }
        }
    }

    (before, after)
}

/// Append literal text to a run list, merging with a trailing unmarked run
/// rather than fragmenting.
pub fn push_text(runs: &mut Vec<TextRun>, text: &str) {
    if text.is_empty() {
        return;
    }
    match runs.last_mut() {
        Some(last) if last.marks.is_empty() => last.text.push_str(text),
        _ => runs.push(TextRun::plain(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_mid_run_preserves_marks() {
        let runs = vec![
            TextRun::plain("he said "),
            TextRun::new("slowly", vec![Mark::Italic]),
        ];

        let (before, after) = split_runs(&runs, 11);

        assert_eq!(before.len(), 2);
        assert_eq!(before[1].text, "slo");
        assert_eq!(before[1].marks, vec![Mark::Italic]);
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].text, "wly");
        assert_eq!(after[0].marks, vec![Mark::Italic]);
    }

    #[test]
    fn test_split_at_run_boundary() {
        let runs = vec![TextRun::plain("one"), TextRun::plain("two")];

        let (before, after) = split_runs(&runs, 3);

        assert_eq!(before.len(), 1);
        assert_eq!(before[0].text, "one");
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].text, "two");
    }

    #[test]
    fn test_split_at_zero_and_past_end() {
        let runs = vec![TextRun::plain("text")];

        let (before, after) = split_runs(&runs, 0);
        assert!(before.is_empty());
        assert_eq!(after[0].text, "text");

        let (before, after) = split_runs(&runs, 99);
        assert_eq!(before[0].text, "text");
        assert!(after.is_empty());
    }

    #[test]
    fn test_split_inside_multibyte_char_snaps_back() {
        // 'é' is two bytes; offset 1 lands inside it.
        let runs = vec![TextRun::plain("éa")];

        let (before, after) = split_runs(&runs, 1);

        assert!(before.is_empty());
        assert_eq!(after[0].text, "éa");
    }

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset("abc", 2), 2);
        assert_eq!(clamp_offset("abc", 10), 3);
        assert_eq!(clamp_offset("é", 1), 0);
    }

    #[test]
    fn test_push_text_merges_unmarked_tail() {
        let mut runs = vec![TextRun::plain("well")];
        push_text(&mut runs, ")");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "well)");
    }

    #[test]
    fn test_push_text_keeps_marked_tail_intact() {
        let mut runs = vec![TextRun::new("loud", vec![Mark::Bold])];
        push_text(&mut runs, ")");
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].marks, vec![Mark::Bold]);
        assert!(runs[1].marks.is_empty());
        assert_eq!(runs[1].text, ")");
    }

    #[test]
    fn test_push_text_on_empty_list() {
        let mut runs = Vec::new();
        push_text(&mut runs, "(");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "(");

        push_text(&mut runs, "");
        assert_eq!(runs.len(), 1);
    }
}
