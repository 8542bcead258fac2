use std::path::Path;

pub mod ass;
pub mod srt;

use crate::ai::{self, TextGenerator};
use crate::cli::{CaptionFormat, TargetLanguage};
use crate::transcribe::TranscriptSegment;
use crate::Result;

/// Segments that overlap the `[start, end)` time window of a clip
pub fn segments_overlapping(
    segments: &[TranscriptSegment],
    start: f64,
    end: f64,
) -> Vec<TranscriptSegment> {
    segments
        .iter()
        .filter(|s| s.start < end && s.end > start)
        .cloned()
        .collect()
}

/// Rebase segments into a clip-local timeline
///
/// The clip starts at `window_start` and lasts `window_len` seconds. Segment
/// times are shifted and clamped to the window; segments that end up with a
/// zero or negative span are dropped.
pub fn rebase_into_window(
    segments: &[TranscriptSegment],
    window_start: f64,
    window_len: f64,
) -> Vec<TranscriptSegment> {
    segments
        .iter()
        .filter_map(|seg| {
            let new_start = (seg.start - window_start).max(0.0);
            let new_end = (seg.end - window_start).min(window_len);
            if new_start < new_end {
                Some(TranscriptSegment {
                    start: new_start,
                    end: new_end,
                    text: seg.text.clone(),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Translate each segment's text, keeping the timing untouched
///
/// This is the shared per-segment step both subtitle formats are built on.
/// When the target is `Original` the segments pass through unchanged.
pub async fn translate_segments(
    llm: &dyn TextGenerator,
    segments: &[TranscriptSegment],
    language: TargetLanguage,
) -> Result<Vec<TranscriptSegment>> {
    if language.is_original() {
        return Ok(segments.to_vec());
    }

    let mut translated = Vec::with_capacity(segments.len());
    for seg in segments {
        let text = ai::translate(llm, seg.text.trim(), language).await?;
        translated.push(TranscriptSegment {
            start: seg.start,
            end: seg.end,
            text,
        });
    }
    Ok(translated)
}

/// Render segments in the requested subtitle format
pub fn render(format: CaptionFormat, segments: &[TranscriptSegment], font: Option<&Path>) -> String {
    match format {
        CaptionFormat::Srt => srt::render(segments),
        CaptionFormat::Ass => ass::render(segments, font),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockTextGenerator;

    fn seg(start: f64, end: f64, text: &str) -> TranscriptSegment {
        TranscriptSegment {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_segments_overlapping_window() {
        let segments = vec![
            seg(0.0, 5.0, "before"),
            seg(8.0, 12.0, "straddles start"),
            seg(12.0, 18.0, "inside"),
            seg(24.0, 28.0, "straddles end"),
            seg(30.0, 35.0, "after"),
        ];

        let hits = segments_overlapping(&segments, 10.0, 25.0);
        let texts: Vec<&str> = hits.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["straddles start", "inside", "straddles end"]);
    }

    #[test]
    fn test_rebase_clamps_to_window() {
        let segments = vec![seg(8.0, 12.0, "a"), seg(12.0, 30.0, "b")];

        let rebased = rebase_into_window(&segments, 10.0, 15.0);
        assert_eq!(rebased.len(), 2);
        assert_eq!(rebased[0].start, 0.0);
        assert_eq!(rebased[0].end, 2.0);
        assert_eq!(rebased[1].start, 2.0);
        assert_eq!(rebased[1].end, 15.0);
    }

    #[test]
    fn test_rebase_drops_empty_spans() {
        // Ends exactly at the window start, so the rebased span is empty.
        let segments = vec![seg(0.0, 10.0, "gone")];
        assert!(rebase_into_window(&segments, 10.0, 15.0).is_empty());
    }

    #[tokio::test]
    async fn test_translate_segments_keeps_timing() {
        let mut llm = MockTextGenerator::new();
        llm.expect_generate()
            .times(2)
            .returning(|_| Ok("translated".to_string()));

        let segments = vec![seg(0.0, 2.0, " one "), seg(2.0, 4.0, " two ")];
        let out = translate_segments(&llm, &segments, TargetLanguage::French)
            .await
            .unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].start, 0.0);
        assert_eq!(out[1].end, 4.0);
        assert!(out.iter().all(|s| s.text == "translated"));
    }

    #[tokio::test]
    async fn test_translate_segments_original_passthrough() {
        let llm = MockTextGenerator::new();
        let segments = vec![seg(0.0, 2.0, "unchanged")];
        let out = translate_segments(&llm, &segments, TargetLanguage::Original)
            .await
            .unwrap();
        assert_eq!(out[0].text, "unchanged");
    }
}
