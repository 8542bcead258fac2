//! Plain SRT subtitle generation for downloadable captions.

use crate::transcribe::TranscriptSegment;

/// Format seconds as an SRT timestamp (`HH:MM:SS,mmm`)
///
/// Rounds to the nearest millisecond to reduce drift from floating point
/// segment times.
pub fn format_timestamp(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;

    let ms = total_ms % 1000;
    let total_s = total_ms / 1000;
    let s = total_s % 60;
    let m = (total_s / 60) % 60;
    let h = total_s / 3600;

    format!("{h:02}:{m:02}:{s:02},{ms:03}")
}

/// Render segments as a complete SRT file with sequential cue numbering
pub fn render(segments: &[TranscriptSegment]) -> String {
    let mut out = String::new();

    for (i, seg) in segments.iter().enumerate() {
        let start = format_timestamp(seg.start);
        let end = format_timestamp(seg.end);
        out.push_str(&format!("{}\n{start} --> {end}\n{}\n\n", i + 1, seg.text.trim()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f64, end: f64, text: &str) -> TranscriptSegment {
        TranscriptSegment {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_timestamp_boundaries() {
        assert_eq!(format_timestamp(0.0), "00:00:00,000");
        assert_eq!(format_timestamp(59.999), "00:00:59,999");
        assert_eq!(format_timestamp(3661.5), "01:01:01,500");
    }

    #[test]
    fn test_render_numbers_cues_sequentially() {
        let srt = render(&[seg(0.0, 1.5, " first "), seg(1.5, 3.0, "second")]);

        assert_eq!(
            srt,
            "1\n00:00:00,000 --> 00:00:01,500\nfirst\n\n2\n00:00:01,500 --> 00:00:03,000\nsecond\n\n"
        );
    }

    #[test]
    fn test_render_empty_segments() {
        assert_eq!(render(&[]), "");
    }
}
