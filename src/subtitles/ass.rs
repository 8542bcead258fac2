//! Styled ASS subtitle generation for burning into clips.

use crate::transcribe::TranscriptSegment;
use std::path::Path;

/// Format seconds as an ASS timestamp (`H:MM:SS.CC`, truncated to hundredths)
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let h = (seconds / 3600.0) as u64;
    let m = ((seconds % 3600.0) / 60.0) as u64;
    let s = (seconds % 60.0) as u64;
    let cc = (seconds * 100.0) as u64 % 100;
    format!("{h}:{m:02}:{s:02}.{cc:02}")
}

/// Escape dialogue text for the ASS event section
///
/// Newlines become the ASS line break, and braces are escaped so segment text
/// cannot inject override tags.
pub fn escape_text(text: &str) -> String {
    text.replace('\n', "\\N")
        .replace('{', "\\{")
        .replace('}', "\\}")
}

/// Script header with the default style used for burned subtitles
fn header(font: Option<&Path>) -> String {
    let font_line = font
        .map(|p| format!("Font: {}\n", p.to_string_lossy().replace('\\', "/")))
        .unwrap_or_default();

    format!(
        "[Script Info]\n\
         Title: Generated Subtitles\n\
         ScriptType: v4.00+\n\
         WrapStyle: 0\n\
         ScaledBorderAndShadow: yes\n\
         YCbCr Matrix: None\n\
         PlayResX: 1280\n\
         PlayResY: 720\n\
         {font_line}\
         [V4+ Styles]\n\
         Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n\
         Style: Default,Roboto Regular,22,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,1.5,1,2,10,10,25,1\n\
         [Events]\n\
         Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n"
    )
}

/// Render segments as a complete ASS script
pub fn render(segments: &[TranscriptSegment], font: Option<&Path>) -> String {
    let mut out = header(font);

    for seg in segments {
        let start = format_timestamp(seg.start);
        let end = format_timestamp(seg.end);
        let text = escape_text(seg.text.trim());
        out.push_str(&format!(
            "Dialogue: 0,{start},{end},Default,,0,0,0,,{text}\n"
        ));
    }

    out
}
