//! Deterministic engagement heuristic for generated posts.
//!
//! Scores are a local, single-pass computation over surface text features:
//! length, emoji count, hashtag count, and call-to-action keywords. No model
//! call is involved, so the same post always scores the same.

/// Posts scoring at or above this are considered viral-ready
pub const VIRAL_THRESHOLD: u8 = 80;

/// Emoji characters that count toward the emoji bonus
const EMOJI_SET: &str = "\u{1F600}\u{1F601}\u{1F602}\u{1F923}\u{1F60D}\u{1F525}\u{2728}\u{1F4A1}\u{1F3AF}\u{1F44D}\u{1F64C}";

/// Call-to-action keywords that each add a fixed bonus when present
const CTA_KEYWORDS: &[&str] = &["subscribe", "follow", "comment", "share", "link in bio", "join"];

/// Compute the 0-100 engagement score for a post
pub fn engagement_score(post: &str) -> u8 {
    let mut score: i32 = 50;

    let len = post.chars().count();
    if len < 40 {
        score += 5;
    } else if len < 200 {
        score += 10;
    } else {
        score -= 5;
    }

    let emojis = post.chars().filter(|ch| EMOJI_SET.contains(*ch)).count() as i32;
    score += (emojis * 4).min(10);

    let tags = post.matches('#').count() as i32;
    score += (tags * 3).min(10);

    let lower = post.to_lowercase();
    for keyword in CTA_KEYWORDS {
        if lower.contains(keyword) {
            score += 4;
        }
    }

    score.clamp(0, 100) as u8
}

/// Quality band a score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    ViralReady,
    Solid,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= VIRAL_THRESHOLD {
            ScoreBand::ViralReady
        } else if score >= 60 {
            ScoreBand::Solid
        } else {
            ScoreBand::NeedsImprovement
        }
    }
}

/// Human-readable label for a score
pub fn score_label(score: u8) -> String {
    match ScoreBand::from_score(score) {
        ScoreBand::ViralReady => format!("Viral-ready ({score}/100)"),
        ScoreBand::Solid => format!("Solid ({score}/100)"),
        ScoreBand::NeedsImprovement => format!("Needs improvement ({score}/100)"),
    }
}

/// Fixed improvement tips for posts under the viral threshold
///
/// The first tips are universal; a tone-specific nudge is appended when the
/// tone preset suggests one.
pub fn improvement_tips(tone: &str) -> Vec<&'static str> {
    let mut tips = vec![
        "Add a clear call to action (follow, share, comment)",
        "Use one or two relevant hashtags",
        "Open with a hook in the first line",
    ];

    let tone_lower = tone.to_lowercase();
    if tone_lower.contains("professional") || tone_lower.contains("formal") {
        tips.push("Close with an insight your audience can act on");
    } else if tone_lower.contains("witty") || tone_lower.contains("humorous") {
        tips.push("Land the joke early, then deliver the point");
    } else {
        tips.push("Add an emoji or two to break up the text");
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_plain_post_scores_55() {
        // Under 40 chars, no emoji, no hashtag, no CTA keyword.
        assert_eq!(engagement_score("A quick note about the video."), 55);
    }

    #[test]
    fn test_medium_post_base_is_60() {
        let post = "x".repeat(100);
        assert_eq!(engagement_score(&post), 60);
    }

    #[test]
    fn test_long_post_penalized() {
        let post = "x".repeat(250);
        assert_eq!(engagement_score(&post), 45);
    }

    #[test]
    fn test_emoji_bonus_capped_at_10() {
        // Three emoji would be 12 points, but the cap is 10.
        let post = format!("{}🔥🔥🔥", "x".repeat(100));
        assert_eq!(engagement_score(&post), 70);
    }

    #[test]
    fn test_hashtag_bonus_capped_at_10() {
        // Four hashtags would be 12 points, but the cap is 10.
        let post = format!("{} #a #b #c #d", "x".repeat(100));
        assert_eq!(engagement_score(&post), 70);
    }

    #[test]
    fn test_cta_keywords_add_4_each() {
        let post = format!("{} subscribe and share", "x".repeat(100));
        assert_eq!(engagement_score(&post), 68);
    }

    #[test]
    fn test_score_clamped_to_100() {
        let post = format!(
            "{}🔥🔥🔥 #a #b #c #d subscribe follow comment share join link in bio",
            "x".repeat(80)
        );
        assert_eq!(engagement_score(&post), 100);
    }

    #[test]
    fn test_score_never_below_zero() {
        assert!(engagement_score(&"x".repeat(500)) <= 100);
        assert_eq!(engagement_score(&"x".repeat(500)), 45);
    }

    #[test]
    fn test_bands() {
        assert_eq!(ScoreBand::from_score(80), ScoreBand::ViralReady);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Solid);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Solid);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::NeedsImprovement);
    }

    #[test]
    fn test_label_contains_score() {
        assert!(score_label(85).contains("85/100"));
        assert!(score_label(85).starts_with("Viral-ready"));
    }

    #[test]
    fn test_tips_follow_tone() {
        assert!(improvement_tips("Professional & formal")
            .iter()
            .any(|t| t.contains("insight")));
        assert!(improvement_tips("Witty, concise, emojis")
            .iter()
            .any(|t| t.contains("joke")));
    }
}
