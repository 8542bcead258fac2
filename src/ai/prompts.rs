//! Prompt builders for the language-model collaborator.
//!
//! These are plain string constructors so the exact instructions sent to the
//! model stay testable and in one place.

use crate::cli::{Platform, TargetLanguage};

/// Prompt for summarizing a transcript or article
pub fn summarize(text: &str) -> String {
    format!(
        "Summarize the following text in one or two concise, engaging sentences:\n\n{text}"
    )
}

/// Prompt for generating a platform-specific post in a given brand voice
pub fn platform_post(summary: &str, platform: Platform, tone: &str) -> String {
    format!(
        r#"Act as an expert social media manager.
Based on the following summary, create a compelling and engaging social media post for the platform: {platform}.

**Brand Voice Instructions:** You must strictly adhere to the following brand voice: "{tone}".

**Summary:** "{summary}"

The post should be ready to copy and paste. Return only the post text."#,
        platform = platform.display_name(),
    )
}

/// Prompt for translating text into a target language
pub fn translate(text: &str, language: TargetLanguage) -> String {
    format!(
        "Translate the following text to {language}. Preserve the meaning and tone. Return only the translated text, with no commentary:\n\n{text}",
        language = language.name(),
    )
}

/// Prompt for rewriting a post to raise its engagement
pub fn upgrade_post(post: &str, platform: Platform, tone: &str, language: TargetLanguage) -> String {
    let language_clause = if language.is_original() {
        String::from("Keep the post in its current language.")
    } else {
        format!("Write the improved post in {}.", language.name())
    };

    format!(
        r#"Act as a social media growth strategist.
Improve the following {platform} post so it drives more engagement: tighten the hook, add a clear call to action, and use hashtags and emoji where they fit the platform.

**Brand Voice Instructions:** You must strictly adhere to the following brand voice: "{tone}".
{language_clause}

**Post:** "{post}"

Return only the improved post text."#,
        platform = platform.display_name(),
    )
}
