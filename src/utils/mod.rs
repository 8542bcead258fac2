use crate::config::Config;

/// Format duration in human-readable form for highlight listings
pub fn format_duration(seconds: f64) -> String {
    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Sanitize filename for safe filesystem usage
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            match c {
                // Keep alphanumeric characters, spaces, hyphens, underscores, and dots
                c if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' || c == '.' => c,
                // Replace everything else with underscore
                _ => '_',
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Generate a unique clip filename from the source title and highlight index
pub fn unique_clip_filename(title: &str, index: usize) -> String {
    let random_suffix = uuid::Uuid::new_v4().to_string()[..8].to_string();
    format!(
        "{}_clip_{}_{}.mp4",
        sanitize_filename(title),
        index + 1,
        random_suffix
    )
}

/// Check if the current environment has the required external tools
pub async fn check_dependencies(config: &Config) -> Vec<String> {
    let mut missing = Vec::new();

    if !check_command_available("ffmpeg", "-version").await {
        missing.push("ffmpeg - required for clip cutting and subtitle burning".to_string());
    }

    if !check_command_available("ffprobe", "-version").await {
        missing.push("ffprobe - required for media file inspection".to_string());
    }

    if !check_command_available(&config.whisper.binary, "--help").await {
        missing.push(format!(
            "{} - required for transcribing media files",
            config.whisper.binary
        ));
    }

    missing
}

/// Check if a command is available in PATH
async fn check_command_available(command: &str, probe_arg: &str) -> bool {
    use tokio::process::Command;

    Command::new(command)
        .arg(probe_arg)
        .output()
        .await
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(30.0), "30s");
        assert_eq!(format_duration(90.0), "1m 30s");
        assert_eq!(format_duration(3661.0), "1h 1m 1s");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Hello World!"), "Hello World_");
        assert_eq!(sanitize_filename("test/file?name"), "test_file_name");
        assert_eq!(sanitize_filename("  spaced  "), "spaced");
    }

    #[test]
    fn test_unique_clip_filename_sanitizes_title() {
        let name = unique_clip_filename("My Talk: Part 2", 0);
        assert!(name.starts_with("My Talk_ Part 2_clip_1_"));
        assert!(name.ends_with(".mp4"));
    }

    #[test]
    fn test_unique_clip_filenames_differ() {
        assert_ne!(unique_clip_filename("talk", 2), unique_clip_filename("talk", 2));
    }
}
