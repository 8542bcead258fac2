use anyhow::Result;
use clap::Parser;
use console::style;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use viralspark::cli::{Cli, Commands};
use viralspark::config::Config;
use viralspark::scoring;
use viralspark::session::{Session, DEFAULT_SESSION_FILE};
use viralspark::studio::{self, Studio};
use viralspark::utils;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "viralspark=debug"
    } else {
        "viralspark=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let session_path = cli
        .session
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

    match cli.command {
        // Commands that need no configuration or external tools.
        Commands::Score { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            print_score(&text);
        }
        Commands::Platforms => {
            println!("Supported platforms:");
            println!("  • YouTube");
            println!("  • TikTok");
            println!("  • Twitter/X");
            println!("  • LinkedIn");
            println!("  (use --platform all to generate for every platform at once)");
        }
        Commands::Show => {
            let session = Session::load(&session_path)?;
            show_session(&session);
        }
        Commands::Reset => {
            Session::reset(&session_path)?;
            println!("Session cleared. Analyze new content to start over.");
        }
        Commands::Config { show } => {
            let config = Config::load().await?;
            if show {
                config.display();
            } else {
                config.interactive_setup().await?;
            }
        }

        Commands::Analyze {
            media,
            text,
            text_file,
            model,
        } => {
            let pasted = match (text, text_file) {
                (Some(text), _) => Some(text),
                (None, Some(path)) => Some(fs_err::read_to_string(&path)?),
                (None, None) => None,
            };

            // The studio only moves past the input stage when there is
            // something to analyze.
            if media.is_none() && pasted.as_deref().map_or(true, |t| t.trim().is_empty()) {
                println!(
                    "{}",
                    style("Please provide a media file or paste some text first.").yellow()
                );
                return Ok(());
            }

            let config = load_config_with_dependency_check().await?;
            let studio = Studio::new(config, cli.quiet)?;

            let analyzed = match media {
                Some(media_path) => {
                    studio
                        .analyze_media(&media_path, model.as_deref())
                        .await?
                }
                None => studio.analyze_text(pasted.as_deref().unwrap_or_default()).await?,
            };

            let mut session = Session::load(&session_path)?;
            session.complete_analysis(analyzed)?;
            session.save(&session_path)?;

            println!("{}", style("Analysis complete.").green().bold());
            println!();
            println!("{}", style("Key Summary").bold());
            println!("{}", session.summary);
            if session.has_segments() {
                println!();
                println!(
                    "Transcribed {} timed segments. Try `viralspark highlights` or `viralspark post`.",
                    session.segments.len()
                );
            } else {
                println!();
                println!("Text captured. Try `viralspark post` or `viralspark translate`.");
            }
        }

        Commands::Post {
            platform,
            tone,
            language,
            auto_upgrade,
        } => {
            let mut session = Session::load(&session_path)?;
            session.require_create()?;

            let config = load_config_with_dependency_check().await?;
            let tone = tone.unwrap_or_else(|| config.app.default_tone.clone());
            let studio = Studio::new(config, cli.quiet)?;

            let posts = studio
                .generate_posts(&session.summary, platform, &tone, language, auto_upgrade)
                .await?;

            for post in &posts {
                session
                    .generated
                    .insert(post.platform.display_name().to_string(), post.text.clone());

                println!();
                println!("{}", style(format!("{} Post", post.platform)).bold());
                if post.upgraded {
                    println!("{}", style("(auto-upgraded)").dim());
                }
                println!("{}", post.text);
                print_score_line(post.score);
                if post.score < scoring::VIRAL_THRESHOLD {
                    print_tips(&tone);
                }
            }

            session.save(&session_path)?;
        }

        Commands::Translate { language, output } => {
            let session = Session::load(&session_path)?;
            session.require_create()?;

            let config = load_config_with_dependency_check().await?;
            let studio = Studio::new(config, cli.quiet)?;

            let translated = studio
                .translate_transcript(&session.transcript, language)
                .await?;

            match output {
                Some(path) => {
                    fs_err::write(&path, &translated)?;
                    println!("Translated text saved to: {}", path.display());
                }
                None => println!("{translated}"),
            }
        }

        Commands::Captions {
            format,
            language,
            output,
        } => {
            let session = Session::load(&session_path)?;
            session.require_create()?;

            if !session.has_segments() {
                anyhow::bail!(
                    "Session has no timed segments (it was analyzed from pasted text); captions need a transcribed media file"
                );
            }

            let config = load_config_with_dependency_check().await?;
            let studio = Studio::new(config, cli.quiet)?;

            let rendered = studio
                .render_captions(&session.segments, format, language)
                .await?;

            match output {
                Some(path) => {
                    fs_err::write(&path, &rendered)?;
                    println!("Captions saved to: {}", path.display());
                }
                None => println!("{rendered}"),
            }
        }

        Commands::Highlights { length, max } => {
            let session = Session::load(&session_path)?;
            session.require_create()?;

            if !session.has_segments() {
                anyhow::bail!(
                    "Session has no timed segments (it was analyzed from pasted text); highlights need a transcribed media file"
                );
            }

            let candidates = studio::highlights(&session.segments, length, max);
            println!("{}", style("Highlights (auto-labeled clips)").bold());
            for highlight in &candidates {
                let generated = session
                    .clips
                    .get(&highlight.index)
                    .map(|path| format!("  [generated: {}]", path.display()))
                    .unwrap_or_default();
                println!(
                    "  {}. {} - {}: {}{}",
                    highlight.index,
                    utils::format_duration(highlight.start),
                    utils::format_duration(highlight.end),
                    truncate(&highlight.preview, 80),
                    style(generated).dim(),
                );
            }
            println!();
            println!("Cut one with: viralspark clip --index N --length {length}");
        }

        Commands::Clip {
            index,
            length,
            language,
            output,
        } => {
            let mut session = Session::load(&session_path)?;
            session.require_create()?;

            let config = load_config_with_dependency_check().await?;
            let studio = Studio::new(config, cli.quiet)?;

            let outcome = studio
                .generate_clip(&session, index, length, language, output)
                .await?;

            session.clips.insert(index, outcome.path.clone());
            session.save(&session_path)?;

            println!("{}", style(format!("Clip {} generated.", index + 1)).green());
            println!("  File: {}", outcome.path.display());
            println!("  Subtitles: {}", truncate(&outcome.subtitle_text, 120));
        }
    }

    Ok(())
}

/// Load config after warning about missing external tools (non-fatal)
async fn load_config_with_dependency_check() -> Result<Config> {
    let config = Config::load().await?;

    let missing_deps = utils::check_dependencies(&config).await;
    if !missing_deps.is_empty() {
        eprintln!("⚠️  Dependency check warnings:");
        for dep in missing_deps {
            eprintln!("   • {}", dep);
        }
        eprintln!("   (Continuing anyway - tools may be available)");
    }

    Ok(config)
}

fn print_score(text: &str) {
    let score = scoring::engagement_score(text);
    print_score_line(score);
    if score < scoring::VIRAL_THRESHOLD {
        print_tips("");
    }
}

fn print_score_line(score: u8) {
    let label = scoring::score_label(score);
    let styled = match scoring::ScoreBand::from_score(score) {
        scoring::ScoreBand::ViralReady => style(label).green().bold(),
        scoring::ScoreBand::Solid => style(label).yellow(),
        scoring::ScoreBand::NeedsImprovement => style(label).red(),
    };
    println!("Engagement Score: {styled}");
}

fn print_tips(tone: &str) {
    println!("{}", style("This post may need improvements. Try:").dim());
    for tip in scoring::improvement_tips(tone) {
        println!("  - {tip}");
    }
}

fn show_session(session: &Session) {
    println!("{}", style("Session").bold());
    println!("  Stage: {:?}", session.stage);
    if let Some(media) = &session.media_path {
        println!("  Media: {}", media.display());
    }
    println!("  Started: {}", session.created_at.format("%Y-%m-%d %H:%M UTC"));

    if session.transcript.is_empty() {
        println!();
        println!("Nothing analyzed yet. Run `viralspark analyze` first.");
        return;
    }

    println!();
    println!("{}", style("Transcript").bold());
    println!("{}", truncate(&session.transcript, 500));

    if !session.summary.is_empty() {
        println!();
        println!("{}", style("Key Summary").bold());
        println!("{}", session.summary);
    }

    for (platform, post) in &session.generated {
        println!();
        println!("{}", style(format!("{platform} Post")).bold());
        println!("{post}");
        print_score_line(scoring::engagement_score(post));
    }

    if !session.clips.is_empty() {
        println!();
        println!("{}", style("Clips").bold());
        for (index, path) in &session.clips {
            println!("  {}. {}", index, path.display());
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}…")
}
