//! Promptcraft CLI - Prompt building and dispatch
//!
//! Fill the prompt form from a template, a TOML file or flags, compile it,
//! and optionally send it to OpenRouter directly or through the proxy.

mod config;
mod prompt_args;
mod store;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::{ColoredString, Colorize};
use dialoguer::Password;
use tracing_subscriber::EnvFilter;

use promptcraft::{
    compile, find_model, list_models, list_templates, parse_temperature, ConversationLog,
    DispatchMode, RequestDispatcher, Session, SettingsPatch, SettingsStore, Theme, TurnRole,
    TurnStatus, DEFAULT_MODEL_ID,
};

use config::Config;
use prompt_args::PromptArgs;
use store::FileKeyValueStore;

#[derive(Parser)]
#[command(name = "promptcraft")]
#[command(about = "Promptcraft CLI - Build structured prompts and send them to OpenRouter", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List prompt templates
    Templates,

    /// List models available for dispatch
    Models,

    /// Compile a prompt and print it
    Compile {
        #[command(flatten)]
        prompt: PromptArgs,
    },

    /// Compile a prompt and send it with the stored settings
    Run {
        #[command(flatten)]
        prompt: PromptArgs,
    },

    /// Dispatch settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Show or change the color theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },

    /// Show current configuration
    Config {
        /// Write the current configuration to disk
        #[arg(long)]
        save: bool,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show stored settings
    Show,
    /// Update one or more settings
    Set {
        /// direct or proxied
        #[arg(short, long)]
        mode: Option<DispatchMode>,
        #[arg(long)]
        model: Option<String>,
        /// 0.0-1.0, unparseable values fall back to the default
        #[arg(short, long)]
        temperature: Option<String>,
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Store the OpenRouter API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Dark,
    Light,
    Toggle,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Templates => cmd_templates(),
        Commands::Models => cmd_models(),
        Commands::Compile { prompt } => cmd_compile(prompt),
        Commands::Run { prompt } => cmd_run(prompt).await,
        Commands::Settings { action } => cmd_settings(action),
        Commands::Theme { action } => cmd_theme(action),
        Commands::Config { save } => cmd_config(save),
    }
}

fn open_settings() -> Result<SettingsStore<FileKeyValueStore>> {
    Ok(SettingsStore::load(FileKeyValueStore::new(
        Config::storage_dir()?,
    )))
}

fn accent(theme: Theme, text: &str) -> ColoredString {
    match theme {
        Theme::Dark => text.cyan(),
        Theme::Light => text.blue(),
    }
}

// ============================================
// Command Implementations
// ============================================

fn cmd_templates() -> Result<()> {
    let theme = open_settings()?.theme();

    println!("{}", "Templates:".bold());
    for template in list_templates() {
        println!(
            "  {} {}",
            accent(theme, template.id),
            template.display_name.bold()
        );
        println!("      {}", template.hint.dimmed());
    }

    Ok(())
}

fn cmd_models() -> Result<()> {
    let settings = open_settings()?;
    let current = &settings.get().model;

    println!("{}", "Models:".bold());
    for model in list_models() {
        let marker = if model.id == current.as_str() { "*" } else { " " };
        let default = if model.id == DEFAULT_MODEL_ID { " (default)" } else { "" };
        println!(
            "  {} {} {}{}",
            marker.green(),
            accent(settings.theme(), model.id),
            model.label,
            default.dimmed()
        );
    }

    Ok(())
}

fn cmd_compile(args: PromptArgs) -> Result<()> {
    let config = args.build()?;
    if !config.can_generate() {
        bail!("Goal is too short. Describe what the prompt should accomplish with --goal.");
    }

    println!("{}", compile(&config));
    Ok(())
}

async fn cmd_run(args: PromptArgs) -> Result<()> {
    let config = Config::load()?;
    let mut session = Session::new(open_settings()?);
    session.set_config(args.build()?);
    session.generate_prompt()?;

    let settings = session.settings().get();
    let dispatcher = RequestDispatcher::new(config.dispatcher_config());
    eprintln!(
        "{} {} via {} ({})",
        "Sending to".dimmed(),
        settings.model,
        settings.mode,
        dispatcher.endpoint(settings.mode).dimmed()
    );

    let status = session.run(&dispatcher).await?.status;
    print_conversation(session.log(), session.settings().theme());

    if status == TurnStatus::Failed {
        bail!("Dispatch failed");
    }
    Ok(())
}

fn print_conversation(log: &ConversationLog, theme: Theme) {
    for turn in log.all() {
        let header = match turn.role {
            TurnRole::User => accent(theme, "── You").bold(),
            TurnRole::Assistant => "── Assistant".green().bold(),
        };
        println!("{}", header);
        match turn.status {
            TurnStatus::Failed => println!("{}\n", turn.content.red()),
            _ => println!("{}\n", turn.content),
        }
    }
}

fn cmd_settings(action: SettingsAction) -> Result<()> {
    let mut settings = open_settings()?;

    match action {
        SettingsAction::Show => {
            let current = settings.get();
            println!("{}", "Settings:".bold());
            println!("  Mode: {}", accent(settings.theme(), &current.mode.to_string()));
            println!("  Model: {}", current.model);
            println!("  Temperature: {}", current.temperature);
            println!(
                "  API Key: {}",
                if current.has_credential() {
                    mask_key(&current.api_key).green()
                } else {
                    "Not set".red()
                }
            );
        }
        SettingsAction::Set {
            mode,
            model,
            temperature,
            api_key,
        } => {
            let patch = SettingsPatch {
                mode,
                model,
                temperature: temperature.as_deref().map(parse_temperature),
                api_key,
            };
            if patch.is_empty() {
                bail!("Nothing to update. Pass --mode, --model, --temperature or --api-key.");
            }
            if let Some(model) = &patch.model {
                if find_model(model).is_none() {
                    println!(
                        "{} {} is not in the model list",
                        "Warning:".yellow(),
                        model
                    );
                }
            }
            settings.set(patch);
            println!("{} Settings saved", "✓".green());
        }
        SettingsAction::Login { key } => {
            let api_key = match key {
                Some(k) => k,
                None => Password::new()
                    .with_prompt("OpenRouter API Key")
                    .interact()
                    .context("Failed to read API key")?,
            };
            settings.set(SettingsPatch {
                api_key: Some(api_key.trim().to_string()),
                ..Default::default()
            });
            println!(
                "{} API key saved to {:?}",
                "✓".green(),
                settings.backend().dir()
            );
            if settings.get().mode == DispatchMode::Proxied {
                println!(
                    "{}",
                    "Tip: proxied mode ignores this key. Switch with `promptcraft settings set --mode direct`."
                        .yellow()
                );
            }
        }
    }

    Ok(())
}

fn cmd_theme(action: Option<ThemeAction>) -> Result<()> {
    let mut settings = open_settings()?;

    let theme = match action {
        None => settings.theme(),
        Some(ThemeAction::Toggle) => settings.toggle_theme(),
        Some(ThemeAction::Dark) => {
            settings.set_theme(Theme::Dark);
            Theme::Dark
        }
        Some(ThemeAction::Light) => {
            settings.set_theme(Theme::Light);
            Theme::Light
        }
    };

    println!("Theme: {}", accent(theme, &theme.to_string()));
    Ok(())
}

fn cmd_config(save: bool) -> Result<()> {
    let config = Config::load()?;
    if save {
        config.save()?;
        println!("{} Config saved to {:?}", "✓".green(), Config::config_path()?);
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Storage: {:?}", Config::storage_dir()?);
    println!("  Upstream URL: {}", config.upstream_url);
    println!(
        "  Proxy URL: {}",
        config.dispatcher_config().proxy_url().cyan()
    );
    println!("  App URL: {}", config.app_url);
    println!("  Max Tokens: {}", config.max_tokens);

    Ok(())
}

/// Show the first and last few characters of a key
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("sk-or-v1-abcdef123456"), "sk-o...3456");
        assert_eq!(mask_key("short"), "*****");
    }

    #[test]
    fn test_cli_parses_run_flags() {
        let cli = Cli::try_parse_from([
            "promptcraft",
            "run",
            "--template",
            "blog-post",
            "--goal",
            "Write about ownership",
            "--tone",
            "playful",
        ])
        .unwrap();

        match cli.command {
            Commands::Run { prompt } => {
                let config = prompt.build().unwrap();
                assert_eq!(config.tone, promptcraft::Tone::Playful);
                assert_eq!(config.user_goal, "Write about ownership");
            }
            _ => panic!("expected run"),
        }
    }
}
