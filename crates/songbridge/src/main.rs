use std::fs;
use std::io::{self, IsTerminal, Read};
use std::process::Command;

use clap::{Parser, Subcommand};
use console::style;
use dialoguer::{Select, theme::ColorfulTheme};
use songbridge_config::{
    load_config, open_in_editor, resolve_simple_output, set_config_value,
};
use songbridge_core::{ConvertRequest, Platform, SongbridgeError, SongbridgeResult};
use songbridge_convert::{ConvertController, ConvertState, PlaylistConverter, detect_platform};

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Open config file in editor
    Edit,
}

#[derive(Debug, Parser)]
#[command(name = "songbridge")]
#[command(version, about = "Convert playlists between Spotify and YouTube Music", long_about = None)]
struct Cli {
    /// Source platform; detected from the URL when omitted
    #[arg(long)]
    from: Option<String>,
    /// Target platform; prompted or inferred when omitted
    #[arg(long)]
    to: Option<String>,
    /// Read playlist URLs from a file, one per line
    #[arg(long)]
    input: Option<String>,
    /// Copy the converted URL to the clipboard
    #[arg(long)]
    copy: bool,
    /// Open the converted URL in the browser
    #[arg(long)]
    open: bool,
    /// Print converted URLs only
    #[arg(long)]
    simple: bool,
    /// Use the simulated transport instead of the conversion service
    #[arg(long)]
    mock: bool,
    #[arg(value_name = "URL")]
    urls: Vec<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Some(Commands::Config { action }) = cli.command {
        if let Err(err) = handle_config_command(action) {
            eprintln!("{} {err}", style("Error:").red());
            std::process::exit(1);
        }
        return;
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", style("Error:").red());
            std::process::exit(1);
        }
    };

    let mut urls = gather_inputs(&cli).unwrap_or_else(|err| {
        eprintln!("{} {err}", style("Error:").red());
        std::process::exit(1);
    });

    if urls.is_empty() {
        eprintln!("{} no playlist URLs provided", style("Error:").red());
        std::process::exit(1);
    }

    let converter = if cli.mock {
        PlaylistConverter::mock()
    } else {
        match PlaylistConverter::from_config(&config) {
            Ok(converter) => converter,
            Err(err) => {
                eprintln!("{} {err}", style("Error:").red());
                std::process::exit(1);
            }
        }
    };

    let simple = cli.simple || resolve_simple_output(&config).unwrap_or(false);

    let mut controller = ConvertController::new();
    let mut success = 0usize;
    let mut failed = 0usize;

    for url in urls.drain(..) {
        match process_url(&converter, &mut controller, &url, &cli, simple).await {
            Ok(true) => success += 1,
            Ok(false) => failed += 1,
            Err(err) => {
                failed += 1;
                eprintln!("{} {url}: {err}", style("Failed").red());
            }
        }
    }

    print_summary(success + failed, success, failed);
}

/// Runs one submission cycle through the controller. `Ok(true)` is a
/// rendered success, `Ok(false)` a rendered conversion error; `Err` means
/// the input never became a request.
async fn process_url(
    converter: &PlaylistConverter,
    controller: &mut ConvertController,
    url: &str,
    cli: &Cli,
    simple: bool,
) -> SongbridgeResult<bool> {
    let Some(trimmed) = controller.begin(url) else {
        return Err(SongbridgeError::InvalidInput(
            "enter a playlist URL".to_string(),
        ));
    };

    let request = match build_request(cli, &trimmed) {
        Ok(request) => request,
        Err(err) => {
            // The cycle never reached the client; clear the pending state.
            controller.resolve(songbridge_core::ConvertResponse::error(err.to_string()));
            controller.dismiss();
            return Err(err);
        }
    };

    if !simple {
        println!(
            "{} {} playlist to {}...",
            style("Converting").cyan(),
            request.source_platform.display_name(),
            request.target_platform.display_name()
        );
    }

    let response = converter.convert(&request).await;
    controller.resolve(response);

    match controller.state().clone() {
        ConvertState::Success(response) => {
            let converted = response.converted_playlist_url.unwrap_or_default();
            print_success(&request, &converted, simple);
            if cli.copy {
                copy_to_clipboard(&converted);
            }
            if cli.open {
                open_in_browser(&converted);
            }
            Ok(true)
        }
        ConvertState::Error(message) => {
            eprintln!("{} {message}", style("Conversion failed:").red());
            controller.dismiss();
            Ok(false)
        }
        _ => unreachable!("a resolved cycle is terminal"),
    }
}

fn build_request(cli: &Cli, url: &str) -> SongbridgeResult<ConvertRequest> {
    let source = resolve_source(cli.from.as_deref(), url)?;
    let target = resolve_target(cli.to.as_deref(), source)?;
    Ok(ConvertRequest::new(source, target, url))
}

fn resolve_source(explicit: Option<&str>, url: &str) -> SongbridgeResult<Platform> {
    if let Some(value) = explicit {
        return Platform::parse(value)
            .ok_or_else(|| SongbridgeError::InvalidInput(format!("unknown platform: {value}")));
    }
    detect_platform(url).ok_or_else(|| {
        SongbridgeError::InvalidInput(format!("could not detect a platform from: {url}"))
    })
}

fn resolve_target(explicit: Option<&str>, source: Platform) -> SongbridgeResult<Platform> {
    if let Some(value) = explicit {
        return Platform::parse(value)
            .ok_or_else(|| SongbridgeError::InvalidInput(format!("unknown platform: {value}")));
    }
    if io::stdin().is_terminal() {
        prompt_target(source)
    } else {
        Ok(source.counterpart())
    }
}

fn prompt_target(source: Platform) -> SongbridgeResult<Platform> {
    let options = [Platform::Spotify, Platform::Youtube];
    let labels: Vec<&str> = options.iter().map(|platform| platform.display_name()).collect();
    let default_index = options
        .iter()
        .position(|platform| *platform == source.counterpart())
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select target platform")
        .items(&labels)
        .default(default_index)
        .interact()
        .map_err(|err| SongbridgeError::InvalidInput(format!("selection failed: {err}")))?;

    Ok(options[selection])
}

fn gather_inputs(cli: &Cli) -> SongbridgeResult<Vec<String>> {
    let mut urls = cli.urls.clone();

    if let Some(path) = &cli.input {
        let content = fs::read_to_string(path).map_err(|err| {
            SongbridgeError::InvalidInput(format!("failed to read input file: {err}"))
        })?;
        urls.extend(parse_lines(&content));
    }

    if urls.is_empty() && !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| SongbridgeError::InvalidInput(format!("failed to read stdin: {err}")))?;
        urls.extend(parse_lines(&buffer));
    }

    Ok(urls)
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

fn print_success(request: &ConvertRequest, converted: &str, simple: bool) {
    if simple {
        println!("{converted}");
        return;
    }

    println!(
        "{} {} {}",
        style("From:").cyan(),
        request.source_platform.display_name(),
        style(&request.playlist_url).dim()
    );
    println!(
        "{} {} {}",
        style("To:").green(),
        request.target_platform.display_name(),
        converted
    );
    println!();
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string())) {
        Ok(()) => println!("{} Copied to clipboard", style("✓").green()),
        Err(err) => eprintln!("{} clipboard unavailable: {err}", style("Warning:").yellow()),
    }
}

fn open_in_browser(url: &str) {
    let result = if cfg!(target_os = "macos") {
        Command::new("open").arg(url).status()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", url]).status()
    } else {
        Command::new("xdg-open").arg(url).status()
    };

    match result {
        Ok(status) if status.success() => {}
        Ok(status) => eprintln!(
            "{} browser opener exited with status: {status}",
            style("Warning:").yellow()
        ),
        Err(err) => eprintln!("{} failed to open browser: {err}", style("Warning:").yellow()),
    }
}

fn handle_config_command(action: ConfigAction) -> SongbridgeResult<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = load_config()?;
            let value = get_nested_config_value(&config, &key);
            match value {
                Some(v) => println!("{} = {}", key, v),
                None => println!("{} = <null>", key),
            }
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            set_config_value(&key, &value)?;
            println!("{} Set {} = {}", style("✓").green(), key, value);
            Ok(())
        }
        ConfigAction::List => {
            let config = load_config()?;
            println!("Current configuration:");
            println!("\n[api]");
            println!(
                "base_url = {}",
                config.api.base_url.as_deref().unwrap_or("<null>")
            );
            println!("\n[convert]");
            println!(
                "transport = {}",
                config.convert.transport.as_deref().unwrap_or("<null>")
            );
            println!("\n[output]");
            println!("simple = {}", config.output.simple.unwrap_or(false));
            Ok(())
        }
        ConfigAction::Edit => {
            open_in_editor()?;
            Ok(())
        }
    }
}

fn get_nested_config_value(
    config: &songbridge_config::SongbridgeConfigData,
    key_path: &str,
) -> Option<String> {
    let parts: Vec<&str> = key_path.split('.').collect();

    match parts.as_slice() {
        ["api", "base_url"] => config.api.base_url.clone(),
        ["convert", "transport"] => config.convert.transport.clone(),
        ["output", "simple"] => config.output.simple.map(|b| b.to_string()),
        _ => None,
    }
}

fn print_summary(total: usize, success: usize, failed: usize) {
    println!(
        "{} Total: {} | Success: {} | Failed: {}",
        style("Summary:").bold(),
        total,
        success,
        failed
    );
}
