use anyhow::Result;
use ratatui::style::{Color, Modifier, Style};
use tag_picker::config::Config;
use tag_picker::items::{default_items, load_items};
use tag_picker::logging::init_tracing;
use tag_picker::tui_app::run_tag_picker;
use tag_picker::{TagPickerConfig, TagPickerWidget};

fn print_help() {
    println!("Tag Picker - searchable multi-select for the terminal");
    println!();
    println!("Usage:");
    println!("  tag-picker [OPTIONS] [ITEMS_FILE]");
    println!();
    println!("Items file formats:");
    println!("  .txt                   One item per line");
    println!("  .json                  JSON array of strings");
    println!();
    println!("Options:");
    println!("  --init-config          Print a commented default config file");
    println!("  --help, -h             Show this help");
    println!("  --version, -V          Show version");
    println!();
    println!("Controls:");
    println!("  Type                   Filter the available items");
    println!("  ↑/↓                    Move the dropdown cursor");
    println!("  Enter / Tab / Click    Select the item under the cursor");
    println!("  Backspace (empty box)  Highlight last tag, press again to remove");
    println!("  Click on tag ✕         Remove that tag");
    println!("  F5                     Toggle debug overlay");
    println!("  Esc / Ctrl+Q           Quit (prints selection)");
    println!();
    println!("Config: {}", config_path_display());
}

fn config_path_display() -> String {
    Config::get_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "<unknown>".to_string())
}

/// Map a config color name to a ratatui color; unknown names fall back
/// to the default terminal foreground
fn parse_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

fn widget_config(config: &Config) -> TagPickerConfig {
    TagPickerConfig {
        placeholder: config.display.placeholder.clone(),
        max_dropdown_rows: config.display.max_dropdown_rows,
        tag_style: Style::default()
            .fg(Color::White)
            .bg(parse_color(&config.theme.tag_color)),
        highlighted_tag_style: Style::default()
            .fg(Color::Black)
            .bg(parse_color(&config.theme.highlight_color)),
        cursor_row_style: Style::default()
            .bg(parse_color(&config.theme.cursor_color))
            .add_modifier(Modifier::BOLD),
        border_style: Style::default().fg(parse_color(&config.theme.border_color)),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut items_file: Option<String> = None;
    for arg in &args {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("tag-picker {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--init-config" => {
                println!("{}", Config::create_default_with_comments());
                return Ok(());
            }
            other if other.starts_with('-') => {
                return Err(anyhow::anyhow!("Unknown option: {} (see --help)", other));
            }
            other => items_file = Some(other.to_string()),
        }
    }

    let log_buffer = init_tracing();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(target: "config", "Failed to load config, using defaults: {}", e);
        Config::default()
    });

    // CLI argument wins over the configured items file
    let items = match items_file
        .or_else(|| {
            config
                .behavior
                .items_file
                .as_ref()
                .map(|p| p.display().to_string())
        })
        .as_deref()
    {
        Some(path) => load_items(path)?,
        None => default_items(),
    };

    tracing::info!(target: "app", "Starting picker with {} candidates", items.len());

    let widget = TagPickerWidget::with_config(items, widget_config(&config));
    let selected = run_tag_picker(widget, log_buffer, config.display.show_help_line)?;

    // Selection is transient by design; print it so the invoking shell
    // can capture the result
    for item in selected {
        println!("{}", item);
    }

    Ok(())
}
