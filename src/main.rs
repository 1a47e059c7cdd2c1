use crossterm::{
    event::{Event, KeyCode, KeyEventKind, read},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chatshade::chat::{Attachment, FileImageFetcher};
use chatshade::cli;
use chatshade::config::ChatshadeConfig;
use chatshade::demo::DemoScreen;
use chatshade::localization::StringTable;
use chatshade::ui::preview::TreePreview;
use chatshade::ui::renderer::TuiRenderer;
use chatshade::ui::{Theme, ThemeChangeResult, ThemeLoader, ThemeRegistry, ThemeVariant};

/// Application entry point: load config and themes, build the demo screen,
/// then either print it (`--dump`) or run the interactive preview until the
/// user quits. The terminal is restored on every exit path of the loop.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli_args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error parsing arguments: {}", e);
            std::process::exit(1);
        }
    };

    let config = ChatshadeConfig::load(cli_args.config.as_deref())?;

    // Set RUST_LOG to override the configured level
    env_logger::Builder::from_default_env()
        .filter_level(config.log_filter())
        .init();

    let mut loader = ThemeLoader::new();
    for dir in &config.theme_dirs {
        loader.add_theme_directory(dir.clone());
    }
    loader.discover_themes();
    let registry = Rc::new(ThemeRegistry::with_loader(Theme::default(), loader));

    if cli_args.list_themes {
        println!("Available themes:");
        for name in registry.list_available_themes() {
            if let Some(info) = registry.get_theme_info(&name) {
                println!("  {}", info);
            }
        }
        return Ok(());
    }

    let theme_name = config.resolve_theme_name(cli_args.theme.as_deref());
    if let ThemeChangeResult::Error(e) = registry.switch_theme(&theme_name) {
        eprintln!("Warning: theme '{}' not loaded ({}), using dark", theme_name, e);
    }

    let strings = match &config.strings {
        Some(path) => StringTable::from_file(path)?,
        None => StringTable::english(),
    };
    let fetcher = FileImageFetcher::new(config.image_dir.clone());

    let mut screen = DemoScreen::build(&registry, &strings);
    if let Some(image) = &cli_args.image {
        let url = if image.contains("://") {
            image.clone()
        } else {
            let path = match &config.image_dir {
                Some(dir) => dir.join(image),
                None => PathBuf::from(image),
            };
            format!("file://{}", path.display())
        };
        let attachment = Attachment::image("cli-image", image, &url);
        screen.attachment.set_attachment(attachment, &fetcher, &strings).await;
    }

    if cli_args.dump {
        for line in TreePreview::new(screen.root()).lines() {
            println!("{}", line);
        }
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let result = run(&registry, &mut screen);

    crossterm::execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run(registry: &Rc<ThemeRegistry>, screen: &mut DemoScreen) -> anyhow::Result<()> {
    const TARGET_FPS: u64 = 30;
    const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);

    let mut renderer = TuiRenderer::new()?;
    let mut status = String::from("t: next theme  l/d/b: variant  n: note  o: pin servers  q: quit");
    let mut last_frame_time = Instant::now();
    let mut needs_redraw = true;

    loop {
        if needs_redraw && last_frame_time.elapsed() >= FRAME_DURATION {
            renderer.draw(screen.root(), &status)?;
            last_frame_time = Instant::now();
            needs_redraw = false;
        }

        let timeout = FRAME_DURATION.saturating_sub(last_frame_time.elapsed());
        let event = if crossterm::event::poll(timeout)? {
            Some(read()?)
        } else {
            None
        };

        match event {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('t') => status = cycle_theme(registry, screen),
                    KeyCode::Char('l') => status = switch(screen, ThemeVariant::Light.as_str()),
                    KeyCode::Char('d') => status = switch(screen, ThemeVariant::Dark.as_str()),
                    KeyCode::Char('b') => status = switch(screen, ThemeVariant::Black.as_str()),
                    KeyCode::Char('n') => {
                        let note = screen.add_note();
                        status = format!("attached {}", note.summary());
                    }
                    KeyCode::Char('o') => {
                        let pinned = screen.toggle_servers_override(Theme::black());
                        status = if pinned {
                            "servers pinned to black".to_string()
                        } else {
                            "servers follow the app theme".to_string()
                        };
                    }
                    KeyCode::Char('r') => {
                        registry.reload_themes();
                        status = format!("{} themes found", registry.list_available_themes().len());
                    }
                    _ => continue,
                }
                needs_redraw = true;
            }
            Some(Event::Resize(_, _)) => needs_redraw = true,
            _ => {}
        }
    }
    Ok(())
}

fn switch(screen: &DemoScreen, name: &str) -> String {
    match screen.switch_theme(name) {
        ThemeChangeResult::Switched(name) => format!("switched to {}", name),
        ThemeChangeResult::Error(e) => format!("error: {}", e),
    }
}

fn cycle_theme(registry: &ThemeRegistry, screen: &DemoScreen) -> String {
    let themes = registry.list_available_themes();
    let current = registry.current_theme().name;
    let next = themes
        .iter()
        .position(|name| *name == current)
        .map(|i| (i + 1) % themes.len())
        .unwrap_or(0);
    match themes.get(next) {
        Some(name) => switch(screen, name),
        None => "no themes available".to_string(),
    }
}
