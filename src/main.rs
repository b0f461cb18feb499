use crossterm::{cursor, execute, style::ResetColor, terminal::LeaveAlternateScreen};
use e_pattern::display::{self, format_render_report};
use e_pattern::{
    seeded_rng, AppSettings, ConfigOrigin, Prompter, RecordingCanvas, Session, SessionEnd, TerminalCanvas,
};
use log::warn;
use std::error::Error;
use std::io;
use std::path::PathBuf;

const BANNER: &str = r#"
  ███████╗         ██████╗   █████╗  ████████╗
  ██╔════╝         ██╔══██╗ ██╔══██╗ ╚══██╔══╝
  █████╗           ██████╔╝ ███████║    ██║
  ██╔══╝           ██╔═══╝  ██╔══██║    ██║
  ███████╗ ██████╗ ██║      ██║  ██║    ██║
  ╚══════╝ ╚═════╝ ╚═╝      ╚═╝  ╚═╝    ╚═╝
"#;

/// Draw the selected config. The canvas is torn down afterwards, which ends the session.
fn draw(session: &Session, settings: &AppSettings, headless: bool) -> Result<(), Box<dyn Error>> {
    let mut rng = seeded_rng(settings.seed);

    let report = if headless {
        let mut canvas = RecordingCanvas::new();
        let report = session.draw(&mut canvas, &mut rng)?;
        display::print_config_summary(&report.config)?;
        display::print_pattern_preview(&report.pattern, &report.config)?;
        println!("📝 {} canvas commands recorded", canvas.commands().len());
        report
    } else {
        install_ctrlc_handler();
        let canvas = TerminalCanvas::stdout(settings.pixels_per_cell);
        session.draw(canvas, &mut rng)?
    };

    if let ConfigOrigin::Fallback(reason) = &report.origin {
        println!(
            "⚠️ {} could not be used ({}); drew the default config instead",
            session.current().display(),
            reason
        );
    }
    println!("✅ {}", format_render_report(&report.render));
    Ok(())
}

fn run_menu(mut session: Session, settings: &AppSettings, headless: bool) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match session.run_menu(&mut prompter, &mut rand::thread_rng())? {
        SessionEnd::Draw => draw(&session, settings, headless),
        SessionEnd::Quit => Ok(()),
    }
}

/// Put the terminal back if the user interrupts a render
fn install_ctrlc_handler() {
    let result = ctrlc::set_handler(|| {
        let _ = execute!(io::stdout(), ResetColor, cursor::Show, LeaveAlternateScreen);
        println!("\n🛑 Interrupted - terminal restored");
        std::process::exit(130);
    });
    if let Err(e) = result {
        warn!("⚠️ Could not install Ctrl+C handler: {}", e);
    }
}

fn show_help() {
    println!("{}", BANNER);
    println!("Usage: e_pattern [command] [--headless]");
    println!();
    println!("Commands:");
    println!("  (no args)     Interactive menu");
    println!("  menu          Interactive menu");
    println!("  draw [file]   Draw a config file (default config if omitted) and exit");
    println!("  help          Show this help message");
    println!();
    println!("Options:");
    println!("  --headless    Record canvas commands and print a text preview instead of drawing");
    println!();
    println!("Environment:");
    println!("  PATTERN_DEFAULT_CONFIG    Default/fallback config file (./config.json)");
    println!("  PATTERN_ALT_CONFIGS_DIR   Alternate config directory (./alt-configs/)");
    println!("  PATTERN_HOLD_SECS         Seconds to keep the finished pattern up (10)");
    println!("  PATTERN_SEED              Fixed seed for reproducible patterns");
    println!("  PATTERN_PIXELS_PER_CELL   Canvas pixels per terminal cell (10)");
    println!("  RUST_LOG                  Log filter (warn)");
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let headless = args.iter().any(|a| a == "--headless");
    args.retain(|a| a != "--headless");

    let settings = AppSettings::from_env();

    match args.first().map(|s| s.as_str()) {
        Some("help") | Some("-h") | Some("--help") => {
            show_help();
            Ok(())
        }
        Some("draw") => {
            let mut session = Session::from_settings(&settings);
            if let Some(file) = args.get(1) {
                session.select(PathBuf::from(file));
            }
            draw(&session, &settings, headless)
        }
        Some("menu") | None => {
            println!("{}", BANNER);
            run_menu(Session::from_settings(&settings), &settings, headless)
        }
        Some(unknown) => {
            println!("❌ Unknown command: {}", unknown);
            println!("Run 'e_pattern help' for usage information");
            Ok(())
        }
    }
}
