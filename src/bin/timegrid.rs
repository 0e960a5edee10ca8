use anyhow::Result;
use std::env;
use std::sync::Arc;
use timegrid::cli::{self, Command};
use timegrid::config::Config;
use timegrid::context::{AppContext, StandardContext};
use timegrid::render::{self, RenderOptions};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let parsed = cli::parse_args(&args)?;
    let ctx: Arc<dyn AppContext> = Arc::new(StandardContext::new(parsed.root));

    if parsed.command == Command::Help {
        cli::print_help("timegrid", ctx.as_ref());
        return Ok(());
    }

    // A broken config file is reported instead of silently replaced.
    let cfg = match Config::load_or_default(ctx.as_ref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration:\n{}", e);
            std::process::exit(1);
        }
    };

    match parsed.command {
        Command::Help => Ok(()),
        Command::Print {
            json,
            no_weekend,
            no_evening,
            courses,
        } => {
            let timetable = match cli::build_timetable(&courses) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("{:#}", e);
                    std::process::exit(2);
                }
            };

            if json {
                println!("{}", render::render_json(&timetable)?);
            } else {
                let mut opts = RenderOptions::from_config(&cfg);
                opts.show_weekend &= !no_weekend;
                opts.show_evening &= !no_evening;
                println!("{}", render::render_text(&timetable, &opts));
            }
            Ok(())
        }
        Command::Interactive => run_interactive(ctx, cfg),
    }
}

#[cfg(feature = "tui")]
fn run_interactive(ctx: Arc<dyn AppContext>, cfg: Config) -> Result<()> {
    if let Err(e) = timegrid::logging::init_file_logger(ctx.as_ref(), cfg.level_filter()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    timegrid::tui::run(ctx, cfg)
}

#[cfg(not(feature = "tui"))]
fn run_interactive(_ctx: Arc<dyn AppContext>, _cfg: Config) -> Result<()> {
    anyhow::bail!("Built without the 'tui' feature; use 'timegrid print' instead")
}
