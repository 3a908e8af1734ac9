use clap::Parser;
use log::LevelFilter;
use pmaze_cli::{args::Args, generate_board, logging, output, settings::Settings, AppError, Request};

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Up before the settings load, so a freshly created config file is reported.
    let level_for = |base| {
        if args.quiet {
            LevelFilter::Off
        } else {
            logging::raise(base, args.verbose)
        }
    };
    logging::init(level_for(LevelFilter::Warn))?;

    let settings_path = match &args.config {
        Some(path) => path.clone(),
        None => Settings::default_path()?,
    };

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        println!("{}", settings_path.display());
        return Ok(());
    }

    let settings = Settings::load(&settings_path)?;

    if args.debug_config {
        println!("{:#?}", settings);
        return Ok(());
    }

    better_panic::install();
    logging::get_logger().set_min_level(level_for(settings.get_log_level()));

    let request = Request::from_args(&settings, &args);
    let board = generate_board(&request)?;
    let format = args.format.unwrap_or(settings.get_format());
    print!("{}", output::render(&board, format)?);

    Ok(())
}
