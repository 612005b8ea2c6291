#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use {
    chain_scope::{Cli, PERSISTENCE, build_dataset, run_app},
    clap::Parser,
    eframe::NativeOptions,
    std::{panic, path::PathBuf, process::ExitCode},
};

fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("chain_scope"), my_code_level)
        .init();
}

fn main() -> ExitCode {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    init_log();

    let args = Cli::parse();

    // No partial dataset: any unreadable input stops here.
    let dataset = match build_dataset(&args.data_root) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Startup aborted: {:#}", e);
            eprintln!("Startup aborted: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app.state_path)),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Chain Scope"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Chain Scope",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args, dataset)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("GUI terminated with error: {}", e);
            ExitCode::FAILURE
        }
    }
}
