use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eframe::egui;

use photogallery::app::GalleryApp;
use photogallery::store::Store;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Desktop photo gallery manager with import, search and filtering"
)]
struct Args {
    /// Directory holding the gallery file and imported images
    /// (defaults to the user data directory)
    #[arg(long, value_name = "DIRECTORY")]
    data_dir: Option<PathBuf>,

    /// Start maximized
    #[arg(short, long, default_value_t = false)]
    maximized: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let root = args.data_dir.unwrap_or_else(Store::default_root);
    let store = Store::new(root);
    log::info!("using store at {}", store.root().display());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1120.0, 780.0])
            .with_maximized(args.maximized),
        ..Default::default()
    };

    eframe::run_native(
        "Photo Gallery",
        native_options,
        Box::new(move |_cc| Ok(Box::new(GalleryApp::new(store)) as Box<dyn eframe::App>)),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))?;

    Ok(())
}
