use directogallery::{DialogNotifier, DirectoryLoader, LocalBackend, Location, browser_state};
use futures::StreamExt;
use futures_signals::signal::SignalExt;
use std::path::PathBuf;

fn gallery_root_from_args() -> Option<PathBuf> {
    std::env::args_os()
        .skip(1)
        .filter(|arg| !arg.to_string_lossy().starts_with('-'))
        .map(PathBuf::from)
        .next()
}

fn print_listing(location: &Location) {
    let dir = &location.dir;
    println!("{} ({})", location.stack.join(" / "), dir.path);
    for name in &dir.directories {
        println!("  [dir]  {}", name);
    }
    for file in &dir.files {
        println!("  [img]  {}", file.name.as_deref().unwrap_or(&file.path));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let root = gallery_root_from_args().ok_or("usage: directogallery <directory>")?;
    let state = browser_state().clone();
    let loader = DirectoryLoader::new(LocalBackend::new(), DialogNotifier, state.clone());

    async_std::task::block_on(async {
        loader.open_root(&root).await;

        let mut locations = state.location_signal().to_stream();
        if let Some(Some(location)) = locations.next().await {
            print_listing(&location);
        }
    });

    Ok(())
}
