use imhash_core::{Hasher, HasherConfig, LogLevel};
use log::{error, info};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = HasherConfig {
        log_level: LogLevel::Debug,
        ..Default::default()
    };

    // Initialize logging at the configured level
    env_logger::Builder::new()
        .filter_level(config.log_level.into())
        .init();

    let hasher = Hasher::new(config)?;

    // Hash every image given on the command line
    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        eprintln!("usage: hash_image <IMAGE>...");
        return Ok(());
    }

    for path in &paths {
        match hasher.hash_file(path) {
            Ok(hash) => {
                info!("Hashed {}", path.display());
                println!("{}  {}", hash, path.display());
            }
            Err(e) => error!("Error hashing {}: {}", path.display(), e),
        }
    }

    Ok(())
}
