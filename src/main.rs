//! # Voxel Scene Entry Point
//!
//! Calls into the library's `run()` function to open the window and start
//! the frame loop.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- [config.json]
//! ```

fn main() {
    if let Err(e) = voxel_scene::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
