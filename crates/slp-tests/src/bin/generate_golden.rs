//! Golden fixture generator for the slp conformance suite.
//!
//! Rewrites every `tests/golden/<name>/body.log` from the frame lists in
//! the crate root. Run it after changing a fixture list; snapshot updates
//! are reviewed separately with `cargo insta review`.
//!
//! ```bash
//! cargo run --bin generate_golden -p slp-tests
//! ```

use slp_tests::{GOLDEN, frame_all, golden_path};

fn main() {
    for (name, frames) in GOLDEN {
        let batch = frame_all(frames);
        let path = golden_path(name);

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .unwrap_or_else(|e| panic!("cannot create {}: {e}", dir.display()));
        }
        std::fs::write(&path, batch.body.as_bytes())
            .unwrap_or_else(|e| panic!("cannot write {}: {e}", path.display()));

        println!(
            "{name}: {} frames, {} bytes -> {}",
            batch.count,
            batch.body.len(),
            path.display()
        );
    }
}
