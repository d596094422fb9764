pub mod color;
pub mod constants;
pub mod engine;
pub mod error;
pub mod grid;
pub mod io;
pub mod mapping;
pub mod session;

use log::*;
use std::fs::File;
use std::io::Write;

pub use crate::color::{Rgb, Rgba};
pub use crate::engine::{PaintEngine, Tool};
pub use crate::error::DotError;
pub use crate::grid::{CellChange, PixelGrid};
pub use crate::mapping::{cell_size, is_inside, CellRect, Mapper};
pub use crate::session::{CellRedraw, EditorConfig, FileFilter, Host, Session, ViewState};

/// Routes `log` output to `log.txt` in the working directory, or to stderr
/// when that file can't be created. `RUST_LOG` overrides the default levels.
pub fn init_logging() {
    let mut builder = env_logger::Builder::new();

    match File::create("log.txt") {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => eprintln!("Can't create log.txt, logging to stderr: {}", e),
    }

    builder
        .filter(Some("lib_dot"), LevelFilter::Debug)
        .filter(Some("dot_editor"), LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
