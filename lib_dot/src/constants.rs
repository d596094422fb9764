pub const TITLE: &str = "DotEditor";
pub const VERSION: &str = "1.0";

/// Vertical space reserved above the grid for the toolbar, in screen pixels.
pub const HEADER_HEIGHT: f32 = 96.0;

pub const MIN_IMAGE_SIZE: u32 = 16;
pub const MAX_IMAGE_SIZE: u32 = 64;
pub const DEFAULT_IMAGE_SIZE: u32 = 32;

pub const INITIAL_WINDOW_WIDTH: f32 = 512.0;
pub const INITIAL_WINDOW_HEIGHT: f32 = 512.0 + HEADER_HEIGHT;
pub const MIN_WINDOW_WIDTH: f32 = 256.0;
pub const MIN_WINDOW_HEIGHT: f32 = 256.0 + HEADER_HEIGHT;

/// Extensions accepted when saving, with the leading dot.
pub const SAVE_EXTENSIONS: [&str; 4] = [".bmp", ".png", ".jpg", ".tif"];
pub const DEFAULT_EXTENSION: &str = ".png";

/// (filter name, extensions without the dot) pairs for the file dialogs.
pub const FILE_TYPES: [(&str, &[&str]); 5] = [
    ("Image file", &["bmp", "png", "jpg", "tif"]),
    ("Bitmap", &["bmp"]),
    ("PNG", &["png"]),
    ("JPEG", &["jpg"]),
    ("Tiff", &["tif"]),
];
