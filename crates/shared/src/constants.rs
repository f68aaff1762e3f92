pub const APP_NAME: &str = "Fortune";

// Limits, counted in characters
pub const MAX_CONTENT_LENGTH: usize = 512;
pub const MAX_AUTHOR_LENGTH: usize = 32;
pub const MAX_USERNAME_LENGTH: usize = 32;
pub const MIN_USERNAME_LENGTH: usize = 4;

// Routes
pub const PICK_PATH: &str = "/pick";
pub const CREATE_PATH: &str = "/create";
pub const STATS_PATH: &str = "/stats";
