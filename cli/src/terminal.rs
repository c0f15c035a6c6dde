pub mod colors;
pub mod format;
pub mod input;
pub mod logging;
pub mod messages;
pub mod print;
