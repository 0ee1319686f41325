pub mod blob;
pub mod time;
pub mod util;
