pub mod lrclib;

pub use lrclib::{LrclibClient, LyricsFetcher, LyricsRecord};
