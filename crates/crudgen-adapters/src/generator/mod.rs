//! Framework-generator adapters.

pub mod artisan;
pub mod recording;

pub use artisan::ArtisanGenerator;
pub use recording::RecordingGenerator;
