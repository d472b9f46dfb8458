pub mod playback;
pub mod gif_export;
pub mod viewer2d;
