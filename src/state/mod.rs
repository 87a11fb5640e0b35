/// State management module
///
/// This module holds the testable core of the browser, kept free of any
/// widget or window types:
/// - Image list, navigation, and display sizing (display.rs)
/// - Auto-play timer state (autoplay.rs)

pub mod autoplay;
pub mod display;

pub use autoplay::{AutoPlayState, Tick};
pub use display::DisplayState;
