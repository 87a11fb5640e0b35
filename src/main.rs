use std::path::PathBuf;

use clap::Parser;
use iced::widget::{button, checkbox, column, container, image, row, scrollable, slider, text};
use iced::{Alignment, ContentFit, Element, Length, Size, Subscription, Task, Theme};

mod cli;
mod error;
mod source;
mod state;

use crate::cli::Cli;
use crate::state::autoplay::MAX_INTERVAL_SECS;
use crate::state::{AutoPlayState, DisplayState, Tick};

// Initial window size
const WINDOW_WIDTH: f32 = 1000.0;
const WINDOW_HEIGHT: f32 = 600.0;

// Fixed chrome around the image viewport: one navigation button on each
// side, the controls row below. The viewport size reported to the display
// state is the window minus these.
const NAV_BUTTON_WIDTH: f32 = 70.0;
const CONTROLS_HEIGHT: f32 = 60.0;

/// Main application state
struct PhotoBrowser {
    /// The browsed directory, kept for the placeholder message
    directory: PathBuf,
    /// Image list, current index, raster, and displayed size
    display: DisplayState,
    /// Auto-play timer state
    autoplay: AutoPlayState,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the previous-image button
    NavigatePrevious,
    /// User clicked the next-image button
    NavigateNext,
    /// Grow the displayed image by 10%
    Enlarge,
    /// Shrink the displayed image by 10%
    Narrow,
    /// Fit the displayed image to the viewport
    Fit,
    /// Auto-play checkbox toggled
    AutoPlayToggled(bool),
    /// Interval slider moved (whole seconds)
    IntervalChanged(u8),
    /// Auto-play timer fired
    Tick,
    /// The window was opened or resized
    WindowResized(Size),
}

impl PhotoBrowser {
    /// Create the application state, scanning the directory once.
    ///
    /// An empty or unreadable directory is not fatal: the browser starts
    /// with a disabled, placeholder UI.
    fn new(directory: PathBuf) -> (Self, Task<Message>) {
        let files = match source::list_images(&directory) {
            Ok(files) => files,
            Err(err) => {
                log::warn!("{err}");
                Vec::new()
            }
        };
        log::info!("{} images in {}", files.len(), directory.display());

        let mut browser = PhotoBrowser {
            directory,
            display: DisplayState::new(files),
            autoplay: AutoPlayState::new(),
        };
        browser.load_current();

        (browser, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigatePrevious => {
                self.display.previous();
                self.load_current();
                Task::none()
            }
            Message::NavigateNext => {
                self.display.next();
                self.load_current();
                Task::none()
            }
            Message::Enlarge => {
                self.display.enlarge();
                Task::none()
            }
            Message::Narrow => {
                self.display.narrow();
                Task::none()
            }
            Message::Fit => {
                self.display.fit();
                Task::none()
            }
            Message::AutoPlayToggled(enabled) => {
                self.autoplay.set_enabled(enabled);
                if enabled {
                    // immediate prime tick; the real cadence follows from
                    // the timer subscription
                    Task::done(Message::Tick)
                } else {
                    Task::none()
                }
            }
            Message::IntervalChanged(secs) => {
                self.autoplay.set_interval(secs);
                if self.autoplay.is_enabled() {
                    Task::done(Message::Tick)
                } else {
                    Task::none()
                }
            }
            Message::Tick => {
                // a tick queued right before the checkbox was cleared may
                // still arrive; ignore it
                if self.autoplay.is_enabled() && self.autoplay.tick() == Tick::Advance {
                    self.display.next();
                    self.load_current();
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                let (width, height) = viewport_size(size);
                self.display.set_viewport(width, height);
                Task::none()
            }
        }
    }

    /// Decode the current file and show it.
    ///
    /// A decode failure is reported to the log and leaves the previously
    /// displayed raster untouched; the file stays in the list.
    fn load_current(&mut self) {
        let Some(file) = self.display.current_file().cloned() else {
            return;
        };
        if let Some(index) = self.display.current_index() {
            log::debug!(
                "[{}/{}] {}",
                index + 1,
                self.display.len(),
                file.path().display()
            );
        }
        match source::decode(&file) {
            Ok(raster) => self.display.show(raster),
            Err(err) => log::error!("{err}"),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let has_images = !self.display.is_empty();

        let previous = button(text("<"))
            .width(NAV_BUTTON_WIDTH)
            .height(Length::Fill)
            .on_press_maybe(has_images.then_some(Message::NavigatePrevious));

        let next = button(text(">"))
            .width(NAV_BUTTON_WIDTH)
            .height(Length::Fill)
            .on_press_maybe(has_images.then_some(Message::NavigateNext));

        let viewport: Element<Message> = if let Some(raster) = self.display.raster() {
            let (width, height) = self
                .display
                .displayed_size()
                .unwrap_or((raster.width, raster.height));
            scrollable(
                image(raster.handle.clone())
                    .content_fit(ContentFit::Fill)
                    .width(width as f32)
                    .height(height as f32),
            )
            .direction(scrollable::Direction::Both {
                vertical: scrollable::Scrollbar::new(),
                horizontal: scrollable::Scrollbar::new(),
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
        } else {
            let notice = if has_images {
                String::new()
            } else {
                format!("No images in {}", self.directory.display())
            };
            container(text(notice))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        };

        let navigation = row![previous, viewport, next]
            .width(Length::Fill)
            .height(Length::Fill);

        let controls = container(
            row![
                checkbox("Autoplay", self.autoplay.is_enabled())
                    .on_toggle(Message::AutoPlayToggled),
                slider(
                    0..=MAX_INTERVAL_SECS,
                    self.autoplay.interval_secs(),
                    Message::IntervalChanged,
                )
                .step(1_u8)
                .width(220.0),
                text("sec"),
                button(text("larger")).on_press(Message::Enlarge),
                button(text("narrow")).on_press(Message::Narrow),
                button(text("fit")).on_press(Message::Fit),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        )
        .center_x(Length::Fill)
        .center_y(CONTROLS_HEIGHT);

        column![navigation, controls].into()
    }

    /// Timer ticks while auto-play runs, plus window size tracking
    fn subscription(&self) -> Subscription<Message> {
        let window_events = iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(iced::window::Event::Opened { size, .. }) => {
                Some(Message::WindowResized(size))
            }
            iced::Event::Window(iced::window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        });

        if self.autoplay.is_enabled() {
            // keyed on the period: an interval change replaces the timer,
            // discarding whatever countdown had elapsed
            let timer = iced::time::every(self.autoplay.period()).map(|_| Message::Tick);
            Subscription::batch([window_events, timer])
        } else {
            window_events
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Pixel size of the image region for a given window size.
fn viewport_size(window: Size) -> (u32, u32) {
    let width = (window.width - 2.0 * NAV_BUTTON_WIDTH).max(0.0);
    let height = (window.height - CONTROLS_HEIGHT).max(0.0);
    (width as u32, height as u32)
}

fn main() -> iced::Result {
    env_logger::init();
    let args = Cli::parse();
    let directory = args.directory.unwrap_or_else(cli::default_directory);

    iced::application("Photo Browser", PhotoBrowser::update, PhotoBrowser::view)
        .subscription(PhotoBrowser::subscription)
        .theme(PhotoBrowser::theme)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .centered()
        .run_with(move || PhotoBrowser::new(directory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Raster;
    use iced::widget::image::Handle;
    use std::fs::File;
    use tempfile::{tempdir, TempDir};

    // The files are not valid JPEGs, so every decode fails and is logged;
    // index arithmetic and timer behavior are observable regardless.
    fn browser_with_files(count: usize) -> (TempDir, PhotoBrowser) {
        let dir = tempdir().expect("failed to create temp dir");
        for i in 0..count {
            File::create(dir.path().join(format!("{i:03}.jpg"))).expect("failed to create file");
        }
        let (browser, _task) = PhotoBrowser::new(dir.path().to_path_buf());
        (dir, browser)
    }

    fn raster(width: u32, height: u32) -> Raster {
        let pixels = vec![255_u8; (width * height * 4) as usize];
        Raster {
            handle: Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    #[test]
    fn empty_directory_degrades_without_panicking() {
        let dir = tempdir().expect("failed to create temp dir");
        File::create(dir.path().join("readme.txt")).expect("failed to create file");

        let (mut browser, _task) = PhotoBrowser::new(dir.path().to_path_buf());

        assert!(browser.display.is_empty());
        assert!(browser.display.raster().is_none());

        let _ = browser.update(Message::NavigateNext);
        let _ = browser.update(Message::Enlarge);
        assert_eq!(browser.display.current_index(), None);
    }

    #[test]
    fn navigation_messages_wrap_the_index() {
        let (_dir, mut browser) = browser_with_files(3);
        assert_eq!(browser.display.current_index(), Some(0));

        for _ in 0..3 {
            let _ = browser.update(Message::NavigateNext);
        }
        assert_eq!(browser.display.current_index(), Some(0));

        let _ = browser.update(Message::NavigatePrevious);
        assert_eq!(browser.display.current_index(), Some(2));
    }

    #[test]
    fn prime_tick_does_not_advance_but_later_ticks_do() {
        let (_dir, mut browser) = browser_with_files(3);

        let _ = browser.update(Message::AutoPlayToggled(true));
        let _ = browser.update(Message::Tick);
        assert_eq!(browser.display.current_index(), Some(0));

        let _ = browser.update(Message::Tick);
        assert_eq!(browser.display.current_index(), Some(1));

        let _ = browser.update(Message::Tick);
        assert_eq!(browser.display.current_index(), Some(2));
    }

    #[test]
    fn interval_change_restarts_the_prime_sequence() {
        let (_dir, mut browser) = browser_with_files(3);

        let _ = browser.update(Message::AutoPlayToggled(true));
        let _ = browser.update(Message::Tick);
        let _ = browser.update(Message::Tick);
        assert_eq!(browser.display.current_index(), Some(1));

        let _ = browser.update(Message::IntervalChanged(2));
        let _ = browser.update(Message::Tick);
        assert_eq!(browser.display.current_index(), Some(1));

        let _ = browser.update(Message::Tick);
        assert_eq!(browser.display.current_index(), Some(2));
    }

    #[test]
    fn ticks_are_ignored_once_auto_play_stops() {
        let (_dir, mut browser) = browser_with_files(3);

        let _ = browser.update(Message::AutoPlayToggled(true));
        let _ = browser.update(Message::Tick);
        let _ = browser.update(Message::AutoPlayToggled(false));

        let _ = browser.update(Message::Tick);
        let _ = browser.update(Message::Tick);
        assert_eq!(browser.display.current_index(), Some(0));
    }

    #[test]
    fn window_size_drives_the_fit() {
        let (_dir, mut browser) = browser_with_files(1);
        browser.display.show(raster(400, 300));
        assert_eq!(browser.display.displayed_size(), None);

        let _ = browser.update(Message::WindowResized(Size::new(840.0, 660.0)));

        // viewport 700x600, image 4:3 -> width-constrained
        assert_eq!(browser.display.displayed_size(), Some((700, 525)));

        let _ = browser.update(Message::Enlarge);
        assert_eq!(browser.display.displayed_size(), Some((770, 577)));

        let _ = browser.update(Message::Fit);
        assert_eq!(browser.display.displayed_size(), Some((700, 525)));
    }
}
