//! Color decorator and the closed palette it draws from.

use std::str::FromStr;

use crossterm::Command;
use crossterm::style::{self, ResetColor, SetBackgroundColor, SetForegroundColor};

use crate::error::UiError;
use crate::ui::Ui;

/// A named terminal color, or [`Color::None`] to leave a side unstyled.
///
/// The eight standard names map to the classic (dark) palette and the
/// `Bright*` names to the high-intensity palette. `None` is a first-class
/// member meaning "emit no control sequence for this side"; it is not black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Emit no control sequence for this side.
    None,
    /// Standard black.
    Black,
    /// Standard red.
    Red,
    /// Standard green.
    Green,
    /// Standard yellow.
    Yellow,
    /// Standard blue.
    Blue,
    /// Standard magenta.
    Magenta,
    /// Standard cyan.
    Cyan,
    /// Standard white.
    White,
    /// High-intensity black.
    BrightBlack,
    /// High-intensity red.
    BrightRed,
    /// High-intensity green.
    BrightGreen,
    /// High-intensity yellow.
    BrightYellow,
    /// High-intensity blue.
    BrightBlue,
    /// High-intensity magenta.
    BrightMagenta,
    /// High-intensity cyan.
    BrightCyan,
    /// High-intensity white.
    BrightWhite,
}

impl Color {
    /// The crossterm color this name selects, or `None` for the unset state.
    fn ansi(self) -> Option<style::Color> {
        match self {
            Self::None => None,
            Self::Black => Some(style::Color::Black),
            Self::Red => Some(style::Color::DarkRed),
            Self::Green => Some(style::Color::DarkGreen),
            Self::Yellow => Some(style::Color::DarkYellow),
            Self::Blue => Some(style::Color::DarkBlue),
            Self::Magenta => Some(style::Color::DarkMagenta),
            Self::Cyan => Some(style::Color::DarkCyan),
            Self::White => Some(style::Color::Grey),
            Self::BrightBlack => Some(style::Color::DarkGrey),
            Self::BrightRed => Some(style::Color::Red),
            Self::BrightGreen => Some(style::Color::Green),
            Self::BrightYellow => Some(style::Color::Yellow),
            Self::BrightBlue => Some(style::Color::Blue),
            Self::BrightMagenta => Some(style::Color::Magenta),
            Self::BrightCyan => Some(style::Color::Cyan),
            Self::BrightWhite => Some(style::Color::White),
        }
    }
}

impl FromStr for Color {
    type Err = UiError;

    /// Parse a case-insensitive color name (`"green"`, `"bright-red"`).
    ///
    /// # Errors
    ///
    /// [`UiError::UnknownColor`] for anything outside the closed palette, so
    /// misconfiguration fails at construction time rather than at first
    /// write.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "black" => Ok(Self::Black),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "magenta" => Ok(Self::Magenta),
            "cyan" => Ok(Self::Cyan),
            "white" => Ok(Self::White),
            "bright-black" => Ok(Self::BrightBlack),
            "bright-red" => Ok(Self::BrightRed),
            "bright-green" => Ok(Self::BrightGreen),
            "bright-yellow" => Ok(Self::BrightYellow),
            "bright-blue" => Ok(Self::BrightBlue),
            "bright-magenta" => Ok(Self::BrightMagenta),
            "bright-cyan" => Ok(Self::BrightCyan),
            "bright-white" => Ok(Self::BrightWhite),
            _ => Err(UiError::UnknownColor(s.to_owned())),
        }
    }
}

/// Surround `message` with the escapes for `fg`/`bg`, or `None` when both
/// sides are unset and the message should pass through untouched.
fn paint(fg: Color, bg: Color, message: &str) -> Option<String> {
    let (fg, bg) = (fg.ansi(), bg.ansi());
    if fg.is_none() && bg.is_none() {
        return None;
    }
    let mut styled = String::with_capacity(message.len() + 24);
    // write_ansi into a String is infallible.
    if let Some(color) = fg {
        let _ = SetForegroundColor(color).write_ansi(&mut styled);
    }
    if let Some(color) = bg {
        let _ = SetBackgroundColor(color).write_ansi(&mut styled);
    }
    styled.push_str(message);
    let _ = ResetColor.write_ansi(&mut styled);
    Some(styled)
}

/// Decorator that colors each channel independently before delegating.
///
/// The constructor fixes the seven foreground colors; every background starts
/// at [`Color::None`] and is changed by assigning the public `*_bg` field
/// directly. A channel with both sides at `None` delegates its message with
/// zero control bytes.
///
/// Color fields are plain data with no interior locking: mutate them while
/// building the chain, not while another thread is writing through it.
#[derive(Debug)]
pub struct ColorUi<U> {
    /// Foreground for the log channel.
    pub log_fg: Color,
    /// Background for the log channel.
    pub log_bg: Color,
    /// Foreground for the output channel.
    pub output_fg: Color,
    /// Background for the output channel.
    pub output_bg: Color,
    /// Foreground for the success channel.
    pub success_fg: Color,
    /// Background for the success channel.
    pub success_bg: Color,
    /// Foreground for the info channel.
    pub info_fg: Color,
    /// Background for the info channel.
    pub info_bg: Color,
    /// Foreground for the error channel.
    pub error_fg: Color,
    /// Background for the error channel.
    pub error_bg: Color,
    /// Foreground for the warn channel.
    pub warn_fg: Color,
    /// Background for the warn channel.
    pub warn_bg: Color,
    /// Foreground for the running channel.
    pub running_fg: Color,
    /// Background for the running channel.
    pub running_bg: Color,
    inner: U,
}

impl<U: Ui> ColorUi<U> {
    /// Wrap `inner`, coloring each channel's foreground with the given color.
    ///
    /// Backgrounds all start at [`Color::None`]; assign the `*_bg` fields to
    /// change them.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        log: Color,
        output: Color,
        success: Color,
        info: Color,
        error: Color,
        warn: Color,
        running: Color,
        inner: U,
    ) -> Self {
        Self {
            log_fg: log,
            log_bg: Color::None,
            output_fg: output,
            output_bg: Color::None,
            success_fg: success,
            success_bg: Color::None,
            info_fg: info,
            info_bg: Color::None,
            error_fg: error,
            error_bg: Color::None,
            warn_fg: warn,
            warn_bg: Color::None,
            running_fg: running,
            running_bg: Color::None,
            inner,
        }
    }
}

impl<U: Ui> Ui for ColorUi<U> {
    fn log(&self, message: &str) {
        match paint(self.log_fg, self.log_bg, message) {
            Some(styled) => self.inner.log(&styled),
            None => self.inner.log(message),
        }
    }

    fn output(&self, message: &str) {
        match paint(self.output_fg, self.output_bg, message) {
            Some(styled) => self.inner.output(&styled),
            None => self.inner.output(message),
        }
    }

    fn success(&self, message: &str) {
        match paint(self.success_fg, self.success_bg, message) {
            Some(styled) => self.inner.success(&styled),
            None => self.inner.success(message),
        }
    }

    fn info(&self, message: &str) {
        match paint(self.info_fg, self.info_bg, message) {
            Some(styled) => self.inner.info(&styled),
            None => self.inner.info(message),
        }
    }

    fn error(&self, message: &str) {
        match paint(self.error_fg, self.error_bg, message) {
            Some(styled) => self.inner.error(&styled),
            None => self.inner.error(message),
        }
    }

    fn warn(&self, message: &str) {
        match paint(self.warn_fg, self.warn_bg, message) {
            Some(styled) => self.inner.warn(&styled),
            None => self.inner.warn(message),
        }
    }

    fn running(&self, message: &str) {
        match paint(self.running_fg, self.running_bg, message) {
            Some(styled) => self.inner.running(&styled),
            None => self.inner.running(message),
        }
    }

    fn ask(&self) -> Result<String, UiError> {
        self.inner.ask()
    }
}
