//! A color picking session.
//!
//! A [`Session`] ties everything together. It owns the palette, the currently
//! hovered sample, the notice timer, the [`Options`], a [`Clipboard`], and a
//! diagnostic log. Hosts forward pixel samples, clicks, and clock ticks to the
//! session, render its state, and show its notices.
//!
//! ```
//! # use std::time::Instant;
//! # use eyedrop::notice::Notice;
//! # use eyedrop::opt::Options;
//! # use eyedrop::session::Session;
//! # use eyedrop::store::Selection;
//! let mut session = Session::new(Vec::new(), Options::default());
//! let now = Instant::now();
//!
//! session.sample([255, 0, 0]);
//! assert_eq!(session.select(now), Some(Selection::Added(0)));
//! assert_eq!(session.clipboard(), &vec!["rgb(255, 0, 0)".to_string()]);
//!
//! assert_eq!(session.select(now), Some(Selection::Duplicate(0)));
//! assert!(session.notice().is_some_and(Notice::is_error));
//! ```

use std::io::Write;
use std::time::Instant;

use crate::core::{ColorMath, PaletteMath, Space};
use crate::error::FormatError;
use crate::format::FormatConfig;
use crate::notice::{Notice, NoticeTimer};
use crate::opt::{Options, Volume};
use crate::store::{Entry, PaletteStore, Selection};
use crate::{ColorValue, Converter};

/// A sink for text copied by the user.
///
/// Writing is fire-and-forget. The session hands over the finished text and
/// neither waits for nor retries the write.
pub trait Clipboard {
    /// Write the text to the clipboard.
    fn write_text(&mut self, text: &str);
}

impl<C: Clipboard + ?Sized> Clipboard for &mut C {
    fn write_text(&mut self, text: &str) {
        (**self).write_text(text)
    }
}

/// A clipboard that records every write, latest last.
impl Clipboard for Vec<String> {
    fn write_text(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

// ====================================================================================================================

/// A color picking session.
pub struct Session<C: Clipboard, M: ColorMath = PaletteMath> {
    options: Options,
    converter: Converter<M>,
    palette: PaletteStore,
    hovered: Option<ColorValue>,
    timer: NoticeTimer,
    clipboard: C,
    log: Box<dyn Write>,
    is_torn_down: bool,
}

impl<C: Clipboard> Session<C, PaletteMath> {
    /// Create a new session with the default color science provider.
    pub fn new(clipboard: C, options: Options) -> Self {
        Self::with_math(clipboard, PaletteMath, options)
    }
}

impl<C: Clipboard, M: ColorMath> Session<C, M> {
    /// Create a new session with the given color science provider.
    ///
    /// The session logs to standard error. Use [`Session::set_log`] to
    /// redirect the log.
    pub fn with_math(clipboard: C, math: M, options: Options) -> Self {
        Self {
            converter: Converter::new(math, options.rounding()),
            palette: PaletteStore::new(),
            hovered: None,
            timer: options.notice_timer(),
            clipboard,
            log: Box::new(std::io::stderr()),
            is_torn_down: false,
            options,
        }
    }

    /// Redirect the log to the given writer.
    pub fn set_log<W: Write + 'static>(&mut self, writer: W) {
        self.log = Box::new(writer);
    }

    fn log(&mut self, volume: Volume, message: &str) {
        if volume <= self.options.volume() {
            let _ = writeln!(self.log, "{}", message);
            let _ = self.log.flush();
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Update the options.
    ///
    /// Since the notice timing may change, this method cancels any notice.
    pub fn set_options(&mut self, options: Options) {
        self.converter.set_rounding(options.rounding());
        self.timer = options.notice_timer();
        self.options = options;
    }

    /// Update the format for copying colors.
    pub fn set_format(&mut self, format: FormatConfig) {
        self.options = self.options.to_builder().format(format).build();
    }

    /// Update the color space for copying the whole palette.
    pub fn set_palette_space(&mut self, space: Space) {
        self.options = self.options.to_builder().palette_space(space).build();
    }

    /// Get the converter.
    pub fn converter(&self) -> &Converter<M> {
        &self.converter
    }

    /// Get the palette.
    pub fn palette(&self) -> &PaletteStore {
        &self.palette
    }

    /// Get the clipboard.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Record a pixel sample under the pointer.
    pub fn sample(&mut self, rgb: [u8; 3]) -> &ColorValue {
        let color = ColorValue::from(rgb);
        self.log(
            Volume::Detailed,
            &format!("session::sample color={}", color.to_hex_format()),
        );
        self.hovered.insert(color)
    }

    /// Forget the pixel sample, since the pointer left the image.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Get the pixel sample under the pointer.
    pub fn hovered(&self) -> Option<&ColorValue> {
        self.hovered.as_ref()
    }

    /// Format the color in every color space with the current format.
    pub fn details(&self, color: &ColorValue) -> Vec<(Space, Result<String, FormatError>)> {
        self.converter.details(color, self.options.format())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Select the pixel sample under the pointer.
    ///
    /// This method copies the sample as RGB text to the clipboard and adds it
    /// to the palette. If the palette already contains the color, the notice
    /// says so. Without a sample or after teardown, this method does
    /// nothing.
    pub fn select(&mut self, now: Instant) -> Option<Selection> {
        if self.is_torn_down {
            return None;
        }

        let color = self.hovered.clone()?;
        let text = self
            .converter
            .format(&color, Space::Rgb, self.options.format())
            .unwrap_or_else(|_| color.to_hex_format());

        self.clipboard.write_text(&text);
        let selection = self.palette.select(color);

        let notice = if selection.is_duplicate() {
            Notice::error(format!(
                "Color already selected! {} copied to clipboard",
                text
            ))
        } else {
            Notice::info(format!("{} copied to clipboard!", text))
        };
        self.notify(notice, now);

        self.log(
            Volume::Regular,
            &format!("session::select text={} selection={:?}", text, selection),
        );
        Some(selection)
    }

    /// Copy the color in the given space to the clipboard.
    ///
    /// # Errors
    ///
    /// If the current format has no notation for the color space, this method
    /// shows an error notice, leaves the clipboard alone, and returns the
    /// error.
    pub fn copy(
        &mut self,
        color: &ColorValue,
        space: Space,
        now: Instant,
    ) -> Result<String, FormatError> {
        let result = self
            .converter
            .format(color, space, self.options.format());
        self.deliver(result, space, now)
    }

    /// Copy the whole palette as a JSON array of strings to the clipboard.
    ///
    /// The colors are formatted in the configured palette space.
    ///
    /// # Errors
    ///
    /// If the current format has no notation for the palette space, this
    /// method shows an error notice, leaves the clipboard alone, and returns
    /// the error.
    pub fn copy_palette(&mut self, now: Instant) -> Result<String, FormatError> {
        let space = self.options.palette_space();
        let result = self
            .palette
            .to_json(&self.converter, space, self.options.format());
        self.deliver(result, space, now)
    }

    fn deliver(
        &mut self,
        result: Result<String, FormatError>,
        space: Space,
        now: Instant,
    ) -> Result<String, FormatError> {
        let text = match result {
            Ok(text) => text,
            Err(error) => {
                self.notify(Notice::error(error.to_string()), now);
                self.log(
                    Volume::Regular,
                    &format!("session::copy space={} error=\"{}\"", space, error),
                );
                return Err(error);
            }
        };

        self.clipboard.write_text(&text);
        self.notify(Notice::info(format!("{} copied to clipboard!", text)), now);
        self.log(
            Volume::Regular,
            &format!("session::copy space={} text={}", space, text),
        );
        Ok(text)
    }

    /// Remove the color from the palette.
    pub fn remove(&mut self, color: &ColorValue) -> Option<Entry> {
        let entry = self.palette.remove(color);
        self.log(
            Volume::Regular,
            &format!(
                "session::remove color={} found={}",
                color.to_hex_format(),
                entry.is_some()
            ),
        );
        entry
    }

    /// Remove all colors from the palette.
    pub fn clear(&mut self) {
        let count = self.palette.len();
        self.palette.clear();
        self.log(Volume::Regular, &format!("session::clear count={}", count));
    }

    // ----------------------------------------------------------------------------------------------------------------

    fn notify(&mut self, notice: Notice, now: Instant) {
        if self.is_torn_down {
            return;
        }

        let message = format!(
            "session::notice error={} message=\"{}\"",
            notice.is_error(),
            notice.message()
        );
        self.timer.arm(notice, now);
        self.log(Volume::Regular, &message);
    }

    /// Advance the notice timer to the given instant and return the visible
    /// notice, if any.
    pub fn poll(&mut self, now: Instant) -> Option<&Notice> {
        self.timer.poll(now)
    }

    /// Get the current notice, whether pending or visible.
    pub fn notice(&self) -> Option<&Notice> {
        self.timer.notice()
    }

    /// Tear down this session.
    ///
    /// This method cancels any notice and forgets the pixel sample. Afterwards,
    /// [`Session::select`] does nothing and copying no longer shows notices.
    /// Dropping the session tears it down as well. Tearing down a session more
    /// than once has no further effect.
    pub fn teardown(&mut self) {
        if self.is_torn_down {
            return;
        }

        self.is_torn_down = true;
        self.timer.cancel();
        self.hovered = None;
        self.log(Volume::Regular, "session::teardown");
    }

    /// Determine whether this session has been torn down.
    pub fn is_torn_down(&self) -> bool {
        self.is_torn_down
    }
}

impl<C: Clipboard, M: ColorMath> Drop for Session<C, M> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<C: Clipboard + core::fmt::Debug, M: ColorMath + core::fmt::Debug> core::fmt::Debug
    for Session<C, M>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("options", &self.options)
            .field("converter", &self.converter)
            .field("palette", &self.palette)
            .field("hovered", &self.hovered)
            .field("timer", &self.timer)
            .field("clipboard", &self.clipboard)
            .field("is_torn_down", &self.is_torn_down)
            .finish_non_exhaustive()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Session;
    use crate::error::FormatError;
    use crate::format::{FormatConfig, Syntax, Unit};
    use crate::notice::Notice;
    use crate::opt::Options;
    use crate::store::Selection;
    use crate::{ColorValue, Space};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    /// A log writer whose output remains accessible after the session
    /// takes ownership.
    #[derive(Clone, Default)]
    struct SharedLog(Rc<RefCell<Vec<u8>>>);

    impl SharedLog {
        fn lines(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.borrow())
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl std::io::Write for SharedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_select() {
        let now = Instant::now();
        let mut session = Session::new(Vec::new(), Options::default());
        assert_eq!(session.select(now), None);
        assert!(session.clipboard().is_empty());

        session.sample([255, 0, 0]);
        assert_eq!(session.select(now), Some(Selection::Added(0)));
        assert_eq!(
            session.notice().map(Notice::message),
            Some("rgb(255, 0, 0) copied to clipboard!")
        );

        session.sample([0, 255, 0]);
        assert_eq!(session.select(now), Some(Selection::Added(1)));
        assert_eq!(
            session
                .palette()
                .selected()
                .map(|entry| entry.color().to_24bit()),
            Some([0, 255, 0])
        );

        session.sample([255, 0, 0]);
        assert_eq!(session.select(now), Some(Selection::Duplicate(0)));
        assert_eq!(session.palette().len(), 2);

        let notice = session.notice().cloned();
        assert_eq!(notice.as_ref().map(Notice::is_error), Some(true));
        assert_eq!(
            notice.as_ref().map(Notice::message),
            Some("Color already selected! rgb(255, 0, 0) copied to clipboard")
        );
        assert_eq!(
            session.clipboard(),
            &vec![
                "rgb(255, 0, 0)".to_string(),
                "rgb(0, 255, 0)".to_string(),
                "rgb(255, 0, 0)".to_string(),
            ]
        );
    }

    #[test]
    fn test_hover() {
        let mut session = Session::new(Vec::new(), Options::default());
        assert_eq!(session.sample([1, 2, 3]).to_24bit(), [1, 2, 3]);
        assert_eq!(session.hovered().map(ColorValue::to_24bit), Some([1, 2, 3]));

        let details = session.details(&ColorValue::from_24bit(1, 2, 3));
        assert_eq!(details.len(), 10);
        assert_eq!(details[0], (Space::Hex, Ok("#010203".to_string())));

        session.leave();
        assert_eq!(session.hovered(), None);
        assert_eq!(session.select(Instant::now()), None);
    }

    #[test]
    fn test_copy() -> Result<(), FormatError> {
        let now = Instant::now();
        let mut session = Session::new(Vec::new(), Options::default());
        let green = ColorValue::from_24bit(0, 255, 0);

        assert_eq!(session.copy(&green, Space::Hsl, now)?, "hsl(120, 100, 50)");
        assert_eq!(session.copy(&green, Space::Hex, now)?, "#00ff00");

        let result = session.copy(&green, Space::Lab, now);
        assert_eq!(
            result,
            Err(FormatError::UnsupportedSpace {
                space: Space::Lab,
                syntax: Syntax::Legacy
            })
        );
        assert_eq!(session.clipboard().len(), 2);
        assert_eq!(
            session.notice().map(Notice::is_error),
            Some(true)
        );

        session.set_format(FormatConfig::new(Syntax::Modern, Unit::Numbers, false));
        assert!(session.copy(&green, Space::Lab, now).is_ok());
        assert_eq!(session.clipboard().len(), 3);
        Ok(())
    }

    #[test]
    fn test_copy_palette() -> Result<(), FormatError> {
        let now = Instant::now();
        let mut session = Session::new(Vec::new(), Options::default());
        assert_eq!(session.copy_palette(now)?, "[]");

        session.sample([255, 0, 0]);
        session.select(now);
        session.sample([0, 0, 255]);
        session.select(now);
        assert_eq!(session.copy_palette(now)?, r##"["#ff0000","#0000ff"]"##);

        session.set_palette_space(Space::Hsl);
        assert_eq!(
            session.copy_palette(now)?,
            r#"["hsl(0, 100, 50)","hsl(240, 100, 50)"]"#
        );

        session.set_palette_space(Space::Oklch);
        assert!(session.copy_palette(now).is_err());
        assert_eq!(session.clipboard().len(), 5);
        assert_eq!(
            session.clipboard().last().map(String::as_str),
            Some(r#"["hsl(0, 100, 50)","hsl(240, 100, 50)"]"#)
        );
        Ok(())
    }

    #[test]
    fn test_remove_and_clear() {
        let now = Instant::now();
        let mut session = Session::new(Vec::new(), Options::default());
        for rgb in [[1, 1, 1], [2, 2, 2], [3, 3, 3]] {
            session.sample(rgb);
            session.select(now);
        }

        assert!(session.remove(&ColorValue::from_24bit(2, 2, 2)).is_some());
        assert!(session.remove(&ColorValue::from_24bit(9, 9, 9)).is_none());
        assert_eq!(session.palette().len(), 2);

        session.clear();
        assert!(session.palette().is_empty());
    }

    #[test]
    fn test_notices() {
        let start = Instant::now();
        let mut session = Session::new(Vec::new(), Options::default());
        let red = ColorValue::from_24bit(255, 0, 0);

        let _ = session.copy(&red, Space::Hex, start);
        let _ = session.copy(&red, Space::Rgb, start + ms(5));
        assert_eq!(session.poll(start + ms(10)), None);
        assert_eq!(
            session.poll(start + ms(15)).map(Notice::message),
            Some("rgb(255, 0, 0) copied to clipboard!")
        );

        session.teardown();
        assert!(session.is_torn_down());
        assert_eq!(session.notice(), None);
        assert_eq!(session.poll(start + ms(20)), None);
    }

    #[test]
    fn test_after_teardown() -> Result<(), FormatError> {
        let now = Instant::now();
        let mut session = Session::new(Vec::new(), Options::default());
        session.sample([255, 0, 0]);
        session.teardown();

        session.sample([0, 255, 0]);
        assert_eq!(session.select(now), None);
        assert!(session.palette().is_empty());

        let red = ColorValue::from_24bit(255, 0, 0);
        assert_eq!(session.copy(&red, Space::Hex, now)?, "#ff0000");
        assert_eq!(session.notice(), None);
        assert_eq!(session.poll(now + ms(100)), None);

        assert!(session.copy(&red, Space::Oklch, now).is_err());
        assert_eq!(session.notice(), None);
        Ok(())
    }

    #[test]
    fn test_options() {
        let options = Options::builder()
            .rounding(crate::Rounding::Nearest)
            .notice_delay(0)
            .build();
        let mut session = Session::new(Vec::new(), options);
        let gray = ColorValue::from_24bit(127, 127, 127);
        let now = Instant::now();

        assert_eq!(session.copy(&gray, Space::Hsl, now), Ok("hsl(0, 0, 50)".to_string()));
        assert!(session.poll(now).is_some());

        session.set_options(Options::default());
        assert_eq!(session.notice(), None);
        assert_eq!(session.copy(&gray, Space::Hsl, now), Ok("hsl(0, 0, 49)".to_string()));
    }

    #[test]
    fn test_log() {
        let log = SharedLog::default();
        let now = Instant::now();

        {
            let mut session = Session::new(Vec::new(), Options::with_log());
            session.set_log(log.clone());
            session.sample([255, 0, 0]);
            session.select(now);
            session.clear();
        }

        let lines = log.lines();
        assert_eq!(lines.len(), 4, "{:?}", lines);
        assert!(lines[0].starts_with("session::notice error=false"));
        assert!(lines[1].starts_with("session::select text=rgb(255, 0, 0)"));
        assert_eq!(lines[2], "session::clear count=1");
        assert_eq!(lines[3], "session::teardown");

        let log = SharedLog::default();
        let mut session = Session::new(Vec::new(), Options::with_detailed_log());
        session.set_log(log.clone());
        session.sample([0, 0, 0]);
        assert_eq!(log.lines(), vec!["session::sample color=#000000".to_string()]);
    }

    #[test]
    fn test_silent() {
        let log = SharedLog::default();
        let mut session = Session::new(Vec::new(), Options::default());
        session.set_log(log.clone());
        session.sample([255, 0, 0]);
        session.select(Instant::now());
        session.teardown();
        assert!(log.lines().is_empty());
    }
}
