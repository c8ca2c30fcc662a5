//! Display settings resolved from flags, the config file and the terminal.

use std::io::IsTerminal;

use crate::config::UiSection;

use super::mode::OutputMode;

/// Display switches given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayFlags {
    pub no_color: bool,
    pub ascii: bool,
}

/// How photo listings and messages are drawn for one command.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    pub color: bool,
    /// Rounded unicode tables and symbols instead of ASCII
    pub unicode: bool,
    pub mode: OutputMode,
}

impl UiContext {
    /// Resolve display settings for a command.
    ///
    /// Flags win over the `[ui]` config section. Color additionally needs a
    /// TTY and is off under `NO_COLOR` or `TERM=dumb`.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        flags: DisplayFlags,
        settings: Option<&UiSection>,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var_os("NO_COLOR").is_some();

        let color = is_tty && !term_is_dumb && !no_color_env && wants_color(flags, settings);

        Self {
            is_tty,
            color,
            unicode: wants_unicode(flags, settings),
            mode: OutputMode::resolve(json_flag, format_flag, is_tty, term_is_dumb),
        }
    }
}

fn wants_color(flags: DisplayFlags, settings: Option<&UiSection>) -> bool {
    !flags.no_color && settings.map_or(true, |ui| ui.color)
}

fn wants_unicode(flags: DisplayFlags, settings: Option<&UiSection>) -> bool {
    !flags.ascii && !settings.is_some_and(|ui| ui.ascii)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(ascii: bool, color: bool) -> UiSection {
        UiSection { ascii, color }
    }

    #[test]
    fn test_json_mode_from_flag() {
        let ctx = UiContext::from_env(true, None, DisplayFlags::default(), None);
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_ascii_from_flag_or_config() {
        let ascii = DisplayFlags {
            ascii: true,
            ..DisplayFlags::default()
        };
        assert!(!wants_unicode(ascii, None));
        assert!(!wants_unicode(DisplayFlags::default(), Some(&section(true, true))));
        assert!(wants_unicode(DisplayFlags::default(), Some(&section(false, true))));
        assert!(wants_unicode(DisplayFlags::default(), None));

        let ctx = UiContext::from_env(false, None, DisplayFlags::default(), Some(&section(true, true)));
        assert!(!ctx.unicode);
    }

    #[test]
    fn test_color_from_flag_or_config() {
        let no_color = DisplayFlags {
            no_color: true,
            ..DisplayFlags::default()
        };
        assert!(!wants_color(no_color, Some(&section(false, true))));
        assert!(!wants_color(DisplayFlags::default(), Some(&section(false, false))));
        assert!(wants_color(DisplayFlags::default(), None));
    }

    #[test]
    fn test_no_color_flag_disables_color() {
        let flags = DisplayFlags {
            no_color: true,
            ascii: false,
        };
        let ctx = UiContext::from_env(false, None, flags, None);
        assert!(!ctx.color);
    }
}
