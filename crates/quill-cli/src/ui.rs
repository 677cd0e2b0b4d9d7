use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, ProgressMode};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub progress: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(flags, std::io::stderr().is_terminal()));
}

fn resolve(flags: &GlobalFlags, stderr_is_tty: bool) -> UiPrefs {
    let progress = match flags.progress {
        ProgressMode::On => !flags.quiet,
        ProgressMode::Off => false,
        ProgressMode::Auto => stderr_is_tty && !flags.quiet,
    };
    UiPrefs { progress }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs { progress: false })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(progress: ProgressMode, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet,
            verbose: false,
            project: "default".into(),
            progress,
        }
    }

    #[test]
    fn progress_resolution() {
        assert!(resolve(&flags(ProgressMode::Auto, false), true).progress);
        assert!(!resolve(&flags(ProgressMode::Auto, false), false).progress);
        assert!(!resolve(&flags(ProgressMode::Auto, true), true).progress);
        assert!(resolve(&flags(ProgressMode::On, false), false).progress);
        assert!(!resolve(&flags(ProgressMode::On, true), true).progress);
        assert!(!resolve(&flags(ProgressMode::Off, false), true).progress);
    }
}
