//! Hero terminal animation: type a command, type its output, hold, fade,
//! move to the next command. Time is fed in explicitly so the browser timer
//! and tests drive the same state machine.

use serde::{Deserialize, Serialize};

/// One scripted command and the output printed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalCommand {
    /// Text after the prompt.
    pub command: String,
    /// Output lines, if any.
    #[serde(default)]
    pub result: Option<String>,
}

/// Bundled `commands.json` shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandScript {
    /// Played in order, then repeated.
    pub commands: Vec<TerminalCommand>,
}

/// Animation speeds in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay per command character.
    pub command_char_ms: u64,
    /// Delay per output character.
    pub result_char_ms: u64,
    /// How long the finished output stays up.
    pub display_ms: u64,
    /// Fade-out before the next command.
    pub fade_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            command_char_ms: 80,
            result_char_ms: 30,
            display_ms: 4_000,
            fade_ms: 500,
        }
    }
}

/// Where the terminal is in the current command's cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalPhase {
    /// Prompt text appearing.
    TypingCommand,
    /// Output appearing.
    TypingResult,
    /// Everything shown, holding.
    Displaying,
    /// Leaving.
    Fading,
}

/// Looping typewriter over a fixed command list.
#[derive(Debug, Clone)]
pub struct Typewriter {
    commands: Vec<TerminalCommand>,
    timing: TypewriterTiming,
    index: usize,
    phase: TerminalPhase,
    phase_elapsed: u64,
}

impl Typewriter {
    /// Start at the first command.
    pub fn new(commands: Vec<TerminalCommand>, timing: TypewriterTiming) -> Self {
        Self {
            commands,
            timing,
            index: 0,
            phase: TerminalPhase::TypingCommand,
            phase_elapsed: 0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> TerminalPhase {
        self.phase
    }

    /// Index of the command on screen.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Command on screen, if the script is not empty.
    pub fn current(&self) -> Option<&TerminalCommand> {
        self.commands.get(self.index)
    }

    /// Whether the blinking cursor is shown.
    pub fn is_typing(&self) -> bool {
        matches!(self.phase, TerminalPhase::TypingCommand | TerminalPhase::TypingResult)
    }

    /// Advance the animation by `elapsed_ms`. Returns whether anything
    /// visible changed.
    pub fn tick(&mut self, elapsed_ms: u64) -> bool {
        if self.commands.is_empty() {
            return false;
        }
        let before = self.frame();
        self.phase_elapsed = self.phase_elapsed.saturating_add(elapsed_ms);

        // Bounded so zero-length timings cannot spin forever.
        let max_steps = self.commands.len().saturating_mul(4).saturating_add(4);
        for _ in 0..max_steps {
            let Some(duration) = self.phase_duration() else {
                break;
            };
            if self.phase_elapsed < duration {
                break;
            }
            self.phase_elapsed -= duration;
            self.advance();
        }

        before != self.frame()
    }

    fn frame(&self) -> (usize, TerminalPhase, usize, Option<usize>) {
        (
            self.index,
            self.phase,
            self.visible_command().len(),
            self.visible_result().map(str::len),
        )
    }

    /// The part of the command typed so far.
    pub fn visible_command(&self) -> &str {
        let Some(current) = self.current() else {
            return "";
        };
        match self.phase {
            TerminalPhase::TypingCommand => {
                prefix(&current.command, typed_chars(self.phase_elapsed, self.timing.command_char_ms))
            },
            _ => &current.command,
        }
    }

    /// The part of the output typed so far; `None` before output starts or
    /// when the command has no output.
    pub fn visible_result(&self) -> Option<&str> {
        let result = self.current()?.result.as_deref()?;
        match self.phase {
            TerminalPhase::TypingCommand => None,
            TerminalPhase::TypingResult => {
                Some(prefix(result, typed_chars(self.phase_elapsed, self.timing.result_char_ms)))
            },
            TerminalPhase::Displaying | TerminalPhase::Fading => Some(result),
        }
    }

    fn phase_duration(&self) -> Option<u64> {
        let current = self.current()?;
        Some(match self.phase {
            TerminalPhase::TypingCommand => {
                char_count(&current.command).saturating_mul(self.timing.command_char_ms)
            },
            TerminalPhase::TypingResult => current
                .result
                .as_deref()
                .map_or(0, |result| char_count(result).saturating_mul(self.timing.result_char_ms)),
            TerminalPhase::Displaying => self.timing.display_ms,
            TerminalPhase::Fading => self.timing.fade_ms,
        })
    }

    fn advance(&mut self) {
        self.phase = match self.phase {
            TerminalPhase::TypingCommand => TerminalPhase::TypingResult,
            TerminalPhase::TypingResult => TerminalPhase::Displaying,
            TerminalPhase::Displaying => TerminalPhase::Fading,
            TerminalPhase::Fading => {
                self.index = (self.index + 1) % self.commands.len();
                TerminalPhase::TypingCommand
            },
        };
    }
}

fn char_count(text: &str) -> u64 {
    text.chars().count() as u64
}

fn typed_chars(elapsed: u64, per_char_ms: u64) -> usize {
    if per_char_ms == 0 {
        return usize::MAX;
    }
    usize::try_from(elapsed / per_char_ms).unwrap_or(usize::MAX)
}

fn prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> Vec<TerminalCommand> {
        vec![
            TerminalCommand {
                command: "whoami".to_string(),
                result: Some("dev".to_string()),
            },
            TerminalCommand {
                command: "ls".to_string(),
                result: None,
            },
        ]
    }

    #[test]
    fn types_command_one_char_per_delay() {
        let mut tw = Typewriter::new(script(), TypewriterTiming::default());
        assert_eq!(tw.visible_command(), "");
        assert!(tw.tick(80));
        assert_eq!(tw.visible_command(), "w");
        tw.tick(160);
        assert_eq!(tw.visible_command(), "who");
        assert_eq!(tw.visible_result(), None);
        assert!(!tw.tick(10));
    }

    #[test]
    fn full_cycle_moves_to_next_command() {
        let timing = TypewriterTiming::default();
        let mut tw = Typewriter::new(script(), timing);

        tw.tick(6 * 80);
        assert_eq!(tw.phase(), TerminalPhase::TypingResult);
        tw.tick(30);
        assert_eq!(tw.visible_result(), Some("d"));
        tw.tick(60);
        assert_eq!(tw.phase(), TerminalPhase::Displaying);
        assert_eq!(tw.visible_result(), Some("dev"));
        tw.tick(timing.display_ms);
        assert_eq!(tw.phase(), TerminalPhase::Fading);
        tw.tick(timing.fade_ms);
        assert_eq!(tw.index(), 1);
        assert_eq!(tw.phase(), TerminalPhase::TypingCommand);
        assert_eq!(tw.visible_command(), "");
    }

    #[test]
    fn command_without_output_skips_to_display_and_loops() {
        let timing = TypewriterTiming::default();
        let mut tw = Typewriter::new(script(), timing);
        let first_cycle = 6 * 80 + 3 * 30 + timing.display_ms + timing.fade_ms;
        tw.tick(first_cycle);
        assert_eq!(tw.index(), 1);

        tw.tick(2 * 80);
        assert_eq!(tw.phase(), TerminalPhase::Displaying);
        assert_eq!(tw.visible_result(), None);

        tw.tick(timing.display_ms + timing.fade_ms);
        assert_eq!(tw.index(), 0);
    }

    #[test]
    fn empty_script_is_inert() {
        let mut tw = Typewriter::new(Vec::new(), TypewriterTiming::default());
        assert!(!tw.tick(10_000));
        assert_eq!(tw.visible_command(), "");
        assert!(tw.current().is_none());
    }

    #[test]
    fn parses_bundled_script_shape() {
        let raw = r#"{"commands":[{"command":"echo hi","result":"hi"},{"command":"clear"}]}"#;
        let script: CommandScript = serde_json::from_str(raw).expect("script");
        assert_eq!(script.commands.len(), 2);
        assert_eq!(script.commands[1].result, None);
    }
}
