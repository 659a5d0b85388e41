use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Session operation requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Flip,
    Next,
    Previous,
    MarkCorrect,
    MarkWrong,
    Shuffle,
    Reset,
    Quit,
}

/// Maps a terminal key event to a session command.
///
/// Space flips, right-arrow/`n` and left-arrow/`p` navigate, `c`/`w`
/// score, `s` shuffles, `r` resets, `q`/Esc/ctrl-c quits. Release and
/// repeat events are ignored.
#[must_use]
pub fn command_for(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(' ') => Some(KeyCommand::Flip),
        KeyCode::Right | KeyCode::Char('n') => Some(KeyCommand::Next),
        KeyCode::Left | KeyCode::Char('p') => Some(KeyCommand::Previous),
        KeyCode::Char('c') => Some(KeyCommand::MarkCorrect),
        KeyCode::Char('w') => Some(KeyCommand::MarkWrong),
        KeyCode::Char('s') => Some(KeyCommand::Shuffle),
        KeyCode::Char('r') => Some(KeyCommand::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyCommand::Quit),
        _ => None,
    }
}
