use crate::terminal::key::Key;
use crate::ui::span::SpanLine;
use crate::ui::style::Color;
use crossterm::event::{Event, KeyEventKind, poll, read};
use crossterm::style::{Attribute, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

/// What the event loop wakes up on: a mapped key press or a new size.
#[derive(Debug, Clone, Copy)]
pub enum TerminalEvent {
    Key(Key),
    Resize(Size),
}

pub struct Terminal {
    stdout: Stdout,
    size: Size,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let stdout = io::stdout();
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            size: Size { width, height },
        })
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.stdout, terminal::EnterAlternateScreen, cursor::Hide)
    }

    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        poll(timeout)
    }

    pub fn read_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            match read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(key) = map_key(key) {
                        return Ok(TerminalEvent::Key(key));
                    }
                }
                Event::Resize(width, height) => {
                    self.size = Size { width, height };
                    return Ok(TerminalEvent::Resize(self.size));
                }
                _ => continue,
            }
        }
    }

    /// Redraw the whole frame from the top-left corner, truncating each line
    /// to the terminal width.
    pub fn render_lines(&mut self, lines: &[SpanLine]) -> io::Result<()> {
        let width = self.size.width as usize;
        queue!(self.stdout, cursor::MoveTo(0, 0))?;
        queue!(self.stdout, terminal::Clear(terminal::ClearType::FromCursorDown))?;

        for (row, line) in lines.iter().enumerate() {
            if row >= self.size.height as usize {
                break;
            }
            queue!(self.stdout, cursor::MoveTo(0, row as u16))?;
            self.queue_line(line, width)?;
        }
        self.stdout.flush()
    }

    fn queue_line(&mut self, line: &SpanLine, width: usize) -> io::Result<()> {
        let mut used = 0usize;
        for span in line {
            if used >= width {
                break;
            }
            let text = truncate_to_width(&span.text, width - used);
            if text.is_empty() {
                continue;
            }
            used += text.width();

            let style = span.style;
            if let Some(fg) = style.color {
                queue!(self.stdout, SetForegroundColor(map_color(fg)))?;
            }
            if let Some(bg) = style.background {
                queue!(self.stdout, SetBackgroundColor(map_color(bg)))?;
            }
            if style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                queue!(self.stdout, SetAttribute(Attribute::Dim))?;
            }

            write!(self.stdout, "{}", text)?;

            if style.color.is_some() || style.background.is_some() || style.bold || style.dim {
                queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }
        Ok(())
    }
}

fn truncate_to_width(text: &str, budget: usize) -> &str {
    if text.width() <= budget {
        return text;
    }
    let mut end = 0;
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        end = idx + ch.len_utf8();
    }
    &text[..end]
}

fn map_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::Red => crossterm::style::Color::Red,
        Color::Green => crossterm::style::Color::Green,
        Color::Yellow => crossterm::style::Color::Yellow,
        Color::Blue => crossterm::style::Color::Blue,
        Color::Magenta => crossterm::style::Color::Magenta,
        Color::Cyan => crossterm::style::Color::Cyan,
        Color::White => crossterm::style::Color::White,
        Color::Grey => crossterm::style::Color::Grey,
    }
}

/// Fold a key press onto the form's key set. Ctrl-C behaves like `Esc`;
/// any other modified or unmapped key is dropped.
fn map_key(event: crossterm::event::KeyEvent) -> Option<Key> {
    use crossterm::event::{KeyCode, KeyModifiers};

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Some(Key::Esc),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Char(ch) => Some(Key::Char(ch)),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{map_key, truncate_to_width};
    use crate::terminal::key::Key;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("héllo", 2), "hé");
    }

    #[test]
    fn key_mapping_folds_ctrl_c_and_drops_the_rest() {
        let press = |code, modifiers| KeyEvent::new(code, modifiers);

        assert_eq!(
            map_key(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Key::Char('a'))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Esc)
        );
        assert_eq!(map_key(press(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
        assert_eq!(map_key(press(KeyCode::F(5), KeyModifiers::NONE)), None);
    }
}
