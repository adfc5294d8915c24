use crate::core::value::Value;
use crate::terminal::Key;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use crate::widgets::dispatch::Widget;
use crate::widgets::props::{WidgetProps, WidgetResponse};

/// HTML-ish input subtype for the generic single-line text widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    Plain,
    Email,
    Password,
    Number,
}

pub struct TextWidget {
    mode: TextMode,
}

impl TextWidget {
    pub const PLAIN: Self = Self {
        mode: TextMode::Plain,
    };
    pub const EMAIL: Self = Self {
        mode: TextMode::Email,
    };
    pub const PASSWORD: Self = Self {
        mode: TextMode::Password,
    };
    pub const NUMBER: Self = Self {
        mode: TextMode::Number,
    };

    fn display(&self, props: &WidgetProps) -> String {
        let raw = props.value.display();
        match self.mode {
            TextMode::Password => "*".repeat(raw.chars().count()),
            _ => raw,
        }
    }

    fn accepts_char(&self, current: &str, ch: char) -> bool {
        match self.mode {
            TextMode::Number => ch.is_ascii_digit() || (ch == '-' && current.is_empty()),
            _ => !ch.is_control(),
        }
    }

    /// A number field holds `None` while cleared so `required` can tell an
    /// untouched field from an explicit zero.
    fn edited(&self, text: String) -> WidgetResponse {
        match self.mode {
            TextMode::Number => {
                if text.is_empty() {
                    return WidgetResponse::Changed(Value::None);
                }
                match text.parse::<i64>() {
                    Ok(number) => WidgetResponse::Changed(Value::Number(number)),
                    Err(_) => WidgetResponse::Ignored,
                }
            }
            _ => WidgetResponse::Changed(Value::Text(text)),
        }
    }
}

impl Widget for TextWidget {
    fn draw(&self, props: &WidgetProps) -> Vec<SpanLine> {
        let display = self.display(props);
        let mut value_line = vec![props.prefix_span()];
        match props.placeholder {
            Some(placeholder) if display.is_empty() => {
                value_line.push(Span::styled(placeholder, Style::new().color(Color::Grey).dim()));
            }
            _ => value_line.push(Span::styled(display, props.value_style())),
        }

        let mut lines = vec![props.label_line(), value_line];
        if let Some(error) = props.error_line() {
            lines.push(error);
        }
        lines
    }

    fn handle_key(&self, props: &WidgetProps, key: Key) -> WidgetResponse {
        let current = props.value.display();
        match key {
            Key::Char(ch) if self.accepts_char(&current, ch) => {
                let mut text = current;
                text.push(ch);
                self.edited(text)
            }
            Key::Backspace => {
                let mut text = current;
                match text.pop() {
                    Some(_) => self.edited(text),
                    None => WidgetResponse::Ignored,
                }
            }
            Key::Enter => WidgetResponse::Submit,
            _ => WidgetResponse::Ignored,
        }
    }
}
