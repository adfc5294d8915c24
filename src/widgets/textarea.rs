use crate::core::value::Value;
use crate::terminal::Key;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use crate::widgets::dispatch::Widget;
use crate::widgets::props::{WidgetProps, WidgetResponse};

pub struct TextareaWidget;

impl TextareaWidget {
    fn gutter(&self, props: &WidgetProps) -> Span {
        if props.focused {
            Span::styled("│ ", Style::new().color(Color::Cyan))
        } else {
            Span::styled("│ ", Style::new().color(Color::Grey))
        }
    }
}

impl Widget for TextareaWidget {
    fn draw(&self, props: &WidgetProps) -> Vec<SpanLine> {
        let mut lines = vec![props.label_line()];
        let display = props.value.display();

        if display.is_empty() {
            let mut first = vec![self.gutter(props)];
            if let Some(placeholder) = props.placeholder {
                first.push(Span::styled(placeholder, Style::new().color(Color::Grey).dim()));
            }
            lines.push(first);
            for _ in 1..props.rows {
                lines.push(vec![self.gutter(props)]);
            }
        } else {
            let body: Vec<&str> = display.split('\n').collect();
            let height = body.len().max(props.rows);
            for row in 0..height {
                let mut line = vec![self.gutter(props)];
                if let Some(text) = body.get(row) {
                    line.push(Span::styled(*text, props.value_style()));
                }
                lines.push(line);
            }
        }

        if let Some(error) = props.error_line() {
            lines.push(error);
        }
        lines
    }

    fn handle_key(&self, props: &WidgetProps, key: Key) -> WidgetResponse {
        let mut text = props.value.display();
        match key {
            Key::Char(ch) if !ch.is_control() => {
                text.push(ch);
                WidgetResponse::Changed(Value::Text(text))
            }
            // Enter inserts a newline instead of submitting.
            Key::Enter => {
                text.push('\n');
                WidgetResponse::Changed(Value::Text(text))
            }
            Key::Backspace => match text.pop() {
                Some(_) => WidgetResponse::Changed(Value::Text(text)),
                None => WidgetResponse::Ignored,
            },
            _ => WidgetResponse::Ignored,
        }
    }
}
