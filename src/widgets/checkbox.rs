use crate::core::value::Value;
use crate::terminal::Key;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use crate::widgets::dispatch::Widget;
use crate::widgets::props::{WidgetProps, WidgetResponse};

pub struct CheckboxWidget;

impl CheckboxWidget {
    fn checked(&self, props: &WidgetProps) -> bool {
        props.value.as_bool().unwrap_or(false)
    }
}

impl Widget for CheckboxWidget {
    fn draw(&self, props: &WidgetProps) -> Vec<SpanLine> {
        let (symbol, style) = if self.checked(props) {
            ("[✓]", Style::new().color(Color::Green))
        } else {
            ("[ ]", Style::new().color(Color::Grey))
        };

        let mut lines = vec![
            props.label_line(),
            vec![props.prefix_span(), Span::styled(symbol, style)],
        ];
        if let Some(error) = props.error_line() {
            lines.push(error);
        }
        lines
    }

    fn handle_key(&self, props: &WidgetProps, key: Key) -> WidgetResponse {
        match key {
            Key::Char(' ') => WidgetResponse::Changed(Value::Bool(!self.checked(props))),
            Key::Enter => WidgetResponse::Submit,
            _ => WidgetResponse::Ignored,
        }
    }
}
