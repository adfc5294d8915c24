use crate::core::value::Value;
use crate::terminal::Key;
use crate::ui::span::{Span, SpanLine};
use crate::widgets::dispatch::Widget;
use crate::widgets::props::{WidgetProps, WidgetResponse};

pub struct SelectWidget;

impl SelectWidget {
    fn selected(&self, props: &WidgetProps) -> usize {
        let current = props.value.display();
        props
            .options
            .iter()
            .position(|option| option.value == current)
            .unwrap_or(0)
    }

    fn cycle(&self, props: &WidgetProps, step: isize) -> WidgetResponse {
        if props.options.is_empty() {
            return WidgetResponse::Ignored;
        }
        let len = props.options.len() as isize;
        let next = (self.selected(props) as isize + step).rem_euclid(len) as usize;
        WidgetResponse::Changed(Value::Text(props.options[next].value.clone()))
    }
}

impl Widget for SelectWidget {
    fn draw(&self, props: &WidgetProps) -> Vec<SpanLine> {
        let label = props
            .options
            .get(self.selected(props))
            .map(|option| option.label.as_str())
            .unwrap_or("");

        let value_line = vec![
            props.prefix_span(),
            Span::styled(format!("‹ {label} ›"), props.value_style()),
        ];

        let mut lines = vec![props.label_line(), value_line];
        if let Some(error) = props.error_line() {
            lines.push(error);
        }
        lines
    }

    fn handle_key(&self, props: &WidgetProps, key: Key) -> WidgetResponse {
        match key {
            Key::Left => self.cycle(props, -1),
            Key::Right => self.cycle(props, 1),
            Key::Enter => WidgetResponse::Submit,
            _ => WidgetResponse::Ignored,
        }
    }
}
