use crate::core::value::Value;
use crate::terminal::Key;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use crate::widgets::dispatch::Widget;
use crate::widgets::props::{WidgetProps, WidgetResponse};

pub struct RadioWidget;

impl RadioWidget {
    fn selected(&self, props: &WidgetProps) -> Option<usize> {
        let current = props.value.display();
        props
            .options
            .iter()
            .position(|option| option.value == current)
    }

    fn step(&self, props: &WidgetProps, step: isize) -> WidgetResponse {
        if props.options.is_empty() {
            return WidgetResponse::Ignored;
        }
        let next = match self.selected(props) {
            Some(index) => {
                let len = props.options.len() as isize;
                (index as isize + step).rem_euclid(len) as usize
            }
            // Nothing chosen yet: either arrow lands on the first option.
            None => 0,
        };
        WidgetResponse::Changed(Value::Text(props.options[next].value.clone()))
    }
}

impl Widget for RadioWidget {
    fn draw(&self, props: &WidgetProps) -> Vec<SpanLine> {
        let selected = self.selected(props);
        let mut lines = vec![props.label_line()];

        for (index, option) in props.options.iter().enumerate() {
            let marker = if selected == Some(index) { "(•) " } else { "( ) " };
            let style = if selected == Some(index) {
                Style::new().color(Color::Green)
            } else {
                props.value_style()
            };
            lines.push(vec![
                props.prefix_span(),
                Span::styled(marker, style),
                Span::styled(option.label.as_str(), style),
            ]);
        }

        if let Some(error) = props.error_line() {
            lines.push(error);
        }
        lines
    }

    fn handle_key(&self, props: &WidgetProps, key: Key) -> WidgetResponse {
        match key {
            Key::Up => self.step(props, -1),
            Key::Down => self.step(props, 1),
            Key::Enter => WidgetResponse::Submit,
            _ => WidgetResponse::Ignored,
        }
    }
}
