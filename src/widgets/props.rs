use crate::core::field::{FieldKind, SelectOption};
use crate::core::form::FieldView;
use crate::core::value::Value;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};

/// Everything a widget may read. Widgets own no state: the value, error and
/// focus flag all arrive through here on every draw and every keystroke.
pub struct WidgetProps<'a> {
    pub kind: FieldKind,
    pub label: &'a str,
    pub value: &'a Value,
    pub placeholder: Option<&'a str>,
    pub options: &'a [SelectOption],
    pub error: Option<&'a str>,
    pub required: bool,
    pub disabled: bool,
    pub focused: bool,
    pub rows: usize,
}

impl<'a> WidgetProps<'a> {
    pub fn from_view(view: &'a FieldView<'a>, focused: bool, disabled: bool) -> Self {
        Self {
            kind: view.descriptor.kind(),
            label: view.descriptor.label(),
            value: view.value,
            placeholder: view.descriptor.placeholder(),
            options: view.descriptor.options(),
            error: view.error(),
            required: view.descriptor.is_required(),
            disabled,
            focused,
            rows: view.descriptor.rows(),
        }
    }

    pub(crate) fn label_line(&self) -> SpanLine {
        let mut style = Style::new();
        if self.focused {
            style = style.bold().color(Color::Cyan);
        }
        if self.disabled {
            style = style.dim();
        }
        let mut line = vec![Span::styled(self.label, style)];
        if self.required {
            line.push(Span::styled(" *", Style::new().color(Color::Red)));
        }
        line
    }

    pub(crate) fn error_line(&self) -> Option<SpanLine> {
        self.error
            .map(|message| vec![Span::styled(message, Style::new().color(Color::Red))])
    }

    pub(crate) fn prefix_span(&self) -> Span {
        if self.focused {
            Span::styled("› ", Style::new().color(Color::Cyan))
        } else {
            Span::new("  ")
        }
    }

    pub(crate) fn value_style(&self) -> Style {
        if self.disabled {
            Style::new().dim()
        } else {
            Style::default()
        }
    }
}

/// What a keystroke did to the focused widget. Widgets forward raw new
/// values only; they never validate and never touch field metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetResponse {
    Changed(Value),
    Submit,
    Ignored,
}
