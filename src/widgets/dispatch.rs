use crate::core::field::FieldKind;
use crate::terminal::Key;
use crate::ui::span::SpanLine;
use crate::widgets::checkbox::CheckboxWidget;
use crate::widgets::props::{WidgetProps, WidgetResponse};
use crate::widgets::radio::RadioWidget;
use crate::widgets::select::SelectWidget;
use crate::widgets::text::TextWidget;
use crate::widgets::textarea::TextareaWidget;

/// A stateless presentation leaf: draws the field from its props and turns
/// a keystroke into a raw value change.
pub trait Widget {
    fn draw(&self, props: &WidgetProps) -> Vec<SpanLine>;
    fn handle_key(&self, props: &WidgetProps, key: Key) -> WidgetResponse;
}

/// Total mapping from field kind to widget. Adding a kind extends this match
/// and is enforced at compile time.
pub fn widget(kind: FieldKind) -> &'static dyn Widget {
    match kind {
        FieldKind::Text => &TextWidget::PLAIN,
        FieldKind::Email => &TextWidget::EMAIL,
        FieldKind::Password => &TextWidget::PASSWORD,
        FieldKind::Number => &TextWidget::NUMBER,
        FieldKind::Textarea => &TextareaWidget,
        FieldKind::Select => &SelectWidget,
        FieldKind::Radio => &RadioWidget,
        FieldKind::Checkbox => &CheckboxWidget,
    }
}

pub fn draw_field(props: &WidgetProps) -> Vec<SpanLine> {
    widget(props.kind).draw(props)
}

pub fn handle_field_key(props: &WidgetProps, key: Key) -> WidgetResponse {
    if props.disabled {
        return WidgetResponse::Ignored;
    }
    widget(props.kind).handle_key(props, key)
}
