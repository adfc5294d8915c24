pub mod button;
pub mod checkbox;
pub mod dispatch;
pub mod props;
pub mod radio;
pub mod select;
pub mod text;
pub mod textarea;

pub use button::SubmitButton;
pub use checkbox::CheckboxWidget;
pub use dispatch::{Widget, draw_field, handle_field_key, widget};
pub use props::{WidgetProps, WidgetResponse};
pub use radio::RadioWidget;
pub use select::SelectWidget;
pub use text::{TextMode, TextWidget};
pub use textarea::TextareaWidget;
