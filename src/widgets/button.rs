use crate::terminal::Key;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};

/// The submit control. Its disabled state is driven entirely by the
/// caller-supplied loading flag; the form never computes it internally.
pub struct SubmitButton;

impl SubmitButton {
    pub fn draw(label: &str, focused: bool, loading: bool) -> SpanLine {
        if loading {
            return vec![Span::styled("Loading...", Style::new().color(Color::Grey).dim())];
        }
        let style = if focused {
            Style::new().color(Color::White).background(Color::Blue).bold()
        } else {
            Style::new().color(Color::Grey)
        };
        vec![Span::styled(format!("[ {label} ]"), style)]
    }

    pub fn activates(key: Key, loading: bool) -> bool {
        !loading && matches!(key, Key::Enter | Key::Char(' '))
    }
}

#[cfg(test)]
mod tests {
    use super::SubmitButton;
    use crate::terminal::Key;

    #[test]
    fn loading_disables_activation() {
        assert!(SubmitButton::activates(Key::Enter, false));
        assert!(!SubmitButton::activates(Key::Enter, true));
        assert!(!SubmitButton::activates(Key::Char('x'), false));
    }

    #[test]
    fn loading_replaces_the_label() {
        let line = SubmitButton::draw("Register", true, true);
        assert_eq!(line[0].text, "Loading...");

        let line = SubmitButton::draw("Register", true, false);
        assert_eq!(line[0].text, "[ Register ]");
    }
}
