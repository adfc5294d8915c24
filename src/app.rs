use crate::core::error::ConfigError;
use crate::core::form::{Form, FormConfig, SubmitOutcome};
use crate::core::manifest::{FormManifest, ManifestError};
use crate::data::{Resource, ResourceEvent};
use crate::forms::{DemoForm, format_cents, order_total_cents};
use crate::terminal::{Key, Terminal};
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use crate::widgets::button::SubmitButton;
use crate::widgets::dispatch::{draw_field, handle_field_key};
use crate::widgets::props::{WidgetProps, WidgetResponse};
use std::io;

enum Status {
    Info(String),
    Error(String),
}

/// Event-loop glue: one form, a focus cursor over its fields plus the submit
/// button, and optionally the background resource feeding its defaults.
pub struct FormApp {
    title: String,
    demo: Option<DemoForm>,
    form: Form,
    resource: Option<Resource>,
    focus: usize,
    status: Option<Status>,
    should_exit: bool,
}

impl FormApp {
    pub fn new(demo: DemoForm) -> Result<Self, ConfigError> {
        let mut app = Self::build(demo.title().to_string(), demo.config()?)?;
        app.demo = Some(demo);
        if let Some(source) = demo.data_source() {
            let mut resource = Resource::new();
            resource.start_fetch(move || source.fetch());
            app.resource = Some(resource);
        }
        Ok(app)
    }

    pub fn from_manifest(manifest: FormManifest) -> Result<Self, ManifestError> {
        let title = manifest.title.clone();
        let config = manifest.into_config()?;
        Ok(Self::build(title, config)?)
    }

    fn build(title: String, config: FormConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            title,
            demo: None,
            form: Form::new(config)?,
            resource: None,
            focus: 0,
            status: None,
            should_exit: false,
        })
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn is_busy(&self) -> bool {
        self.resource
            .as_ref()
            .is_some_and(|resource| resource.is_busy())
    }

    pub fn handle_key(&mut self, key: Key) {
        if key == Key::Esc {
            self.should_exit = true;
            return;
        }

        if self.focus < self.form.fields().len() {
            let busy = self.is_busy();
            let (name, response) = {
                let Some(view) = self.form.field_views().nth(self.focus) else {
                    return;
                };
                let props = WidgetProps::from_view(&view, true, busy);
                (
                    view.descriptor.name().to_string(),
                    handle_field_key(&props, key),
                )
            };
            match response {
                WidgetResponse::Changed(value) => {
                    let _ = self.form.set_value(&name, value);
                }
                WidgetResponse::Submit => self.focus_next(),
                WidgetResponse::Ignored => self.navigate(key),
            }
        } else if SubmitButton::activates(key, self.is_busy()) {
            self.submit();
        } else {
            self.navigate(key);
        }
    }

    fn navigate(&mut self, key: Key) {
        match key {
            Key::Tab | Key::Down | Key::Enter => self.focus_next(),
            Key::BackTab | Key::Up => self.focus_prev(),
            _ => {}
        }
    }

    fn focus_next(&mut self) {
        self.blur_current();
        self.focus = (self.focus + 1) % (self.form.fields().len() + 1);
    }

    fn focus_prev(&mut self) {
        self.blur_current();
        let stops = self.form.fields().len() + 1;
        self.focus = (self.focus + stops - 1) % stops;
    }

    /// Leaving a field marks it touched.
    fn blur_current(&mut self) {
        let name = self
            .form
            .fields()
            .get(self.focus)
            .map(|descriptor| descriptor.name().to_string());
        if let Some(name) = name {
            let _ = self.form.touch(&name);
        }
    }

    fn submit(&mut self) {
        self.status = None;
        let source = self.demo.and_then(DemoForm::data_source);
        let outcome = match (source, self.resource.as_mut()) {
            (Some(source), Some(resource)) => self.form.submit(|values| {
                resource.mutate(values.clone(), move |values| source.update(&values));
                Ok(())
            }),
            _ => self.form.submit(|_| Ok(())),
        };

        match outcome {
            SubmitOutcome::Submitted => {
                // Resource-backed forms report when the update drains.
                if source.is_none() {
                    self.status = Some(Status::Info(self.success_message()));
                }
            }
            SubmitOutcome::Invalid => {}
            SubmitOutcome::Failed(error) => {
                self.status = Some(Status::Error(error.message().to_string()));
            }
        }
    }

    fn success_message(&self) -> String {
        let message = self
            .demo
            .map(DemoForm::success_message)
            .unwrap_or("Submitted.");
        if self.demo == Some(DemoForm::Order) {
            let total = format_cents(order_total_cents(self.form.values()));
            return format!("{message} Total: {total}");
        }
        message.to_string()
    }

    /// Drain background completions. A finished fetch feeds the form's
    /// external defaults; a finished update reports its outcome.
    pub fn tick(&mut self) -> bool {
        let events = match self.resource.as_mut() {
            Some(resource) => resource.drain(),
            None => return false,
        };
        if events.is_empty() {
            return false;
        }

        for event in events {
            match event {
                ResourceEvent::Fetched => {
                    let data = self
                        .resource
                        .as_ref()
                        .and_then(|resource| resource.data())
                        .cloned();
                    if let Some(data) = data {
                        self.form.sync_external_defaults(&data);
                    }
                }
                ResourceEvent::FetchFailed(_) => {
                    self.status = Some(Status::Error(
                        "Failed to load user data. Please try again later.".to_string(),
                    ));
                }
                ResourceEvent::Updated => {
                    self.status = Some(Status::Info(self.success_message()));
                }
                ResourceEvent::UpdateFailed(message) => {
                    self.status = Some(Status::Error(message));
                }
            }
        }
        true
    }

    pub fn view(&self) -> Vec<SpanLine> {
        let busy = self.is_busy();
        let mut lines = vec![
            vec![Span::styled(self.title.as_str(), Style::new().bold())],
            Vec::new(),
        ];

        for (index, field) in self.form.field_views().enumerate() {
            let props = WidgetProps::from_view(&field, self.focus == index, busy);
            lines.extend(draw_field(&props));
            lines.push(Vec::new());
        }

        if self.demo == Some(DemoForm::Order) {
            lines.push(vec![
                Span::new("Total: "),
                Span::styled(
                    format_cents(order_total_cents(self.form.values())),
                    Style::new().color(Color::Green).bold(),
                ),
            ]);
            lines.push(Vec::new());
        }

        lines.push(SubmitButton::draw(
            self.form.submit_label(),
            self.focus == self.form.fields().len(),
            busy,
        ));

        if let Some(status) = &self.status {
            lines.push(Vec::new());
            lines.push(match status {
                Status::Info(message) => {
                    vec![Span::styled(message.as_str(), Style::new().color(Color::Green))]
                }
                Status::Error(message) => {
                    vec![Span::styled(message.as_str(), Style::new().color(Color::Red))]
                }
            });
        }

        lines.push(Vec::new());
        lines.push(vec![Span::styled(
            "Tab/↓ next · Shift-Tab/↑ back · Enter submit · Esc quit",
            Style::new().color(Color::Grey).dim(),
        )]);
        lines
    }

    pub fn render(&self, terminal: &mut Terminal) -> io::Result<()> {
        terminal.render_lines(&self.view())
    }
}

#[cfg(test)]
mod tests {
    use super::FormApp;
    use crate::forms::DemoForm;
    use crate::terminal::Key;

    fn type_text(app: &mut FormApp, text: &str) {
        for ch in text.chars() {
            app.handle_key(Key::Char(ch));
        }
    }

    fn tab(app: &mut FormApp) {
        app.handle_key(Key::Tab);
    }

    fn rendered(app: &FormApp) -> String {
        app.view()
            .iter()
            .flat_map(|line| line.iter())
            .map(|span| span.text.as_str())
            .collect()
    }

    #[test]
    fn registration_happy_path_reports_success() {
        let mut app = FormApp::new(DemoForm::Registration).unwrap();
        type_text(&mut app, "johnny");
        tab(&mut app);
        type_text(&mut app, "john@example.com");
        tab(&mut app);
        type_text(&mut app, "Abcd1234");
        tab(&mut app);
        type_text(&mut app, "Abcd1234");
        tab(&mut app);

        app.handle_key(Key::Enter);
        assert!(rendered(&app).contains("Registration successful!"));
        assert!(!app.form.has_errors());
    }

    #[test]
    fn empty_submission_shows_inline_errors() {
        let mut app = FormApp::new(DemoForm::Registration).unwrap();
        for _ in 0..4 {
            tab(&mut app);
        }
        app.handle_key(Key::Enter);

        assert!(app.form.has_errors());
        let output = rendered(&app);
        assert!(output.contains("Username is required"));
        assert!(!output.contains("Registration successful!"));
    }

    #[test]
    fn focus_wraps_past_the_submit_button() {
        let mut app = FormApp::new(DemoForm::Contact).unwrap();
        let stops = app.form.fields().len() + 1;
        for _ in 0..stops {
            tab(&mut app);
        }
        assert_eq!(app.focus, 0);

        app.handle_key(Key::Up);
        assert_eq!(app.focus, stops - 1);
    }

    #[test]
    fn escape_requests_exit() {
        let mut app = FormApp::new(DemoForm::Survey).unwrap();
        assert!(!app.should_exit());
        app.handle_key(Key::Esc);
        assert!(app.should_exit());
    }

    #[test]
    fn order_view_shows_a_running_total() {
        let mut app = FormApp::new(DemoForm::Order).unwrap();
        app.resource = None;
        app.form
            .set_value("product", crate::core::value::Value::text("p2"))
            .unwrap();

        assert!(rendered(&app).contains("$39.99"));
    }
}
