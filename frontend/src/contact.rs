//! Contact form model and delivery through Brevo's transactional e-mail API.

use chrono::{DateTime, Utc};
use chrono_tz::America::Argentina::Buenos_Aires;
use gloo_net::http::Request;
use log::{debug, error, info};
use serde::Serialize;
use thiserror::Error;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nombre",
            Field::Email => "Email",
            Field::Subject => "Asunto",
            Field::Message => "Mensaje",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("el formulario tiene {} campo(s) inválido(s)", .0.len())]
    Invalid(Vec<FieldError>),
    #[error("el envío de correos no está configurado")]
    NotConfigured,
    #[error("error de red: {0}")]
    Network(String),
    #[error("Brevo respondió {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl ContactError {
    /// Message shown next to the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            ContactError::Invalid(_) => "Revisá los campos marcados.",
            _ => "Error al enviar el email. Por favor, intenta nuevamente.",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

fn looks_like_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !value.contains(char::is_whitespace)
                && domain.split('.').count() >= 2
                && domain.split('.').all(|label| !label.is_empty())
        }
        _ => false,
    }
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            if self.get(field).trim().is_empty() {
                errors.push(FieldError {
                    field,
                    message: "Este campo es obligatorio",
                });
            }
        }
        let email = self.email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            errors.push(FieldError {
                field: Field::Email,
                message: "Ingresá un email válido",
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Local Buenos Aires time, in the `d/m/yyyy, hh:mm:ss` shape Argentine
/// browsers print.
pub fn format_sent_at(sent_at: DateTime<Utc>) -> String {
    sent_at
        .with_timezone(&Buenos_Aires)
        .format("%-d/%-m/%Y, %H:%M:%S")
        .to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmailMessage {
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl EmailMessage {
    pub fn from_form(form: &ContactForm, sent_at: DateTime<Utc>) -> Self {
        let date = format_sent_at(sent_at);
        let field = |label: &str, value: &str| {
            format!(
                r#"<div class="field"><div class="field-label">{}:</div><div class="field-value">{}</div></div>"#,
                label, value
            )
        };
        let message_html = escape_html(form.message.trim()).replace('\n', "<br>");

        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Nuevo mensaje de contacto - SurCode</title>
<style>
body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
.container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
.header {{ background: linear-gradient(135deg, #66d3fa, #ffd26f); padding: 20px; border-radius: 8px; }}
.header h1 {{ color: #fff; margin: 0; text-align: center; }}
.content {{ background: #f9f9f9; padding: 20px; border-radius: 8px; margin-top: 20px; }}
.field {{ margin-bottom: 15px; }}
.field-label {{ font-weight: bold; color: #66d3fa; }}
.footer {{ text-align: center; margin-top: 20px; color: #666; font-size: 14px; }}
</style>
</head>
<body>
<div class="container">
<div class="header"><h1>Nuevo Mensaje de Contacto</h1></div>
<div class="content">{}{}{}{}</div>
<div class="footer">
<p>Este mensaje fue enviado desde el formulario de contacto de SurCode</p>
<p>Fecha: {}</p>
</div>
</div>
</body>
</html>"#,
            field(Field::Name.label(), &escape_html(form.name.trim())),
            field(Field::Email.label(), &escape_html(form.email.trim())),
            field(Field::Subject.label(), &escape_html(form.subject.trim())),
            field(Field::Message.label(), &message_html),
            date,
        );

        let text = format!(
            "Nuevo mensaje de contacto - SurCode\n\n\
             Nombre: {}\nEmail: {}\nAsunto: {}\n\n\
             Mensaje:\n{}\n\n---\n\
             Enviado desde el formulario de contacto de SurCode\nFecha: {}\n",
            form.name.trim(),
            form.email.trim(),
            form.subject.trim(),
            form.message.trim(),
            date,
        );

        Self {
            subject: format!("Nuevo mensaje de contacto: {}", form.subject.trim()),
            html,
            text,
        }
    }
}

#[derive(Serialize)]
struct Contact<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoEmail<'a> {
    sender: Contact<'a>,
    to: [Contact<'a>; 1],
    reply_to: Contact<'a>,
    subject: &'a str,
    html_content: &'a str,
    text_content: &'a str,
}

fn brevo_payload<'a>(
    form: &'a ContactForm,
    message: &'a EmailMessage,
    recipient: &'a str,
) -> BrevoEmail<'a> {
    BrevoEmail {
        sender: Contact {
            name: config::CONTACT_SENDER_NAME,
            email: config::contact_sender(),
        },
        to: [Contact {
            name: "SurCode Team",
            email: recipient,
        }],
        reply_to: Contact {
            name: form.name.trim(),
            email: form.email.trim(),
        },
        subject: &message.subject,
        html_content: &message.html,
        text_content: &message.text,
    }
}

pub async fn send(form: &ContactForm) -> Result<(), ContactError> {
    form.validate().map_err(ContactError::Invalid)?;

    let (api_key, recipient) = match (config::brevo_api_key(), config::contact_recipient()) {
        (Some(key), Some(recipient)) => (key, recipient),
        _ => {
            error!("Brevo API key or recipient missing, cannot send contact form");
            return Err(ContactError::NotConfigured);
        }
    };

    let message = EmailMessage::from_form(form, Utc::now());
    let payload = brevo_payload(form, &message, recipient);

    debug!("Sending contact form for {}", form.email.trim());
    let response = Request::post(config::BREVO_API_URL)
        .header("api-key", api_key)
        .header("accept", "application/json")
        .json(&payload)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    if response.ok() {
        info!("Contact form delivered");
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!("Brevo rejected contact form: {} {}", status, body);
        Err(ContactError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            subject: "Presupuesto".into(),
            message: "Hola\n<b>equipo</b>".into(),
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Subject, Field::Message]);
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["ana", "ana@", "@example.com", "ana@example", "a b@example.com", "a@b@c.com"] {
            let mut form = filled();
            form.email = bad.into();
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.len(), 1, "{}", bad);
            assert_eq!(errors[0].field, Field::Email);
        }
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn message_is_escaped_with_line_breaks() {
        let sent_at = Utc.with_ymd_and_hms(2025, 7, 10, 17, 5, 9).unwrap();
        let message = EmailMessage::from_form(&filled(), sent_at);
        assert_eq!(message.subject, "Nuevo mensaje de contacto: Presupuesto");
        assert!(message.html.contains("Hola<br>&lt;b&gt;equipo&lt;/b&gt;"));
        assert!(!message.html.contains("<b>equipo"));
        assert!(message.text.contains("Hola\n<b>equipo</b>"));
    }

    #[test]
    fn payload_uses_brevo_field_names() {
        let form = filled();
        let message = EmailMessage::from_form(&form, Utc.with_ymd_and_hms(2025, 7, 10, 12, 0, 0).unwrap());
        let json = serde_json::to_value(brevo_payload(&form, &message, "team@surcode.dev")).unwrap();
        assert_eq!(json["sender"]["name"], "SurCode Contact Form");
        assert_eq!(json["to"][0]["email"], "team@surcode.dev");
        assert_eq!(json["replyTo"]["email"], "ana@example.com");
        assert_eq!(json["subject"], "Nuevo mensaje de contacto: Presupuesto");
        assert!(json["htmlContent"].as_str().unwrap().contains("Presupuesto"));
        assert!(json["textContent"].is_string());
    }

    #[test]
    fn timestamp_uses_buenos_aires_time() {
        let sent_at = Utc.with_ymd_and_hms(2025, 7, 10, 2, 5, 9).unwrap();
        assert_eq!(format_sent_at(sent_at), "9/7/2025, 23:05:09");
    }
}
