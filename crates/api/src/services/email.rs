//! Email service for booking notifications.
//!
//! Providers:
//! - `console`: logs emails (development)
//! - `smtp`: sends via SMTP (lettre)
//!
//! Booking emails are best-effort: the caller logs failures and never rolls
//! back the booking state change that triggered them.

use chrono::{DateTime, Utc};
use domain::models::TicketStatus;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::config::EmailConfig;

/// Errors that can occur during email operations.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Email service not configured")]
    NotConfigured,

    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Failed to send email: {0}")]
    SendFailed(String),
}

/// Email message to be sent.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub to_name: Option<String>,
    pub subject: String,
    pub body_text: String,
    pub body_html: Option<String>,
}

/// Everything a booking email template needs.
#[derive(Debug, Clone)]
pub struct BookingEmailData {
    pub customer_name: String,
    pub customer_email: String,
    pub booking_reference: String,
    pub event_title: String,
    pub event_location: Option<String>,
    pub event_date: DateTime<Utc>,
    pub number_of_participants: i32,
    pub total_price: f64,
    pub payment_method: Option<String>,
    pub status: TicketStatus,
}

/// Email service for transactional booking mail.
#[derive(Clone)]
pub struct EmailService {
    config: Arc<EmailConfig>,
    smtp: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl EmailService {
    /// Creates a new EmailService, building the SMTP transport up front when
    /// that provider is configured.
    pub fn new(config: EmailConfig) -> Self {
        let smtp = if config.enabled && config.provider == "smtp" && !config.smtp_host.is_empty() {
            match AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host) {
                Ok(builder) => Some(
                    builder
                        .port(config.smtp_port)
                        .credentials(Credentials::new(
                            config.smtp_username.clone(),
                            config.smtp_password.clone(),
                        ))
                        .build(),
                ),
                Err(e) => {
                    error!(host = %config.smtp_host, error = %e, "Invalid SMTP relay host");
                    None
                }
            }
        } else {
            None
        };

        Self {
            config: Arc::new(config),
            smtp,
        }
    }

    /// Check if email sending is enabled.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Send an email message via the configured provider.
    pub async fn send(&self, message: EmailMessage) -> Result<(), EmailError> {
        if !self.config.enabled {
            debug!(
                to = %message.to,
                subject = %message.subject,
                "Email service disabled, skipping send"
            );
            return Ok(());
        }

        match self.config.provider.as_str() {
            "console" => self.send_console(message).await,
            "smtp" => self.send_smtp(message).await,
            provider => {
                error!(provider = %provider, "Unknown email provider");
                Err(EmailError::NotConfigured)
            }
        }
    }

    /// Send the status email for a booking: the confirmation template for a
    /// confirmed ticket, the pending-received template otherwise.
    pub async fn send_booking_status_email(
        &self,
        data: &BookingEmailData,
    ) -> Result<(), EmailError> {
        let (subject, body_html) = match data.status {
            TicketStatus::Confirmed => (
                format!("Booking Confirmed - {}", data.booking_reference),
                confirmed_template(data),
            ),
            _ => (
                format!("Booking Received - {}", data.booking_reference),
                pending_template(data),
            ),
        };

        let message = EmailMessage {
            to: data.customer_email.clone(),
            to_name: Some(data.customer_name.clone()),
            subject,
            body_text: plain_text_body(data),
            body_html: Some(body_html),
        };

        self.send(message).await
    }

    /// Console provider - logs email to the application log (development).
    async fn send_console(&self, message: EmailMessage) -> Result<(), EmailError> {
        info!(
            to = %message.to,
            to_name = ?message.to_name,
            subject = %message.subject,
            from = %self.config.sender_email,
            "Email (console provider)"
        );
        info!(body_text = %message.body_text, "Email body (plain text)");
        Ok(())
    }

    /// SMTP provider - sends via the configured relay.
    async fn send_smtp(&self, message: EmailMessage) -> Result<(), EmailError> {
        let transport = self.smtp.as_ref().ok_or(EmailError::NotConfigured)?;

        let from = Mailbox::new(
            Some(self.config.sender_name.clone()),
            self.config
                .sender_email
                .parse()
                .map_err(|_| EmailError::InvalidAddress(self.config.sender_email.clone()))?,
        );
        let to = Mailbox::new(
            message.to_name.clone(),
            message
                .to
                .parse()
                .map_err(|_| EmailError::InvalidAddress(message.to.clone()))?,
        );

        let html = message
            .body_html
            .unwrap_or_else(|| message.body_text.clone());

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(message.body_text, html))
            .map_err(|e| EmailError::SendFailed(e.to_string()))?;

        transport
            .send(email)
            .await
            .map_err(|e| EmailError::SendFailed(e.to_string()))?;

        info!(to = %message.to, subject = %message.subject, "Email sent via SMTP");
        Ok(())
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn format_price(price: f64) -> String {
    format!("{:.2} MAD", price)
}

fn payment_method_label(method: Option<&str>) -> &str {
    match method {
        Some("card") => "Credit/Debit Card",
        Some("cash") => "Cash",
        Some(other) => other,
        None => "Not specified",
    }
}

fn plain_text_body(data: &BookingEmailData) -> String {
    let headline = match data.status {
        TicketStatus::Confirmed => "Your booking is confirmed. We look forward to seeing you!",
        _ => "We have received your booking and will confirm it shortly.",
    };

    format!(
        r#"Dear {name},

{headline}

Booking Details
---------------
Booking Reference: {reference}
Event: {title}
Date: {date}
Number of Participants: {participants}
Payment Method: {payment}
Total Amount: {total}

If you have any questions about your booking, please don't hesitate to contact us.

Best regards,
The Journey Association Team"#,
        name = data.customer_name,
        headline = headline,
        reference = data.booking_reference,
        title = data.event_title,
        date = format_date(&data.event_date),
        participants = data.number_of_participants,
        payment = payment_method_label(data.payment_method.as_deref()),
        total = format_price(data.total_price),
    )
}

fn details_table(data: &BookingEmailData) -> String {
    let location_row = data
        .event_location
        .as_deref()
        .map(|location| {
            format!(
                r#"<tr>
                    <td style="color: #666666; font-size: 14px;">Location:</td>
                    <td style="color: #112250; font-size: 14px;">{}</td>
                  </tr>"#,
                location
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div style="background-color: #f8f9fa; border-radius: 8px; padding: 25px; margin: 25px 0;">
  <h2 style="color: #112250; margin: 0 0 20px 0; font-size: 20px; border-bottom: 2px solid #D8C18D; padding-bottom: 10px;">Booking Details</h2>
  <table width="100%" cellpadding="8" cellspacing="0">
    <tr>
      <td style="color: #666666; font-size: 14px; width: 40%;">Booking Reference:</td>
      <td style="color: #112250; font-size: 14px; font-weight: bold;">{reference}</td>
    </tr>
    <tr>
      <td style="color: #666666; font-size: 14px;">Event:</td>
      <td style="color: #112250; font-size: 14px; font-weight: bold;">{title}</td>
    </tr>
    <tr>
      <td style="color: #666666; font-size: 14px;">Date:</td>
      <td style="color: #112250; font-size: 14px;">{date}</td>
    </tr>
    {location_row}
    <tr>
      <td style="color: #666666; font-size: 14px;">Number of Participants:</td>
      <td style="color: #112250; font-size: 14px;">{participants}</td>
    </tr>
    <tr>
      <td style="color: #666666; font-size: 14px;">Payment Method:</td>
      <td style="color: #112250; font-size: 14px;">{payment}</td>
    </tr>
    <tr>
      <td style="color: #666666; font-size: 14px;">Total Amount:</td>
      <td style="color: #112250; font-size: 18px; font-weight: bold;">{total}</td>
    </tr>
  </table>
</div>"#,
        reference = data.booking_reference,
        title = data.event_title,
        date = format_date(&data.event_date),
        location_row = location_row,
        participants = data.number_of_participants,
        payment = payment_method_label(data.payment_method.as_deref()),
        total = format_price(data.total_price),
    )
}

fn email_shell(heading: &str, inner: String) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{heading}</title>
</head>
<body style="margin: 0; padding: 0; font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background-color: #f4f4f4;">
  <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #f4f4f4; padding: 20px;">
    <tr>
      <td align="center">
        <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 10px; overflow: hidden;">
          <tr>
            <td style="background: linear-gradient(135deg, #112250 0%, #1a3366 100%); padding: 40px; text-align: center;">
              <h1 style="color: #ffffff; margin: 0; font-size: 28px;">{heading}</h1>
              <p style="color: #D8C18D; margin: 10px 0 0 0; font-size: 16px;">The Journey Association</p>
            </td>
          </tr>
          <tr>
            <td style="padding: 40px;">
{inner}
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>"#,
        heading = heading,
        inner = inner,
    )
}

fn confirmed_template(data: &BookingEmailData) -> String {
    let inner = format!(
        r#"<p style="color: #333333; font-size: 16px; margin: 0 0 20px 0;">Dear {name},</p>
<p style="color: #333333; font-size: 16px; margin: 0 0 20px 0;">
  Thank you for your booking! We are pleased to confirm your reservation. Your payment has been successfully processed.
</p>
{details}
<div style="background-color: #e8f5e9; border-left: 4px solid #4caf50; padding: 15px; margin: 25px 0;">
  <p style="color: #2e7d32; margin: 0; font-size: 14px;">
    <strong>Status: Confirmed</strong><br>
    Your booking is confirmed. We look forward to seeing you!
  </p>
</div>
<p style="color: #333333; font-size: 16px; margin: 25px 0 0 0;">
  Best regards,<br>
  <strong>The Journey Association Team</strong>
</p>"#,
        name = data.customer_name,
        details = details_table(data),
    );
    email_shell("Booking Confirmed!", inner)
}

fn pending_template(data: &BookingEmailData) -> String {
    let inner = format!(
        r#"<p style="color: #333333; font-size: 16px; margin: 0 0 20px 0;">Dear {name},</p>
<p style="color: #333333; font-size: 16px; margin: 0 0 20px 0;">
  Thank you for your booking! We have received your reservation and will confirm it shortly.
</p>
{details}
<div style="background-color: #fff8e1; border-left: 4px solid #ffb300; padding: 15px; margin: 25px 0;">
  <p style="color: #8d6e00; margin: 0; font-size: 14px;">
    <strong>Status: Pending</strong><br>
    We will send a confirmation email once your booking is processed.
  </p>
</div>
<p style="color: #333333; font-size: 16px; margin: 25px 0 0 0;">
  Best regards,<br>
  <strong>The Journey Association Team</strong>
</p>"#,
        name = data.customer_name,
        details = details_table(data),
    );
    email_shell("Booking Received", inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_data(status: TicketStatus) -> BookingEmailData {
        BookingEmailData {
            customer_name: "Amina B".to_string(),
            customer_email: "amina@example.com".to_string(),
            booking_reference: "BKG-1718800000000-A1B2C3".to_string(),
            event_title: "Toubkal Ascent".to_string(),
            event_location: Some("Imlil".to_string()),
            event_date: Utc.with_ymd_and_hms(2025, 6, 21, 8, 0, 0).unwrap(),
            number_of_participants: 2,
            total_price: 2400.0,
            payment_method: Some("card".to_string()),
            status,
        }
    }

    #[test]
    fn test_confirmed_template_contents() {
        let html = confirmed_template(&sample_data(TicketStatus::Confirmed));
        assert!(html.contains("Booking Confirmed!"));
        assert!(html.contains("BKG-1718800000000-A1B2C3"));
        assert!(html.contains("Toubkal Ascent"));
        assert!(html.contains("Imlil"));
        assert!(html.contains("Credit/Debit Card"));
        assert!(html.contains("2400.00 MAD"));
    }

    #[test]
    fn test_pending_template_contents() {
        let html = pending_template(&sample_data(TicketStatus::Pending));
        assert!(html.contains("Booking Received"));
        assert!(html.contains("Status: Pending"));
    }

    #[test]
    fn test_location_row_omitted_when_absent() {
        let mut data = sample_data(TicketStatus::Confirmed);
        data.event_location = None;
        let html = confirmed_template(&data);
        assert!(!html.contains("Location:"));
    }

    #[test]
    fn test_plain_text_mentions_reference() {
        let text = plain_text_body(&sample_data(TicketStatus::Pending));
        assert!(text.contains("BKG-1718800000000-A1B2C3"));
        assert!(text.contains("will confirm it shortly"));
    }

    #[test]
    fn test_format_date_is_human_readable() {
        let date = Utc.with_ymd_and_hms(2025, 6, 21, 8, 0, 0).unwrap();
        assert_eq!(format_date(&date), "Saturday, June 21, 2025");
    }

    #[test]
    fn test_payment_method_labels() {
        assert_eq!(payment_method_label(Some("card")), "Credit/Debit Card");
        assert_eq!(payment_method_label(Some("cash")), "Cash");
        assert_eq!(payment_method_label(Some("paypal")), "paypal");
        assert_eq!(payment_method_label(None), "Not specified");
    }

    #[tokio::test]
    async fn test_disabled_service_short_circuits() {
        let service = EmailService::new(EmailConfig::default());
        let message = EmailMessage {
            to: "amina@example.com".to_string(),
            to_name: None,
            subject: "Test".to_string(),
            body_text: "body".to_string(),
            body_html: None,
        };
        assert!(service.send(message).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_provider_errors() {
        let config = EmailConfig {
            enabled: true,
            provider: "carrier-pigeon".to_string(),
            ..Default::default()
        };
        let service = EmailService::new(config);
        let message = EmailMessage {
            to: "amina@example.com".to_string(),
            to_name: None,
            subject: "Test".to_string(),
            body_text: "body".to_string(),
            body_html: None,
        };
        assert!(matches!(
            service.send(message).await,
            Err(EmailError::NotConfigured)
        ));
    }
}
