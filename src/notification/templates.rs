//! HTML builders for outgoing notifications.
//!
//! Every notification type is a plain function producing an
//! [`EmailMessage`]; delivery always goes through the dispatcher's single
//! bounded send. The HTML itself is an opaque payload as far as the
//! dispatcher is concerned.

use crate::core::EmailMessage;

/// Subject line of the account-approval notification.
pub const APPROVAL_SUBJECT: &str = "Your account has been approved";

/// Builds the account-approval notification.
///
/// The body shows the recipient's login email and one-time password, warns
/// them to change the password after first login, and links to the login
/// page of the front-end at `frontend_base`.
pub fn approval_email(
    to: &str,
    first_name: &str,
    password: &str,
    frontend_base: &str,
) -> EmailMessage {
    let login_url = format!("{}/login", frontend_base.trim_end_matches('/'));
    let html = format!(
        r#"<!DOCTYPE html>
<html>
  <body style="margin:0;padding:0;background-color:#f4f4f7;font-family:Arial,Helvetica,sans-serif;">
    <div style="max-width:600px;margin:0 auto;padding:24px;">
      <div style="background-color:#1a73e8;color:#ffffff;padding:20px 24px;border-radius:8px 8px 0 0;">
        <h1 style="margin:0;font-size:22px;">Welcome aboard!</h1>
      </div>
      <div style="background-color:#ffffff;padding:24px;border-radius:0 0 8px 8px;">
        <p>Hi {first_name},</p>
        <p>Your account has been approved. You can now sign in with the credentials below:</p>
        <div style="background-color:#f4f4f7;border:1px solid #e0e0e0;border-radius:6px;padding:16px;margin:16px 0;">
          <p style="margin:4px 0;"><strong>Email:</strong> {to}</p>
          <p style="margin:4px 0;"><strong>Temporary password:</strong> {password}</p>
        </div>
        <p style="color:#b00020;"><strong>For your security, please change this password after your first login.</strong></p>
        <p style="text-align:center;margin:24px 0;">
          <a href="{login_url}" style="background-color:#1a73e8;color:#ffffff;text-decoration:none;padding:12px 28px;border-radius:6px;display:inline-block;">Log in to your account</a>
        </p>
        <p style="color:#6b6b76;font-size:12px;">If you did not request this account, you can ignore this email.</p>
      </div>
    </div>
  </body>
</html>"#
    );

    EmailMessage::new(to, APPROVAL_SUBJECT, html)
}
