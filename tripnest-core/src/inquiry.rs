use chrono::{DateTime, Utc};
use serde::Deserialize;
use tripnest_shared::ContactMessage;

use crate::repository::ContactRepository;
use crate::{required, CoreResult};

#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Validates a contact form and appends it with a time-derived id.
pub async fn submit<R>(repo: &R, form: ContactForm, now: DateTime<Utc>) -> CoreResult<ContactMessage>
where
    R: ContactRepository + ?Sized,
{
    let name = required("name", form.name.as_deref())?;
    let email = required("email", form.email.as_deref())?;
    let message = required("message", form.message.as_deref())?;

    let contact = ContactMessage {
        id: now.timestamp_millis().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
        created_at: now,
    };

    repo.append_contact(contact.clone()).await?;
    tracing::info!("Stored contact message {}", contact.id);

    Ok(contact)
}
