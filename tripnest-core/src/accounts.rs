//! Registration and login against the user collection.
//!
//! Passwords are compared as stored. The duplicate-email check is a scan
//! followed by an append with no lock held in between, so two concurrent
//! registrations for the same address can both succeed.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tripnest_shared::{Masked, PublicUser, UserAccount};

use crate::repository::UserRepository;
use crate::{required, CoreError, CoreResult};

#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<Masked<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<Masked<String>>,
}

pub async fn register<R>(repo: &R, form: RegisterForm, now: DateTime<Utc>) -> CoreResult<PublicUser>
where
    R: UserRepository + ?Sized,
{
    let name = required("name", form.name.as_deref())?;
    let email = required("email", form.email.as_deref())?;
    let password = required("password", form.password.as_ref().map(|p| p.expose().as_str()))?;

    let users = repo.list_users().await;
    if users.iter().any(|u| u.email == email) {
        tracing::info!("Registration rejected, email already in use");
        return Err(CoreError::DuplicateEmail);
    }

    let user = UserAccount {
        id: format!("u{}", now.timestamp_millis()),
        name: name.to_string(),
        email: email.to_string(),
        password: Masked(password.to_string()),
    };
    let public = user.to_public();

    repo.append_user(user).await?;
    tracing::info!("Registered user {}", public.id);

    Ok(public)
}

pub async fn login<R>(repo: &R, form: LoginForm) -> CoreResult<PublicUser>
where
    R: UserRepository + ?Sized,
{
    let email = required("email", form.email.as_deref())?;
    let password = required("password", form.password.as_ref().map(|p| p.expose().as_str()))?;

    repo.list_users()
        .await
        .iter()
        .find(|u| u.email == email && u.password.expose() == password)
        .map(UserAccount::to_public)
        .ok_or(CoreError::InvalidCredentials)
}
