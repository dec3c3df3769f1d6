use fintrack_core::forms::FormState;
use fintrack_core::users::{LoginDraft, PasswordResetDraft, RegistrationDraft, UserServiceTrait};

use crate::app::App;

pub async fn login(app: &App, email: String, password: String) -> anyhow::Result<()> {
    let mut form = FormState::create(LoginDraft { email, password });
    let session = app.users.login(&mut form, &app.ctx()).await?;
    println!("Logged in as {} (user {})", session.display_name(), session.user_id);
    Ok(())
}

pub fn logout(app: &App) -> anyhow::Result<()> {
    app.users.logout()?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(app: &App) -> anyhow::Result<()> {
    match app.users.current_session()? {
        Some(session) => println!("{} (user {})", session.display_name(), session.user_id),
        None => println!("Not logged in"),
    }
    Ok(())
}

pub async fn register(
    app: &App,
    user_name: String,
    email: String,
    password: String,
    confirm_password: String,
) -> anyhow::Result<()> {
    let mut form = FormState::create(RegistrationDraft {
        user_name,
        email,
        password,
        confirm_password,
    });
    app.users.register(&mut form, &app.ctx()).await?;
    Ok(())
}

pub async fn forgot_password(app: &App, email: &str) -> anyhow::Result<()> {
    app.users.forgot_password(email).await?;
    Ok(())
}

pub async fn reset_password(app: &App, token: String, password: String) -> anyhow::Result<()> {
    let mut form = FormState::create(PasswordResetDraft { token, password });
    app.users.reset_password(&mut form, &app.ctx()).await?;
    Ok(())
}
