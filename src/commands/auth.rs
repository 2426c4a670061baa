use anyhow::{Context, Result};
use dialoguer::Input;
use owo_colors::OwoColorize;

use super::App;
use crate::auth::{LoginRequest, SessionCheck, SignupRequest};
use crate::router::{self, Route};

const MAX_LOGIN_ATTEMPTS: usize = 3;

/// Prompt for credentials and sign in. Returns the route to continue to.
pub async fn login(app: &mut App, email: Option<String>, from: Option<Route>) -> Result<Route> {
    let mut email = email;

    for attempt in 1..=MAX_LOGIN_ATTEMPTS {
        let address = match email.take() {
            Some(e) => e,
            None => Input::<String>::new()
                .with_prompt("  이메일")
                .interact_text()?,
        };
        let password = prompt_password("  비밀번호")?;

        let req = match LoginRequest::new(&address, &password) {
            Ok(req) => req,
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
                continue;
            }
        };

        match app.client.login(&mut app.session, &req).await {
            Ok(()) => {
                println!("{}", "로그인되었습니다.".green());
                return Ok(router::after_login(from));
            }
            Err(e) if attempt < MAX_LOGIN_ATTEMPTS => {
                eprintln!("  {}", e.to_string().red());
            }
            Err(e) => return Err(e),
        }
    }

    anyhow::bail!("로그인에 실패했습니다.")
}

/// Prompt for a new account and register it. Returns the route to continue to.
pub async fn signup(app: &mut App) -> Result<Route> {
    let req = loop {
        let name: String = Input::new()
            .with_prompt("  이름")
            .allow_empty(true)
            .interact_text()?;
        let email: String = Input::new()
            .with_prompt("  이메일")
            .allow_empty(true)
            .interact_text()?;
        let password = prompt_password("  비밀번호 (8자 이상)")?;

        match SignupRequest::new(name.trim(), email.trim(), &password) {
            Ok(req) => break req,
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    };

    app.client.signup(&req).await?;
    println!("{}", "회원가입 성공! 로그인 화면으로 이동합니다.".green());
    Ok(Route::Login)
}

pub async fn logout(app: &mut App) -> Result<()> {
    app.client.logout(&mut app.session).await?;
    println!("로그아웃되었습니다.");
    Ok(())
}

/// Report whether the stored session is still accepted.
pub async fn me(app: &mut App) -> Result<()> {
    if !app.session.has_token() {
        println!("{}", "Not signed in.".dimmed());
        return Ok(());
    }

    match app.verify_session().await? {
        SessionCheck::Valid => println!("{}", "Session is valid.".green()),
        SessionCheck::Invalid => println!("{}", "Session expired. Please log in again.".yellow()),
    }
    Ok(())
}

fn prompt_password(label: &str) -> Result<String> {
    let prompt = format!("{}: ", label);
    rpassword::prompt_password(&prompt).context("Failed to read password")
}
