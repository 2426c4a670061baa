pub mod auth;
pub mod calendar;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::auth::{AuthClient, SessionCheck};
use crate::config::FamcalConfig;
use crate::router::{self, Resolution, Route};
use crate::session::Session;

/// Everything a command needs: loaded config, the session and a client.
pub struct App {
    pub config: FamcalConfig,
    pub session: Session,
    pub client: AuthClient,
}

impl App {
    pub fn load() -> Result<Self> {
        let config = FamcalConfig::load()?;
        let session = Session::load(config.session_file());
        let client = AuthClient::new(&config.api_url)?;

        Ok(App {
            config,
            session,
            client,
        })
    }

    /// Confirm a stored token with the auth service, once per run.
    pub async fn verify_session(&mut self) -> Result<SessionCheck> {
        if self.session.is_authenticated() {
            return Ok(SessionCheck::Valid);
        }
        if !self.session.has_token() {
            return Ok(SessionCheck::Invalid);
        }
        self.client.check_session(&mut self.session).await
    }
}

/// Navigate to `path` the way the app would, honoring the session guard.
pub async fn open(app: &mut App, path: &str, args: calendar::CalendarArgs) -> Result<()> {
    app.verify_session().await?;

    match router::resolve(path, &app.session) {
        Resolution::Render(Route::Landing) => {
            print_landing(app);
            Ok(())
        }
        Resolution::Render(Route::Login) => {
            let next = auth::login(app, None, None).await?;
            follow(app, next, args)
        }
        Resolution::Render(Route::Signup) => {
            let next = auth::signup(app).await?;
            if next == Route::Login {
                let next = auth::login(app, None, None).await?;
                return follow(app, next, args);
            }
            Ok(())
        }
        Resolution::Render(Route::Home) => calendar::run(app, args),
        Resolution::Redirect {
            to: Route::Login,
            from,
        } => {
            println!("{}", "로그인이 필요합니다.".yellow());
            let next = auth::login(app, None, from).await?;
            follow(app, next, args)
        }
        Resolution::Redirect { to, .. } => {
            tracing::debug!(%to, "redirected");
            print_landing(app);
            Ok(())
        }
    }
}

fn follow(app: &App, next: Route, args: calendar::CalendarArgs) -> Result<()> {
    match next {
        Route::Home => calendar::run(app, args),
        _ => Ok(()),
    }
}

fn print_landing(app: &App) {
    println!("{}", "famcal".bold());
    if app.session.is_authenticated() {
        println!("  Signed in. Run `famcal calendar` to open the family calendar.");
    } else {
        println!("  Run `famcal login` to sign in, or `famcal signup` to create an account.");
    }
}
