use crate::error::AppError;
use axum::response::Html;
use chat_relay::ChatExchange;
use minijinja::{context, Environment};

static ADMIN_HTML: &str = include_str!("../templates/admin.html");
static INDEX_HTML: &str = include_str!("../templates/index.html");

/// Page templates, compiled once at startup.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.add_template("admin.html", ADMIN_HTML)?;
        env.add_template("index.html", INDEX_HTML)?;
        Ok(Self { env })
    }

    pub fn admin(&self, message: &str) -> Result<Html<String>, AppError> {
        let page = self
            .env
            .get_template("admin.html")?
            .render(context! { message })?;
        Ok(Html(page))
    }

    pub fn index(&self, exchange: &ChatExchange) -> Result<Html<String>, AppError> {
        let page = self.env.get_template("index.html")?.render(context! {
            user_message => &exchange.user_message,
            bot_response => &exchange.bot_response,
        })?;
        Ok(Html(page))
    }
}
