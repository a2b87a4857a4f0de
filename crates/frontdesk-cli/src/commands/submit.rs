use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use frontdesk_forms::{Config, FormSession};
use tracing::debug;

use crate::input::FormInput;
use crate::presenter::TerminalPresenter;

pub async fn execute(
    form: &str,
    input: &FormInput,
    endpoint: Option<&str>,
    config_path: Option<&Path>,
) -> Result<bool> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    super::lookup(form)?;

    let mut session = FormSession::from_config(form, &config)
        .await?
        .with_presenter(Arc::new(TerminalPresenter));
    if let Some(endpoint) = endpoint {
        session = session.with_endpoint(endpoint);
    }
    debug!(form, endpoint = session.endpoint(), "session ready");

    session.mount(input.query.as_deref().unwrap_or_default()).await;
    for (name, value) in &input.values {
        session.set_field(name, value.as_str()).await?;
    }
    for (name, attachment) in input.attachments()? {
        session.set_field(&name, attachment).await?;
    }

    let result = session.submit().await;
    Ok(result.is_success())
}
