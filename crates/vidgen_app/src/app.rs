use std::sync::{mpsc, Arc};
use std::time::Duration;

use anyhow::{anyhow, Context};
use engine_logging::engine_info;
use vidgen_core::{update, AppState, AppViewModel, Msg, Phase};
use vidgen_engine::{ClientSettings, StaticCatalog};

use crate::effects::EffectRunner;
use crate::{logging, Cli};

/// Blocking session loop: dispatches intents into the core, runs the
/// resulting effects, and prints the view model until a terminal phase.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(cli.log);
    engine_info!("starting session against {}", cli.server);

    let mut settings = ClientSettings {
        base_url: cli.server.clone(),
        ..ClientSettings::default()
    };
    if let Some(secs) = cli.timeout_secs {
        settings.request_timeout = Duration::from_secs(secs);
    }

    let (msg_tx, msg_rx) = mpsc::channel();
    let runner = EffectRunner::new(
        msg_tx.clone(),
        settings,
        Arc::new(StaticCatalog::built_in()),
    );

    let mut state = AppState::new();
    let mut submitted = false;

    let _ = msg_tx.send(Msg::SessionStarted);

    loop {
        match msg_rx.recv_timeout(Duration::from_millis(20)) {
            Ok(msg) => {
                let catalog_loaded = matches!(msg, Msg::CatalogLoaded { .. });
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.enqueue(effects);

                // The CLI selection may reference catalog entries, so it is
                // applied once the catalog lists have arrived.
                if catalog_loaded && !submitted {
                    queue_selection(&cli, &state, &msg_tx)?;
                    submitted = true;
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                return Err(anyhow!("message channel closed"));
            }
        }

        runner.poll();

        if state.consume_dirty() {
            render(&state.view());
        }

        if submitted
            && matches!(
                state.phase(),
                Phase::Completed | Phase::Processing | Phase::Error
            )
        {
            break;
        }
    }

    if state.phase() == Phase::Error {
        return Err(anyhow!(state.view().error_message));
    }
    Ok(())
}

fn queue_selection(cli: &Cli, state: &AppState, msg_tx: &mpsc::Sender<Msg>) -> anyhow::Result<()> {
    if let Some(path) = &cli.image {
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading image {}", path.display()))?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("image")
            .to_string();
        let _ = msg_tx.send(Msg::ImageUploaded { bytes, filename });
    } else if let Some(id) = &cli.image_id {
        let _ = msg_tx.send(Msg::CatalogImageSelected { id: id.clone() });
    }

    if let Some(text) = &cli.text {
        let _ = msg_tx.send(Msg::TextChanged { text: text.clone() });
    } else if let Some(index) = cli.template {
        let view = state.view();
        let text = view
            .templates
            .get(index)
            .ok_or_else(|| {
                anyhow!(
                    "template index {index} out of range ({} available)",
                    view.templates.len()
                )
            })?
            .clone();
        let _ = msg_tx.send(Msg::TemplateSelected { text });
    }

    let _ = msg_tx.send(Msg::SubmitClicked);
    Ok(())
}

fn render(view: &AppViewModel) {
    if !view.status_message.is_empty() {
        println!("{}", view.status_message);
    }
    if !view.error_message.is_empty() {
        eprintln!("Error: {}", view.error_message);
    }
    if !view.video_url.is_empty() {
        println!("Video available at {}", view.video_url);
    }
}
