use std::future::Future;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use ruen_types::AppEvent;
use tokio::io::{AsyncBufRead, BufReader};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::read_input;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(16),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Event, output and prompt tasks reading from stdin
    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        self.spawn_with_input(BufReader::new(tokio::io::stdin()))
    }

    pub fn spawn_with_input<R>(&self, input: R) -> JoinSet<anyhow::Result<()>>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        let mut tasks = JoinSet::new();

        // Event loop, cancels everything itself once `Quit` is handled
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.clone(),
        ));

        // Output
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.cancel_token.clone(),
        ));

        // Prompt
        tasks.spawn(read_input(
            input,
            self.cancel_token.child_token(),
            self.channels.ui_to_app.0.clone(),
        ));

        tasks
    }

    /// Wait for every task. `shutdown_signal` or a failing task stops the rest;
    /// a task that finishes cleanly (the prompt at end of input) stops nothing.
    pub async fn run(
        &self,
        mut tasks: JoinSet<anyhow::Result<()>>,
        shutdown_signal: impl Future<Output = ()>,
    ) {
        tokio::pin!(shutdown_signal);

        loop {
            tokio::select! {
                _ = &mut shutdown_signal, if !self.is_shutting_down() => {
                    tracing::info!("Shutdown requested");
                    self.shutdown();
                }
                finished = tasks.join_next() => {
                    let Some(finished) = finished else {
                        break;
                    };

                    match finished {
                        Ok(Ok(())) => {}
                        Ok(Err(e)) => {
                            tracing::error!("Task exited with error: {}", e);
                            self.shutdown();
                        }
                        Err(e) => {
                            tracing::error!("Task panicked: {}", e);
                            self.shutdown();
                        }
                    }
                }
            }
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
