use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{oneshot, Mutex, RwLock};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};
use nr_core::{
    ArticleRewriter, Credentials, Error, LogLevel, NewsSource, Publisher, Result, RewrittenArticle,
};

use crate::state::{AutomationState, AutomationStatus, ScheduleHandle};
use crate::Config;

/// Owner of the automation state machine.
///
/// Cheap to clone; every clone drives the same state. Status reads only take
/// the state lock briefly and are never held up by an in-flight cycle. Cycles
/// themselves run one at a time.
#[derive(Clone)]
pub struct AutomationController {
    inner: Arc<Inner>,
}

struct Inner {
    config: Config,
    news: Arc<dyn NewsSource>,
    rewriter: Arc<dyn ArticleRewriter>,
    publisher: Arc<dyn Publisher>,
    state: RwLock<AutomationState>,
    cycle_lock: Mutex<()>,
    generations: AtomicU64,
}

impl fmt::Debug for AutomationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutomationController")
            .field("config", &self.inner.config)
            .field("news", &self.inner.news.name())
            .field("rewriter", &self.inner.rewriter.name())
            .field("publisher", &self.inner.publisher.name())
            .finish()
    }
}

impl AutomationController {
    pub fn new(
        config: Config,
        news: Arc<dyn NewsSource>,
        rewriter: Arc<dyn ArticleRewriter>,
        publisher: Arc<dyn Publisher>,
    ) -> Result<Self> {
        config.validate()?;
        let state = AutomationState::new(config.log_capacity);
        Ok(Self {
            inner: Arc::new(Inner {
                config,
                news,
                rewriter,
                publisher,
                state: RwLock::new(state),
                cycle_lock: Mutex::new(()),
                generations: AtomicU64::new(0),
            }),
        })
    }

    /// Switch to running and arm the schedule.
    ///
    /// The first cycle fires right away in the background; later ones follow
    /// every `config.interval`, always with the credentials given here.
    pub async fn start(&self, credentials: Credentials) -> Result<()> {
        credentials.validate()?;

        let mut state = self.inner.state.write().await;
        if state.is_running() {
            return Err(Error::AlreadyRunning);
        }

        let generation = self.inner.generations.fetch_add(1, Ordering::SeqCst) + 1;
        let (cancel_tx, cancel_rx) = oneshot::channel();

        state.credentials = Some(credentials.clone());
        state.logs.push(LogLevel::Info, "Starting automation...");
        state.schedule = Some(ScheduleHandle::new(generation, cancel_tx));

        tokio::spawn(run_schedule(self.inner.clone(), generation, credentials, cancel_rx));
        info!(
            "▶️ Automation started (schedule {}, every {}s)",
            generation,
            self.inner.config.interval.as_secs()
        );
        Ok(())
    }

    /// Cancel the schedule and go idle.
    ///
    /// A cycle that is already executing is left to finish; no new one
    /// starts once this returns.
    pub async fn stop(&self) -> Result<()> {
        let mut state = self.inner.state.write().await;
        let handle = state.schedule.take().ok_or(Error::NotRunning)?;
        let generation = handle.generation();
        handle.cancel();
        state.logs.push(LogLevel::Info, "Stopping automation...");
        info!("⏹️ Automation stopped (schedule {})", generation);
        Ok(())
    }

    /// Run a single cycle now, independent of the schedule.
    pub async fn run_once(&self, credentials: Credentials) -> Result<RewrittenArticle> {
        credentials.validate()?;
        self.inner.log(LogLevel::Info, "Manual run triggered...").await;
        self.inner.run_cycle(&credentials, None).await
    }

    pub async fn status(&self) -> AutomationStatus {
        self.inner.state.read().await.snapshot()
    }

    pub async fn is_running(&self) -> bool {
        self.inner.state.read().await.is_running()
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}

impl Inner {
    async fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.state.write().await.logs.push(level, message);
    }

    /// Record a failed step and hand the error back.
    async fn fail(&self, error: Error) -> Error {
        self.log(LogLevel::Error, format!("An error occurred: {}", error)).await;
        error
    }

    /// One fetch → rewrite → publish attempt.
    ///
    /// Scheduled cycles pass their generation and bail out with
    /// [`Error::NotRunning`] if that schedule was cancelled meanwhile.
    async fn run_cycle(
        &self,
        credentials: &Credentials,
        generation: Option<u64>,
    ) -> Result<RewrittenArticle> {
        let _cycle = self.cycle_lock.lock().await;

        {
            let mut state = self.state.write().await;
            if let Some(generation) = generation {
                if !state.is_current(generation) {
                    debug!("Skipping tick of cancelled schedule {}", generation);
                    return Err(Error::NotRunning);
                }
            }
            state.logs.push(LogLevel::Info, "Starting cycle: fetching latest news...");
        }

        let article = self.news.fetch();
        self.log(LogLevel::Info, format!("Found article: \"{}\"", article.title)).await;

        self.log(LogLevel::Info, format!("Processing with {}...", self.rewriter.name())).await;
        let rewritten = match self
            .rewriter
            .rewrite(&article, self.config.api_key.as_deref())
            .await
        {
            Ok(rewritten) => rewritten,
            Err(e) => return Err(self.fail(e).await),
        };
        self.log(LogLevel::Info, "AI processing complete.").await;

        let channel = self.publisher.name();
        self.log(LogLevel::Info, format!("Sending to {} channel...", channel)).await;
        if let Err(e) = self.publisher.publish(credentials, &rewritten).await {
            return Err(self.fail(e).await);
        }

        let mut state = self.state.write().await;
        state.latest = Some(rewritten.clone());
        state.logs.push(LogLevel::Success, format!("Successfully published to {}.", channel));
        Ok(rewritten)
    }

    /// Stop on behalf of the schedule itself, unless a newer start already
    /// replaced it.
    async fn halt(&self, generation: u64, reason: &Error) {
        let mut state = self.state.write().await;
        if !state.is_current(generation) {
            return;
        }
        if let Some(handle) = state.schedule.take() {
            handle.cancel();
        }
        state.logs.push(LogLevel::Info, format!("Automation stopped: {}", reason));
        warn!("⏹️ Schedule {} halted: {}", generation, reason);
    }
}

async fn run_schedule(
    inner: Arc<Inner>,
    generation: u64,
    credentials: Credentials,
    mut cancel: oneshot::Receiver<()>,
) {
    let mut ticker = tokio::time::interval(inner.config.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = &mut cancel => break,
            _ = ticker.tick() => {}
        }

        match inner.run_cycle(&credentials, Some(generation)).await {
            Ok(_) => {}
            Err(Error::NotRunning) => break,
            // A missing key cannot fix itself; keep the schedule from spinning.
            Err(e @ Error::Configuration(_)) => {
                inner.halt(generation, &e).await;
                break;
            }
            Err(e) => debug!("Scheduled cycle failed, next attempt on the next tick: {}", e),
        }
    }
    debug!("Schedule {} finished", generation);
}
