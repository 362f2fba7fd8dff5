// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deferred emission: the pre_log/post_log scheduler.
//!
//! `pre_log` registers an event with a lazily-spawned background watcher
//! thread. If the watcher reaches the event's deadline and the handle has
//! not been cancelled, it emits the event with a `[TIMEOUT]` marker;
//! `post_log` cancels the deferred emission and emits immediately.
//!
//! The cancelled flag is read exactly once, at fire time. If `post_log`
//! runs after the watcher has already read a clear flag, both the timeout
//! line and the immediate line are emitted; that race is inherent to the
//! fire-and-forget design and a duplicate line is the worst possible
//! outcome.

use crate::event::LogEvent;
use crate::logger::Logger;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending {
    id: u64,
    deadline: Instant,
    event: Arc<LogEvent>,
    cancelled: Arc<AtomicBool>,
    logger: Logger,
}

enum Message {
    Register(Pending),
    Cancelled(u64),
}

static CHANNEL: OnceLock<mpsc::Sender<Message>> = OnceLock::new();
static DEFERRED_ID: AtomicU64 = AtomicU64::new(1);

fn channel() -> mpsc::Sender<Message> {
    CHANNEL
        .get_or_init(|| {
            let (tx, rx) = mpsc::channel();
            // Ignore spawn failures; a missing watcher only costs timeout lines.
            let _ = std::thread::Builder::new()
                .name("loglater-deferred".to_string())
                .spawn(move || watcher_loop(rx));
            tx
        })
        .clone()
}

/// Handle to a scheduled deferred emission.
///
/// Created by [`Logger::pre_log`]; consumed by [`Logger::post_log`], the
/// only exposed cancellation path (cancel always precedes an immediate
/// emission).
#[derive(Debug)]
pub struct DeferredLog {
    id: u64,
    event: Arc<LogEvent>,
    cancelled: Arc<AtomicBool>,
}

impl DeferredLog {
    pub(crate) fn schedule(logger: Logger, event: LogEvent, delay: Duration) -> Self {
        let id = DEFERRED_ID.fetch_add(1, Ordering::Relaxed);
        let event = Arc::new(event);
        let cancelled = Arc::new(AtomicBool::new(false));

        let pending = Pending {
            id,
            deadline: Instant::now() + delay,
            event: event.clone(),
            cancelled: cancelled.clone(),
            logger,
        };
        // Ignore send failures so scheduling stays infallible during shutdown.
        let _ = channel().send(Message::Register(pending));

        Self {
            id,
            event,
            cancelled,
        }
    }

    /// Cancels the deferred emission. Idempotent; the flag transitions
    /// false→true at most once.
    pub(crate) fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            let _ = channel().send(Message::Cancelled(self.id));
        }
    }

    /// Whether the deferred emission has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub(crate) fn event(&self) -> &LogEvent {
        &self.event
    }
}

fn watcher_loop(receiver: mpsc::Receiver<Message>) {
    let mut pending: HashMap<u64, Pending> = HashMap::new();
    loop {
        let now = Instant::now();
        let timeout = pending
            .values()
            .map(|p| p.deadline)
            .min()
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or_else(|| Duration::from_millis(250));

        match receiver.recv_timeout(timeout) {
            Ok(Message::Register(p)) => {
                pending.insert(p.id, p);
            }
            Ok(Message::Cancelled(id)) => {
                // May already have fired; a missing entry is fine.
                pending.remove(&id);
            }
            Err(RecvTimeoutError::Timeout) => { /* fall through to deadline check */ }
            Err(RecvTimeoutError::Disconnected) => break,
        }

        let now = Instant::now();
        let due: Vec<u64> = pending
            .values()
            .filter(|p| now >= p.deadline)
            .map(|p| p.id)
            .collect();
        for id in due {
            if let Some(p) = pending.remove(&id) {
                // The single read of the cancelled flag.
                if !p.cancelled.load(Ordering::Acquire) {
                    p.logger.emit(&p.event, true);
                }
            }
        }
    }
}
