use std::time::Duration;

use tokio::sync::broadcast;
use uuid::Uuid;

/// A committed change to the users table.
#[derive(Debug, Clone)]
pub struct UserChange {
    pub user_id: Uuid,
}

/// In-process change feed for the users table. The registration workflow
/// publishes here after a successful commit; the events read path subscribes
/// so clients know to re-fetch the listing.
#[derive(Clone)]
pub struct UserChangeFeed {
    tx: broadcast::Sender<UserChange>,
}

impl UserChangeFeed {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a change. Publishing with no live subscribers is not an error.
    pub fn publish(&self, change: UserChange) {
        let _ = self.tx.send(change);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UserChange> {
        self.tx.subscribe()
    }
}

impl Default for UserChangeFeed {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Wait for the next change, then fold any further changes arriving within
/// `window` into the same notification. Returns the number of changes folded
/// together, or `None` once the feed is closed. A lagged receiver counts the
/// changes it missed instead of blocking the feed.
pub async fn next_coalesced(
    rx: &mut broadcast::Receiver<UserChange>,
    window: Duration,
) -> Option<usize> {
    let mut count = match rx.recv().await {
        Ok(_) => 1,
        Err(broadcast::error::RecvError::Lagged(missed)) => missed as usize,
        Err(broadcast::error::RecvError::Closed) => return None,
    };

    let deadline = tokio::time::sleep(window);
    tokio::pin!(deadline);
    loop {
        tokio::select! {
            _ = &mut deadline => return Some(count),
            next = rx.recv() => match next {
                Ok(_) => count += 1,
                Err(broadcast::error::RecvError::Lagged(missed)) => count += missed as usize,
                Err(broadcast::error::RecvError::Closed) => return Some(count),
            },
        }
    }
}
