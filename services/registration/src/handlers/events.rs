use std::convert::Infallible;
use std::time::Duration;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;

use crate::infra::events;
use crate::state::AppState;

/// How long to wait after a change before emitting a notification. Everything
/// arriving within the window folds into one event, so a burst of
/// registrations triggers a single re-fetch instead of one per row.
const DEBOUNCE_WINDOW: Duration = Duration::from_millis(250);

// ── GET /users/events ────────────────────────────────────────────────────────

/// Server-sent change notifications for the users table. Each `users-changed`
/// event carries the number of changes folded into it; clients re-fetch the
/// listing on receipt. Dropping the connection releases the subscription.
pub async fn user_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.changes.subscribe();
    let stream = futures::stream::unfold(rx, |mut rx| async move {
        let folded = events::next_coalesced(&mut rx, DEBOUNCE_WINDOW).await?;
        let event = Event::default()
            .event("users-changed")
            .data(folded.to_string());
        Some((Ok(event), rx))
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}
