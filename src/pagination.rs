use std::{
    collections::{HashSet, VecDeque},
    future::Future,
};

use futures::{Stream, TryStreamExt, stream};

use crate::{
    common::{Error, Result},
    models::{Continuation, Page},
};

pub const DEFAULT_MAX_STEPS: usize = 50;

struct Cursor<T, F> {
    buffer: VecDeque<T>,
    next: Option<Continuation>,
    seen: HashSet<String>,
    steps: usize,
    max_steps: usize,
    fetch_next: F,
    failed: bool,
}

/// Lazily walks `initial` and every page reachable through its continuation.
///
/// The stream ends when a page has no cursor, when a cursor is empty or was
/// already followed, or after `max_steps` fetches. A fetch error is yielded
/// once and ends the stream. Not restartable.
pub fn paginate<T, F, Fut>(
    initial: Page<T>,
    fetch_next: F,
    max_steps: usize,
) -> impl Stream<Item = Result<T>>
where
    F: FnMut(Continuation) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let cursor = Cursor {
        buffer: initial.items.into(),
        next: initial.continuation,
        seen: HashSet::new(),
        steps: 0,
        max_steps,
        fetch_next,
        failed: false,
    };

    stream::unfold(cursor, |mut st| async move {
        loop {
            if let Some(item) = st.buffer.pop_front() {
                return Some((Ok(item), st));
            }
            if st.failed {
                return None;
            }

            let token = st.next.take()?;
            if token.is_empty() {
                tracing::debug!("pagination ended on an empty continuation");
                return None;
            }
            if !st.seen.insert(token.as_str().to_string()) {
                tracing::debug!("pagination ended on a repeated continuation");
                return None;
            }
            if st.steps >= st.max_steps {
                tracing::debug!("pagination stopped after {} steps", st.steps);
                return None;
            }
            st.steps += 1;

            match (st.fetch_next)(token).await {
                Ok(page) => {
                    st.buffer.extend(page.items);
                    st.next = page.continuation;
                }
                Err(e) => {
                    st.failed = true;
                    return Some((Err::<T, Error>(e), st));
                }
            }
        }
    })
}

/// Drains [`paginate`] into a list, failing on the first fetch error.
pub async fn collect_all<T, F, Fut>(
    initial: Page<T>,
    fetch_next: F,
    max_steps: usize,
) -> Result<Vec<T>>
where
    F: FnMut(Continuation) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    paginate(initial, fetch_next, max_steps).try_collect().await
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use futures::StreamExt;

    use super::*;
    use crate::common::TransportError;

    fn page(items: &[u32], next: Option<&str>) -> Page<u32> {
        Page::new(items.to_vec(), next.map(Continuation::new))
    }

    #[tokio::test]
    async fn test_walks_pages_in_order() {
        let items = collect_all(
            page(&[1, 2], Some("a")),
            |token| async move {
                Ok(match token.as_str() {
                    "a" => page(&[3], Some("b")),
                    _ => page(&[4], None),
                })
            },
            DEFAULT_MAX_STEPS,
        )
        .await
        .expect("all pages");
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_repeated_token_terminates() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let counter = fetches.clone();
        let items = collect_all(
            page(&[1], Some("loop")),
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Ok(page(&[2], Some("loop"))) }
            },
            DEFAULT_MAX_STEPS,
        )
        .await
        .expect("terminates");
        assert_eq!(items, vec![1, 2]);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_step_cap_bounds_fetches() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let counter = fetches.clone();
        let items = collect_all(
            page(&[0], Some("0")),
            move |token| {
                let n = counter.fetch_add(1, Ordering::SeqCst) as u32 + 1;
                let next = format!("{}{}", token.as_str(), n);
                async move { Ok(Page::new(vec![n], Some(Continuation::new(next)))) }
            },
            3,
        )
        .await
        .expect("terminates");
        assert_eq!(items, vec![0, 1, 2, 3]);
        assert_eq!(fetches.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_empty_token_is_terminal() {
        let items = collect_all(
            page(&[1], Some("  ")),
            |_| async { Ok(page(&[2], None)) },
            DEFAULT_MAX_STEPS,
        )
        .await
        .expect("terminates");
        assert_eq!(items, vec![1]);
    }

    #[tokio::test]
    async fn test_error_is_yielded_once_then_ends() {
        let results: Vec<Result<u32>> = paginate(
            page(&[1], Some("a")),
            |_| async {
                Err::<Page<u32>, _>(Error::Transport(TransportError::HttpStatus {
                    status: 500,
                    body: String::new(),
                }))
            },
            DEFAULT_MAX_STEPS,
        )
        .collect()
        .await;

        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], Ok(1)));
        assert!(results[1].is_err());
    }
}
