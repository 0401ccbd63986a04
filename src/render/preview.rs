//! Single-slot asynchronous preview rendering.
//!
//! Renders run as tasks on a small tokio runtime owned by the preview. Each
//! request gets a generation number and aborts the task of the request it
//! supersedes. A task waits out a short debounce before it starts
//! rendering, so a request superseded inside that window never renders at
//! all. A render that is already running cannot be interrupted; its result
//! carries a stale generation and is dropped, so the displayed preview
//! never goes backwards.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{trace, warn};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::AbortHandle;

use super::{MarkdownRenderer, RenderError};

/// Delay between a request and the start of its render.
const DEBOUNCE: Duration = Duration::from_millis(10);

struct Rendered {
    generation: u64,
    result: Result<String, RenderError>,
}

struct Pending {
    generation: u64,
    task: AbortHandle,
}

/// Holds the currently displayed preview HTML and at most one pending
/// render request.
pub struct Preview {
    renderer: Arc<dyn MarkdownRenderer>,
    runtime: Runtime,
    latest: u64,
    pending: Option<Pending>,
    html: String,
    tx: UnboundedSender<Rendered>,
    rx: UnboundedReceiver<Rendered>,
}

impl Preview {
    /// Creates an empty preview using the given renderer.
    pub fn new(renderer: Arc<dyn MarkdownRenderer>) -> Result<Self, RenderError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("memo-preview")
            .enable_time()
            .build()
            .map_err(RenderError::Runtime)?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            renderer,
            runtime,
            latest: 0,
            pending: None,
            html: String::new(),
            tx,
            rx,
        })
    }

    /// Starts rendering `markdown`, aborting any pending request.
    ///
    /// Returns the generation assigned to this request.
    pub fn request(&mut self, markdown: impl Into<String>) -> u64 {
        self.abort_pending();
        self.latest += 1;
        let generation = self.latest;

        let markdown = markdown.into();
        let renderer = Arc::clone(&self.renderer);
        let tx = self.tx.clone();

        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(DEBOUNCE).await;
            let rendered =
                tokio::task::spawn_blocking(move || renderer.render(&markdown)).await;
            let result = match rendered {
                Ok(result) => result,
                Err(err) if err.is_panic() => Err(RenderError::Panicked),
                Err(_) => return,
            };
            // Receiver lives as long as the Preview; a send error means it was dropped.
            let _ = tx.send(Rendered { generation, result });
        });

        self.pending = Some(Pending {
            generation,
            task: handle.abort_handle(),
        });
        trace!("preview render {} requested", generation);
        generation
    }

    /// Aborts the pending request, if any. The displayed HTML is kept.
    pub fn cancel(&mut self) {
        self.abort_pending();
    }

    /// Applies any finished results without blocking.
    ///
    /// Returns true if the displayed HTML changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(rendered) = self.rx.try_recv() {
            changed |= self.apply(rendered);
        }
        changed
    }

    /// Blocks until the pending request (if any) has been applied and
    /// returns the displayed HTML.
    ///
    /// # Panics
    ///
    /// Panics when called from within an asynchronous execution context.
    pub fn wait(&mut self) -> &str {
        while self.pending.is_some() {
            match self.rx.blocking_recv() {
                Some(rendered) => {
                    self.apply(rendered);
                }
                None => break,
            }
        }
        &self.html
    }

    /// Returns true while a request is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the currently displayed HTML.
    pub fn html(&self) -> &str {
        &self.html
    }

    fn abort_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
            trace!("preview render {} aborted", pending.generation);
        }
    }

    fn apply(&mut self, rendered: Rendered) -> bool {
        let current = self.pending.as_ref().map(|p| p.generation);
        if current != Some(rendered.generation) {
            trace!("dropping stale preview render {}", rendered.generation);
            return false;
        }
        self.pending = None;

        match rendered.result {
            Ok(html) => {
                let changed = html != self.html;
                self.html = html;
                changed
            }
            Err(err) => {
                warn!("preview render {} failed: {}", rendered.generation, err);
                false
            }
        }
    }
}

impl fmt::Debug for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preview")
            .field("latest", &self.latest)
            .field("pending", &self.pending.as_ref().map(|p| p.generation))
            .field("html_len", &self.html.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CommonMark;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    fn preview_with(renderer: impl MarkdownRenderer + 'static) -> Preview {
        Preview::new(Arc::new(renderer)).unwrap()
    }

    /// Sleeps for the number of milliseconds given on the first line.
    struct SlowRenderer;

    impl MarkdownRenderer for SlowRenderer {
        fn render(&self, markdown: &str) -> Result<String, RenderError> {
            let millis: u64 = markdown
                .lines()
                .next()
                .and_then(|l| l.trim().parse().ok())
                .unwrap_or(0);
            thread::sleep(Duration::from_millis(millis));
            Ok(format!("<p>{}</p>", markdown.replace('\n', " ")))
        }
    }

    /// Counts every render that runs to completion.
    struct CountingRenderer(Arc<AtomicUsize>);

    impl MarkdownRenderer for CountingRenderer {
        fn render(&self, markdown: &str) -> Result<String, RenderError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(format!("<p>{}</p>", markdown))
        }
    }

    struct FailingRenderer;

    impl MarkdownRenderer for FailingRenderer {
        fn render(&self, _markdown: &str) -> Result<String, RenderError> {
            Err(RenderError::Markdown("boom".into()))
        }
    }

    struct PanickingRenderer;

    impl MarkdownRenderer for PanickingRenderer {
        fn render(&self, _markdown: &str) -> Result<String, RenderError> {
            panic!("renderer exploded");
        }
    }

    #[test]
    fn wait_returns_rendered_markdown() {
        let mut preview = preview_with(CommonMark);
        preview.request("# Title");

        assert_eq!(preview.wait(), "<h1>Title</h1>\n");
        assert!(!preview.is_pending());
    }

    #[test]
    fn wait_without_request_returns_current_html() {
        let mut preview = preview_with(CommonMark);
        assert_eq!(preview.wait(), "");
    }

    #[test]
    fn newer_request_supersedes_slow_pending_one() {
        let mut preview = preview_with(SlowRenderer);

        preview.request("300\nold");
        let newest = preview.request("0\nnew");

        assert_eq!(newest, 2);
        assert_eq!(preview.wait(), "<p>0 new</p>");

        thread::sleep(Duration::from_millis(400));
        assert!(!preview.poll());
        assert_eq!(preview.html(), "<p>0 new</p>");
    }

    #[test]
    fn superseded_request_is_aborted_before_rendering() {
        let renders = Arc::new(AtomicUsize::new(0));
        let mut preview = preview_with(CountingRenderer(Arc::clone(&renders)));

        preview.request("first");
        preview.request("second");
        assert_eq!(preview.wait(), "<p>second</p>");

        thread::sleep(Duration::from_millis(100));
        assert_eq!(renders.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cancel_aborts_pending_render() {
        let renders = Arc::new(AtomicUsize::new(0));
        let mut preview = preview_with(CountingRenderer(Arc::clone(&renders)));

        preview.request("never shown");
        preview.cancel();
        assert!(!preview.is_pending());

        thread::sleep(Duration::from_millis(100));
        assert!(!preview.poll());
        assert_eq!(preview.html(), "");
        assert_eq!(renders.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn result_of_render_already_running_is_dropped() {
        let mut preview = preview_with(SlowRenderer);

        preview.request("150\nold");
        // Past the debounce, so the slow render is under way.
        thread::sleep(Duration::from_millis(60));
        preview.request("0\nnew");

        assert_eq!(preview.wait(), "<p>0 new</p>");
        thread::sleep(Duration::from_millis(200));
        assert!(!preview.poll());
        assert_eq!(preview.html(), "<p>0 new</p>");
    }

    #[test]
    fn generations_increase() {
        let mut preview = preview_with(CommonMark);
        let a = preview.request("a");
        let b = preview.request("b");
        assert!(b > a);
        preview.wait();
    }

    #[test]
    fn failed_render_keeps_previous_preview() {
        let mut preview = preview_with(FailingRenderer);
        preview.html = "<p>old</p>".to_string();

        preview.request("anything");

        assert_eq!(preview.wait(), "<p>old</p>");
        assert!(!preview.is_pending());
    }

    #[test]
    fn panicking_renderer_is_contained() {
        let mut preview = preview_with(PanickingRenderer);
        preview.request("anything");

        assert_eq!(preview.wait(), "");
        assert!(!preview.is_pending());
    }
}
