//! Loading feedback while a fetch is in flight.

use std::io::Write;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Spinner drawn on stderr by a background task, so stdout stays clean for
/// the rendered report. Stopping clears the spinner line.
pub struct Spinner {
    stop_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Spinner {
    /// Start drawing `{frame} {message}` until [`Spinner::stop`] is called.
    pub fn start(message: &str) -> Self {
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(FRAME_INTERVAL);
            let mut frame = 0usize;

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        // \r returns to column 0, \x1b[2K clears the line
                        eprint!("\r\x1b[2K{} {message}", FRAMES[frame % FRAMES.len()]);
                        let _ = std::io::stderr().flush();
                        frame += 1;
                    }
                }
            }

            eprint!("\r\x1b[2K");
            let _ = std::io::stderr().flush();
        });

        Self { stop_tx, handle }
    }

    /// Stop drawing and wait for the line to be cleared.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(());
        let _ = self.handle.await;
    }
}
