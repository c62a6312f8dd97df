use crate::core::session::Session;
use crate::domain::ports::{Console, LineSource};
use crate::utils::error::Result;
use tokio::sync::oneshot;

/// Runs one interactive session to completion.
///
/// The loop itself executes on a spawned worker task; the engine blocks on a
/// one-shot signal from that worker, then says goodbye. The signal carries
/// the session outcome, so a loop failure surfaces here instead of being
/// swallowed by the runtime.
pub struct SessionEngine<L, C> {
    session: Session<L, C>,
    console: C,
}

impl<L, C> SessionEngine<L, C>
where
    L: LineSource + 'static,
    C: Console + 'static,
{
    pub fn new(source: L, console: C) -> Self {
        let session = Session::new(source, console.clone());
        Self { session, console }
    }

    pub async fn run(self) -> Result<()> {
        let (done_tx, done_rx) = oneshot::channel();

        let session = self.session;
        tokio::spawn(async move {
            let outcome = session.run().await;
            if done_tx.send(outcome).is_err() {
                tracing::error!("Session finished but nobody was waiting for the signal");
            }
        });

        // 等待迴圈結束的信號
        done_rx.await??;

        self.console.println("Goodbye.");

        Ok(())
    }
}
