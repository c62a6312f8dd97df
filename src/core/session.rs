use crate::core::interpreter::{interpret, INVALID_NUMBER_MESSAGE};
use crate::core::primality::evaluate;
use crate::domain::model::Command;
use crate::domain::ports::{Console, LineSource};
use crate::utils::error::Result;

const PROMPT: &str = "-> ";

/// The interactive loop: greet, then read, classify, report until the user
/// quits or the input stream closes.
///
/// Owns its line source exclusively for the whole session. Runs inside the
/// worker task spawned by [`crate::core::engine::SessionEngine`].
pub struct Session<L, C> {
    source: L,
    console: C,
}

impl<L: LineSource, C: Console> Session<L, C> {
    pub fn new(source: L, console: C) -> Self {
        Self { source, console }
    }

    pub async fn run(mut self) -> Result<()> {
        self.console.println("Is it Prime?");
        self.console.println("------------");
        self.console.println(
            "Enter a whole number, and we'll tell you if it is a prime number or not. Enter q to quit.",
        );
        self.console.print(PROMPT);

        loop {
            let line = match self.source.next_line().await? {
                Some(line) => line,
                None => {
                    // 輸入流關閉視同退出
                    tracing::debug!("Input stream closed, treating it as a quit");
                    break;
                }
            };

            match interpret(&line) {
                Command::Quit => {
                    tracing::debug!("Quit requested");
                    break;
                }
                Command::InvalidNumber => {
                    tracing::debug!("Unparsable input: {:?}", line);
                    self.console.println(INVALID_NUMBER_MESSAGE);
                }
                Command::Candidate(n) => {
                    let evaluation = evaluate(n);
                    tracing::debug!("Evaluated {}: prime = {}", n, evaluation.is_prime);
                    self.console.println(&evaluation.message);
                }
            }

            self.console.print(PROMPT);
        }

        Ok(())
    }
}
