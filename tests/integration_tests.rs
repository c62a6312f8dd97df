use async_trait::async_trait;
use is_it_prime::domain::ports::{Console, LineSource};
use is_it_prime::{Result, Session, SessionEngine};
use std::sync::{Arc, Mutex};

struct ScriptedSource {
    lines: Vec<String>,
    next: usize,
}

impl ScriptedSource {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| line.to_string()).collect(),
            next: 0,
        }
    }
}

#[async_trait]
impl LineSource for ScriptedSource {
    async fn next_line(&mut self) -> Result<Option<String>> {
        let line = self.lines.get(self.next).cloned();
        self.next += 1;
        Ok(line)
    }
}

#[derive(Clone, Default)]
struct CapturedConsole {
    chunks: Arc<Mutex<Vec<String>>>,
}

impl CapturedConsole {
    fn transcript(&self) -> String {
        self.chunks.lock().unwrap().concat()
    }
}

impl Console for CapturedConsole {
    fn print(&self, text: &str) {
        self.chunks.lock().unwrap().push(text.to_string());
    }

    fn println(&self, text: &str) {
        self.chunks.lock().unwrap().push(format!("{}\n", text));
    }
}

const GREETING: &str = "Is it Prime?\n\
------------\n\
Enter a whole number, and we'll tell you if it is a prime number or not. Enter q to quit.\n\
-> ";

#[tokio::test]
async fn test_end_to_end_session_transcript() {
    let console = CapturedConsole::default();
    let source = ScriptedSource::new(&["7", "8", "1", "-5", "abc", "q"]);

    let engine = SessionEngine::new(source, console.clone());
    engine.run().await.unwrap();

    let expected = format!(
        "{}{}",
        GREETING,
        "7 is a prime number!\n\
         -> 8 is not a prime number because it is divisible by 2!\n\
         -> 1 is not prime, by definition!\n\
         -> Negative numbers are not prime, by definition!\n\
         -> Please enter a whole number!\n\
         -> Goodbye.\n"
    );
    assert_eq!(console.transcript(), expected);
}

#[tokio::test]
async fn test_end_to_end_uppercase_quit() {
    let console = CapturedConsole::default();
    let source = ScriptedSource::new(&["Q"]);

    let engine = SessionEngine::new(source, console.clone());
    engine.run().await.unwrap();

    assert_eq!(console.transcript(), format!("{}Goodbye.\n", GREETING));
}

#[tokio::test]
async fn test_end_to_end_closed_input_quits() {
    let console = CapturedConsole::default();
    // stream ends without the user ever typing "q"
    let source = ScriptedSource::new(&["6"]);

    let engine = SessionEngine::new(source, console.clone());
    engine.run().await.unwrap();

    let expected = format!(
        "{}{}",
        GREETING,
        "6 is not a prime number because it is divisible by 2!\n\
         -> Goodbye.\n"
    );
    assert_eq!(console.transcript(), expected);
}

#[tokio::test]
async fn test_end_to_end_blank_line_is_invalid_input() {
    let console = CapturedConsole::default();
    let source = ScriptedSource::new(&["", "q"]);

    let engine = SessionEngine::new(source, console.clone());
    engine.run().await.unwrap();

    let expected = format!("{}Please enter a whole number!\n-> Goodbye.\n", GREETING);
    assert_eq!(console.transcript(), expected);
}

#[tokio::test]
async fn test_read_failure_surfaces_instead_of_hanging() {
    struct FailingSource;

    #[async_trait]
    impl LineSource for FailingSource {
        async fn next_line(&mut self) -> Result<Option<String>> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin went away").into())
        }
    }

    let console = CapturedConsole::default();
    let engine = SessionEngine::new(FailingSource, console.clone());

    let outcome = engine.run().await;
    assert!(outcome.is_err());
    // the loop died before any quit, so no farewell
    assert!(!console.transcript().contains("Goodbye."));
}

#[tokio::test]
async fn test_session_alone_reports_without_farewell() {
    let console = CapturedConsole::default();
    let session = Session::new(ScriptedSource::new(&["13", "q"]), console.clone());

    session.run().await.unwrap();

    let transcript = console.transcript();
    assert!(transcript.contains("13 is a prime number!"));
    assert!(!transcript.contains("Goodbye."));
}
