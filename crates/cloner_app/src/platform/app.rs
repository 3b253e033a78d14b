use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use cloner_core::{update, AppState, Msg};
use cloner_engine::{ClientSettings, EngineHandle, FileExporter, FsFileExporter};
use cloner_logging::{cloner_info, cloner_warn};

use super::effects::{EffectRunner, Feedback};
use super::ui;
use super::ui::commands::UserInput;

/// Poll cadence of the event loop while waiting for input.
const TICK: Duration = Duration::from_millis(75);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientSettings,
    pub export_dir: PathBuf,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    cloner_info!(
        "starting session endpoint={} export_dir={:?}",
        config.client.endpoint,
        config.export_dir
    );
    let engine = EngineHandle::new(config.client)?;
    let runner = EffectRunner::new(engine, FsFileExporter::new(config.export_dir));

    let (input_tx, input_rx) = mpsc::channel::<UserInput>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let input = match line {
                Ok(line) => ui::commands::parse_line(&line),
                Err(err) => {
                    cloner_warn!("stdin read failed: {}", err);
                    break;
                }
            };
            if input_tx.send(input).is_err() {
                return;
            }
        }
        let _ = input_tx.send(UserInput::Eof);
    });

    let mut session = Session::new(runner, io::stdout());
    session.start()?;

    let mut closing = false;
    loop {
        session.pump_engine()?;
        if closing && !session.is_loading() {
            break;
        }
        match input_rx.recv_timeout(TICK) {
            Ok(UserInput::Quit) => break,
            Ok(UserInput::Eof) | Err(mpsc::RecvTimeoutError::Disconnected) => {
                // Let a pending clone finish before leaving.
                closing = true;
                if !session.is_loading() {
                    break;
                }
            }
            Ok(input) => session.handle_input(input)?,
            Err(mpsc::RecvTimeoutError::Timeout) => session.dispatch(Msg::Tick)?,
        }
    }

    cloner_info!("session ended");
    Ok(())
}

/// Owns the page state and mediates between input, effects and output.
pub struct Session<E: FileExporter, W: Write> {
    state: AppState,
    runner: EffectRunner<E>,
    out: W,
}

impl<E: FileExporter, W: Write> Session<E, W> {
    pub fn new(runner: EffectRunner<E>, out: W) -> Self {
        Self {
            state: AppState::new(),
            runner,
            out,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn start(&mut self) -> io::Result<()> {
        let mut lines = ui::render::render_header();
        lines.extend(ui::commands::HELP_TEXT.lines().map(str::to_string));
        lines.extend(ui::render::render(&self.state.view()));
        self.write_lines(&lines)
    }

    pub fn handle_input(&mut self, input: UserInput) -> io::Result<()> {
        match input {
            UserInput::Msgs(msgs) => self.dispatch_all(msgs),
            UserInput::Help => {
                let lines: Vec<String> =
                    ui::commands::HELP_TEXT.lines().map(str::to_string).collect();
                self.write_lines(&lines)
            }
            UserInput::Unknown(command) => {
                self.notice(&format!("Unknown command {command}; type :help"))
            }
            UserInput::Quit | UserInput::Eof => Ok(()),
        }
    }

    /// Feeds finished engine work back into the state machine.
    pub fn pump_engine(&mut self) -> io::Result<()> {
        let mut msgs = Vec::new();
        while let Some(msg) = self.runner.poll() {
            msgs.push(msg);
        }
        if msgs.is_empty() {
            return Ok(());
        }
        self.dispatch_all(msgs)
    }

    pub fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        self.dispatch_all(vec![msg])
    }

    /// Applies a batch of messages, then renders once if anything changed.
    fn dispatch_all(&mut self, msgs: Vec<Msg>) -> io::Result<()> {
        let mut queue: VecDeque<Msg> = msgs.into();
        let mut notices = Vec::new();
        while let Some(msg) = queue.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            for feedback in self.runner.run(effects) {
                match feedback {
                    Feedback::Msg(msg) => queue.push_back(msg),
                    Feedback::Notice(text) => notices.push(text),
                }
            }
        }

        if self.state.consume_dirty() {
            let lines = ui::render::render(&self.state.view());
            self.write_lines(&lines)?;
        }
        for text in notices {
            self.notice(&text)?;
        }
        Ok(())
    }

    fn notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "! {text}")?;
        self.out.flush()
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    #[cfg(test)]
    fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }
}
