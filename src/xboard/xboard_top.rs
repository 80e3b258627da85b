//! XBoard/WinBoard protocol front-end and command loop.
//!
//! Tracks the current game through a `GameSession`, applies `usermove`
//! commands, answers with engine moves for the side the engine owns, and
//! reports finished games in the protocol's result syntax.

use std::io::{self, BufRead, Write};

use log::{trace, warn};

use crate::game_state::chess_types::Color;
use crate::search::negamax::SearchConfig;
use crate::session::game_session::{GameSession, GameStatus};
use crate::utils::algebraic::parse_coordinate_move;
use crate::utils::fen_generator::generate_position;
use crate::utils::io_log::IoLog;

const ENGINE_NAME: &str = "x88-chess";

/// Longest protocol line accepted; anything longer is logged and dropped.
pub const MAX_COMMAND_LEN: usize = 128;

pub fn run_stdio_loop(config: SearchConfig, io_log: IoLog) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut xboard = XboardState::new(config, io_log);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = xboard.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct XboardState {
    session: GameSession,
    engine_side: Option<Color>,
    io_log: IoLog,
}

impl XboardState {
    pub fn new(config: SearchConfig, io_log: IoLog) -> Self {
        Self {
            session: GameSession::new(config),
            engine_side: Some(Color::Dark),
            io_log,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn engine_side(&self) -> Option<Color> {
        self.engine_side
    }

    /// Process one protocol line. Returns `true` once `quit` is seen.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        if trimmed.len() > MAX_COMMAND_LEN {
            let head: String = trimmed.chars().take(MAX_COMMAND_LEN).collect();
            warn!("xboard: dropping {}-byte command starting {head}", trimmed.len());
            self.io_log
                .error(&format!("GUI sent oversized line ({} bytes): {head}", trimmed.len()))?;
            return Ok(false);
        }
        self.io_log.received(trimmed)?;

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "xboard" => {}
            "protover" => {
                self.send(
                    out,
                    &format!("feature myname=\"{ENGINE_NAME}\" usermove=1 sigint=0 done=1"),
                )?;
            }
            "new" => {
                self.session.reset();
                self.engine_side = Some(Color::Dark);
                self.io_log.note("new game")?;
            }
            "force" => {
                self.engine_side = None;
            }
            "go" => {
                self.engine_side = Some(self.session.side_to_move());
                self.engine_reply(out)?;
            }
            "usermove" => {
                let text = parts.next().unwrap_or_default();
                self.handle_usermove(text, out)?;
            }
            "quit" => return Ok(true),
            "accepted" | "rejected" | "random" | "level" | "post" | "nopost" | "hard"
            | "easy" | "time" | "otim" | "computer" | "result" | "st" | "sd" => {
                trace!("xboard: ignoring {trimmed}");
            }
            _ => {
                warn!("xboard: unknown command {trimmed}");
            }
        }

        Ok(false)
    }

    fn handle_usermove(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        if self.session.is_game_over() {
            return self.send(out, &format!("Illegal move: {text}"));
        }

        let accepted = parse_coordinate_move(text)
            .map_err(|e| e.to_string())
            .and_then(|mv| self.session.play_move(mv).map_err(|e| e.to_string()));

        match accepted {
            Ok(_) => {
                self.note_position()?;
                if self.report_result(out)? {
                    return Ok(());
                }
                if self.engine_side == Some(self.session.side_to_move()) {
                    self.engine_reply(out)?;
                }
                Ok(())
            }
            Err(reason) => {
                self.io_log.note(&format!("rejected {text}: {reason}"))?;
                self.send(out, &format!("Illegal move: {text}"))
            }
        }
    }

    fn engine_reply(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.report_result(out)? {
            return Ok(());
        }

        self.io_log.note("best_move")?;
        let result = self.session.search();
        let Some(mv) = result.best_move else {
            return Ok(());
        };
        self.io_log.note(&format!(
            "search score {} nodes {}",
            result.score, result.nodes
        ))?;

        match self.session.play_move(mv) {
            Ok(_) => {
                self.note_position()?;
                self.send(out, &format!("move {mv}"))?;
                self.report_result(out)?;
                Ok(())
            }
            Err(err) => {
                warn!("xboard: engine produced rejected move {mv}: {err}");
                Ok(())
            }
        }
    }

    /// Emit the result line for a finished game; `true` if one was sent.
    fn report_result(&mut self, out: &mut impl Write) -> io::Result<bool> {
        let line = match self.session.status() {
            GameStatus::InProgress => return Ok(false),
            GameStatus::Checkmate {
                winner: Color::Light,
            } => "1-0 {White mates}",
            GameStatus::Checkmate {
                winner: Color::Dark,
            } => "0-1 {Black mates}",
            GameStatus::Stalemate => "1/2-1/2 {Stalemate}",
        };
        self.send(out, line)?;
        Ok(true)
    }

    fn note_position(&mut self) -> io::Result<()> {
        if !self.io_log.is_enabled() {
            return Ok(());
        }
        let position = generate_position(self.session.game_state(), self.session.side_to_move());
        self.io_log.note(&format!("position {position}"))
    }

    fn send(&mut self, out: &mut impl Write, line: &str) -> io::Result<()> {
        writeln!(out, "{line}")?;
        self.io_log.sent(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Move;
    use crate::move_generation::legal_move_generator::legal_moves_for_side;
    use crate::utils::algebraic::parse_coordinate_move;

    fn run(state: &mut XboardState, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            state
                .handle_command(line, &mut out)
                .expect("writing to a Vec should not fail");
        }
        String::from_utf8(out).expect("protocol output should be utf-8")
    }

    fn shallow() -> XboardState {
        XboardState::new(SearchConfig { depth: 1 }, IoLog::disabled())
    }

    #[test]
    fn handshake_sends_feature_line() {
        let mut state = shallow();
        let output = run(&mut state, &["xboard", "protover 2"]);
        assert_eq!(
            output,
            "feature myname=\"x88-chess\" usermove=1 sigint=0 done=1\n"
        );
    }

    #[test]
    fn user_move_gets_engine_reply() {
        let mut state = shallow();
        let output = run(&mut state, &["new", "usermove e2e4"]);
        let reply = output
            .lines()
            .next()
            .and_then(|line| line.strip_prefix("move "))
            .expect("engine should answer with a move");
        let mv = parse_coordinate_move(reply).expect("reply should be a coordinate move");

        assert_eq!(state.session().side_to_move(), Color::Light);
        let mut probe = crate::game_state::game_state::GameState::new_game();
        crate::move_generation::legal_move_apply::make_move(&mut probe, Color::Light, 20, 52)
            .expect("e2e4 should be legal");
        assert!(legal_moves_for_side(&mut probe, Color::Dark).contains(&mv));
    }

    #[test]
    fn illegal_and_malformed_moves_are_reported() {
        let mut state = shallow();
        let output = run(&mut state, &["new", "usermove e2e5", "usermove zz"]);
        assert_eq!(output, "Illegal move: e2e5\nIllegal move: zz\n");
        assert_eq!(state.session().side_to_move(), Color::Light);
    }

    #[test]
    fn force_mode_reports_mate() {
        let mut state = shallow();
        let output = run(
            &mut state,
            &[
                "new",
                "force",
                "usermove f2f3",
                "usermove e7e5",
                "usermove g2g4",
                "usermove d8h4",
            ],
        );
        assert_eq!(output, "0-1 {Black mates}\n");
        assert!(state.session().is_game_over());
        assert_eq!(state.engine_side(), None);

        let output = run(&mut state, &["usermove a2a3"]);
        assert_eq!(output, "Illegal move: a2a3\n");
    }

    #[test]
    fn go_makes_engine_play_side_to_move() {
        let mut state = shallow();
        let output = run(&mut state, &["new", "force", "go"]);
        assert!(output.starts_with("move "));
        assert_eq!(state.engine_side(), Some(Color::Light));
        assert_eq!(state.session().side_to_move(), Color::Dark);
        let first: Move = parse_coordinate_move(&output[5..9]).expect("reply should parse");
        assert!(first.from < 32);
    }

    #[test]
    fn oversized_line_is_dropped() {
        let mut state = shallow();
        let long_move = format!("usermove e2e4{}", " ".repeat(MAX_COMMAND_LEN) + "x");
        let output = run(&mut state, &["new", long_move.as_str()]);
        assert!(output.is_empty());
        assert_eq!(state.session().side_to_move(), Color::Light);

        let output = run(&mut state, &["quit"]);
        assert!(output.is_empty());
    }

    #[test]
    fn quit_ends_loop() {
        let mut state = shallow();
        let mut out = Vec::new();
        assert!(state
            .handle_command("quit", &mut out)
            .expect("writing to a Vec should not fail"));
        assert!(!state
            .handle_command("hard", &mut out)
            .expect("writing to a Vec should not fail"));
        assert!(out.is_empty());
    }
}
