//! The interactive command loop.
//!
//! [`Session`] owns one [`Game`] and the face currently drawn at the
//! centre of the net. It is generic over its input and output streams so
//! the whole loop runs against in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use cubix_core::{FaceId, Mark};
use cubix_engine::{face_legend, render_net, Game, GameConfig, GameError, Placement};

use crate::command::{self, Command};

const HELP: &str = "\
1-6        - set centre face
x X Y      - place 'x' at (X, Y) on the centre face
o X Y      - place 'o' at (X, Y) on the centre face
n SIZE [W] - new game, optionally with win length W
h          - help
e          - exit
";

/// Whether the loop should keep reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop the loop.
    Exit,
}

/// One interactive game session.
#[derive(Debug)]
pub struct Session {
    game: Game,
    centre: FaceId,
}

impl Session {
    /// Start a session with a game already running under `config`.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let mut game = Game::new();
        game.start(config)?;
        Ok(Self {
            game,
            centre: FaceId::ALL[0],
        })
    }

    /// The running game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Greet, then execute commands from `input` until `e` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "Game started. Input 'h' for help")?;
        self.draw(out)?;
        for line in input.lines() {
            if self.execute(&line?, out)? == Flow::Exit {
                break;
            }
        }
        out.flush()
    }

    /// Execute one input line, writing any response to `out`.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let command = match command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "{e}")?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Centre(n) => self.switch_centre(n, out)?,
            Command::Place { mark, x, y } => self.place(mark, x, y, out)?,
            Command::New { size, win_length } => self.new_game(size, win_length, out)?,
            Command::Help => write!(out, "{HELP}")?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn switch_centre<W: Write>(&mut self, n: u8, out: &mut W) -> io::Result<()> {
        let Ok(face) = FaceId::new(n.saturating_sub(1)) else {
            return writeln!(out, "invalid arguments");
        };
        if face == self.centre {
            return writeln!(out, "Face {n} is already the centre");
        }
        self.centre = face;
        writeln!(out, "Switched to face {n}")?;
        self.draw(out)
    }

    fn place<W: Write>(&mut self, mark: Mark, x: u32, y: u32, out: &mut W) -> io::Result<()> {
        let size = self.game.board_size();
        if !(1..=size).contains(&x) || !(1..=size).contains(&y) {
            return writeln!(out, "invalid arguments");
        }
        match self.game.place_mark(self.centre, x - 1, y - 1, mark) {
            Ok(Placement::Occupied) => writeln!(out, "Cell isn't empty!"),
            Ok(placement @ Placement::Placed { .. }) => {
                self.draw(out)?;
                writeln!(out, "length: {}", placement.run_length())?;
                if placement.is_win() {
                    writeln!(out, "'{mark}' wins!")?;
                }
                Ok(())
            }
            Err(GameError::Finished { winner }) => {
                writeln!(out, "Game over: '{winner}' won. Input 'n' for a new game")
            }
            Err(e) => writeln!(out, "invalid arguments: {e}"),
        }
    }

    fn new_game<W: Write>(
        &mut self,
        size: u32,
        win_length: Option<u32>,
        out: &mut W,
    ) -> io::Result<()> {
        let win_length = win_length.unwrap_or(self.game.config().win_length);
        let config = GameConfig::new(size, win_length);
        if let Err(e) = self.game.start(config) {
            return writeln!(out, "invalid arguments: {e}");
        }
        self.centre = FaceId::ALL[0];
        writeln!(out, "New game: size {size}, win length {win_length}")?;
        self.draw(out)
    }

    fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", face_legend(self.centre))?;
        let Some(surface) = self.game.surface() else {
            return Ok(());
        };
        match render_net(surface, self.centre) {
            Ok(net) => write!(out, "{net}"),
            Err(e) => writeln!(out, "cannot draw the net: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubix_core::Cell;

    fn session(size: u32, win_length: u32) -> Session {
        Session::new(GameConfig::new(size, win_length)).unwrap()
    }

    fn exec(s: &mut Session, line: &str) -> String {
        let mut out = Vec::new();
        s.execute(line, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn placement_prints_net_and_length() {
        let mut s = session(1, 3);
        let out = exec(&mut s, "x 1 1");
        assert_eq!(out, " 3  \n5124\n 6  \n -  \n-x--\n -  \nlength: 1\n");
        assert_eq!(
            s.game().cell_value(FaceId::ALL[0], 0, 0),
            Ok(Cell::Marked(Mark::Cross))
        );
    }

    #[test]
    fn occupied_and_out_of_range() {
        let mut s = session(3, 3);
        exec(&mut s, "o 2 2");
        assert_eq!(exec(&mut s, "x 2 2"), "Cell isn't empty!\n");
        assert_eq!(exec(&mut s, "x 4 1"), "invalid arguments\n");
        assert_eq!(exec(&mut s, "x 0 1"), "invalid arguments\n");
    }

    #[test]
    fn switching_centre_places_on_new_face() {
        let mut s = session(2, 3);
        let out = exec(&mut s, "3");
        assert!(out.starts_with("Switched to face 3\n 5  \n1346\n 2  \n"));
        assert_eq!(s.centre, FaceId::ALL[2]);
        assert_eq!(exec(&mut s, "3"), "Face 3 is already the centre\n");

        exec(&mut s, "x 2 1");
        assert_eq!(
            s.game().cell_value(FaceId::ALL[2], 1, 0),
            Ok(Cell::Marked(Mark::Cross))
        );
    }

    #[test]
    fn win_then_refuse() {
        let mut s = session(3, 3);
        exec(&mut s, "x 1 1");
        exec(&mut s, "x 2 1");
        let out = exec(&mut s, "x 3 1");
        assert!(out.ends_with("length: 3\n'x' wins!\n"));
        assert_eq!(
            exec(&mut s, "o 1 3"),
            "Game over: 'x' won. Input 'n' for a new game\n"
        );
    }

    #[test]
    fn new_game_keeps_or_replaces_win_length() {
        let mut s = session(3, 3);
        exec(&mut s, "2");
        let out = exec(&mut s, "n 4");
        assert!(out.starts_with("New game: size 4, win length 3\n"));
        assert_eq!(s.centre, FaceId::ALL[0]);
        assert_eq!(s.game().board_size(), 4);

        exec(&mut s, "n 2 5");
        assert_eq!(s.game().config().win_length, 5);

        let out = exec(&mut s, "n 2 8");
        assert!(out.starts_with("invalid arguments: config:"));
        assert_eq!(s.game().config().win_length, 5);
        assert_eq!(exec(&mut s, "n x"), "invalid arguments\n");
    }

    #[test]
    fn run_stops_at_exit() {
        let mut s = session(2, 3);
        let input = "h\n\nx 1 1\ne\nx 2 2\n";
        let mut out = Vec::new();
        s.run(input.as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Game started. Input 'h' for help\n"));
        assert!(out.contains("h          - help\n"));
        assert!(out.contains("length: 1\n"));
        assert_eq!(s.game().metrics().placements, 1);
        assert_eq!(s.game().cell_value(FaceId::ALL[0], 1, 1), Ok(Cell::Empty));
    }

    #[test]
    fn run_ends_at_end_of_input() {
        let mut s = session(2, 3);
        let mut out = Vec::new();
        s.run("x 1 1\no 2 2".as_bytes(), &mut out).unwrap();
        assert_eq!(s.game().metrics().placements, 2);
    }
}
