//! Named Commands
//!
//! Operations that can be invoked by name on an initialised widget, e.g.
//! from a trigger element carrying `data-dnd-command="return"`.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{DndError, Result};
use crate::workspace::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move everything back into the return list
    Return,
    /// Deal the return list out over the other lists
    Randomise,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Return => "return",
            Command::Randomise => "randomise",
        }
    }

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            Command::Return => "Unallocate all",
            Command::Randomise => "Randomly allocate",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = DndError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "return" => Ok(Command::Return),
            "randomise" | "randomize" => Ok(Command::Randomise),
            other => Err(DndError::UnknownCommand(other.to_string())),
        }
    }
}

impl Workspace {
    pub fn dispatch<R: Rng + ?Sized>(&mut self, command: Command, rng: &mut R) -> Result<()> {
        tracing::debug!(%command, "dispatch");
        match command {
            Command::Return => self.return_items(),
            Command::Randomise => self.randomise(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListSpec, WorkspaceLayout};
    use crate::options::DndOptions;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse() {
        assert_eq!("return".parse::<Command>().unwrap(), Command::Return);
        assert_eq!(" Randomise ".parse::<Command>().unwrap(), Command::Randomise);
        assert_eq!("randomize".parse::<Command>().unwrap(), Command::Randomise);
        assert!(matches!("shuffle".parse::<Command>(), Err(DndError::UnknownCommand(c)) if c == "shuffle"));
    }

    #[test]
    fn test_dispatch_round_trip() {
        let mut ws = Workspace::initialize(
            WorkspaceLayout {
                lists: vec![
                    ListSpec::bound("pool", "pool").with_items(["1", "2", "3", "4"]).as_return_list(),
                    ListSpec::bound("t1", "t1"),
                    ListSpec::bound("t2", "t2"),
                ],
            },
            DndOptions::default(),
        )
        .unwrap();
        let pool = ws.return_list().unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        ws.dispatch(Command::Randomise, &mut rng).unwrap();
        assert!(ws.list(pool).unwrap().is_empty());

        ws.dispatch(Command::Return, &mut rng).unwrap();
        assert_eq!(ws.list(pool).unwrap().len(), 4);
    }
}
