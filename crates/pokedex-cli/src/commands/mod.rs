//! REPL commands and the session state they share

mod catch;
mod exit;
mod explore;
mod help;
mod inspect;
mod map;
mod pokedex;

use crate::error::Result;
use pokeapi_client::{PokeApi, Pokemon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sprite_cache::SpriteStore;
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub command: Command,
}

/// Every command, in the order `help` lists them
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        description: "Displays a help message",
        command: Command::Help,
    },
    CommandInfo {
        name: "exit",
        description: "Exit the Pokedex",
        command: Command::Exit,
    },
    CommandInfo {
        name: "map",
        description: "Get the next page of location areas",
        command: Command::Map,
    },
    CommandInfo {
        name: "mapb",
        description: "Go back to the previous page of location areas",
        command: Command::MapBack,
    },
    CommandInfo {
        name: "explore",
        description: "explore <area> - List the Pokemon found in a location area",
        command: Command::Explore,
    },
    CommandInfo {
        name: "catch",
        description: "catch <pokemon> - Throw a Pokeball at a Pokemon",
        command: Command::Catch,
    },
    CommandInfo {
        name: "inspect",
        description: "inspect <pokemon> - Show details of a Pokemon you have caught",
        command: Command::Inspect,
    },
    CommandInfo {
        name: "pokedex",
        description: "List the Pokemon you have caught",
        command: Command::Pokedex,
    },
];

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|info| info.name == name)
            .map(|info| info.command)
    }
}

/// Ends the program. Injected so tests can observe `exit` without dying.
pub trait Exiter: Send + Sync {
    fn exit(&self, code: i32);
}

/// Terminates the process
pub struct ProcessExiter;

impl Exiter for ProcessExiter {
    fn exit(&self, code: i32) {
        std::process::exit(code)
    }
}

/// Source of catch rolls: a number in `0..upper`
pub trait CatchRoll: Send {
    fn roll(&mut self, upper: u32) -> u32;
}

pub struct RandomRoll(StdRng);

impl RandomRoll {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl CatchRoll for RandomRoll {
    fn roll(&mut self, upper: u32) -> u32 {
        self.0.gen_range(0..upper.max(1))
    }
}

/// Width of the controlling terminal in columns, if there is one
pub fn detect_terminal_width() -> Option<u16> {
    crossterm::terminal::size().ok().map(|(cols, _)| cols)
}

/// State carried between commands for one interactive session
pub struct Session {
    pub api: PokeApi,
    pub sprites: SpriteStore,
    pub pokedex: BTreeMap<String, Pokemon>,
    /// `next` link of the last location-area page shown
    pub next_url: Option<String>,
    /// `previous` link of the last location-area page shown
    pub previous_url: Option<String>,
    /// Whether `map` has shown at least one page
    pub maps_loaded: bool,
    pub exiter: Box<dyn Exiter>,
    pub catch_roll: Box<dyn CatchRoll>,
    pub terminal_width: fn() -> Option<u16>,
}

impl Session {
    pub fn new(
        api: PokeApi,
        sprites: SpriteStore,
        exiter: Box<dyn Exiter>,
        catch_roll: Box<dyn CatchRoll>,
    ) -> Self {
        Self {
            api,
            sprites,
            pokedex: BTreeMap::new(),
            next_url: None,
            previous_url: None,
            maps_loaded: false,
            exiter,
            catch_roll,
            terminal_width: detect_terminal_width,
        }
    }

    pub async fn execute(
        &mut self,
        command: Command,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<()> {
        match command {
            Command::Help => help::run(out),
            Command::Exit => exit::run(self, out).await,
            Command::Map => map::next_page(self, out).await,
            Command::MapBack => map::previous_page(self, out).await,
            Command::Explore => explore::run(self, args, out).await,
            Command::Catch => catch::run(self, args, out).await,
            Command::Inspect => inspect::run(self, args, out).await,
            Command::Pokedex => pokedex::run(self, out),
        }
    }
}
