//! REPL Session
//!
//! Per-user state (pagination, caught pokemon, RNG) and the handler for each
//! command. All output goes to the writer passed into [`Session::execute`].

use std::collections::BTreeMap;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::client::{Fetch, PokeApi};
use crate::commands::{Command, COMMANDS};
use crate::error::Result;
use crate::models::Pokemon;

/// What the REPL loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Session ==
pub struct Session<F> {
    api: PokeApi<F>,
    /// Page `map` will show; `None` once the last page has been shown
    next_page: Option<String>,
    /// Page `mapb` will show; `None` while on the first page
    previous_page: Option<String>,
    caught: BTreeMap<String, Pokemon>,
    rng: StdRng,
}

impl<F: Fetch> Session<F> {
    /// Creates a session with an OS-seeded RNG.
    pub fn new(api: PokeApi<F>) -> Self {
        Self::with_rng(api, StdRng::from_os_rng())
    }

    /// Creates a session with the given RNG, for reproducible catch rolls.
    pub fn with_rng(api: PokeApi<F>, rng: StdRng) -> Self {
        Self {
            next_page: Some(api.first_location_page_url()),
            previous_page: None,
            caught: BTreeMap::new(),
            api,
            rng,
        }
    }

    pub fn api(&self) -> &PokeApi<F> {
        &self.api
    }

    /// Caught pokemon, ordered by name.
    pub fn caught(&self) -> impl Iterator<Item = &Pokemon> {
        self.caught.values()
    }

    pub fn has_caught(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    // == Execute ==
    /// Runs one command, writing its output to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        debug!("Executing {:?}", command);
        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => self.pokedex(out)?,
        }
        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for (name, args, description) in COMMANDS {
            if args.is_empty() {
                writeln!(out, "{}: {}", name, description)?;
            } else {
                writeln!(out, "{} {}: {}", name, args, description)?;
            }
        }
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.next_page.clone() else {
            writeln!(out, "you're on the last page")?;
            return Ok(());
        };
        self.show_page(&url, out).await
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.previous_page.clone() else {
            writeln!(out, "you're on the first page")?;
            return Ok(());
        };
        self.show_page(&url, out).await
    }

    /// Prints a listing page and moves the cursor to its neighbours.
    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let page = self.api.location_page(url).await?;
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        self.next_page = page.next;
        self.previous_page = page.previous;
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area_name: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {}...", area_name)?;
        let area = self.api.location_area(area_name).await?;

        writeln!(out, "Found Pokemon:")?;
        for name in area.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let pokemon = self.api.pokemon(name).await?;

        let chance = pokemon.catch_chance();
        let roll = self.rng.random_range(0..100u32);
        debug!("Catch roll for {}: {} against chance {}", pokemon.name, roll, chance);

        if roll < chance {
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.caught.insert(pokemon.name.clone(), pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let Some(pokemon) = self.caught.get(name) else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for slot in &pokemon.stats {
            writeln!(out, "  -{}: {}", slot.stat.name, slot.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for slot in &pokemon.types {
            writeln!(out, "  - {}", slot.kind.name)?;
        }
        Ok(())
    }

    fn pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.caught.is_empty() {
            writeln!(out, "Your Pokedex is empty. Try the catch command.")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in self.caught.keys() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}
