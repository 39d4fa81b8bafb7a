//! spellindex Query CLI
//!
//! Command-line lookups against a produced spell document.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spellindex::classes::PlayerClass;
use spellindex::effect::encode_slot_list;
use spellindex::{Result, SpellDatabase, SpellRecord};
use tracing_subscriber::{fmt, EnvFilter};

/// spellindex query CLI
#[derive(Parser, Debug)]
#[command(name = "spellindex-query")]
#[command(about = "Query a spellindex JSON document")]
struct Args {
    /// Spell document produced by spellindex-extract
    #[arg(short, long, default_value = "spells.json")]
    input: PathBuf,

    /// Spell string table for display text
    #[arg(short = 't', long)]
    strings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show one spell
    Spell {
        /// Spell id
        id: u32,
    },

    /// List spells usable by a class
    Class {
        /// Class abbreviation (WAR, CLR, ...) or index key
        class: String,
    },

    /// List the spells of a spell group
    Group {
        /// Group id
        id: i32,
    },

    /// Find the base1 value of a spa on a spell
    Spa {
        /// Spell id
        id: u32,

        /// Spell-attribute code
        spa: i32,
    },

    /// Duration in ticks at a caster level
    Duration {
        /// Spell id
        id: u32,

        /// Caster level
        level: i32,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let db = SpellDatabase::open(&args.input, args.strings.as_deref())?;

    match args.command {
        Commands::Spell { id } => match db.spell(id) {
            Some(spell) => {
                print_spell(spell);
                println!("  slot list:      {}", encode_slot_list(&spell.slot_list));
                if let Some(text) = db.landed_text(id) {
                    println!("  lands on you:   {}", text.lands_on_you);
                    println!("  lands on other: {}", text.lands_on_other);
                }
            }
            None => println!("Spell {} not found", id),
        },
        Commands::Class { class } => {
            let key = match class.parse::<u32>() {
                Ok(key) => key,
                Err(_) => class.parse::<PlayerClass>()?.index_key(),
            };
            for spell in db.spells_for_class(key) {
                print_spell(spell);
            }
        }
        Commands::Group { id } => match db.group(id) {
            Some(ids) => {
                for spell in ids.iter().filter_map(|id| db.spell(*id)) {
                    print_spell(spell);
                }
                if let Some(best) = db.best_in_group(id) {
                    println!("best: {}", best.id);
                }
            }
            None => println!("Group {} not found", id),
        },
        Commands::Spa { id, spa } => {
            let value = db.spell(id).and_then(|spell| db.find_spa_value(spell, spa));
            match value {
                Some(value) => println!("{}", value),
                None => println!("Spa {} not found on spell {}", spa, id),
            }
        }
        Commands::Duration { id, level } => match db.duration_ticks(id, level) {
            Some(ticks) => println!("{}", ticks),
            None => println!("Spell {} not found", id),
        },
    }

    Ok(())
}

fn print_spell(spell: &SpellRecord) {
    println!(
        "{:>6}  {:<40} level={:<3} classes={:#06x} slots={}",
        spell.id,
        spell.name,
        spell.level,
        spell.class_mask,
        spell.slot_list.len()
    );
}
