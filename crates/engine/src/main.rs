//! Charforge - command-line character creation.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charforge_domain::{Catalog, CharacterDraft, CharacterId};
use charforge_engine::infrastructure::clock::SystemClock;
use charforge_engine::infrastructure::persistence::JsonFileCharacterStore;
use charforge_engine::{CharacterCreation, EngineConfig};

const USAGE: &str = "Usage: charforge <command>

Commands:
  generate --race <id> [--career <id>] [--name <name>]
  list
  show <character-id>
  delete <character-id>
  races
  careers";

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charforge_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env();
    let catalog = Arc::new(config.load_catalog().context("loading catalog")?);
    let store = Arc::new(
        JsonFileCharacterStore::new(&config.data_dir)
            .with_context(|| format!("opening {}", config.data_dir.display()))?,
    );
    let mut creation = CharacterCreation::new(
        catalog.clone(),
        store,
        Arc::new(SystemClock::new()),
        config.stat_edit_policy,
        config.rng(),
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("generate") => generate(&mut creation, &args[1..]),
        Some("list") => list(&creation),
        Some("show") => show(&mut creation, args.get(1)),
        Some("delete") => delete(&creation, args.get(1)),
        Some("races") => {
            print_races(&catalog);
            Ok(())
        }
        Some("careers") => {
            print_careers(&catalog);
            Ok(())
        }
        Some(cmd) => anyhow::bail!("Unknown command: {cmd}\n\n{USAGE}"),
        None => anyhow::bail!("{USAGE}"),
    }
}

struct GenerateArgs {
    race: String,
    career: Option<String>,
    name: Option<String>,
}

fn parse_generate_args(args: &[String]) -> anyhow::Result<GenerateArgs> {
    let mut race = None;
    let mut career = None;
    let mut name = None;
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let slot = match flag.as_str() {
            "--race" => &mut race,
            "--career" => &mut career,
            "--name" => &mut name,
            other => anyhow::bail!("Unknown option for generate: {other}"),
        };
        let value = iter
            .next()
            .with_context(|| format!("{flag} needs a value"))?;
        *slot = Some(value.clone());
    }
    Ok(GenerateArgs {
        race: race.context("generate needs --race <id>")?,
        career,
        name,
    })
}

/// Race, career, characteristics, wounds and fate, racial skills and
/// talents, then save.
fn generate(creation: &mut CharacterCreation, args: &[String]) -> anyhow::Result<()> {
    let args = parse_generate_args(args)?;

    creation.select_race(&args.race)?;
    if let Some(career) = &args.career {
        creation.select_career(career)?;
    }
    creation.roll_characteristics()?;
    creation.roll_wounds_and_fate()?;
    let picks = creation
        .race()
        .map(|race| race.default_skill_picks())
        .unwrap_or_default();
    creation.choose_skills(&picks)?;
    creation.roll_talents()?;

    let name = match args.name {
        Some(name) => name,
        None => default_name(creation),
    };
    creation.set_name(name);

    let character = creation.complete()?;
    println!("{}", creation.sheet());
    println!();
    println!("Saved {}", character.id);
    Ok(())
}

/// "Dwarf Character" style placeholder.
fn default_name(creation: &CharacterCreation) -> String {
    match creation.race() {
        Some(race) => format!("{} Character", race.name),
        None => charforge_domain::PLACEHOLDER_NAME.to_string(),
    }
}

fn list(creation: &CharacterCreation) -> anyhow::Result<()> {
    let characters = creation.list_saved()?;
    if characters.is_empty() {
        println!("No saved characters");
    }
    for character in &characters {
        println!("{}", summary_line(character));
    }
    Ok(())
}

fn summary_line(character: &CharacterDraft) -> String {
    format!(
        "{}  {:<24} {:<10} {}",
        character.id,
        character.display_name(),
        character.race_id.as_ref().map_or("-", |id| id.as_str()),
        character.career_id.as_ref().map_or("-", |id| id.as_str()),
    )
}

fn parse_id(arg: Option<&String>) -> anyhow::Result<CharacterId> {
    let arg = arg.context("missing <character-id>")?;
    arg.parse()
        .with_context(|| format!("'{arg}' is not a character id"))
}

fn show(creation: &mut CharacterCreation, arg: Option<&String>) -> anyhow::Result<()> {
    let id = parse_id(arg)?;
    creation.load(id)?;
    println!("{}", creation.sheet());
    Ok(())
}

fn delete(creation: &CharacterCreation, arg: Option<&String>) -> anyhow::Result<()> {
    let id = parse_id(arg)?;
    creation.delete_saved(id)?;
    println!("Deleted {id}");
    Ok(())
}

fn print_races(catalog: &Catalog) {
    for race in catalog.races() {
        println!(
            "{:<10} {:<10} move {}",
            race.id.as_str(),
            race.name,
            race.movement
        );
    }
}

fn print_careers(catalog: &Catalog) {
    for career in catalog.careers() {
        let magic = career
            .magic_floor
            .map(|floor| format!("  magic {floor}"))
            .unwrap_or_default();
        println!(
            "{:<20} {:<20} {:<8} tier {}{}",
            career.id.as_str(),
            career.name,
            career.career_type.to_string(),
            career.tier,
            magic
        );
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
