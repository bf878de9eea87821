//! Partyboard watch - Terminal polling viewer over the roster API
//!
//! Run with: cargo run --bin partyboard-watch
//!
//! # Configuration
//!
//! Environment variables:
//! - `PARTYBOARD_URL`: API base URL (default: http://localhost:3000)
//! - `PARTYBOARD_REFRESH_MS`: Refresh interval in milliseconds (default: 3000)
//! - `RUST_LOG`: Log level (default: warn)
//!
//! Commands on stdin: `party <id>`, `char <id>`, `back`, `close`,
//! `me <user_id>`, `pause`, `resume`, `quit`.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use partyboard::application::dto::{AdventureDto, CharacterSheetDto, EquipmentDto};
use partyboard::client::{BoardClient, RefreshScheduler, ViewState};
use partyboard::domain::entities::AbilityScores;
use partyboard::domain::value_objects::UserId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "partyboard=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::var("PARTYBOARD_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    let refresh_ms: u64 = std::env::var("PARTYBOARD_REFRESH_MS")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    let client = Arc::new(BoardClient::new(&base_url));
    let mut view = ViewState::AdventureList;
    let mut scheduler = RefreshScheduler::new(Duration::from_millis(refresh_ms));

    println!("Watching {base_url} (refresh every {refresh_ms} ms)");
    print_help();
    scheduler.activate(view, make_tick(client.clone()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some("party"), Some(id)) => match id.parse() {
                Ok(id) => {
                    view = view.view_party(id);
                    scheduler.activate(view, make_tick(client.clone()));
                }
                Err(_) => println!("'party' needs a numeric adventure id"),
            },
            (Some("char"), Some(id)) => match id.parse() {
                Ok(id) => {
                    let next = view.view_character(id);
                    if next == view {
                        println!("Open a party first (party <id>)");
                    } else {
                        view = next;
                        scheduler.activate(view, make_tick(client.clone()));
                    }
                }
                Err(_) => println!("'char' needs a numeric character id"),
            },
            (Some("back"), _) => {
                view = view.back();
                scheduler.activate(view, make_tick(client.clone()));
            }
            (Some("close"), _) => {
                view = view.close_modal();
                scheduler.activate(view, make_tick(client.clone()));
            }
            (Some("me"), Some(id)) => match id.parse::<i64>() {
                Ok(user_id) => show_my_character(&client, UserId::new(user_id)).await,
                Err(_) => println!("'me' needs a numeric user id"),
            },
            (Some("pause"), _) => {
                scheduler.suspend();
                println!("Refresh paused");
            }
            (Some("resume"), _) => {
                scheduler.resume(make_tick(client.clone()));
                println!("Refresh resumed");
            }
            (Some("quit"), _) | (Some("exit"), _) => break,
            (Some(other), _) => {
                println!("Unknown command '{other}'");
                print_help();
            }
            (None, _) => {}
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "Commands: party <id> | char <id> | back | close | me <user_id> | pause | resume | quit"
    );
}

fn make_tick(
    client: Arc<BoardClient>,
) -> impl Fn(ViewState) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + 'static {
    move |view| {
        let client = client.clone();
        Box::pin(async move { refresh(&client, view).await })
    }
}

/// Fetch and render whatever the active view shows
///
/// Idempotent: timer ticks and user transitions both land here. A failed
/// fetch prints a static message and waits for the next tick.
async fn refresh(client: &BoardClient, view: ViewState) {
    match view {
        ViewState::AdventureList => match client.adventures().await {
            Ok(adventures) => print_adventures(&adventures),
            Err(error) => {
                tracing::warn!(error = %error, "Adventure fetch failed");
                println!("Failed to load adventures");
            }
        },
        ViewState::PartyView { adventure_id } => match client.party(adventure_id).await {
            Ok(party) => print_party(&party),
            Err(error) => {
                tracing::warn!(error = %error, "Party fetch failed");
                println!("Failed to load party members");
            }
        },
        ViewState::CharacterModal { character_id, .. } => {
            match client.character(character_id).await {
                Ok(sheet) => print_sheet(&sheet),
                Err(error) => {
                    tracing::warn!(error = %error, "Character fetch failed");
                    println!("Failed to load character details");
                }
            }
        }
    }
}

async fn show_my_character(client: &BoardClient, user_id: UserId) {
    match client.my_character(user_id).await {
        Ok(Some(sheet)) => print_sheet(&sheet),
        Ok(None) => println!("No active character found for this user"),
        Err(error) => {
            tracing::warn!(error = %error, "My-character fetch failed");
            println!("Failed to load character details");
        }
    }
}

fn print_adventures(adventures: &[AdventureDto]) {
    println!("\n=== Active adventures ===");
    if adventures.is_empty() {
        println!("No active adventures.");
        return;
    }
    for adventure in adventures {
        println!(
            "#{:<6} chat {:<12} {} participant(s)  since {}",
            adventure.adventure_id,
            adventure.chat_id,
            adventure.participant_count,
            adventure.created_at.format("%Y-%m-%d %H:%M")
        );
    }
}

fn print_party(party: &[CharacterSheetDto]) {
    println!("\n=== Party ===");
    if party.is_empty() {
        println!("Nobody has joined yet.");
        return;
    }
    for member in party {
        println!(
            "#{:<6} {} (Lv. {}) {}  HP {}/{}",
            member.character_id,
            member.name,
            member.level,
            member.class_name.as_deref().unwrap_or("-"),
            member.hit_points,
            member.max_hit_points
        );
    }
}

fn print_sheet(sheet: &CharacterSheetDto) {
    println!("\n=== {} ===", sheet.name);
    println!(
        "{} {} - Level {} ({} XP)",
        sheet.race_name.as_deref().unwrap_or("-"),
        sheet.class_name.as_deref().unwrap_or("-"),
        sheet.level,
        sheet.experience
    );
    if let Some(origin) = &sheet.origin_name {
        println!("Origin: {origin}");
    }
    println!("HP {}/{}", sheet.hit_points, sheet.max_hit_points);
    println!("Money: {} coins", sheet.money);
    let proficiency = sheet
        .proficiency_bonus
        .map(|bonus| format!("+{bonus}"))
        .unwrap_or_else(|| "-".to_string());
    println!("Proficiency bonus: {proficiency}");

    println!("Abilities:");
    for (label, score) in [
        ("STR", sheet.strength),
        ("DEX", sheet.dexterity),
        ("CON", sheet.constitution),
        ("INT", sheet.intelligence),
        ("WIS", sheet.wisdom),
        ("CHA", sheet.charisma),
    ] {
        println!("  {label} {score:>2} ({})", format_modifier(score));
    }

    if sheet.skills.is_empty() {
        println!("Skills: none");
    } else {
        println!("Skills: {}", sheet.skills.join(", "));
    }

    println!("Equipment:");
    if sheet.equipment.is_empty() {
        println!("  none");
    }
    for item in &sheet.equipment {
        println!("  {}", format_equipment(item));
    }

    if !sheet.spells.is_empty() {
        println!("Spells:");
        let mut by_level: BTreeMap<i32, Vec<&str>> = BTreeMap::new();
        for spell in &sheet.spells {
            by_level.entry(spell.level).or_default().push(&spell.name);
        }
        for (level, names) in by_level {
            let heading = if level == 0 {
                "Cantrips".to_string()
            } else {
                format!("Level {level}")
            };
            println!("  {heading}: {}", names.join(", "));
        }
    }
}

fn format_modifier(score: i32) -> String {
    let modifier = AbilityScores::modifier(score);
    if modifier >= 0 {
        format!("+{modifier}")
    } else {
        modifier.to_string()
    }
}

fn format_equipment(item: &EquipmentDto) -> String {
    let equipped = if item.is_equipped { " [equipped]" } else { "" };
    match item.item_type.as_str() {
        "armor" => {
            let ac = item
                .armor_class
                .map(|ac| format!(" (AC {ac})"))
                .unwrap_or_default();
            format!("Armor: {}{ac}{equipped}", item.item_name)
        }
        "weapon" => {
            let damage = match (&item.damage, &item.damage_type) {
                (Some(damage), Some(damage_type)) => format!(" ({damage} {damage_type})"),
                (Some(damage), None) => format!(" ({damage})"),
                _ => String::new(),
            };
            format!("Weapon: {}{damage}{equipped}", item.item_name)
        }
        other => format!("{other}: {}{equipped}", item.item_name),
    }
}
