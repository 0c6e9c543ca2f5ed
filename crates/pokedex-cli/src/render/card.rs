//! Pokédex entry card

use super::blocks::ART_SIZE;
use super::{title_case, visible_width};
use crossterm::style::{Color, Stylize};
use pokeapi_client::Pokemon;

const BAR_CELLS: u32 = 10;
const POINTS_PER_CELL: u32 = 20;

/// Lines of an `inspect` card; `art` is drawn under the title when present
pub fn render_card(pokemon: &Pokemon, art: Option<&[String]>) -> Vec<String> {
    let mut lines = Vec::new();

    let title = format!("{} (#{})", title_case(&pokemon.name), pokemon.id)
        .bold()
        .to_string();
    match art {
        Some(art) => {
            let padding = (ART_SIZE as usize).saturating_sub(visible_width(&title)) / 2;
            lines.push(format!("{}{}", " ".repeat(padding), title));
            lines.push(String::new());
            lines.extend(art.iter().cloned());
        }
        None => lines.push(title),
    }
    lines.push(String::new());

    lines.push(format!("Height: {} dm", pokemon.height));
    lines.push(format!("Weight: {} hg", pokemon.weight));
    lines.push(format!("Base Experience: {}", pokemon.base_experience));

    lines.push(String::new());
    lines.push(heading("Types"));
    let badges: Vec<String> = pokemon.types.iter().map(|t| type_badge(t)).collect();
    lines.push(badges.join(" "));

    if !pokemon.stats.is_empty() {
        lines.push(String::new());
        lines.push(heading("Stats"));
        for stat in &pokemon.stats {
            lines.push(format!(
                "{}: {} [{}]",
                title_case(&stat.name),
                stat.base,
                stat_bar(stat.base)
            ));
        }
    }

    if !pokemon.abilities.is_empty() {
        lines.push(String::new());
        lines.push(heading("Abilities"));
        for ability in &pokemon.abilities {
            lines.push(format!("• {}", title_case(ability)));
        }
    }

    lines
}

fn heading(text: &str) -> String {
    format!("{}:", text).bold().underlined().to_string()
}

/// Ten cells, one filled per 20 points, capped at full
pub fn stat_bar(value: u32) -> String {
    let filled = (value / POINTS_PER_CELL).min(BAR_CELLS) as usize;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(BAR_CELLS as usize - filled)
    )
}

fn type_badge(kind: &str) -> String {
    let (fg, bg) = type_colours(kind);
    format!(" {} ", title_case(kind))
        .with(fg)
        .on(bg)
        .bold()
        .to_string()
}

fn type_colours(kind: &str) -> (Color, Color) {
    match kind {
        "fire" | "fighting" => (Color::White, Color::DarkRed),
        "water" => (Color::White, Color::DarkBlue),
        "grass" | "bug" => (Color::White, Color::DarkGreen),
        "electric" | "ground" | "rock" => (Color::Black, Color::DarkYellow),
        "psychic" | "dragon" | "poison" | "ghost" => (Color::White, Color::DarkMagenta),
        "fairy" => (Color::Black, Color::DarkMagenta),
        "ice" | "flying" => (Color::Black, Color::DarkCyan),
        "steel" | "normal" => (Color::Black, Color::Grey),
        _ => (Color::White, Color::Black),
    }
}
