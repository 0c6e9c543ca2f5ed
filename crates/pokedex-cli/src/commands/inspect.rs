use super::Session;
use crate::error::{CliError, Result};
use crate::render::blocks::{fallback_art, sprite_to_blocks};
use crate::render::card::render_card;
use crossterm::style::Stylize;
use pokeapi_client::Pokemon;
use sprite_cache::SpriteStore;
use std::io::Write;
use tracing::debug;

/// Narrowest terminal that fits the sprite art beside its margins
pub const MIN_ART_WIDTH: u16 = 130;

pub(super) async fn run(session: &mut Session, args: &[String], out: &mut dyn Write) -> Result<()> {
    let Some(name) = args.first() else {
        return Err(CliError::Usage(
            "inspect command requires a Pokemon name".to_string(),
        ));
    };

    let Some(pokemon) = session.pokedex.get(name) else {
        writeln!(out, "you have not caught that pokemon")?;
        return Ok(());
    };

    // Unknown width (not a tty) still gets art
    let narrow = matches!((session.terminal_width)(), Some(width) if width < MIN_ART_WIDTH);
    if narrow {
        for line in render_card(pokemon, None) {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
        let hint = format!(
            "Terminal too narrow for sprite art. Resize to at least {} columns to see the Pokemon sprite!",
            MIN_ART_WIDTH
        );
        writeln!(out, "{}", hint.yellow())?;
        return Ok(());
    }

    let art = sprite_art(&session.sprites, pokemon).await;
    for line in render_card(pokemon, Some(&art)) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Half-block art for the Pokémon's sprite, or the Poké Ball if it can't be drawn
async fn sprite_art(sprites: &SpriteStore, pokemon: &Pokemon) -> Vec<String> {
    let Some(url) = pokemon.preferred_sprite() else {
        return fallback_art();
    };
    let bytes = match sprites.fetch(url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(pokemon = %pokemon.name, url = %url, error = %e, "Sprite unavailable");
            return fallback_art();
        }
    };
    match sprite_to_blocks(&bytes) {
        Ok(rows) => rows,
        Err(e) => {
            debug!(pokemon = %pokemon.name, url = %url, error = %e, "Sprite could not be decoded");
            fallback_art()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::testing::{self, *};
    use crate::commands::{Command, Session};
    use crate::render::strip_ansi;
    use async_trait::async_trait;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use sprite_cache::{Downloader, SpriteStore};
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct PngDownloader {
        png: Vec<u8>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Downloader for PngDownloader {
        async fn download(&self, _url: &str) -> Result<Vec<u8>, sprite_cache::BoxError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.png.clone())
        }
    }

    /// Red square on a transparent border
    fn red_square_png() -> Vec<u8> {
        let mut img = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 0]));
        for x in 4..12 {
            for y in 4..12 {
                img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }
        let mut png = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();
        png
    }

    fn caught_pikachu() -> Session {
        let (mut session, _) = testing::session(&[]);
        let mut pokemon = pikachu();
        pokemon.sprite_url = Some("https://sprites.example/25.png".to_string());
        session.pokedex.insert("pikachu".to_string(), pokemon);
        session
    }

    #[tokio::test]
    async fn test_inspect_not_caught() {
        let (mut session, _) = testing::session(&[]);
        let (result, output) = testing::run(&mut session, Command::Inspect, &["mew"]).await;
        result.unwrap();
        assert_eq!(output, "you have not caught that pokemon\n");
    }

    #[tokio::test]
    async fn test_inspect_requires_name() {
        let (mut session, _) = testing::session(&[]);
        let (result, _) = testing::run(&mut session, Command::Inspect, &[]).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "inspect command requires a Pokemon name"
        );
    }

    #[tokio::test]
    async fn test_narrow_terminal_is_text_only() {
        let mut session = caught_pikachu();
        session.terminal_width = || Some(80);

        let (result, output) = testing::run(&mut session, Command::Inspect, &["pikachu"]).await;

        result.unwrap();
        let output = strip_ansi(&output);
        assert!(output.starts_with("Pikachu (#25)\n"));
        assert!(output.contains("Height: 4 dm"));
        assert!(output.contains("Resize to at least 130 columns"));
        assert!(!output.contains("Poke Ball"));
    }

    #[tokio::test]
    async fn test_offline_sprite_falls_back_to_poke_ball() {
        let mut session = caught_pikachu();

        let (result, output) = testing::run(&mut session, Command::Inspect, &["pikachu"]).await;

        result.unwrap();
        let output = strip_ansi(&output);
        assert!(output.contains("Poke Ball"));
        assert!(output.contains("Weight: 60 hg"));
        assert!(output.contains("• Lightning-Rod"));
    }

    #[tokio::test]
    async fn test_no_sprite_url_falls_back_to_poke_ball() {
        let (mut session, _) = testing::session(&[]);
        session.pokedex.insert("pikachu".to_string(), pikachu());

        let (_, output) = testing::run(&mut session, Command::Inspect, &["pikachu"]).await;
        assert!(strip_ansi(&output).contains("Poke Ball"));
    }

    #[tokio::test]
    async fn test_wide_terminal_draws_cached_sprite() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = Arc::new(PngDownloader {
            png: red_square_png(),
            calls: AtomicUsize::new(0),
        });
        let mut session = caught_pikachu();
        session.sprites = SpriteStore::new(Some(dir.path().to_path_buf()), downloader.clone());
        session.terminal_width = || Some(200);

        let (result, output) = testing::run(&mut session, Command::Inspect, &["pikachu"]).await;
        result.unwrap();
        assert!(output.contains('▄'));
        assert!(!strip_ansi(&output).contains("Poke Ball"));

        let (_, again) = testing::run(&mut session, Command::Inspect, &["pikachu"]).await;
        assert_eq!(again, output);
        assert_eq!(downloader.calls.load(Ordering::SeqCst), 1);
    }
}
