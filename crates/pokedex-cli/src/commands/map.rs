use super::Session;
use crate::error::Result;
use pokeapi_client::AreaPage;
use std::io::Write;

pub(super) async fn next_page(session: &mut Session, out: &mut dyn Write) -> Result<()> {
    if session.maps_loaded && session.next_url.is_none() {
        writeln!(out, "you're on the last page")?;
        return Ok(());
    }
    let page = session.api.location_areas(session.next_url.as_deref()).await?;
    show(session, page, out)
}

pub(super) async fn previous_page(session: &mut Session, out: &mut dyn Write) -> Result<()> {
    let Some(url) = session.previous_url.clone() else {
        writeln!(out, "you're on the first page")?;
        return Ok(());
    };
    let page = session.api.location_areas(Some(&url)).await?;
    show(session, page, out)
}

fn show(session: &mut Session, page: AreaPage, out: &mut dyn Write) -> Result<()> {
    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    session.next_url = page.next;
    session.previous_url = page.previous;
    session.maps_loaded = true;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::commands::testing::{self, *};
    use crate::commands::Command;
    use crate::error::CliError;
    use std::sync::atomic::Ordering;

    fn pages() -> [(&'static str, &'static str); 3] {
        [
            (FIRST_PAGE, FIRST_PAGE_JSON),
            (FIRST_PAGE_BY_OFFSET, FIRST_PAGE_JSON),
            (LAST_PAGE, LAST_PAGE_JSON),
        ]
    }

    #[tokio::test]
    async fn test_map_walks_forward_to_last_page() {
        let (mut session, _) = testing::session(&pages());

        let (result, output) = testing::run(&mut session, Command::Map, &[]).await;
        result.unwrap();
        assert_eq!(output, "canalave-city-area\neterna-city-area\n");

        let (_, output) = testing::run(&mut session, Command::Map, &[]).await;
        assert_eq!(output, "pastoria-city-area\n");

        let (result, output) = testing::run(&mut session, Command::Map, &[]).await;
        result.unwrap();
        assert_eq!(output, "you're on the last page\n");
    }

    #[tokio::test]
    async fn test_mapb_on_first_page() {
        let (mut session, fetcher) = testing::session(&pages());

        let (result, output) = testing::run(&mut session, Command::MapBack, &[]).await;
        result.unwrap();
        assert_eq!(output, "you're on the first page\n");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);

        testing::run(&mut session, Command::Map, &[]).await.0.unwrap();
        let (_, output) = testing::run(&mut session, Command::MapBack, &[]).await;
        assert_eq!(output, "you're on the first page\n");
    }

    #[tokio::test]
    async fn test_mapb_goes_back_and_pages_are_cached() {
        let (mut session, fetcher) = testing::session(&pages());

        testing::run(&mut session, Command::Map, &[]).await.0.unwrap();
        testing::run(&mut session, Command::Map, &[]).await.0.unwrap();
        let (result, output) = testing::run(&mut session, Command::MapBack, &[]).await;
        result.unwrap();
        assert_eq!(output, "canalave-city-area\neterna-city-area\n");
        assert_eq!(session.next_url.as_deref(), Some(LAST_PAGE));
        assert!(session.previous_url.is_none());

        let (_, output) = testing::run(&mut session, Command::Map, &[]).await;
        assert_eq!(output, "pastoria-city-area\n");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_map_failure_keeps_position() {
        let (mut session, _) = testing::session(&[]);

        let (result, output) = testing::run(&mut session, Command::Map, &[]).await;

        assert!(matches!(result, Err(CliError::Api(_))));
        assert!(output.is_empty());
        assert!(!session.maps_loaded);
    }
}
