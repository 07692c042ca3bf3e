use std::io::Write;

use akil_config::Config;
use akil_core_board_contracts::board::BoardService;
use akil_models::{job::JobId, session::Session, SearchTerm};
use anyhow::anyhow;
use clap::Subcommand;

use crate::{
    environment::build_environment,
    render::{write_card, write_card_list, write_detail, CategoryStyleMap},
};

#[derive(Debug, Subcommand)]
pub enum BookmarksCommand {
    /// List the bookmarked jobs
    #[command(aliases(["ls", "l"]))]
    List,
    /// Bookmark a job, or remove the bookmark if it is already set
    #[command(aliases(["t"]))]
    Toggle {
        /// Id of the job posting
        id: String,
    },
}

impl BookmarksCommand {
    pub async fn invoke(self, config: Config, session: Session) -> anyhow::Result<()> {
        let env = build_environment(&config);
        let mut stdout = std::io::stdout().lock();
        match self {
            Self::List => list_bookmarks(&env.board, &session, &mut stdout).await,
            Self::Toggle { id } => {
                toggle_bookmark(&env.board, &session, parse_job_id(id)?, &mut stdout).await
            }
        }
    }
}

pub async fn jobs(config: Config, session: Session, search: Option<String>) -> anyhow::Result<()> {
    let search = search
        .map(|search| {
            SearchTerm::try_new(search).map_err(|err| anyhow!("Invalid search term: {err}"))
        })
        .transpose()?;

    let env = build_environment(&config);
    let mut stdout = std::io::stdout().lock();
    list_jobs(&env.board, &session, search, &mut stdout).await
}

pub async fn job(config: Config, id: String) -> anyhow::Result<()> {
    let env = build_environment(&config);
    let detail = env.board.job_detail(parse_job_id(id)?).await?;
    write_detail(&mut std::io::stdout().lock(), &detail)?;
    Ok(())
}

async fn list_jobs(
    board: &impl BoardService,
    session: &Session,
    search: Option<SearchTerm>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    board.load_jobs().await?;
    board.load_bookmarks(session).await?;

    let cards = match &search {
        Some(query) => board.cards_filtered(query),
        None => board.cards(),
    };
    write_card_list(
        out,
        &cards,
        session.is_authenticated(),
        &CategoryStyleMap::default(),
    )?;
    Ok(())
}

async fn list_bookmarks(
    board: &impl BoardService,
    session: &Session,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    anyhow::ensure!(
        session.is_authenticated(),
        "Not logged in. Pass --access-token or set AKIL_ACCESS_TOKEN."
    );

    board.load_jobs().await?;
    board.load_bookmarks(session).await?;

    let styles = CategoryStyleMap::default();
    let bookmarked = board
        .cards()
        .into_iter()
        .filter(|card| card.is_bookmarked)
        .collect::<Vec<_>>();
    writeln!(out, "{} bookmarked job(s)", bookmarked.len())?;
    for card in &bookmarked {
        writeln!(out)?;
        write_card(out, card, true, &styles)?;
    }
    Ok(())
}

async fn toggle_bookmark(
    board: &impl BoardService,
    session: &Session,
    job_id: JobId,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    board.load_jobs().await?;
    board.load_bookmarks(session).await?;

    let result = board.toggle_bookmark(session, job_id.clone()).await;
    if let Some(notice) = board.take_notice() {
        writeln!(out, "{}", notice.message)?;
    }
    result?;

    let bookmarked = board
        .cards()
        .into_iter()
        .find(|card| card.job.id == job_id)
        .is_some_and(|card| card.is_bookmarked);
    if bookmarked {
        writeln!(out, "Added bookmark for {}.", job_id.as_str())?;
    } else {
        writeln!(out, "Removed bookmark for {}.", job_id.as_str())?;
    }
    Ok(())
}

fn parse_job_id(id: String) -> anyhow::Result<JobId> {
    JobId::try_new(id).map_err(|err| anyhow!("Invalid job id: {err}"))
}

#[cfg(test)]
mod tests {
    use akil_core_board_contracts::board::{JobCardView, MockBoardService};
    use akil_demo::{job::ENGINEER, session::FOO};

    use super::*;

    #[tokio::test]
    async fn list_jobs_renders_the_cards() {
        // Arrange
        let board = MockBoardService::new()
            .with_load_jobs(Ok(()))
            .with_load_bookmarks(FOO.clone(), Ok(()))
            .with_cards(vec![JobCardView {
                job: ENGINEER.clone(),
                is_bookmarked: true,
                is_pending: false,
            }]);
        let mut out = Vec::new();

        // Act
        list_jobs(&board, &FOO, None, &mut out).await.unwrap();

        // Assert
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Showing 1 results"));
        assert!(output.contains("Software Engineer"));
        assert!(output.contains("[*] Remove bookmark"));
    }
}
