//! List command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;

use urus_controller::LoadState;
use urus_core::PageRequest;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub conn: ConnectionArgs,

    /// Page number to fetch
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let mut controller = super::controller(&args.conn)?;

    controller
        .load_page(PageRequest::ByOffset(args.page))
        .await
        .context("Failed to load page")?;

    let page = match controller.load_state() {
        LoadState::Loaded(page) => page,
        LoadState::Failed(err) => bail!("Failed to load page: {err}"),
        _ => bail!("Load did not complete"),
    };

    if page.items.is_empty() {
        eprintln!("{}", "No records found.".dimmed());
        return Ok(());
    }

    for record in &page.items {
        if args.pretty {
            output::json_pretty(record)?;
        } else {
            output::json(record)?;
        }
        println!();
    }

    if let Some(total) = page.total {
        let pages = page
            .page_count(controller.schema().page_limit())
            .unwrap_or(0);
        output::field("Total", &format!("{total} records, {pages} pages"));
    }
    if let Some(next) = &page.next {
        output::field("Next", next);
    }
    if let Some(previous) = &page.previous {
        output::field("Previous", previous);
    }

    Ok(())
}
