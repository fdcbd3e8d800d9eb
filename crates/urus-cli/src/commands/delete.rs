//! Delete command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use urus_core::{PageRequest, RecordRef};

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub conn: ConnectionArgs,

    /// IV half of the record reference
    #[arg(long)]
    pub iv: String,

    /// Ciphertext half of the record reference
    #[arg(long)]
    pub data: String,

    /// Page the record is on
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Confirm the deletion
    #[arg(long)]
    pub yes: bool,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    if !args.yes {
        bail!("Deletion requires confirmation; pass --yes to proceed");
    }

    let id = RecordRef::new(&args.iv, &args.data).context("Invalid record reference")?;

    let mut controller = super::controller(&args.conn)?;
    controller
        .load_page(PageRequest::ByOffset(args.page))
        .await
        .context("Failed to load page")?;

    controller
        .delete_record(&id, args.yes)
        .await
        .context("Failed to delete record")?;

    output::success("Record deleted");
    Ok(())
}
