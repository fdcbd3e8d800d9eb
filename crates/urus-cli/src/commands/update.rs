//! Update command implementation.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;

use urus_controller::DraftValue;
use urus_core::{FileUpload, PageRequest, RecordRef};

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
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

    /// Field to set, as NAME=VALUE (repeatable)
    #[arg(long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,

    /// File field to set, as NAME=PATH (repeatable)
    #[arg(long = "image", value_name = "NAME=PATH")]
    pub images: Vec<String>,
}

pub async fn run(args: UpdateArgs) -> Result<()> {
    let id = RecordRef::new(&args.iv, &args.data).context("Invalid record reference")?;

    let mut controller = super::controller(&args.conn)?;
    controller
        .load_page(PageRequest::ByOffset(args.page))
        .await
        .context("Failed to load page")?;

    let record = controller
        .page()
        .and_then(|page| page.items.iter().find(|r| r.id == id))
        .cloned();
    let Some(record) = record else {
        bail!("No record with that reference on page {}", args.page);
    };

    controller.select_for_view(&record)?;

    for pair in &args.fields {
        let (name, value) = split_pair(pair)?;
        controller.update_draft_field(name, DraftValue::Text(value.to_string()))?;
    }

    for pair in &args.images {
        let (name, path) = split_pair(pair)?;
        let file = read_upload(Path::new(path))?;
        controller.update_draft_field(name, DraftValue::File(file))?;
    }

    controller
        .submit_edit()
        .await
        .context("Failed to submit update")?;

    output::success("Record updated");
    Ok(())
}

fn split_pair(pair: &str) -> Result<(&str, &str)> {
    pair.split_once('=')
        .with_context(|| format!("Expected NAME=VALUE, got '{pair}'"))
}

fn read_upload(path: &Path) -> Result<FileUpload> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("File path has no name")?
        .to_string();
    let content_type = match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
    .to_string();

    Ok(FileUpload {
        file_name,
        content_type,
        bytes,
    })
}
