//! Region listing command.

use anyhow::{Context, Result};
use tricovid_core::search::suggestions;

use crate::cli::output::{print_info, print_table_header, print_table_row};
use crate::shared::services::Services;

pub async fn list_regions(services: &Services, filter: Option<&str>, strict: bool) -> Result<()> {
    let names = if strict {
        services
            .catalog
            .try_list_regions()
            .await
            .context("Failed to list regions")?
    } else {
        services.catalog.list_regions().await
    };

    let shown: Vec<&str> = match filter {
        Some(prefix) => suggestions(&names, prefix, usize::MAX),
        None => names.iter().map(String::as_str).collect(),
    };

    if shown.is_empty() {
        print_info("No regions available.");
        return Ok(());
    }

    print_table_header(&[("#", 5), ("REGION", 48)]);
    for (index, name) in shown.iter().enumerate() {
        print_table_row(&[(&(index + 1).to_string(), 5), (name, 48)]);
    }
    println!();
    println!("{} of {} regions", shown.len(), names.len());

    Ok(())
}
