//! Search command implementation.

use crate::cli::SearchArgs;
use crate::error::Result;
use crate::search::search_papers;

/// Execute the search command.
pub fn execute_search(args: SearchArgs) -> Result<()> {
    let hits = search_papers(args.category.into(), args.num_results)?;

    if hits.is_empty() {
        println!("No papers found.");
        return Ok(());
    }

    for (i, hit) in hits.iter().enumerate() {
        println!("{}. {}", i + 1, hit.title);
        println!("   {}", hit.url);
    }

    Ok(())
}
