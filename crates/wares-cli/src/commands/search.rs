use crate::commands::common::{
    hit_to_list_item, normalize_search_query, search_catalog, HitListItem,
};
use crate::error::CliError;

pub async fn run_search(
    query: &str,
    limit: usize,
    as_json: bool,
    base_url: &str,
) -> Result<(), CliError> {
    let normalized_query = normalize_search_query(query)?;
    let mut hits = search_catalog(&normalized_query, base_url).await?;

    // The endpoint offers no pagination; truncate client-side.
    hits.truncate(limit);

    if as_json {
        let json_items = hits
            .iter()
            .map(hit_to_list_item)
            .collect::<Vec<HitListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if hits.is_empty() {
        println!("No results");
    } else {
        for hit in &hits {
            println!("{}", hit.name());
        }
    }

    Ok(())
}
