use tracing::debug;

use roster_core::SearchQuery;

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::helpers::parse_output_format;
use crate::output::{print_person_list, EMPTY_SEARCH};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.json, args.format.as_deref())?;
    let store = ctx.open_store()?;
    let persons = store.load_all();

    let query = SearchQuery::new(args.term.as_str());
    let matches = query.filter(&persons);
    debug!(term = query.term(), total = persons.len(), matched = matches.len(), "search");

    let ui_ctx = ctx.ui_context(args.json, format);
    print_person_list(&ui_ctx, &matches, ctx.quiet(), EMPTY_SEARCH)
}
