use roster_core::Person;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::parse_output_format;
use crate::output::{print_person_list, EMPTY_LIST};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.json, args.format.as_deref())?;
    let store = ctx.open_store()?;
    let persons = store.load_all();

    let ui_ctx = ctx.ui_context(args.json, format);
    let rows: Vec<&Person> = persons.iter().collect();
    print_person_list(&ui_ctx, &rows, ctx.quiet(), EMPTY_LIST)
}
