use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::errors::CliError;
use crate::output::{parse_output_format, render_json, render_plain, render_table, OutputFormat};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }

    let (mut store, notes) = ctx.open_store()?;

    if args.json {
        println!("{}", render_json(&notes)?);
    } else {
        match format.unwrap_or(OutputFormat::Plain) {
            OutputFormat::Plain => {
                if !ctx.quiet() {
                    println!("All notes:");
                }
                print!("{}", render_plain(&notes));
            }
            OutputFormat::Table => println!("{}", render_table(&notes)),
        }
    }

    // An empty store stays as it is; there is nothing to encrypt.
    if !notes.is_empty() {
        store.save(&notes)?;
    }
    Ok(())
}
