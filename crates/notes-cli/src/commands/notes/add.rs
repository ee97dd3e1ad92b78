use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::read_field;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let (mut store, mut notes) = ctx.open_store()?;

    let title = read_field("Title", args.title.clone())?;
    let content = read_field("Content", args.content.clone())?;

    let replaced = notes.insert(title.as_str(), content)?.is_some();
    store.save(&notes)?;

    if !ctx.quiet() {
        if replaced {
            println!("Replaced note \"{}\"", title);
        } else {
            println!("Added note \"{}\"", title);
        }
    }
    Ok(())
}
