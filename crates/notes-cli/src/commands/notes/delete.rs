use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::helpers::read_field;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let (mut store, mut notes) = ctx.open_store()?;

    let title = read_field("Title", args.title.clone())?;
    let removed = notes.remove(&title).is_some();
    store.save(&notes)?;

    if removed {
        if !ctx.quiet() {
            println!("Deleted note \"{}\"", title);
        }
    } else {
        tracing::warn!("No note titled \"{}\"; nothing deleted", title);
    }
    Ok(())
}
