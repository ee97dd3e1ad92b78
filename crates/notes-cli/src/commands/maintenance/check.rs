use crate::app::{missing_store_message, AppContext};

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let path = ctx.store_path()?;
    if !path.exists() {
        return Err(anyhow::anyhow!(missing_store_message(path)));
    }

    let (store, notes) = ctx.open_store()?;

    if !ctx.quiet() {
        println!("Check: OK");
        println!("- store: {}", store.path().display());
        println!("- decryption: OK");
        println!("- records: OK ({} note{})", notes.len(), if notes.len() == 1 { "" } else { "s" });
    }
    Ok(())
}
