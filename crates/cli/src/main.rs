use anyhow::Context;

use stockroom_auth::AccessGate;
use stockroom_catalog::{Catalog, MemoryStore, StockStore};
use stockroom_cli::session::Session;
use stockroom_store::SqliteStore;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let store: Box<dyn StockStore> = match std::env::var("STOCKROOM_DB") {
        Ok(path) => {
            tracing::info!(%path, "using the sqlite-backed stock store");
            Box::new(
                SqliteStore::open(&path)
                    .with_context(|| format!("failed to open stock store at {path}"))?,
            )
        }
        Err(_) => {
            tracing::info!("STOCKROOM_DB not set; stock lives in memory for this session");
            Box::new(MemoryStore::new())
        }
    };

    let mut catalog = Catalog::new(store);
    let seeded = catalog
        .bootstrap()
        .context("failed to seed the empty catalog")?;
    if seeded > 0 {
        tracing::info!(seeded, "seeded example items into an empty store");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(
        AccessGate::default(),
        catalog,
        stdin.lock(),
        stdout.lock(),
    );
    session.run()
}
