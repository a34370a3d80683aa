use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = doc_archive::cli::parse();
    app::run(args)
}
