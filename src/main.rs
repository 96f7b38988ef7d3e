use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = fn_clean::cli::parse();
    app::run(args)
}
