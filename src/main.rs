use std::io;

use astdot::{example, GraphBuilder};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr only; RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_module("astdot", log::LevelFilter::Warn)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let mut builder = GraphBuilder::new();
    example::emit(&mut builder, &mut io::stdout().lock())?;
    Ok(())
}
