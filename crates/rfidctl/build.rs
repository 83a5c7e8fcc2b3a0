//! Renders `rfidctl(1)` and one page per subcommand into `$OUT_DIR/man`.

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;

// cli.rs only needs clap and clap_complete, both build-dependencies.
#[path = "src/cli.rs"]
#[allow(dead_code)]
mod cli;

fn main() -> io::Result<()> {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("OUT_DIR is not set"))?;
    let man_dir = out_dir.join("man");
    std::fs::create_dir_all(&man_dir)?;

    write_pages(&cli::Cli::command(), &man_dir)
}

/// Write the page for `cmd`, then recurse into visible subcommands named
/// `parent-child`.
fn write_pages(cmd: &clap::Command, dir: &Path) -> io::Result<()> {
    let name = cmd.get_name().to_owned();

    let mut page = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut page)?;
    std::fs::write(dir.join(format!("{name}.1")), page)?;

    cmd.get_subcommands()
        .filter(|sub| !sub.is_hide_set())
        .try_for_each(|sub| {
            let page_cmd = sub.clone().name(format!("{name}-{}", sub.get_name()));
            write_pages(&page_cmd, dir)
        })
}
