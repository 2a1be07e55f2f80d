use clap::CommandFactory;
use clap_mangen::Man;
use man_link::CliConfig;
use std::io;

// Render the CLI's own man page to stdout.
fn main() -> io::Result<()> {
    let cmd = CliConfig::command();

    let man = Man::new(cmd);
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    io::Write::write_all(&mut io::stdout(), &buffer)?;

    Ok(())
}
