use std::io::{self, BufRead, Write};

use colored::*;

use crate::terminal::colors;

/// Asks for the network to sweep on stdin.
pub fn prompt_target() -> anyhow::Result<String> {
    let prompt = format!(
        "{} {} ",
        ">".color(colors::SEPARATOR),
        "Target network (CIDR, e.g. 192.168.1.0/24):".color(colors::PRIMARY)
    );
    read_line_from(&prompt, &mut io::stdin().lock(), &mut io::stdout())
}

fn read_line_from<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> anyhow::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("no target given");
    }
    Ok(line.trim().to_string())
}
