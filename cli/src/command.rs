use anyhow::{Context, bail};
use sweeper_core::Coord2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    /// Start over, optionally with a fixed seed
    New(Option<u64>),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  r X Y     reveal the cell at column X, row Y
  f X Y     toggle a flag at column X, row Y
  n [SEED]  start a new game
  h         show this help
  q         quit
an empty line redraws the board";

impl Command {
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Self::Show);
        };

        let command = match name {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            "n" | "new" => Self::New(
                words
                    .next()
                    .map(|seed| seed.parse::<u64>().with_context(|| format!("invalid seed {seed:?}")))
                    .transpose()?,
            ),
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}, try \"h\""),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected argument {extra:?}");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let mut next = |axis: &str| -> anyhow::Result<u8> {
        let word = words.next().with_context(|| format!("missing {axis}"))?;
        word.parse()
            .with_context(|| format!("invalid {axis} {word:?}"))
    };
    Ok((next("column")?, next("row")?))
}
