mod io {
    use std::str::{from_utf8, FromStr};

    use anyhow::{anyhow, Context};

    /// Tokens and lines borrow the underlying buffer, not the cursor.
    pub trait InputStream<'a> {
        fn token(&mut self) -> Option<&'a [u8]>;
        fn line(&mut self) -> Option<&'a [u8]>;

        fn value<T>(&mut self) -> anyhow::Result<T>
        where
            T: FromStr,
            T::Err: std::error::Error + Send + Sync + 'static,
        {
            let token = self
                .token()
                .ok_or_else(|| anyhow!("unexpected end of input"))?;
            let token = from_utf8(token).context("token is not valid UTF-8")?;
            token
                .parse::<T>()
                .with_context(|| format!("cannot parse token {token:?}"))
        }
    }

    #[inline]
    fn is_whitespace(c: u8) -> bool {
        c <= b' '
    }

    fn trim_newline(mut s: &[u8]) -> &[u8] {
        while let Some(&(b'\n' | b'\r' | 0)) = s.last() {
            s = &s[..s.len() - 1];
        }
        s
    }

    impl<'a> InputStream<'a> for &'a [u8] {
        fn token(&mut self) -> Option<&'a [u8]> {
            let idx = self.iter().position(|&c| !is_whitespace(c))?;
            *self = &self[idx..];
            let idx = self
                .iter()
                .position(|&c| is_whitespace(c))
                .unwrap_or(self.len());
            let (token, buf_new) = self.split_at(idx);
            *self = buf_new;
            Some(token)
        }

        fn line(&mut self) -> Option<&'a [u8]> {
            if self.is_empty() {
                return None;
            }
            let idx = self
                .iter()
                .position(|&c| c == b'\n')
                .map(|idx| idx + 1)
                .unwrap_or(self.len());
            let (line, buf_new) = self.split_at(idx);
            *self = buf_new;
            Some(trim_newline(line))
        }
    }
}

use std::io::{BufWriter, Read, Write};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use io::InputStream;
use ps_library::{DisjointSet, PrefixFunction, SegTree, DEFAULT_DELIMITER};

/// Solves classic judge problems from stdin with the ps_library primitives.
#[derive(Debug, Parser)]
#[command(name = "main", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Point assignment and inclusive range sums over a segment tree.
    RangeSum,
    /// Number of connected components of an undirected graph.
    Components,
    /// 1-based offsets of every occurrence of a pattern in a text.
    Find {
        /// Separator placed between pattern and text; must occur in neither.
        #[arg(long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,
    },
}

fn one_based(x: usize) -> anyhow::Result<usize> {
    x.checked_sub(1)
        .context("positions are 1-based, got 0")
}

fn range_sum(mut input: &[u8], output: &mut impl Write) -> anyhow::Result<()> {
    let n: usize = input.value()?;
    let m: usize = input.value()?;
    let k: usize = input.value()?;
    let xs = (0..n)
        .map(|_| input.value::<i64>())
        .collect::<anyhow::Result<Vec<_>>>()?;
    let mut tree = SegTree::new(xs, |a: &i64, b: &i64| a + b);

    for _ in 0..m + k {
        let cmd: u8 = input.value()?;
        let b: usize = input.value()?;
        let c: i64 = input.value()?;
        match cmd {
            1 => tree.set(one_based(b)?, c)?,
            2 => {
                let end = usize::try_from(c).context("range end must be positive")?;
                writeln!(output, "{}", tree.get(one_based(b)?, one_based(end)?)?)?;
            }
            _ => bail!("unknown command {cmd}"),
        }
    }
    Ok(())
}

fn components(mut input: &[u8], output: &mut impl Write) -> anyhow::Result<()> {
    let n: usize = input.value()?;
    let m: usize = input.value()?;
    let mut dset = DisjointSet::new(n);
    for _ in 0..m {
        let u = one_based(input.value()?)?;
        let v = one_based(input.value()?)?;
        dset.union(u, v)?;
    }
    writeln!(output, "{}", dset.count())?;
    Ok(())
}

fn find(mut input: &[u8], output: &mut impl Write, delimiter: char) -> anyhow::Result<()> {
    let text = input.line().context("missing text line")?;
    let text = std::str::from_utf8(text).context("text is not valid UTF-8")?;
    let pattern = input.line().context("missing pattern line")?;
    let pattern = std::str::from_utf8(pattern).context("pattern is not valid UTF-8")?;
    if pattern.is_empty() {
        bail!("pattern must not be empty");
    }

    let found = text.all_indices_of(pattern, delimiter);
    writeln!(output, "{}", found.len())?;
    let positions: Vec<String> = found.iter().map(|i| (i + 1).to_string()).collect();
    writeln!(output, "{}", positions.join(" "))?;
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    log::debug!("running {:?}", cli.command);

    let mut input_buf: Vec<u8> = vec![];
    std::io::stdin()
        .lock()
        .read_to_end(&mut input_buf)
        .context("failed to read stdin")?;

    let mut output = BufWriter::new(std::io::stdout().lock());
    match cli.command {
        Command::RangeSum => range_sum(&input_buf, &mut output)?,
        Command::Components => components(&input_buf, &mut output)?,
        Command::Find { delimiter } => find(&input_buf, &mut output, delimiter)?,
    }
    output.flush()?;
    Ok(())
}
