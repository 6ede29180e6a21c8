//! A small line-oriented language for driving a [`Partition`] by hand.
//!
//! ```text
//! # comment
//! add a b c
//! union a b
//! connected a c
//! expect-size a 2
//! ```

use std::io::Write;

use crate::{error::ScriptError, partition::Partition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Vec<String>),
    Union(String, String),
    Find(String),
    Connected(String, String),
    Size(String),
    Count,
    Sets,
    Dump,
    ExpectConnected(String, String),
    ExpectDisconnected(String, String),
    ExpectSize(String, usize),
    ExpectCount(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub command: Command,
}

pub fn parse(src: &str) -> Result<Vec<Line>, ScriptError> {
    let mut lines = vec![];
    for (i, text) in src.lines().enumerate() {
        let number = i + 1;
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let command = parse_command(text).map_err(|msg| ScriptError::Parse { line: number, msg })?;
        lines.push(Line { number, command });
    }
    Ok(lines)
}

fn parse_command(text: &str) -> Result<Command, String> {
    let mut words = text.split_whitespace();
    let Some(name) = words.next() else { return Err("empty command".to_string()) };
    let args: Vec<String> = words.map(str::to_string).collect();
    let arity = |n: usize| {
        if args.len() == n {
            Ok(())
        } else {
            Err(format!("`{}` takes {} argument(s), got {}", name, n, args.len()))
        }
    };
    let count = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| format!("`{}` is not a valid count", s))
    };
    let command = match name {
        "add" => {
            if args.is_empty() {
                return Err("`add` takes at least 1 argument".to_string());
            }
            Command::Add(args)
        }
        "union" => {
            arity(2)?;
            Command::Union(args[0].clone(), args[1].clone())
        }
        "find" => {
            arity(1)?;
            Command::Find(args[0].clone())
        }
        "connected" => {
            arity(2)?;
            Command::Connected(args[0].clone(), args[1].clone())
        }
        "size" => {
            arity(1)?;
            Command::Size(args[0].clone())
        }
        "count" => {
            arity(0)?;
            Command::Count
        }
        "sets" => {
            arity(0)?;
            Command::Sets
        }
        "dump" => {
            arity(0)?;
            Command::Dump
        }
        "expect-connected" => {
            arity(2)?;
            Command::ExpectConnected(args[0].clone(), args[1].clone())
        }
        "expect-disconnected" => {
            arity(2)?;
            Command::ExpectDisconnected(args[0].clone(), args[1].clone())
        }
        "expect-size" => {
            arity(2)?;
            Command::ExpectSize(args[0].clone(), count(&args[1])?)
        }
        "expect-count" => {
            arity(1)?;
            Command::ExpectCount(count(&args[0])?)
        }
        _ => return Err(format!("unknown command `{}`", name)),
    };
    Ok(command)
}

/// Runs `lines` against `forest`, writing query results to `out`. Stops at
/// the first failing line.
pub fn run<P, W>(lines: &[Line], forest: &mut P, out: &mut W) -> Result<(), ScriptError>
where
    P: Partition<String>,
    W: Write,
{
    for line in lines {
        run_line(line, forest, out)?;
    }
    Ok(())
}

/// Parses and runs `src` in one go.
pub fn run_str<P, W>(src: &str, forest: &mut P, out: &mut W) -> Result<(), ScriptError>
where
    P: Partition<String>,
    W: Write,
{
    let lines = parse(src)?;
    run(&lines, forest, out)
}

fn run_line<P, W>(line: &Line, forest: &mut P, out: &mut W) -> Result<(), ScriptError>
where
    P: Partition<String>,
    W: Write,
{
    let number = line.number;
    let forest_err = |source| ScriptError::Forest {
        line: number,
        source,
    };
    let expectation = |msg: String| ScriptError::Expectation { line: number, msg };

    match &line.command {
        Command::Add(xs) => {
            for x in xs {
                forest.add(x.clone());
            }
        }
        Command::Union(x, y) => {
            forest.union(x, y).map_err(forest_err)?;
        }
        Command::Find(x) => {
            let root = forest.find(x).map_err(forest_err)?;
            writeln!(out, "find {} = {}", x, root)?;
        }
        Command::Connected(x, y) => {
            let b = forest.connected(x, y).map_err(forest_err)?;
            writeln!(out, "connected {} {} = {}", x, y, b)?;
        }
        Command::Size(x) => {
            let n = forest.size_of_set(x).map_err(forest_err)?;
            writeln!(out, "size {} = {}", x, n)?;
        }
        Command::Count => {
            writeln!(out, "count = {}", forest.num_sets())?;
        }
        Command::Sets => {
            for set in forest.sets() {
                let members: Vec<&str> = set.into_iter().map(String::as_str).collect();
                writeln!(out, "{{{}}}", members.join(", "))?;
            }
        }
        Command::Dump => {
            for (x, p) in forest.parents() {
                writeln!(out, "{} -> {}", x, p)?;
            }
        }
        Command::ExpectConnected(x, y) => {
            if !forest.connected(x, y).map_err(forest_err)? {
                return Err(expectation(format!("{} and {} are not connected", x, y)));
            }
        }
        Command::ExpectDisconnected(x, y) => {
            if forest.connected(x, y).map_err(forest_err)? {
                return Err(expectation(format!("{} and {} are connected", x, y)));
            }
        }
        Command::ExpectSize(x, n) => {
            let size = forest.size_of_set(x).map_err(forest_err)?;
            if size != *n {
                return Err(expectation(format!(
                    "set of {} has {} element(s), expected {}",
                    x, size, n
                )));
            }
        }
        Command::ExpectCount(n) => {
            let count = forest.num_sets();
            if count != *n {
                return Err(expectation(format!("{} set(s), expected {}", count, n)));
            }
        }
    }
    Ok(())
}
