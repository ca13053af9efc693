// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Depboard CLI entrypoint.
//!
//! Reads a board as JSON from a file (or stdin) and prints the rendered diagram to stdout.
//! Diagnostics go to stderr; set `RUST_LOG=depboard=debug` to trace routing decisions.

use std::error::Error;
use std::io::Read;

use depboard::{render_board_annotated, render_board_text, BoardInput, Charset, RenderOptions};
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<board.json>] [--ascii] [--no-trim] [--highlights]\n  {program} --schema\n\nReads the board from stdin when no file is given.\n--ascii draws lines with `- | +` instead of box-drawing characters.\n--no-trim keeps trailing spaces and blank rows.\n--highlights prints JSON with the text and the highlight spans of every block and connector.\n--schema prints the JSON schema of the board input and exits."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    board_path: Option<String>,
    ascii: bool,
    no_trim: bool,
    highlights: bool,
    schema: bool,
}

impl CliOptions {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            charset: if self.ascii { Charset::Ascii } else { Charset::Unicode },
            trim_trailing_whitespace: !self.no_trim,
        }
    }
}

fn parse_options(args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    for arg in args {
        let flag = match arg.as_str() {
            "--ascii" => &mut options.ascii,
            "--no-trim" => &mut options.no_trim,
            "--highlights" => &mut options.highlights,
            "--schema" => &mut options.schema,
            _ if arg.starts_with('-') && arg != "-" => return Err(()),
            _ => {
                if options.board_path.is_some() {
                    return Err(());
                }
                options.board_path = Some(arg);
                continue;
            }
        };
        if *flag {
            return Err(());
        }
        *flag = true;
    }

    if options.schema
        && (options.board_path.is_some() || options.ascii || options.no_trim || options.highlights)
    {
        return Err(());
    }

    Ok(options)
}

fn read_board_text(path: Option<&str>) -> std::io::Result<String> {
    match path {
        Some(path) if path != "-" => std::fs::read_to_string(path),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(options: &CliOptions) -> Result<String, Box<dyn Error>> {
    if options.schema {
        return Ok(BoardInput::json_schema());
    }

    let text = read_board_text(options.board_path.as_deref())?;
    let board = BoardInput::from_json(&text)?.into_board()?;
    let render_options = options.render_options();

    if options.highlights {
        let annotated = render_board_annotated(&board, render_options)?;
        let out = serde_json::json!({
            "text": annotated.text,
            "highlights": annotated.highlights_by_name(),
        });
        return Ok(serde_json::to_string_pretty(&out)?);
    }

    Ok(render_board_text(&board, render_options)?)
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "depboard".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    init_logging();

    match run(&options) {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("depboard: {err}");
            std::process::exit(1);
        }
    }
}
