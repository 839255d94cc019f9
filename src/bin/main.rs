#[macro_use]
extern crate log;

use std::env;
use std::io::{self, BufRead, Write};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use gototab::prelude::*;
use gototab::render::{render_item, render_lines};

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            let broken_pipe = err
                .chain()
                .filter_map(|cause| cause.downcast_ref::<io::Error>())
                .any(|cause| cause.kind() == io::ErrorKind::BrokenPipe);
            if broken_pipe {
                std::process::exit(0)
            }
            eprintln!("gototab: {err:#}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> GototabOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("gototab")));
    args.extend(
        env::var("GOTOTAB_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    for arg in env::args().skip(1) {
        args.push(arg);
    }

    GototabOptions::parse_from(args).build()
}

fn print_line(line: &str, ending: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{line}{ending}")?;
    stdout.flush()?;
    Ok(())
}

/// One tab per `title<delimiter>url` line; activating a tab prints its url
fn read_tabs(input: impl BufRead, delimiter: &str, ending: &'static str) -> Result<Vec<TabItem>> {
    let mut tabs = Vec::new();
    for line in input.lines() {
        let line = line.wrap_err("failed to read tabs from stdin")?;
        if line.is_empty() {
            continue;
        }
        let (title, url) = line.split_once(delimiter).unwrap_or((line.as_str(), ""));
        let target = if url.is_empty() { title } else { url }.to_string();
        tabs.push(TabItem::new(
            title,
            url,
            None,
            ItemAction::new(move || print_line(&target, ending)),
        ));
    }
    debug!("read {} tabs", tabs.len());
    Ok(tabs)
}

fn real_main() -> Result<i32> {
    let opts = parse_args();
    let ending = opts.output_ending();

    //------------------------------------------------------------------------------
    // items
    let tabs = read_tabs(io::stdin().lock(), &opts.delimiter, ending)?;
    let commands = if opts.no_commands {
        Vec::new()
    } else {
        builtin_commands(move |url| print_line(url, ending))
    };

    //------------------------------------------------------------------------------
    // query and replayed actions
    let mut controller = Controller::new(tabs, commands, EventBus::new());
    controller.handle(Action::SetQuery(opts.query().to_string()))?;
    for action in opts.actions.iter().cloned() {
        controller.handle(action)?;
    }
    let accepted = controller.activations() > 0;

    //------------------------------------------------------------------------------
    // output
    let markers = opts.markers();
    let mut stdout = io::stdout().lock();
    if opts.select {
        if let Some(item) = controller.highlighted() {
            write!(stdout, "{}{}", render_item(item, &markers), ending)?;
        }
    } else if !accepted {
        for line in render_lines(controller.cursor(), &markers) {
            write!(stdout, "{line}{ending}")?;
        }
    }
    stdout.flush()?;

    Ok(if controller.cursor().is_empty() { 1 } else { 0 })
}
